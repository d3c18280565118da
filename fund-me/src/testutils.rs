#![cfg(test)]

use crate::{storage, FundMeContract};
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token::StellarAssetClient,
    vec, Address, Env, Symbol,
};

pub(crate) fn create_fund_me(e: &Env) -> Address {
    e.register_contract(None, FundMeContract {})
}

pub(crate) fn set_ledger(e: &Env, timestamp: u64) {
    e.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 20,
        sequence_number: 1234,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}

//************************************************
//           External Contract Helpers
//************************************************

// ***** Token *****

pub(crate) fn create_native_token<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, StellarAssetClient<'a>) {
    let contract_address = e.register_stellar_asset_contract(admin.clone());
    (
        contract_address.clone(),
        StellarAssetClient::new(e, &contract_address),
    )
}

//***** Oracle ******

/// Create a mock price feed quoting `asset` in USD with 8 decimals
pub(crate) fn create_mock_oracle<'a>(
    e: &Env,
    asset: &Address,
    price: i128,
) -> (Address, MockPriceOracleClient<'a>) {
    let contract_address = e.register_contract_wasm(None, MockPriceOracleWASM);
    let client = MockPriceOracleClient::new(e, &contract_address);
    client.set_data(
        &Address::generate(e),
        &Asset::Other(Symbol::new(e, "USD")),
        &vec![e, Asset::Stellar(asset.clone())],
        &8,
        &300,
    );
    client.set_price_stable(&vec![e, price]);
    (contract_address, client)
}

//***** Fund Me ******

/// Setup a fund me contract owned by `owner` with a native token and a price feed
/// quoting the token at `price` (8 decimals)
pub(crate) fn setup_fund_me<'a>(
    e: &Env,
    owner: &Address,
    price: i128,
) -> (Address, StellarAssetClient<'a>, MockPriceOracleClient<'a>) {
    let fund_me = create_fund_me(e);
    let (token, token_client) = create_native_token(e, &Address::generate(e));
    let (oracle, oracle_client) = create_mock_oracle(e, &token, price);
    e.as_contract(&fund_me, || {
        storage::set_owner(e, owner);
        storage::set_price_feed(e, &oracle);
        storage::set_token(e, &token);
    });
    (fund_me, token_client, oracle_client)
}
