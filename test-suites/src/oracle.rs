use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Symbol};

/// Decimals reported by the mock price feed
pub const DECIMALS: u32 = 8;
/// Units of account per native unit quoted by the mock price feed
pub const INITIAL_ANSWER: i128 = 2000;
/// Seconds between price updates of the mock price feed
pub const RESOLUTION: u32 = 300;

pub fn create_mock_oracle<'a>(e: &Env) -> (Address, MockPriceOracleClient<'a>) {
    let contract_id = e.register_contract_wasm(None, MockPriceOracleWASM);
    (
        contract_id.clone(),
        MockPriceOracleClient::new(e, &contract_id),
    )
}

/// Configure a mock price feed to quote `assets` in USD with `DECIMALS` decimals
pub fn list_assets(e: &Env, oracle: &MockPriceOracleClient, assets: &[&Address]) {
    let mut listed = vec![e];
    for asset in assets {
        listed.push_back(Asset::Stellar((*asset).clone()));
    }
    oracle.set_data(
        &Address::generate(e),
        &Asset::Other(Symbol::new(e, "USD")),
        &listed,
        &DECIMALS,
        &RESOLUTION,
    );
}

/// The mock price feed's initial answer scaled to `DECIMALS`
pub fn initial_price() -> i128 {
    INITIAL_ANSWER * 10i128.pow(DECIMALS)
}
