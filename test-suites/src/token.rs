use soroban_sdk::{
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

/// Deploy a Stellar asset contract standing in for the native token
pub fn create_native_token<'a>(
    e: &Env,
    admin: &Address,
) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let contract_id = e.register_stellar_asset_contract(admin.clone());
    (
        TokenClient::new(e, &contract_id),
        StellarAssetClient::new(e, &contract_id),
    )
}
