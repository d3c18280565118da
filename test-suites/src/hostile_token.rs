use mock_hostile_token::{MockHostileToken, MockHostileTokenClient};
use soroban_sdk::{Address, Env};

pub fn create_hostile_token<'a>(e: &Env) -> (Address, MockHostileTokenClient<'a>) {
    let contract_id = e.register_contract(None, MockHostileToken {});
    (
        contract_id.clone(),
        MockHostileTokenClient::new(e, &contract_id),
    )
}
