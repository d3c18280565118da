use fund_me::{FundMeClient, FundMeContract};
use soroban_sdk::{Address, Env};

pub fn create_fund_me<'a>(e: &Env) -> (Address, FundMeClient<'a>) {
    let contract_id = e.register_contract(None, FundMeContract {});
    (contract_id.clone(), FundMeClient::new(e, &contract_id))
}
