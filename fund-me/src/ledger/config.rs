use crate::{errors::FundMeError, storage};
use soroban_sdk::{panic_with_error, Address, Env};

/// Initialize the ledger
///
/// Panics if the ledger is already initialized or the arguments are invalid
pub fn execute_initialize(e: &Env, owner: &Address, price_feed: &Address, token: &Address) {
    if storage::has_owner(e) {
        panic_with_error!(e, FundMeError::AlreadyInitializedError);
    }

    let this = e.current_contract_address();
    if *price_feed == this || *token == this || price_feed == token {
        panic_with_error!(e, FundMeError::ConfigurationError);
    }

    storage::set_owner(e, owner);
    storage::set_price_feed(e, price_feed);
    storage::set_token(e, token);
}
