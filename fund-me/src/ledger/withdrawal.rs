use crate::{errors::FundMeError, storage};
use sep_41_token::TokenClient;
use soroban_sdk::{log, map, panic_with_error, Address, Env, Map};

/// Require that `caller` is the owner of the ledger
///
/// ### Panics
/// If `caller` is not the owner
pub fn require_owner(e: &Env, caller: &Address) {
    if *caller != storage::get_owner(e) {
        panic_with_error!(e, FundMeError::NotOwnerError);
    }
}

/// Withdraw every token held by the ledger to the owner
///
/// The funder list is read back from storage for each entry, and the balance of every
/// entry is cleared, including repeated entries.
///
/// Returns the amount transferred to the owner
///
/// ### Panics
/// If `caller` is not the owner or the transfer fails
pub fn execute_withdraw(e: &Env, caller: &Address) -> i128 {
    require_owner(e, caller);

    let funders_len = storage::get_funders(e).len();
    for index in 0..funders_len {
        let funder = storage::get_funders(e).get_unchecked(index);
        storage::set_balance(e, &funder, &0);
    }
    storage::del_funders(e);

    transfer_held_balance(e, caller)
}

/// Withdraw every token held by the ledger to the owner
///
/// The funder list is read once, and each distinct funder's balance is cleared once.
///
/// Returns the amount transferred to the owner
///
/// ### Panics
/// If `caller` is not the owner or the transfer fails
pub fn execute_cheaper_withdraw(e: &Env, caller: &Address) -> i128 {
    require_owner(e, caller);

    let funders = storage::get_funders(e);
    if !funders.is_empty() {
        let mut cleared: Map<Address, bool> = map![e];
        for funder in funders.iter() {
            if !cleared.contains_key(funder.clone()) {
                storage::del_balance(e, &funder);
                cleared.set(funder, true);
            }
        }
        storage::del_funders(e);
    }

    transfer_held_balance(e, caller)
}

/// Transfer the ledger's entire token balance to `to`. All accounting must be cleared
/// before this is called.
fn transfer_held_balance(e: &Env, to: &Address) -> i128 {
    let token_client = TokenClient::new(e, &storage::get_token(e));
    let this = e.current_contract_address();
    let amount = token_client.balance(&this);
    if amount > 0 {
        let result = token_client.try_transfer(&this, to, &amount);
        if !matches!(result, Ok(Ok(_))) {
            log!(e, "withdrawal transfer failed", amount);
            panic_with_error!(e, FundMeError::TransferFailedError);
        }
    }
    amount
}
