use crate::{constants::MINIMUM_USD, errors::FundMeError, ledger, price_feed, storage};
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env, Symbol};

/// ### Fund Me
///
/// A crowdfunding ledger. Anyone may contribute the native token as long as the contribution
/// is worth at least `MINIMUM_USD` at the current oracle price, and only the owner may
/// withdraw the contributions.
#[contract]
pub struct FundMeContract;

#[contractclient(name = "FundMeClient")]
pub trait FundMe {
    /// Initialize the ledger
    ///
    /// ### Arguments
    /// * `owner` - The Address allowed to withdraw contributions
    /// * `price_feed` - The contract address of the SEP-40 price feed quoting `token` in USD
    /// * `token` - The contract address of the native token contributions are made in
    ///
    /// ### Panics
    /// If the ledger is already initialized or the price feed or token address is unusable
    fn initialize(e: Env, owner: Address, price_feed: Address, token: Address);

    /********** Core **********/

    /// Contribute tokens from "from" to the ledger
    ///
    /// Returns the value of the contribution in USD (7 decimals)
    ///
    /// ### Arguments
    /// * `from` - The address contributing
    /// * `amount` - The amount of tokens to contribute
    ///
    /// ### Panics
    /// If the contribution is worth less than the minimum or the price feed is unavailable
    fn fund(e: Env, from: Address, amount: i128) -> i128;

    /// (Owner only) Withdraw every token held by the ledger to the owner and reset all
    /// contributions
    ///
    /// Returns the amount of tokens withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address withdrawing
    ///
    /// ### Panics
    /// If the caller is not the owner or the transfer fails
    fn withdraw(e: Env, caller: Address) -> i128;

    /// (Owner only) Withdraw every token held by the ledger to the owner and reset all
    /// contributions, touching each storage entry at most once
    ///
    /// Returns the amount of tokens withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address withdrawing
    ///
    /// ### Panics
    /// If the caller is not the owner or the transfer fails
    fn cheaper_withdraw(e: Env, caller: Address) -> i128;

    /********** Getters **********/

    /// Fetch the owner of the ledger
    fn get_owner(e: Env) -> Address;

    /// Fetch the price feed of the ledger
    fn get_price_feed(e: Env) -> Address;

    /// Fetch the token contributions are made in
    fn get_token(e: Env) -> Address;

    /// Fetch the funder at `index` in the list of funders
    ///
    /// ### Arguments
    /// * `index` - The position in the list of funders
    ///
    /// ### Panics
    /// If `index` is out of range
    fn get_funder(e: Env, index: u32) -> Address;

    /// Fetch the number of entries in the list of funders
    fn get_funders_len(e: Env) -> u32;

    /// Fetch the amount of tokens contributed by `funder` since the last withdrawal
    ///
    /// ### Arguments
    /// * `funder` - The address of the funder
    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128;

    /// Fetch the value of `amount` tokens in USD (7 decimals) at the current price
    ///
    /// ### Arguments
    /// * `amount` - The amount of tokens
    ///
    /// ### Panics
    /// If the price feed is unavailable
    fn get_conversion_rate(e: Env, amount: i128) -> i128;

    /// Fetch the minimum value of a contribution in USD (7 decimals)
    fn get_minimum_usd(e: Env) -> i128;
}

/// @dev
/// The contract implementation only manages the authorization / authentication required from the caller(s), and
/// utilizes other modules to carry out contract functionality.
#[contractimpl]
impl FundMe for FundMeContract {
    fn initialize(e: Env, owner: Address, price_feed: Address, token: Address) {
        storage::extend_instance(&e);
        owner.require_auth();

        ledger::execute_initialize(&e, &owner, &price_feed, &token);

        e.events()
            .publish((Symbol::new(&e, "init"), owner), (price_feed, token));
    }

    /********** Core **********/

    fn fund(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        let value = ledger::execute_fund(&e, &from, amount);

        e.events()
            .publish((Symbol::new(&e, "fund"), from), (amount, value));
        value
    }

    fn withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    fn cheaper_withdraw(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_cheaper_withdraw(&e, &caller);

        e.events()
            .publish((Symbol::new(&e, "withdraw"), caller), amount);
        amount
    }

    /********** Getters **********/

    fn get_owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn get_price_feed(e: Env) -> Address {
        storage::get_price_feed(&e)
    }

    fn get_token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn get_funder(e: Env, index: u32) -> Address {
        match storage::get_funders(&e).get(index) {
            Some(funder) => funder,
            None => panic_with_error!(&e, FundMeError::IndexOutOfRangeError),
        }
    }

    fn get_funders_len(e: Env) -> u32 {
        storage::get_funders(&e).len()
    }

    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128 {
        storage::get_balance(&e, &funder)
    }

    fn get_conversion_rate(e: Env, amount: i128) -> i128 {
        require_nonnegative(&e, amount);
        price_feed::convert_to_usd(&e, amount)
    }

    fn get_minimum_usd(_e: Env) -> i128 {
        MINIMUM_USD
    }
}

/// Require that an incoming amount is not negative
///
/// ### Arguments
/// * `amount` - The amount
///
/// ### Panics
/// If the number is negative
pub fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, FundMeError::NegativeAmountError);
    }
}
