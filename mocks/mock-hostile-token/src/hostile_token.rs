use fund_me::FundMeClient;
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

use crate::storage::{self, TokenMode};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HostileTokenError {
    TransferRejected = 1,
    BalanceError = 2,
}

/// ### Mock Hostile Token
///
/// Minimal token that can refuse transfers or call back into a fund me contract
/// while a withdrawal transfer is in flight.
///
/// ### Dev
/// For testing purposes only!
#[contract]
pub struct MockHostileToken;

#[contractimpl]
impl MockHostileToken {
    /// Set how transfers behave
    pub fn set_mode(e: Env, mode: TokenMode) {
        storage::extend_instance(&e);
        storage::set_mode(&e, &mode);
    }

    /// Set the fund me contract to call back into
    pub fn set_target(e: Env, target: Address) {
        storage::extend_instance(&e);
        storage::set_target(&e, &target);
    }

    /// Number of times a transfer tried to withdraw from the target again
    pub fn attempts(e: Env) -> u32 {
        storage::get_attempts(&e)
    }

    /// Number of nested withdrawals that succeeded
    pub fn successes(e: Env) -> u32 {
        storage::get_successes(&e)
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        storage::extend_instance(&e);
        if amount < 0 {
            panic_with_error!(&e, HostileTokenError::BalanceError);
        }
        let balance = storage::get_balance(&e, &to);
        storage::set_balance(&e, &to, balance + amount);
    }

    pub fn decimals(_e: Env) -> u32 {
        7
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        storage::get_balance(&e, &id)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        match storage::get_mode(&e) {
            TokenMode::Honest => {}
            TokenMode::Reject => panic_with_error!(&e, HostileTokenError::TransferRejected),
            TokenMode::Reenter => {
                if let Some(target) = storage::get_target(&e) {
                    if from == target {
                        storage::set_attempts(&e, storage::get_attempts(&e) + 1);
                        let result = FundMeClient::new(&e, &target).try_withdraw(&to);
                        if result.is_ok() {
                            storage::set_successes(&e, storage::get_successes(&e) + 1);
                        }
                    }
                }
            }
        }

        let from_balance = storage::get_balance(&e, &from);
        if amount < 0 || from_balance < amount {
            panic_with_error!(&e, HostileTokenError::BalanceError);
        }
        storage::set_balance(&e, &from, from_balance - amount);
        let to_balance = storage::get_balance(&e, &to);
        storage::set_balance(&e, &to, to_balance + amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_honest_transfer() {
        let e = Env::default();
        e.mock_all_auths();

        let token = e.register_contract(None, MockHostileToken {});
        let client = MockHostileTokenClient::new(&e, &token);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        client.mint(&samwise, &10_0000000);
        client.transfer(&samwise, &frodo, &4_0000000);
        assert_eq!(client.balance(&samwise), 6_0000000);
        assert_eq!(client.balance(&frodo), 4_0000000);
        assert_eq!(client.decimals(), 7);
    }

    #[test]
    fn test_rejecting_transfer() {
        let e = Env::default();
        e.mock_all_auths();

        let token = e.register_contract(None, MockHostileToken {});
        let client = MockHostileTokenClient::new(&e, &token);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        client.mint(&samwise, &10_0000000);
        client.set_mode(&TokenMode::Reject);
        let result = client.try_transfer(&samwise, &frodo, &4_0000000);
        assert_eq!(
            result.err(),
            Some(Ok(soroban_sdk::Error::from_contract_error(1)))
        );
        assert_eq!(client.balance(&samwise), 10_0000000);
        assert_eq!(client.balance(&frodo), 0);
    }
}
