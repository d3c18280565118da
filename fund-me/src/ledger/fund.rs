use crate::{
    constants::MINIMUM_USD, contract::require_nonnegative, errors::FundMeError, price_feed,
    storage,
};
use sep_41_token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Perform a contribution of `amount` native tokens from `from`
///
/// Returns the value of the contribution in the unit of account
///
/// ### Panics
/// If the amount is negative, its value is below the minimum contribution, or the
/// price cannot be loaded
pub fn execute_fund(e: &Env, from: &Address, amount: i128) -> i128 {
    require_nonnegative(e, amount);

    let value = price_feed::convert_to_usd(e, amount);
    if value < MINIMUM_USD {
        log!(e, "contribution below minimum", value, MINIMUM_USD);
        panic_with_error!(e, FundMeError::InsufficientContributionError);
    }

    let balance = storage::get_balance(e, from)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, FundMeError::OverflowError));
    storage::set_balance(e, from, &balance);
    storage::push_funder(e, from);

    let token_client = TokenClient::new(e, &storage::get_token(e));
    token_client.transfer(from, &e.current_contract_address(), &amount);

    value
}

#[cfg(test)]
mod tests {
    use crate::testutils::{set_ledger, setup_fund_me};

    use super::*;
    use soroban_sdk::{testutils::Address as _, token::TokenClient as TestTokenClient, vec};

    #[test]
    fn test_execute_fund() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 2000_00000000);
        token_client.mint(&samwise, &10_0000000);

        e.as_contract(&fund_me, || {
            let value = execute_fund(&e, &samwise, 3_0000000);
            assert_eq!(value, 6000_0000000);

            assert_eq!(storage::get_balance(&e, &samwise), 3_0000000);
            assert_eq!(storage::get_funders(&e), vec![&e, samwise.clone()]);
        });

        let token = TestTokenClient::new(&e, &token_client.address);
        assert_eq!(token.balance(&samwise), 7_0000000);
        assert_eq!(token.balance(&fund_me), 3_0000000);
    }

    #[test]
    fn test_execute_fund_twice_appends_funder_again() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 2000_00000000);
        token_client.mint(&samwise, &10_0000000);
        token_client.mint(&frodo, &10_0000000);

        e.as_contract(&fund_me, || {
            execute_fund(&e, &samwise, 1_0000000);
            execute_fund(&e, &frodo, 0_5000000);
            execute_fund(&e, &samwise, 2_0000000);

            assert_eq!(storage::get_balance(&e, &samwise), 3_0000000);
            assert_eq!(storage::get_balance(&e, &frodo), 0_5000000);
            assert_eq!(
                storage::get_funders(&e),
                vec![&e, samwise.clone(), frodo.clone(), samwise.clone()]
            );
        });
    }

    #[test]
    fn test_execute_fund_at_minimum() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 2000_00000000);
        token_client.mint(&samwise, &10_0000000);

        e.as_contract(&fund_me, || {
            // 0.025 tokens at 2000 USD is exactly 50 USD
            let value = execute_fund(&e, &samwise, 0_0250000);
            assert_eq!(value, MINIMUM_USD);
            assert_eq!(storage::get_balance(&e, &samwise), 0_0250000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1301)")]
    fn test_execute_fund_below_minimum() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 2000_00000000);
        token_client.mint(&samwise, &10_0000000);

        e.as_contract(&fund_me, || {
            // one stroop short of 50 USD
            execute_fund(&e, &samwise, 0_0249999);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1301)")]
    fn test_execute_fund_zero() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, _, _) = setup_fund_me(&e, &bombadil, 2000_00000000);

        e.as_contract(&fund_me, || {
            execute_fund(&e, &samwise, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #8)")]
    fn test_execute_fund_negative() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, _, _) = setup_fund_me(&e, &bombadil, 2000_00000000);

        e.as_contract(&fund_me, || {
            execute_fund(&e, &samwise, -1_0000000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1305)")]
    fn test_execute_fund_zero_price() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 0);
        token_client.mint(&samwise, &10_0000000);

        e.as_contract(&fund_me, || {
            execute_fund(&e, &samwise, 1_0000000);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #12)")]
    fn test_execute_fund_balance_overflow() {
        let e = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        set_ledger(&e, 1_700_000_000);

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (fund_me, token_client, _) = setup_fund_me(&e, &bombadil, 2000_00000000);
        token_client.mint(&samwise, &10_0000000);

        e.as_contract(&fund_me, || {
            storage::set_balance(&e, &samwise, &(i128::MAX - 1));
            execute_fund(&e, &samwise, 1_0000000);
        });
    }
}
