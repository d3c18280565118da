use soroban_sdk::Address;

use crate::test_fixture::TestFixture;

/// Amount of native token sent by the fund script (0.1 native units)
pub const SEND_VALUE: i128 = 0_1000000;

/// Contribute `SEND_VALUE` from `from`
///
/// Returns the value of the contribution
pub fn fund(fixture: &TestFixture, from: &Address) -> i128 {
    let value = fixture.fund_me.fund(from, &SEND_VALUE);
    std::println!("Funded {} native units worth {}", SEND_VALUE, value);
    value
}

/// Withdraw everything held by the ledger as the owner
///
/// Returns the amount withdrawn
pub fn withdraw(fixture: &TestFixture) -> i128 {
    let amount = fixture.fund_me.withdraw(&fixture.bombadil);
    std::println!("Withdrew {} native units", amount);
    amount
}
