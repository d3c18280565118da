use soroban_sdk::{contracttype, Address, Env, Symbol};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

const MODE_KEY: &str = "Mode";
const TARGET_KEY: &str = "Target";
const ATTEMPTS_KEY: &str = "Attempts";
const SUCCESSES_KEY: &str = "Success";

/// How the token behaves when asked to move funds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum TokenMode {
    /// Transfers behave like a regular token
    Honest,
    /// Every transfer fails
    Reject,
    /// Transfers out of the target try to withdraw from the target again
    Reenter,
}

#[derive(Clone)]
#[contracttype]
pub enum HostileTokenDataKey {
    Balance(Address),
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn get_mode(e: &Env) -> TokenMode {
    e.storage()
        .instance()
        .get::<Symbol, TokenMode>(&Symbol::new(e, MODE_KEY))
        .unwrap_or(TokenMode::Honest)
}

pub fn set_mode(e: &Env, mode: &TokenMode) {
    e.storage()
        .instance()
        .set::<Symbol, TokenMode>(&Symbol::new(e, MODE_KEY), mode);
}

pub fn get_target(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TARGET_KEY))
}

pub fn set_target(e: &Env, target: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TARGET_KEY), target);
}

pub fn get_attempts(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, ATTEMPTS_KEY))
        .unwrap_or(0)
}

pub fn set_attempts(e: &Env, attempts: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, ATTEMPTS_KEY), &attempts);
}

pub fn get_successes(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, SUCCESSES_KEY))
        .unwrap_or(0)
}

pub fn set_successes(e: &Env, successes: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, SUCCESSES_KEY), &successes);
}

pub fn get_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<HostileTokenDataKey, i128>(&HostileTokenDataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(e: &Env, id: &Address, amount: i128) {
    let key = HostileTokenDataKey::Balance(id.clone());
    e.storage()
        .persistent()
        .set::<HostileTokenDataKey, i128>(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
