use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, vec, Address, Env, IntoVal, Symbol, TryFromVal, Val,
    Vec,
};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

pub(crate) const LEDGER_THRESHOLD_USER: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_USER: u32 = 535670; // ~ 31 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const PRICE_FEED_KEY: &str = "PriceFd";
const TOKEN_KEY: &str = "Token";
const FUNDERS_KEY: &str = "Funders";

#[derive(Clone)]
#[contracttype]
pub enum FundMeDataKey {
    // The amount of the native token funded by an address
    Balance(Address),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/********** Configuration **********/

/// Fetch the owner of the contract
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner of the contract
///
/// ### Arguments
/// * `owner` - The address allowed to withdraw
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Checks if an owner has been set
pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, OWNER_KEY))
}

/// Fetch the price feed address
pub fn get_price_feed(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY))
        .unwrap_optimized()
}

/// Set the price feed address
///
/// ### Arguments
/// * `price_feed` - The address of the SEP-40 price feed
pub fn set_price_feed(e: &Env, price_feed: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY), price_feed);
}

/// Fetch the address of the token contributions are made in
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the address of the token contributions are made in
///
/// ### Arguments
/// * `token` - The address of the native token contract
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/********** Balances **********/

/// Fetch the amount funded by an address, or 0 if the address has not funded
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn get_balance(e: &Env, funder: &Address) -> i128 {
    let key = FundMeDataKey::Balance(funder.clone());
    get_persistent_default(e, &key, 0i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set the amount funded by an address. A zero balance removes the entry.
///
/// ### Arguments
/// * `funder` - The address of the funder
/// * `amount` - The amount funded
pub fn set_balance(e: &Env, funder: &Address, amount: &i128) {
    let key = FundMeDataKey::Balance(funder.clone());
    if *amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage()
        .persistent()
        .set::<FundMeDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Remove the balance entry for an address
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn del_balance(e: &Env, funder: &Address) {
    let key = FundMeDataKey::Balance(funder.clone());
    e.storage().persistent().remove(&key);
}

/********** Funders **********/

/// Fetch the ordered list of funders. An address appears once per accepted contribution.
pub fn get_funders(e: &Env) -> Vec<Address> {
    get_persistent_default(
        e,
        &Symbol::new(e, FUNDERS_KEY),
        vec![e],
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

/// Append a funder to the end of the list of funders
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn push_funder(e: &Env, funder: &Address) {
    let key = Symbol::new(e, FUNDERS_KEY);
    let mut funders = get_funders(e);
    funders.push_back(funder.clone());
    e.storage()
        .persistent()
        .set::<Symbol, Vec<Address>>(&key, &funders);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Remove every entry from the list of funders
pub fn del_funders(e: &Env) {
    e.storage()
        .persistent()
        .remove(&Symbol::new(e, FUNDERS_KEY));
}
