/// The number of decimals the unit of account (USD) is expressed in
pub const USD_DECIMALS: u32 = 7;

/// The minimum value of a contribution, in the unit of account (50 USD)
pub const MINIMUM_USD: i128 = 50_0000000;

/// The maximum age in seconds of an oracle price before it is considered stale (24 hours)
pub const MAX_PRICE_AGE: u64 = 24 * 60 * 60;
