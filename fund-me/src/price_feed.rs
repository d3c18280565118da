use crate::{
    constants::{MAX_PRICE_AGE, USD_DECIMALS},
    errors::FundMeError,
    storage,
};
use sep_40_oracle::{Asset, PriceFeedClient};
use sep_41_token::TokenClient;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// The latest price of an asset reported by the price feed
#[derive(Clone, Debug, PartialEq)]
pub struct LatestPrice {
    pub price: i128,   // the price of one whole unit of the asset in the unit of account
    pub decimals: u32, // the decimals `price` is expressed in
}

/// Load the latest price of an asset from a SEP-40 price feed
///
/// ### Arguments
/// * `price_feed` - The address of the price feed
/// * `asset` - The address of the asset's token contract
///
/// ### Panics
/// If the price feed has no price for the asset, reports a price that is not positive,
/// or the price is stale
pub fn load_price(e: &Env, price_feed: &Address, asset: &Address) -> LatestPrice {
    let oracle_client = PriceFeedClient::new(e, price_feed);
    let decimals = oracle_client.decimals();
    let price_data = match oracle_client.lastprice(&Asset::Stellar(asset.clone())) {
        Some(price_data) => price_data,
        None => panic_with_error!(e, FundMeError::OracleUnavailableError),
    };
    if price_data.price <= 0 {
        log!(e, "price feed reported a non-positive price", price_data.price);
        panic_with_error!(e, FundMeError::OracleUnavailableError);
    }
    if price_data.timestamp.saturating_add(MAX_PRICE_AGE) < e.ledger().timestamp() {
        panic_with_error!(e, FundMeError::StalePriceError);
    }
    LatestPrice {
        price: price_data.price,
        decimals,
    }
}

/// Convert an amount of a token into the unit of account, rounding down
///
/// Returns None if the conversion overflows
///
/// ### Arguments
/// * `amount` - The amount of the token, expressed in the token's decimals
/// * `price` - The latest price of the token
/// * `token_decimals` - The decimals of the token
pub fn to_usd(amount: i128, price: &LatestPrice, token_decimals: u32) -> Option<i128> {
    let scale = i64::from(token_decimals) + i64::from(price.decimals) - i64::from(USD_DECIMALS);
    let factor = 10i128.checked_pow(u32::try_from(scale.unsigned_abs()).ok()?)?;
    if scale >= 0 {
        amount.fixed_mul_floor(price.price, factor)
    } else {
        amount.checked_mul(price.price)?.checked_mul(factor)
    }
}

/// Fetch the value of an amount of the contract's token in the unit of account at the
/// current price
///
/// ### Arguments
/// * `amount` - The amount of the token
///
/// ### Panics
/// If the price cannot be loaded or the conversion overflows
pub fn convert_to_usd(e: &Env, amount: i128) -> i128 {
    let token = storage::get_token(e);
    let price = load_price(e, &storage::get_price_feed(e), &token);
    let token_decimals = TokenClient::new(e, &token).decimals();
    to_usd(amount, &price, token_decimals)
        .unwrap_or_else(|| panic_with_error!(e, FundMeError::OverflowError))
}
