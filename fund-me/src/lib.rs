#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod constants;
mod contract;
mod errors;
mod ledger;
mod price_feed;
mod storage;
mod testutils;

pub use constants::{MAX_PRICE_AGE, MINIMUM_USD};
pub use contract::*;
pub use errors::FundMeError;
