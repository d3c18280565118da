#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod hostile_token;
mod storage;

pub use hostile_token::*;
pub use storage::TokenMode;
