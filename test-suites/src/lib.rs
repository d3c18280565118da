#![no_std]

extern crate std;

pub mod fund_me;
pub mod hostile_token;
pub mod oracle;
pub mod scripts;
pub mod test_fixture;
pub mod token;
