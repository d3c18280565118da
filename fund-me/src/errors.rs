use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the fund me contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Fund me specific errors start at 1300.
pub enum FundMeError {
    // Common Errors
    AlreadyInitializedError = 3,

    NegativeAmountError = 8,
    OverflowError = 12,

    // Ledger Errors (start at 1300)
    ConfigurationError = 1300,
    InsufficientContributionError = 1301,
    NotOwnerError = 1302,
    IndexOutOfRangeError = 1303,
    TransferFailedError = 1304,

    // Oracle Errors
    OracleUnavailableError = 1305,
    StalePriceError = 1306,
}
