use soroban_sdk::contracterror;

/// Failures shared across the restaking contracts. Domain specific codes
/// live in each contract's `errors.rs`; everything here is either a
/// lifecycle, arithmetic or oracle condition that more than one contract
/// can hit.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    AdminNotSet = 3,
    InvalidAmount = 4,
    MathError = 5,
    CastingFailure = 6,
    OracleUnknownAsset = 7,
    OracleNonPositive = 8,
    OracleStale = 9,
}

pub type NormalResult<T> = Result<T, ErrorCode>;
