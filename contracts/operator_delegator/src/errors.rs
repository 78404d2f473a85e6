use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    StrategyNotConfigured = 201,
    InsufficientHoldings = 202,
    UnknownDivestment = 203,
}
