use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    UnsupportedAsset = 301,
    UnknownRequest = 302,
    NotYetClaimable = 303,
    AlreadyClaimed = 304,
    RequestCancelled = 305,
    RequestNotCancellable = 306,
    InsufficientBuffer = 307,
}
