use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    UnsupportedAsset = 101,
    DuplicateAsset = 102,
    DuplicateDelegator = 103,
    UnknownDelegator = 104,
    WeightOverflow = 105,
    AllocationIncomplete = 106,
}
