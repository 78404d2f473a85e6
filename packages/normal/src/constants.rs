/// Fixed-point scale shared by oracle prices, share prices and all
/// valuation arithmetic. Prices quote the reference-unit value of one
/// base unit of an asset, scaled by 10^18.
pub const PRICE_PRECISION: i128 = 1_000_000_000_000_000_000;

/// Allocation weights are expressed in basis points; active weights must
/// sum to exactly this once configuration is finalized.
pub const TOTAL_BASIS_POINTS: i64 = 10_000;

/// Oracle rounds older than this are rejected outright. One day for the
/// slowest observed feed heartbeat, plus a one minute grace window.
pub const MAX_PRICE_AGE: u64 = 86_400 + 60;

pub const ONE_DAY: u64 = 86_400;
pub const ONE_WEEK: u64 = 604_800;

// Storage TTL bumps, in ledgers (~5s each).
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
