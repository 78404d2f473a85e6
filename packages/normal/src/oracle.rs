use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contractclient, contracttype, Env};

use crate::constants::{MAX_PRICE_AGE, PRICE_PRECISION};
use crate::error::{ErrorCode, NormalResult};

/// One round of price data as reported by an aggregator feed.
///
/// `answer` is the reference-unit value of one base unit of the asset,
/// scaled by `PRICE_PRECISION`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceRound {
    pub round_id: u64,
    pub answer: i128,
    pub updated_at: u64,
}

/// External aggregator feed contract, one per collateral asset.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_round_data(env: Env) -> PriceRound;
}

/// Reject non-positive and stale rounds. Valuation is fail-closed: a
/// suspect price blocks the operation rather than flowing into share math.
pub fn validate_price_round(round: &PriceRound, now: u64) -> NormalResult<()> {
    if round.answer <= 0 {
        return Err(ErrorCode::OracleNonPositive);
    }
    if now.saturating_sub(round.updated_at) > MAX_PRICE_AGE {
        return Err(ErrorCode::OracleStale);
    }
    Ok(())
}

/// Reference-unit value of `amount` base units priced at `price`, floored.
pub fn token_value(env: &Env, amount: i128, price: i128) -> NormalResult<i128> {
    if amount < 0 {
        return Err(ErrorCode::InvalidAmount);
    }
    amount
        .fixed_mul_floor(price, PRICE_PRECISION)
        .ok_or_else(|| {
            soroban_sdk::log!(env, "Oracle: token value overflow");
            ErrorCode::MathError
        })
}

/// Base-unit amount worth `value` reference units at `price`, floored.
pub fn token_amount_from_value(env: &Env, value: i128, price: i128) -> NormalResult<i128> {
    if value < 0 {
        return Err(ErrorCode::InvalidAmount);
    }
    value.fixed_div_floor(price, PRICE_PRECISION).ok_or_else(|| {
        soroban_sdk::log!(env, "Oracle: token amount overflow");
        ErrorCode::MathError
    })
}
