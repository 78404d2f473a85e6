use normal::oracle::PriceRound;
use soroban_sdk::{Address, Env};

pub trait PriceOracleTrait {
    fn initialize(env: Env, admin: Address);

    /// Register (or replace) the aggregator feed for a collateral asset.
    fn set_price_feed(env: Env, sender: Address, asset: Address, feed: Address);

    fn price_feed(env: Env, asset: Address) -> Option<Address>;

    /// Latest validated round for the asset. Fails closed on unknown
    /// assets, non-positive answers and stale rounds.
    fn price(env: Env, asset: Address) -> PriceRound;

    /// Reference-unit value of `amount` base units of `asset`.
    fn lookup_token_value(env: Env, asset: Address, amount: i128) -> i128;

    /// Base-unit amount of `asset` worth `value` reference units.
    fn lookup_token_amount_from_value(env: Env, asset: Address, value: i128) -> i128;
}
