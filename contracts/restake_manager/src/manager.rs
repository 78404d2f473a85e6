use soroban_sdk::{Address, Env, Vec};

use crate::storage::CollateralConfig;

pub trait RestakeManagerTrait {
    fn initialize(
        env: Env,
        admin: Address,
        share_token: Address,
        price_oracle: Address,
        deposit_queue: Address,
        withdraw_queue: Address,
    );

    /// Register a collateral asset. Assets are permanent; use
    /// `set_collateral_enabled` to retire one from new deposits.
    fn add_collateral_token(env: Env, sender: Address, asset: Address);

    fn set_collateral_enabled(env: Env, sender: Address, asset: Address, enabled: bool);

    fn collateral_tokens(env: Env) -> Vec<Address>;

    fn collateral_config(env: Env, asset: Address) -> CollateralConfig;

    /// Add a delegator with a target weight. The sum of active weights
    /// may never exceed 100%.
    fn add_operator_delegator(env: Env, sender: Address, delegator: Address, weight_bps: i64);

    fn set_operator_delegator_allocation(
        env: Env,
        sender: Address,
        delegator: Address,
        weight_bps: i64,
    );

    fn operator_delegators(env: Env) -> Vec<Address>;

    fn delegator_allocation(env: Env, delegator: Address) -> i64;

    /// Protocol TVL in reference units: delegator holdings plus the
    /// withdraw queue's buffers, all priced within this invocation.
    fn total_value(env: Env) -> i128;

    /// TVL held by the operator delegators only.
    fn delegators_value(env: Env) -> i128;

    /// Reference units per share, scaled by `PRICE_PRECISION`; 1.0 while
    /// no shares are outstanding.
    fn share_price(env: Env) -> i128;

    /// Route a deposit to the most under-allocated delegator and mint
    /// shares at the pre-deposit price. Returns the chosen delegator and
    /// the shares minted.
    fn deposit(env: Env, sender: Address, asset: Address, amount: i128) -> (Address, i128);

    /// Route staged collateral from the deposit queue. No shares mint;
    /// the value accrues to existing holders.
    fn deposit_from_queue(env: Env, asset: Address, amount: i128);
}
