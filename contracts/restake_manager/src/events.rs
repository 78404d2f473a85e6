use soroban_sdk::{Address, Env, Symbol};

pub struct RestakeManagerEvents {}

impl RestakeManagerEvents {
    /// Emitted when the manager is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[share_token: Address]`
    pub fn initialize(env: &Env, admin: Address, share_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, share_token);
    }

    /// Emitted when a collateral asset is registered
    ///
    /// - topics - `["new_collateral_token", asset: Address]`
    /// - data - `[decimals: u32]`
    pub fn new_collateral_token(env: &Env, asset: Address, decimals: u32) {
        let topics = (Symbol::new(env, "new_collateral_token"), asset);
        env.events().publish(topics, decimals);
    }

    /// Emitted when an asset is enabled or disabled for new deposits
    ///
    /// - topics - `["collateral_enabled", asset: Address]`
    /// - data - `[enabled: bool]`
    pub fn collateral_enabled(env: &Env, asset: Address, enabled: bool) {
        let topics = (Symbol::new(env, "collateral_enabled"), asset);
        env.events().publish(topics, enabled);
    }

    /// Emitted when an operator delegator joins the allocation set
    ///
    /// - topics - `["new_operator_delegator", delegator: Address]`
    /// - data - `[weight_bps: i64]`
    pub fn new_operator_delegator(env: &Env, delegator: Address, weight_bps: i64) {
        let topics = (Symbol::new(env, "new_operator_delegator"), delegator);
        env.events().publish(topics, weight_bps);
    }

    /// Emitted when a delegator's target weight changes
    ///
    /// - topics - `["new_allocation", delegator: Address]`
    /// - data - `[weight_bps: i64]`
    pub fn new_allocation(env: &Env, delegator: Address, weight_bps: i64) {
        let topics = (Symbol::new(env, "new_allocation"), delegator);
        env.events().publish(topics, weight_bps);
    }

    /// Emitted when a user deposit is routed and shares mint
    ///
    /// - topics - `["deposit", sender: Address]`
    /// - data - `[asset: Address, amount: i128, shares: i128, delegator: Address]`
    pub fn deposit(
        env: &Env,
        sender: Address,
        asset: Address,
        amount: i128,
        shares: i128,
        delegator: Address,
    ) {
        let topics = (Symbol::new(env, "deposit"), sender);
        env.events().publish(topics, (asset, amount, shares, delegator));
    }

    /// Emitted when staged collateral from the deposit queue is routed
    /// without minting
    ///
    /// - topics - `["queue_deposit", asset: Address]`
    /// - data - `[amount: i128, delegator: Address]`
    pub fn queue_deposit(env: &Env, asset: Address, amount: i128, delegator: Address) {
        let topics = (Symbol::new(env, "queue_deposit"), asset);
        env.events().publish(topics, (amount, delegator));
    }
}
