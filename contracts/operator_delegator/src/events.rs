use soroban_sdk::{Address, Env, Symbol};

pub struct OperatorDelegatorEvents {}

impl OperatorDelegatorEvents {
    /// Emitted when the delegator is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[restake_manager: Address, strategy_venue: Address]`
    pub fn initialize(env: &Env, admin: Address, restake_manager: Address, strategy_venue: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (restake_manager, strategy_venue));
    }

    /// Emitted when a strategy is mapped for an asset
    ///
    /// - topics - `["new_token_strategy", asset: Address]`
    /// - data - `[strategy: Address]`
    pub fn new_token_strategy(env: &Env, asset: Address, strategy: Address) {
        let topics = (Symbol::new(env, "new_token_strategy"), asset);
        env.events().publish(topics, strategy);
    }

    /// Emitted when collateral is forwarded into the strategy venue
    ///
    /// - topics - `["deposit", asset: Address]`
    /// - data - `[amount: i128]`
    pub fn deposit(env: &Env, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "deposit"), asset);
        env.events().publish(topics, amount);
    }

    /// Emitted when a divestment is initiated with the venue
    ///
    /// - topics - `["divest_initiated", asset: Address]`
    /// - data - `[divestment_id: u64, amount: i128]`
    pub fn divest_initiated(env: &Env, asset: Address, divestment_id: u64, amount: i128) {
        let topics = (Symbol::new(env, "divest_initiated"), asset);
        env.events().publish(topics, (divestment_id, amount));
    }

    /// Emitted when a divestment settles and the proceeds move to the
    /// withdraw buffer
    ///
    /// - topics - `["divest_confirmed", asset: Address]`
    /// - data - `[divestment_id: u64, amount: i128]`
    pub fn divest_confirmed(env: &Env, asset: Address, divestment_id: u64, amount: i128) {
        let topics = (Symbol::new(env, "divest_confirmed"), asset);
        env.events().publish(topics, (divestment_id, amount));
    }
}
