use soroban_sdk::{Address, Env, Symbol};

pub struct DepositQueueEvents {}

impl DepositQueueEvents {
    /// Emitted when the queue is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when collateral is staged in the queue
    ///
    /// - topics - `["deposit", asset: Address]`
    /// - data - `[from: Address, amount: i128]`
    pub fn deposit(env: &Env, asset: Address, from: Address, amount: i128) {
        let topics = (Symbol::new(env, "deposit"), asset);
        env.events().publish(topics, (from, amount));
    }

    /// Emitted when staged collateral is routed into restaking
    ///
    /// - topics - `["forward_to_restake_manager", asset: Address]`
    /// - data - `[amount: i128]`
    pub fn forward_to_restake_manager(env: &Env, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "forward_to_restake_manager"), asset);
        env.events().publish(topics, amount);
    }

    /// Emitted when staged collateral replenishes a withdraw buffer
    ///
    /// - topics - `["forward_to_withdraw_buffer", asset: Address]`
    /// - data - `[amount: i128]`
    pub fn forward_to_withdraw_buffer(env: &Env, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "forward_to_withdraw_buffer"), asset);
        env.events().publish(topics, amount);
    }
}
