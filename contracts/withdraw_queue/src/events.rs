use soroban_sdk::{Address, Env, Symbol};

pub struct WithdrawQueueEvents {}

impl WithdrawQueueEvents {
    /// Emitted when the queue is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[cooldown_period: u64]`
    pub fn initialize(env: &Env, admin: Address, cooldown_period: u64) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, cooldown_period);
    }

    /// Emitted when a buffer target is set for an asset
    ///
    /// - topics - `["new_buffer_target", asset: Address]`
    /// - data - `[target: i128]`
    pub fn new_buffer_target(env: &Env, asset: Address, target: i128) {
        let topics = (Symbol::new(env, "new_buffer_target"), asset);
        env.events().publish(topics, target);
    }

    /// Emitted when a user requests a withdrawal
    ///
    /// - topics - `["withdraw_request", requester: Address]`
    /// - data - `[request_id: u64, asset: Address, asset_amount: i128, share_amount: i128]`
    pub fn withdraw_request(
        env: &Env,
        requester: Address,
        request_id: u64,
        asset: Address,
        asset_amount: i128,
        share_amount: i128,
    ) {
        let topics = (Symbol::new(env, "withdraw_request"), requester);
        env.events()
            .publish(topics, (request_id, asset, asset_amount, share_amount));
    }

    /// Emitted when a matured request is paid out
    ///
    /// - topics - `["claim", requester: Address]`
    /// - data - `[request_id: u64, asset: Address, asset_amount: i128]`
    pub fn claim(env: &Env, requester: Address, request_id: u64, asset: Address, asset_amount: i128) {
        let topics = (Symbol::new(env, "claim"), requester);
        env.events().publish(topics, (request_id, asset, asset_amount));
    }

    /// Emitted when a pending request is cancelled and shares re-minted
    ///
    /// - topics - `["cancel", requester: Address]`
    /// - data - `[request_id: u64, share_amount: i128]`
    pub fn cancel(env: &Env, requester: Address, request_id: u64, share_amount: i128) {
        let topics = (Symbol::new(env, "cancel"), requester);
        env.events().publish(topics, (request_id, share_amount));
    }

    /// Emitted when liquidity is moved into a buffer
    ///
    /// - topics - `["buffer_fill", asset: Address]`
    /// - data - `[from: Address, amount: i128, balance: i128]`
    pub fn buffer_fill(env: &Env, asset: Address, from: Address, amount: i128, balance: i128) {
        let topics = (Symbol::new(env, "buffer_fill"), asset);
        env.events().publish(topics, (from, amount, balance));
    }
}
