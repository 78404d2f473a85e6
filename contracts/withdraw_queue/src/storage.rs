use normal::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    State,
    BufferAssets,
    Buffer(Address),
    Request(u64),
    UserRequests(Address),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub restake_manager: Address,
    pub share_token: Address,
    pub price_oracle: Address,
    /// Seconds between a withdraw request and claim eligibility.
    pub cooldown_period: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub next_request_id: u64,
}

/// Initialization shape for a per-asset buffer entry.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferInit {
    pub asset: Address,
    pub target: i128,
}

/// Liquid reserve held outside the operator delegators so that matured
/// claims settle without waiting on venue divestment.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawBuffer {
    pub target: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RequestStatus {
    Pending = 0,
    Claimed = 1,
    Cancelled = 2,
}

/// A redemption in flight. Claimability is derived from `created_at`
/// and the configured cooldown rather than stored.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub requester: Address,
    pub asset: Address,
    pub asset_amount: i128,
    pub share_amount: i128,
    pub created_at: u64,
    pub status: RequestStatus,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn get_state(env: &Env) -> State {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .unwrap_or(State { next_request_id: 1 })
}

pub fn save_state(env: &Env, state: &State) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage().persistent().extend_ttl(
        &DataKey::State,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_buffer_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::BufferAssets)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_buffer_assets(env: &Env, assets: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::BufferAssets, assets);
    env.storage().persistent().extend_ttl(
        &DataKey::BufferAssets,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_buffer(env: &Env, asset: &Address) -> Option<WithdrawBuffer> {
    let key = DataKey::Buffer(asset.clone());
    let buffer = env.storage().persistent().get(&key);
    if buffer.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    buffer
}

pub fn save_buffer(env: &Env, asset: &Address, buffer: &WithdrawBuffer) {
    let key = DataKey::Buffer(asset.clone());
    env.storage().persistent().set(&key, buffer);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_request(env: &Env, id: u64) -> Option<WithdrawRequest> {
    env.storage().persistent().get(&DataKey::Request(id))
}

pub fn save_request(env: &Env, id: u64, request: &WithdrawRequest) {
    let key = DataKey::Request(id);
    env.storage().persistent().set(&key, request);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_user_requests(env: &Env, user: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::UserRequests(user.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_user_requests(env: &Env, user: &Address, requests: &Vec<u64>) {
    let key = DataKey::UserRequests(user.clone());
    env.storage().persistent().set(&key, requests);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    env.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
