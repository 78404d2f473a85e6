use normal::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    State,
    Strategy(Address),
    Holding(Address),
    PendingTotal(Address),
    Divestment(u64),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub restake_manager: Address,
    pub strategy_venue: Address,
    pub withdraw_queue: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub next_divestment_id: u64,
}

/// A withdrawal initiated with the strategy venue but not yet settled.
/// The tracked holding still includes `amount` until confirmation.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDivestment {
    pub asset: Address,
    pub amount: i128,
    pub venue_pending_id: u64,
    pub initiated_at: u64,
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
        .unwrap_or(State {
            next_divestment_id: 1,
        })
}

pub fn save_state(env: &Env, state: &State) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage().persistent().extend_ttl(
        &DataKey::State,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_strategy(env: &Env, asset: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Strategy(asset.clone()))
}

pub fn save_strategy(env: &Env, asset: &Address, strategy: &Address) {
    let key = DataKey::Strategy(asset.clone());
    env.storage().persistent().set(&key, strategy);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_holding(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Holding(asset.clone()))
        .unwrap_or(0)
}

pub fn save_holding(env: &Env, asset: &Address, amount: i128) {
    let key = DataKey::Holding(asset.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_pending_total(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingTotal(asset.clone()))
        .unwrap_or(0)
}

pub fn save_pending_total(env: &Env, asset: &Address, amount: i128) {
    let key = DataKey::PendingTotal(asset.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_divestment(env: &Env, id: u64) -> Option<PendingDivestment> {
    env.storage().persistent().get(&DataKey::Divestment(id))
}

pub fn save_divestment(env: &Env, id: u64, divestment: &PendingDivestment) {
    let key = DataKey::Divestment(id);
    env.storage().persistent().set(&key, divestment);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_divestment(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Divestment(id));
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
