use normal::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    CollateralTokens,
    CollateralConfig(Address),
    OperatorDelegators,
    Allocation(Address),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub share_token: Address,
    pub price_oracle: Address,
    pub deposit_queue: Address,
    pub withdraw_queue: Address,
}

/// Registered collateral is never removed, only disabled for new
/// deposits, so historical accounting stays intact.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollateralConfig {
    pub enabled: bool,
    pub decimals: u32,
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

pub fn get_collateral_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CollateralTokens)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_collateral_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::CollateralTokens, tokens);
    env.storage().persistent().extend_ttl(
        &DataKey::CollateralTokens,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_collateral_config(env: &Env, asset: &Address) -> Option<CollateralConfig> {
    env.storage()
        .persistent()
        .get(&DataKey::CollateralConfig(asset.clone()))
}

pub fn save_collateral_config(env: &Env, asset: &Address, config: &CollateralConfig) {
    let key = DataKey::CollateralConfig(asset.clone());
    env.storage().persistent().set(&key, config);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_operator_delegators(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::OperatorDelegators)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_operator_delegators(env: &Env, delegators: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::OperatorDelegators, delegators);
    env.storage().persistent().extend_ttl(
        &DataKey::OperatorDelegators,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_allocation(env: &Env, delegator: &Address) -> Option<i64> {
    env.storage()
        .persistent()
        .get(&DataKey::Allocation(delegator.clone()))
}

pub fn save_allocation(env: &Env, delegator: &Address, weight_bps: i64) {
    let key = DataKey::Allocation(delegator.clone());
    env.storage().persistent().set(&key, &weight_bps);
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
