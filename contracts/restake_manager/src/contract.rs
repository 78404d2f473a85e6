use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use normal::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PRICE_PRECISION, TOTAL_BASIS_POINTS,
};
use normal::error::ErrorCode as NormalError;
use normal::interfaces::{
    OperatorDelegatorClient, PriceOracleClient, ShareTokenClient, WithdrawQueueClient,
};
use normal::math::casting::Cast;
use normal::math::safe_math::SafeMath;
use normal::oracle::token_value;
use normal::validate_bps;

use crate::errors::ErrorCode;
use crate::events::RestakeManagerEvents;
use crate::manager::RestakeManagerTrait;
use crate::storage::{
    get_allocation, get_collateral_config, get_collateral_tokens, get_config,
    get_operator_delegators, is_initialized, save_allocation, save_collateral_config,
    save_collateral_tokens, save_config, save_operator_delegators, set_initialized,
    CollateralConfig, Config,
};

contractmeta!(
    key = "Description",
    val = "Values restaked collateral and routes deposits across operator delegators"
);

/// Per-delegator and aggregate values, priced in one pass so every asset
/// is valued against the same oracle reads.
struct Tvls {
    delegator_values: Vec<i128>,
    total: i128,
}

/// Value held by the operator delegators. Must not touch the withdraw
/// queue: the queue calls this while valuing a redemption, and a read
/// back into it would be a reentrant invocation.
fn compute_delegator_values(env: &Env, config: &Config) -> (Vec<i128>, i128) {
    let assets = get_collateral_tokens(env);
    let delegators = get_operator_delegators(env);
    let oracle = PriceOracleClient::new(env, &config.price_oracle);

    let mut delegator_values: Vec<i128> = Vec::new(env);
    for _ in delegators.iter() {
        delegator_values.push_back(0);
    }
    let mut delegators_total: i128 = 0;

    for asset in assets.iter() {
        let price = oracle.price(&asset).answer;

        for (i, delegator) in delegators.iter().enumerate() {
            let holding = OperatorDelegatorClient::new(env, &delegator).token_balance(&asset);
            if holding == 0 {
                continue;
            }
            let value = token_value(env, holding, price)
                .unwrap_or_else(|err| panic_with_error!(env, err));
            let index = i as u32;
            delegator_values.set(
                index,
                delegator_values
                    .get_unchecked(index)
                    .safe_add(value, env)
                    .unwrap_or_else(|err| panic_with_error!(env, err)),
            );
            delegators_total = delegators_total
                .safe_add(value, env)
                .unwrap_or_else(|err| panic_with_error!(env, err));
        }
    }

    (delegator_values, delegators_total)
}

fn compute_buffers_value(env: &Env, config: &Config) -> i128 {
    let assets = get_collateral_tokens(env);
    let oracle = PriceOracleClient::new(env, &config.price_oracle);
    let withdraw_queue = WithdrawQueueClient::new(env, &config.withdraw_queue);

    let mut buffers_total: i128 = 0;
    for asset in assets.iter() {
        let buffered = withdraw_queue.buffer_balance(&asset);
        if buffered == 0 {
            continue;
        }
        let price = oracle.price(&asset).answer;
        let value =
            token_value(env, buffered, price).unwrap_or_else(|err| panic_with_error!(env, err));
        buffers_total = buffers_total
            .safe_add(value, env)
            .unwrap_or_else(|err| panic_with_error!(env, err));
    }
    buffers_total
}

fn compute_tvls(env: &Env, config: &Config) -> Tvls {
    let (delegator_values, delegators_total) = compute_delegator_values(env, config);
    let total = delegators_total
        .safe_add(compute_buffers_value(env, config), env)
        .unwrap_or_else(|err| panic_with_error!(env, err));

    Tvls {
        delegator_values,
        total,
    }
}

fn require_admin(env: &Env, config: &Config, sender: &Address, operation: &str) {
    if config.admin != *sender {
        log!(
            env,
            "Restake Manager: {}: You are not authorized!",
            operation
        );
        panic_with_error!(env, NormalError::NotAuthorized);
    }
}

fn total_allocation_bps(env: &Env, delegators: &Vec<Address>) -> i64 {
    let mut sum: i64 = 0;
    for delegator in delegators.iter() {
        sum += get_allocation(env, &delegator).unwrap_or(0);
    }
    sum
}

fn ensure_allocation_complete(env: &Env, delegators: &Vec<Address>) {
    if total_allocation_bps(env, delegators) != TOTAL_BASIS_POINTS {
        log!(
            env,
            "Restake Manager: Deposit: delegator weights do not sum to 100%"
        );
        panic_with_error!(env, ErrorCode::AllocationIncomplete);
    }
}

/// Greedy deficit routing: the delegator whose current share of value
/// sits furthest below its target weight takes the whole deposit. Ties
/// and the everyone-at-or-over-target case resolve to the lowest index.
fn select_delegator(env: &Env, delegators: &Vec<Address>, tvls: &Tvls) -> Address {
    let mut best_index: u32 = 0;
    let mut best_deficit: i128 = i128::MIN;

    for i in 0..delegators.len() {
        let delegator = delegators.get_unchecked(i);
        let target_bps: i128 = get_allocation(env, &delegator).unwrap_or(0).cast(env);
        let current_bps = if tvls.total > 0 {
            tvls.delegator_values
                .get_unchecked(i)
                .safe_mul(TOTAL_BASIS_POINTS.cast(env), env)
                .unwrap_or_else(|err| panic_with_error!(env, err))
                / tvls.total
        } else {
            0
        };
        let deficit = target_bps - current_bps;
        if deficit > best_deficit {
            best_deficit = deficit;
            best_index = i;
        }
    }

    delegators.get_unchecked(best_index)
}

fn route_to_delegator(env: &Env, from: &Address, delegator: &Address, asset: &Address, amount: i128) {
    token::TokenClient::new(env, asset).transfer(from, delegator, &amount);
    OperatorDelegatorClient::new(env, delegator).deposit(asset, &amount);
}

#[contract]
pub struct RestakeManager;

#[contractimpl]
impl RestakeManagerTrait for RestakeManager {
    fn initialize(
        env: Env,
        admin: Address,
        share_token: Address,
        price_oracle: Address,
        deposit_queue: Address,
        withdraw_queue: Address,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Restake Manager: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, NormalError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                share_token: share_token.clone(),
                price_oracle,
                deposit_queue,
                withdraw_queue,
            },
        );

        RestakeManagerEvents::initialize(&env, admin, share_token);
    }

    fn add_collateral_token(env: Env, sender: Address, asset: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Add collateral token");

        if get_collateral_config(&env, &asset).is_some() {
            log!(
                &env,
                "Restake Manager: Add collateral token: asset already registered"
            );
            panic_with_error!(&env, ErrorCode::DuplicateAsset);
        }

        let decimals = token::TokenClient::new(&env, &asset).decimals();

        let mut tokens = get_collateral_tokens(&env);
        tokens.push_back(asset.clone());
        save_collateral_tokens(&env, &tokens);
        save_collateral_config(
            &env,
            &asset,
            &CollateralConfig {
                enabled: true,
                decimals,
            },
        );

        RestakeManagerEvents::new_collateral_token(&env, asset, decimals);
    }

    fn set_collateral_enabled(env: Env, sender: Address, asset: Address, enabled: bool) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Set collateral enabled");

        let mut collateral = get_collateral_config(&env, &asset).unwrap_or_else(|| {
            log!(
                &env,
                "Restake Manager: Set collateral enabled: asset not registered"
            );
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        });
        collateral.enabled = enabled;
        save_collateral_config(&env, &asset, &collateral);

        RestakeManagerEvents::collateral_enabled(&env, asset, enabled);
    }

    fn collateral_tokens(env: Env) -> Vec<Address> {
        get_collateral_tokens(&env)
    }

    fn collateral_config(env: Env, asset: Address) -> CollateralConfig {
        get_collateral_config(&env, &asset).unwrap_or_else(|| {
            log!(
                &env,
                "Restake Manager: Collateral config: asset not registered"
            );
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        })
    }

    fn add_operator_delegator(env: Env, sender: Address, delegator: Address, weight_bps: i64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Add operator delegator");

        validate_bps!(weight_bps);

        if get_allocation(&env, &delegator).is_some() {
            log!(
                &env,
                "Restake Manager: Add operator delegator: delegator already registered"
            );
            panic_with_error!(&env, ErrorCode::DuplicateDelegator);
        }

        let mut delegators = get_operator_delegators(&env);
        if total_allocation_bps(&env, &delegators) + weight_bps > TOTAL_BASIS_POINTS {
            log!(
                &env,
                "Restake Manager: Add operator delegator: weights would exceed 100%"
            );
            panic_with_error!(&env, ErrorCode::WeightOverflow);
        }

        delegators.push_back(delegator.clone());
        save_operator_delegators(&env, &delegators);
        save_allocation(&env, &delegator, weight_bps);

        RestakeManagerEvents::new_operator_delegator(&env, delegator, weight_bps);
    }

    fn set_operator_delegator_allocation(
        env: Env,
        sender: Address,
        delegator: Address,
        weight_bps: i64,
    ) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Set operator delegator allocation");

        validate_bps!(weight_bps);

        let current = get_allocation(&env, &delegator).unwrap_or_else(|| {
            log!(
                &env,
                "Restake Manager: Set operator delegator allocation: unknown delegator"
            );
            panic_with_error!(&env, ErrorCode::UnknownDelegator);
        });

        let delegators = get_operator_delegators(&env);
        if total_allocation_bps(&env, &delegators) - current + weight_bps > TOTAL_BASIS_POINTS {
            log!(
                &env,
                "Restake Manager: Set operator delegator allocation: weights would exceed 100%"
            );
            panic_with_error!(&env, ErrorCode::WeightOverflow);
        }

        save_allocation(&env, &delegator, weight_bps);

        RestakeManagerEvents::new_allocation(&env, delegator, weight_bps);
    }

    fn operator_delegators(env: Env) -> Vec<Address> {
        get_operator_delegators(&env)
    }

    fn delegator_allocation(env: Env, delegator: Address) -> i64 {
        get_allocation(&env, &delegator).unwrap_or_else(|| {
            log!(
                &env,
                "Restake Manager: Delegator allocation: unknown delegator"
            );
            panic_with_error!(&env, ErrorCode::UnknownDelegator);
        })
    }

    fn total_value(env: Env) -> i128 {
        let config = get_config(&env);
        compute_tvls(&env, &config).total
    }

    fn delegators_value(env: Env) -> i128 {
        let config = get_config(&env);
        let (_, delegators_total) = compute_delegator_values(&env, &config);
        delegators_total
    }

    fn share_price(env: Env) -> i128 {
        let config = get_config(&env);
        let supply = ShareTokenClient::new(&env, &config.share_token).total_supply();
        if supply == 0 {
            return PRICE_PRECISION;
        }
        let tvls = compute_tvls(&env, &config);
        tvls.total
            .fixed_mul_floor(PRICE_PRECISION, supply)
            .unwrap_or_else(|| panic_with_error!(&env, NormalError::MathError))
    }

    fn deposit(env: Env, sender: Address, asset: Address, amount: i128) -> (Address, i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Restake Manager: Deposit: amount must be positive");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        let config = get_config(&env);

        let supported = get_collateral_config(&env, &asset)
            .map_or(false, |collateral| collateral.enabled);
        if !supported {
            log!(
                &env,
                "Restake Manager: Deposit: asset is not registered or is disabled"
            );
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        }

        let delegators = get_operator_delegators(&env);
        ensure_allocation_complete(&env, &delegators);

        // Value everything before the deposit lands so it cannot shift
        // its own pricing basis.
        let tvls = compute_tvls(&env, &config);
        let deposit_value =
            PriceOracleClient::new(&env, &config.price_oracle).lookup_token_value(&asset, &amount);
        if deposit_value <= 0 {
            log!(&env, "Restake Manager: Deposit: deposit value rounds to zero");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        let share_token = ShareTokenClient::new(&env, &config.share_token);
        let supply = share_token.total_supply();
        let shares = if supply == 0 {
            deposit_value
        } else {
            deposit_value
                .fixed_mul_floor(supply, tvls.total)
                .unwrap_or_else(|| panic_with_error!(&env, NormalError::MathError))
        };
        if shares <= 0 {
            log!(&env, "Restake Manager: Deposit: mint amount rounds to zero");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        let chosen = select_delegator(&env, &delegators, &tvls);
        route_to_delegator(&env, &sender, &chosen, &asset, amount);

        share_token.mint(&env.current_contract_address(), &sender, &shares);

        RestakeManagerEvents::deposit(&env, sender, asset, amount, shares, chosen.clone());

        (chosen, shares)
    }

    fn deposit_from_queue(env: Env, asset: Address, amount: i128) {
        let config = get_config(&env);
        config.deposit_queue.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(
                &env,
                "Restake Manager: Deposit from queue: amount must be positive"
            );
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        // Staged rewards for a retired asset still restake; `enabled`
        // only gates new user deposits.
        if get_collateral_config(&env, &asset).is_none() {
            log!(
                &env,
                "Restake Manager: Deposit from queue: asset not registered"
            );
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        }

        let delegators = get_operator_delegators(&env);
        ensure_allocation_complete(&env, &delegators);

        let tvls = compute_tvls(&env, &config);
        let chosen = select_delegator(&env, &delegators, &tvls);
        route_to_delegator(
            &env,
            &env.current_contract_address(),
            &chosen,
            &asset,
            amount,
        );

        RestakeManagerEvents::queue_deposit(&env, asset, amount, chosen);
    }
}
