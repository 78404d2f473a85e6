use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, vec, Address, Env,
    IntoVal, Symbol,
};

use normal::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use normal::error::ErrorCode as NormalError;
use normal::interfaces::{StrategyVenueClient, WithdrawQueueClient};
use normal::math::safe_math::SafeMath;
use normal::{get_then_update_id, validate};

use crate::delegator::OperatorDelegatorTrait;
use crate::errors::ErrorCode;
use crate::events::OperatorDelegatorEvents;
use crate::storage::{
    get_config, get_divestment, get_holding, get_pending_total, get_state, get_strategy,
    is_initialized, remove_divestment, save_config, save_divestment, save_holding,
    save_pending_total, save_state, save_strategy, set_initialized, Config, PendingDivestment,
};

contractmeta!(
    key = "Description",
    val = "Stakes a slice of the restaked collateral with an external strategy venue"
);

#[contract]
pub struct OperatorDelegator;

#[contractimpl]
impl OperatorDelegatorTrait for OperatorDelegator {
    fn initialize(
        env: Env,
        admin: Address,
        restake_manager: Address,
        strategy_venue: Address,
        withdraw_queue: Address,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Operator Delegator: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, NormalError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                restake_manager: restake_manager.clone(),
                strategy_venue: strategy_venue.clone(),
                withdraw_queue,
            },
        );

        OperatorDelegatorEvents::initialize(&env, admin, restake_manager, strategy_venue);
    }

    fn set_token_strategy(env: Env, sender: Address, asset: Address, strategy: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if config.admin != sender {
            log!(
                &env,
                "Operator Delegator: Set token strategy: You are not authorized!"
            );
            panic_with_error!(&env, NormalError::NotAuthorized);
        }

        save_strategy(&env, &asset, &strategy);

        OperatorDelegatorEvents::new_token_strategy(&env, asset, strategy);
    }

    fn token_strategy(env: Env, asset: Address) -> Option<Address> {
        get_strategy(&env, &asset)
    }

    fn deposit(env: Env, asset: Address, amount: i128) {
        let config = get_config(&env);
        config.restake_manager.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate!(
            &env,
            amount > 0,
            NormalError::InvalidAmount,
            "Operator Delegator: Deposit: amount must be positive"
        );

        let strategy = get_strategy(&env, &asset).unwrap_or_else(|| {
            log!(
                &env,
                "Operator Delegator: Deposit: no strategy configured for asset"
            );
            panic_with_error!(&env, ErrorCode::StrategyNotConfigured);
        });

        // The restake manager has already moved the collateral to this
        // contract; hand it to the venue and account for it.
        token::TokenClient::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &config.strategy_venue,
            &amount,
        );
        StrategyVenueClient::new(&env, &config.strategy_venue).deposit(
            &env.current_contract_address(),
            &strategy,
            &asset,
            &amount,
        );

        let holding = get_holding(&env, &asset)
            .safe_add(amount, &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_holding(&env, &asset, holding);

        OperatorDelegatorEvents::deposit(&env, asset, amount);
    }

    fn token_balance(env: Env, asset: Address) -> i128 {
        get_holding(&env, &asset)
    }

    fn pending_divestment(env: Env, asset: Address) -> i128 {
        get_pending_total(&env, &asset)
    }

    fn initiate_divest(env: Env, sender: Address, asset: Address, amount: i128) -> u64 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if config.admin != sender {
            log!(
                &env,
                "Operator Delegator: Initiate divest: You are not authorized!"
            );
            panic_with_error!(&env, NormalError::NotAuthorized);
        }

        validate!(
            &env,
            amount > 0,
            NormalError::InvalidAmount,
            "Operator Delegator: Initiate divest: amount must be positive"
        );

        let strategy = get_strategy(&env, &asset).unwrap_or_else(|| {
            log!(
                &env,
                "Operator Delegator: Initiate divest: no strategy configured for asset"
            );
            panic_with_error!(&env, ErrorCode::StrategyNotConfigured);
        });

        let holding = get_holding(&env, &asset);
        let pending = get_pending_total(&env, &asset);
        if amount > holding - pending {
            log!(
                &env,
                "Operator Delegator: Initiate divest: divesting beyond tracked holdings"
            );
            panic_with_error!(&env, ErrorCode::InsufficientHoldings);
        }

        let venue_pending_id = StrategyVenueClient::new(&env, &config.strategy_venue)
            .initiate_withdraw(&env.current_contract_address(), &strategy, &asset, &amount);

        let mut state = get_state(&env);
        let divestment_id = get_then_update_id!(state, next_divestment_id);
        save_state(&env, &state);

        save_divestment(
            &env,
            divestment_id,
            &PendingDivestment {
                asset: asset.clone(),
                amount,
                venue_pending_id,
                initiated_at: env.ledger().timestamp(),
            },
        );
        save_pending_total(
            &env,
            &asset,
            pending
                .safe_add(amount, &env)
                .unwrap_or_else(|err| panic_with_error!(&env, err)),
        );

        OperatorDelegatorEvents::divest_initiated(&env, asset, divestment_id, amount);

        divestment_id
    }

    fn confirm_divest(env: Env, sender: Address, divestment_id: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if config.admin != sender {
            log!(
                &env,
                "Operator Delegator: Confirm divest: You are not authorized!"
            );
            panic_with_error!(&env, NormalError::NotAuthorized);
        }

        let divestment = get_divestment(&env, divestment_id).unwrap_or_else(|| {
            log!(
                &env,
                "Operator Delegator: Confirm divest: unknown or settled divestment"
            );
            panic_with_error!(&env, ErrorCode::UnknownDivestment);
        });

        let received = StrategyVenueClient::new(&env, &config.strategy_venue)
            .confirm_withdraw(&env.current_contract_address(), &divestment.venue_pending_id);

        let holding = get_holding(&env, &divestment.asset)
            .safe_sub(divestment.amount, &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_holding(&env, &divestment.asset, holding);

        let pending = get_pending_total(&env, &divestment.asset)
            .safe_sub(divestment.amount, &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_pending_total(&env, &divestment.asset, pending);

        remove_divestment(&env, divestment_id);

        // The buffer fill pulls the proceeds from this contract; authorize
        // that transfer for the nested invocation.
        env.authorize_as_current_contract(vec![
            &env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: divestment.asset.clone(),
                    fn_name: Symbol::new(&env, "transfer"),
                    args: (
                        env.current_contract_address(),
                        config.withdraw_queue.clone(),
                        received,
                    )
                        .into_val(&env),
                },
                sub_invocations: vec![&env],
            }),
        ]);
        WithdrawQueueClient::new(&env, &config.withdraw_queue).fill_withdraw_buffer(
            &env.current_contract_address(),
            &divestment.asset,
            &received,
        );

        OperatorDelegatorEvents::divest_confirmed(&env, divestment.asset, divestment_id, received);
    }
}
