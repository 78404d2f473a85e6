use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, vec, Address, Env,
    IntoVal, Symbol,
};

use normal::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use normal::error::ErrorCode as NormalError;
use normal::interfaces::{RestakeManagerClient, WithdrawQueueClient};
use normal::math::safe_math::SafeMath;

use crate::errors::ErrorCode;
use crate::events::DepositQueueEvents;
use crate::queue::DepositQueueTrait;
use crate::storage::{
    get_config, get_queued, is_initialized, save_config, save_queued, set_initialized, Config,
};

contractmeta!(
    key = "Description",
    val = "Staging area for collateral between deposit and allocation or buffer replenishment"
);

fn require_admin(env: &Env, config: &Config, sender: &Address, operation: &str) {
    if config.admin != *sender {
        log!(env, "Deposit Queue: {}: You are not authorized!", operation);
        panic_with_error!(env, NormalError::NotAuthorized);
    }
}

fn debit_queued(env: &Env, asset: &Address, amount: i128, operation: &str) {
    let queued = get_queued(env, asset);
    if queued < amount {
        log!(
            env,
            "Deposit Queue: {}: forwarding more than the queued amount",
            operation
        );
        panic_with_error!(env, ErrorCode::InsufficientQueuedAmount);
    }
    save_queued(env, asset, queued - amount);
}

#[contract]
pub struct DepositQueue;

#[contractimpl]
impl DepositQueueTrait for DepositQueue {
    fn initialize(env: Env, admin: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Deposit Queue: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, NormalError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                restake_manager: None,
                withdraw_queue: None,
            },
        );

        DepositQueueEvents::initialize(&env, admin);
    }

    fn set_restake_manager(env: Env, sender: Address, restake_manager: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        require_admin(&env, &config, &sender, "Set restake manager");

        config.restake_manager = Some(restake_manager);
        save_config(&env, config);
    }

    fn set_withdraw_queue(env: Env, sender: Address, withdraw_queue: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        require_admin(&env, &config, &sender, "Set withdraw queue");

        config.withdraw_queue = Some(withdraw_queue);
        save_config(&env, config);
    }

    fn deposit(env: Env, sender: Address, asset: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Deposit Queue: Deposit: amount must be positive");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        token::TokenClient::new(&env, &asset).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        let queued = get_queued(&env, &asset)
            .safe_add(amount, &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_queued(&env, &asset, queued);

        DepositQueueEvents::deposit(&env, asset, sender, amount);
    }

    fn queued_balance(env: Env, asset: Address) -> i128 {
        get_queued(&env, &asset)
    }

    fn forward_to_restake_manager(env: Env, sender: Address, asset: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Forward to restake manager");

        let restake_manager = config.restake_manager.unwrap_or_else(|| {
            log!(
                &env,
                "Deposit Queue: Forward to restake manager: restake manager not configured"
            );
            panic_with_error!(&env, ErrorCode::TargetNotConfigured);
        });

        debit_queued(&env, &asset, amount, "Forward to restake manager");

        token::TokenClient::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &restake_manager,
            &amount,
        );
        RestakeManagerClient::new(&env, &restake_manager).deposit_from_queue(&asset, &amount);

        DepositQueueEvents::forward_to_restake_manager(&env, asset, amount);
    }

    fn forward_to_withdraw_buffer(env: Env, sender: Address, asset: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender, "Forward to withdraw buffer");

        let withdraw_queue = config.withdraw_queue.unwrap_or_else(|| {
            log!(
                &env,
                "Deposit Queue: Forward to withdraw buffer: withdraw queue not configured"
            );
            panic_with_error!(&env, ErrorCode::TargetNotConfigured);
        });

        debit_queued(&env, &asset, amount, "Forward to withdraw buffer");

        // The buffer fill pulls from this contract; authorize that
        // transfer for the nested invocation.
        env.authorize_as_current_contract(vec![
            &env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: asset.clone(),
                    fn_name: Symbol::new(&env, "transfer"),
                    args: (
                        env.current_contract_address(),
                        withdraw_queue.clone(),
                        amount,
                    )
                        .into_val(&env),
                },
                sub_invocations: vec![&env],
            }),
        ]);
        WithdrawQueueClient::new(&env, &withdraw_queue).fill_withdraw_buffer(
            &env.current_contract_address(),
            &asset,
            &amount,
        );

        DepositQueueEvents::forward_to_withdraw_buffer(&env, asset, amount);
    }
}
