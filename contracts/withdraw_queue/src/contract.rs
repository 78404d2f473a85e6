use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use normal::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use normal::error::ErrorCode as NormalError;
use normal::get_then_update_id;
use normal::interfaces::{PriceOracleClient, RestakeManagerClient, ShareTokenClient};
use normal::math::safe_math::SafeMath;
use normal::oracle::token_value;

use crate::errors::ErrorCode;
use crate::events::WithdrawQueueEvents;
use crate::queue::WithdrawQueueTrait;
use crate::storage::{
    get_buffer, get_buffer_assets, get_config, get_request, get_state, get_user_requests,
    is_initialized, save_buffer, save_buffer_assets, save_config, save_request, save_state,
    save_user_requests, set_initialized, BufferInit, Config, RequestStatus, WithdrawBuffer,
    WithdrawRequest,
};

contractmeta!(
    key = "Description",
    val = "Cooldown-gated redemption queue with per-asset liquidity buffers"
);

/// Reference-unit value of every buffer, read against the oracle within
/// the current invocation. Combined with the manager's delegator value
/// this yields protocol TVL without a reentrant call into this contract.
fn buffers_value(env: &Env, config: &Config) -> i128 {
    let oracle = PriceOracleClient::new(env, &config.price_oracle);
    let mut total: i128 = 0;
    for asset in get_buffer_assets(env).iter() {
        let buffer = get_buffer(env, &asset).unwrap();
        if buffer.balance == 0 {
            continue;
        }
        let round = oracle.price(&asset);
        let value = token_value(env, buffer.balance, round.answer)
            .unwrap_or_else(|err| panic_with_error!(env, err));
        total = total
            .safe_add(value, env)
            .unwrap_or_else(|err| panic_with_error!(env, err));
    }
    total
}

#[contract]
pub struct WithdrawQueue;

#[contractimpl]
impl WithdrawQueueTrait for WithdrawQueue {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        restake_manager: Address,
        share_token: Address,
        price_oracle: Address,
        cooldown_period: u64,
        buffers: Vec<BufferInit>,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Withdraw Queue: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, NormalError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                restake_manager,
                share_token,
                price_oracle,
                cooldown_period,
            },
        );

        let mut assets: Vec<Address> = Vec::new(&env);
        for init in buffers.iter() {
            if init.target < 0 {
                log!(&env, "Withdraw Queue: Initialize: negative buffer target");
                panic_with_error!(&env, NormalError::InvalidAmount);
            }
            assets.push_back(init.asset.clone());
            save_buffer(
                &env,
                &init.asset,
                &WithdrawBuffer {
                    target: init.target,
                    balance: 0,
                },
            );
        }
        save_buffer_assets(&env, &assets);

        WithdrawQueueEvents::initialize(&env, admin, cooldown_period);
    }

    fn set_buffer_target(env: Env, sender: Address, asset: Address, target: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if config.admin != sender {
            log!(
                &env,
                "Withdraw Queue: Set buffer target: You are not authorized!"
            );
            panic_with_error!(&env, NormalError::NotAuthorized);
        }
        if target < 0 {
            log!(&env, "Withdraw Queue: Set buffer target: negative target");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        match get_buffer(&env, &asset) {
            Some(mut buffer) => {
                buffer.target = target;
                save_buffer(&env, &asset, &buffer);
            }
            None => {
                let mut assets = get_buffer_assets(&env);
                assets.push_back(asset.clone());
                save_buffer_assets(&env, &assets);
                save_buffer(&env, &asset, &WithdrawBuffer { target, balance: 0 });
            }
        }

        WithdrawQueueEvents::new_buffer_target(&env, asset, target);
    }

    fn buffer_balance(env: Env, asset: Address) -> i128 {
        get_buffer(&env, &asset).map_or(0, |buffer| buffer.balance)
    }

    fn buffer_target(env: Env, asset: Address) -> i128 {
        get_buffer(&env, &asset).map_or(0, |buffer| buffer.target)
    }

    fn buffer_deficit(env: Env, asset: Address) -> i128 {
        get_buffer(&env, &asset).map_or(0, |buffer| (buffer.target - buffer.balance).max(0))
    }

    fn fill_withdraw_buffer(env: Env, from: Address, asset: Address, amount: i128) {
        from.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Withdraw Queue: Fill buffer: amount must be positive");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        let mut buffer = get_buffer(&env, &asset).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Fill buffer: no buffer for asset");
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        });

        token::TokenClient::new(&env, &asset).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        buffer.balance = buffer
            .balance
            .safe_add(amount, &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_buffer(&env, &asset, &buffer);

        WithdrawQueueEvents::buffer_fill(&env, asset, from, amount, buffer.balance);
    }

    fn request_withdraw(env: Env, sender: Address, asset: Address, share_amount: i128) -> u64 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if share_amount <= 0 {
            log!(
                &env,
                "Withdraw Queue: Request withdraw: share amount must be positive"
            );
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        let config = get_config(&env);

        if get_buffer(&env, &asset).is_none() {
            log!(
                &env,
                "Withdraw Queue: Request withdraw: no buffer configured for asset"
            );
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        }

        let share_token = ShareTokenClient::new(&env, &config.share_token);
        let supply = share_token.total_supply();
        if supply <= 0 {
            log!(&env, "Withdraw Queue: Request withdraw: no shares outstanding");
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        // Value the redeemed shares at the pre-burn share price.
        let delegators_value =
            RestakeManagerClient::new(&env, &config.restake_manager).delegators_value();
        let total_value = delegators_value
            .safe_add(buffers_value(&env, &config), &env)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        let share_value = share_amount
            .fixed_mul_floor(total_value, supply)
            .unwrap_or_else(|| panic_with_error!(&env, NormalError::MathError));

        let asset_amount = PriceOracleClient::new(&env, &config.price_oracle)
            .lookup_token_amount_from_value(&asset, &share_value);
        if asset_amount <= 0 {
            log!(
                &env,
                "Withdraw Queue: Request withdraw: redemption rounds to zero"
            );
            panic_with_error!(&env, NormalError::InvalidAmount);
        }

        // Burn at request time so later requests price against the
        // reduced supply.
        share_token.burn_for(&env.current_contract_address(), &sender, &share_amount);

        let mut state = get_state(&env);
        let request_id = get_then_update_id!(state, next_request_id);
        save_state(&env, &state);

        save_request(
            &env,
            request_id,
            &WithdrawRequest {
                requester: sender.clone(),
                asset: asset.clone(),
                asset_amount,
                share_amount,
                created_at: env.ledger().timestamp(),
                status: RequestStatus::Pending,
            },
        );

        let mut user_requests = get_user_requests(&env, &sender);
        user_requests.push_back(request_id);
        save_user_requests(&env, &sender, &user_requests);

        WithdrawQueueEvents::withdraw_request(
            &env,
            sender,
            request_id,
            asset,
            asset_amount,
            share_amount,
        );

        request_id
    }

    fn is_claimable(env: Env, request_id: u64) -> bool {
        let request = get_request(&env, request_id).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Is claimable: unknown request");
            panic_with_error!(&env, ErrorCode::UnknownRequest);
        });
        let config = get_config(&env);

        request.status == RequestStatus::Pending
            && env.ledger().timestamp() - request.created_at >= config.cooldown_period
    }

    fn claim(env: Env, sender: Address, request_id: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        let mut request = get_request(&env, request_id).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Claim: unknown request");
            panic_with_error!(&env, ErrorCode::UnknownRequest);
        });
        if request.requester != sender {
            log!(&env, "Withdraw Queue: Claim: You are not the requester!");
            panic_with_error!(&env, NormalError::NotAuthorized);
        }
        match request.status {
            RequestStatus::Claimed => {
                log!(&env, "Withdraw Queue: Claim: request already claimed");
                panic_with_error!(&env, ErrorCode::AlreadyClaimed);
            }
            RequestStatus::Cancelled => {
                log!(&env, "Withdraw Queue: Claim: request was cancelled");
                panic_with_error!(&env, ErrorCode::RequestCancelled);
            }
            RequestStatus::Pending => {}
        }
        if env.ledger().timestamp() - request.created_at < config.cooldown_period {
            log!(&env, "Withdraw Queue: Claim: cooldown still running");
            panic_with_error!(&env, ErrorCode::NotYetClaimable);
        }

        let mut buffer = get_buffer(&env, &request.asset).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Claim: no buffer for asset");
            panic_with_error!(&env, ErrorCode::UnsupportedAsset);
        });
        if buffer.balance < request.asset_amount {
            // Surfaced so ops can divest a delegator before the retry.
            log!(
                &env,
                "Withdraw Queue: Claim: buffer cannot cover the requested amount"
            );
            panic_with_error!(&env, ErrorCode::InsufficientBuffer);
        }

        buffer.balance -= request.asset_amount;
        save_buffer(&env, &request.asset, &buffer);

        request.status = RequestStatus::Claimed;
        save_request(&env, request_id, &request);

        token::TokenClient::new(&env, &request.asset).transfer(
            &env.current_contract_address(),
            &sender,
            &request.asset_amount,
        );

        WithdrawQueueEvents::claim(&env, sender, request_id, request.asset, request.asset_amount);
    }

    fn cancel_withdraw(env: Env, sender: Address, request_id: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        let mut request = get_request(&env, request_id).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Cancel: unknown request");
            panic_with_error!(&env, ErrorCode::UnknownRequest);
        });
        if request.requester != sender {
            log!(&env, "Withdraw Queue: Cancel: You are not the requester!");
            panic_with_error!(&env, NormalError::NotAuthorized);
        }
        match request.status {
            RequestStatus::Claimed => {
                log!(&env, "Withdraw Queue: Cancel: request already claimed");
                panic_with_error!(&env, ErrorCode::AlreadyClaimed);
            }
            RequestStatus::Cancelled => {
                log!(&env, "Withdraw Queue: Cancel: request already cancelled");
                panic_with_error!(&env, ErrorCode::RequestCancelled);
            }
            RequestStatus::Pending => {}
        }
        if env.ledger().timestamp() - request.created_at >= config.cooldown_period {
            log!(
                &env,
                "Withdraw Queue: Cancel: matured requests can only be claimed"
            );
            panic_with_error!(&env, ErrorCode::RequestNotCancellable);
        }

        request.status = RequestStatus::Cancelled;
        save_request(&env, request_id, &request);

        // Give back exactly what was burned; value drift since the
        // request accrues to the canceller.
        ShareTokenClient::new(&env, &config.share_token).mint(
            &env.current_contract_address(),
            &sender,
            &request.share_amount,
        );

        WithdrawQueueEvents::cancel(&env, sender, request_id, request.share_amount);
    }

    fn query_request(env: Env, request_id: u64) -> WithdrawRequest {
        get_request(&env, request_id).unwrap_or_else(|| {
            log!(&env, "Withdraw Queue: Query request: unknown request");
            panic_with_error!(&env, ErrorCode::UnknownRequest);
        })
    }

    fn query_user_requests(env: Env, user: Address) -> Vec<u64> {
        get_user_requests(&env, &user)
    }

    fn cooldown_period(env: Env) -> u64 {
        get_config(&env).cooldown_period
    }
}
