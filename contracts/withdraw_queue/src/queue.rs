use soroban_sdk::{Address, Env, Vec};

use crate::storage::{BufferInit, WithdrawRequest};

pub trait WithdrawQueueTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        restake_manager: Address,
        share_token: Address,
        price_oracle: Address,
        cooldown_period: u64,
        buffers: Vec<BufferInit>,
    );

    /// Create or retarget the buffer entry for an asset.
    fn set_buffer_target(env: Env, sender: Address, asset: Address, target: i128);

    fn buffer_balance(env: Env, asset: Address) -> i128;

    fn buffer_target(env: Env, asset: Address) -> i128;

    /// How far the buffer is below target; what ops should replenish.
    fn buffer_deficit(env: Env, asset: Address) -> i128;

    /// Pull `amount` of `asset` from `from` and credit the buffer.
    fn fill_withdraw_buffer(env: Env, from: Address, asset: Address, amount: i128);

    /// Redeem `share_amount` shares for `asset`. Burns the shares now,
    /// pays out after the cooldown.
    fn request_withdraw(env: Env, sender: Address, asset: Address, share_amount: i128) -> u64;

    fn is_claimable(env: Env, request_id: u64) -> bool;

    /// Pay out a matured request from the asset's buffer.
    fn claim(env: Env, sender: Address, request_id: u64);

    /// Abandon a still-pending request; the burned shares are re-minted.
    fn cancel_withdraw(env: Env, sender: Address, request_id: u64);

    fn query_request(env: Env, request_id: u64) -> WithdrawRequest;

    fn query_user_requests(env: Env, user: Address) -> Vec<u64>;

    fn cooldown_period(env: Env) -> u64;
}
