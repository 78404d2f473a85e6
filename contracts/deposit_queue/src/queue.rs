use soroban_sdk::{Address, Env};

pub trait DepositQueueTrait {
    fn initialize(env: Env, admin: Address);

    fn set_restake_manager(env: Env, sender: Address, restake_manager: Address);

    fn set_withdraw_queue(env: Env, sender: Address, withdraw_queue: Address);

    /// Stage collateral in the queue. Reward inflows land here too.
    fn deposit(env: Env, sender: Address, asset: Address, amount: i128);

    fn queued_balance(env: Env, asset: Address) -> i128;

    /// Route staged collateral into restaking. No shares mint; the value
    /// accrues to existing holders.
    fn forward_to_restake_manager(env: Env, sender: Address, asset: Address, amount: i128);

    /// Move staged collateral into the withdraw queue's buffer.
    fn forward_to_withdraw_buffer(env: Env, sender: Address, asset: Address, amount: i128);
}
