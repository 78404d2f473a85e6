use soroban_sdk::{Address, Env};

pub trait OperatorDelegatorTrait {
    fn initialize(
        env: Env,
        admin: Address,
        restake_manager: Address,
        strategy_venue: Address,
        withdraw_queue: Address,
    );

    /// Map an asset to the strategy it is staked with inside the venue.
    fn set_token_strategy(env: Env, sender: Address, asset: Address, strategy: Address);

    fn token_strategy(env: Env, asset: Address) -> Option<Address>;

    /// Forward collateral held by this contract into the strategy venue
    /// and increase the tracked holding. Restake-manager authorized.
    fn deposit(env: Env, asset: Address, amount: i128);

    /// Tracked holding for an asset, inclusive of pending divestments.
    fn token_balance(env: Env, asset: Address) -> i128;

    /// Amount under divestment that the venue has not yet released.
    fn pending_divestment(env: Env, asset: Address) -> i128;

    /// Start pulling `amount` of `asset` out of the venue. Settlement is
    /// asynchronous; the returned id is confirmed later.
    fn initiate_divest(env: Env, sender: Address, asset: Address, amount: i128) -> u64;

    /// Settle a divestment with the venue and move the proceeds into the
    /// withdraw queue's buffer.
    fn confirm_divest(env: Env, sender: Address, divestment_id: u64);
}
