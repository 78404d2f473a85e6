//! Cross-contract clients for the restaking suite.
//!
//! Contracts reference each other by `Address` only; the traits below
//! exist to generate typed clients for the calls that cross a contract
//! boundary. Each signature mirrors the exported function on the target
//! contract.

use soroban_sdk::{contractclient, Address, Env};

use crate::oracle::PriceRound;

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleInterface {
    /// Validated latest round for a registered collateral asset.
    fn price(env: Env, asset: Address) -> PriceRound;

    fn lookup_token_value(env: Env, asset: Address, amount: i128) -> i128;

    fn lookup_token_amount_from_value(env: Env, asset: Address, value: i128) -> i128;
}

#[contractclient(name = "ShareTokenClient")]
pub trait ShareTokenInterface {
    /// Capability-gated mint; `minter` must be in the token's minter set.
    fn mint(env: Env, minter: Address, to: Address, amount: i128);

    /// Capability-gated burn of `from`'s shares, used by the withdraw
    /// queue at request time.
    fn burn_for(env: Env, minter: Address, from: Address, amount: i128);

    fn total_supply(env: Env) -> i128;
}

#[contractclient(name = "RestakeManagerClient")]
pub trait RestakeManagerInterface {
    /// Protocol TVL: delegator holdings plus withdraw-queue buffers.
    fn total_value(env: Env) -> i128;

    /// TVL held by operator delegators only. The withdraw queue combines
    /// this with a local valuation of its own buffers so that no call
    /// cycle forms between the two contracts.
    fn delegators_value(env: Env) -> i128;

    fn share_price(env: Env) -> i128;

    /// Route staged collateral from the deposit queue without minting.
    fn deposit_from_queue(env: Env, asset: Address, amount: i128);
}

#[contractclient(name = "OperatorDelegatorClient")]
pub trait OperatorDelegatorInterface {
    /// Forward collateral already transferred to the delegator into its
    /// strategy venue. Restake-manager authorized.
    fn deposit(env: Env, asset: Address, amount: i128);

    /// Tracked holding, inclusive of amounts under pending divestment.
    fn token_balance(env: Env, asset: Address) -> i128;

    fn pending_divestment(env: Env, asset: Address) -> i128;
}

#[contractclient(name = "WithdrawQueueClient")]
pub trait WithdrawQueueInterface {
    fn buffer_balance(env: Env, asset: Address) -> i128;

    /// Pull `amount` of `asset` from `from` and credit the buffer.
    fn fill_withdraw_buffer(env: Env, from: Address, asset: Address, amount: i128);
}

/// External staking venue the operator delegators forward into. The
/// venue settles withdrawals asynchronously: `initiate_withdraw` returns
/// a pending id that is only redeemable once the venue releases funds.
#[contractclient(name = "StrategyVenueClient")]
pub trait StrategyVenueInterface {
    fn deposit(env: Env, from: Address, strategy: Address, asset: Address, amount: i128);

    fn initiate_withdraw(
        env: Env,
        from: Address,
        strategy: Address,
        asset: Address,
        amount: i128,
    ) -> u64;

    fn confirm_withdraw(env: Env, from: Address, pending_id: u64) -> i128;
}
