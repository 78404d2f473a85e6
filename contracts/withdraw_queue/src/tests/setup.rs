use soroban_sdk::{testutils::Address as _, token, vec, Address, Env, String, Vec};

use normal::constants::{ONE_WEEK, PRICE_PRECISION};
use normal::testutils::{MockPriceFeed, MockPriceFeedClient};
use normal_price_oracle::{PriceOracle, PriceOracleClient};
use normal_restake_token::{RestakeToken, RestakeTokenClient};

use crate::contract::{WithdrawQueue, WithdrawQueueClient};
use crate::storage::BufferInit;

pub const COOLDOWN: u64 = ONE_WEEK;

/// Stand-in for the restake manager: the queue only asks it for the
/// value held by the operator delegators.
mod mock_restake_manager {
    use soroban_sdk::{contract, contractimpl, contracttype, Env};

    #[contracttype]
    #[derive(Clone)]
    enum DataKey {
        Value,
    }

    #[contract]
    pub struct MockRestakeManager;

    #[contractimpl]
    impl MockRestakeManager {
        pub fn set_delegators_value(env: Env, value: i128) {
            env.storage().instance().set(&DataKey::Value, &value);
        }

        pub fn delegators_value(env: Env) -> i128 {
            env.storage().instance().get(&DataKey::Value).unwrap_or(0)
        }
    }
}

pub use mock_restake_manager::{MockRestakeManager, MockRestakeManagerClient};

pub struct QueueTestEnv<'a> {
    pub admin: Address,
    pub collateral: token::TokenClient<'a>,
    pub collateral_admin: token::StellarAssetClient<'a>,
    pub feed: MockPriceFeedClient<'a>,
    pub oracle: PriceOracleClient<'a>,
    pub share_token: RestakeTokenClient<'a>,
    pub manager: MockRestakeManagerClient<'a>,
    pub queue: WithdrawQueueClient<'a>,
}

/// Deploys the queue with one collateral asset priced at 1.0 reference
/// units and a buffer entry targeting `buffer_target`.
pub fn deploy_queue_env<'a>(env: &Env, buffer_target: i128) -> QueueTestEnv<'a> {
    let admin = Address::generate(env);

    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let collateral = token::TokenClient::new(env, &sac.address());
    let collateral_admin = token::StellarAssetClient::new(env, &sac.address());

    let feed = MockPriceFeedClient::new(env, &env.register(MockPriceFeed, ()));
    feed.set_latest_round_data(&100, &PRICE_PRECISION, &env.ledger().timestamp());

    let oracle = PriceOracleClient::new(env, &env.register(PriceOracle, ()));
    oracle.initialize(&admin);
    oracle.set_price_feed(&admin, &collateral.address, &feed.address);

    let share_token = RestakeTokenClient::new(
        env,
        &env.register(
            RestakeToken,
            (
                admin.clone(),
                7u32,
                String::from_str(env, "Normal Restaked XLM"),
                String::from_str(env, "nzXLM"),
            ),
        ),
    );

    let manager =
        MockRestakeManagerClient::new(env, &env.register(MockRestakeManager, ()));

    let queue = WithdrawQueueClient::new(env, &env.register(WithdrawQueue, ()));
    let buffers: Vec<BufferInit> = vec![
        env,
        BufferInit {
            asset: collateral.address.clone(),
            target: buffer_target,
        },
    ];
    queue.initialize(
        &admin,
        &manager.address,
        &share_token.address,
        &oracle.address,
        &COOLDOWN,
        &buffers,
    );

    share_token.set_minters(&vec![env, queue.address.clone()]);

    QueueTestEnv {
        admin,
        collateral,
        collateral_admin,
        feed,
        oracle,
        share_token,
        manager,
        queue,
    }
}

/// Mint shares to a user and set the delegator-side value backing them.
/// The share price ends up at (delegators_value + buffer value) / supply.
pub fn seed_shares(
    env: &Env,
    test: &QueueTestEnv,
    user: &Address,
    supply: i128,
    delegators_value: i128,
) {
    let manager_addr = Address::generate(env);
    let mut minters = test.share_token.minters();
    minters.push_back(manager_addr.clone());
    test.share_token.set_minters(&minters);
    test.share_token.mint(&manager_addr, user, &supply);
    test.manager.set_delegators_value(&delegators_value);
}

/// Put `amount` of collateral into the queue's buffer via the fill path.
pub fn fill_buffer(test: &QueueTestEnv, amount: i128) {
    test.collateral_admin.mint(&test.admin, &amount);
    test.queue
        .fill_withdraw_buffer(&test.admin, &test.collateral.address, &amount);
}
