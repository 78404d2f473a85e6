use soroban_sdk::{testutils::Address as _, token, vec, Address, Env};

use normal::constants::ONE_WEEK;
use normal_withdraw_queue::{BufferInit, WithdrawQueue, WithdrawQueueClient};

use crate::contract::{DepositQueue, DepositQueueClient};

/// Stand-in for the restake manager: records the routed amount so tests
/// can assert the handoff happened.
mod mock_restake_manager {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    enum DataKey {
        Routed(Address),
    }

    #[contract]
    pub struct MockRestakeManager;

    #[contractimpl]
    impl MockRestakeManager {
        pub fn deposit_from_queue(env: Env, asset: Address, amount: i128) {
            let key = DataKey::Routed(asset);
            let routed: i128 = env.storage().instance().get(&key).unwrap_or(0);
            env.storage().instance().set(&key, &(routed + amount));
        }

        pub fn routed(env: Env, asset: Address) -> i128 {
            env.storage()
                .instance()
                .get(&DataKey::Routed(asset))
                .unwrap_or(0)
        }
    }
}

pub use mock_restake_manager::{MockRestakeManager, MockRestakeManagerClient};

pub struct DepositQueueTestEnv<'a> {
    pub admin: Address,
    pub collateral: token::TokenClient<'a>,
    pub collateral_admin: token::StellarAssetClient<'a>,
    pub manager: MockRestakeManagerClient<'a>,
    pub withdraw_queue: WithdrawQueueClient<'a>,
    pub deposit_queue: DepositQueueClient<'a>,
}

pub fn deploy_deposit_queue_env<'a>(env: &Env) -> DepositQueueTestEnv<'a> {
    let admin = Address::generate(env);

    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let collateral = token::TokenClient::new(env, &sac.address());
    let collateral_admin = token::StellarAssetClient::new(env, &sac.address());

    let manager = MockRestakeManagerClient::new(env, &env.register(MockRestakeManager, ()));

    let withdraw_queue = WithdrawQueueClient::new(env, &env.register(WithdrawQueue, ()));
    withdraw_queue.initialize(
        &admin,
        &manager.address,
        &Address::generate(env),
        &Address::generate(env),
        &ONE_WEEK,
        &vec![
            env,
            BufferInit {
                asset: collateral.address.clone(),
                target: 10_000,
            },
        ],
    );

    let deposit_queue = DepositQueueClient::new(env, &env.register(DepositQueue, ()));
    deposit_queue.initialize(&admin);
    deposit_queue.set_restake_manager(&admin, &manager.address);
    deposit_queue.set_withdraw_queue(&admin, &withdraw_queue.address);

    DepositQueueTestEnv {
        admin,
        collateral,
        collateral_admin,
        manager,
        withdraw_queue,
        deposit_queue,
    }
}

pub fn stage_deposit(env: &Env, test: &DepositQueueTestEnv, amount: i128) {
    let depositor = Address::generate(env);
    test.collateral_admin.mint(&depositor, &amount);
    test.deposit_queue
        .deposit(&depositor, &test.collateral.address, &amount);
}
