//! Native test doubles for the external collaborators: an aggregator
//! price feed with settable rounds and a strategy venue with immediate
//! settlement. Contract crates register these in their test setups.

pub use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
pub use mock_strategy_venue::{MockStrategyVenue, MockStrategyVenueClient};

mod mock_price_feed {
    use soroban_sdk::{contract, contractimpl, contracttype, Env};

    use crate::oracle::{PriceFeed, PriceRound};

    #[contracttype]
    #[derive(Clone)]
    enum DataKey {
        Round,
    }

    #[contract]
    pub struct MockPriceFeed;

    #[contractimpl]
    impl MockPriceFeed {
        pub fn set_latest_round_data(env: Env, round_id: u64, answer: i128, updated_at: u64) {
            env.storage().instance().set(
                &DataKey::Round,
                &PriceRound {
                    round_id,
                    answer,
                    updated_at,
                },
            );
        }
    }

    #[contractimpl]
    impl PriceFeed for MockPriceFeed {
        fn latest_round_data(env: Env) -> PriceRound {
            env.storage()
                .instance()
                .get(&DataKey::Round)
                .expect("mock feed: no round set")
        }
    }
}

mod mock_strategy_venue {
    use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

    use crate::interfaces::StrategyVenueInterface;

    #[contracttype]
    #[derive(Clone)]
    pub struct PendingWithdrawal {
        pub from: Address,
        pub asset: Address,
        pub amount: i128,
    }

    #[contracttype]
    #[derive(Clone)]
    enum DataKey {
        Staked(Address, Address), // (strategy, asset)
        Pending(u64),
        NextPendingId,
    }

    #[contract]
    pub struct MockStrategyVenue;

    #[contractimpl]
    impl MockStrategyVenue {
        pub fn staked_balance(env: Env, strategy: Address, asset: Address) -> i128 {
            env.storage()
                .instance()
                .get(&DataKey::Staked(strategy, asset))
                .unwrap_or(0)
        }
    }

    #[contractimpl]
    impl StrategyVenueInterface for MockStrategyVenue {
        fn deposit(env: Env, from: Address, strategy: Address, asset: Address, amount: i128) {
            from.require_auth();

            let key = DataKey::Staked(strategy, asset);
            let staked: i128 = env.storage().instance().get(&key).unwrap_or(0);
            env.storage().instance().set(&key, &(staked + amount));
        }

        fn initiate_withdraw(
            env: Env,
            from: Address,
            strategy: Address,
            asset: Address,
            amount: i128,
        ) -> u64 {
            from.require_auth();

            let key = DataKey::Staked(strategy, asset.clone());
            let staked: i128 = env.storage().instance().get(&key).unwrap_or(0);
            assert!(staked >= amount, "mock venue: withdraw exceeds stake");
            env.storage().instance().set(&key, &(staked - amount));

            let pending_id: u64 = env
                .storage()
                .instance()
                .get(&DataKey::NextPendingId)
                .unwrap_or(1);
            env.storage()
                .instance()
                .set(&DataKey::NextPendingId, &(pending_id + 1));
            env.storage().instance().set(
                &DataKey::Pending(pending_id),
                &PendingWithdrawal {
                    from,
                    asset,
                    amount,
                },
            );
            pending_id
        }

        fn confirm_withdraw(env: Env, from: Address, pending_id: u64) -> i128 {
            from.require_auth();

            let pending: PendingWithdrawal = env
                .storage()
                .instance()
                .get(&DataKey::Pending(pending_id))
                .expect("mock venue: unknown pending id");
            assert_eq!(pending.from, from, "mock venue: wrong claimant");
            env.storage().instance().remove(&DataKey::Pending(pending_id));

            token::TokenClient::new(&env, &pending.asset).transfer(
                &env.current_contract_address(),
                &from,
                &pending.amount,
            );
            pending.amount
        }
    }
}
