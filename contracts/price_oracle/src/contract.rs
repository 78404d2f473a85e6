use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env};

use normal::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use normal::error::ErrorCode;
use normal::oracle::{
    token_amount_from_value, token_value, validate_price_round, PriceFeedClient, PriceRound,
};

use crate::events::PriceOracleEvents;
use crate::oracle::PriceOracleTrait;
use crate::storage::{get_config, get_feed, is_initialized, save_config, save_feed, set_initialized, Config};

contractmeta!(
    key = "Description",
    val = "Values collateral assets in the reference unit via external price feeds"
);

#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracleTrait for PriceOracle {
    fn initialize(env: Env, admin: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Price Oracle: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        save_config(&env, Config { admin: admin.clone() });

        PriceOracleEvents::initialize(&env, admin);
    }

    fn set_price_feed(env: Env, sender: Address, asset: Address, feed: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if config.admin != sender {
            log!(&env, "Price Oracle: Set price feed: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        save_feed(&env, &asset, &feed);

        PriceOracleEvents::new_price_feed(&env, asset, feed);
    }

    fn price_feed(env: Env, asset: Address) -> Option<Address> {
        get_feed(&env, &asset)
    }

    fn price(env: Env, asset: Address) -> PriceRound {
        let feed = get_feed(&env, &asset).unwrap_or_else(|| {
            log!(&env, "Price Oracle: Price: no feed registered for asset");
            panic_with_error!(&env, ErrorCode::OracleUnknownAsset);
        });

        let round = PriceFeedClient::new(&env, &feed).latest_round_data();

        let now = env.ledger().timestamp();
        if let Err(err) = validate_price_round(&round, now) {
            log!(&env, "Price Oracle: Price: rejecting oracle round");
            panic_with_error!(&env, err);
        }

        round
    }

    fn lookup_token_value(env: Env, asset: Address, amount: i128) -> i128 {
        let round = Self::price(env.clone(), asset);
        token_value(&env, amount, round.answer)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn lookup_token_amount_from_value(env: Env, asset: Address, value: i128) -> i128 {
        let round = Self::price(env.clone(), asset);
        token_amount_from_value(&env, value, round.answer)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }
}
