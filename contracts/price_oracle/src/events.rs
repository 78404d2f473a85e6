use soroban_sdk::{Address, Env, Symbol};

pub struct PriceOracleEvents {}

impl PriceOracleEvents {
    /// Emitted when the oracle is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when a price feed is registered for an asset
    ///
    /// - topics - `["new_price_feed", asset: Address]`
    /// - data - `[feed: Address]`
    pub fn new_price_feed(env: &Env, asset: Address, feed: Address) {
        let topics = (Symbol::new(env, "new_price_feed"), asset);
        env.events().publish(topics, feed);
    }
}
