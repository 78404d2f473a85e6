use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, String, Vec,
};
use soroban_sdk::token::TokenInterface;
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use normal::interfaces::ShareTokenInterface;

use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{add_total_supply, read_balance, read_total_supply, receive_balance, spend_balance};
use crate::errors::ErrorCode;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

fn check_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("negative amount is not allowed: {}", amount)
    }
}

fn read_administrator(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

fn write_administrator(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

fn read_minters(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Minters)
        .unwrap_or_else(|| Vec::new(env))
}

fn require_minter(env: &Env, minter: &Address) {
    if !read_minters(env).contains(minter) {
        log!(env, "Restake Token: sender is not an authorized minter");
        panic_with_error!(env, ErrorCode::NotMinter);
    }
}

contractmeta!(
    key = "Description",
    val = "Share token representing a claim on the restaked collateral pool"
);

#[contract]
pub struct RestakeToken;

#[contractimpl]
impl RestakeToken {
    pub fn __constructor(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > 18 {
            panic!("Decimal must not be greater than 18");
        }
        write_administrator(&env, &admin);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    /// Replace the set of addresses allowed to mint and burn shares on
    /// behalf of the protocol (the restake manager and withdraw queue).
    pub fn set_minters(env: Env, minters: Vec<Address>) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        env.storage().instance().set(&DataKey::Minters, &minters);
    }

    pub fn minters(env: Env) -> Vec<Address> {
        read_minters(&env)
    }
}

#[contractimpl]
impl ShareTokenInterface for RestakeToken {
    fn mint(env: Env, minter: Address, to: Address, amount: i128) {
        check_nonnegative_amount(amount);
        minter.require_auth();
        require_minter(&env, &minter);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        receive_balance(&env, to.clone(), amount);
        add_total_supply(&env, amount);
        TokenUtils::new(&env).events().mint(minter, to, amount);
    }

    fn burn_for(env: Env, minter: Address, from: Address, amount: i128) {
        check_nonnegative_amount(amount);
        minter.require_auth();
        require_minter(&env, &minter);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        add_total_supply(&env, -amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }
}

#[contractimpl]
impl token::Interface for RestakeToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        check_nonnegative_amount(amount);
        from.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(amount);
        from.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(amount);
        spender.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        check_nonnegative_amount(amount);
        from.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        add_total_supply(&env, -amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        check_nonnegative_amount(amount);
        spender.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        add_total_supply(&env, -amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
