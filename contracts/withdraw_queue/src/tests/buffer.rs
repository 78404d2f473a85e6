extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env};

use super::setup::{deploy_queue_env, fill_buffer};

#[test]
fn fill_credits_balance_and_moves_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);

    fill_buffer(&test, 2_500);

    assert_eq!(test.queue.buffer_balance(&test.collateral.address), 2_500);
    assert_eq!(test.collateral.balance(&test.queue.address), 2_500);
    assert_eq!(test.queue.buffer_deficit(&test.collateral.address), 7_500);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn fill_for_unconfigured_asset_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);

    let admin = test.admin.clone();
    let other = Address::generate(&env);
    test.queue.fill_withdraw_buffer(&admin, &other, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn fill_with_non_positive_amount_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);

    test.queue
        .fill_withdraw_buffer(&test.admin, &test.collateral.address, &0);
}

#[test]
fn set_buffer_target_retargets_existing_entry() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);
    fill_buffer(&test, 4_000);

    test.queue
        .set_buffer_target(&test.admin, &test.collateral.address, &5_000);

    // Balance survives a retarget.
    assert_eq!(test.queue.buffer_target(&test.collateral.address), 5_000);
    assert_eq!(test.queue.buffer_balance(&test.collateral.address), 4_000);
    assert_eq!(test.queue.buffer_deficit(&test.collateral.address), 1_000);
}

#[test]
fn set_buffer_target_adds_new_asset_entry() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);
    let new_asset = Address::generate(&env);

    assert_eq!(test.queue.buffer_target(&new_asset), 0);

    test.queue
        .set_buffer_target(&test.admin, &new_asset, &7_000);

    assert_eq!(test.queue.buffer_target(&new_asset), 7_000);
    assert_eq!(test.queue.buffer_balance(&new_asset), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn set_buffer_target_requires_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);
    let outsider = Address::generate(&env);

    test.queue
        .set_buffer_target(&outsider, &test.collateral.address, &5_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);

    test.queue.initialize(
        &test.admin,
        &test.manager.address,
        &test.share_token.address,
        &test.oracle.address,
        &super::setup::COOLDOWN,
        &soroban_sdk::vec![&env],
    );
}
