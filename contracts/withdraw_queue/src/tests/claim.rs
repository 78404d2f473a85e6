extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use crate::storage::RequestStatus;

use super::setup::{deploy_queue_env, fill_buffer, seed_shares, COOLDOWN};

#[test]
fn claim_pays_out_and_debits_buffer() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);

    // Buffer liquidity counts toward protocol value: 1000 in the buffer
    // plus 1000 at the delegators backs 2000 shares at price 1.0.
    fill_buffer(&test, 1_000);
    seed_shares(&env, &test, &alice, 2_000, 1_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &400);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    test.queue.claim(&alice, &request_id);

    assert_eq!(test.collateral.balance(&alice), 400);
    assert_eq!(
        test.queue.buffer_balance(&test.collateral.address),
        600
    );
    assert_eq!(
        test.queue.query_request(&request_id).status,
        RequestStatus::Claimed
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn claim_before_cooldown_fails() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    fill_buffer(&test, 1_000);
    seed_shares(&env, &test, &alice, 2_000, 1_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &400);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN - 1;
    });

    test.queue.claim(&alice, &request_id);
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn claim_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    fill_buffer(&test, 1_000);
    seed_shares(&env, &test, &alice, 2_000, 1_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &400);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    test.queue.claim(&alice, &request_id);
    test.queue.claim(&alice, &request_id);
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn claim_of_cancelled_request_fails() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    fill_buffer(&test, 1_000);
    seed_shares(&env, &test, &alice, 2_000, 1_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &400);
    test.queue.cancel_withdraw(&alice, &request_id);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    test.queue.claim(&alice, &request_id);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn claim_by_non_requester_fails() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    fill_buffer(&test, 1_000);
    seed_shares(&env, &test, &alice, 2_000, 1_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &400);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    test.queue.claim(&bob, &request_id);
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn claim_of_unknown_request_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);

    test.queue.claim(&alice, &99);
}

#[test]
fn claim_exceeding_buffer_fails_and_leaves_state_unchanged() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    // Buffer holds exactly 10_000; a 10_001 unit redemption cannot be
    // covered until ops replenish.
    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    fill_buffer(&test, 10_000);
    seed_shares(&env, &test, &alice, 20_001, 10_001);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &10_001);
    assert_eq!(test.queue.query_request(&request_id).asset_amount, 10_001);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    let result = test.queue.try_claim(&alice, &request_id);
    assert!(result.is_err());

    // Nothing moved: buffer intact, request still pending, no payout.
    assert_eq!(test.queue.buffer_balance(&test.collateral.address), 10_000);
    assert_eq!(
        test.queue.query_request(&request_id).status,
        RequestStatus::Pending
    );
    assert_eq!(test.collateral.balance(&alice), 0);

    // After replenishment the same claim goes through.
    fill_buffer(&test, 1);
    test.queue.claim(&alice, &request_id);
    assert_eq!(test.collateral.balance(&alice), 10_001);
    assert_eq!(test.queue.buffer_balance(&test.collateral.address), 0);
}

#[test]
fn claim_for_exactly_the_buffer_drains_it_to_zero() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000;
    });

    let test = deploy_queue_env(&env, 10_000);
    let alice = Address::generate(&env);
    fill_buffer(&test, 10_000);
    seed_shares(&env, &test, &alice, 20_000, 10_000);

    let request_id = test
        .queue
        .request_withdraw(&alice, &test.collateral.address, &10_000);
    assert_eq!(test.queue.query_request(&request_id).asset_amount, 10_000);

    env.ledger().with_mut(|li| {
        li.timestamp = 1_000_000 + COOLDOWN;
    });

    test.queue.claim(&alice, &request_id);

    assert_eq!(test.collateral.balance(&alice), 10_000);
    assert_eq!(test.queue.buffer_balance(&test.collateral.address), 0);
}
