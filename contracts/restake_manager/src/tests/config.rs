extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use super::setup::{deploy_system, deploy_system_with_allocations};

#[test]
fn collateral_registry_records_metadata_in_order() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    assert_eq!(
        test.manager.collateral_tokens(),
        vec![&env, test.steth.address.clone(), test.cbeth.address.clone()]
    );

    let config = test.manager.collateral_config(&test.steth.address);
    assert!(config.enabled);
    assert_eq!(config.decimals, 7);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn add_collateral_token_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    test.manager
        .add_collateral_token(&test.admin, &test.steth.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn add_collateral_token_requires_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let outsider = Address::generate(&env);
    let asset = Address::generate(&env);

    test.manager.add_collateral_token(&outsider, &asset);
}

#[test]
fn delegator_registry_tracks_allocations() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    assert_eq!(
        test.manager.operator_delegators(),
        vec![
            &env,
            test.delegator1.address.clone(),
            test.delegator2.address.clone()
        ]
    );
    assert_eq!(test.manager.delegator_allocation(&test.delegator1.address), 7_000);
    assert_eq!(test.manager.delegator_allocation(&test.delegator2.address), 3_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn add_operator_delegator_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    // Leave room in the weight budget so the duplicate check is what
    // fires.
    let test = deploy_system_with_allocations(&env, 7_000, None);

    test.manager
        .add_operator_delegator(&test.admin, &test.delegator1.address, &1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")]
fn add_operator_delegator_beyond_full_allocation_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let third = Address::generate(&env);

    // 7000 + 3000 already accounts for the whole pool.
    test.manager.add_operator_delegator(&test.admin, &third, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn set_allocation_for_unknown_delegator_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let unknown = Address::generate(&env);

    test.manager
        .set_operator_delegator_allocation(&test.admin, &unknown, &1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")]
fn set_allocation_beyond_full_allocation_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    test.manager
        .set_operator_delegator_allocation(&test.admin, &test.delegator2.address, &3_001);
}

#[test]
fn reallocation_within_budget_succeeds() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    // Shrink before growing; the sum constraint holds at every step.
    test.manager
        .set_operator_delegator_allocation(&test.admin, &test.delegator1.address, &6_000);
    test.manager
        .set_operator_delegator_allocation(&test.admin, &test.delegator2.address, &4_000);

    assert_eq!(test.manager.delegator_allocation(&test.delegator1.address), 6_000);
    assert_eq!(test.manager.delegator_allocation(&test.delegator2.address), 4_000);
}

#[test]
#[should_panic(expected = "out of range")]
fn allocation_above_ten_thousand_bps_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system_with_allocations(&env, 7_000, None);
    let third = Address::generate(&env);

    test.manager
        .add_operator_delegator(&test.admin, &third, &10_001);
}

#[test]
fn disabled_collateral_can_be_reenabled() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    test.manager
        .set_collateral_enabled(&test.admin, &test.steth.address, &false);
    assert!(!test.manager.collateral_config(&test.steth.address).enabled);

    test.manager
        .set_collateral_enabled(&test.admin, &test.steth.address, &true);
    assert!(test.manager.collateral_config(&test.steth.address).enabled);
}

#[test]
#[should_panic(expected = "Error(Contract, #101)")]
fn set_collateral_enabled_for_unknown_asset_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let unknown = Address::generate(&env);

    test.manager
        .set_collateral_enabled(&test.admin, &unknown, &false);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    test.manager.initialize(
        &test.admin,
        &test.share_token.address,
        &test.oracle.address,
        &test.deposit_queue.address,
        &test.withdraw_queue.address,
    );
}
