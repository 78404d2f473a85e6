extern crate std;

use normal::constants::PRICE_PRECISION;
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env};

use super::setup::{deploy_system, mint_and_deposit};

#[test]
fn empty_system_has_zero_value_and_unit_share_price() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);

    assert_eq!(test.manager.total_value(), 0);
    assert_eq!(test.manager.delegators_value(), 0);
    assert_eq!(test.manager.share_price(), PRICE_PRECISION);
}

#[test]
fn valuation_spans_assets_at_their_own_prices() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let alice = Address::generate(&env);

    mint_and_deposit(&test, &alice, &test.steth_admin, &test.steth.address, 1_000);
    mint_and_deposit(&test, &alice, &test.cbeth_admin, &test.cbeth.address, 1_000);

    // 1000 at 1.0 plus 1000 at 1.1.
    assert_eq!(test.manager.total_value(), 2_100);
    assert_eq!(test.manager.delegators_value(), 2_100);
}

#[test]
fn total_value_includes_withdraw_buffers() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let alice = Address::generate(&env);

    mint_and_deposit(&test, &alice, &test.steth_admin, &test.steth.address, 1_000);

    // Divest 400 from the delegator into the withdraw buffer. The value
    // changes hands but the protocol total is unchanged.
    let divestment_id =
        test.delegator1
            .initiate_divest(&test.admin, &test.steth.address, &400);
    test.delegator1.confirm_divest(&test.admin, &divestment_id);

    assert_eq!(test.delegator1.token_balance(&test.steth.address), 600);
    assert_eq!(
        test.withdraw_queue.buffer_balance(&test.steth.address),
        400
    );
    assert_eq!(test.manager.delegators_value(), 600);
    assert_eq!(test.manager.total_value(), 1_000);
    assert_eq!(test.manager.share_price(), PRICE_PRECISION);
}

#[test]
fn share_price_tracks_value_per_share() {
    let env = Env::default();
    env.mock_all_auths();

    let test = deploy_system(&env);
    let alice = Address::generate(&env);

    // 1000 cbETH mints 1100 shares at bootstrap; value and supply stay
    // equal, so the share price holds at 1.0.
    mint_and_deposit(&test, &alice, &test.cbeth_admin, &test.cbeth.address, 1_000);

    assert_eq!(test.share_token.total_supply(), 1_100);
    assert_eq!(test.manager.total_value(), 1_100);
    assert_eq!(test.manager.share_price(), PRICE_PRECISION);
}
