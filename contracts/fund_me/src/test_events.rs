extern crate std;

use soroban_sdk::{
    symbol_short, testutils::Events, vec, Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::events::{Funded, Initialized, Withdrawn};
use crate::price_converter::PRECISION;
use crate::testutils::*;
use crate::FundMeClient;

fn last_event(env: &Env) -> (Address, Vec<Val>, Val) {
    env.events().all().last().expect("No events found")
}

#[test]
fn test_initialized_event() {
    let ctx = setup();

    let event = last_event(&ctx.env);

    // Topic: (symbol_short!("init"),)
    assert_eq!(event.0, ctx.client.address);
    let expected_topics = vec![&ctx.env, symbol_short!("init").into_val(&ctx.env)];
    assert_eq!(event.1, expected_topics);

    let data: Initialized = event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        Initialized {
            owner: ctx.owner.clone(),
            price_feed: ctx.feed.address.clone(),
            native_asset: ctx.asset.address.clone(),
        }
    );
}

#[test]
fn test_funded_event() {
    let ctx = setup();
    let funder = ctx.funder_with(SEND_VALUE);

    ctx.client.fund(&funder, &SEND_VALUE);

    let event = last_event(&ctx.env);

    // Topic: (symbol_short!("funded"), funder)
    assert_eq!(event.0, ctx.client.address);
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("funded").into_val(&ctx.env),
        funder.into_val(&ctx.env),
    ];
    assert_eq!(event.1, expected_topics);

    let data: Funded = event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        Funded {
            funder: funder.clone(),
            amount: SEND_VALUE,
            usd_value: 2_000 * PRECISION,
        }
    );
}

#[test]
fn test_rejected_deposit_emits_nothing() {
    let ctx = setup();
    let funder = ctx.funder_with(SEND_VALUE);

    let _ = ctx.client.try_fund(&funder, &1);

    // `funded` is the only ledger event with two topics.
    let funded = ctx
        .env
        .events()
        .all()
        .iter()
        .filter(|e| e.0 == ctx.client.address && e.1.len() == 2)
        .count();
    assert_eq!(funded, 0);
}

#[test]
fn test_withdrawn_event() {
    let ctx = setup();
    let first = ctx.funder_with(SEND_VALUE);
    let second = ctx.funder_with(SEND_VALUE);
    ctx.client.fund(&first, &SEND_VALUE);
    ctx.client.fund(&second, &SEND_VALUE);

    ctx.client.withdraw(&ctx.owner);

    let event = last_event(&ctx.env);

    // Topic: (symbol_short!("withdrawn"),)
    assert_eq!(event.0, ctx.client.address);
    let expected_topics = vec![&ctx.env, symbol_short!("withdrawn").into_val(&ctx.env)];
    assert_eq!(event.1, expected_topics);

    let data: Withdrawn = event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        Withdrawn {
            owner: ctx.owner.clone(),
            amount: 2 * SEND_VALUE,
            funders_cleared: 2,
        }
    );
}

#[test]
fn test_withdraw_variants_emit_identical_events() {
    let ctx = setup();
    let cheap: FundMeClient = ctx.second_ledger();
    let funder = ctx.funder_with(4 * SEND_VALUE);
    for client in [&ctx.client, &cheap] {
        client.fund(&funder, &SEND_VALUE);
        client.fund(&funder, &SEND_VALUE);
    }

    ctx.client.withdraw(&ctx.owner);
    let plain_event = last_event(&ctx.env);
    cheap.cheaper_withdraw(&ctx.owner);
    let cheap_event = last_event(&ctx.env);

    assert_eq!(plain_event.0, ctx.client.address);
    assert_eq!(cheap_event.0, cheap.address);
    assert_eq!(plain_event.1, cheap_event.1);

    let plain_data: Withdrawn = plain_event.2.try_into_val(&ctx.env).unwrap();
    let cheap_data: Withdrawn = cheap_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(plain_data, cheap_data);
    assert_eq!(plain_data.funders_cleared, 2);
}
