//! # Price Converter
//!
//! Converts native-asset amounts into USD using an external price feed.
//!
//! The feed is any contract exposing the AggregatorV3 read surface described
//! by [`PriceFeedInterface`]. Its answer is normalised to [`PRICE_DECIMALS`]
//! before use, so feeds reporting 8 decimals (the common USD pair format) and
//! feeds reporting 18 decimals are interchangeable.
//!
//! ```text
//! price18   = answer * 10^(18 - feed_decimals)
//! usd_value = price18 * amount / 10^18
//! ```
//!
//! The product is taken in 256-bit space; only the final USD value has to fit
//! in an `i128`.

use soroban_sdk::{contractclient, log, Address, Env, I256};

use crate::types::RoundData;
use crate::Error;

/// Fixed-point scale of native amounts and USD values.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Decimals every price is normalised to.
pub const PRICE_DECIMALS: u32 = 18;

/// Read surface of an AggregatorV3-style price feed.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn latest_round_data(env: Env) -> RoundData;
    fn decimals(env: Env) -> u32;
}

/// Latest price reported by `feed`, normalised to 18 decimals.
///
/// Fails with `OracleUnavailable` when the feed cannot be called or reports a
/// non-positive answer.
pub fn get_price(env: &Env, feed: &Address) -> Result<i128, Error> {
    let client = PriceFeedClient::new(env, feed);

    let round = match client.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => {
            log!(env, "price feed call failed", feed.clone());
            return Err(Error::OracleUnavailable);
        }
    };
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => {
            log!(env, "price feed decimals call failed", feed.clone());
            return Err(Error::OracleUnavailable);
        }
    };

    normalize_price(round.answer, decimals).map_err(|err| {
        log!(env, "price feed returned unusable answer", round.answer);
        err
    })
}

/// USD value (18 decimals) of `amount` native units at the feed's current price.
pub fn get_conversion_rate(env: &Env, amount: i128, feed: &Address) -> Result<i128, Error> {
    let price = get_price(env, feed)?;
    convert(env, amount, price)
}

/// Rescale a raw feed answer with `decimals` places to [`PRICE_DECIMALS`].
pub fn normalize_price(answer: i128, decimals: u32) -> Result<i128, Error> {
    if answer <= 0 {
        return Err(Error::OracleUnavailable);
    }

    let price = if decimals <= PRICE_DECIMALS {
        let factor = 10i128
            .checked_pow(PRICE_DECIMALS - decimals)
            .ok_or(Error::Overflow)?;
        answer.checked_mul(factor).ok_or(Error::Overflow)?
    } else {
        // A divisor beyond i128 range truncates any answer to zero.
        match 10i128.checked_pow(decimals - PRICE_DECIMALS) {
            Some(divisor) => answer / divisor,
            None => 0,
        }
    };

    if price <= 0 {
        return Err(Error::OracleUnavailable);
    }
    Ok(price)
}

/// `price * amount / PRECISION`, computed without intermediate overflow.
pub fn convert(env: &Env, amount: i128, price: i128) -> Result<i128, Error> {
    I256::from_i128(env, price)
        .mul(&I256::from_i128(env, amount))
        .div(&I256::from_i128(env, PRECISION))
        .to_i128()
        .ok_or(Error::Overflow)
}
