//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by FundMe.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type      | Description                          |
//! |---------------|-----------|--------------------------------------|
//! | `Owner`       | `Address` | Sole address allowed to withdraw     |
//! | `PriceFeed`   | `Address` | AggregatorV3-style USD price feed    |
//! | `NativeAsset` | `Address` | Token contract holding the custody   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type           | Description                       |
//! |-------------------------|----------------|-----------------------------------|
//! | `Funders`               | `Vec<Address>` | One entry per successful deposit  |
//! | `AmountFunded(address)` | `i128`         | Cumulative amount per funder      |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! A withdrawal removes every `AmountFunded` entry and the `Funders` entry
//! outright, so a cleared ledger holds no persistent data at all.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract owner (Instance).
    Owner,
    /// Price feed contract address (Instance).
    PriceFeed,
    /// Native asset token contract address (Instance).
    NativeAsset,
    /// Ordered funding events (Persistent).
    Funders,
    /// Cumulative amount funded by an address (Persistent).
    AmountFunded(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Persist the three configuration addresses in one go.
pub fn save_config(env: &Env, owner: &Address, price_feed: &Address, native_asset: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::PriceFeed, price_feed);
    instance.set(&DataKey::NativeAsset, native_asset);
    bump_instance(env);
}

fn load_instance_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
    let address = env
        .storage()
        .instance()
        .get(key)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(address)
}

pub fn load_owner(env: &Env) -> Result<Address, Error> {
    load_instance_address(env, &DataKey::Owner)
}

pub fn load_price_feed(env: &Env) -> Result<Address, Error> {
    load_instance_address(env, &DataKey::PriceFeed)
}

pub fn load_native_asset(env: &Env) -> Result<Address, Error> {
    load_instance_address(env, &DataKey::NativeAsset)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent key. Absent keys are left alone.
fn bump_persistent(env: &Env, key: &DataKey) {
    let persistent = env.storage().persistent();
    if persistent.has(key) {
        persistent.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}

// ─────────────────────────────────────────────────────────
// Funder order
// ─────────────────────────────────────────────────────────

/// Load the full funder list. An empty list is returned when nothing is stored.
pub fn load_funders(env: &Env) -> Vec<Address> {
    let key = DataKey::Funders;
    let funders = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    bump_persistent(env, &key);
    funders
}

/// Number of entries in the funder list.
pub fn funders_count(env: &Env) -> u32 {
    load_funders(env).len()
}

/// Funder at `index`, reading the list from storage on every call.
pub fn funder_at(env: &Env, index: u32) -> Result<Address, Error> {
    load_funders(env).get(index).ok_or(Error::IndexOutOfRange)
}

/// Append `funder` to the funder list.
pub fn push_funder(env: &Env, funder: &Address) {
    let key = DataKey::Funders;
    let mut funders = load_funders(env);
    funders.push_back(funder.clone());
    env.storage().persistent().set(&key, &funders);
    bump_persistent(env, &key);
}

/// Drop the funder list entirely.
pub fn clear_funders(env: &Env) {
    env.storage().persistent().remove(&DataKey::Funders);
}

// ─────────────────────────────────────────────────────────
// Per-funder amounts
// ─────────────────────────────────────────────────────────

/// Cumulative amount funded by `funder`, or 0 if none is recorded.
pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    let amount = env.storage().persistent().get(&key).unwrap_or(0);
    bump_persistent(env, &key);
    amount
}

/// Add `amount` to the record of `funder` and return the new total.
pub fn add_to_amount_funded(env: &Env, funder: &Address, amount: i128) -> Result<i128, Error> {
    let key = DataKey::AmountFunded(funder.clone());
    let total = get_amount_funded(env, funder)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
    Ok(total)
}

/// Remove the record of `funder`. Subsequent reads return 0.
pub fn clear_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

/// Whether a record for `funder` exists at all (as opposed to reading 0).
#[cfg(test)]
pub fn has_amount_funded(env: &Env, funder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::AmountFunded(funder.clone()))
}

/// Whether the funder list entry exists at all.
#[cfg(test)]
pub fn has_funders(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Funders)
}
