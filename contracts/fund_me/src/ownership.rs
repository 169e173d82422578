//! # Ownership
//!
//! FundMe has exactly one privileged role: the owner, fixed at `init`.
//!
//! ## Storage layout
//!
//! - `DataKey::Owner` → `Address` (instance tier), written once.
//!
//! ## Threat model notes
//!
//! - There is no transfer or renounce path; the owner never changes.
//! - Every privileged entry point calls [`require_owner`] before it touches
//!   storage or moves funds, so a rejected caller leaves no trace.

use soroban_sdk::{log, Address, Env};

use crate::{storage, Error};

/// Record `owner` together with the contract configuration.
///
/// Fails with `AlreadyInitialized` if an owner is already set.
pub fn init_owner(
    env: &Env,
    owner: &Address,
    price_feed: &Address,
    native_asset: &Address,
) -> Result<(), Error> {
    if storage::is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::save_config(env, owner, price_feed, native_asset);
    Ok(())
}

/// Assert that `caller` is the owner.
///
/// The caller's signature is checked by the entry point; this only compares
/// identities. Fails with `NotOwner` on mismatch.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    let owner = storage::load_owner(env)?;
    if *caller != owner {
        log!(env, "withdraw rejected: caller is not the owner", caller.clone());
        return Err(Error::NotOwner);
    }
    Ok(owner)
}

/// Returns `true` if `address` is the owner.
pub fn is_owner(env: &Env, address: &Address) -> bool {
    storage::load_owner(env)
        .map(|owner| owner == *address)
        .unwrap_or(false)
}
