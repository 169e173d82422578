//! # FundMe Contract
//!
//! A crowdfunding vault priced in USD. Anyone may fund it with the native
//! asset as long as the deposit is worth at least [`MINIMUM_USD`] at the
//! current oracle price; only the owner may withdraw, and a withdrawal always
//! takes the whole balance and wipes every funder record.
//!
//! | Phase     | Entry Point(s)                                         |
//! |-----------|--------------------------------------------------------|
//! | Bootstrap | [`FundMe::init`]                                       |
//! | Funding   | [`FundMe::fund`], [`FundMe::receive`]                  |
//! | Payout    | [`FundMe::withdraw`], [`FundMe::cheaper_withdraw`]     |
//! | Queries   | `get_funder`, `get_address_to_amount_funded`, `get_owner`, `get_price_feed`, ... |
//!
//! ## Architecture
//!
//! Price lookups live in [`price_converter`], the owner guard in
//! [`ownership`] and all storage access in [`storage`]. This file holds the
//! public entry points and the deposit / withdrawal flows.
//!
//! Every entry point returns `Result<_, Error>`. A returned error makes the
//! host discard every write of the invocation, so a failed deposit or
//! withdrawal never leaves partial state behind.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env};

pub mod events;
pub mod ownership;
pub mod price_converter;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

use price_converter::PRECISION;
pub use types::{RoundData, WithdrawStrategy};

/// Smallest accepted deposit, in USD with 18 decimals ($50).
pub const MINIMUM_USD: i128 = 50 * PRECISION;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InsufficientFunds = 4,
    TransferFailed = 5,
    IndexOutOfRange = 6,
    OracleUnavailable = 7,
    Overflow = 8,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract.
    ///
    /// Must be called exactly once immediately after deployment by the
    /// deployer, who signs and becomes the owner.
    ///
    /// - `price_feed` is the USD price feed for the native asset.
    /// - `native_asset` is the token contract that holds custody.
    pub fn init(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_asset: Address,
    ) -> Result<(), Error> {
        owner.require_auth();
        ownership::init_owner(&env, &owner, &price_feed, &native_asset)?;
        events::emit_initialized(&env, owner, price_feed, native_asset);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Deposit `amount` of the native asset from `funder`.
    ///
    /// Fails with `InsufficientFunds` if `amount` is worth less than
    /// [`MINIMUM_USD`]; nothing is transferred in that case.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        Self::fund_from(&env, funder, amount)
    }

    /// Catch-all deposit path for wallets that do not call `fund` by name.
    ///
    /// Identical to [`FundMe::fund`], including the minimum check.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        Self::fund_from(&env, from, amount)
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Send the whole balance to the owner and reset every funder record.
    ///
    /// - `caller` must be the owner, otherwise `NotOwner`.
    /// - Fails with `TransferFailed` if the payout is rejected; all records
    ///   are left as they were.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        Self::withdraw_with(&env, caller, WithdrawStrategy::Storage)
    }

    /// Same as [`FundMe::withdraw`], but reads the funder list once instead
    /// of on every loop iteration.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        Self::withdraw_with(&env, caller, WithdrawStrategy::Snapshot)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::load_owner(&env)
    }

    /// Return `true` if `address` is the owner.
    pub fn is_owner(env: Env, address: Address) -> bool {
        ownership::is_owner(&env, &address)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, Error> {
        storage::load_price_feed(&env)
    }

    pub fn get_native_asset(env: Env) -> Result<Address, Error> {
        storage::load_native_asset(&env)
    }

    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Cumulative amount deposited by `funder` since the last withdrawal.
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&env, &funder)
    }

    /// Funder of the `index`-th deposit since the last withdrawal.
    ///
    /// Fails with `IndexOutOfRange` if `index` is past the end.
    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        storage::funder_at(&env, index)
    }

    /// Number of deposits since the last withdrawal.
    pub fn get_funders_count(env: Env) -> u32 {
        storage::funders_count(&env)
    }

    /// Native asset currently held by the contract.
    pub fn get_balance(env: Env) -> Result<i128, Error> {
        let native_asset = storage::load_native_asset(&env)?;
        Ok(token::Client::new(&env, &native_asset).balance(&env.current_contract_address()))
    }

    /// USD value (18 decimals) of `amount` at the current feed price.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, Error> {
        let price_feed = storage::load_price_feed(&env)?;
        price_converter::get_conversion_rate(&env, amount, &price_feed)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn fund_from(env: &Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        let price_feed = storage::load_price_feed(env)?;
        let native_asset = storage::load_native_asset(env)?;

        let usd_value = price_converter::get_conversion_rate(env, amount, &price_feed)?;
        if usd_value < MINIMUM_USD {
            log!(env, "deposit below minimum", funder.clone(), usd_value);
            return Err(Error::InsufficientFunds);
        }

        token::Client::new(env, &native_asset).transfer(
            &funder,
            &env.current_contract_address(),
            &amount,
        );

        storage::add_to_amount_funded(env, &funder, amount)?;
        // Duplicates are kept: the list records deposits, not distinct funders.
        storage::push_funder(env, &funder);

        events::emit_funded(env, funder, amount, usd_value);
        Ok(())
    }

    fn withdraw_with(env: &Env, caller: Address, strategy: WithdrawStrategy) -> Result<(), Error> {
        caller.require_auth();
        let owner = ownership::require_owner(env, &caller)?;
        let native_asset = storage::load_native_asset(env)?;

        // Effects first: records are gone before any funds move.
        let funders_cleared = match strategy {
            WithdrawStrategy::Storage => {
                let mut index = 0;
                while index < storage::funders_count(env) {
                    let funder = storage::funder_at(env, index)?;
                    storage::clear_amount_funded(env, &funder);
                    index += 1;
                }
                index
            }
            WithdrawStrategy::Snapshot => {
                let funders = storage::load_funders(env);
                for funder in funders.iter() {
                    storage::clear_amount_funded(env, &funder);
                }
                funders.len()
            }
        };
        storage::clear_funders(env);

        let contract = env.current_contract_address();
        let asset = token::Client::new(env, &native_asset);
        let amount = asset.balance(&contract);
        if amount > 0 {
            match asset.try_transfer(&contract, &owner, &amount) {
                Ok(Ok(())) => {}
                _ => {
                    log!(env, "payout to owner rejected", owner, amount);
                    return Err(Error::TransferFailed);
                }
            }
        }

        events::emit_withdrawn(env, owner, amount, funders_cleared);
        Ok(())
    }
}
