//! # Types
//!
//! Shared data structures used across the FundMe modules.
//!
//! ## Price feed rounds
//!
//! [`RoundData`] mirrors the AggregatorV3 `latestRoundData` tuple so that any
//! feed speaking that shape can be plugged in as the contract's oracle. Only
//! `answer` is consumed by the ledger; the remaining fields are carried for
//! off-chain tooling that reads the same feed.
//!
//! ## Withdrawal strategy
//!
//! Both withdrawal entry points run the same operation. [`WithdrawStrategy`]
//! only selects how the funder list is traversed while records are cleared:
//!
//! ```text
//! Storage  : for i in 0..len(storage) { clear(storage[i]) }
//! Snapshot : let funders = storage; for f in funders { clear(f) }
//! ```

use soroban_sdk::contracttype;

/// One round reported by a price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    /// Price of one native unit in USD, scaled by the feed's `decimals()`.
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// How `withdraw` walks the funder list while clearing records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawStrategy {
    /// Re-read the funder list from persistent storage on every iteration.
    Storage,
    /// Read the funder list once into memory, then iterate the copy.
    Snapshot,
}
