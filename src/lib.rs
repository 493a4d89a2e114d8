//! Stake Ledger - bonded staking with admin slashing for Casper Network
//!
//! This crate provides a single-contract staking ledger where accounts can:
//! - Register as a staker by bonding the exact configured deposit
//! - Top up their stake with arbitrary amounts
//! - Exit through a timed unstake/withdraw flow after a cooldown
//! - Be slashed by an Admin, who can later sweep confiscated funds

#![no_std]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod ledger;

// Re-export main types for external use
pub use errors::*;
pub use events::*;
pub use ledger::{AccountRecord, Role, StakeLedger};

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use ledger::StakeLedgerHostRef;
