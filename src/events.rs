//! Events for the stake ledger (CEP-88 compliant)

use odra::casper_types::U512;
use odra::prelude::*;

/// Emitted when the owner updates the registration configuration
#[odra::event]
pub struct ConfigurationSet {
    pub deposit_amount: U512,
    pub wait_time: u64,
}

/// Emitted when an account registers as a staker
#[odra::event]
pub struct Registered {
    pub staker: Address,
    pub deposit: U512,
}

/// Emitted when an account gives up the Staker role
#[odra::event]
pub struct Unregistered {
    pub staker: Address,
}

/// Emitted when a staker tops up their deposit
#[odra::event]
pub struct Staked {
    pub staker: Address,
    pub amount: U512,
    pub total_deposit: U512,
}

/// Emitted when a staker starts the withdrawal cooldown
#[odra::event]
pub struct UnstakeInitiated {
    pub staker: Address,
    pub initiated_at: u64,
    pub withdrawable_at: u64,
}

/// Emitted when a staker withdraws their full deposit
#[odra::event]
pub struct Withdrawn {
    pub staker: Address,
    pub amount: U512,
}

/// Emitted when an admin confiscates stake
#[odra::event]
pub struct Slashed {
    pub staker: Address,
    pub amount: U512,
    pub total_slashed: U512,
}

/// Emitted when accumulated slashed funds are swept to a beneficiary
#[odra::event]
pub struct SlashedWithdrawn {
    pub beneficiary: Address,
    pub amount: U512,
}

/// Emitted when ownership is handed over
#[odra::event]
pub struct OwnershipTransferred {
    pub old_owner: Address,
    pub new_owner: Address,
}

/// Emitted when the owner equips an account with the Admin role
#[odra::event]
pub struct AdminGranted {
    pub account: Address,
}
