//! Error definitions for the stake ledger

use odra::prelude::*;

/// Stake ledger errors
#[odra::odra_error]
pub enum Error {
    /// Registration deposit is zero, unset, or the attached value differs
    InvalidDepositAmount = 1,
    /// Unstake cooldown duration is zero
    InvalidWaitTime = 2,
    /// Account already holds a role
    AlreadyRegistered = 3,
    /// Deposit must be fully withdrawn before unregistering
    CannotUnregisterWithPositiveDeposit = 4,
    /// Caller does not hold the role required for this operation
    SenderMustHaveTheRequiredRole = 5,
    /// No deposit to start a cooldown for
    NoStakeToUnstake = 6,
    /// Withdrawal requires a pending unstake
    NoStakeInitiated = 7,
    /// Cooldown has not elapsed yet
    WithdrawalPeriodNotElapsed = 8,
    /// Slash target does not hold the Staker role
    CannotSlashNonStaker = 9,
    /// Slash amount exceeds the target's deposit
    InsufficientStakeToSlash = 10,
    /// Nothing accumulated to sweep
    NoSlashedAmountToWithdraw = 11,
    /// Beneficiary is the zero address
    AddressZero = 12,
    /// Outbound transfer cannot be covered
    WithdrawalFailed = 13,
    /// Caller is not the contract owner
    CallerNotOwner = 14,
}
