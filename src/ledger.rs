//! StakeLedger - permissionless bonded staking with admin slashing
//!
//! Accounts register by attaching the exact configured deposit, may top up
//! their stake freely, and exit through a timed unstake/withdraw flow. An
//! Admin can confiscate stake into a ledger-wide accumulator and later sweep
//! it to a beneficiary.

use odra::casper_types::account::AccountHash;
use odra::casper_types::U512;
use odra::prelude::*;

use crate::errors::Error;
use crate::events::{
    AdminGranted, ConfigurationSet, OwnershipTransferred, Registered, Slashed, SlashedWithdrawn,
    Staked, UnstakeInitiated, Unregistered, Withdrawn,
};

/// Per-account role. Staker and Admin are mutually exclusive; an account
/// starts at None and the only admitted transitions are None -> Staker
/// (register), Staker -> None (unregister), and None -> Admin (init or
/// grant_admin).
#[odra::odra_type]
pub enum Role {
    None,
    Staker,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::None
    }
}

/// Ledger record for a single account. Created implicitly on first access
/// with all-default values; reset to defaults on unregister, never deleted.
#[odra::odra_type]
pub struct AccountRecord {
    /// Amount currently staked, in motes.
    pub deposit: U512,
    /// Block time (ms) at which unstake was initiated; 0 = no unstake pending.
    pub unstake_timestamp: u64,
    /// Current role of the account.
    pub role: Role,
}

impl Default for AccountRecord {
    fn default() -> Self {
        Self {
            deposit: U512::zero(),
            unstake_timestamp: 0,
            role: Role::default(),
        }
    }
}

/// StakeLedger - the staking ledger contract
#[odra::module]
pub struct StakeLedger {
    // Ownership (configuration authority, distinct from the Admin role)
    owner: Var<Address>,

    // Per-account records
    accounts: Mapping<Address, AccountRecord>,

    // Registration config; both 0 until set_configuration is called
    registration_deposit: Var<U512>,
    registration_wait_time: Var<u64>,

    // Confiscated funds not yet swept
    total_slashed: Var<U512>,
}

#[odra::module]
impl StakeLedger {
    /// Initialize the ledger. The deploying caller becomes the owner and
    /// receives the Admin role record.
    pub fn init(&mut self) {
        let deployer = self.env().caller();
        self.owner.set(deployer);

        let mut record = self.account(&deployer);
        record.role = Role::Admin;
        self.accounts.set(&deployer, record);

        self.registration_deposit.set(U512::zero());
        self.registration_wait_time.set(0);
        self.total_slashed.set(U512::zero());
    }

    // ============ CONFIGURATION ============

    /// Set the required registration deposit and the unstake cooldown.
    /// Owner only; the Admin role alone does not grant access. Both values
    /// must be non-zero and are overwritten together.
    pub fn set_configuration(&mut self, deposit_amount: U512, wait_time: u64) {
        self.require_owner();

        if deposit_amount == U512::zero() {
            self.env().revert(Error::InvalidDepositAmount);
        }
        if wait_time == 0 {
            self.env().revert(Error::InvalidWaitTime);
        }

        self.registration_deposit.set(deposit_amount);
        self.registration_wait_time.set(wait_time);

        self.env().emit_event(ConfigurationSet {
            deposit_amount,
            wait_time,
        });
    }

    // ============ STAKER LIFECYCLE ============

    /// Register as a staker. The attached value must equal the configured
    /// registration deposit exactly; under- and over-payment are rejected,
    /// as is registering before the configuration is set.
    #[odra(payable)]
    pub fn register(&mut self) {
        let caller = self.env().caller();
        let value = self.env().attached_value();

        let mut record = self.account(&caller);
        if record.role != Role::None {
            self.env().revert(Error::AlreadyRegistered);
        }

        let required = self.registration_deposit.get_or_default();
        if required == U512::zero() || value != required {
            self.env().revert(Error::InvalidDepositAmount);
        }

        record.role = Role::Staker;
        record.deposit = record.deposit + value;
        self.accounts.set(&caller, record);

        self.env().emit_event(Registered {
            staker: caller,
            deposit: value,
        });
    }

    /// Give up the Staker role. Only allowed once the deposit has been fully
    /// withdrawn; the account record is reset to defaults. Admin and
    /// role-less accounts have nothing to unregister.
    pub fn unregister(&mut self) {
        let caller = self.env().caller();

        let record = self.account(&caller);
        self.require_role(&record, Role::Staker);
        if record.deposit > U512::zero() {
            self.env().revert(Error::CannotUnregisterWithPositiveDeposit);
        }

        self.accounts.set(&caller, AccountRecord::default());

        self.env().emit_event(Unregistered { staker: caller });
    }

    /// Add the attached value to the caller's stake. Any positive amount is
    /// accepted; the deposit-exactness rule applies only at registration.
    #[odra(payable)]
    pub fn stake(&mut self) {
        let caller = self.env().caller();
        let value = self.env().attached_value();

        let mut record = self.account(&caller);
        self.require_role(&record, Role::Staker);

        record.deposit = record.deposit + value;
        let total_deposit = record.deposit;
        self.accounts.set(&caller, record);

        self.env().emit_event(Staked {
            staker: caller,
            amount: value,
            total_deposit,
        });
    }

    /// Start the withdrawal cooldown. Calling again while a cooldown is
    /// already pending refreshes the timestamp and restarts the clock.
    pub fn unstake(&mut self) {
        let caller = self.env().caller();

        let mut record = self.account(&caller);
        self.require_role(&record, Role::Staker);

        if record.deposit == U512::zero() {
            self.env().revert(Error::NoStakeToUnstake);
        }

        // The first block of a fresh chain can report time 0, which is
        // also the no-pending sentinel; clamp so the cooldown stays visible.
        let now = self.env().get_block_time().max(1);
        record.unstake_timestamp = now;
        self.accounts.set(&caller, record);

        self.env().emit_event(UnstakeInitiated {
            staker: caller,
            initiated_at: now,
            withdrawable_at: now + self.registration_wait_time.get_or_default(),
        });
    }

    /// Withdraw the full deposit once the cooldown has elapsed. Bookkeeping
    /// is zeroed before the outbound transfer (CEI ordering); the platform
    /// reverts the whole call on transfer failure, so both happen atomically.
    pub fn withdraw(&mut self) {
        let caller = self.env().caller();

        let mut record = self.account(&caller);
        self.require_role(&record, Role::Staker);

        if record.unstake_timestamp == 0 {
            self.env().revert(Error::NoStakeInitiated);
        }

        let wait_time = self.registration_wait_time.get_or_default();
        if self.env().get_block_time() < record.unstake_timestamp + wait_time {
            self.env().revert(Error::WithdrawalPeriodNotElapsed);
        }

        let amount = record.deposit;
        record.deposit = U512::zero();
        record.unstake_timestamp = 0;
        self.accounts.set(&caller, record);

        self.payout(&caller, amount);

        self.env().emit_event(Withdrawn {
            staker: caller,
            amount,
        });
    }

    // ============ SLASHING ============

    /// Confiscate part or all of a staker's deposit into the slashed-funds
    /// accumulator. Admin only; the only upper bound is the target's current
    /// deposit, so an Admin may zero a staker out in one call.
    pub fn slash(&mut self, staker: Address, amount: U512) {
        let caller = self.env().caller();
        let caller_record = self.account(&caller);
        self.require_role(&caller_record, Role::Admin);

        let mut target = self.account(&staker);
        if target.role != Role::Staker {
            self.env().revert(Error::CannotSlashNonStaker);
        }
        if amount > target.deposit {
            self.env().revert(Error::InsufficientStakeToSlash);
        }

        target.deposit = target.deposit - amount;
        self.accounts.set(&staker, target);

        let total_slashed = self.total_slashed.get_or_default() + amount;
        self.total_slashed.set(total_slashed);

        self.env().emit_event(Slashed {
            staker,
            amount,
            total_slashed,
        });
    }

    /// Sweep all accumulated slashed funds to a beneficiary. Admin only.
    pub fn withdraw_slashed(&mut self, beneficiary: Address) {
        let caller = self.env().caller();
        let caller_record = self.account(&caller);
        self.require_role(&caller_record, Role::Admin);

        let amount = self.total_slashed.get_or_default();
        if amount == U512::zero() {
            self.env().revert(Error::NoSlashedAmountToWithdraw);
        }
        if is_zero_address(&beneficiary) {
            self.env().revert(Error::AddressZero);
        }

        self.total_slashed.set(U512::zero());

        self.payout(&beneficiary, amount);

        self.env().emit_event(SlashedWithdrawn {
            beneficiary,
            amount,
        });
    }

    // ============ OWNERSHIP ============

    /// Hand the configuration authority to a new owner. The Admin role does
    /// not propagate: the new owner's account record is left untouched.
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();

        let old_owner = self
            .owner
            .get()
            .unwrap_or_revert_with(&self.env(), Error::CallerNotOwner);
        self.owner.set(new_owner);

        self.env().emit_event(OwnershipTransferred {
            old_owner,
            new_owner,
        });
    }

    /// Equip an account with the Admin role. Owner only; the target must not
    /// already hold a role.
    pub fn grant_admin(&mut self, account: Address) {
        self.require_owner();

        let mut record = self.account(&account);
        if record.role != Role::None {
            self.env().revert(Error::AlreadyRegistered);
        }
        record.role = Role::Admin;
        self.accounts.set(&account, record);

        self.env().emit_event(AdminGranted { account });
    }

    // ============ VIEW FUNCTIONS ============

    /// Get the role of any account. Unrestricted.
    pub fn get_role(&self, account: Address) -> Role {
        self.account(&account).role
    }

    /// Get the accumulated slashed funds not yet swept. Admin only.
    pub fn get_total_slashed(&self) -> U512 {
        let record = self.account(&self.env().caller());
        self.require_role(&record, Role::Admin);
        self.total_slashed.get_or_default()
    }

    /// Get an account's current deposit.
    pub fn get_stake(&self, account: Address) -> U512 {
        self.account(&account).deposit
    }

    /// Get an account's pending unstake timestamp (0 = none pending).
    pub fn get_unstake_timestamp(&self, account: Address) -> u64 {
        self.account(&account).unstake_timestamp
    }

    /// Get the current owner address.
    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    /// Get the configured registration deposit (0 = unset).
    pub fn get_registration_deposit(&self) -> U512 {
        self.registration_deposit.get_or_default()
    }

    /// Get the configured unstake cooldown in ms (0 = unset).
    pub fn get_registration_wait_time(&self) -> u64 {
        self.registration_wait_time.get_or_default()
    }

    // ============ INTERNAL FUNCTIONS ============

    fn account(&self, address: &Address) -> AccountRecord {
        self.accounts.get(address).unwrap_or_default()
    }

    fn require_owner(&self) {
        let owner = self
            .owner
            .get()
            .unwrap_or_revert_with(&self.env(), Error::CallerNotOwner);
        if self.env().caller() != owner {
            self.env().revert(Error::CallerNotOwner);
        }
    }

    fn require_role(&self, record: &AccountRecord, role: Role) {
        if record.role != role {
            self.env().revert(Error::SenderMustHaveTheRequiredRole);
        }
    }

    /// Pay out native currency. The contract balance check surfaces an
    /// underfunded payout as WithdrawalFailed before the transfer itself
    /// aborts the call.
    fn payout(&self, to: &Address, amount: U512) {
        if self.env().self_balance() < amount {
            self.env().revert(Error::WithdrawalFailed);
        }
        self.env().transfer_tokens(to, &amount);
    }
}

fn is_zero_address(address: &Address) -> bool {
    matches!(address, Address::Account(hash) if hash == &AccountHash::new([0u8; 32]))
}
