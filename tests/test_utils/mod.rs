//! Test utilities and helpers for stake ledger tests

use odra::casper_types::account::AccountHash;
use odra::casper_types::U512;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;

use stake_ledger::ledger::{StakeLedger, StakeLedgerHostRef};

/// Constants for testing
pub const CSPR: u64 = 1_000_000_000; // 1 CSPR in motes (9 decimals)
pub const DEPOSIT: u64 = 10 * CSPR; // configured registration deposit
pub const WAIT_TIME_MS: u64 = 24 * 60 * 60 * 1000; // 24 hour cooldown

/// The all-zeroes account address, rejected as a sweep beneficiary
pub fn zero_address() -> Address {
    Address::Account(AccountHash::new([0u8; 32]))
}

/// Deploy the ledger. Account 0 deploys and therefore holds ownership and
/// the Admin role; account 1 is a free account used as the default staker.
pub fn setup() -> (HostEnv, StakeLedgerHostRef, Address, Address) {
    let env = odra_test::env();

    // The host clock starts at 0, which the ledger reserves as the
    // "no unstake pending" sentinel; run tests one tick later.
    env.advance_block_time(1);

    let owner = env.get_account(0);
    let staker = env.get_account(1);

    env.set_caller(owner);
    let ledger = StakeLedger::deploy(&env, NoArgs);

    (env, ledger, owner, staker)
}

/// Deploy and apply the standard registration configuration.
pub fn setup_configured() -> (HostEnv, StakeLedgerHostRef, Address, Address) {
    let (env, mut ledger, owner, staker) = setup();

    env.set_caller(owner);
    ledger.set_configuration(U512::from(DEPOSIT), WAIT_TIME_MS);

    (env, ledger, owner, staker)
}

/// Deploy, configure, and register `staker` with the exact deposit.
pub fn setup_registered() -> (HostEnv, StakeLedgerHostRef, Address, Address) {
    let (env, mut ledger, owner, staker) = setup_configured();

    env.set_caller(staker);
    ledger.with_tokens(U512::from(DEPOSIT)).register();

    (env, ledger, owner, staker)
}
