//! Livenet deployment script for the stake ledger
//!
//! Deploys StakeLedger to Casper network and applies the initial
//! registration configuration. The deployer becomes owner and Admin.

use odra::casper_types::U512;
use odra::host::{Deployer, NoArgs};
use odra::prelude::Addressable;
use stake_ledger::StakeLedger;

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer, owner and initial Admin
    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    // Registration configuration from environment, with localnet defaults
    let deposit_motes: u64 = std::env::var("REGISTRATION_DEPOSIT_MOTES")
        .unwrap_or_else(|_| "1000000000".to_string()) // 1 CSPR
        .parse()
        .expect("Invalid REGISTRATION_DEPOSIT_MOTES");
    let wait_time_ms: u64 = std::env::var("REGISTRATION_WAIT_TIME_MS")
        .unwrap_or_else(|_| "86400000".to_string()) // 24 hours
        .parse()
        .expect("Invalid REGISTRATION_WAIT_TIME_MS");
    println!("Registration deposit (motes): {}", deposit_motes);
    println!("Registration wait time (ms): {}", wait_time_ms);

    // Step 1: Deploy StakeLedger
    println!("\n=== Deploying StakeLedger ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas

    let mut ledger = StakeLedger::deploy(&env, NoArgs);
    let ledger_address = ledger.address();
    println!("StakeLedger deployed at: {}", ledger_address.to_string());

    // Step 2: Apply registration configuration
    println!("\n=== Setting configuration ===");
    env.set_gas(5_000_000_000u64); // 5 CSPR gas

    ledger.set_configuration(U512::from(deposit_motes), wait_time_ms);
    println!("Configuration applied");

    // Verify deployment
    println!("\n=== Deployment Summary ===");
    println!("StakeLedger: {}", ledger_address.to_string());
    println!("Owner/Admin: {}", deployer.to_string());
    println!("\nDeployment complete!");
}
