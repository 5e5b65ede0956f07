#![no_std]

mod events;
pub mod invariants;
mod ledger;
mod storage;

#[cfg(feature = "certora")]
pub mod certora_specs;

use ledger_types::{LedgerConfig, LedgerError};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage::{
    get_allowance, get_balance, get_config, get_total_supply, has_config, set_config,
    set_total_supply,
};

/// Wrapped native currency: a fungible token issued 1:1 against native
/// currency held by the contract.
#[contract]
pub struct WrappedNative;

#[contractimpl]
impl WrappedNative {
    /// Initialize the ledger over the native asset contract
    pub fn initialize(
        env: Env,
        native: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), LedgerError> {
        if has_config(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        let config = LedgerConfig {
            native,
            name,
            symbol,
            decimals,
        };
        set_config(&env, &config);
        set_total_supply(&env, 0);
        Ok(())
    }

    /// Wrap `amount` native currency held by `from` into ledger units
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ledger::wrap(&env, &from, amount)
    }

    /// Default entry point for a plain payment to the ledger.
    ///
    /// Wallets that "send native currency to the wrapper" route here; it
    /// behaves exactly like `deposit`.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ledger::wrap(&env, &from, amount)
    }

    /// Unwrap `amount` units back into native currency paid to `from`
    pub fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ledger::unwrap(&env, &from, amount)
    }

    /// Move `amount` units from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<bool, LedgerError> {
        from.require_auth();
        ledger::move_balance(&env, &from, &to, amount)?;
        Ok(true)
    }

    /// Set the amount `spender` may move out of `owner`'s balance.
    /// Overwrites any previous allowance.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<bool, LedgerError> {
        owner.require_auth();
        ledger::approve(&env, &owner, &spender, amount)?;
        Ok(true)
    }

    /// Move `amount` units from `from` to `to` on behalf of `spender`.
    ///
    /// The allowance is checked before the balance, so a spender that
    /// exceeds both sees `InsufficientAllowance`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<bool, LedgerError> {
        spender.require_auth();
        ledger::transfer_from(&env, &spender, &from, &to, amount)?;
        Ok(true)
    }

    // === View Functions ===

    /// Balance of `id`, zero for unknown holders
    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    /// Allowance `owner` granted `spender`, zero if none
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        get_allowance(&env, &owner, &spender)
    }

    /// Units in circulation
    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Native currency held by the ledger
    pub fn custody(env: Env) -> Result<i128, LedgerError> {
        ledger::custody(&env)
    }

    /// Native currency held beyond the issued supply, e.g. sent to the
    /// ledger address without going through `deposit`
    pub fn surplus(env: Env) -> Result<i128, LedgerError> {
        let custody = ledger::custody(&env)?;
        Ok(custody - get_total_supply(&env))
    }

    /// Get ledger configuration
    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        get_config(&env)
    }

    /// Get native asset contract address
    pub fn native(env: Env) -> Result<Address, LedgerError> {
        Ok(get_config(&env)?.native)
    }

    pub fn name(env: Env) -> Result<String, LedgerError> {
        Ok(get_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, LedgerError> {
        Ok(get_config(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, LedgerError> {
        Ok(get_config(&env)?.decimals)
    }
}
