use ledger_types::{AllowanceKey, LedgerConfig, LedgerError};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for ledger operations:
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design:
// - Config and total supply live in Instance storage (read by every call)
// - Each balance and each allowance is a separate Persistent entry
// - Entries are never removed; a drained balance stays stored as zero
//
// Per-operation footprint:
// - transfer_from touches config, 2 balances and 1 allowance
// - deposit/withdraw touch config, supply, 1 balance and the native
//   asset's entries for 2 accounts
// ============================================================================

/// Storage keys for the ledger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration (Instance storage)
    Config,
    /// Issued supply (Instance storage)
    TotalSupply,
    /// Holder -> balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> allowance (Persistent storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    let config: LedgerConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Total supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

// === Allowance ===

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    match env.storage().persistent().get(&key) {
        Some(allowance) => {
            extend_persistent_ttl(env, &key);
            allowance
        }
        None => 0,
    }
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, allowance: i128) {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().set(&key, &allowance);
    extend_persistent_ttl(env, &key);
}
