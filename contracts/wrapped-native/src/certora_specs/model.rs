// ============================================================================
// STATE SNAPSHOTS
// ============================================================================
//
// Before/after captures used by the ledger rules. Only the entries a rule
// touches are captured, everything else is assumed untouched by the
// operation under verification.
//
// ============================================================================

use crate::WrappedNative;
use soroban_sdk::{Address, Env};

/// Balances of two holders plus the supply
#[derive(Clone)]
pub struct LedgerSnapshot {
    pub supply: i128,
    pub balance_a: i128,
    pub balance_b: i128,
}

impl LedgerSnapshot {
    pub fn capture(env: &Env, a: &Address, b: &Address) -> Self {
        Self {
            supply: WrappedNative::total_supply(env.clone()),
            balance_a: WrappedNative::balance(env.clone(), a.clone()),
            balance_b: WrappedNative::balance(env.clone(), b.clone()),
        }
    }
}

/// One allowance
#[derive(Clone)]
pub struct AllowanceSnapshot {
    pub allowance: i128,
}

impl AllowanceSnapshot {
    pub fn capture(env: &Env, owner: &Address, spender: &Address) -> Self {
        Self {
            allowance: WrappedNative::allowance(env.clone(), owner.clone(), spender.clone()),
        }
    }
}
