// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over ledger observations. They are checked by the unit tests
// after every operation and restated as Certora rules in certora_specs.
//
// INVARIANT CATEGORIES:
//
// 1. SUPPLY INVARIANTS
//    - Total supply equals the sum of all balances
//    - Total supply is fully backed by custodied native currency
//
// 2. NON-NEGATIVITY
//    - Balances, allowances and supply are never below zero
//
// 3. TRANSITION LAWS
//    - transfer conserves value between two distinct holders
//    - approve overwrites, it never accumulates
//    - transfer_from consumes exactly the moved amount of allowance
//    - deposit and withdraw move supply and custody together
//
// ============================================================================

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: no phantom or missing units
///
/// Property:
///   total_supply == Σ balances
///
/// `balances` must cover every holder that was ever credited. Returns false
/// if the sum itself overflows, which can only happen if the ledger already
/// issued more than i128::MAX.
pub fn supply_matches_balances<I>(total_supply: i128, balances: I) -> bool
where
    I: IntoIterator<Item = i128>,
{
    let mut sum: i128 = 0;
    for balance in balances {
        match sum.checked_add(balance) {
            Some(next) => sum = next,
            None => return false,
        }
    }
    sum == total_supply
}

/// Invariant: every issued unit is backed
///
/// Property:
///   total_supply <= custody
///
/// Equality holds unless native currency reached the ledger address
/// without passing through deposit/receive.
pub fn fully_backed(total_supply: i128, custody: i128) -> bool {
    total_supply <= custody
}

/// Invariant: exact 1:1 custody when only ledger operations moved currency
///
/// Property:
///   total_supply == custody
pub fn exactly_backed(total_supply: i128, custody: i128) -> bool {
    total_supply == custody
}

// ============================================================================
// NON-NEGATIVITY
// ============================================================================

/// Invariant: balance or allowance never negative
pub fn non_negative(value: i128) -> bool {
    value >= 0
}

// ============================================================================
// TRANSITION LAWS
// ============================================================================

/// Law: transfer between distinct holders conserves value
///
/// Property:
///   from_after == from_before - amount
///   to_after == to_before + amount
///   supply unchanged
pub fn transfer_conserves(
    from_before: i128,
    from_after: i128,
    to_before: i128,
    to_after: i128,
    amount: i128,
) -> bool {
    from_before.checked_sub(amount) == Some(from_after)
        && to_before.checked_add(amount) == Some(to_after)
}

/// Law: approve overwrites
///
/// Property:
///   allowance_after == approved, whatever allowance_before was
pub fn approve_overwrites(allowance_after: i128, approved: i128) -> bool {
    allowance_after == approved
}

/// Law: transfer_from consumes exactly `amount` of allowance
pub fn allowance_consumed(allowance_before: i128, allowance_after: i128, amount: i128) -> bool {
    allowance_before.checked_sub(amount) == Some(allowance_after)
}

/// Law: supply and custody move in lockstep
///
/// Property:
///   supply_after - supply_before == custody_after - custody_before
pub fn supply_tracks_custody(
    supply_before: i128,
    supply_after: i128,
    custody_before: i128,
    custody_after: i128,
) -> bool {
    match (
        supply_after.checked_sub(supply_before),
        custody_after.checked_sub(custody_before),
    ) {
        (Some(supply_delta), Some(custody_delta)) => supply_delta == custody_delta,
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
