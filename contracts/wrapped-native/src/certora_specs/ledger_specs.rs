// ============================================================================
// LEDGER INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. deposit/withdraw move a balance and the supply by the same amount
// 2. transfer conserves value; a self-transfer changes nothing
// 3. approve overwrites
// 4. transfer_from consumes exactly the moved allowance, and fails with
//    InsufficientAllowance without touching state when over the allowance
// 5. no balance is ever driven below zero
//
// Rules assume a well-formed starting state: non-negative balances whose
// sum does not exceed the supply.
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use ledger_types::LedgerError;
use soroban_sdk::{Address, Env};

use super::model::{AllowanceSnapshot, LedgerSnapshot};
use crate::invariants::{allowance_consumed, approve_overwrites, non_negative, transfer_conserves};
use crate::WrappedNative;

fn assume_initialized(env: &Env) {
    cvlr_assume!(WrappedNative::get_config(env.clone()).is_ok());
}

fn assume_well_formed(before: &LedgerSnapshot) {
    cvlr_assume!(non_negative(before.balance_a));
    cvlr_assume!(non_negative(before.balance_b));
    cvlr_assume!(before.balance_a <= before.supply);
    cvlr_assume!(before.balance_b <= before.supply);
}

/// RULE: deposit credits the depositor and the supply by the same amount
#[rule]
pub fn deposit_credits_balance_and_supply(env: Env, from: Address, other: Address, amount: i128) {
    cvlr_assume!(from != other);
    let before = LedgerSnapshot::capture(&env, &from, &other);
    assume_well_formed(&before);

    if WrappedNative::deposit(env.clone(), from.clone(), amount).is_ok() {
        let after = LedgerSnapshot::capture(&env, &from, &other);
        cvlr_assert!(after.balance_a == before.balance_a + amount);
        cvlr_assert!(after.supply == before.supply + amount);
        cvlr_assert!(after.balance_b == before.balance_b);
    }
}

/// RULE: withdraw debits the holder and the supply by the same amount
#[rule]
pub fn withdraw_debits_balance_and_supply(env: Env, from: Address, other: Address, amount: i128) {
    cvlr_assume!(from != other);
    let before = LedgerSnapshot::capture(&env, &from, &other);
    assume_well_formed(&before);

    if WrappedNative::withdraw(env.clone(), from.clone(), amount).is_ok() {
        let after = LedgerSnapshot::capture(&env, &from, &other);
        cvlr_assert!(after.balance_a == before.balance_a - amount);
        cvlr_assert!(after.supply == before.supply - amount);
        cvlr_assert!(non_negative(after.balance_a));
        cvlr_assert!(after.balance_b == before.balance_b);
    }
}

/// RULE: withdraw beyond the balance is rejected
#[rule]
pub fn withdraw_over_balance_fails(env: Env, from: Address, other: Address, amount: i128) {
    assume_initialized(&env);
    let before = LedgerSnapshot::capture(&env, &from, &other);
    assume_well_formed(&before);
    cvlr_assume!(amount > before.balance_a);

    let result = WrappedNative::withdraw(env.clone(), from.clone(), amount);
    cvlr_assert!(result == Err(LedgerError::InsufficientBalance));
}

/// RULE: transfer between distinct holders conserves value
#[rule]
pub fn transfer_conserves_value(env: Env, from: Address, to: Address, amount: i128) {
    cvlr_assume!(from != to);
    let before = LedgerSnapshot::capture(&env, &from, &to);
    assume_well_formed(&before);

    if WrappedNative::transfer(env.clone(), from.clone(), to.clone(), amount).is_ok() {
        let after = LedgerSnapshot::capture(&env, &from, &to);
        cvlr_assert!(transfer_conserves(
            before.balance_a,
            after.balance_a,
            before.balance_b,
            after.balance_b,
            amount
        ));
        cvlr_assert!(after.supply == before.supply);
        cvlr_assert!(non_negative(after.balance_a));
    }
}

/// RULE: a failed transfer leaves both balances untouched
#[rule]
pub fn failed_transfer_changes_nothing(env: Env, from: Address, to: Address, amount: i128) {
    let before = LedgerSnapshot::capture(&env, &from, &to);
    assume_well_formed(&before);

    if WrappedNative::transfer(env.clone(), from.clone(), to.clone(), amount).is_err() {
        let after = LedgerSnapshot::capture(&env, &from, &to);
        cvlr_assert!(after.balance_a == before.balance_a);
        cvlr_assert!(after.balance_b == before.balance_b);
    }
}

/// RULE: a self-transfer never changes the balance
#[rule]
pub fn self_transfer_is_noop(env: Env, holder: Address, other: Address, amount: i128) {
    let before = LedgerSnapshot::capture(&env, &holder, &other);
    assume_well_formed(&before);

    let _ = WrappedNative::transfer(env.clone(), holder.clone(), holder.clone(), amount);

    let after = LedgerSnapshot::capture(&env, &holder, &other);
    cvlr_assert!(after.balance_a == before.balance_a);
}

/// RULE: approve stores exactly the approved amount
#[rule]
pub fn approve_overwrites_allowance(env: Env, owner: Address, spender: Address, first: i128, second: i128) {
    cvlr_assume!(first >= 0 && second >= 0);

    let _ = WrappedNative::approve(env.clone(), owner.clone(), spender.clone(), first);
    let _ = WrappedNative::approve(env.clone(), owner.clone(), spender.clone(), second);

    let after = AllowanceSnapshot::capture(&env, &owner, &spender);
    cvlr_assert!(approve_overwrites(after.allowance, second));
}

/// RULE: transfer_from consumes exactly the moved amount of allowance
#[rule]
pub fn transfer_from_consumes_allowance(
    env: Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(from != to);
    let before = LedgerSnapshot::capture(&env, &from, &to);
    assume_well_formed(&before);
    let allowance_before = AllowanceSnapshot::capture(&env, &from, &spender);

    if WrappedNative::transfer_from(env.clone(), spender.clone(), from.clone(), to.clone(), amount).is_ok() {
        let after = LedgerSnapshot::capture(&env, &from, &to);
        let allowance_after = AllowanceSnapshot::capture(&env, &from, &spender);
        cvlr_assert!(allowance_consumed(
            allowance_before.allowance,
            allowance_after.allowance,
            amount
        ));
        cvlr_assert!(non_negative(allowance_after.allowance));
        cvlr_assert!(transfer_conserves(
            before.balance_a,
            after.balance_a,
            before.balance_b,
            after.balance_b,
            amount
        ));
    }
}

/// RULE: spending beyond the allowance fails first and changes nothing
#[rule]
pub fn transfer_from_over_allowance_fails(
    env: Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) {
    assume_initialized(&env);
    let before = LedgerSnapshot::capture(&env, &from, &to);
    assume_well_formed(&before);
    let allowance_before = AllowanceSnapshot::capture(&env, &from, &spender);
    cvlr_assume!(non_negative(allowance_before.allowance));
    cvlr_assume!(amount > allowance_before.allowance);

    let result = WrappedNative::transfer_from(env.clone(), spender.clone(), from.clone(), to.clone(), amount);
    cvlr_assert!(result == Err(LedgerError::InsufficientAllowance));

    let after = LedgerSnapshot::capture(&env, &from, &to);
    let allowance_after = AllowanceSnapshot::capture(&env, &from, &spender);
    cvlr_assert!(allowance_after.allowance == allowance_before.allowance);
    cvlr_assert!(after.balance_a == before.balance_a);
    cvlr_assert!(after.balance_b == before.balance_b);
}

/// SANITY: a successful transfer is reachable
#[rule]
pub fn transfer_sanity(env: Env, from: Address, to: Address, amount: i128) {
    let result = WrappedNative::transfer(env.clone(), from.clone(), to.clone(), amount);
    cvlr_satisfy!(result.is_ok());
}
