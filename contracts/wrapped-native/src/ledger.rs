use crate::events;
use crate::storage::{
    get_allowance, get_balance, get_config, get_total_supply, set_allowance, set_balance,
    set_total_supply,
};
use ledger_types::{credit, debit, validate_amount, LedgerError};
use soroban_sdk::{log, Address, Env};

#[cfg(not(feature = "certora"))]
use soroban_sdk::token;

#[cfg(feature = "certora")]
use crate::certora_specs::token;

// Every precondition is checked before the first storage write. The one
// step that can fail after writes is the native currency move in wrap and
// unwrap; its `Err` is returned to the host, which discards every write of
// the failed invocation.

/// Issue `amount` units to `to`, backed by `amount` native currency pulled
/// from `to` into the ledger.
pub fn wrap(env: &Env, to: &Address, amount: i128) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    let config = get_config(env)?;

    let supply = credit(get_total_supply(env), amount)?;
    let balance = credit(get_balance(env, to), amount)?;
    set_total_supply(env, supply);
    set_balance(env, to, balance);

    move_native(env, &config.native, to, &env.current_contract_address(), amount)?;

    log!(env, "wrap", to.clone(), amount);
    events::transfer(env, None, Some(to.clone()), amount);
    events::deposit(env, to.clone(), amount);
    Ok(())
}

/// Retire `amount` units held by `from` and release the same amount of
/// native currency to it. Balance and supply are debited before the
/// release is attempted.
pub fn unwrap(env: &Env, from: &Address, amount: i128) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    let config = get_config(env)?;

    let balance = debit(get_balance(env, from), amount, LedgerError::InsufficientBalance)?;
    // Supply covers every balance, so this only fails on corrupted state
    let supply = debit(get_total_supply(env), amount, LedgerError::ArithmeticOverflow)?;
    set_balance(env, from, balance);
    set_total_supply(env, supply);

    move_native(env, &config.native, &env.current_contract_address(), from, amount)?;

    log!(env, "unwrap", from.clone(), amount);
    events::transfer(env, Some(from.clone()), None, amount);
    events::withdraw(env, from.clone(), amount);
    Ok(())
}

/// Move `amount` units from `from` to `to`
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    get_config(env)?;

    let from_balance = debit(get_balance(env, from), amount, LedgerError::InsufficientBalance)?;

    // Self-transfer: the check above still applies, balances stay as they are
    if from != to {
        let to_balance = credit(get_balance(env, to), amount)?;
        set_balance(env, from, from_balance);
        set_balance(env, to, to_balance);
    }

    events::transfer(env, Some(from.clone()), Some(to.clone()), amount);
    Ok(())
}

/// Overwrite the allowance `owner` grants `spender`
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    get_config(env)?;

    set_allowance(env, owner, spender, amount);

    events::approve(env, owner.clone(), spender.clone(), amount);
    Ok(())
}

/// Move `amount` units from `from` to `to` out of the allowance `from`
/// granted `spender`.
///
/// The allowance is checked first, then the balance. Every allowance
/// decrements, including one of `i128::MAX`.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    get_config(env)?;

    let allowance = debit(
        get_allowance(env, from, spender),
        amount,
        LedgerError::InsufficientAllowance,
    )?;
    move_balance(env, from, to, amount)?;
    set_allowance(env, from, spender, allowance);
    Ok(())
}

/// Native currency held at the ledger's address
pub fn custody(env: &Env) -> Result<i128, LedgerError> {
    let config = get_config(env)?;
    let native = token::Client::new(env, &config.native);
    Ok(native.balance(&env.current_contract_address()))
}

#[cfg(not(feature = "certora"))]
fn move_native(
    env: &Env,
    native: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    let client = token::Client::new(env, native);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "native transfer failed", from.clone(), to.clone(), amount);
            Err(LedgerError::CurrencyTransferFailure)
        }
    }
}

#[cfg(feature = "certora")]
fn move_native(
    env: &Env,
    native: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    token::Client::new(env, native).transfer(from, to, &amount);
    Ok(())
}
