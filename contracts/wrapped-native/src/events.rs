use soroban_sdk::{Address, Env, Symbol};

/// Balance movement. `from` is `None` when units are issued against a
/// deposit, `to` is `None` when they are retired by a withdrawal.
pub fn transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "transfer"),), (from, to, amount));
}

pub fn approve(env: &Env, owner: Address, spender: Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "approve"),), (owner, spender, amount));
}

pub fn deposit(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "deposit"),), (to, amount));
}

pub fn withdraw(env: &Env, from: Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "withdraw"),), (from, amount));
}
