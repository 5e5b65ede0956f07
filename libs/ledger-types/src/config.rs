use soroban_sdk::{contracttype, Address, String};

/// Ledger configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Stellar Asset Contract of the wrapped native currency
    pub native: Address,
    /// Token name shown by wallets
    pub name: String,
    /// Token ticker
    pub symbol: String,
    /// Decimal places, normally those of the native asset
    pub decimals: u32,
}

/// (owner, spender) pair identifying an allowance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}
