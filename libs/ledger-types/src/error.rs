use soroban_sdk::contracterror;

/// Every way a ledger operation can be rejected.
///
/// Raising one aborts the whole invocation, so a failed call never leaves
/// partial effects behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Operation invoked before `initialize`
    NotInitialized = 1,
    /// `initialize` invoked twice
    AlreadyInitialized = 2,
    /// Amount argument below zero
    NegativeAmount = 3,
    /// Balance lower than the requested amount
    InsufficientBalance = 4,
    /// Approved amount lower than the requested amount
    InsufficientAllowance = 5,
    /// Credit would exceed i128::MAX
    ArithmeticOverflow = 6,
    /// Native asset refused to move funds into or out of the ledger
    CurrencyTransferFailure = 7,
}
