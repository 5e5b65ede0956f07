// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the wrapped native ledger. Each rule calls the contract
// functions directly and compares snapshots taken before and after.
//
// - model.rs        : state snapshots
// - token.rs        : mock client standing in for the native asset
// - ledger_specs.rs : supply, balance and allowance rules
//
// USAGE:
// - Certora build: cargo build --features certora -p wrapped-native
// - Verification: certoraSorobanProver wrapped_native.conf
//
// ============================================================================

pub mod ledger_specs;
pub mod model;
pub mod token;
