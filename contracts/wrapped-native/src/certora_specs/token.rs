use soroban_sdk::{Address, Env};
use cvlr_soroban_derive::cvlr_mock_client as mockclient;

// Native asset interface as seen by the ledger. Transfers never fail under
// the prover; the failing-release path is covered by the unit tests.

#[allow(unused)]
#[mockclient(name = "Client")]
trait NativeInterface {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}
