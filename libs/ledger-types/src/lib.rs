#![no_std]

mod amount;
mod config;
mod error;

pub use amount::*;
pub use config::*;
pub use error::*;

/// Decimals of the Stellar native asset (1 XLM = 10^7 stroops)
pub const NATIVE_DECIMALS: u32 = 7;
