// wallet-core/src/api/mod.rs
//
// Public entry points used by the CLI and by library callers.

pub mod generate;

pub use generate::{derive_wallet, generate_wallet, generate_wallet_with_rng, run};
