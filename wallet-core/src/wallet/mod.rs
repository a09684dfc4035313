// wallet-core/src/wallet/mod.rs

//! Wallet artifact: JSON document assembly and guarded, atomic persistence.

pub mod document;
pub mod output;

pub use document::{KeyPairEntry, KeySection, MnemonicSection, WalletDocument};
pub use output::{ensure_writable, write_atomic};
