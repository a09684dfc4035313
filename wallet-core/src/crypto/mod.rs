// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Generation**: BIP-39 phrases (12/15/18/21/24 words) via [`WalletMnemonic`].
//! - **Key Derivation**: BIP32-Ed25519 CIP-1852 key tree via [`KeyDeriver`].
//! - **Derivation Paths**: tagged hardened/soft indices and CIP-1852 paths via [`DerivationPaths`].
//! - **Encoding**: bech32 key strings and blake2b-224 key hashes.

pub mod encoding;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::{KeyDeriver, KeyNode, KeyTree};
pub use mnemonic::{MnemonicSpec, WalletMnemonic, WordCount};
pub use paths::{ChildIndex, DerivationPath, DerivationPaths};
