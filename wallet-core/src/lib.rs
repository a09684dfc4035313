// wallet-core/src/lib.rs

//! Cardano CIP-1852 wallet generator.
//!
//! Generates a BIP-39 mnemonic, derives the Icarus root key and the
//! CIP-1852 account 0 key tree, builds Shelley base, enterprise and reward
//! addresses for one network, and writes everything to a JSON document.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod network;
pub mod wallet;

pub use api::{derive_wallet, generate_wallet, generate_wallet_with_rng, run};
pub use config::GenerateConfig;
pub use error::{ConfigError, CryptoError, MnemonicError, WalletError, WalletResult};
pub use network::{Network, NetworkProfile};
pub use wallet::WalletDocument;
