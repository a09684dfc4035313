// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - CIP-1852 key tree
//
// ┌──────────────────────────────────────────────┐
// │  Entropy (from the BIP-39 phrase)             │
// │        │  PBKDF2 + clamp                      │
// │        ▼                                      │
// │  root  m                                      │
// │        │  1852' / 1815' / 0'  (hardened)      │
// │        ▼                                      │
// │  account  m/1852'/1815'/0'                    │
// │     ├─ 0/0  payment  (soft)                   │
// │     └─ 2/0  stake    (soft)                   │
// └──────────────────────────────────────────────┘

pub mod bip32_ed25519;

pub use bip32_ed25519::KeyNode;

use crate::crypto::paths::{cip1852, ChildIndex, DerivationPath, DerivationPaths};
use crate::error::WalletResult;

/// Fixed-depth key hierarchy produced for one wallet
#[derive(Debug, Clone)]
pub struct KeyTree {
    pub root: KeyNode,
    pub account: KeyNode,
    pub payment: KeyNode,
    pub stake: KeyNode,
}

/// Entry point for CIP-1852 key derivation.
///
/// Every function is pure: the same entropy always yields the same tree.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the full key tree with the empty passphrase
    pub fn derive_tree(entropy: &[u8]) -> WalletResult<KeyTree> {
        Self::derive_tree_with_passphrase(entropy, &[])
    }

    /// Derive the full key tree
    ///
    /// # Arguments
    /// * `entropy` - BIP-39 entropy (16..=32 bytes, multiple of 4)
    /// * `passphrase` - optional second factor; empty for standard wallets
    pub fn derive_tree_with_passphrase(
        entropy: &[u8],
        passphrase: &[u8],
    ) -> WalletResult<KeyTree> {
        let root = KeyNode::from_entropy(entropy, passphrase)?;
        let account = Self::derive_path(&root, &DerivationPaths::account());

        let payment = account
            .derive(ChildIndex::normal(cip1852::role::EXTERNAL))
            .derive(ChildIndex::normal(0));
        let stake = account
            .derive(ChildIndex::normal(cip1852::role::STAKING))
            .derive(ChildIndex::normal(0));

        tracing::debug!(
            account = %account.path(),
            payment = %payment.path(),
            stake = %stake.path(),
            "derived key tree"
        );

        Ok(KeyTree {
            root,
            account,
            payment,
            stake,
        })
    }

    /// Derive an absolute path from the root key
    pub fn derive_path(root: &KeyNode, path: &DerivationPath) -> KeyNode {
        root.derive_steps(path.steps())
    }
}

// =============================================================================
// TESTS
// =============================================================================
