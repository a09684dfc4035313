// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - CIP-1852 (Cardano Shelley HD wallets)
// m / purpose' / coin_type' / account' / role / index

use crate::error::{CryptoError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Offset added to an index to mark it hardened (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// CIP-1852 CONSTANTS
// =============================================================================
pub mod cip1852 {
    /// CIP-1852 purpose
    pub const PURPOSE: u32 = 1852;
    /// SLIP-44 coin type of ADA
    pub const COIN_TYPE: u32 = 1815;
    pub const DEFAULT_ACCOUNT: u32 = 0;

    /// Chain roles below the account level
    pub mod role {
        pub const EXTERNAL: u32 = 0;
        pub const INTERNAL: u32 = 1;
        pub const STAKING: u32 = 2;
    }
}

// =============================================================================
// CHILD INDEX
// =============================================================================

/// One step of a derivation path.
///
/// Callers never add [`HARDENED_OFFSET`] themselves; the offset is applied
/// in [`ChildIndex::raw`] from the `hardened` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    /// Tagged index, or `None` when `index` already carries the hardened bit
    pub const fn new(index: u32, hardened: bool) -> Option<Self> {
        if index >= HARDENED_OFFSET {
            return None;
        }
        Some(Self { index, hardened })
    }

    /// Hardened child.
    ///
    /// # Panics
    /// If `index` is 2^31 or above.
    pub const fn hardened(index: u32) -> Self {
        assert!(index < HARDENED_OFFSET, "child index out of range");
        Self {
            index,
            hardened: true,
        }
    }

    /// Normal (soft) child.
    ///
    /// # Panics
    /// If `index` is 2^31 or above.
    pub const fn normal(index: u32) -> Self {
        assert!(index < HARDENED_OFFSET, "child index out of range");
        Self {
            index,
            hardened: false,
        }
    }

    /// Rebuild a tagged index from its wire value
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            index: raw & !HARDENED_OFFSET,
            hardened: raw & HARDENED_OFFSET != 0,
        }
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// Value fed to the derivation function
    #[inline]
    pub const fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl FromStr for ChildIndex {
    type Err = WalletError;

    fn from_str(segment: &str) -> WalletResult<Self> {
        let segment = segment.trim();
        let (digits, hardened) = match segment.strip_suffix('\'').or(segment.strip_suffix('h')) {
            Some(digits) => (digits, true),
            None => (segment, false),
        };

        let index: u32 = digits.parse().map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid index '{}': {}",
                segment, e
            )))
        })?;

        Self::new(index, hardened).ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Index out of range: '{}'",
                segment
            )))
        })
    }
}

// =============================================================================
// DERIVATION PATH
// =============================================================================

/// Absolute path from the root key, rendered as `m/1852'/1815'/0'/0/0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath(Vec<ChildIndex>);

impl DerivationPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of a CIP-1852 account: `m/1852'/1815'/account'`
    ///
    /// Panics if `account` is 2^31 or above, like [`ChildIndex::hardened`].
    pub fn account(account: u32) -> Self {
        Self(vec![
            ChildIndex::hardened(cip1852::PURPOSE),
            ChildIndex::hardened(cip1852::COIN_TYPE),
            ChildIndex::hardened(account),
        ])
    }

    /// Path of an address key: `m/1852'/1815'/account'/role/index`
    pub fn address_key(account: u32, role: u32, index: u32) -> Self {
        Self::account(account)
            .child(ChildIndex::normal(role))
            .child(ChildIndex::normal(index))
    }

    /// Extend this path by one step
    pub fn child(&self, step: ChildIndex) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }

    pub fn steps(&self) -> &[ChildIndex] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for step in &self.0 {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(path: &str) -> WalletResult<Self> {
        let path = path.trim();
        let rest = match path {
            "m" => return Ok(Self::root()),
            _ => path.strip_prefix("m/").ok_or_else(|| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Path must start with 'm/': {}",
                    path
                )))
            })?,
        };

        rest.split('/')
            .map(ChildIndex::from_str)
            .collect::<WalletResult<Vec<_>>>()
            .map(Self)
    }
}

/// Pre-built CIP-1852 paths for account 0
pub struct DerivationPaths;

impl DerivationPaths {
    pub const ACCOUNT_0: &'static str = "m/1852'/1815'/0'";
    pub const PAYMENT_0: &'static str = "m/1852'/1815'/0'/0/0";
    pub const STAKE_0: &'static str = "m/1852'/1815'/0'/2/0";

    #[inline]
    pub fn account() -> DerivationPath {
        DerivationPath::account(cip1852::DEFAULT_ACCOUNT)
    }

    #[inline]
    pub fn payment(index: u32) -> DerivationPath {
        DerivationPath::address_key(cip1852::DEFAULT_ACCOUNT, cip1852::role::EXTERNAL, index)
    }

    #[inline]
    pub fn stake(index: u32) -> DerivationPath {
        DerivationPath::address_key(cip1852::DEFAULT_ACCOUNT, cip1852::role::STAKING, index)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardened_offset() {
        assert_eq!(ChildIndex::hardened(1852).raw(), 0x8000_0000 + 1852);
        assert_eq!(ChildIndex::hardened(1815).raw(), 0x8000_0000 + 1815);
        assert_eq!(ChildIndex::hardened(0).raw(), 0x8000_0000);
        assert_eq!(ChildIndex::normal(2).raw(), 2);
        assert_eq!(ChildIndex::from_raw(0x8000_0000 + 5), ChildIndex::hardened(5));
        assert_eq!(ChildIndex::from_raw(5), ChildIndex::normal(5));
    }

    #[test]
    fn test_index_with_offset_bit_rejected() {
        assert_eq!(ChildIndex::new(0x8000_0001, true), None);
        assert_eq!(ChildIndex::new(0x8000_0001, false), None);
        assert_eq!(ChildIndex::new(0x7fff_ffff, true).map(|c| c.raw()), Some(u32::MAX));
        assert!("2147483649'".parse::<ChildIndex>().is_err());
    }

    #[test]
    #[should_panic(expected = "child index out of range")]
    fn test_hardened_constructor_panics_on_offset_index() {
        let _ = ChildIndex::hardened(0x8000_0001);
    }

    #[test]
    #[should_panic(expected = "child index out of range")]
    fn test_normal_constructor_panics_on_offset_index() {
        let _ = ChildIndex::normal(0x8000_0001);
    }

    #[test]
    fn test_prebuilt_paths_render() {
        assert_eq!(DerivationPaths::account().to_string(), DerivationPaths::ACCOUNT_0);
        assert_eq!(DerivationPaths::payment(0).to_string(), DerivationPaths::PAYMENT_0);
        assert_eq!(DerivationPaths::stake(0).to_string(), DerivationPaths::STAKE_0);
        assert_eq!(DerivationPaths::payment(7).to_string(), "m/1852'/1815'/0'/0/7");
        assert_eq!(DerivationPath::root().to_string(), "m");
    }

    #[test]
    fn test_parse_round_trip() {
        for s in [
            DerivationPaths::ACCOUNT_0,
            DerivationPaths::PAYMENT_0,
            DerivationPaths::STAKE_0,
        ] {
            let path: DerivationPath = s.parse().unwrap();
            assert_eq!(path.to_string(), s);
        }
        let h: DerivationPath = "m/1852h/1815h/0h".parse().unwrap();
        assert_eq!(h, DerivationPaths::account());
        assert_eq!("m".parse::<DerivationPath>().unwrap().depth(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("1852'/1815'".parse::<DerivationPath>().is_err());
        assert!("m/abc".parse::<DerivationPath>().is_err());
        assert!("m/".parse::<DerivationPath>().is_err());
        assert!("m/2147483648".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn test_child_extends() {
        let account = DerivationPaths::account();
        let payment = account
            .child(ChildIndex::normal(0))
            .child(ChildIndex::normal(0));
        assert_eq!(payment, DerivationPaths::payment(0));
        assert_eq!(account.depth(), 3);
        assert!(payment.steps()[..3].iter().all(|s| s.is_hardened()));
        assert!(!payment.steps()[3].is_hardened());
    }
}
