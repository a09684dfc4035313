// wallet-core/src/crypto/key_deriver/bip32_ed25519.rs
//
// BIP32-Ed25519 Key Derivation: Cardano Icarus master key + V2 children
//
// Unlike SLIP-0010, BIP32-Ed25519 supports both hardened and soft children:
// soft children of an extended public key can be derived without the private
// key, hardened children cannot.
// Master key: PBKDF2-HMAC-SHA512(password = passphrase, salt = entropy, 4096, 96 bytes)

use crate::crypto::encoding::{self, hrp, KEY_HASH_SIZE};
use crate::crypto::paths::{ChildIndex, DerivationPath};
use crate::error::{CryptoError, WalletResult};
use ed25519_bip32::{DerivationScheme, XPrv, XPub, XPRV_SIZE};
use hmac::Hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

/// PBKDF2 iteration count of the Icarus master key scheme
const PBKDF2_ITERATIONS: u32 = 4096;

/// Valid BIP-39 entropy lengths in bytes
const ENTROPY_SIZES: [usize; 5] = [16, 20, 24, 28, 32];

/// An extended private key together with the path that produced it.
///
/// Nodes are values: deriving a child never touches the parent.
#[derive(Clone)]
pub struct KeyNode {
    xprv: XPrv,
    path: DerivationPath,
}

// Debug never prints key material
impl std::fmt::Debug for KeyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyNode")
            .field("path", &self.path.to_string())
            .field("xprv", &"[REDACTED]")
            .finish()
    }
}

impl KeyNode {
    // =========================================================================
    // MASTER KEY
    // =========================================================================

    /// Derive the root key from BIP-39 entropy (not the BIP-39 seed)
    ///
    /// # Steps
    /// 1. `I = PBKDF2-HMAC-SHA512(passphrase, entropy, 4096)` (96 bytes)
    /// 2. Clamp the scalar: clear the low 3 bits of byte 0, clear the top
    ///    3 bits of byte 31, set bit 6 of byte 31
    /// 3. `I[64..96]` is the chain code
    pub fn from_entropy(entropy: &[u8], passphrase: &[u8]) -> WalletResult<Self> {
        if !ENTROPY_SIZES.contains(&entropy.len()) {
            return Err(CryptoError::DerivationFailed(format!(
                "Invalid entropy length: expected 16, 20, 24, 28 or 32 bytes, got {}",
                entropy.len()
            ))
            .into());
        }

        let mut buf = Zeroizing::new([0u8; XPRV_SIZE]);
        pbkdf2::pbkdf2::<Hmac<Sha512>>(passphrase, entropy, PBKDF2_ITERATIONS, &mut buf[..])
            .map_err(|e| {
                CryptoError::DerivationFailed(format!("PBKDF2 master key failed: {}", e))
            })?;

        Ok(Self {
            xprv: XPrv::normalize_bytes_force3rd(*buf),
            path: DerivationPath::root(),
        })
    }

    // =========================================================================
    // CHILD DERIVATION
    // =========================================================================

    /// Derive one child (V2 scheme). Hardened steps use the private key.
    pub fn derive(&self, step: ChildIndex) -> Self {
        Self {
            xprv: self.xprv.derive(DerivationScheme::V2, step.raw()),
            path: self.path.child(step),
        }
    }

    /// Derive every step of `steps` in order
    pub fn derive_steps(&self, steps: &[ChildIndex]) -> Self {
        steps
            .iter()
            .fold(self.clone(), |node, step| node.derive(*step))
    }

    // =========================================================================
    // PROJECTIONS
    // =========================================================================

    #[inline]
    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    /// Extended public key (public key + chain code)
    #[inline]
    pub fn xpub(&self) -> XPub {
        self.xprv.public()
    }

    /// 32-byte ed25519 public key
    pub fn public_key(&self) -> [u8; 32] {
        let mut pk = [0u8; 32];
        pk.copy_from_slice(&self.xpub().as_ref()[..32]);
        pk
    }

    /// blake2b-224 hash of the public key
    pub fn key_hash(&self) -> [u8; KEY_HASH_SIZE] {
        encoding::key_hash(&self.public_key())
    }

    /// 64-byte extended secret (scalar + nonce key), without chain code
    pub fn extended_secret(&self) -> Zeroizing<[u8; 64]> {
        let mut sk = Zeroizing::new([0u8; 64]);
        sk.copy_from_slice(&self.xprv.as_ref()[..64]);
        sk
    }

    // =========================================================================
    // BECH32 RENDERINGS
    // =========================================================================

    /// Full 96-byte extended private key: `xprv1...`
    pub fn to_xprv_bech32(&self) -> WalletResult<String> {
        encoding::bech32_encode(hrp::ROOT_XPRV, self.xprv.as_ref())
    }

    /// 64-byte extended public key: `xpub1...`
    pub fn to_xpub_bech32(&self) -> WalletResult<String> {
        encoding::bech32_encode(hrp::XPUB, self.xpub().as_ref())
    }

    /// 64-byte extended signing key: `ed25519e_sk1...`
    pub fn to_signing_key_bech32(&self) -> WalletResult<String> {
        encoding::bech32_encode(hrp::EXTENDED_SIGNING_KEY, &self.extended_secret()[..])
    }

    /// 32-byte verification key: `ed25519_pk1...`
    pub fn to_verification_key_bech32(&self) -> WalletResult<String> {
        encoding::bech32_encode(hrp::VERIFICATION_KEY, &self.public_key())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use crate::error::WalletError;

    const TEST_ENTROPY: &str = "000102030405060708090a0b0c0d0e0f";

    fn root() -> KeyNode {
        KeyNode::from_entropy(&hex::decode(TEST_ENTROPY).unwrap(), &[]).unwrap()
    }

    #[test]
    fn test_master_key_is_clamped() {
        let bytes = root().extended_secret();
        assert_eq!(bytes[0] & 0b0000_0111, 0);
        assert_eq!(bytes[31] & 0b1110_0000, 0b0100_0000);
    }

    #[test]
    fn test_master_key_deterministic() {
        let a = root();
        let b = root();
        assert_eq!(&*a.extended_secret(), &*b.extended_secret());
        assert_eq!(a.to_xprv_bech32().unwrap(), b.to_xprv_bech32().unwrap());
    }

    #[test]
    fn test_passphrase_changes_master() {
        let entropy = hex::decode(TEST_ENTROPY).unwrap();
        let plain = KeyNode::from_entropy(&entropy, &[]).unwrap();
        let salted = KeyNode::from_entropy(&entropy, b"TREZOR").unwrap();
        assert_ne!(plain.public_key(), salted.public_key());
    }

    #[test]
    fn test_invalid_entropy_length() {
        for len in [0usize, 15, 17, 33, 64] {
            let err = KeyNode::from_entropy(&vec![0u8; len], &[]).unwrap_err();
            assert!(matches!(
                err,
                WalletError::Crypto(CryptoError::DerivationFailed(_))
            ));
        }
    }

    #[test]
    fn test_derive_tracks_path() {
        let account = root().derive_steps(DerivationPaths::account().steps());
        assert_eq!(account.path().to_string(), DerivationPaths::ACCOUNT_0);
        let payment = account
            .derive(ChildIndex::normal(0))
            .derive(ChildIndex::normal(0));
        assert_eq!(payment.path().to_string(), DerivationPaths::PAYMENT_0);
    }

    #[test]
    fn test_hardened_and_soft_children_differ() {
        let r = root();
        let hard = r.derive(ChildIndex::hardened(0));
        let soft = r.derive(ChildIndex::normal(0));
        assert_ne!(hard.public_key(), soft.public_key());
    }

    #[test]
    fn test_soft_children_derivable_from_public_key() {
        let account = root().derive_steps(DerivationPaths::account().steps());
        let stake = account
            .derive(ChildIndex::normal(2))
            .derive(ChildIndex::normal(0));

        let from_public = account
            .xpub()
            .derive(DerivationScheme::V2, 2)
            .and_then(|x| x.derive(DerivationScheme::V2, 0))
            .unwrap();
        assert_eq!(&from_public.as_ref()[..32], &stake.public_key()[..]);
    }

    #[test]
    fn test_hardened_children_not_derivable_from_public_key() {
        let account = root().derive_steps(DerivationPaths::account().steps());
        let hardened = ChildIndex::hardened(0).raw();
        assert!(account.xpub().derive(DerivationScheme::V2, hardened).is_err());
    }

    #[test]
    fn test_bech32_prefixes_and_sizes() {
        let node = root().derive_steps(DerivationPaths::payment(0).steps());

        let (prefix, data) = encoding::bech32_decode(&node.to_xprv_bech32().unwrap()).unwrap();
        assert_eq!((prefix.as_str(), data.len()), ("xprv", 96));

        let (prefix, data) = encoding::bech32_decode(&node.to_xpub_bech32().unwrap()).unwrap();
        assert_eq!((prefix.as_str(), data.len()), ("xpub", 64));

        let (prefix, data) =
            encoding::bech32_decode(&node.to_signing_key_bech32().unwrap()).unwrap();
        assert_eq!((prefix.as_str(), data.len()), ("ed25519e_sk", 64));

        let (prefix, data) =
            encoding::bech32_decode(&node.to_verification_key_bech32().unwrap()).unwrap();
        assert_eq!((prefix.as_str(), data), ("ed25519_pk", node.public_key().to_vec()));
    }

    #[test]
    fn test_debug_redacts_key() {
        let out = format!("{:?}", root());
        assert!(out.contains("REDACTED"));
        assert!(out.contains("path: \"m\""));
    }
}
