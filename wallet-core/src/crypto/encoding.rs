// wallet-core/src/crypto/encoding.rs
//
// Human-readable encodings shared by keys and addresses:
// bech32 (classic checksum) with a self-describing prefix, and the
// blake2b-224 key hash used as a ledger credential.

use crate::error::{CryptoError, WalletResult};
use bech32::{Bech32, Hrp};

/// Length of a key hash credential
pub const KEY_HASH_SIZE: usize = 28;

/// bech32 prefixes used by the ledger's key serialization
pub mod hrp {
    /// 96-byte extended private key with chain code
    pub const ROOT_XPRV: &str = "xprv";
    /// 64-byte extended public key with chain code
    pub const XPUB: &str = "xpub";
    /// 64-byte extended signing key
    pub const EXTENDED_SIGNING_KEY: &str = "ed25519e_sk";
    /// 32-byte verification key
    pub const VERIFICATION_KEY: &str = "ed25519_pk";
}

pub fn bech32_encode(prefix: &str, data: &[u8]) -> WalletResult<String> {
    let hrp = Hrp::parse(prefix)
        .map_err(|e| CryptoError::EncodingFailed(format!("invalid prefix '{}': {}", prefix, e)))?;

    bech32::encode::<Bech32>(hrp, data)
        .map_err(|e| CryptoError::EncodingFailed(format!("bech32 '{}': {}", prefix, e)).into())
}

/// Decode a bech32 string into `(prefix, payload)`
pub fn bech32_decode(encoded: &str) -> WalletResult<(String, Vec<u8>)> {
    let (hrp, data) = bech32::decode(encoded)
        .map_err(|e| CryptoError::EncodingFailed(format!("bech32 decode: {}", e)))?;
    Ok((hrp.to_string(), data))
}

/// blake2b-224 of a public key
pub fn key_hash(public_key: &[u8]) -> [u8; KEY_HASH_SIZE] {
    let digest = blake2b_simd::Params::new()
        .hash_length(KEY_HASH_SIZE)
        .hash(public_key);

    let mut out = [0u8; KEY_HASH_SIZE];
    out.copy_from_slice(digest.as_bytes());
    out
}
