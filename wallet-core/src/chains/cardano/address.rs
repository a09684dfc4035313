// wallet-core/src/chains/cardano/address.rs
//
// Cardano Address Module - Shelley base / enterprise / reward addresses
// CIP-19 (binary layout), bech32 (text encoding)
//
// Layout: header (1B) || credential (28B) [|| stake credential (28B)]
// Header: high nibble = address type, low nibble = network id

use crate::crypto::encoding::{self, KEY_HASH_SIZE};
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::network::NetworkProfile;
use serde::Serialize;

// =============================================================================
// CREDENTIAL
// =============================================================================

/// Hash of a verification key. Addresses never embed a raw public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Credential {
    KeyHash([u8; KEY_HASH_SIZE]),
}

impl Credential {
    /// Hash `public_key` with blake2b-224
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        Credential::KeyHash(encoding::key_hash(public_key))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_HASH_SIZE] {
        match self {
            Credential::KeyHash(hash) => hash,
        }
    }

    fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        let hash: [u8; KEY_HASH_SIZE] = bytes.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "credential must be {} bytes, got {}",
                KEY_HASH_SIZE,
                bytes.len()
            )))
        })?;
        Ok(Credential::KeyHash(hash))
    }
}

// =============================================================================
// ADDRESS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Payment + stake credential: can receive funds and delegate
    Base,
    /// Payment credential only: no staking rights
    Enterprise,
    /// Stake credential only: receives staking rewards
    Reward,
}

impl AddressKind {
    /// Header type nibble for key-hash credentials
    const fn header_type(self) -> u8 {
        match self {
            AddressKind::Base => 0b0000,
            AddressKind::Enterprise => 0b0110,
            AddressKind::Reward => 0b1110,
        }
    }

    const fn from_header_type(nibble: u8) -> Option<Self> {
        match nibble {
            0b0000 => Some(AddressKind::Base),
            0b0110 => Some(AddressKind::Enterprise),
            0b1110 => Some(AddressKind::Reward),
            _ => None,
        }
    }

    const fn byte_len(self) -> usize {
        match self {
            AddressKind::Base => 1 + 2 * KEY_HASH_SIZE,
            AddressKind::Enterprise | AddressKind::Reward => 1 + KEY_HASH_SIZE,
        }
    }
}

/// A Shelley address as a value: fully determined by its credentials and
/// network id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelleyAddress {
    kind: AddressKind,
    network_id: u8,
    credentials: Vec<Credential>,
}

impl ShelleyAddress {
    pub fn base(network_id: u8, payment: Credential, stake: Credential) -> Self {
        Self {
            kind: AddressKind::Base,
            network_id,
            credentials: vec![payment, stake],
        }
    }

    pub fn enterprise(network_id: u8, payment: Credential) -> Self {
        Self {
            kind: AddressKind::Enterprise,
            network_id,
            credentials: vec![payment],
        }
    }

    pub fn reward(network_id: u8, stake: Credential) -> Self {
        Self {
            kind: AddressKind::Reward,
            network_id,
            credentials: vec![stake],
        }
    }

    #[inline]
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    #[inline]
    pub fn network_id(&self) -> u8 {
        self.network_id
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn header(&self) -> u8 {
        (self.kind.header_type() << 4) | (self.network_id & 0x0f)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.kind.byte_len());
        bytes.push(self.header());
        for credential in &self.credentials {
            bytes.extend_from_slice(credential.as_bytes());
        }
        bytes
    }

    pub fn to_bech32(&self, prefix: &str) -> WalletResult<String> {
        encoding::bech32_encode(prefix, &self.to_bytes())
    }

    /// Parse raw address bytes (key-hash base, enterprise and reward only)
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let header = *bytes.first().ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat("empty address".to_string()))
        })?;

        let kind = AddressKind::from_header_type(header >> 4).ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "unsupported address header 0x{:02x}",
                header
            )))
        })?;

        if bytes.len() != kind.byte_len() {
            return Err(CryptoError::InvalidKeyFormat(format!(
                "{:?} address must be {} bytes, got {}",
                kind,
                kind.byte_len(),
                bytes.len()
            ))
            .into());
        }

        let credentials = bytes[1..]
            .chunks(KEY_HASH_SIZE)
            .map(Credential::from_slice)
            .collect::<WalletResult<Vec<_>>>()?;

        Ok(Self {
            kind,
            network_id: header & 0x0f,
            credentials,
        })
    }

    /// Decode a bech32 address, returning its prefix alongside the address
    pub fn from_bech32(encoded: &str) -> WalletResult<(String, Self)> {
        let (prefix, data) = encoding::bech32_decode(encoded)?;
        Ok((prefix, Self::from_bytes(&data)?))
    }
}

// =============================================================================
// ADDRESS BUILDER
// =============================================================================

/// The three addresses generated for a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addresses {
    pub base: String,
    pub enterprise: String,
    pub reward: String,
}

pub struct AddressBuilder;

impl AddressBuilder {
    /// Build base + enterprise (payment prefix) and reward (stake prefix)
    pub fn build(
        profile: &NetworkProfile,
        payment: Credential,
        stake: Credential,
    ) -> WalletResult<Addresses> {
        let id = profile.network_id;
        Ok(Addresses {
            base: ShelleyAddress::base(id, payment, stake).to_bech32(profile.address_prefix)?,
            enterprise: ShelleyAddress::enterprise(id, payment)
                .to_bech32(profile.address_prefix)?,
            reward: ShelleyAddress::reward(id, stake).to_bech32(profile.stake_prefix)?,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
