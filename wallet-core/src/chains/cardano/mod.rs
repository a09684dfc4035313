// wallet-core/src/chains/cardano/mod.rs

//! Cardano (Shelley era) Chain Support
//!
//! - **Credentials**: blake2b-224 key hashes via [`Credential`].
//! - **Addresses**: base, enterprise and reward addresses via [`AddressBuilder`],
//!   plus a header-byte decoder via [`ShelleyAddress::from_bech32`].

pub mod address;

pub use address::{AddressBuilder, AddressKind, Addresses, Credential, ShelleyAddress};
