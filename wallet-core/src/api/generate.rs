// wallet-core/src/api/generate.rs
//
// Wallet generation pipeline:
// input resolver → key deriver → address builder → serializer → output guard
//
// Runs sequentially; the file is written once, after all key material exists.

use crate::chains::cardano::{AddressBuilder, Credential};
use crate::config::GenerateConfig;
use crate::crypto::{KeyDeriver, MnemonicSpec, WalletMnemonic};
use crate::error::WalletResult;
use crate::network::NetworkProfile;
use crate::wallet::{self, WalletDocument};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

// --- Key Management ---

/// Generate a fresh wallet document from OS entropy
pub fn generate_wallet(
    profile: &NetworkProfile,
    spec: MnemonicSpec,
) -> WalletResult<WalletDocument> {
    generate_wallet_with_rng(&mut OsRng, profile, spec)
}

/// Generate a wallet document drawing entropy from `rng`
pub fn generate_wallet_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    profile: &NetworkProfile,
    spec: MnemonicSpec,
) -> WalletResult<WalletDocument> {
    let mnemonic = WalletMnemonic::generate_with(rng, spec)?;
    tracing::debug!(words = mnemonic.word_count(), "generated mnemonic");
    derive_wallet(profile, &mnemonic)
}

/// Derive keys and addresses for an existing mnemonic.
///
/// Deterministic: the phrase is decoded back to entropy and everything after
/// that is a pure function of it.
pub fn derive_wallet(
    profile: &NetworkProfile,
    mnemonic: &WalletMnemonic,
) -> WalletResult<WalletDocument> {
    let entropy = mnemonic.to_entropy()?;
    let keys = KeyDeriver::derive_tree(&entropy)?;

    let addresses = AddressBuilder::build(
        profile,
        Credential::from_public_key(&keys.payment.public_key()),
        Credential::from_public_key(&keys.stake.public_key()),
    )?;
    tracing::debug!(
        network = %profile.network,
        network_id = profile.network_id,
        protocol_magic = profile.protocol_magic,
        "built addresses"
    );

    WalletDocument::assemble(profile.network, mnemonic, &keys, addresses)
}

// --- Full Run ---

/// Guard the output path, generate, and persist the document
pub fn run(config: &GenerateConfig) -> WalletResult<WalletDocument> {
    wallet::ensure_writable(&config.output, config.force)?;

    let document = generate_wallet(&config.profile, config.mnemonic)?;
    let json = Zeroizing::new(document.to_json_pretty()?);
    wallet::write_atomic(&config.output, &json)?;

    tracing::info!(
        network = %document.network,
        path = %config.output.display(),
        "wallet generated"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::WordCount;
    use crate::network::Network;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_same_seed_same_wallet() {
        let profile = Network::Preprod.profile();
        let spec = MnemonicSpec::new(WordCount::TwentyFour);
        let a = generate_wallet_with_rng(&mut StdRng::seed_from_u64(42), &profile, spec).unwrap();
        let b = generate_wallet_with_rng(&mut StdRng::seed_from_u64(42), &profile, spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_networks_share_keys_not_addresses() {
        let mnemonic = WalletMnemonic::from_entropy(&[9u8; 32]).unwrap();
        let docs: Vec<WalletDocument> = Network::ALL
            .iter()
            .map(|n| derive_wallet(&n.profile(), &mnemonic).unwrap())
            .collect();

        for doc in &docs[1..] {
            assert_eq!(doc.keys, docs[0].keys);
            assert_ne!(doc.addresses.base, docs[0].addresses.base);
            assert_ne!(doc.addresses.reward, docs[0].addresses.reward);
        }
    }

    #[test]
    fn test_run_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::resolve(
            "mainnet",
            "12",
            &dir.path().join("nested").join("wallet.json"),
            false,
            dir.path(),
        )
        .unwrap();

        let doc = run(&config).unwrap();
        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(written, doc.to_json_pretty().unwrap());
    }
}
