// wallet-core/src/wallet/document.rs
//
// Wallet document - the JSON artifact written once per run.
// Field order and names are part of the output format.

use crate::chains::cardano::Addresses;
use crate::crypto::paths::DerivationPaths;
use crate::crypto::{KeyNode, KeyTree, WalletMnemonic};
use crate::error::{WalletError, WalletResult};
use crate::network::Network;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDocument {
    pub network: Network,
    pub mnemonic: MnemonicSection,
    pub derivation_path: String,
    pub addresses: Addresses,
    pub keys: KeySection,
}

#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct MnemonicSection {
    pub phrase: String,
    pub word_count: usize,
    pub language: String,
}

// Debug never prints the phrase
impl std::fmt::Debug for MnemonicSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicSection")
            .field("word_count", &self.word_count)
            .field("language", &self.language)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeySection {
    pub root_private_key: String,
    pub account_public_key: String,
    pub payment: KeyPairEntry,
    pub stake: KeyPairEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairEntry {
    pub path: String,
    pub signing_key: String,
    pub verification_key: String,
}

impl KeyPairEntry {
    fn from_node(path: &str, node: &KeyNode) -> WalletResult<Self> {
        Ok(Self {
            path: path.to_string(),
            signing_key: node.to_signing_key_bech32()?,
            verification_key: node.to_verification_key_bech32()?,
        })
    }
}

impl WalletDocument {
    /// Package already-validated key material; no checks happen here.
    pub fn assemble(
        network: Network,
        mnemonic: &WalletMnemonic,
        keys: &KeyTree,
        addresses: Addresses,
    ) -> WalletResult<Self> {
        Ok(Self {
            network,
            mnemonic: MnemonicSection {
                phrase: mnemonic.phrase().to_string(),
                word_count: mnemonic.word_count(),
                language: WalletMnemonic::LANGUAGE.to_string(),
            },
            derivation_path: DerivationPaths::ACCOUNT_0.to_string(),
            addresses,
            keys: KeySection {
                root_private_key: keys.root.to_xprv_bech32()?,
                account_public_key: keys.account.to_xpub_bech32()?,
                payment: KeyPairEntry::from_node(DerivationPaths::PAYMENT_0, &keys.payment)?,
                stake: KeyPairEntry::from_node(DerivationPaths::STAKE_0, &keys.stake)?,
            },
        })
    }

    /// Pretty-printed UTF-8 JSON. The caller owns a copy of every secret.
    pub fn to_json_pretty(&self) -> WalletResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WalletError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::cardano::{AddressBuilder, Credential};
    use crate::crypto::KeyDeriver;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn sample(network: Network) -> WalletDocument {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let tree = KeyDeriver::derive_tree(&mnemonic.to_entropy().unwrap()).unwrap();
        let addresses = AddressBuilder::build(
            &network.profile(),
            Credential::from_public_key(&tree.payment.public_key()),
            Credential::from_public_key(&tree.stake.public_key()),
        )
        .unwrap();
        WalletDocument::assemble(network, &mnemonic, &tree, addresses).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&sample(Network::Preprod).to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["network"], "preprod");
        assert_eq!(json["mnemonic"]["phrase"], TEST_MNEMONIC_12);
        assert_eq!(json["mnemonic"]["wordCount"], 12);
        assert_eq!(json["mnemonic"]["language"], "english");
        assert_eq!(json["derivationPath"], "m/1852'/1815'/0'");
        assert_eq!(json["keys"]["payment"]["path"], "m/1852'/1815'/0'/0/0");
        assert_eq!(json["keys"]["stake"]["path"], "m/1852'/1815'/0'/2/0");

        for key in ["base", "enterprise", "reward"] {
            assert!(json["addresses"][key].is_string());
        }
        assert!(json["keys"]["rootPrivateKey"]
            .as_str()
            .unwrap()
            .starts_with("xprv1"));
        assert!(json["keys"]["accountPublicKey"]
            .as_str()
            .unwrap()
            .starts_with("xpub1"));
        assert!(json["keys"]["payment"]["signingKey"]
            .as_str()
            .unwrap()
            .starts_with("ed25519e_sk1"));
        assert!(json["keys"]["stake"]["verificationKey"]
            .as_str()
            .unwrap()
            .starts_with("ed25519_pk1"));
    }

    #[test]
    fn test_top_level_field_order() {
        let text = sample(Network::Mainnet).to_json_pretty().unwrap();
        let order: Vec<usize> = [
            "\"network\"",
            "\"mnemonic\"",
            "\"derivationPath\"",
            "\"addresses\"",
            "\"keys\"",
        ]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_secret_sections_zeroize() {
        let doc = sample(Network::Preprod);

        let mut mnemonic = doc.mnemonic.clone();
        mnemonic.zeroize();
        assert!(mnemonic.phrase.is_empty());
        assert_eq!(mnemonic.word_count, 0);

        let mut keys = doc.keys.clone();
        keys.zeroize();
        assert!(keys.root_private_key.is_empty());
        assert!(keys.payment.signing_key.is_empty());
        assert!(keys.stake.signing_key.is_empty());

        // the source document is untouched
        assert_eq!(doc.mnemonic.phrase, TEST_MNEMONIC_12);
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let out = format!("{:?}", sample(Network::Preview));
        assert!(!out.contains("abandon"));
    }
}
