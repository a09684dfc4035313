// wallet-core/src/network/models.rs
//
// Network Models - Cardano networks supported by the generator
//
// preprod and preview share the `addr_test` / `stake_test` prefixes but are
// kept apart by the network id written into every address header byte.

use crate::error::{ConfigError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// NETWORK IDENTIFICATION
// =============================================================================

/// Supported network keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Pre-production testnet
    #[default]
    Preprod,
    /// Preview testnet
    Preview,
    /// Cardano mainnet
    Mainnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Preprod, Network::Preview, Network::Mainnet];

    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Preprod => "preprod",
            Network::Preview => "preview",
            Network::Mainnet => "mainnet",
        }
    }

    /// Trim + lowercase, the same normalization applied to CLI and env input.
    pub fn normalize(value: &str) -> String {
        value.trim().to_lowercase()
    }

    /// Accepted tokens rendered for error messages: "preprod, preview, mainnet"
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Immutable address parameters for this network
    pub const fn profile(self) -> NetworkProfile {
        match self {
            Network::Preprod => NetworkProfile {
                network: Network::Preprod,
                network_id: 0,
                protocol_magic: 1,
                address_prefix: "addr_test",
                stake_prefix: "stake_test",
            },
            Network::Preview => NetworkProfile {
                network: Network::Preview,
                network_id: 2,
                protocol_magic: 2,
                address_prefix: "addr_test",
                stake_prefix: "stake_test",
            },
            Network::Mainnet => NetworkProfile {
                network: Network::Mainnet,
                network_id: 1,
                protocol_magic: 764_824_073,
                address_prefix: "addr",
                stake_prefix: "stake",
            },
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> WalletResult<Self> {
        match Self::normalize(s).as_str() {
            "preprod" => Ok(Network::Preprod),
            "preview" => Ok(Network::Preview),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(ConfigError::UnsupportedNetwork {
                value: s.to_string(),
                accepted: Self::accepted(),
            }
            .into()),
        }
    }
}

// =============================================================================
// NETWORK PROFILE
// =============================================================================

/// Address parameters of one network.
///
/// `network_id` is the 4-bit value stored in the low nibble of the address
/// header byte, so it must stay below 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    pub network: Network,
    pub network_id: u8,
    pub protocol_magic: u32,
    pub address_prefix: &'static str,
    pub stake_prefix: &'static str,
}

impl NetworkProfile {
    /// Whether the live ledger accepts `network_id` (it only knows 0 and 1)
    pub const fn ledger_compatible(&self) -> bool {
        self.network_id <= 1
    }

    /// Caveat shown to users for profiles the live ledger would reject
    pub const fn ledger_note(&self) -> Option<&'static str> {
        if self.ledger_compatible() {
            None
        } else {
            Some(
                "Preview addresses use network id 2 to stay distinct from preprod; \
                 the live preview ledger only accepts network id 0.",
            )
        }
    }
}
