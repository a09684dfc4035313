// wallet-core/src/config.rs
//
// Input resolution - turns raw CLI / environment tokens into validated,
// explicit configuration. Pure functions except `load_default_network`,
// which reads the environment once at startup.

use crate::crypto::mnemonic::{MnemonicSpec, WordCount};
use crate::error::WalletResult;
use crate::network::{Network, NetworkProfile};
use std::path::{Path, PathBuf};

/// Environment variable naming the default network
pub const DEFAULT_NETWORK_ENV: &str = "DEFAULT_NETWORK";

/// Output path used when `--output` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "outputs/wallet/wallet.json";

pub const DEFAULT_WORD_COUNT: WordCount = WordCount::TwentyFour;

/// Pick the default network from an optional configured value.
///
/// Unsupported or missing values fall back to preprod.
pub fn default_network(configured: Option<&str>) -> Network {
    configured
        .and_then(|value| value.parse::<Network>().ok())
        .unwrap_or_default()
}

/// Read [`DEFAULT_NETWORK_ENV`] and resolve the default network
pub fn load_default_network() -> Network {
    let configured = std::env::var(DEFAULT_NETWORK_ENV).ok();
    let network = default_network(configured.as_deref());
    tracing::debug!(env = DEFAULT_NETWORK_ENV, %network, "resolved default network");
    network
}

/// Validate the requested network and word count.
///
/// Nothing is generated here; both tokens are checked before any entropy
/// is drawn.
pub fn resolve_inputs(network: &str, words: &str) -> WalletResult<(NetworkProfile, MnemonicSpec)> {
    let network: Network = network.parse()?;
    let word_count = WordCount::parse_token(words)?;
    Ok((network.profile(), MnemonicSpec::new(word_count)))
}

/// Validated configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub profile: NetworkProfile,
    pub mnemonic: MnemonicSpec,
    pub output: PathBuf,
    pub force: bool,
}

impl GenerateConfig {
    /// Resolve raw tokens; a relative `output` is anchored at `cwd`
    pub fn resolve(
        network: &str,
        words: &str,
        output: &Path,
        force: bool,
        cwd: &Path,
    ) -> WalletResult<Self> {
        let (profile, mnemonic) = resolve_inputs(network, words)?;
        let output = if output.is_absolute() {
            output.to_path_buf()
        } else {
            cwd.join(output)
        };

        Ok(Self {
            profile,
            mnemonic,
            output,
            force,
        })
    }
}
