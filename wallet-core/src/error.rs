use std::path::PathBuf;
use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Derivation Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("File \"{}\" already exists. Re-run with --force to overwrite it.", .path.display())]
    Overwrite { path: PathBuf },

    #[error("IO Error at \"{}\": {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl WalletError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        WalletError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Short label for the error family, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WalletError::Config(_) => "configuration",
            WalletError::Mnemonic(_) | WalletError::Crypto(_) => "derivation",
            WalletError::Overwrite { .. } => "overwrite",
            WalletError::Io { .. } => "io",
            WalletError::Serialization(_) => "serialization",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported network \"{value}\". Use {accepted}.")]
    UnsupportedNetwork { value: String, accepted: String },

    #[error("Unsupported word count \"{value}\". Choose one of {accepted}.")]
    UnsupportedWordCount { value: String, accepted: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
