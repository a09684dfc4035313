// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase generation and entropy recovery
// Standard: BIP-39 (English wordlist, SHA-256 checksum)

use crate::error::{ConfigError, CryptoError, MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported word counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    #[default]
    TwentyFour = 24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Twelve,
        WordCount::Fifteen,
        WordCount::Eighteen,
        WordCount::TwentyOne,
        WordCount::TwentyFour,
    ];

    /// Map a raw count to the enumeration; anything else is `None`
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }

    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }

    /// Entropy strength in bits: `32 * words / 3`
    #[inline]
    pub const fn entropy_bits(self) -> usize {
        32 * self.count() / 3
    }

    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Accepted counts rendered for error messages: "12, 15, 18, 21, 24"
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|w| w.count().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a user-supplied token such as `"24"` or `" 12 "`
    pub fn parse_token(token: &str) -> WalletResult<Self> {
        token
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_count)
            .ok_or_else(|| {
                WalletError::Config(ConfigError::UnsupportedWordCount {
                    value: token.to_string(),
                    accepted: Self::accepted(),
                })
            })
    }
}

/// Validated mnemonic parameters: word count plus the entropy size it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MnemonicSpec {
    pub word_count: WordCount,
    pub entropy_bits: usize,
}

impl MnemonicSpec {
    pub const fn new(word_count: WordCount) -> Self {
        Self {
            word_count,
            entropy_bits: word_count.entropy_bits(),
        }
    }

    #[inline]
    pub const fn entropy_bytes(&self) -> usize {
        self.entropy_bits / 8
    }
}

impl Default for MnemonicSpec {
    fn default() -> Self {
        Self::new(WordCount::default())
    }
}

/// BIP-39 mnemonic holding only the phrase.
///
/// Entropy is never stored; it is recovered from the phrase on demand so the
/// persisted phrase is always the source of truth for the key tree.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Debug never prints the phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    pub const LANGUAGE: &'static str = "english";

    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh mnemonic from the OS CSPRNG
    pub fn generate(spec: MnemonicSpec) -> WalletResult<Self> {
        Self::generate_with(&mut OsRng, spec)
    }

    /// Generate a mnemonic drawing entropy from `rng`
    pub fn generate_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        spec: MnemonicSpec,
    ) -> WalletResult<Self> {
        let mut entropy = Zeroizing::new(vec![0u8; spec.entropy_bytes()]);
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))?;

        Self::from_entropy(&entropy)
    }

    /// Encode raw entropy (16, 20, 24, 28 or 32 bytes) as a phrase
    pub fn from_entropy(entropy: &[u8]) -> WalletResult<Self> {
        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| CryptoError::DerivationFailed(format!("entropy rejected: {}", e)))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: mnemonic.word_count(),
        })
    }

    /// Restore a mnemonic from an existing phrase
    ///
    /// # Validation
    /// - word count (12, 15, 18, 21, 24)
    /// - every word is in the English wordlist
    /// - checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if WordCount::from_count(count).is_none() {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let normalized_phrase = normalized.join(" ");
        Self::parse(&normalized_phrase)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase itself. Never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // ENTROPY RECOVERY
    // =========================================================================

    /// Decode the phrase back into the entropy it encodes
    pub fn to_entropy(&self) -> WalletResult<Zeroizing<Vec<u8>>> {
        let mnemonic = Self::parse(&self.phrase)?;
        Ok(Zeroizing::new(mnemonic.to_entropy()))
    }

    fn parse(phrase: &str) -> WalletResult<Mnemonic> {
        Mnemonic::parse_in_normalized(Language::English, phrase).map_err(|e| {
            let err = match e {
                bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
                bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(
                    phrase
                        .split_whitespace()
                        .nth(idx)
                        .unwrap_or_default()
                        .to_string(),
                ),
                bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
                other => MnemonicError::Bip39Error(other.to_string()),
            };
            WalletError::Mnemonic(err)
        })
    }
}
