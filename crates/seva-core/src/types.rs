use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language a Garhwali text is rendered into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[serde(alias = "hi")]
    Hindi,
    #[default]
    #[serde(alias = "en")]
    English,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Hindi, TargetLanguage::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "hindi",
            TargetLanguage::English => "english",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "hi",
            TargetLanguage::English => "en",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hindi" | "hi" => Ok(TargetLanguage::Hindi),
            "english" | "en" => Ok(TargetLanguage::English),
            _ => Err(ArgumentError::InvalidTargetLanguage(s.to_string())),
        }
    }
}

/// Line translation strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Word-for-word substitution
    Literal,
    /// Prefer whole phrase meanings over single words
    #[default]
    Meaning,
}

impl TranslationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMode::Literal => "literal",
            TranslationMode::Meaning => "meaning",
        }
    }

    /// Capitalized label used in exported text
    pub fn label(&self) -> &'static str {
        match self {
            TranslationMode::Literal => "Literal",
            TranslationMode::Meaning => "Meaning",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(TranslationMode::Literal),
            "meaning" => Ok(TranslationMode::Meaning),
            _ => Err(ArgumentError::InvalidMode(s.to_string())),
        }
    }
}

/// Invalid values passed in by a caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Invalid target language: {0} (expected hindi or english)")]
    InvalidTargetLanguage(String),

    #[error("Invalid translation mode: {0} (expected literal or meaning)")]
    InvalidMode(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadata {
    pub total_words: usize,
    pub translated_words: usize,
    pub untranslated_words: usize,
    /// `translated_words / total_words`, 0 for empty input
    pub translation_rate: f64,
}

impl TranslationMetadata {
    pub fn new(total_words: usize, translated_words: usize, untranslated_words: usize) -> Self {
        let translation_rate = if total_words > 0 {
            translated_words as f64 / total_words as f64
        } else {
            0.0
        };

        Self {
            total_words,
            translated_words,
            untranslated_words,
            translation_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub metadata: TranslationMetadata,
}
