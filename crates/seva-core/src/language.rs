use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::TargetLanguage;

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639 code: "gbm", ...)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a token in the dictionary
    fn lookup(&self, token: &Token) -> Option<LookupResult>;
}

/// A word, or several words merged into one known phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Original casing, phrase words joined by single spaces
    pub surface: String,
    pub normalized: String,
    /// Index of the first word this token covers
    pub position: usize,
    pub word_count: usize,
}

impl Token {
    pub fn new(surface: String, position: usize, word_count: usize) -> Self {
        let normalized = surface.to_lowercase();
        Self {
            surface,
            normalized,
            position,
            word_count,
        }
    }

    pub fn is_phrase(&self) -> bool {
        self.word_count > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub term: String,
    pub hindi_meaning: String,
    pub english_meaning: String,
    pub metadata: BTreeMap<String, String>,
}

impl LookupResult {
    pub fn meaning(&self, lang: TargetLanguage) -> &str {
        match lang {
            TargetLanguage::Hindi => &self.hindi_meaning,
            TargetLanguage::English => &self.english_meaning,
        }
    }
}
