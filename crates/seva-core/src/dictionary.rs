use std::collections::BTreeMap;
use std::path::Path;

use crate::language::LookupResult;
use crate::types::TargetLanguage;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    type Entry: DictionaryEntry;

    /// Case-insensitive exact lookup over every entry
    fn lookup_word(&self, word: &str) -> Option<&Self::Entry>;

    /// Case-insensitive exact lookup over multi-word entries only
    fn lookup_phrase(&self, phrase: &str) -> Option<&Self::Entry>;

    /// All entries in load order
    fn entries(&self) -> &[Self::Entry];

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Individual dictionary entry
pub trait DictionaryEntry: Send + Sync {
    /// Source-language surface form
    fn headword(&self) -> &str;

    fn meaning(&self, lang: TargetLanguage) -> &str;

    fn category_name(&self) -> &str;

    /// Whether the entry spans several words
    fn is_phrase(&self) -> bool;

    fn usage_example(&self) -> Option<&str>;

    /// Convert to generic lookup result
    fn to_lookup_result(&self) -> LookupResult {
        let mut metadata = BTreeMap::new();
        metadata.insert("category".to_string(), self.category_name().to_string());
        if let Some(example) = self.usage_example() {
            metadata.insert("usage_example".to_string(), example.to_string());
        }

        LookupResult {
            term: self.headword().to_string(),
            hindi_meaning: self.meaning(TargetLanguage::Hindi).to_string(),
            english_meaning: self.meaning(TargetLanguage::English).to_string(),
            metadata,
        }
    }
}

/// Load dictionaries from files
pub trait DictionaryLoader {
    type Output: Dictionary;

    /// Load dictionary from file path
    fn load_from_file(&self, path: &Path) -> Result<Self::Output, LoadError>;

    /// Supported file formats
    fn supported_formats(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Dictionary failed validation with {count} error(s): {first}")]
    Validation { count: usize, first: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
