pub mod cache;
pub mod dictionary;
pub mod engine;
pub mod loader;
pub mod phrase;
pub mod song;
pub mod tokenizer;
pub mod translator;
pub mod validate;

#[cfg(test)]
mod tests;

/// ISO 639-3 code for Garhwali
pub const LANGUAGE_CODE: &str = "gbm";

pub use dictionary::{Category, DictionaryStats, GarhwaliDictionary, GarhwaliEntry};
pub use engine::{MarkedText, TranslationEngine};
pub use loader::{EMBEDDED_DICTIONARY, GarhwaliLoader};
pub use song::{SongMetadata, SongTranslation};
pub use tokenizer::Tokenizer;
pub use validate::{ValidationReport, validate_entries, validate_json};
