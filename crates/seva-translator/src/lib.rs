use seva_core::types::{ArgumentError, TargetLanguage, TranslationMetadata};
use serde::Serialize;

pub type LanguageCode = String;

/// Translation provider interface
///
/// Providers may memoize results, so translating takes `&mut self`. Hosts that
/// share one provider across threads serialize access themselves.
pub trait Translator {
    /// Translate source-language text into `to`
    fn translate(&mut self, text: &str, to: TargetLanguage) -> Result<Translation, TranslateError>;

    /// Translate using a target language given by name ("hindi", "en", ...)
    fn translate_to(&mut self, text: &str, to: &str) -> Result<Translation, TranslateError> {
        let to: TargetLanguage = to.parse()?;
        self.translate(text, to)
    }

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: TargetLanguage,
    pub provider: String,
    pub metadata: TranslationMetadata,
    /// Source tokens without a dictionary entry
    pub untranslated: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub source_language: LanguageCode,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
}
