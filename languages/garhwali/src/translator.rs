use seva_core::dictionary::Dictionary;
use seva_core::types::TargetLanguage;
use seva_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

use crate::LANGUAGE_CODE;
use crate::engine::TranslationEngine;

impl Translator for TranslationEngine {
    fn translate(&mut self, text: &str, to: TargetLanguage) -> Result<Translation, TranslateError> {
        let result = self.translate_text(text, to);
        let untranslated = self.mark_untranslated_words(text).untranslated_words;

        Ok(Translation {
            text: result.translation,
            from: LANGUAGE_CODE.to_string(),
            to,
            provider: self.dictionary().metadata().name,
            metadata: result.metadata,
            untranslated,
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        TargetLanguage::ALL
            .iter()
            .map(|lang| (LANGUAGE_CODE.to_string(), lang.code().to_string()))
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        let dict = self.dictionary().metadata();

        ProviderMetadata {
            name: dict.name,
            source_language: dict.language,
            entry_count: dict.entry_count,
        }
    }
}
