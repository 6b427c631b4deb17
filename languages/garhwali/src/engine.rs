use std::collections::HashSet;

use serde::Serialize;
use seva_core::dictionary::{Dictionary, DictionaryEntry, LoadError};
use seva_core::language::{LanguageProcessor, LookupResult, Token};
use seva_core::types::{TargetLanguage, TranslationMetadata, TranslationResult};
use unicode_normalization::UnicodeNormalization;

use crate::LANGUAGE_CODE;
use crate::cache::{CacheStats, TranslationCache};
use crate::dictionary::{DictionaryStats, GarhwaliDictionary, GarhwaliEntry};
use crate::loader::GarhwaliLoader;
use crate::phrase::PhraseStartIndex;
use crate::tokenizer::Tokenizer;

/// Text with every uncovered token wrapped in brackets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedText {
    pub marked_text: String,
    /// Distinct uncovered tokens, first-seen order
    pub untranslated_words: Vec<String>,
}

/// Dictionary translation engine
///
/// Owns a dictionary snapshot, the indices derived from it and a result
/// cache. Swapping the dictionary means building a new engine.
pub struct TranslationEngine {
    pub(crate) dictionary: GarhwaliDictionary,
    tokenizer: Tokenizer,
    pub(crate) phrase_starts: PhraseStartIndex,
    cache: TranslationCache,
}

impl TranslationEngine {
    pub fn new(dictionary: GarhwaliDictionary) -> Self {
        let tokenizer = Tokenizer::new(&dictionary);
        let phrase_starts = PhraseStartIndex::build(dictionary.entries());

        tracing::debug!(
            "Translation engine ready with {} entries",
            dictionary.entry_count()
        );

        Self {
            dictionary,
            tokenizer,
            phrase_starts,
            cache: TranslationCache::new(),
        }
    }

    /// Engine over the dictionary shipped with the crate
    pub fn with_embedded() -> Result<Self, LoadError> {
        Ok(Self::new(GarhwaliLoader::load_embedded()?))
    }

    pub fn dictionary(&self) -> &GarhwaliDictionary {
        &self.dictionary
    }

    pub fn tokenize_text(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    /// Known phrases occurring anywhere in `text`, in dictionary order
    pub fn find_phrases_in_text(&self, text: &str) -> Vec<String> {
        self.tokenizer.find_phrases_in_text(text)
    }

    pub fn find_word_in_dict(&self, word: &str) -> Option<&GarhwaliEntry> {
        self.dictionary.find_word(word)
    }

    pub fn find_phrase_in_dict(&self, phrase: &str) -> Option<&GarhwaliEntry> {
        self.dictionary.find_phrase(phrase)
    }

    /// Phrase lookup first, a merged token is only ever a phrase
    fn lookup_token(&self, token: &Token) -> Option<&GarhwaliEntry> {
        self.find_phrase_in_dict(&token.surface)
            .or_else(|| self.find_word_in_dict(&token.surface))
    }

    /// Translate `text` token by token
    ///
    /// Uncovered tokens are kept in brackets, e.g. `[UnknownWord]`. Results
    /// are cached per exact `(text, target)` pair.
    pub fn translate_text(&mut self, text: &str, target: TargetLanguage) -> TranslationResult {
        if let Some(cached) = self.cache.get(text, target) {
            return cached;
        }

        let tokens = self.tokenize_text(text);
        let mut translation = String::new();
        let mut translated = 0;
        let mut untranslated: Vec<&str> = Vec::new();

        for token in &tokens {
            match self.lookup_token(token) {
                Some(entry) => {
                    translation.push_str(entry.meaning(target));
                    translated += 1;
                }
                None => {
                    translation.push('[');
                    translation.push_str(&token.surface);
                    translation.push(']');
                    untranslated.push(&token.surface);
                }
            }
            translation.push(' ');
        }

        let translation = translation.trim_end().to_string();
        let metadata = TranslationMetadata::new(tokens.len(), translated, untranslated.len());

        tracing::debug!(
            "Translated {} of {} tokens to {}",
            metadata.translated_words,
            metadata.total_words,
            target
        );

        let result = TranslationResult {
            translation,
            metadata,
        };
        self.cache.insert(text, target, result.clone());
        result
    }

    /// Bracket uncovered tokens without translating anything
    pub fn mark_untranslated_words(&self, text: &str) -> MarkedText {
        let mut seen = HashSet::new();
        let mut untranslated_words = Vec::new();
        let mut marked = Vec::new();

        for token in self.tokenize_text(text) {
            if self.lookup_token(&token).is_some() {
                marked.push(token.surface);
            } else {
                marked.push(format!("[{}]", token.surface));
                if seen.insert(token.surface.clone()) {
                    untranslated_words.push(token.surface);
                }
            }
        }

        MarkedText {
            marked_text: marked.join(" "),
            untranslated_words,
        }
    }

    pub fn translation_metadata(&mut self, text: &str, target: TargetLanguage) -> TranslationMetadata {
        self.translate_text(text, target).metadata
    }

    pub fn dictionary_stats(&self) -> DictionaryStats {
        self.dictionary.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl LanguageProcessor for TranslationEngine {
    fn language_code(&self) -> &str {
        LANGUAGE_CODE
    }

    fn normalize(&self, text: &str) -> String {
        text.nfc().collect()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenize_text(&self.normalize(text))
    }

    fn lookup(&self, token: &Token) -> Option<LookupResult> {
        self.lookup_token(token).map(|entry| entry.to_lookup_result())
    }
}
