use std::collections::HashMap;

use seva_core::types::{TargetLanguage, TranslationResult};

/// Cache key combining source text and target language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source_text: String,
    target_language: TargetLanguage,
}

impl CacheKey {
    fn new(source_text: &str, target_language: TargetLanguage) -> Self {
        Self {
            source_text: source_text.to_string(),
            target_language,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub size: usize,
}

/// Memo of translation results, keyed by exact `(text, language)`
///
/// Nothing is evicted; entries live until [`TranslationCache::clear`] or the
/// owning engine is dropped.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<CacheKey, TranslationResult>,
    hits: usize,
    misses: usize,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, source_text: &str, target_language: TargetLanguage) -> Option<TranslationResult> {
        let key = CacheKey::new(source_text, target_language);

        match self.entries.get(&key) {
            Some(result) => {
                self.hits += 1;
                tracing::debug!(
                    "Cache hit for '{}' ({})",
                    truncate_text(source_text, 30),
                    target_language
                );
                Some(result.clone())
            }
            None => {
                self.misses += 1;
                tracing::debug!(
                    "Cache miss for '{}' ({})",
                    truncate_text(source_text, 30),
                    target_language
                );
                None
            }
        }
    }

    pub fn insert(&mut self, source_text: &str, target_language: TargetLanguage, result: TranslationResult) {
        self.entries
            .insert(CacheKey::new(source_text, target_language), result);
    }

    /// Drop every cached result, hit/miss counters are kept
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} cached translations", self.entries.len());
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Shorten text for log lines, on a char boundary
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
