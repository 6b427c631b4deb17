use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use seva_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata};
use seva_core::types::TargetLanguage;

use crate::LANGUAGE_CODE;

/// Part of speech, plus the two multi-word kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Phrase,
    SongPhrase,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Phrase,
        Category::SongPhrase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Phrase => "phrase",
            Category::SongPhrase => "song_phrase",
        }
    }

    /// Parse the serialized name (`"song_phrase"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Category::Phrase | Category::SongPhrase)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One Garhwali word or phrase with its Hindi and English renderings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarhwaliEntry {
    #[serde(rename = "garhwali_word")]
    pub word: String,
    pub hindi_meaning: String,
    pub english_meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_example: Option<String>,
    pub category: Category,
}

impl GarhwaliEntry {
    pub fn new(
        word: impl Into<String>,
        hindi_meaning: impl Into<String>,
        english_meaning: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            word: word.into(),
            hindi_meaning: hindi_meaning.into(),
            english_meaning: english_meaning.into(),
            usage_example: None,
            category,
        }
    }

    pub fn with_usage_example(mut self, example: impl Into<String>) -> Self {
        self.usage_example = Some(example.into());
        self
    }

    /// Index key, `None` for entries that cannot be indexed
    pub fn key(&self) -> Option<String> {
        if self.word.trim().is_empty() {
            None
        } else {
            Some(self.word.to_lowercase())
        }
    }
}

impl DictionaryEntry for GarhwaliEntry {
    fn headword(&self) -> &str {
        &self.word
    }

    fn meaning(&self, lang: TargetLanguage) -> &str {
        match lang {
            TargetLanguage::Hindi => &self.hindi_meaning,
            TargetLanguage::English => &self.english_meaning,
        }
    }

    fn category_name(&self) -> &str {
        self.category.as_str()
    }

    fn is_phrase(&self) -> bool {
        self.category.is_phrase()
    }

    fn usage_example(&self) -> Option<&str> {
        self.usage_example.as_deref().filter(|e| !e.is_empty())
    }
}

/// Entry totals per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryStats {
    pub total_entries: usize,
    pub categories: BTreeMap<String, usize>,
}

/// Garhwali dictionary with word and phrase indices
///
/// Both indices map a lowercased `word` to the position of its entry. When
/// two entries share a key the one loaded later wins.
#[derive(Debug, Clone, Default)]
pub struct GarhwaliDictionary {
    entries: Vec<GarhwaliEntry>,
    word_index: HashMap<String, usize>,
    phrase_index: HashMap<String, usize>,
}

impl GarhwaliDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<GarhwaliEntry>) -> Self {
        let mut dict = Self {
            entries,
            word_index: HashMap::new(),
            phrase_index: HashMap::new(),
        };
        dict.build_indices();
        dict
    }

    fn build_indices(&mut self) {
        self.word_index.clear();
        self.phrase_index.clear();

        for (idx, entry) in self.entries.iter().enumerate() {
            let Some(key) = entry.key() else {
                continue;
            };

            if entry.category.is_phrase() {
                self.phrase_index.insert(key.clone(), idx);
            }
            self.word_index.insert(key, idx);
        }
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_word(&self, word: &str) -> Option<&GarhwaliEntry> {
        self.word_index
            .get(&word.to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
    }

    pub fn find_phrase(&self, phrase: &str) -> Option<&GarhwaliEntry> {
        self.phrase_index
            .get(&phrase.to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Multi-word entries in load order
    pub fn phrases(&self) -> impl Iterator<Item = &GarhwaliEntry> {
        self.entries.iter().filter(|e| e.category.is_phrase())
    }

    pub fn stats(&self) -> DictionaryStats {
        let mut categories = BTreeMap::new();
        for entry in &self.entries {
            *categories.entry(entry.category.as_str().to_string()).or_insert(0) += 1;
        }

        DictionaryStats {
            total_entries: self.entries.len(),
            categories,
        }
    }

    /// Import another dictionary into this one
    /// Imported entries replace existing entries with the same (lowercased) word
    pub fn merge(mut self, other: GarhwaliDictionary) -> Self {
        let imported: HashSet<String> = other.entries.iter().filter_map(GarhwaliEntry::key).collect();

        let before = self.entries.len();
        self.entries
            .retain(|e| e.key().is_none_or(|key| !imported.contains(&key)));
        let replaced = before - self.entries.len();

        tracing::debug!(
            "Importing {} entries ({} replace existing words)",
            other.entries.len(),
            replaced
        );

        self.entries.extend(other.entries);
        self.build_indices();
        self
    }
}

impl Dictionary for GarhwaliDictionary {
    type Entry = GarhwaliEntry;

    fn lookup_word(&self, word: &str) -> Option<&GarhwaliEntry> {
        self.find_word(word)
    }

    fn lookup_phrase(&self, phrase: &str) -> Option<&GarhwaliEntry> {
        self.find_phrase(phrase)
    }

    fn entries(&self) -> &[GarhwaliEntry] {
        &self.entries
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Garhwali Seva".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: LANGUAGE_CODE.to_string(),
            entry_count: self.entries.len(),
        }
    }
}
