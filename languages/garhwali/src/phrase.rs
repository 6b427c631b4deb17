use std::collections::HashMap;

use seva_core::dictionary::Dictionary;

use crate::dictionary::{Category, GarhwaliEntry};

/// A multi-word entry split into lowercased words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCandidate {
    pub words: Vec<String>,
    /// Words joined by single spaces, the phrase index key
    pub key: String,
    pub category: Category,
}

impl PhraseCandidate {
    fn from_entry(entry: &GarhwaliEntry) -> Option<Self> {
        let words: Vec<String> = entry
            .word
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if words.len() < 2 {
            return None;
        }

        Some(Self {
            key: words.join(" "),
            words,
            category: entry.category,
        })
    }

    fn is_song_phrase(&self) -> bool {
        self.category == Category::SongPhrase
    }
}

#[derive(Debug)]
pub struct PhraseMatch<'a, E> {
    pub entry: &'a E,
    /// Number of words consumed
    pub length: usize,
}

/// Phrases grouped by their first word
///
/// Candidates under one word are ordered song phrases first, then by word
/// count descending. Equal candidates keep dictionary order.
#[derive(Debug, Clone, Default)]
pub struct PhraseStartIndex {
    by_first_word: HashMap<String, Vec<PhraseCandidate>>,
}

impl PhraseStartIndex {
    pub fn build(entries: &[GarhwaliEntry]) -> Self {
        let mut by_first_word: HashMap<String, Vec<PhraseCandidate>> = HashMap::new();

        for candidate in entries
            .iter()
            .filter(|e| e.category.is_phrase())
            .filter_map(PhraseCandidate::from_entry)
        {
            by_first_word
                .entry(candidate.words[0].clone())
                .or_default()
                .push(candidate);
        }

        for list in by_first_word.values_mut() {
            list.sort_by(|a, b| {
                b.is_song_phrase()
                    .cmp(&a.is_song_phrase())
                    .then_with(|| b.words.len().cmp(&a.words.len()))
            });
        }

        Self { by_first_word }
    }

    pub fn candidates(&self, first_word: &str) -> &[PhraseCandidate] {
        self.by_first_word
            .get(first_word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Best phrase starting at `start` in a line's lowercased words
    ///
    /// The first candidate, in index order, whose words match verbatim and
    /// whose key still resolves in `dictionary` wins.
    pub fn find_best_at<'d, D: Dictionary>(
        &self,
        dictionary: &'d D,
        words_lower: &[String],
        start: usize,
    ) -> Option<PhraseMatch<'d, D::Entry>> {
        let first = words_lower.get(start)?;

        self.candidates(first)
            .iter()
            .filter(|c| {
                let end = start + c.words.len();
                end <= words_lower.len() && words_lower[start..end] == c.words[..]
            })
            .find_map(|c| {
                dictionary.lookup_phrase(&c.key).map(|entry| PhraseMatch {
                    entry,
                    length: c.words.len(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::GarhwaliDictionary;

    fn entries() -> Vec<GarhwaliEntry> {
        vec![
            GarhwaliEntry::new("ghar", "घर", "home", Category::Noun),
            GarhwaliEntry::new("ghar jaanu chha", "घर जा रहा है", "is going home", Category::Phrase),
            GarhwaliEntry::new("Ghar  jaanu", "घर जाना", "going home", Category::SongPhrase),
            GarhwaliEntry::new("ghar ma", "घर में", "at home", Category::Phrase),
            GarhwaliEntry::new("solo", "अकेला", "alone", Category::Phrase),
        ]
    }

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_lowercase).collect()
    }

    #[test]
    fn test_candidates_are_ordered() {
        let index = PhraseStartIndex::build(&entries());
        let keys: Vec<&str> = index.candidates("ghar").iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["ghar jaanu", "ghar jaanu chha", "ghar ma"]);
    }

    #[test]
    fn test_single_word_phrases_are_skipped() {
        let index = PhraseStartIndex::build(&entries());
        assert!(index.candidates("solo").is_empty());
        assert!(index.candidates("jaanu").is_empty());
    }

    #[test]
    fn test_song_phrase_beats_longer_phrase() {
        let dict = GarhwaliDictionary::from_entries(vec![
            GarhwaliEntry::new("ghar jaanu chha", "घर जा रहा है", "is going home", Category::Phrase),
            GarhwaliEntry::new("ghar jaanu", "घर जाना", "going home", Category::SongPhrase),
        ]);
        let index = PhraseStartIndex::build(dict.entries());

        let found = index.find_best_at(&dict, &words("ghar jaanu chha"), 0).unwrap();
        assert_eq!(found.entry.english_meaning, "going home");
        assert_eq!(found.length, 2);
    }

    #[test]
    fn test_longer_phrase_wins_within_category() {
        let dict = GarhwaliDictionary::from_entries(vec![
            GarhwaliEntry::new("ghar ma", "घर में", "at home", Category::Phrase),
            GarhwaliEntry::new("ghar ma chha", "घर में है", "is at home", Category::Phrase),
        ]);
        let index = PhraseStartIndex::build(dict.entries());

        let found = index.find_best_at(&dict, &words("x ghar ma chha"), 1).unwrap();
        assert_eq!(found.entry.english_meaning, "is at home");
        assert_eq!(found.length, 3);

        let shorter = index.find_best_at(&dict, &words("ghar ma"), 0).unwrap();
        assert_eq!(shorter.length, 2);
    }

    #[test]
    fn test_no_match() {
        let dict = GarhwaliDictionary::from_entries(entries());
        let index = PhraseStartIndex::build(dict.entries());

        assert!(index.find_best_at(&dict, &words("ghar"), 0).is_none());
        assert!(index.find_best_at(&dict, &words("ghar kakh"), 0).is_none());
        assert!(index.find_best_at(&dict, &words("ghar ma"), 5).is_none());
    }
}
