use std::collections::HashSet;

use seva_core::language::Token;

use crate::dictionary::GarhwaliDictionary;

/// Longest phrase, in words, the tokenizer tries to merge
pub const MAX_PHRASE_WORDS: usize = 5;

/// Whitespace tokenizer that keeps known phrases together
///
/// At each position the longest known phrase (up to [`MAX_PHRASE_WORDS`]
/// words) starting there is taken. The choice is greedy: a short phrase taken
/// early can hide a longer phrase that would have started one word later.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Lowercased phrase keys
    phrases: HashSet<String>,
    /// (original, lowercased) phrase forms in dictionary order
    phrase_forms: Vec<(String, String)>,
}

impl Tokenizer {
    pub fn new(dictionary: &GarhwaliDictionary) -> Self {
        let mut phrases = HashSet::new();
        let mut phrase_forms = Vec::new();

        for entry in dictionary.phrases() {
            let lower = entry.word.to_lowercase();
            phrases.insert(lower.clone());
            phrase_forms.push((entry.word.clone(), lower));
        }

        Self {
            phrases,
            phrase_forms,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::with_capacity(words.len());
        let mut i = 0;

        while i < words.len() {
            let max_len = MAX_PHRASE_WORDS.min(words.len() - i);
            let len = (2..=max_len)
                .rev()
                .find(|&len| self.is_phrase(&words[i..i + len]))
                .unwrap_or(1);

            tokens.push(Token::new(words[i..i + len].join(" "), i, len));
            i += len;
        }

        tracing::trace!("Tokenized {} words into {} tokens", words.len(), tokens.len());
        tokens
    }

    fn is_phrase(&self, words: &[&str]) -> bool {
        self.phrases.contains(&words.join(" ").to_lowercase())
    }

    /// Known phrases occurring anywhere in `text`, case-insensitively
    pub fn find_phrases_in_text(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.phrase_forms
            .iter()
            .filter(|(_, phrase)| lower.contains(phrase.as_str()))
            .map(|(original, _)| original.clone())
            .collect()
    }

    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}
