use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use seva_core::dictionary::DictionaryEntry;
use seva_core::types::{TargetLanguage, TranslationMode};

use crate::engine::TranslationEngine;
use crate::tokenizer::Tokenizer;

/// Whitespace runs and the words between them
static LINE_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|\S+").expect("line part pattern is valid"));

/// Leading punctuation, word core, trailing punctuation
///
/// A core starts at the first letter or number. Combining marks may end it, so
/// Devanagari vowel signs stay in the core.
static WORD_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^(?P<prefix>[^\p{L}\p{N}]*)(?P<core>[\p{L}\p{N}](?:.*[\p{L}\p{N}\p{M}])?)(?P<suffix>[^\p{L}\p{N}\p{M}]*)$",
    )
    .expect("word part pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParts<'a> {
    pub prefix: &'a str,
    pub core: &'a str,
    pub suffix: &'a str,
}

/// Split surrounding punctuation off a word, `None` when it has no word characters
pub fn split_punctuation(token: &str) -> Option<WordParts<'_>> {
    let caps = WORD_PARTS.captures(token)?;

    Some(WordParts {
        prefix: caps.name("prefix").map_or("", |m| m.as_str()),
        core: caps.name("core").map_or("", |m| m.as_str()),
        suffix: caps.name("suffix").map_or("", |m| m.as_str()),
    })
}

enum Part<'a> {
    /// Whitespace, or a run with no word characters
    Verbatim(&'a str),
    Word { split: WordParts<'a>, index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SongMetadata {
    pub title: String,
    pub artist: String,
    pub region: String,
}

/// A lyric block rendered in both target languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongTranslation {
    pub hindi_lines: Vec<String>,
    pub english_lines: Vec<String>,
    /// Distinct uncovered word cores, sorted
    pub untranslated_words: Vec<String>,
}

impl SongTranslation {
    pub fn lines(&self, lang: TargetLanguage) -> &[String] {
        match lang {
            TargetLanguage::Hindi => &self.hindi_lines,
            TargetLanguage::English => &self.english_lines,
        }
    }

    /// Export text for one language, header first
    pub fn plain_text(&self, lang: TargetLanguage, metadata: &SongMetadata, mode: TranslationMode) -> String {
        let header = export_header(metadata, mode).join("\n");
        let body = self.lines(lang).join("\n");

        format!("{header}\n\n{body}").trim().to_string()
    }

    /// Export text with the Hindi and English renderings one after another
    pub fn both_text(&self, metadata: &SongMetadata, mode: TranslationMode) -> String {
        let header = export_header(metadata, mode).join("\n");

        format!(
            "{header}\n\n[Hindi]\n{}\n\n[English]\n{}",
            self.hindi_lines.join("\n"),
            self.english_lines.join("\n")
        )
        .trim()
        .to_string()
    }
}

fn export_header(metadata: &SongMetadata, mode: TranslationMode) -> Vec<String> {
    let mut header = Vec::new();

    if !metadata.title.trim().is_empty() {
        header.push(format!("Title: {}", metadata.title.trim()));
    }
    if !metadata.artist.trim().is_empty() {
        header.push(format!("Artist/Composer: {}", metadata.artist.trim()));
    }
    if !metadata.region.trim().is_empty() {
        header.push(format!("Region/Tradition: {}", metadata.region.trim()));
    }
    header.push(format!("Mode: {}", mode.label()));

    header
}

/// Lines of a lyric block, `\n` or `\r\n` separated
pub fn lyric_lines(lyrics: &str) -> Vec<&str> {
    lyrics
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn line_count(lyrics: &str) -> usize {
    lyric_lines(lyrics).len()
}

pub fn word_count(lyrics: &str) -> usize {
    Tokenizer::word_count(lyrics)
}

impl TranslationEngine {
    /// Translate one line, keeping its whitespace and per-word punctuation
    ///
    /// Uncovered word cores are added to `untranslated`.
    pub fn translate_line(
        &self,
        line: &str,
        target: TargetLanguage,
        mode: TranslationMode,
        untranslated: &mut BTreeSet<String>,
    ) -> String {
        let mut parts = Vec::new();
        let mut word_positions = Vec::new();
        let mut cores_lower = Vec::new();

        for m in LINE_PARTS.find_iter(line) {
            let raw = m.as_str();
            let split = if raw.trim().is_empty() {
                None
            } else {
                split_punctuation(raw)
            };

            match split {
                Some(word) => {
                    let index = cores_lower.len();
                    word_positions.push(parts.len());
                    cores_lower.push(word.core.to_lowercase());
                    parts.push(Part::Word { split: word, index });
                }
                None => parts.push(Part::Verbatim(raw)),
            }
        }

        let mut out = String::with_capacity(line.len());
        let mut pos = 0;

        while pos < parts.len() {
            let (word, index) = match &parts[pos] {
                Part::Verbatim(raw) => {
                    out.push_str(raw);
                    pos += 1;
                    continue;
                }
                Part::Word { split, index } => (split, *index),
            };

            if mode == TranslationMode::Meaning {
                let phrase = self
                    .phrase_starts
                    .find_best_at(&self.dictionary, &cores_lower, index)
                    .filter(|m| m.length >= 2);

                if let Some(phrase) = phrase {
                    let last_pos = word_positions[index + phrase.length - 1];
                    let suffix = match &parts[last_pos] {
                        Part::Word { split, .. } => split.suffix,
                        Part::Verbatim(_) => "",
                    };

                    out.push_str(word.prefix);
                    out.push_str(phrase.entry.meaning(target));
                    out.push_str(suffix);
                    pos = last_pos + 1;
                    continue;
                }
            }

            out.push_str(word.prefix);
            match self.find_word_in_dict(word.core) {
                Some(entry) => out.push_str(entry.meaning(target)),
                None => {
                    out.push('[');
                    out.push_str(word.core);
                    out.push(']');
                    untranslated.insert(word.core.to_string());
                }
            }
            out.push_str(word.suffix);
            pos += 1;
        }

        out
    }

    /// Translate a lyric block line by line into both languages
    pub fn translate_lyrics(&self, lyrics: &str, mode: TranslationMode) -> SongTranslation {
        if lyrics.trim().is_empty() {
            return SongTranslation::default();
        }

        let lines = lyric_lines(lyrics);
        let mut untranslated = BTreeSet::new();

        let hindi_lines = lines
            .iter()
            .map(|line| self.translate_line(line, TargetLanguage::Hindi, mode, &mut untranslated))
            .collect();
        let english_lines = lines
            .iter()
            .map(|line| self.translate_line(line, TargetLanguage::English, mode, &mut untranslated))
            .collect();

        tracing::debug!(
            "Translated {} lyric lines in {} mode, {} untranslated words",
            lines.len(),
            mode,
            untranslated.len()
        );

        SongTranslation {
            hindi_lines,
            english_lines,
            untranslated_words: untranslated.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_punctuation() {
        let parts = split_punctuation("«Ghar,»").unwrap();
        assert_eq!(parts.prefix, "«");
        assert_eq!(parts.core, "Ghar");
        assert_eq!(parts.suffix, ",»");

        let inner = split_punctuation("don't!").unwrap();
        assert_eq!(inner.core, "don't");
        assert_eq!(inner.suffix, "!");
    }

    #[test]
    fn test_split_punctuation_keeps_vowel_signs() {
        let parts = split_punctuation("(पाणी।)").unwrap();
        assert_eq!(parts.prefix, "(");
        assert_eq!(parts.core, "पाणी");
        assert_eq!(parts.suffix, "।)");
    }

    #[test]
    fn test_split_punctuation_without_word_characters() {
        assert!(split_punctuation("...").is_none());
        assert!(split_punctuation("—").is_none());
        assert_eq!(split_punctuation("42").unwrap().core, "42");
    }

    #[test]
    fn test_lyric_lines() {
        assert_eq!(lyric_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(line_count(""), 1);
        assert_eq!(word_count(" a b\nc "), 3);
    }

    #[test]
    fn test_export_text() {
        let song = SongTranslation {
            hindi_lines: vec!["घर".to_string(), "गाँव".to_string()],
            english_lines: vec!["home".to_string(), "village".to_string()],
            untranslated_words: vec![],
        };
        let metadata = SongMetadata {
            title: " Bedu Pako ".to_string(),
            artist: String::new(),
            region: "Garhwal".to_string(),
        };

        assert_eq!(
            song.plain_text(TargetLanguage::English, &metadata, TranslationMode::Meaning),
            "Title: Bedu Pako\nRegion/Tradition: Garhwal\nMode: Meaning\n\nhome\nvillage"
        );
        assert_eq!(
            song.both_text(&SongMetadata::default(), TranslationMode::Literal),
            "Mode: Literal\n\n[Hindi]\nघर\nगाँव\n\n[English]\nhome\nvillage"
        );
    }
}
