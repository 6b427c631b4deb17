use std::collections::{BTreeMap, HashSet};

use serde_json::Value;
use seva_core::dictionary::LoadError;

use crate::dictionary::{Category, GarhwaliEntry};

pub const MAX_USAGE_EXAMPLE_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub total_entries: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Keyed by the category as written, unknown ones included
    pub category_counts: BTreeMap<String, usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Category counts, most frequent first
    pub fn categories_by_count(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<_> = self
            .category_counts
            .iter()
            .map(|(c, &n)| (c.clone(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[derive(Debug, Clone, Copy)]
enum Field<'a> {
    Missing,
    NotText,
    Text(&'a str),
}

impl<'a> Field<'a> {
    fn of(entry: &'a Value, name: &str) -> Self {
        match entry.get(name) {
            None | Some(Value::Null) => Field::Missing,
            Some(Value::String(s)) => Field::Text(s),
            Some(_) => Field::NotText,
        }
    }

    fn text(self) -> Option<&'a str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The fields of one entry that validation looks at
struct EntryFields<'a> {
    word: Field<'a>,
    hindi_meaning: Field<'a>,
    english_meaning: Field<'a>,
    category: Field<'a>,
    usage_example: Option<&'a str>,
}

impl<'a> EntryFields<'a> {
    fn from_entry(entry: &'a GarhwaliEntry) -> Self {
        Self {
            word: Field::Text(&entry.word),
            hindi_meaning: Field::Text(&entry.hindi_meaning),
            english_meaning: Field::Text(&entry.english_meaning),
            category: Field::Text(entry.category.as_str()),
            usage_example: entry.usage_example.as_deref(),
        }
    }

    fn from_value(entry: &'a Value) -> Self {
        Self {
            word: Field::of(entry, "garhwali_word"),
            hindi_meaning: Field::of(entry, "hindi_meaning"),
            english_meaning: Field::of(entry, "english_meaning"),
            category: Field::of(entry, "category"),
            usage_example: Field::of(entry, "usage_example").text(),
        }
    }
}

#[derive(Default)]
struct Validator {
    report: ValidationReport,
    seen: HashSet<String>,
}

impl Validator {
    fn check(&mut self, entry: EntryFields<'_>) {
        self.report.total_entries += 1;
        let n = self.report.total_entries;
        let errors = &mut self.report.errors;

        let required = [
            ("garhwali_word", entry.word),
            ("hindi_meaning", entry.hindi_meaning),
            ("english_meaning", entry.english_meaning),
            ("category", entry.category),
        ];
        for (field, value) in required {
            match value {
                Field::Missing => {
                    errors.push(format!("Entry {n}: Missing required field \"{field}\""));
                }
                Field::NotText => {
                    errors.push(format!("Entry {n}: Field \"{field}\" must be a string"));
                }
                Field::Text(s) if s.trim().is_empty() => {
                    errors.push(format!("Entry {n}: Field \"{field}\" cannot be empty"));
                }
                Field::Text(_) => {}
            }
        }

        if let Some(category) = entry.category.text().filter(|c| !c.trim().is_empty()) {
            if Category::from_name(category).is_none() {
                let valid: Vec<_> = Category::ALL.iter().map(Category::as_str).collect();
                errors.push(format!(
                    "Entry {n}: Invalid category \"{category}\". Valid categories: {}",
                    valid.join(", ")
                ));
            }
            *self
                .report
                .category_counts
                .entry(category.to_string())
                .or_insert(0) += 1;
        }

        let Some(raw_word) = entry.word.text().filter(|w| !w.trim().is_empty()) else {
            return;
        };
        let word = raw_word.trim();
        let warnings = &mut self.report.warnings;

        if !self.seen.insert(word.to_lowercase()) {
            warnings.push(format!("Entry {n}: Duplicate word \"{raw_word}\""));
        }

        if !has_devanagari(word) {
            warnings.push(format!(
                "Entry {n}: \"{raw_word}\" doesn't appear to use Devanagari script"
            ));
        }

        let long_example = entry
            .usage_example
            .is_some_and(|e| e.chars().count() > MAX_USAGE_EXAMPLE_CHARS);
        if long_example {
            warnings.push(format!(
                "Entry {n}: Usage example is quite long (>{MAX_USAGE_EXAMPLE_CHARS} chars)"
            ));
        }
    }
}

fn has_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

/// Check entries before they reach a dictionary
///
/// Blank required fields are errors. Duplicate words, words without any
/// Devanagari and overlong usage examples are warnings. Entry numbers in the
/// messages are 1-based.
pub fn validate_entries(entries: &[GarhwaliEntry]) -> ValidationReport {
    let mut validator = Validator::default();
    for entry in entries {
        validator.check(EntryFields::from_entry(entry));
    }
    validator.report
}

/// Check a dictionary file without deserializing it into entries first
///
/// Missing or non-string fields and unknown categories become per-entry
/// errors, so one bad entry doesn't hide the rest of the report. Only input
/// that isn't a JSON array fails outright.
pub fn validate_json(json: &str) -> Result<ValidationReport, LoadError> {
    let value: Value = serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(LoadError::InvalidFormat(
            "dictionary must be a JSON array of entries".to_string(),
        ));
    };

    let mut validator = Validator::default();
    for entry in &entries {
        validator.check(EntryFields::from_value(entry));
    }
    Ok(validator.report)
}
