use std::path::Path;

use seva_core::dictionary::{DictionaryLoader, LoadError};

use crate::dictionary::{GarhwaliDictionary, GarhwaliEntry};
use crate::validate::validate_entries;

/// Dictionary data compiled into the crate
pub const EMBEDDED_DICTIONARY: &str = include_str!("../data/garhwali_dictionary.json");

pub struct GarhwaliLoader;

impl GarhwaliLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<GarhwaliDictionary, LoadError> {
        tracing::info!("Loading embedded Garhwali dictionary...");
        let dict = Self::from_json(EMBEDDED_DICTIONARY, "embedded dictionary")?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Parse a JSON array of entries without validating them
    pub fn parse_entries(json: &str) -> Result<Vec<GarhwaliEntry>, LoadError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        if !value.is_array() {
            return Err(LoadError::InvalidFormat(
                "dictionary must be a JSON array of entries".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| LoadError::ParseError(e.to_string()))
    }

    /// Parse and validate, rejecting the whole source on any error
    pub fn from_json(json: &str, source: &str) -> Result<GarhwaliDictionary, LoadError> {
        let entries = Self::parse_entries(json).map_err(|e| match e {
            LoadError::InvalidFormat(msg) => LoadError::InvalidFormat(format!("{source}: {msg}")),
            LoadError::ParseError(msg) => LoadError::ParseError(format!("{source}: {msg}")),
            other => other,
        })?;
        let report = validate_entries(&entries);

        for warning in &report.warnings {
            tracing::debug!("{source}: {warning}");
        }
        if !report.warnings.is_empty() {
            tracing::warn!(
                "{source}: {} validation warning(s), run `seva validate` for details",
                report.warnings.len()
            );
        }

        if let Some(first) = report.errors.first() {
            for error in &report.errors {
                tracing::error!("{source}: {error}");
            }
            return Err(LoadError::Validation {
                count: report.errors.len(),
                first: first.clone(),
            });
        }

        Ok(GarhwaliDictionary::from_entries(entries))
    }

    /// Merge two dictionaries (imported entries override by word)
    pub fn merge(base: GarhwaliDictionary, additional: GarhwaliDictionary) -> GarhwaliDictionary {
        base.merge(additional)
    }

    /// Import each file on top of `base`; files that fail to load are skipped
    pub fn with_imports(mut base: GarhwaliDictionary, additional_paths: &[String]) -> GarhwaliDictionary {
        for path in additional_paths {
            match GarhwaliLoader.load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    base = Self::merge(base, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        base
    }
}

impl DictionaryLoader for GarhwaliLoader {
    type Output = GarhwaliDictionary;

    fn load_from_file(&self, path: &Path) -> Result<GarhwaliDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading Garhwali dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json, &path.display().to_string())?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["json".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use seva_core::dictionary::Dictionary;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_embedded() {
        let dict = GarhwaliLoader::load_embedded().unwrap();
        assert!(dict.entry_count() > 50);
        assert_eq!(dict.find_word("namaste").unwrap().english_meaning, "Hello");
        assert_eq!(dict.find_phrase("khaana khana").unwrap().english_meaning, "To eat food");
        assert_eq!(dict.metadata().language, "gbm");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp(
            r#"[{"garhwali_word": "घौर", "hindi_meaning": "घर", "english_meaning": "home", "category": "noun"}]"#,
        );
        let dict = GarhwaliLoader.load_from_file(file.path()).unwrap();
        assert_eq!(dict.entry_count(), 1);
        assert_eq!(dict.find_word("घौर").unwrap().english_meaning, "home");
    }

    #[test]
    fn test_missing_file() {
        let err = GarhwaliLoader
            .load_from_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = GarhwaliLoader::parse_entries(r#"{"words": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));

        let err = GarhwaliLoader::parse_entries("not json").unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let file = write_temp(
            r#"[
                {"garhwali_word": "घौर", "hindi_meaning": "घर", "english_meaning": "home", "category": "noun"},
                {"garhwali_word": "पाणी", "hindi_meaning": " ", "english_meaning": "water", "category": "noun"}
            ]"#,
        );
        let err = GarhwaliLoader.load_from_file(file.path()).unwrap_err();
        match err {
            LoadError::Validation { count, first } => {
                assert_eq!(count, 1);
                assert!(first.contains("hindi_meaning"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_imports_overrides_and_skips_failures() {
        let base = GarhwaliDictionary::from_entries(vec![GarhwaliEntry::new(
            "घौर",
            "घर",
            "house",
            crate::dictionary::Category::Noun,
        )]);
        let file = write_temp(
            r#"[{"garhwali_word": "घौर", "hindi_meaning": "घर", "english_meaning": "home", "category": "noun"}]"#,
        );
        let paths = vec![
            "/definitely/not/here.json".to_string(),
            file.path().display().to_string(),
        ];

        let merged = GarhwaliLoader::with_imports(base, &paths);
        assert_eq!(merged.entry_count(), 1);
        assert_eq!(merged.find_word("घौर").unwrap().english_meaning, "home");
    }
}
