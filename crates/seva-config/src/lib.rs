use std::fmt;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::logging::LoggingConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod logging;
pub mod translator;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub logging: LoggingConfig,
}

/// An environment override whose value could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for RejectedOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring {}={:?}: {}", self.var, self.value, self.reason)
    }
}

impl Config {
    /// Apply `SEVA_*` overrides, `var` resolves a variable name to its value
    ///
    /// Values that don't parse leave the setting untouched and are returned
    /// so the caller can report them once logging is up.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<RejectedOverride> {
        let mut rejected = Vec::new();

        if let Some(path) = var("SEVA_DICTIONARY_PATH").filter(|p| !p.is_empty()) {
            self.dictionary.path = Some(path);
        }

        if let Some(value) = var("SEVA_TARGET_LANGUAGE") {
            match value.parse() {
                Ok(lang) => self.translator.target_language = lang,
                Err(e) => rejected.push(RejectedOverride {
                    var: "SEVA_TARGET_LANGUAGE",
                    value,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(value) = var("SEVA_TRANSLATION_MODE") {
            match value.parse() {
                Ok(mode) => self.translator.mode = mode,
                Err(e) => rejected.push(RejectedOverride {
                    var: "SEVA_TRANSLATION_MODE",
                    value,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(filter) = var("SEVA_LOG") {
            self.logging.filter = filter;
        }

        if let Some(value) = var("SEVA_LOG_JSON") {
            match value.trim().parse() {
                Ok(json) => self.logging.json = json,
                Err(_) => rejected.push(RejectedOverride {
                    var: "SEVA_LOG_JSON",
                    value,
                    reason: "expected true or false".to_string(),
                }),
            }
        }

        rejected
    }
}
