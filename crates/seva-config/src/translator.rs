use serde::{Deserialize, Serialize};
use seva_core::types::{TargetLanguage, TranslationMode};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub target_language: TargetLanguage,
    /// Mode used for song/lyric translation
    #[serde(default)]
    pub mode: TranslationMode,
}
