use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Start from the dictionary compiled into the binary
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Base dictionary file, replaces the embedded one when set
    #[serde(default)]
    pub path: Option<String>,
    /// Dictionaries imported on top of the base, later files override earlier entries
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            path: None,
            additional_paths: vec![],
        }
    }
}
