use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use seva_config::dictionary::DictionaryConfig;
use seva_config::{Config, RejectedOverride};
use seva_core::dictionary::DictionaryLoader;
use seva_lang_garhwali::{GarhwaliDictionary, GarhwaliLoader};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Effective config and where it came from
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub rejected: Vec<RejectedOverride>,
}

impl LoadedConfig {
    /// Log how the config was resolved, call once a subscriber is installed
    pub fn report(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {}", path.display()),
            None => tracing::debug!("No config file found, using defaults"),
        }

        for rejected in &self.rejected {
            tracing::warn!("{rejected}");
        }
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Load the config file (explicit, or the default one if present) and apply
/// `SEVA_*` environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LoadedConfig> {
    load_config_with(path, |key| env::var(key).ok())
}

fn load_config_with(
    path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<LoadedConfig> {
    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    let source = match path {
        Some(path) => Some(path.to_path_buf()),
        None if default_file.exists() => Some(default_file.to_path_buf()),
        None => None,
    };

    let mut config = match &source {
        Some(path) => read_config_file(path)?,
        None => Config::default(),
    };
    let rejected = config.apply_overrides(var);

    Ok(LoadedConfig {
        config,
        source,
        rejected,
    })
}

/// Base dictionary plus imports, as configured
pub fn build_dictionary(config: &DictionaryConfig) -> anyhow::Result<GarhwaliDictionary> {
    let base = if let Some(path) = &config.path {
        GarhwaliLoader
            .load_from_file(Path::new(path))
            .with_context(|| format!("cannot load dictionary {path}"))?
    } else if config.use_embedded {
        GarhwaliLoader::load_embedded()?
    } else {
        tracing::warn!("No base dictionary configured, starting empty");
        GarhwaliDictionary::new()
    };

    Ok(GarhwaliLoader::with_imports(base, &config.additional_paths))
}
