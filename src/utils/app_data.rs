use crate::highlight::{DEFAULT_ELLIPSIS, DEFAULT_MARKER, DEFAULT_PADDING, HighlightConfig};
use crate::index::suffix_array::{PARALLEL_SEARCH_THRESHOLD, SuffixArrayConfig};
use crate::output::ColorMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user's config directory
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Characters of context shown around a highlighted match
    #[serde(default = "default_padding")]
    pub padding: usize,

    /// Marker shown where highlight context is clipped
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Character drawn under matched text
    #[serde(default = "default_marker")]
    pub marker: char,

    /// Sort and search ignoring letter case
    #[serde(default)]
    pub case_insensitive: bool,

    /// When to color output
    #[serde(default)]
    pub color: ColorMode,

    /// Query batches larger than this are searched in parallel
    #[serde(default = "default_parallel_search_threshold")]
    pub parallel_search_threshold: usize,
}

fn default_padding() -> usize {
    DEFAULT_PADDING
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

fn default_parallel_search_threshold() -> usize {
    PARALLEL_SEARCH_THRESHOLD
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            ellipsis: default_ellipsis(),
            marker: default_marker(),
            case_insensitive: false,
            color: ColorMode::default(),
            parallel_search_threshold: default_parallel_search_threshold(),
        }
    }
}

impl AppConfig {
    /// Load config from the user's config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Highlight layout described by this config
    pub fn highlight_config(&self) -> HighlightConfig {
        HighlightConfig {
            padding: self.padding,
            ellipsis: self.ellipsis.clone(),
            marker: self.marker,
        }
    }

    /// Suffix array build options described by this config
    pub fn suffix_array_config(&self) -> SuffixArrayConfig {
        SuffixArrayConfig {
            case_insensitive: self.case_insensitive,
        }
    }
}

/// Get the path to the config file
///
/// `None` when the platform has no config directory.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
