use docsi::docs::{SearchField, SearchOptions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "docsi.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,
    #[serde(default = "default_fields")]
    pub fields: Vec<SearchField>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

fn default_index_path() -> PathBuf {
    PathBuf::from("docs/build/search_index.js")
}

fn default_fields() -> Vec<SearchField> {
    vec![SearchField::Title, SearchField::Text]
}

fn default_preview_lines() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            fields: default_fields(),
            limit: None,
            case_sensitive: false,
            preview_lines: default_preview_lines(),
        }
    }
}

impl Config {
    /// Load `docsi.toml` from the working directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Config::default();
        }

        match fs::read_to_string(config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    warn!(path = %config_path.display(), error = %e, "failed to parse config, using defaults");
                }
            },
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to read config, using defaults");
            }
        }

        Config::default()
    }

    /// Search options seeded from the configured defaults
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            fields: self.fields.iter().copied().collect(),
            limit: self.limit,
            case_sensitive: self.case_sensitive,
        }
    }
}
