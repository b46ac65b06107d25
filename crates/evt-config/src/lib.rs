//! Configuration system for evt.
//!
//! evt uses TOML configuration files named `.evt.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.evt.toml` files found,
//! then loading `~/.evt.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [data]
//! path = "data/csv_fusionne.csv"
//!
//! [search]
//! limit = 500
//!
//! [display]
//! ticketmaster_notice = "Billetterie disponible sur Ticketmaster"
//!
//! [categories]
//! "Concerts" = ["gig", "gigs"]
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDataSettings, RawDisplaySettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_data_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Data file used when no config sets `[data] path`, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/csv_fusionne.csv";

/// Largest number of events a search may return.
pub const MAX_SEARCH_LIMIT: usize = 500;

/// Top-level merged configuration for evt.
///
/// This represents the fully resolved configuration after merging all discovered `.evt.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Data source settings.
    pub data: DataSettings,
    /// Search-related settings.
    pub search: SearchSettings,
    /// Output settings.
    pub display: DisplaySettings,
    /// Extra category labels: canonical category -> raw labels.
    pub categories: BTreeMap<String, Vec<String>>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.evt.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.evt.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.evt.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the events CSV to load.
    ///
    /// The configured path if any, otherwise [`DEFAULT_DATA_PATH`] under `cwd`.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        self.data
            .path
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_DATA_PATH))
    }

    /// Flattens `[categories]` into `(label, canonical)` pairs.
    pub fn category_labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|(canonical, labels)| {
            labels
                .iter()
                .map(move |label| (label.as_str(), canonical.as_str()))
        })
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A data path that is unset, missing, or not a regular file
    /// - A zero search limit, or one above [`MAX_SEARCH_LIMIT`]
    /// - Categories declared without labels
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.evt.toml` file, with the data path
    /// already resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            data: SerializableDataSettings {
                path: self.data.path.as_ref().map(|p| p.display().to_string()),
            },
            search: &self.search,
            display: &self.display,
            categories: &self.categories,
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// Data source settings.
#[derive(Debug, Clone, Default)]
pub struct DataSettings {
    /// Resolved path to the events CSV, if any config set one.
    pub path: Option<PathBuf>,
}

/// Search-related settings.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSettings {
    /// Maximum number of events returned by a search.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: MAX_SEARCH_LIMIT,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySettings {
    /// Text that replaces the source of Ticketmaster events.
    pub ticketmaster_notice: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            ticketmaster_notice: String::from("Billetterie disponible sur Ticketmaster"),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Data source settings.
    data: SerializableDataSettings,
    /// Search-related settings.
    search: &'a SearchSettings,
    /// Output settings.
    display: &'a DisplaySettings,
    /// Category labels, sorted for deterministic output.
    categories: &'a BTreeMap<String, Vec<String>>,
}

/// Data settings with the path rendered as a string.
#[derive(Serialize)]
struct SerializableDataSettings {
    /// Resolved data path; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}
