//! Configuration file parsing.
//!
//! Parses individual `.evt.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Data source section.
    pub data: Option<RawDataSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Display settings section.
    pub display: Option<RawDisplaySettings>,
    /// Extra category labels: canonical category -> one or more raw labels.
    #[serde_as(as = "Option<HashMap<_, OneOrMany<_>>>")]
    pub categories: Option<HashMap<String, Vec<String>>>,
}

/// Raw data source settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDataSettings {
    /// Path to the events CSV, relative to the config file's directory.
    pub path: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum number of events returned by a search.
    pub limit: Option<usize>,
}

/// Raw display settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDisplaySettings {
    /// Text that replaces the source of Ticketmaster events.
    pub ticketmaster_notice: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Returns true if the file parses and sets `root = true`.
///
/// Unreadable or malformed files count as non-root so discovery keeps walking;
/// the real error surfaces when the file is loaded.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path)
        .ok()
        .and_then(|config| config.root)
        .unwrap_or(false)
}
