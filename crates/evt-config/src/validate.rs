//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Config, MAX_SEARCH_LIMIT};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No config file sets `[data] path`, so the built-in default is used.
    NoDataConfigured,
    /// The configured data file does not exist.
    DataFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured data path exists but is not a file.
    DataPathNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// `[search] limit` is zero, so every search returns nothing.
    ZeroLimit,
    /// `[search] limit` exceeds the result cap and will be clamped.
    LimitAboveMaximum {
        /// Configured limit.
        limit: usize,
    },
    /// A category is declared without any labels.
    EmptyCategoryLabels {
        /// Canonical category name.
        category: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDataConfigured => {
                write!(f, "no data path configured, using the default location")
            }
            Self::DataFileMissing { path } => write!(f, "data file does not exist: {path}"),
            Self::DataPathNotFile { path } => write!(f, "data path is not a file: {path}"),
            Self::ZeroLimit => write!(f, "search limit is 0, searches will return no events"),
            Self::LimitAboveMaximum { limit } => write!(
                f,
                "search limit {limit} exceeds the maximum of {MAX_SEARCH_LIMIT}, using {MAX_SEARCH_LIMIT}"
            ),
            Self::EmptyCategoryLabels { category } => {
                write!(f, "category '{category}' has no labels")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match config.data.path {
        None => warnings.push(ConfigWarning::NoDataConfigured),
        Some(ref path) if !path.exists() => warnings.push(ConfigWarning::DataFileMissing {
            path: path.display().to_string(),
        }),
        Some(ref path) if !path.is_file() => warnings.push(ConfigWarning::DataPathNotFile {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    match config.search.limit {
        0 => warnings.push(ConfigWarning::ZeroLimit),
        limit if limit > MAX_SEARCH_LIMIT => {
            warnings.push(ConfigWarning::LimitAboveMaximum { limit });
        }
        _ => {}
    }

    for (category, labels) in &config.categories {
        if labels.iter().all(|label| label.trim().is_empty()) {
            warnings.push(ConfigWarning::EmptyCategoryLabels {
                category: category.clone(),
            });
        }
    }

    warnings
}
