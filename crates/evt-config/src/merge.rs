//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    Config, ConfigError, DataSettings, DisplaySettings, SearchSettings,
    parse::{RawConfig, RawDisplaySettings, RawSearchSettings},
    resolve::resolve_data_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default()
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Data path: first definition wins, resolved against the directory of the file defining it
/// - Categories: merged by canonical name, first definition for each name wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let data = merge_data_settings(configs)?;
    let search = merge_search_settings(configs);
    let display = merge_display_settings(configs);
    let categories = merge_categories(configs);
    let config_root = configs.first().map(ParsedConfig::dir);

    Ok(Config {
        data,
        search,
        display,
        categories,
        config_root,
    })
}

/// Picks the highest-precedence data path and resolves it.
fn merge_data_settings(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    let defined = configs.iter().find_map(|parsed| {
        parsed
            .config
            .data
            .as_ref()
            .and_then(|data| data.path.as_deref())
            .map(|path| (path, parsed))
    });

    let path = match defined {
        Some((path, parsed)) => Some(resolve_data_path(path, &parsed.dir())?),
        None => None,
    };

    Ok(DataSettings { path })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Merges display settings.
fn merge_display_settings(configs: &[ParsedConfig]) -> DisplaySettings {
    let mut result = DisplaySettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref display) = parsed.config.display {
            apply_raw_display(&mut result, display);
        }
    }

    result
}

/// Applies raw display settings to result.
fn apply_raw_display(result: &mut DisplaySettings, raw: &RawDisplaySettings) {
    if let Some(ref v) = raw.ticketmaster_notice {
        result.ticketmaster_notice.clone_from(v);
    }
}

/// Merges category label tables by canonical name.
fn merge_categories(configs: &[ParsedConfig]) -> BTreeMap<String, Vec<String>> {
    let mut result = BTreeMap::new();

    // Precedence order: the first file to define a canonical name owns its labels
    for parsed in configs {
        if let Some(ref categories) = parsed.config.categories {
            for (canonical, labels) in categories {
                result
                    .entry(canonical.clone())
                    .or_insert_with(|| labels.clone());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{parse::parse_config, test_support::TestDir};

    fn parsed(path: &Path, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: path.to_path_buf(),
            config: parse_config(toml).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let config = merge_configs(&[]).unwrap();
        assert!(config.data.path.is_none());
        assert_eq!(config.search.limit, 500);
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_merge_single_config() {
        let dir = TestDir::new();
        let file = dir.path().join(".evt.toml");
        let config = merge_configs(&[parsed(
            &file,
            r#"
[data]
path = "events.csv"

[search]
limit = 20
"#,
        )])
        .unwrap();

        assert_eq!(config.data.path, Some(dir.path().join("events.csv")));
        assert_eq!(config.search.limit, 20);
        assert_eq!(config.config_root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_merge_scalar_override() {
        let dir = TestDir::new();
        let local = parsed(&dir.path().join("project/.evt.toml"), "[search]\nlimit = 10\n");
        let global = parsed(
            &dir.path().join(".evt.toml"),
            "[search]\nlimit = 99\n\n[display]\nticketmaster_notice = \"Global\"\n",
        );

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.display.ticketmaster_notice, "Global");
    }

    #[test]
    fn test_data_path_resolves_against_defining_file() {
        let dir = TestDir::new();
        let local = parsed(&dir.path().join("project/.evt.toml"), "[search]\nlimit = 3\n");
        let global = parsed(
            &dir.path().join(".evt.toml"),
            "[data]\npath = \"shared/events.csv\"\n",
        );

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(
            config.data.path,
            Some(dir.path().join("shared/events.csv"))
        );
        assert_eq!(config.config_root, Some(dir.path().join("project")));
    }

    #[test]
    fn test_data_path_first_wins() {
        let dir = TestDir::new();
        let local = parsed(
            &dir.path().join("project/.evt.toml"),
            "[data]\npath = \"local.csv\"\n",
        );
        let global = parsed(&dir.path().join(".evt.toml"), "[data]\npath = \"global.csv\"\n");

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.data.path, Some(dir.path().join("project/local.csv")));
    }

    #[test]
    fn test_merge_categories_first_definition_wins() {
        let dir = TestDir::new();
        let local = parsed(
            &dir.path().join("project/.evt.toml"),
            "[categories]\n\"Concerts\" = \"gig\"\n",
        );
        let global = parsed(
            &dir.path().join(".evt.toml"),
            "[categories]\n\"Concerts\" = [\"show\"]\n\"Théâtre\" = [\"plays\"]\n",
        );

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.categories["Concerts"], vec!["gig"]);
        assert_eq!(config.categories["Théâtre"], vec!["plays"]);
    }
}
