//! Integration tests for evt-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use evt_config::{Config, ConfigError, ConfigWarning, local_template};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_from_no_files_returns_default() {
    let config = Config::load_from_files(&[]).unwrap();

    assert!(config.data.path.is_none());
    assert!(config.config_root.is_none());
    assert_eq!(config.search.limit, 500);
}

#[test]
fn test_load_root_config_in_cwd() {
    let env = TestEnv::new();
    env.create_file("events.csv", "City\n");
    env.create_file(
        ".evt.toml",
        r#"
root = true

[data]
path = "events.csv"

[search]
limit = 25
"#,
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.data.path, Some(env.path().join("events.csv")));
    assert_eq!(config.search.limit, 25);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn test_nested_config_overrides_parent() {
    let env = TestEnv::new();
    env.create_file(
        ".evt.toml",
        r#"
root = true

[data]
path = "all.csv"

[search]
limit = 100

[display]
ticketmaster_notice = "Parent notice"
"#,
    );
    env.create_file("city/.evt.toml", "[search]\nlimit = 5\n");
    let nested = env.create_dir("city/sub");

    let config = Config::load(&nested).unwrap();
    assert_eq!(config.search.limit, 5);
    assert_eq!(config.display.ticketmaster_notice, "Parent notice");
    assert_eq!(config.data.path, Some(env.path().join("all.csv")));
    assert_eq!(config.config_root, Some(env.path().join("city")));
}

#[test]
fn test_root_stops_parent_config() {
    let env = TestEnv::new();
    env.create_file(".evt.toml", "[search]\nlimit = 1\n");
    env.create_file("project/.evt.toml", "root = true\n");

    let config = Config::load(&env.path().join("project")).unwrap();
    assert_eq!(config.search.limit, 500);
}

#[test]
fn test_categories_merge_across_files() {
    let env = TestEnv::new();
    env.create_file(
        ".evt.toml",
        "root = true\n\n[categories]\n\"Concerts\" = [\"show\"]\n\"Opéra\" = \"lirica\"\n",
    );
    env.create_file("project/.evt.toml", "[categories]\n\"Concerts\" = \"gig\"\n");

    let config = Config::load(&env.path().join("project")).unwrap();
    let pairs: Vec<_> = config.category_labels().collect();
    assert_eq!(pairs, vec![("gig", "Concerts"), ("lirica", "Opéra")]);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let env = TestEnv::new();
    env.create_file(".evt.toml", "root = true\n[search\nlimit = 3\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(".evt.toml"));
}

#[test]
fn test_missing_data_file_warns() {
    let env = TestEnv::new();
    env.create_file(
        ".evt.toml",
        "root = true\n\n[data]\npath = \"missing.csv\"\n",
    );

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], ConfigWarning::DataFileMissing { .. }));
}

#[test]
fn test_template_written_as_config_is_inert() {
    let env = TestEnv::new();
    env.create_file(".evt.toml", &format!("root = true\n{}", local_template()));

    let config = Config::load(env.path()).unwrap();
    assert!(config.data.path.is_none());
    assert_eq!(config.search.limit, 500);
    assert!(config.categories.is_empty());
}

#[test]
fn test_settings_to_toml_round_trips_effective_values() {
    let env = TestEnv::new();
    env.create_file(
        ".evt.toml",
        "root = true\n\n[search]\nlimit = 42\n\n[categories]\n\"Concerts\" = \"gig\"\n",
    );

    let config = Config::load(env.path()).unwrap();
    let rendered = config.settings_to_toml().unwrap();
    let reparsed = evt_config::parse_config_str(&rendered, Path::new("effective.toml")).unwrap();
    assert_eq!(reparsed.search.unwrap().limit, Some(42));
    assert_eq!(reparsed.categories.unwrap()["Concerts"], vec!["gig"]);
}
