//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use evt_config::Config;
use evt_engine::{CategoryTranslator, QueryEngine};
use evt_table::EventTable;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Data file given with `--data`, taking precedence over configuration.
    data_override: Option<PathBuf>,
    /// Engine built on first use.
    engine: Option<QueryEngine>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(data_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            data_override,
            engine: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            data_override: None,
            engine: None,
        })
    }

    /// The events CSV this invocation reads.
    ///
    /// Relative `--data` paths resolve against the working directory.
    pub fn data_path(&self) -> PathBuf {
        match self.data_override {
            Some(ref path) => self.cwd.join(path),
            None => self.config.data_path(&self.cwd),
        }
    }

    /// Returns the query engine, loading the event table on first use.
    ///
    /// `limit` overrides the configured search limit.
    pub fn engine(&mut self, limit: Option<usize>) -> Result<&QueryEngine, ExitCode> {
        if self.engine.is_none() {
            let table = load_table_or_failure(&self.data_path())?;
            let engine = self.build_engine(table, limit);
            self.engine = Some(engine);
        }
        self.engine.as_ref().ok_or(ExitCode::FAILURE)
    }

    /// Configures an engine over `table` from the loaded settings.
    fn build_engine(&self, table: EventTable, limit: Option<usize>) -> QueryEngine {
        let translator = CategoryTranslator::new().with_labels(self.config.category_labels());
        QueryEngine::new(table, translator)
            .with_limit(limit.unwrap_or(self.config.search.limit))
            .with_ticketmaster_notice(self.config.display.ticketmaster_notice.clone())
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads the event table or exits with an error.
fn load_table_or_failure(path: &Path) -> Result<EventTable, ExitCode> {
    tracing::info!(path = %path.display(), "loading events");
    EventTable::load(path).map_err(|e| {
        eprintln!("error: failed to load events: {e}");
        ExitCode::FAILURE
    })
}
