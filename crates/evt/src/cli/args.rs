//! Clap argument definitions for the `evt` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use evt_engine::{QueryParams, SortOrder};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "evt")]
#[command(about = "Search scraped cultural events by interests, keywords, city and date")]
#[command(version)]
pub struct Cli {
    /// Events CSV to load, overriding `[data] path` from configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `evt search` and `evt cities`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Weighted interests, e.g. "concerts:3,theatre:1"
    #[arg(short = 'i', long)]
    pub interests: Option<String>,

    /// Free-text keywords matched against event names and descriptions
    #[arg(short = 'q', long = "query")]
    pub query: Option<String>,

    /// Keep events whose city contains this text
    #[arg(short = 'c', long)]
    pub city: Option<String>,

    /// Earliest start date (defaults to today; past events are hidden)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest start date
    #[arg(long)]
    pub end_date: Option<String>,
}

impl FilterArgs {
    /// Builds engine parameters from the flags.
    pub fn to_params(&self) -> QueryParams {
        QueryParams {
            interests: self.interests.clone(),
            q: self.query.clone(),
            city: self.city.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            sort: SortOrder::default(),
        }
    }
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `evt search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    #[command(flatten)]
    /// Row filters.
    pub filters: FilterArgs,

    /// Result order: relevance or date
    #[arg(short = 's', long, default_value_t = SortOrder::Relevance)]
    pub sort: SortOrder,

    /// Maximum events to return [default: 500]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

impl SearchCommand {
    /// Builds engine parameters, including the sort order.
    pub fn to_params(&self) -> QueryParams {
        self.filters.to_params().with_sort(self.sort)
    }
}

/// Arguments for `evt cities`.
#[derive(Args, Debug, Clone)]
pub struct CitiesCommand {
    #[command(flatten)]
    /// Row filters.
    pub filters: FilterArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `evt categories`.
#[derive(Args, Debug, Clone)]
pub struct CategoriesCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `evt init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.evt.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `evt` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search events
    #[command(after_help = "\
INTERESTS:
  name:weight,...   Categories with integer weights, matched case- and accent-insensitively
  concerts:3        A missing or malformed weight is ignored for scoring

DATES:
  Without --start-date, events before today are hidden.
  Dates accept 2024-05-01, 2024-05-01T20:00, 01/05/2024 and similar forms.

EXAMPLES:
  evt search --interests 'concerts:3,theatre:1' --city paris
  evt search -q 'jazz festival' --sort date
  evt search --start-date 2024-06-01 --end-date 2024-06-30 --json")]
    Search(SearchCommand),

    /// List display categories present in the data
    Categories(CategoriesCommand),

    /// Rank cities by how many requested interests they cover
    Cities(CitiesCommand),

    /// Initialize evt configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and the data file
    Check,
}
