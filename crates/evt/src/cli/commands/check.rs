//! Implementation of `evt check`.

use std::process::ExitCode;

use evt_config::{ConfigWarning, discover_config_files};
use evt_table::EventTable;

use crate::cli::{
    context::CommandContext,
    output::{dim, header, subheader, success, warning},
};

/// Exit codes for `evt check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration and data are usable with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Something needs attention.
    pub const PROBLEMS: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and tries to load the data file.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("{}", header("Configuration"));
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("  {}", dim("(no config files, using defaults)"));
    } else {
        println!("{}", subheader("Config files (highest precedence first):"));
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    let data_path = ctx.data_path();
    println!("{}", header("Data"));
    println!("  {}", data_path.display());

    let mut problems = 0;
    match EventTable::load(&data_path) {
        Ok(table) => println!("  {}", success(&format!("{} events loaded", table.len()))),
        Err(e) => {
            println!("  {}", warning(&e.to_string()));
            problems += 1;
        }
    }
    println!();

    // Data file problems were reported by the load attempt above
    let warnings: Vec<ConfigWarning> = ctx
        .config
        .validate()
        .into_iter()
        .filter(|w| {
            !matches!(
                w,
                ConfigWarning::NoDataConfigured
                    | ConfigWarning::DataFileMissing { .. }
                    | ConfigWarning::DataPathNotFile { .. }
            )
        })
        .collect();

    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("  - {}", warning(&w.to_string()));
        }
        println!();
        problems += warnings.len();
    }

    if problems == 0 {
        println!("No issues found.");
        exit_codes::OK
    } else {
        exit_codes::PROBLEMS
    }
}
