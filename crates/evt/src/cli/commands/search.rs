//! Implementation of `evt search`.

use std::process::ExitCode;

use crate::cli::{args::SearchCommand, context::CommandContext, output::output_events};

/// Searches the event table and prints matching events.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let engine = match ctx.engine(cmd.limit) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let params = cmd.to_params();
    tracing::debug!(?params, limit = engine.limit(), "running search");
    let records = engine.search(&params);

    output_events(&records, &cmd.output)
}
