//! Implementation of `evt cities`.

use std::process::ExitCode;

use crate::cli::{args::CitiesCommand, context::CommandContext, output::output_cities};

/// Ranks cities by coverage of the requested interests.
pub fn run(ctx: &mut CommandContext, cmd: &CitiesCommand) -> ExitCode {
    let engine = match ctx.engine(None) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let rows = engine.city_coverage(&cmd.filters.to_params());
    output_cities(&rows, &cmd.output)
}
