//! Implementation of `evt categories`.

use std::process::ExitCode;

use crate::cli::{args::CategoriesCommand, context::CommandContext, output::output_categories};

/// Lists the display categories present in the data.
pub fn run(ctx: &mut CommandContext, cmd: &CategoriesCommand) -> ExitCode {
    match ctx.engine(None) {
        Ok(engine) => output_categories(&engine.categories(), &cmd.output),
        Err(code) => code,
    }
}
