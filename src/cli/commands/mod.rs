//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod check;
pub mod completions;
pub mod export;
pub mod sections;
pub mod show;
pub mod view;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::View(args) => view::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Sections(args) => sections::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
