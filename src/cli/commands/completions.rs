//! vitae completions - Generate shell completion scripts

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(_ctx: &AppContext, args: &CompletionsArgs) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    generate(args.shell, &mut cmd, "vitae", &mut io::stdout());
    Ok(())
}
