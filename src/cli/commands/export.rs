//! vitae export - Dump the content store as a JSON envelope

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let envelope = output::envelope_ok(ctx.portfolio);

    match &args.output {
        Some(path) => {
            let payload = serde_json::to_string_pretty(&envelope)?;
            fs::write(path, payload)?;
            info!(path = %path.display(), "exported portfolio");
            Ok(())
        }
        None => output::emit_json(&envelope),
    }
}
