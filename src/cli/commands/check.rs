//! vitae check - Validate the authored content tables

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{self, OutputFormat};
use crate::content::{self, ContentReport};
use crate::error::{Result, VitaeError};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let report = content::validate(ctx.portfolio);

    if ctx.format == OutputFormat::Json {
        let data = serde_json::json!({
            "errors": report.errors,
            "clean": report.errors.is_empty(),
        });
        let envelope = output::envelope_ok(data).with_warnings(report.warnings.clone());
        output::emit_json(&envelope)?;
    } else {
        print_report(&report);
    }

    if !report.errors.is_empty() {
        return Err(VitaeError::ContentInvalid(format!(
            "{} violation(s)",
            report.errors.len()
        )));
    }
    if args.strict && !report.warnings.is_empty() {
        return Err(VitaeError::ContentInvalid(format!(
            "{} warning(s) in strict mode",
            report.warnings.len()
        )));
    }
    Ok(())
}

fn print_report(report: &ContentReport) {
    for error in &report.errors {
        println!("{} {error}", "error:".red().bold());
    }
    for warning in &report.warnings {
        println!("{} {warning}", "warning:".yellow().bold());
    }
    if report.is_clean() {
        println!("{} content tables are consistent", "ok:".green().bold());
    }
}
