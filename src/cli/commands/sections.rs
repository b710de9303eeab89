//! vitae sections - List the section registry

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{self, OutputFormat};
use crate::error::Result;
use crate::nav::SECTIONS;
use crate::tui::page;

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Terminal width used to compute anchor rows
    #[arg(long, default_value = "80")]
    pub width: u16,
}

#[derive(Debug, Serialize)]
struct SectionRow {
    id: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<u16>,
    hidden: bool,
}

pub fn run(ctx: &AppContext, args: &SectionsArgs) -> Result<()> {
    let anchors = page::layout(ctx.portfolio, &ctx.config, args.width);

    let rows: Vec<SectionRow> = SECTIONS
        .iter()
        .map(|descriptor| {
            let span = anchors.span(descriptor.id);
            SectionRow {
                id: descriptor.id.to_string(),
                label: descriptor.label.to_string(),
                anchor: span.map(|s| s.top),
                rows: span.map(|s| s.height),
                hidden: !ctx.config.nav.is_visible(descriptor.id),
            }
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => output::emit_json(&output::envelope_ok(&rows)),
        OutputFormat::Plain => {
            for row in &rows {
                let anchor = row.anchor.map_or_else(|| "-".to_string(), |a| a.to_string());
                println!("{}\t{}\t{}", row.id, row.label, anchor);
            }
            Ok(())
        }
        OutputFormat::Human => {
            print_table(&rows);
            Ok(())
        }
    }
}

fn print_table(rows: &[SectionRow]) {
    println!(
        "{:12} {:14} {:>8} {:>6}",
        "ID".bold(),
        "LABEL".bold(),
        "ANCHOR".bold(),
        "ROWS".bold()
    );
    println!("{}", "─".repeat(44).dimmed());

    for row in rows {
        let anchor = row.anchor.map_or_else(|| "-".to_string(), |a| a.to_string());
        let height = row.rows.map_or_else(|| "-".to_string(), |h| h.to_string());
        let hidden_marker = if row.hidden {
            " [hidden]".yellow().to_string()
        } else {
            String::new()
        };

        println!(
            "{:12} {:14} {:>8} {:>6}{}",
            row.id, row.label, anchor, height, hidden_marker
        );
    }

    println!();
    println!("{} {} sections", "Total:".dimmed(), rows.len());
}
