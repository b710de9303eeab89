//! vitae show - Print the page (or one section) as text

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::PageText;
use crate::cli::output::{self, OutputFormat};
use crate::error::Result;
use crate::nav::SectionId;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Section to print (id or label); the whole page when omitted
    pub section: Option<String>,

    /// Wrap column for paragraphs
    #[arg(long, default_value = "72")]
    pub width: usize,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let section: Option<SectionId> = args.section.as_deref().map(str::parse).transpose()?;

    let mut page = PageText::new(ctx.portfolio).with_width(args.width);
    if let Some(id) = section {
        page = page.with_section(id);
    }

    if ctx.format == OutputFormat::Json {
        return output::emit_json(&output::envelope_ok(page.payload()));
    }
    output::emit(&page, ctx.format);
    Ok(())
}
