//! vitae view - Interactive terminal page

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::nav::SectionId;

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Section to open on (id or label, e.g. "skills" or "habilidades")
    #[arg(long, short)]
    pub section: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ViewArgs) -> Result<()> {
    let start: Option<SectionId> = args.section.as_deref().map(str::parse).transpose()?;

    crate::tui::run_portfolio_tui(ctx, start)
}
