//! Terminal UI for the portfolio page.
//!
//! The page renders as a virtual document of stacked sections; the event
//! loop scrolls a viewport over it and keeps the navigation bar in step.

use std::io::{self, IsTerminal};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::AppContext;
use crate::error::{Result, VitaeError};
use crate::nav::SectionId;

pub mod app;
pub mod charts;
pub mod page;
pub mod theme;

pub use app::PortfolioTui;

/// RAII guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the portfolio TUI, optionally starting at a section.
pub fn run_portfolio_tui(ctx: &AppContext, start: Option<SectionId>) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(VitaeError::NotInteractive(
            "view command requires an interactive terminal".to_string(),
        ));
    }

    debug!(start = ?start, "Entering interactive view");
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = PortfolioTui::new(ctx, start);
    app.run(&mut terminal)
}
