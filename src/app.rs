//! Application context shared by every command handler.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::content::Portfolio;
use crate::error::Result;

/// Everything a command needs: the loaded configuration, the static content
/// store, and the effective output format.
pub struct AppContext {
    pub config: Config,
    pub portfolio: &'static Portfolio,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let format = cli.output_format();

        // Both styling crates check their own global switch.
        if cli.force_plain() || !format.use_colors() {
            colored::control::set_override(false);
            console::set_colors_enabled(false);
        }

        Ok(Self {
            config,
            portfolio: Portfolio::get(),
            format,
        })
    }
}
