mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;

pub use cli::{Cli, Command, ThemeAction, ThemeArg};
pub use commands::render_page;

/// Entry point of the `folio` binary.
///
/// Global paths come from `FOLIO_BASE_DIR` or the platform config dir; see
/// `folio_config::FolioPaths`.
pub fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);
  commands::execute(cli.command)
}
