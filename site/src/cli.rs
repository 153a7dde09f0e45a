use clap::{Parser, Subcommand, ValueEnum};
use folio_core::domain::Theme;
use std::path::PathBuf;

/// Static portfolio page renderer.
#[derive(Debug, Parser)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Cli {
  /// Enable debug logging (RUST_LOG overrides this).
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Render the portfolio page to index.html.
  Render {
    /// Output file. Defaults to `[site].output_dir/index.html`.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Render with the detail modal already open on this project.
    #[arg(long, value_name = "ID")]
    open: Option<String>,
  },

  /// List configured projects in display order.
  List {
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
  },

  /// Show or change the persisted theme.
  Theme {
    #[command(subcommand)]
    action: Option<ThemeAction>,
  },
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
  Show,
  Toggle,
  Set { theme: ThemeArg },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
  Light,
  Dark,
}

impl From<ThemeArg> for Theme {
  fn from(arg: ThemeArg) -> Self {
    match arg {
      ThemeArg::Light => Theme::Light,
      ThemeArg::Dark => Theme::Dark,
    }
  }
}
