use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use library::commands;
use library::display::OutputFormat;

#[derive(Parser)]
#[command(name = "library")]
#[command(
  about = "Infinite Library - Archive Browser\nFilterable browsing over the fixed lore corpus"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Common filter arguments
#[derive(Args)]
struct FilterArgs {
  /// Show only fragments with this exact faction tag
  #[arg(short, long)]
  faction: Option<String>,
  /// Show only fragments at or above the canon threshold
  #[arg(short, long)]
  canon_only: bool,
  /// Search terms matched against title, body and author name
  #[arg(short, long, num_args = 1..)]
  search: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Browse the archive; shows the list and the active fragment's detail
  Browse {
    #[command(flatten)]
    filters: FilterArgs,
    /// Fragment to select as active (falls back to the first visible)
    #[arg(long)]
    select: Option<String>,
    /// Output format
    #[arg(long, default_value = "pretty")]
    format: OutputFormat,
  },
  /// Show one fragment's detail pane
  Show {
    /// Fragment id
    id: String,
  },
  /// List the archivist roster
  Agents {
    /// Show faction, credibility and memory counts
    #[arg(short, long)]
    verbose: bool,
  },
  /// List distinct faction tags observed across the corpus
  Factions,
  /// Inspect or edit persisted settings
  Settings {
    #[command(subcommand)]
    action: SettingsAction,
  },
}

#[derive(Subcommand)]
enum SettingsAction {
  /// Show current settings (API key masked for display)
  Show,
  /// Update settings fields and persist the whole object
  Set {
    /// Model slug to record
    #[arg(long)]
    model: Option<String>,
    /// API key to record (stored locally, unencrypted)
    #[arg(long)]
    api_key: Option<String>,
    /// Remove a passthrough key written by another build
    #[arg(long)]
    unset_extra: Option<String>,
  },
  /// Restore default settings
  Reset,
}

fn main() -> Result<()> {
  init_tracing();

  let cli = Cli::parse();

  match cli.command {
    Commands::Browse { filters, select, format } => {
      commands::browse(filters.faction, filters.canon_only, &filters.search, select, &format)?;
    }
    Commands::Show { id } => {
      commands::show(&id)?;
    }
    Commands::Agents { verbose } => {
      commands::list_agents(verbose)?;
    }
    Commands::Factions => {
      commands::list_factions()?;
    }
    Commands::Settings { action } => match action {
      SettingsAction::Show => commands::settings_show()?,
      SettingsAction::Set { model, api_key, unset_extra } => {
        commands::settings_set(model, api_key, unset_extra)?;
      }
      SettingsAction::Reset => commands::settings_reset()?,
    },
  }

  Ok(())
}

fn init_tracing() {
  use tracing_subscriber::EnvFilter;

  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .try_init();
}
