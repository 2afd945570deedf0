mod table;
mod tui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use showcal_core::{
    reduce, CalendarSource, Config, Event, FilterState, HttpCalendarSource, Month, ParkFilter,
    SessionState, ShowFilter,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showcal")]
#[command(about = "Show ticket availability calendar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Calendar endpoint (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding config.toml (default: ~/.showcal)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the filtered calendar for one month as a table
    Show {
        /// Month: 7, 8 or 9
        #[arg(short, long)]
        month: Option<Month>,
        /// Park: all, land or sea
        #[arg(short, long)]
        park: Option<ParkFilter>,
        /// Show: all, BBB, MMW, CMB or DTF
        #[arg(short, long, default_value = "all")]
        show: ShowFilter,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_logging(log_file: Option<&PathBuf>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Build the filter for `show`, warning when `--show` is not part of `--park`.
fn requested_filter(month: Month, park: ParkFilter, show: ShowFilter) -> FilterState {
    let filter = FilterState::new(month, park, show);
    if filter.show() != show {
        warn!(%show, %park, "show is not in the selected park, showing all shows instead");
    }
    filter
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let is_tui = !matches!(cli.command, Some(Commands::Show { .. }));
    init_logging(cli.log_file.as_ref(), !is_tui)?;

    let config = Config::load(cli.config.clone())?;
    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url.clone());
    let source: Arc<dyn CalendarSource> = Arc::new(HttpCalendarSource::new(api_url));
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Some(Commands::Show { month, park, show }) => {
            let filter = requested_filter(
                month.unwrap_or(config.default_month),
                park.unwrap_or(config.default_park),
                show,
            );
            let request = filter.month();
            let response = runtime.block_on(source.fetch(request))?;

            let state = reduce(SessionState::new(filter), Event::FetchStarted);
            let generation = state.generation;
            let state = reduce(
                state,
                Event::FetchSucceeded {
                    generation,
                    response,
                    fetched_at: chrono::Local::now(),
                },
            );
            table::print_calendar(&state);
        }
        Some(Commands::Tui) | None => {
            let filter = FilterState::new(config.default_month, config.default_park, ShowFilter::All);
            tui::run(source, runtime.handle().clone(), filter)?;
        }
    }
    Ok(())
}
