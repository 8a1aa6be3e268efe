//! fbnd main entry point
//!
//! This is the command-line interface for browsing FB03 timetables.

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use fbnd::config::{load_config_or_default, Config};
use fbnd::output::{format_programs, format_schedule, write_json};
use fbnd::{fetch_catalogs, fetch_timetable, CycleSelection, HttpTransport, ProgramId};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// fbnd: Timetables of FB03 inside your terminal
///
/// Lists the degree programs for which timetables are published and shows
/// the weekly timetable of a single program.
#[derive(Parser, Debug)]
#[command(name = "fbnd")]
#[command(version)]
#[command(about = "Timetables of FB03 inside your terminal", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all degree programs for which timetables are available
    List {
        /// List degree programs for summer semesters only
        #[arg(short, long, conflicts_with = "winter")]
        summer: bool,

        /// List degree programs for winter semesters only
        #[arg(short, long, conflicts_with = "summer")]
        winter: bool,
    },

    /// Display the timetable for a specific degree program
    Time {
        /// ID of the degree program, as shown by `list`
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let json = cli.json || config.output.json;
    let color = !cli.no_color && config.output.color;

    match cli.command {
        Command::List { summer, winter } => {
            handle_list(&config, CycleSelection::from_flags(summer, winter), json, color).await
        }
        Command::Time { id } => handle_time(&config, &id, json, color).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that table and JSON output on stdout stay clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fbnd=warn"),
            1 => EnvFilter::new("fbnd=info,warn"),
            2 => EnvFilter::new("fbnd=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles `list`: fetches the selected catalogs and prints them
async fn handle_list(
    config: &Config,
    selection: CycleSelection,
    json: bool,
    color: bool,
) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&config.http)?;

    let programs = fetch_catalogs(&transport, selection)
        .await
        .with_context(|| format!("Could not fetch degree programs for {:?}", selection.cycles()))?;

    tracing::info!("Fetched {} degree programs", programs.len());

    let stdout = std::io::stdout();
    if json {
        write_json(stdout.lock(), &programs)?;
    } else {
        stdout.lock().write_all(format_programs(&programs, color).as_bytes())?;
    }

    Ok(())
}

/// Handles `time`: fetches a timetable and prints it
async fn handle_time(config: &Config, id: &str, json: bool, color: bool) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&config.http)?;
    let id = ProgramId::new(id);

    let mut timetable = fetch_timetable(&transport, &id).await?;
    if timetable.schedule().is_empty() {
        bail!("could find no courses for degree program with id {}", id);
    }

    let stdout = std::io::stdout();
    if json {
        // JSON consumers get the degree program as well
        if let Err(e) = timetable.resolve(&transport).await {
            if e.is_fatal() {
                tracing::error!("{}", e);
            }
            return Err(e.into());
        }
        write_json(stdout.lock(), &timetable)?;
    } else {
        let today = chrono::Local::now().weekday();
        stdout
            .lock()
            .write_all(format_schedule(timetable.schedule(), Some(today), color).as_bytes())?;
    }

    Ok(())
}
