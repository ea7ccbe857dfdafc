mod app;
mod session;
mod source;
mod tui;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use varclean_core::{PreferenceStore, format_size};

use session::{Session, SessionOptions, SessionOutcome};
use source::{accept_directory, choose_directory, select_source};

/// Environment variable holding the log filter
const LOG_ENV: &str = "VARCLEAN_LOG";

/// VARCLEAN - find and remove outdated <base>.<version>.var files
#[derive(Parser, Debug)]
#[command(name = "varclean")]
#[command(about = "Report and remove outdated <base>.<version>.var files")]
#[command(version)]
struct Args {
    /// Directory to scan (asks interactively when omitted)
    path: Option<PathBuf>,

    /// VIEW or UPDATE (asks interactively when omitted)
    #[arg(short, long)]
    mode: Option<String>,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Use a plain text prompt instead of the directory browser
    #[arg(long)]
    plain: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_wait: bool,

    /// List every outdated file in the report
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never mix with the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let store = PreferenceStore::in_home(dirs::home_dir());

    let dir = match args.path.clone() {
        Some(path) => accept_directory(Some(path), &store),
        None => {
            let mut source = select_source(args.plain);
            choose_directory(source.as_mut(), &store)?
        }
    };

    let Some(dir) = dir else {
        println!("No directory selected. Exiting.");
        return Ok(());
    };
    tracing::debug!("Using directory {:?}", dir);

    let options = SessionOptions {
        mode: args.mode,
        assume_yes: args.yes,
        no_wait: args.no_wait,
        list_files: args.list,
    };
    let stdin = io::stdin();
    let outcome = Session::new(stdin.lock(), io::stdout(), options).run(&dir)?;

    match outcome {
        SessionOutcome::Cleaned { scan, report } => tracing::info!(
            "Removed {} of {} outdated files, freed {}",
            report.deleted_count(),
            scan.count(),
            format_size(report.bytes_freed)
        ),
        SessionOutcome::Reported(scan) | SessionOutcome::Cancelled(scan) => {
            tracing::debug!("{} outdated files left in place", scan.count())
        }
        SessionOutcome::Aborted => {}
    }

    Ok(())
}
