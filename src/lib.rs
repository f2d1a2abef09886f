//! filededup - Deterministic Duplicate File Finder
//!
//! A cross-platform Rust CLI application that scans a directory tree,
//! identifies files with identical content using BLAKE3 hashing, resolves
//! duplicates with a deterministic tie-break (oldest file wins, shortest
//! path breaks ties), and applies the configured output actions: copying
//! or moving duplicates aside, removing them in place, or flattening all
//! surviving unique files into a single directory.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod scanner;

use anyhow::Context;

use cli::{Cli, DupAction};
use config::RunConfig;
use duplicates::Scan;
use error::ExitCode;

/// Run the application with parsed CLI arguments.
///
/// Validates preconditions, performs the scan, and applies the configured
/// actions to the duplicate and canonical record sets. The first fatal
/// error aborts the run; partial side effects are not rolled back.
///
/// # Errors
///
/// Returns an error if the input directory is missing, the flatten target
/// already exists, or any filesystem operation fails during the scan or
/// the action phase.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let run_config = RunConfig::from_cli(&cli);
    run_config.validate()?;

    if run_config.dry_run {
        log::info!("Dry run: no filesystem changes will be made");
    }

    let outcome = Scan::new(&run_config.root)
        .run()
        .context("scan aborted")?;
    outcome.stats.log_summary();

    match run_config.dup_action {
        DupAction::Copy => {
            actions::copy_aside(
                &outcome.duplicates,
                &run_config.root,
                &run_config.dup_dir,
                run_config.dry_run,
            )?;
        }
        DupAction::Move => {
            actions::move_aside(
                &outcome.duplicates,
                &run_config.root,
                &run_config.dup_dir,
                run_config.dry_run,
            )?;
        }
        DupAction::Remove => {
            actions::remove_in_place(&outcome.duplicates, run_config.dry_run)?;
        }
        DupAction::None => {
            if !outcome.duplicates.is_empty() {
                log::info!(
                    "Found {} duplicate file(s); no duplicate action configured",
                    outcome.duplicates.len()
                );
            }
        }
    }

    if let Some(flatten_config) = &run_config.flatten {
        actions::flatten(&outcome.canonical, flatten_config, run_config.dry_run)?;
    }

    Ok(ExitCode::Success)
}
