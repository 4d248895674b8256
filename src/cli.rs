//! Command-line interface module for sortwatch.
//!
//! This module handles:
//! - Argument parsing
//! - Configuration loading and directory resolution
//! - Wiring the watcher to a listener until interrupted

use crate::config::SortwatchConfig;
use crate::file_category::CategoryTable;
use crate::file_organizer::{DryRunListener, FileOrganizer, OrganizeResult};
use crate::output::OutputFormatter;
use crate::paths;
use crate::watcher::{CreationListener, DirectoryWatcher, FileEvent};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Folder watched when no directory is given.
pub const DEFAULT_WATCH_FOLDER: &str = "Desktop";

/// Watch a directory and sort new files into category folders.
#[derive(Debug, Clone, Parser)]
#[command(name = "sortwatch", version, about)]
pub struct Cli {
    /// Directory to watch (defaults to the Desktop folder)
    #[arg(value_name = "WATCH_DIR")]
    pub watch_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report where files would go without moving them
    #[arg(long)]
    pub dry_run: bool,
}

/// Returns the directory to watch: the argument if given, otherwise the
/// user's Desktop folder.
pub fn resolve_watch_dir(arg: Option<&Path>) -> Result<PathBuf, String> {
    match arg {
        Some(dir) => Ok(dir.to_path_buf()),
        None => paths::work_dir(DEFAULT_WATCH_FOLDER).map_err(|e| e.to_string()),
    }
}

/// Listener that sorts files and keeps per-category counts for the session.
#[derive(Debug)]
pub struct SortingSession {
    organizer: FileOrganizer,
    category_counts: HashMap<String, usize>,
}

impl SortingSession {
    pub fn new(organizer: FileOrganizer) -> Self {
        Self {
            organizer,
            category_counts: HashMap::new(),
        }
    }

    pub fn category_counts(&self) -> &HashMap<String, usize> {
        &self.category_counts
    }

    pub fn total_moved(&self) -> usize {
        self.category_counts.values().sum()
    }

    /// Prints the per-category summary, if anything was moved.
    pub fn print_summary(&self) {
        if self.category_counts.is_empty() {
            return;
        }
        OutputFormatter::summary_table(&self.category_counts, self.total_moved());
    }
}

impl CreationListener for SortingSession {
    fn on_created(&mut self, event: &FileEvent) -> OrganizeResult<()> {
        if let Some(moved) = self.organizer.handle_created_file(event)? {
            *self.category_counts.entry(moved.category).or_insert(0) += 1;
        }
        Ok(())
    }
}

/// Runs sortwatch until interrupted.
///
/// # Errors
///
/// Returns a printable message when configuration is invalid, when no watch
/// or destination directory can be resolved, or when sorting a file fails.
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    OutputFormatter::banner();

    let config = SortwatchConfig::load(cli.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let filters = config
        .compile_filters()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    let watch_dir = resolve_watch_dir(cli.watch_dir.as_deref())?;
    let documents_root = paths::work_dir(&config.destination).map_err(|e| e.to_string())?;

    OutputFormatter::observing(&watch_dir);

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .map_err(|e| format!("Error installing interrupt handler: {}", e))?;

    let organizer = FileOrganizer::new(
        documents_root,
        CategoryTable::with_overrides(&config.categories),
    )
    .with_readiness(config.readiness);
    OutputFormatter::plain(&format!(
        "Sorting into: {}",
        organizer.documents_root().display()
    ));
    let watcher = DirectoryWatcher::new(watch_dir)
        .with_filters(filters)
        .include_renamed(config.watch.include_renamed);

    if cli.dry_run {
        let mut listener = DryRunListener::new(organizer);
        watcher
            .run(&mut listener, shutdown)
            .map_err(|e| e.to_string())?;
        OutputFormatter::success(&format!(
            "Dry run complete. {} file(s) would have been moved.",
            listener.planned().len()
        ));
    } else {
        let mut session = SortingSession::new(organizer);
        let result = watcher.run(&mut session, shutdown);
        session.print_summary();
        result.map_err(|e| e.to_string())?;
    }

    OutputFormatter::info("Stopped observing.");
    Ok(())
}
