//! sortwatch - keep a directory tidy as files arrive
//!
//! This library watches a directory for newly created files and moves each one
//! into a category folder (IMAGES, DOCUMENTS, VIDEO, SOUND or OTHER) chosen by
//! its extension, renaming on collision instead of overwriting.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod paths;
pub mod watcher;

pub use config::{CompiledFilters, ConfigError, SortwatchConfig};
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{FileAttributes, FileOrganizer, OrganizeError, PlannedMove};
pub use watcher::{CreationListener, DirectoryWatcher, FileEvent, WatchError};

pub use cli::{Cli, run_cli};
