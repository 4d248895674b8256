//! Directory watching.
//!
//! A [`DirectoryWatcher`] subscribes to file-system notifications for one
//! directory (non-recursively) and hands every creation to a
//! [`CreationListener`], one event at a time, on the calling thread.

use crate::config::CompiledFilters;
use crate::file_organizer::OrganizeError;
use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// How often the loop wakes up to check for a shutdown request.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A file or directory that appeared in the watched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileEvent {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
        }
    }
}

/// Receives creation events from a [`DirectoryWatcher`].
///
/// Returning an error stops the watch loop.
pub trait CreationListener {
    fn on_created(&mut self, event: &FileEvent) -> Result<(), OrganizeError>;
}

/// Errors that end a watch session.
#[derive(Debug)]
pub enum WatchError {
    /// The notification backend could not be set up or reported a failure.
    Backend(notify::Error),
    /// The listener failed to handle an event.
    Listener(OrganizeError),
    /// The backend hung up without a shutdown request.
    Disconnected,
}

impl std::fmt::Display for WatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchError::Backend(e) => write!(f, "Watcher error: {}", e),
            WatchError::Listener(e) => write!(f, "{}", e),
            WatchError::Disconnected => write!(f, "Watcher stopped unexpectedly"),
        }
    }
}

impl std::error::Error for WatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WatchError::Backend(e) => Some(e),
            WatchError::Listener(e) => Some(e),
            WatchError::Disconnected => None,
        }
    }
}

impl From<notify::Error> for WatchError {
    fn from(e: notify::Error) -> Self {
        WatchError::Backend(e)
    }
}

impl From<OrganizeError> for WatchError {
    fn from(e: OrganizeError) -> Self {
        WatchError::Listener(e)
    }
}

/// Translates a backend notification into creation events.
///
/// Only creations are of interest. With `include_renamed`, the target of a
/// rename into the directory counts as a creation as well.
pub fn events_from_notify(event: &Event, include_renamed: bool) -> Vec<FileEvent> {
    match event.kind {
        EventKind::Create(CreateKind::File) => {
            event.paths.iter().map(FileEvent::file).collect()
        }
        EventKind::Create(CreateKind::Folder) => {
            event.paths.iter().map(FileEvent::directory).collect()
        }
        EventKind::Create(_) => event.paths.iter().map(|p| classify_path(p)).collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) if include_renamed => {
            event.paths.iter().map(|p| classify_path(p)).collect()
        }
        // Paths are [from, to].
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if include_renamed => {
            event.paths.last().map(|p| classify_path(p)).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

fn classify_path(path: &Path) -> FileEvent {
    if path.is_dir() {
        FileEvent::directory(path)
    } else {
        FileEvent::file(path)
    }
}

/// Watches a single directory for newly created entries.
pub struct DirectoryWatcher {
    watch_dir: PathBuf,
    filters: CompiledFilters,
    include_renamed: bool,
}

impl DirectoryWatcher {
    pub fn new(watch_dir: PathBuf) -> Self {
        Self {
            watch_dir,
            filters: CompiledFilters::default(),
            include_renamed: false,
        }
    }

    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn include_renamed(mut self, include_renamed: bool) -> Self {
        self.include_renamed = include_renamed;
        self
    }

    pub fn watch_dir(&self) -> &Path {
        &self.watch_dir
    }

    /// Passes one creation to the listener unless the filters exclude it.
    ///
    /// Directories always reach the listener so it can report the skip.
    pub fn dispatch(
        &self,
        listener: &mut dyn CreationListener,
        event: &FileEvent,
    ) -> Result<(), OrganizeError> {
        if !event.is_directory && !self.filters.should_include(&event.path) {
            return Ok(());
        }
        listener.on_created(event)
    }

    /// Runs until `shutdown` is set or an error occurs.
    ///
    /// The backend watcher is dropped, releasing its resources, before this
    /// returns.
    pub fn run(
        &self,
        listener: &mut dyn CreationListener,
        shutdown: Arc<AtomicBool>,
    ) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(tx)?;
        watcher.watch(&self.watch_dir, RecursiveMode::NonRecursive)?;

        let result = loop {
            if shutdown.load(Ordering::SeqCst) {
                break Ok(());
            }

            match rx.recv_timeout(SHUTDOWN_POLL_INTERVAL) {
                Ok(Ok(event)) => {
                    let outcome = events_from_notify(&event, self.include_renamed)
                        .iter()
                        .try_for_each(|created| self.dispatch(listener, created));
                    if let Err(e) = outcome {
                        break Err(WatchError::Listener(e));
                    }
                }
                Ok(Err(e)) => break Err(WatchError::Backend(e)),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break Err(WatchError::Disconnected),
            }
        };

        drop(watcher);
        result
    }
}
