/// Classification and relocation of newly created files.
///
/// A created file is sorted into `<documents root>/<CATEGORY>/`, where the
/// category comes from its extension. The category folder is created on first
/// use. An occupied destination is never overwritten: the incoming file gets
/// a timestamp suffix instead.
use crate::config::ReadinessConfig;
use crate::file_category::CategoryTable;
use crate::output::OutputFormatter;
use crate::watcher::{CreationListener, FileEvent};
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

/// Format of the suffix appended to a file name on collision.
pub const COLLISION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Base name and extension of a file, split on the final period.
///
/// The final component is taken with the platform's path separators. Both
/// parts keep the raw OS bytes so the name survives the move unchanged.
/// `extension` is `None` when the name has no period, or only a leading one
/// (dotfiles such as `.bashrc`). A trailing period gives `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    pub base_name: OsString,
    pub extension: Option<OsString>,
}

impl FileAttributes {
    /// Splits the final path component of `path` into base name and extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwatch::file_organizer::FileAttributes;
    /// use std::ffi::OsStr;
    /// use std::path::Path;
    ///
    /// let attrs = FileAttributes::from_path(Path::new("/watched/holiday.photo.jpg"));
    /// assert_eq!(attrs.base_name, "holiday.photo");
    /// assert_eq!(attrs.extension.as_deref(), Some(OsStr::new("jpg")));
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let Some(name) = path.file_name() else {
            return Self {
                base_name: path.as_os_str().to_os_string(),
                extension: None,
            };
        };
        let name = Path::new(name);

        Self {
            base_name: name
                .file_stem()
                .unwrap_or(name.as_os_str())
                .to_os_string(),
            extension: name.extension().map(OsStr::to_os_string),
        }
    }

    /// The extension used for category lookup; empty when there is none.
    pub fn lookup_extension(&self) -> Cow<'_, str> {
        self.extension
            .as_deref()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default()
    }

    /// Reassembles the original file name.
    pub fn file_name(&self) -> OsString {
        self.file_name_with_suffix(None)
    }

    /// File name with `_<suffix>` inserted between base name and extension.
    pub fn file_name_with_suffix(&self, suffix: Option<&str>) -> OsString {
        let mut name = self.base_name.clone();
        if let Some(suffix) = suffix {
            name.push("_");
            name.push(suffix);
        }
        if let Some(ref ext) = self.extension {
            name.push(".");
            name.push(ext);
        }
        name
    }
}

/// Where a created file is going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    /// The file as reported by the watcher.
    pub source: PathBuf,
    /// Category folder name, e.g. `IMAGES`.
    pub category: String,
    /// `<documents root>/<category>`.
    pub destination_dir: PathBuf,
    /// Full destination path, disambiguated if needed.
    pub destination: PathBuf,
    /// True when the file name was changed to avoid a collision.
    pub renamed: bool,
}

/// Errors that can occur while sorting a file.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
    /// The file disappeared before it could be moved.
    SourceVanished { path: PathBuf },
    /// The file could not be inspected while waiting for it to settle.
    ReadinessCheckFailed { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::SourceVanished { path } => {
                write!(f, "File disappeared before it could be moved: {}", path.display())
            }
            Self::ReadinessCheckFailed { path, source } => {
                write!(f, "Failed to inspect {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreationFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
            Self::SourceVanished { .. } => None,
            Self::ReadinessCheckFailed { source, .. } => Some(source),
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Returns `true` if something (file, directory or dangling link) occupies `path`.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Picks a free destination for `attrs` inside `dir`.
///
/// The plain file name is used when free. Otherwise the name gets the
/// timestamp `now` as suffix, then `_1`, `_2`, ... until a free name is found.
/// Returns the path and whether the name was changed.
pub fn resolve_destination(
    dir: &Path,
    attrs: &FileAttributes,
    now: DateTime<Local>,
) -> (PathBuf, bool) {
    let plain = dir.join(attrs.file_name());
    if !is_occupied(&plain) {
        return (plain, false);
    }

    let stamp = now.format(COLLISION_TIMESTAMP_FORMAT).to_string();
    let mut candidate = dir.join(attrs.file_name_with_suffix(Some(&stamp)));
    let mut counter = 1u32;
    while is_occupied(&candidate) {
        let suffix = format!("{}_{}", stamp, counter);
        candidate = dir.join(attrs.file_name_with_suffix(Some(&suffix)));
        counter += 1;
    }
    (candidate, true)
}

/// Polls the size of `path` until two consecutive readings agree.
///
/// Gives up waiting after `max_checks` readings and returns the last size.
pub fn wait_until_stable(path: &Path, readiness: &ReadinessConfig) -> io::Result<u64> {
    let mut last = fs::metadata(path)?.len();
    for _ in 1..readiness.max_checks {
        thread::sleep(readiness.interval());
        let size = fs::metadata(path)?.len();
        if size == last {
            return Ok(size);
        }
        last = size;
    }
    Ok(last)
}

/// Guesses an extension from file content.
fn sniff_extension(path: &Path) -> Option<&'static str> {
    infer::get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.extension())
}

/// Sorts created files into category folders under a documents root.
#[derive(Debug, Clone)]
pub struct FileOrganizer {
    documents_root: PathBuf,
    table: CategoryTable,
    readiness: ReadinessConfig,
}

impl FileOrganizer {
    /// Creates an organizer with the default readiness settings.
    pub fn new(documents_root: PathBuf, table: CategoryTable) -> Self {
        Self {
            documents_root,
            table,
            readiness: ReadinessConfig::default(),
        }
    }

    pub fn with_readiness(mut self, readiness: ReadinessConfig) -> Self {
        self.readiness = readiness;
        self
    }

    pub fn documents_root(&self) -> &Path {
        &self.documents_root
    }

    /// Determines the category folder name for a file.
    ///
    /// Extensionless files are sniffed when enabled; the detected extension
    /// only drives the lookup.
    pub fn category_for(&self, path: &Path, attrs: &FileAttributes) -> String {
        let ext = attrs.lookup_extension();
        if ext.is_empty()
            && self.readiness.sniff_content
            && let Some(detected) = sniff_extension(path)
        {
            return self.table.category_for(detected).to_string();
        }
        self.table.category_for(&ext).to_string()
    }

    /// Computes where a created file would go without touching the file system.
    ///
    /// Returns `None` for directory events.
    pub fn plan(&self, event: &FileEvent) -> Option<PlannedMove> {
        self.plan_at(event, Local::now())
    }

    /// Same as [`plan`](Self::plan) with an explicit collision timestamp.
    pub fn plan_at(&self, event: &FileEvent, now: DateTime<Local>) -> Option<PlannedMove> {
        if event.is_directory {
            return None;
        }

        let attrs = FileAttributes::from_path(&event.path);
        let category = self.category_for(&event.path, &attrs);
        let destination_dir = self.documents_root.join(&category);
        let (destination, renamed) = resolve_destination(&destination_dir, &attrs, now);

        Some(PlannedMove {
            source: event.path.clone(),
            category,
            destination_dir,
            destination,
            renamed,
        })
    }

    /// Sorts one created file into its category folder.
    ///
    /// Directory events are skipped. The file is given time to finish being
    /// written, the category folder is created if missing, and the file is
    /// renamed into place. Returns the move that was carried out.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sortwatch::file_category::CategoryTable;
    /// use sortwatch::file_organizer::FileOrganizer;
    /// use sortwatch::watcher::FileEvent;
    /// use std::path::PathBuf;
    ///
    /// let organizer = FileOrganizer::new(
    ///     PathBuf::from("/home/me/Documents"),
    ///     CategoryTable::standard().clone(),
    /// );
    /// let event = FileEvent::file("/home/me/Desktop/photo.jpg");
    /// match organizer.handle_created_file(&event) {
    ///     Ok(Some(moved)) => println!("now at {}", moved.destination.display()),
    ///     Ok(None) => println!("skipped"),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn handle_created_file(&self, event: &FileEvent) -> OrganizeResult<Option<PlannedMove>> {
        if event.is_directory {
            OutputFormatter::info("Directory is created. Skipping processing!");
            return Ok(None);
        }

        wait_until_stable(&event.path, &self.readiness).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                OrganizeError::SourceVanished {
                    path: event.path.clone(),
                }
            } else {
                OrganizeError::ReadinessCheckFailed {
                    path: event.path.clone(),
                    source: e,
                }
            }
        })?;

        // Directory events were handled above.
        let Some(planned) = self.plan(event) else {
            return Ok(None);
        };

        if !planned.destination_dir.exists() {
            fs::create_dir(&planned.destination_dir).map_err(|e| {
                OrganizeError::DirectoryCreationFailed {
                    path: planned.destination_dir.clone(),
                    source: e,
                }
            })?;
        }

        OutputFormatter::plain(&format!(
            "Moving file {} to {}",
            display_name(&planned.source),
            planned.category
        ));

        fs::rename(&planned.source, &planned.destination).map_err(|e| {
            OrganizeError::FileMoveFailure {
                source: planned.source.clone(),
                destination: planned.destination.clone(),
                source_error: e,
            }
        })?;

        if planned.renamed {
            OutputFormatter::warning(&format!(
                "Name already taken, saved as {}",
                planned.destination.display()
            ));
        }
        OutputFormatter::success(&format!("Moved to {}", planned.destination.display()));

        Ok(Some(planned))
    }
}

impl CreationListener for FileOrganizer {
    fn on_created(&mut self, event: &FileEvent) -> OrganizeResult<()> {
        self.handle_created_file(event).map(|_| ())
    }
}

/// Listener that reports where files would go and leaves them in place.
#[derive(Debug, Clone)]
pub struct DryRunListener {
    organizer: FileOrganizer,
    planned: Vec<PlannedMove>,
}

impl DryRunListener {
    pub fn new(organizer: FileOrganizer) -> Self {
        Self {
            organizer,
            planned: Vec::new(),
        }
    }

    /// Moves reported so far.
    pub fn planned(&self) -> &[PlannedMove] {
        &self.planned
    }
}

impl CreationListener for DryRunListener {
    fn on_created(&mut self, event: &FileEvent) -> OrganizeResult<()> {
        match self.organizer.plan(event) {
            Some(planned) => {
                OutputFormatter::dry_run_notice(&format!(
                    "Would move {} to {}",
                    display_name(&planned.source),
                    planned.destination.display()
                ));
                self.planned.push(planned);
            }
            None => OutputFormatter::info("Directory is created. Skipping processing!"),
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn fast_readiness() -> ReadinessConfig {
        ReadinessConfig {
            interval_ms: 0,
            max_checks: 2,
            sniff_content: true,
        }
    }

    fn organizer(root: &Path) -> FileOrganizer {
        FileOrganizer::new(root.to_path_buf(), CategoryTable::standard().clone())
            .with_readiness(fast_readiness())
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2019, 8, 22, 12, 42, 11).unwrap()
    }

    #[test]
    fn test_file_attributes_split() {
        let attrs = FileAttributes::from_path(Path::new("/watched/report.pdf"));
        assert_eq!(attrs.base_name, "report");
        assert_eq!(attrs.extension.as_deref(), Some(OsStr::new("pdf")));
        assert_eq!(attrs.file_name(), "report.pdf");
    }

    #[test]
    fn test_file_attributes_last_period_wins() {
        let attrs = FileAttributes::from_path(Path::new("/watched/backup.tar.gz"));
        assert_eq!(attrs.base_name, "backup.tar");
        assert_eq!(attrs.lookup_extension(), "gz");
    }

    #[test]
    fn test_file_attributes_without_extension() {
        let attrs = FileAttributes::from_path(Path::new("/watched/Makefile"));
        assert_eq!(attrs.base_name, "Makefile");
        assert_eq!(attrs.extension, None);
        assert_eq!(attrs.file_name(), "Makefile");

        let dotfile = FileAttributes::from_path(Path::new("/watched/.bashrc"));
        assert_eq!(dotfile.base_name, ".bashrc");
        assert_eq!(dotfile.extension, None);

        let trailing = FileAttributes::from_path(Path::new("/watched/notes."));
        assert_eq!(trailing.extension.as_deref(), Some(OsStr::new("")));
        assert_eq!(trailing.file_name(), "notes.");
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_is_part_of_the_name_on_unix() {
        let attrs = FileAttributes::from_path(Path::new("/watched/a\\b.jpg"));
        assert_eq!(attrs.base_name, "a\\b");
        assert_eq!(attrs.lookup_extension(), "jpg");
    }

    #[cfg(windows)]
    #[test]
    fn test_backslash_separates_on_windows() {
        let attrs = FileAttributes::from_path(Path::new("C:\\watched\\b.jpg"));
        assert_eq!(attrs.base_name, "b");
        assert_eq!(attrs.lookup_extension(), "jpg");
    }

    #[test]
    fn test_suffix_goes_before_extension() {
        let attrs = FileAttributes::from_path(Path::new("report.pdf"));
        assert_eq!(
            attrs.file_name_with_suffix(Some("2019_08_22_12_42_11")),
            "report_2019_08_22_12_42_11.pdf"
        );
    }

    #[test]
    fn test_resolve_destination_free_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let attrs = FileAttributes::from_path(Path::new("photo.jpg"));

        let (dest, renamed) = resolve_destination(temp_dir.path(), &attrs, fixed_time());
        assert_eq!(dest, temp_dir.path().join("photo.jpg"));
        assert!(!renamed);
    }

    #[test]
    fn test_resolve_destination_collision_uses_full_timestamp() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("report.pdf"), "old").unwrap();
        let attrs = FileAttributes::from_path(Path::new("report.pdf"));

        let (dest, renamed) = resolve_destination(temp_dir.path(), &attrs, fixed_time());
        assert_eq!(
            dest,
            temp_dir.path().join("report_2019_08_22_12_42_11.pdf")
        );
        assert!(renamed);
    }

    #[test]
    fn test_resolve_destination_same_second_collision_gets_counter() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("report.pdf"), "a").unwrap();
        fs::write(temp_dir.path().join("report_2019_08_22_12_42_11.pdf"), "b").unwrap();
        let attrs = FileAttributes::from_path(Path::new("report.pdf"));

        let (dest, _) = resolve_destination(temp_dir.path(), &attrs, fixed_time());
        assert_eq!(
            dest,
            temp_dir.path().join("report_2019_08_22_12_42_11_1.pdf")
        );
    }

    #[test]
    fn test_plan_skips_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let organizer = organizer(temp_dir.path());
        assert_eq!(organizer.plan(&FileEvent::directory("/watched/newfolder")), None);
    }

    #[test]
    fn test_plan_does_not_create_category_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let organizer = organizer(temp_dir.path());

        let planned = organizer
            .plan(&FileEvent::file("/watched/song.flac"))
            .unwrap();
        assert_eq!(planned.category, "SOUND");
        assert_eq!(planned.destination, temp_dir.path().join("SOUND/song.flac"));
        assert!(!planned.destination_dir.exists());
    }

    #[test]
    fn test_handle_created_file_creates_directory_and_moves() {
        let watched = TempDir::new().expect("Failed to create temp directory");
        let documents = TempDir::new().expect("Failed to create temp directory");
        let file_path = watched.path().join("clip.mov");
        fs::write(&file_path, "video").unwrap();

        let moved = organizer(documents.path())
            .handle_created_file(&FileEvent::file(&file_path))
            .expect("Failed to move file")
            .expect("file event should move");

        assert_eq!(moved.destination, documents.path().join("VIDEO/clip.mov"));
        assert!(documents.path().join("VIDEO").is_dir());
        assert!(!file_path.exists());
        assert_eq!(fs::read_to_string(&moved.destination).unwrap(), "video");
    }

    #[test]
    fn test_extensionless_file_is_sniffed() {
        let watched = TempDir::new().expect("Failed to create temp directory");
        let documents = TempDir::new().expect("Failed to create temp directory");
        let file_path = watched.path().join("scan");
        fs::write(&file_path, b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n").unwrap();

        let moved = organizer(documents.path())
            .handle_created_file(&FileEvent::file(&file_path))
            .unwrap()
            .unwrap();

        assert_eq!(moved.category, "DOCUMENTS");
        assert_eq!(moved.destination, documents.path().join("DOCUMENTS/scan"));
    }

    #[test]
    fn test_sniffing_can_be_disabled() {
        let watched = TempDir::new().expect("Failed to create temp directory");
        let documents = TempDir::new().expect("Failed to create temp directory");
        let file_path = watched.path().join("scan");
        fs::write(&file_path, b"%PDF-1.4\n").unwrap();

        let organizer = organizer(documents.path()).with_readiness(ReadinessConfig {
            sniff_content: false,
            ..fast_readiness()
        });
        let planned = organizer.plan(&FileEvent::file(&file_path)).unwrap();
        assert_eq!(planned.category, "OTHER");
    }

    #[test]
    fn test_vanished_source_is_an_error() {
        let documents = TempDir::new().expect("Failed to create temp directory");
        let missing = documents.path().join("gone.txt");

        let result = organizer(documents.path()).handle_created_file(&FileEvent::file(&missing));
        assert!(matches!(result, Err(OrganizeError::SourceVanished { .. })));
    }

    #[test]
    fn test_missing_documents_root_fails_directory_creation() {
        let watched = TempDir::new().expect("Failed to create temp directory");
        let file_path = watched.path().join("photo.png");
        fs::write(&file_path, "png").unwrap();

        let result = organizer(Path::new("/non/existent/Documents"))
            .handle_created_file(&FileEvent::file(&file_path));
        assert!(matches!(
            result,
            Err(OrganizeError::DirectoryCreationFailed { .. })
        ));
        assert!(file_path.exists());
    }

    #[test]
    fn test_wait_until_stable_returns_size() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("data.bin");
        fs::write(&file_path, [0u8; 16]).unwrap();

        assert_eq!(wait_until_stable(&file_path, &fast_readiness()).unwrap(), 16);
    }

    #[test]
    fn test_wait_until_stable_waits_for_growing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("download.bin");
        fs::write(&file_path, b"").unwrap();

        let writer_path = file_path.clone();
        let writer = thread::spawn(move || {
            let mut file = fs::OpenOptions::new()
                .append(true)
                .open(&writer_path)
                .expect("Failed to open file");
            for _ in 0..20 {
                file.write_all(&[7u8; 8]).expect("Failed to append");
                thread::sleep(Duration::from_millis(20));
            }
        });

        let readiness = ReadinessConfig {
            interval_ms: 100,
            max_checks: 100,
            sniff_content: false,
        };
        let size = wait_until_stable(&file_path, &readiness).unwrap();
        writer.join().expect("writer thread panicked");

        assert_eq!(size, 160);
    }

    #[test]
    fn test_wait_until_stable_single_check_returns_immediately() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("data.bin");
        fs::write(&file_path, [0u8; 4]).unwrap();

        let readiness = ReadinessConfig {
            interval_ms: 10_000,
            max_checks: 1,
            sniff_content: false,
        };
        let started = Instant::now();
        assert_eq!(wait_until_stable(&file_path, &readiness).unwrap(), 4);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_wait_until_stable_gives_up_after_max_checks() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("stream.bin");
        fs::write(&file_path, b"").unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let writer_stop = Arc::clone(&stop);
        let writer_path = file_path.clone();
        let writer = thread::spawn(move || {
            let mut file = fs::OpenOptions::new()
                .append(true)
                .open(&writer_path)
                .expect("Failed to open file");
            while !writer_stop.load(Ordering::SeqCst) {
                file.write_all(&[1u8; 64]).expect("Failed to append");
                thread::sleep(Duration::from_millis(2));
            }
        });

        let readiness = ReadinessConfig {
            interval_ms: 20,
            max_checks: 3,
            sniff_content: false,
        };
        let started = Instant::now();
        let result = wait_until_stable(&file_path, &readiness);
        let elapsed = started.elapsed();
        stop.store(true, Ordering::SeqCst);
        writer.join().expect("writer thread panicked");

        assert!(result.is_ok());
        assert!(elapsed < Duration::from_secs(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_survive_the_move() {
        use std::os::unix::ffi::OsStrExt;

        let watched = TempDir::new().expect("Failed to create temp directory");
        let documents = TempDir::new().expect("Failed to create temp directory");
        let names = [
            OsStr::from_bytes(b"caf\xe9.jpg"),
            OsStr::from_bytes(b"caf\xe8.jpg"),
        ];
        for name in names {
            // Some file systems only accept UTF-8 names.
            if fs::write(watched.path().join(name), name.as_bytes()).is_err() {
                return;
            }
        }

        let organizer = organizer(documents.path());
        for name in names {
            let moved = organizer
                .handle_created_file(&FileEvent::file(watched.path().join(name)))
                .unwrap()
                .unwrap();
            assert_eq!(moved.category, "IMAGES");
            assert_eq!(moved.destination.file_name(), Some(name));
            assert!(!moved.renamed);
            assert_eq!(fs::read(&moved.destination).unwrap(), name.as_bytes());
        }
    }

    #[test]
    fn test_dry_run_listener_leaves_files_in_place() {
        let watched = TempDir::new().expect("Failed to create temp directory");
        let documents = TempDir::new().expect("Failed to create temp directory");
        let file_path = watched.path().join("photo.gif");
        fs::write(&file_path, "gif").unwrap();

        let mut listener = DryRunListener::new(organizer(documents.path()));
        listener.on_created(&FileEvent::file(&file_path)).unwrap();
        listener
            .on_created(&FileEvent::directory(watched.path().join("newfolder")))
            .unwrap();

        assert_eq!(listener.planned().len(), 1);
        assert_eq!(listener.planned()[0].category, "IMAGES");
        assert!(file_path.exists());
        assert!(!documents.path().join("IMAGES").exists());
    }
}
