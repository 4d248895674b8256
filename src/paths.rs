/// Resolution of well-known folders under the current user's home directory.
///
/// Only POSIX-like and Windows targets are recognized. Anything else is
/// reported as [`PathError::UnsupportedPlatform`], which callers treat as fatal.
use std::path::PathBuf;

/// Errors that can occur while resolving a folder path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The operating system is neither POSIX-like nor Windows.
    UnsupportedPlatform(&'static str),
    /// The platform did not report a home directory.
    HomeNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::UnsupportedPlatform(os) => {
                write!(f, "App will not run on this OS ({}). Sorry.", os)
            }
            PathError::HomeNotFound => write!(f, "Could not determine the home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Returns `true` when the target belongs to a recognized OS family.
pub fn is_supported_platform() -> bool {
    cfg!(any(unix, windows))
}

/// Returns the absolute path of `folder` inside the user's home directory.
///
/// # Examples
///
/// ```no_run
/// use sortwatch::paths::work_dir;
///
/// let desktop = work_dir("Desktop").expect("home directory");
/// assert!(desktop.ends_with("Desktop"));
/// ```
pub fn work_dir(folder: &str) -> Result<PathBuf, PathError> {
    if !is_supported_platform() {
        return Err(PathError::UnsupportedPlatform(std::env::consts::OS));
    }

    let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
    Ok(home.join(folder))
}
