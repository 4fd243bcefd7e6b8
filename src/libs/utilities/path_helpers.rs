use std::io;
use std::path::{Path, PathBuf};

/// Resolves a leading `~` to the user's home directory.
/// Paths without a tilde, or a tilde when no home directory can be found, are returned as-is.
///
/// # Arguments
/// * `path`: a path string from the config file or the command line, possibly starting with `~`.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches(['/', '\\']));
            }
        }
    }
    PathBuf::from(path)
}

/// Makes `path` absolute against the current directory without touching the filesystem.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}
