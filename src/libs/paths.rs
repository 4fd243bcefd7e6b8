// Filesystem locations used by `deno-bootstrap`: where the optional config file
// lives, and where each install extracts its archive.

use crate::libs::errors::InstallError;
use crate::libs::utilities::path_helpers::{absolutize, expand_tilde};
use crate::{log_debug, log_info};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the optional YAML config file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.deno-bootstrap/config.yaml";

/// Name prefix of every freshly created scratch directory.
pub const SCRATCH_DIR_PREFIX: &str = "deno";

/// Resolves which config file to read, if any.
///
/// # Arguments
/// * `config_path`: the `--config` value. When given, it is always returned (tilde-expanded)
///   so that a missing explicit file is reported by the loader.
///
/// # Returns
/// * `Some(PathBuf)` for an explicit path, or for the default path when that file exists.
/// * `None` when nothing was requested and no default file is present.
pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(explicit) = config_path {
        let resolved = expand_tilde(explicit);
        log_debug!("[Paths] Using config file from command line: {}", resolved.display());
        return Some(resolved);
    }
    let default = expand_tilde(DEFAULT_CONFIG_PATH);
    if default.is_file() {
        log_debug!("[Paths] Found default config file: {}", default.display());
        Some(default)
    } else {
        log_debug!("[Paths] No config file at {}; using built-in defaults.", default.display());
        None
    }
}

/// Creates the directory the archive will be extracted into.
///
/// # Arguments
/// * `destination`: when set, exactly this directory is used (created if missing).
/// * `scratch_root`: parent of the fresh directory; defaults to the OS temp dir.
///
/// # Returns
/// * `Ok(PathBuf)` with the absolute path of the (new, empty unless `destination` was reused) directory.
///   A fresh directory is never removed by this crate; its lifetime is left to the OS.
/// * `Err(InstallError::ScratchDir)` if it cannot be created.
pub fn prepare_scratch_dir(
    destination: Option<&Path>,
    scratch_root: Option<&Path>,
) -> Result<PathBuf, InstallError> {
    let dir = match destination {
        Some(dest) => {
            fs::create_dir_all(dest).map_err(|source| InstallError::ScratchDir {
                path: dest.to_path_buf(),
                source,
            })?;
            dest.to_path_buf()
        }
        None => {
            let root = scratch_root
                .map(Path::to_path_buf)
                .unwrap_or_else(std::env::temp_dir);
            tempfile::Builder::new()
                .prefix(SCRATCH_DIR_PREFIX)
                .tempdir_in(&root)
                .map_err(|source| InstallError::ScratchDir {
                    path: root.clone(),
                    source,
                })?
                .keep()
        }
    };

    let dir = absolutize(&dir).map_err(|source| InstallError::ScratchDir {
        path: dir.clone(),
        source,
    })?;
    log_info!("[Paths] Scratch directory ready: {}", dir.display().to_string().cyan());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scratch_dirs_are_unique_and_prefixed() {
        let root = tempfile::tempdir().unwrap();
        let first = prepare_scratch_dir(None, Some(root.path())).unwrap();
        let second = prepare_scratch_dir(None, Some(root.path())).unwrap();

        assert_ne!(first, second);
        for dir in [&first, &second] {
            assert!(dir.is_dir());
            assert!(dir.is_absolute());
            assert!(dir.starts_with(root.path()));
            let name = dir.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with(SCRATCH_DIR_PREFIX), "{name}");
            assert_eq!(fs::read_dir(dir).unwrap().count(), 0);
        }
    }

    #[test]
    fn destination_override_is_created_and_used() {
        let root = tempfile::tempdir().unwrap();
        let dest = root.path().join("tools").join("deno");
        let dir = prepare_scratch_dir(Some(&dest), None).unwrap();
        assert_eq!(dir, dest);
        assert!(dest.is_dir());
    }

    #[test]
    fn uncreatable_directory_is_a_scratch_dir_error() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = prepare_scratch_dir(None, Some(&blocker)).unwrap_err();
        assert!(matches!(err, InstallError::ScratchDir { .. }));

        let err = prepare_scratch_dir(Some(&blocker.join("sub")), None).unwrap_err();
        assert!(matches!(err, InstallError::ScratchDir { .. }));
    }

    #[test]
    fn explicit_config_path_is_always_returned() {
        let resolved = resolve_config_path(Some("/nonexistent/config.yaml"));
        assert_eq!(resolved, Some(PathBuf::from("/nonexistent/config.yaml")));
    }
}
