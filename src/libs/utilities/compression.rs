// In-memory zip extraction.
// The downloaded release archive is kept in memory, parsed as a zip, and every
// entry is written below the scratch directory with its relative path preserved.

// The error taxonomy of the install flow; every failure here is an `ArchiveParse` or `Extraction`.
use crate::libs::errors::InstallError;
// Our logging macros for leveled, colored output on stderr.
use crate::{log_debug, log_info};
// For colored terminal output, making paths and entry names stand out in the logs.
use colored::Colorize;
// `fs` creates directories; `OpenOptions` lets us pick the mode of each extracted file.
use std::fs::{self, OpenOptions};
// `Cursor` turns the in-memory download into a seekable reader, which the zip format needs
// to find its central directory at the end of the archive.
use std::io::{self, Cursor, Read, Write};
// For building the target path of each entry below the scratch directory.
use std::path::{Path, PathBuf};
// The `zip` crate parses the archive and hands out one reader per entry.
use zip::ZipArchive;

/// Mode requested for every extracted file; the process umask still applies.
#[cfg(unix)]
const EXTRACTED_FILE_MODE: u32 = 0o777;

/// Parses `bytes` as a zip archive.
///
/// # Returns
/// * `Err(InstallError::ArchiveParse)` when the bytes are truncated or not a zip at all.
pub fn open_zip(bytes: Vec<u8>) -> Result<ZipArchive<Cursor<Vec<u8>>>, InstallError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(InstallError::ArchiveParse)
}

/// Writes every entry of `archive` below `dest`, in the order the archive lists them.
///
/// Entries are read fully into memory and written once. Directory entries only
/// create directories; missing parent directories of files are created on the way.
/// An entry whose path is absolute or climbs out of `dest` with `..` is rejected.
///
/// # Arguments
/// * `archive`: an archive previously opened with `open_zip`.
/// * `dest`: the scratch directory; it must already exist.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` with the files written, in archive order.
/// * `Err(InstallError::Extraction)` on the first entry that cannot be opened, read or written.
///   Entries written before the failure stay on disk.
pub fn extract_zip<R: Read + io::Seek>(
    archive: &mut ZipArchive<R>,
    dest: &Path,
) -> Result<Vec<PathBuf>, InstallError> {
    log_debug!(
        "[Extract] Extracting {} entries into {}",
        archive.len(),
        dest.display().to_string().cyan()
    );

    let mut written = Vec::with_capacity(archive.len());
    // Entries are handled strictly in the order the central directory lists them.
    for index in 0..archive.len() {
        // Open the entry; a broken local header or unsupported compression fails here.
        let mut entry = archive
            .by_index(index)
            .map_err(|e| InstallError::extraction(&format!("entry #{index}"), e))?;
        let name = entry.name().to_string();

        // `enclosed_name` returns `None` for absolute paths and for paths that climb
        // above the archive root with `..`; such entries are refused outright.
        let relative = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                return Err(InstallError::extraction(
                    &name,
                    "entry path escapes the extraction directory",
                ));
            }
        };
        let target = dest.join(&relative);

        // Directory entries only materialize the directory itself.
        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| InstallError::extraction(&name, e))?;
            log_debug!("[Extract] Created directory {}", target.display());
            continue;
        }

        // Archives are not required to list parent directories before their files.
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| InstallError::extraction(&name, e))?;
        }

        // The size recorded in the archive is not trusted for preallocation; the buffer
        // grows with the bytes that actually decompress.
        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .map_err(|e| InstallError::extraction(&name, e))?;
        write_entry(&target, &contents).map_err(|e| InstallError::extraction(&name, e))?;

        log_info!(
            "[Extract] Wrote {} to {}",
            name.bold(),
            target.display().to_string().cyan()
        );
        written.push(target);
    }
    Ok(written)
}

/// Writes one entry's bytes to `path`, replacing any existing file.
/// On unix the file is created with `EXTRACTED_FILE_MODE` so the executable can be run right away.
fn write_entry(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(EXTRACTED_FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}
