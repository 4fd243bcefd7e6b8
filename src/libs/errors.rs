//! Error taxonomy of the install flow.
//!
//! Every variant is fatal: the installer stops at the first failure and hands
//! the error back unchanged. `InstallError::stage` tells which step of the
//! linear flow was being entered when it happened.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The linear states an install walks through.
/// A failure always jumps from the current state straight to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    Idle,
    PlatformResolved,
    MetadataFetched,
    ScratchDirReady,
    Downloaded,
    Extracted,
    Done,
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallStage::Idle => "idle",
            InstallStage::PlatformResolved => "platform resolved",
            InstallStage::MetadataFetched => "metadata fetched",
            InstallStage::ScratchDirReady => "scratch dir ready",
            InstallStage::Downloaded => "downloaded",
            InstallStage::Extracted => "extracted",
            InstallStage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to fetch latest release of {owner}/{repo}: {reason}")]
    MetadataFetch {
        owner: String,
        repo: String,
        reason: String,
    },

    #[error("unsupported OS: {0}")]
    UnsupportedPlatform(String),

    #[error("failed to create scratch directory {path}: {source}")]
    ScratchDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("download of {url} answered with HTTP {status}")]
    DownloadStatus { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    ResponseRead {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("downloaded bytes are not a valid zip archive: {0}")]
    ArchiveParse(#[source] zip::result::ZipError),

    #[error("failed to extract {entry}: {reason}")]
    Extraction { entry: String, reason: String },

    #[error("executable {} not found after extraction", path.display())]
    ExecutableNotFound { path: PathBuf },
}

impl InstallError {
    /// The stage that was being entered when this error occurred.
    pub fn stage(&self) -> InstallStage {
        match self {
            InstallError::UnsupportedPlatform(_) => InstallStage::PlatformResolved,
            InstallError::MetadataFetch { .. } => InstallStage::MetadataFetched,
            InstallError::ScratchDir { .. } => InstallStage::ScratchDirReady,
            InstallError::Download { .. }
            | InstallError::DownloadStatus { .. }
            | InstallError::ResponseRead { .. } => InstallStage::Downloaded,
            InstallError::ArchiveParse(_) | InstallError::Extraction { .. } => {
                InstallStage::Extracted
            }
            InstallError::ExecutableNotFound { .. } => InstallStage::Done,
        }
    }

    pub(crate) fn extraction(entry: &str, reason: impl fmt::Display) -> Self {
        InstallError::Extraction {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}
