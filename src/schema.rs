// src/schema.rs
// The data shapes `deno-bootstrap` works with: the slice of the GitHub release
// document we read, the installer configuration (built-in defaults, optionally
// overridden by a YAML file and CLI flags), and the result handed back to the caller.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default GitHub owner of the tool being bootstrapped.
pub const DEFAULT_OWNER: &str = "denoland";
/// Default GitHub repository of the tool being bootstrapped.
pub const DEFAULT_REPO: &str = "deno";
/// Deno archives are only fetched for this architecture; there is no detection.
pub const DEFAULT_ARCH: &str = "x86_64";
/// Default GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";
/// Release asset naming convention used by the Deno project.
/// Placeholders are substituted verbatim by `build_download_url`.
pub const DEFAULT_DOWNLOAD_URL_TEMPLATE: &str =
    "https://github.com/{owner}/{repo}/releases/download/{version}/deno-{arch}-{os}.zip";

// GitHub API Response Schema

/// The part of `GET /repos/{owner}/{repo}/releases/latest` we care about.
/// Everything else in the document (assets, body, author...) is ignored.
#[derive(Debug, Deserialize)]
pub struct GitHubRelease {
    // The release's tag (e.g., "v2.1.4"). Used verbatim in the download URL.
    pub tag_name: String,
}

// Installer configuration

/// Everything the installer needs to know, with defaults matching the
/// fixed behaviour: latest `denoland/deno` release, host OS, x86_64, GitHub
/// release URL, fresh temporary directory.
///
/// The same struct is deserialized from the optional YAML config file;
/// missing keys fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    // GitHub owner/repository pair whose latest release is looked up.
    pub owner: String,
    pub repo: String,
    // Architecture component of the archive name.
    pub arch: String,
    // Base URL of the release-metadata API (a mirror or a test server can be used).
    pub api_base_url: String,
    // Template for the archive URL; see `DEFAULT_DOWNLOAD_URL_TEMPLATE`.
    pub download_url_template: String,
    // OS identifier to resolve instead of the host's (`std::env::consts::OS`).
    pub target_os: Option<String>,
    // Release tag to install instead of asking for the latest one.
    pub target_version: Option<String>,
    // Extract into exactly this directory instead of a fresh temporary one.
    pub destination_dir: Option<PathBuf>,
    // Parent directory for the fresh temporary directory (defaults to the OS temp dir).
    pub scratch_root: Option<PathBuf>,
    // Overall timeout for each HTTP request; `None` keeps ureq's defaults.
    pub http_timeout_secs: Option<u64>,
    // Fail with `ExecutableNotFound` instead of returning a dangling path.
    pub verify_executable: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            api_base_url: GITHUB_API_BASE.to_string(),
            download_url_template: DEFAULT_DOWNLOAD_URL_TEMPLATE.to_string(),
            target_os: None,
            target_version: None,
            destination_dir: None,
            scratch_root: None,
            http_timeout_secs: None,
            verify_executable: true,
        }
    }
}

// Install result

/// Outcome of a successful install: where the executable ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallResult {
    /// Absolute path to the extracted executable.
    pub executable_path: PathBuf,
}
