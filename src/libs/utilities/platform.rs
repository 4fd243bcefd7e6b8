// Platform resolution for release archives.
// Maps an OS identifier onto the naming convention of the Deno release assets:
// which OS component goes into the archive name, and what the executable is called.

use crate::libs::errors::InstallError;
use crate::log_debug;
use colored::Colorize;

/// The OS-specific naming pair needed to locate and recognize the right binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// OS component of the archive name, e.g. `unknown-linux-gnu`.
    pub archive_suffix: &'static str,
    /// File name of the executable inside the archive, e.g. `deno.exe`.
    pub executable_name: &'static str,
}

impl PlatformProfile {
    /// Resolves an OS identifier through the fixed lookup table.
    ///
    /// # Arguments
    /// * `os`: an identifier as reported by `std::env::consts::OS` (`macos`, `linux`, `windows`).
    ///   `darwin` is accepted as an alias for macOS. Matching is case-insensitive.
    ///
    /// # Returns
    /// * `Ok(PlatformProfile)` for the three supported systems.
    /// * `Err(InstallError::UnsupportedPlatform)` for anything else; there is no fallback.
    pub fn for_os(os: &str) -> Result<Self, InstallError> {
        let profile = match normalize_os(os).as_str() {
            "macos" => PlatformProfile {
                archive_suffix: "apple-darwin",
                executable_name: "deno",
            },
            "linux" => PlatformProfile {
                archive_suffix: "unknown-linux-gnu",
                executable_name: "deno",
            },
            "windows" => PlatformProfile {
                archive_suffix: "pc-windows-msvc",
                executable_name: "deno.exe",
            },
            _ => return Err(InstallError::UnsupportedPlatform(os.to_string())),
        };
        log_debug!(
            "[Platform] {} detected -> archive suffix {}, executable {}",
            os.cyan(),
            profile.archive_suffix.cyan(),
            profile.executable_name.cyan()
        );
        Ok(profile)
    }
}

/// Returns the identifier of the OS this binary was compiled for.
pub fn detect_os() -> &'static str {
    std::env::consts::OS
}

/// Normalizes the spellings of OS names we may be handed into a lowercase canonical form.
/// Unknown names are returned lowercased so the caller can reject them.
pub fn normalize_os(os: &str) -> String {
    match os.trim().to_lowercase().as_str() {
        "macos" | "darwin" | "apple-darwin" => "macos".to_string(),
        "linux" => "linux".to_string(),
        "windows" | "win32" | "win64" => "windows".to_string(),
        other => other.to_string(),
    }
}
