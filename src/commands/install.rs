// This file holds the logic for `deno-bootstrap install`.
// It assembles the configuration (defaults, config file, flags), runs the
// installer, and maps the outcome onto stdout/stderr and the exit code.

use crate::libs::config_loading::{ConfigOverrides, apply_overrides, load_config};
use crate::libs::paths::resolve_config_path;
use crate::libs::tool_installer::Installer;
use crate::{log_debug, log_error};
use anyhow::Result;
use std::path::PathBuf;

/// Entry point for `install`.
///
/// On success the absolute executable path is the only thing printed on stdout,
/// so callers can use `$(deno-bootstrap install)`. Failures are logged to stderr
/// verbatim and the process exits with status 1.
pub fn run(config_path: Option<String>, overrides: ConfigOverrides) {
    log_debug!("Entered install::run() function.");
    match install(config_path.as_deref(), &overrides) {
        Ok(path) => println!("{}", path.display()),
        Err(err) => {
            log_error!("{:#}", err);
            std::process::exit(1);
        }
    }
}

fn install(config_path: Option<&str>, overrides: &ConfigOverrides) -> Result<PathBuf> {
    let config_file = resolve_config_path(config_path);
    let config = apply_overrides(load_config(config_file.as_deref())?, overrides);

    let installer = Installer::new(config);
    log_debug!("Installer configuration: {:?}", installer.config());

    let result = installer.install().inspect_err(|err| {
        log_debug!("Install failed while entering stage '{}'", err.stage());
    })?;
    Ok(result.executable_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_os_is_reported_without_network() {
        let overrides = ConfigOverrides {
            target_os: Some("plan9".into()),
            ..ConfigOverrides::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.yaml");
        std::fs::write(&config, "verify_executable: true\n").unwrap();

        let err = install(config.to_str(), &overrides).unwrap_err();
        assert_eq!(format!("{err:#}"), "unsupported OS: plan9");
    }

    #[test]
    fn unreadable_config_stops_before_installing() {
        let err = install(Some("/nonexistent/deno-bootstrap.yaml"), &ConfigOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
