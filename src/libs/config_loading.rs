use crate::libs::utilities::path_helpers::expand_tilde;
use crate::schema::InstallerConfig;
use crate::{log_debug, log_info};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Values given on the command line (or through `DENO_BOOTSTRAP_*` variables).
/// Each `Some` wins over the config file and the built-in default.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub target_os: Option<String>,
    pub target_version: Option<String>,
    pub destination_dir: Option<String>,
    pub scratch_root: Option<String>,
    pub download_url_template: Option<String>,
    pub api_base_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
    pub no_verify: bool,
}

/// Loads the installer configuration.
///
/// # Arguments
/// * `path`: YAML file to read. `None` means built-in defaults only.
///
/// # Returns
/// * The parsed config with `~` expanded in directory settings.
/// * An error naming the file if it cannot be read or is not valid YAML for `InstallerConfig`.
pub fn load_config(path: Option<&Path>) -> Result<InstallerConfig> {
    let Some(path) = path else {
        log_debug!("[Config] No config file; using built-in defaults.");
        return Ok(InstallerConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let mut config: InstallerConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    config.destination_dir = config.destination_dir.map(expand_path);
    config.scratch_root = config.scratch_root.map(expand_path);

    log_info!("[Config] Loaded configuration from {}", path.display().to_string().cyan());
    log_debug!("[Config] {:?}", config);
    Ok(config)
}

/// Layers command-line overrides on top of a loaded configuration.
pub fn apply_overrides(mut config: InstallerConfig, overrides: &ConfigOverrides) -> InstallerConfig {
    if let Some(os) = &overrides.target_os {
        config.target_os = Some(os.clone());
    }
    if let Some(version) = &overrides.target_version {
        config.target_version = Some(version.clone());
    }
    if let Some(dir) = &overrides.destination_dir {
        config.destination_dir = Some(expand_tilde(dir));
    }
    if let Some(dir) = &overrides.scratch_root {
        config.scratch_root = Some(expand_tilde(dir));
    }
    if let Some(template) = &overrides.download_url_template {
        config.download_url_template = template.clone();
    }
    if let Some(base) = &overrides.api_base_url {
        config.api_base_url = base.clone();
    }
    if let Some(secs) = overrides.http_timeout_secs {
        config.http_timeout_secs = Some(secs);
    }
    if overrides.no_verify {
        config.verify_executable = false;
    }
    config
}

fn expand_path(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path,
    }
}
