use crate::libs::config_loading::ConfigOverrides;
use clap::{Args, Parser, Subcommand};

/// Defines the command-line interface (CLI) for 'deno-bootstrap'.
#[derive(Parser)]
#[command(name = "deno-bootstrap")]
#[command(about = "Download the latest Deno release for this platform and print the executable path", long_about = None)]
pub struct Cli {
    /// Enables detailed debug output on stderr.
    #[arg(short, long, global = true, env = "DENO_BOOTSTRAP_DEBUG")]
    pub(crate) debug: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current version of deno-bootstrap.
    Version,
    /// Fetch, download and extract Deno; prints the executable path on success.
    Install(InstallArgs),
}

/// Options of `install`. Every flag overrides the config file.
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Path to a YAML config file (defaults to ~/.deno-bootstrap/config.yaml when present).
    #[arg(long, env = "DENO_BOOTSTRAP_CONFIG")]
    pub config: Option<String>,
    /// OS to install for instead of the host's [macos, linux, windows].
    #[arg(long = "os", env = "DENO_BOOTSTRAP_OS")]
    pub target_os: Option<String>,
    /// Release tag to install instead of the latest one (e.g. "v2.1.4").
    #[arg(long = "version", env = "DENO_BOOTSTRAP_VERSION")]
    pub target_version: Option<String>,
    /// Extract into this directory instead of a fresh temporary one.
    #[arg(long = "dest", env = "DENO_BOOTSTRAP_DEST")]
    pub destination_dir: Option<String>,
    /// Parent directory for the fresh temporary directory.
    #[arg(long, env = "DENO_BOOTSTRAP_SCRATCH_ROOT")]
    pub scratch_root: Option<String>,
    /// Archive URL template; {owner}, {repo}, {version}, {arch} and {os} are substituted.
    #[arg(long = "url-template", env = "DENO_BOOTSTRAP_URL_TEMPLATE")]
    pub download_url_template: Option<String>,
    /// Base URL of the GitHub API (or a compatible mirror).
    #[arg(long = "api-base", env = "DENO_BOOTSTRAP_API_BASE")]
    pub api_base_url: Option<String>,
    /// Per-request HTTP timeout in seconds.
    #[arg(long = "timeout", env = "DENO_BOOTSTRAP_HTTP_TIMEOUT")]
    pub http_timeout_secs: Option<u64>,
    /// Return the executable path even if the archive did not contain it.
    #[arg(long)]
    pub no_verify: bool,
}

impl InstallArgs {
    /// Splits the args into the config file location and the overrides layered on top of it.
    pub fn into_parts(self) -> (Option<String>, ConfigOverrides) {
        let overrides = ConfigOverrides {
            target_os: self.target_os,
            target_version: self.target_version,
            destination_dir: self.destination_dir,
            scratch_root: self.scratch_root,
            download_url_template: self.download_url_template,
            api_base_url: self.api_base_url,
            http_timeout_secs: self.http_timeout_secs,
            no_verify: self.no_verify,
        };
        (self.config, overrides)
    }
}
