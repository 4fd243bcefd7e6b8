//! The install flow.
//!
//! `Installer::install` runs one linear pass: resolve the platform, look up
//! the release tag, build the archive URL, create the scratch directory,
//! download, extract, and hand back the executable path. Every failure is
//! fatal and returned as is; nothing already written is rolled back.

use crate::installers::github::{GitHubReleases, ReleaseSource, github_token_from_env};
use crate::installers::url::{ArchiveSource, HttpArchiveSource, build_download_url};
use crate::installers::build_agent;
use crate::libs::errors::{InstallError, InstallStage};
use crate::libs::paths::prepare_scratch_dir;
use crate::libs::utilities::compression::{extract_zip, open_zip};
use crate::libs::utilities::platform::{PlatformProfile, detect_os};
use crate::schema::{InstallResult, InstallerConfig};
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;

pub struct Installer {
    config: InstallerConfig,
    releases: Box<dyn ReleaseSource>,
    archives: Box<dyn ArchiveSource>,
}

impl Installer {
    /// Installer talking to GitHub over HTTPS with the configured timeout.
    pub fn new(config: InstallerConfig) -> Self {
        let agent = build_agent(config.http_timeout_secs);
        let releases = GitHubReleases::new(
            agent.clone(),
            config.api_base_url.clone(),
            github_token_from_env(),
        );
        let archives = HttpArchiveSource::new(agent);
        Self::with_sources(config, Box::new(releases), Box::new(archives))
    }

    /// Installer using caller-provided metadata and archive sources.
    pub fn with_sources(
        config: InstallerConfig,
        releases: Box<dyn ReleaseSource>,
        archives: Box<dyn ArchiveSource>,
    ) -> Self {
        Self {
            config,
            releases,
            archives,
        }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Runs the install.
    ///
    /// # Returns
    /// * `Ok(InstallResult)` with `<scratch dir>/<executable name>`.
    ///   With `verify_executable` off the path is returned even if the archive had no such file.
    /// * `Err(InstallError)` from the first stage that failed.
    pub fn install(&self) -> Result<InstallResult, InstallError> {
        let config = &self.config;
        let mut stage = InstallStage::Idle;
        log_debug!("[Installer] Stage: {}", stage);

        // 1. Platform. Checked first so an unsupported host never touches the network.
        // Falls back to the host OS when no target was configured.
        let os: &str = match config.target_os.as_deref() {
            Some(target) => target,
            None => detect_os(),
        };
        let profile = PlatformProfile::for_os(os)?;
        advance(&mut stage, InstallStage::PlatformResolved);

        // 2. Release tag.
        let version = match config.target_version.as_deref() {
            Some(pinned) => {
                log_info!("[Installer] Using requested version {}", pinned.bold());
                pinned.to_string()
            }
            None => self.releases.latest_tag(&config.owner, &config.repo)?,
        };
        advance(&mut stage, InstallStage::MetadataFetched);

        // 3. Archive URL.
        let url = build_download_url(
            &config.download_url_template,
            &config.owner,
            &config.repo,
            &version,
            &config.arch,
            profile.archive_suffix,
        );

        // 4. Scratch directory, only once metadata is known.
        let scratch_dir = prepare_scratch_dir(
            config.destination_dir.as_deref(),
            config.scratch_root.as_deref(),
        )?;
        advance(&mut stage, InstallStage::ScratchDirReady);

        // 5 + 6. Download and buffer.
        log_info!(
            "[Installer] Downloading {} {} to {} from {}",
            config.repo.bold(),
            version.bold(),
            scratch_dir.display().to_string().cyan(),
            url.blue()
        );
        let bytes = self.archives.fetch(&url)?;
        advance(&mut stage, InstallStage::Downloaded);

        // 7 + 8. Parse and extract.
        let mut archive = open_zip(bytes)?;
        let written = extract_zip(&mut archive, &scratch_dir)?;
        advance(&mut stage, InstallStage::Extracted);
        log_debug!("[Installer] Extracted {} files", written.len());

        // 9. Executable path.
        let executable_path = scratch_dir.join(profile.executable_name);
        if !executable_path.is_file() {
            if config.verify_executable {
                return Err(InstallError::ExecutableNotFound {
                    path: executable_path,
                });
            }
            log_warn!(
                "[Installer] {} is not in the archive; returning the path unverified",
                executable_path.display().to_string().yellow()
            );
        }
        advance(&mut stage, InstallStage::Done);

        log_info!(
            "[Installer] {} installed at {}",
            config.repo.bold(),
            executable_path.display().to_string().green()
        );
        Ok(InstallResult { executable_path })
    }
}

fn advance(stage: &mut InstallStage, next: InstallStage) {
    log_debug!("[Installer] Stage: {} -> {}", stage, next);
    *stage = next;
}
