// The network side of an install: where release metadata comes from and
// where the archive bytes come from. Both are traits so the installer can be
// pointed at GitHub, a mirror, or an in-process fake.

/// GitHub releases API client implementing `ReleaseSource`.
pub(crate) mod github;

/// Plain HTTP download of the release archive implementing `ArchiveSource`,
/// plus construction of the archive URL from its template.
pub(crate) mod url;

// For turning the configured number of seconds into ureq's timeout type.
use std::time::Duration;

/// User-Agent sent with every request; the GitHub API rejects requests without one.
pub const USER_AGENT: &str = concat!("deno-bootstrap/", env!("CARGO_PKG_VERSION"));

/// Builds the blocking HTTP agent shared by both sources.
/// One agent means one connection pool for the metadata lookup and the download.
///
/// # Arguments
/// * `timeout_secs`: overall per-request timeout. `None` keeps ureq's defaults.
pub fn build_agent(timeout_secs: Option<u64>) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
