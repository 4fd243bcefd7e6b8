// Release-metadata lookups against the GitHub REST API.
// Only the tag of the most recent published release is needed; it becomes the
// `{version}` part of the archive URL.

// Every failure of the lookup is reported as `InstallError::MetadataFetch`.
use crate::libs::errors::InstallError;
// `GitHubRelease` models the part of the release JSON we read (`tag_name`).
use crate::schema::GitHubRelease;
// Custom logging macros for different levels of detail.
use crate::{log_debug, log_info};
// For colored terminal output, making URLs and tags easy to spot.
use colored::Colorize;

/// Anything that can answer "what is the latest release tag of owner/repo?".
/// GitHub, a static mirror or a local cache all qualify.
pub trait ReleaseSource {
    fn latest_tag(&self, owner: &str, repo: &str) -> Result<String, InstallError>;
}

/// Reads `GITHUB_TOKEN`, ignoring an empty value.
pub fn github_token_from_env() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty())
}

/// `ReleaseSource` backed by `GET {api_base}/repos/{owner}/{repo}/releases/latest`.
pub struct GitHubReleases {
    agent: ureq::Agent,
    api_base: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Creates a client for `api_base` (normally `https://api.github.com`).
    /// A token, when given, is sent as bearer auth and raises the API rate limit.
    pub fn new(agent: ureq::Agent, api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            agent,
            api_base: api_base.into(),
            token,
        }
    }

    fn latest_release_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            owner,
            repo
        )
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest_tag(&self, owner: &str, repo: &str) -> Result<String, InstallError> {
        let url = self.latest_release_url(owner, repo);
        let fail = |reason: String| InstallError::MetadataFetch {
            owner: owner.to_string(),
            repo: repo.to_string(),
            reason,
        };

        log_debug!("[GitHub] Fetching release information from {}", url.blue());
        // Ask for the v3 JSON representation explicitly, as GitHub recommends.
        let mut request = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github.v3+json");
        // Authenticated requests get a much higher rate limit than anonymous ones.
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        // ureq turns every non-2xx answer into `Error::Status`; the common ones get a clearer message.
        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(403, _) => fail(
                "GitHub API rate limit exceeded. Try again later or set GITHUB_TOKEN.".to_string(),
            ),
            ureq::Error::Status(404, _) => fail(format!("repository {owner}/{repo} has no published release")),
            ureq::Error::Status(code, _) => fail(format!("GitHub API returned HTTP {code}")),
            ureq::Error::Transport(transport) => fail(format!("GitHub API request failed: {transport}")),
        })?;

        // Decode only `tag_name`; the rest of the document is ignored.
        let release: GitHubRelease = response
            .into_json()
            .map_err(|e| fail(format!("failed to parse GitHub release JSON: {e}")))?;

        // A blank tag would produce a broken download URL, so it is treated as a lookup failure.
        let tag = release.tag_name.trim();
        if tag.is_empty() {
            return Err(fail("no tag_name in GitHub release response".to_string()));
        }

        log_info!("[GitHub] Latest release of {}/{}: {}", owner, repo, tag.bold());
        Ok(tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installers::build_agent;
    use crate::installers::test_endpoints::dead_url;
    use crate::installers::USER_AGENT;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LATEST: &str = "/repos/denoland/deno/releases/latest";

    fn client(base: &str) -> GitHubReleases {
        GitHubReleases::new(build_agent(Some(10)), base, None)
    }

    async fn serve_latest(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LATEST))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn latest_tag_is_read_from_release_document() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LATEST))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"tag_name":"v2.1.4","name":"v2.1.4","assets":[]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tag = client(&mock_server.uri()).latest_tag("denoland", "deno").unwrap();
        assert_eq!(tag, "v2.1.4");

        let requests = mock_server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn token_is_sent_as_bearer_auth() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LATEST))
            .and(header("Authorization", "Bearer ghp_test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tag_name":"v1.0.0"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tag = GitHubReleases::new(build_agent(Some(10)), mock_server.uri(), Some("ghp_test".to_string()))
            .latest_tag("denoland", "deno")
            .unwrap();
        assert_eq!(tag, "v1.0.0");
    }

    #[tokio::test]
    async fn not_found_has_specific_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/nobody/nothing/releases/latest"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server.uri()).latest_tag("nobody", "nothing").unwrap_err();
        assert!(matches!(err, InstallError::MetadataFetch { .. }));
        assert!(err.to_string().contains("nobody/nothing has no published release"));
    }

    #[tokio::test]
    async fn forbidden_is_reported_as_rate_limit() {
        let mock_server = serve_latest(ResponseTemplate::new(403)).await;
        let err = client(&mock_server.uri()).latest_tag("denoland", "deno").unwrap_err();
        assert!(matches!(err, InstallError::MetadataFetch { .. }));
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn server_error_reports_status() {
        let mock_server = serve_latest(ResponseTemplate::new(500)).await;
        let err = client(&mock_server.uri()).latest_tag("denoland", "deno").unwrap_err();
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn malformed_document_is_a_metadata_error() {
        let mock_server =
            serve_latest(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        let err = client(&mock_server.uri()).latest_tag("denoland", "deno").unwrap_err();
        assert!(matches!(err, InstallError::MetadataFetch { .. }));
        assert!(err.to_string().contains("failed to parse GitHub release JSON"));
    }

    #[tokio::test]
    async fn blank_tag_is_a_metadata_error() {
        let mock_server =
            serve_latest(ResponseTemplate::new(200).set_body_string(r#"{"tag_name":"  "}"#)).await;
        let err = client(&mock_server.uri()).latest_tag("denoland", "deno").unwrap_err();
        assert!(err.to_string().contains("no tag_name"));
    }

    #[test]
    fn unreachable_api_is_a_metadata_error() {
        let err = client(&dead_url()).latest_tag("denoland", "deno").unwrap_err();
        assert!(matches!(err, InstallError::MetadataFetch { .. }));
    }
}
