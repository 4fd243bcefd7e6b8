// Fetching the release archive from its hosting endpoint.
// The whole body is buffered in memory before it is handed to the zip reader.

// Download failures map onto `Download`, `DownloadStatus` and `ResponseRead`.
use crate::libs::errors::InstallError;
// Debug logging of the request and the number of bytes received.
use crate::log_debug;
// For colored terminal output of URLs.
use colored::Colorize;
// `read_to_end` on the response reader buffers the whole archive.
use std::io::Read;

/// Anything that can return the complete bytes behind a URL.
pub trait ArchiveSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, InstallError>;
}

/// `ArchiveSource` doing a single blocking GET.
pub struct HttpArchiveSource {
    agent: ureq::Agent,
}

impl HttpArchiveSource {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, InstallError> {
        log_debug!("[Download] GET {}", url.blue());

        // A non-2xx answer is reported with its status instead of being parsed as a zip.
        // Anything below HTTP (DNS, refused connection, TLS, timeout) is a transport error.
        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => InstallError::DownloadStatus {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => InstallError::Download {
                url: url.to_string(),
                reason: transport.to_string(),
            },
        })?;

        // The reader owns the connection and is dropped on every path out of this function.
        // A body shorter than its Content-Length surfaces here as an I/O error.
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| InstallError::ResponseRead {
                url: url.to_string(),
                source,
            })?;

        log_debug!("[Download] Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Expands the archive URL template.
///
/// `{owner}`, `{repo}`, `{version}`, `{arch}` and `{os}` are replaced verbatim in a
/// single pass over the template: no percent-encoding, no slash normalization, and
/// a substituted value is never scanned again, even if it contains braces.
/// Unknown `{...}` sequences are kept as they are.
pub fn build_download_url(
    template: &str,
    owner: &str,
    repo: &str,
    version: &str,
    arch: &str,
    os_suffix: &str,
) -> String {
    let placeholders = [
        ("{owner}", owner),
        ("{repo}", repo),
        ("{version}", version),
        ("{arch}", arch),
        ("{os}", os_suffix),
    ];

    let mut url = String::with_capacity(template.len() + 64);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        url.push_str(&rest[..start]);
        let tail = &rest[start..];
        match placeholders.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                url.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                url.push('{');
                rest = &tail[1..];
            }
        }
    }
    url.push_str(rest);
    url
}
