//! Release endpoint client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{UpdateError, UpdateResult};
use crate::version::{VersionComparison, compare_versions};

/// Endpoint answering with the latest published release.
pub const RELEASE_URL: &str =
    "https://api.github.com/repos/dongle-dev/dongle/releases/latest";

/// Whole-check time budget. The picker never waits on this; it only bounds
/// how long the background task may hold a connection open.
pub const CHECK_TIMEOUT: Duration = Duration::from_millis(1_500);

/// Latest-release document, reduced to the field we consume.
#[derive(Debug, Clone, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Client for the release endpoint.
#[derive(Debug, Clone)]
pub struct UpdateChecker {
    client: Client,
    url: String,
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateChecker {
    /// Creates a checker against the default endpoint.
    pub fn new() -> Self {
        Self::with_url(RELEASE_URL.to_string())
    }

    /// Creates a checker against a custom endpoint.
    pub fn with_url(url: String) -> Self {
        let client = Client::builder()
            .timeout(CHECK_TIMEOUT)
            .user_agent(concat!("dongle/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, url }
    }

    /// Fetches the latest published version string.
    pub async fn latest_version(&self) -> UpdateResult<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| UpdateError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::ServerError(status.as_u16()));
        }

        let release: LatestRelease = response
            .json()
            .await
            .map_err(|e| UpdateError::MalformedResponse(e.to_string()))?;

        Ok(release.tag_name)
    }
}

/// Checks whether a release newer than `current` exists.
///
/// Returns the newer version string, or `None` both when up to date and on
/// any failure; the distinction never matters to the caller.
pub async fn check_for_update(current: &str) -> Option<String> {
    let checker = UpdateChecker::new();
    match checker.latest_version().await {
        Ok(latest) => {
            if compare_versions(current, &latest) == VersionComparison::Older {
                Some(latest)
            } else {
                None
            }
        }
        Err(err) => {
            tracing::debug!("update check failed: {err}");
            None
        }
    }
}
