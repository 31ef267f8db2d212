//! Error types for the release check.

/// Result type alias for update operations.
pub type UpdateResult<T> = std::result::Result<T, UpdateError>;

/// Errors that can occur while checking for a newer release.
///
/// These never escape to the interactive session; callers collapse them into
/// "no banner".
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Could not reach the release endpoint.
    #[error("Failed to contact release endpoint: {0}")]
    ConnectionFailed(String),

    /// The endpoint answered with a non-success status.
    #[error("Release endpoint returned HTTP {0}")]
    ServerError(u16),

    /// The response body was not the expected release document.
    #[error("Malformed release response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpdateError::ServerError(503);
        assert!(err.to_string().contains("503"));
    }
}
