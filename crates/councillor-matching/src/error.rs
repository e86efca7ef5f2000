//! Error types for councillor matching.

/// Matching errors.
///
/// Every failure surfaces once to the immediate caller. Nothing in this
/// crate retries or downgrades an error to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    /// Network or connection failure reaching the classifier or the cache,
    /// including response bodies that could not be read or parsed.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Classification service answered with a non-success status.
    #[error("Error {status} occurred while getting {url}")]
    Upstream { status: u16, url: String },

    /// Cached ranking exists but does not decode to a list of scores.
    #[error("failed to decode cached ranking for category {category}: {message}")]
    CacheDecode { category: String, message: String },

    /// Caller supplied an argument outside the accepted domain.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl MatchingError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 1,
            Self::Config { .. } => 1,

            Self::Upstream { .. } => 3,

            Self::Transport { .. } => 5,

            Self::CacheDecode { .. } => 6,
        }
    }

    /// Whether the failure happened on the wire rather than in the data.
    ///
    /// Callers that want retries use this to decide; the crate itself never retries.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for MatchingError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type for matching operations.
pub type MatchingResult<T> = Result<T, MatchingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_matches_log_message() {
        let err = MatchingError::Upstream {
            status: 500,
            url: "http://classifier.local/report/123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error 500 occurred while getting http://classifier.local/report/123"
        );
    }

    #[test]
    fn test_exit_codes() {
        let invalid = MatchingError::InvalidArgument {
            message: "group size must be positive".to_string(),
        };
        let transport = MatchingError::Transport {
            message: "connection refused".to_string(),
        };
        let decode = MatchingError::CacheDecode {
            category: "roads".to_string(),
            message: "expected value".to_string(),
        };

        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(transport.exit_code(), 5);
        assert_eq!(decode.exit_code(), 6);
        assert!(transport.is_transport());
        assert!(!decode.is_transport());
    }
}
