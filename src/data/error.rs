//! Errors raised while talking to the sample store.

/// Failure of a single request against the sample store.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store answered with a non-success status.
    #[error("Store rejected the request (HTTP {status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { status: u16, message: Option<String> },

    /// The worker thread running the request stopped without a result.
    #[error("Request worker stopped before producing a result")]
    WorkerLost,
}

impl ApiError {
    /// The human-readable message supplied by the store, if it rejected the request
    /// and included one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// True when the store answered. False for transport and decoding failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_exposes_server_message() {
        let err = ApiError::Rejected { status: 409, message: Some("Sample exists".into()) };
        assert!(err.is_rejection());
        assert_eq!(err.server_message(), Some("Sample exists"));
        assert_eq!(err.to_string(), "Store rejected the request (HTTP 409): Sample exists");
    }

    #[test]
    fn empty_server_message_counts_as_missing() {
        let err = ApiError::Rejected { status: 500, message: Some(String::new()) };
        assert_eq!(err.server_message(), None);
        assert_eq!(
            ApiError::Rejected { status: 500, message: None }.to_string(),
            "Store rejected the request (HTTP 500)"
        );
    }

    #[test]
    fn decode_failure_has_no_server_message() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(!err.is_rejection());
        assert_eq!(err.server_message(), None);
    }
}
