use reqwest::header::InvalidHeaderValue;

/// Errors from composing or sending a generation request.
///
/// A response with a non-success status is not an error here; it is returned
/// to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum NovelAiApiError {
    #[error("api key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn display_request_error() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = NovelAiApiError::from(req_err);
        assert!(err.to_string().starts_with("HTTP request failed"));
    }

    #[test]
    fn display_invalid_api_key() {
        let header_err = HeaderValue::from_str("Bearer \n").unwrap_err();
        let err = NovelAiApiError::from(header_err);
        assert_eq!(err.to_string(), "api key is not a valid header value");
    }
}
