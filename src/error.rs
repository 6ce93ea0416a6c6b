use thiserror::Error;

/// Possible error types while talking to Zoom.
///
/// `Display` on each variant yields the same text the caller would have
/// received in place of a value: the raw transport error, or `"<error> (<reason>)"`
/// for errors reported by the token endpoint.
#[derive(Debug, Error)]
pub enum ZoomError {
    /// The client was constructed with missing or malformed settings.
    #[error("invalid Zoom configuration: {0}")]
    Config(String),
    /// The request never produced a response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The token endpoint answered with an `error` field.
    #[error("{error} ({reason})")]
    Vendor { error: String, reason: String },
    /// A JSON document could not be read into a typed view.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

pub type ZoomResult<T> = Result<T, ZoomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_error_formats_like_zoom_message() {
        let err = ZoomError::Vendor {
            error: "invalid_grant".to_string(),
            reason: "bad code".to_string(),
        };
        assert_eq!(err.to_string(), "invalid_grant (bad code)");
    }

    #[test]
    fn config_error_names_the_problem() {
        let err = ZoomError::Config("client_id must be set".to_string());
        assert_eq!(
            err.to_string(),
            "invalid Zoom configuration: client_id must be set"
        );
    }
}
