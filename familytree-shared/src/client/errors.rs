use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by [`ApiClient`](super::ApiClient) and the binder.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status. The message is the raw
    /// response body.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response carried a body that is not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A tree-scoped operation ran before any tree was selected.
    #[error("no tree selected")]
    NoTreeSelected,
}

impl ClientError {
    /// HTTP status of an [`Api`](Self::Api) error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_raw_message() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn no_tree_selected_has_no_status() {
        let err = ClientError::NoTreeSelected;
        assert_eq!(err.to_string(), "no tree selected");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn invalid_url_converts_from_parse_error() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let err = ClientError::from(parse_error);
        assert!(matches!(err, ClientError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("invalid base URL"));
    }
}
