use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum LinkcasterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

impl LinkcasterError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

pub type Result<T> = std::result::Result<T, LinkcasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_429_is_rate_limited() {
        let err = LinkcasterError::Api {
            status: 429,
            message: "Too Many Requests".into(),
        };
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_other_errors_are_not_rate_limited() {
        let err = LinkcasterError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_rate_limited());
        assert!(!LinkcasterError::Other("x".into()).is_rate_limited());
        assert_eq!(LinkcasterError::MissingCredential("SERPAPI_KEY").status(), None);
    }

    #[test]
    fn test_missing_credential_message() {
        let err = LinkcasterError::MissingCredential("FIRECRAWL_KEY");
        assert_eq!(err.to_string(), "Missing credential: FIRECRAWL_KEY is not set");
    }
}
