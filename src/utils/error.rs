use thiserror::Error;

#[derive(Error, Debug)]
pub enum GmapsError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrlError(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Redirect from {url} (HTTP {status}) has an unreadable Location header")]
    MissingRedirectTarget { url: String, status: u16 },

    #[error("Browser error: {message}")]
    BrowserError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Input,
    Browser,
    Config,
    Internal,
}

impl GmapsError {
    pub fn browser(message: impl std::fmt::Display) -> Self {
        GmapsError::BrowserError {
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GmapsError::HttpError(_) | GmapsError::MissingRedirectTarget { .. } => {
                ErrorCategory::Network
            }
            GmapsError::InvalidUrlError(_) => ErrorCategory::Input,
            GmapsError::BrowserError { .. } => ErrorCategory::Browser,
            GmapsError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            GmapsError::SerializationError(_) => ErrorCategory::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, GmapsError>;
