// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscogsError>;

/// Errors returned by the Discogs client.
///
/// The first five variants map HTTP response statuses; the rest cover
/// failures where no response was received or decoded.
#[derive(Debug, Error)]
pub enum DiscogsError {
    #[error("authentication rejected: {message}")]
    Auth { message: String },

    #[error("bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },

    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    #[error("rate limited by server: {message}")]
    Throttled {
        message: String,
        /// Wait suggested by the `Retry-After` header, when the server sent one.
        retry_after: Option<Duration>,
    },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse error classification used to decide retryability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Auth,
    BadRequest,
    NotFound,
    Throttled,
    Server,
    Transport,
    Decode,
}

impl DiscogsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiscogsError::Auth { .. } => ErrorCategory::Auth,
            DiscogsError::BadRequest { .. } | DiscogsError::InvalidUrl(_) => {
                ErrorCategory::BadRequest
            }
            DiscogsError::NotFound { .. } => ErrorCategory::NotFound,
            DiscogsError::Throttled { .. } => ErrorCategory::Throttled,
            DiscogsError::Server { .. } => ErrorCategory::Server,
            DiscogsError::Transport(_) => ErrorCategory::Transport,
            DiscogsError::Decode(_) => ErrorCategory::Decode,
        }
    }

    /// Server-suggested wait attached to a throttling response.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            DiscogsError::Throttled { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown error category: {0}")]
pub struct ParseCategoryError(String);

impl std::str::FromStr for ErrorCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auth" => Ok(ErrorCategory::Auth),
            "bad_request" => Ok(ErrorCategory::BadRequest),
            "not_found" => Ok(ErrorCategory::NotFound),
            "throttled" => Ok(ErrorCategory::Throttled),
            "server" => Ok(ErrorCategory::Server),
            "transport" => Ok(ErrorCategory::Transport),
            "decode" => Ok(ErrorCategory::Decode),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::BadRequest => "bad_request",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Throttled => "throttled",
            ErrorCategory::Server => "server",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Decode => "decode",
        };
        f.write_str(name)
    }
}
