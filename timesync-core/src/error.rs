use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Fallback shown when a transport failure carries no usable message.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    /// A page element or token the operation depends on is absent.
    #[error("{0}")]
    MissingPrerequisite(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl AppError {
    /// Text suitable for an alert box.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingPrerequisite(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Transport(_) | AppError::Decode(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            AppError::Render(msg) => msg.clone(),
            AppError::ConfigError(err) => err.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// JSON error body returned by the backend: `{"error": ...}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(BTreeMap<String, FieldMessages>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Parses a raw response body, tolerating non-JSON payloads.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Flattens the error into newline-separated lines.
    /// Returns `None` when the body carries no message.
    pub fn message(&self) -> Option<String> {
        let message = match self.error.as_ref()? {
            ErrorDetail::Message(msg) => msg.clone(),
            ErrorDetail::Fields(fields) => fields
                .values()
                .flat_map(|messages| match messages {
                    FieldMessages::One(msg) => vec![msg.as_str()],
                    FieldMessages::Many(msgs) => msgs.iter().map(String::as_str).collect(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };

        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}
