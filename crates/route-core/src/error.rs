//! Error Taxonomy
//!
//! Validation errors never reach the network, transport errors are caught
//! at the client boundary, and state errors are rejected transitions that
//! the UI prevents by disabling controls.

use thiserror::Error;

/// Common result type for route operations
pub type RouteResult<T> = Result<T, RouteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response carrying a JSON body; `message` is its `error` field
    #[error("server rejected request with status {status}")]
    Server { status: u16, message: Option<String> },

    /// Body could not be parsed as the expected JSON
    #[error("malformed response (status {status}): {reason}")]
    Malformed { status: u16, reason: String },
}

impl TransportError {
    /// Server-provided error text, when there is one worth showing verbatim
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Server { message: Some(m), .. } if !m.is_empty() => Some(m.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid transition: {0}")]
    State(String),
}

impl RouteError {
    /// Text shown to the user; unclassified failures fall back to `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            RouteError::Validation(msg) => msg.clone(),
            RouteError::Transport(err) => err.server_message().unwrap_or(fallback).to_string(),
            RouteError::State(_) => fallback.to_string(),
        }
    }

    pub fn is_state(&self) -> bool {
        matches!(self, RouteError::State(_))
    }
}
