//! Route Transport
//!
//! Outbound calls for the route page: two mutating endpoints (submit
//! reading, finalize route) and the contract lookup query. Calls are
//! fire-once; failures surface immediately and retries are user-initiated.

mod headers;
mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

pub use headers::{cookie_value, HeaderProvider};
pub use http::HttpTransport;

// ========================
// Wire Types
// ========================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest<'a> {
    pub account_id: &'a str,
    pub reading_value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest<'a> {
    pub route_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadingAccepted {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFinalized {
    pub message: String,
    #[serde(default, alias = "redirect")]
    pub redirect_url: Option<String>,
}

impl RouteFinalized {
    /// Redirect target; an empty string counts as absent
    pub fn redirect(&self) -> Option<&str> {
        self.redirect_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Result of a contract lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    Found { contract: String, name: String },
    NotFound,
}

#[derive(Debug, Deserialize)]
struct LookupBody {
    found: bool,
    #[serde(default)]
    contrato: Option<String>,
    #[serde(default)]
    nombre: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

// ========================
// Transport Trait
// ========================

/// Network operations used by the route controller.
///
/// Futures are not `Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait RouteTransport {
    async fn submit_reading(&self, account_id: &str, reading_value: &str) -> Result<ReadingAccepted, TransportError>;

    async fn finalize_route(&self, route_id: &str) -> Result<RouteFinalized, TransportError>;

    async fn lookup_account(&self, contract: &str) -> Result<AccountLookup, TransportError>;
}

// ========================
// Response Classification
// ========================

/// Turn a status code and raw body into a typed result.
///
/// Non-2xx bodies are still parsed as JSON so their `error` field can be
/// shown verbatim; anything unparseable is `Malformed`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, TransportError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| TransportError::Malformed {
            status,
            reason: e.to_string(),
        });
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Err(TransportError::Server {
            status,
            message: parsed.error,
        }),
        Err(e) => Err(TransportError::Malformed {
            status,
            reason: e.to_string(),
        }),
    }
}

pub(crate) fn decode_lookup(status: u16, body: &str) -> Result<AccountLookup, TransportError> {
    let parsed: LookupBody = decode_response(status, body)?;
    if !parsed.found {
        return Ok(AccountLookup::NotFound);
    }
    match (parsed.contrato, parsed.nombre) {
        (Some(contract), Some(name)) => Ok(AccountLookup::Found { contract, name }),
        _ => Err(TransportError::Malformed {
            status,
            reason: "found account without contrato/nombre".to_string(),
        }),
    }
}
