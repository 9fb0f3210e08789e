//! HTTP Transport
//!
//! `RouteTransport` over reqwest. On wasm32 reqwest drives the browser's
//! fetch, natively it uses hyper; the request shapes are identical.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    decode_lookup, decode_response, AccountLookup, FinalizeRequest, HeaderProvider, ReadingAccepted,
    ReadingRequest, RouteFinalized, RouteTransport,
};
use crate::config::RouteConfig;
use crate::error::TransportError;

pub struct HttpTransport<H> {
    client: reqwest::Client,
    config: RouteConfig,
    headers: H,
}

impl<H: HeaderProvider> HttpTransport<H> {
    pub fn new(config: RouteConfig, headers: H) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            headers,
        }
    }

    /// POST a JSON body with the content-type and forgery-token headers
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);

        match self.headers.csrf_token(&self.config.csrf_cookie) {
            Some(token) => request = request.header(self.config.csrf_header.as_str(), token),
            None => log::warn!("[TRANSPORT] no '{}' cookie, sending {} without token", self.config.csrf_cookie, url),
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        log::debug!("[TRANSPORT] POST {} -> {}", url, status);
        decode_response(status, &text)
    }
}

#[async_trait(?Send)]
impl<H: HeaderProvider> RouteTransport for HttpTransport<H> {
    async fn submit_reading(&self, account_id: &str, reading_value: &str) -> Result<ReadingAccepted, TransportError> {
        let body = ReadingRequest {
            account_id,
            reading_value,
        };
        self.post_json(&self.config.reading_path, &body).await
    }

    async fn finalize_route(&self, route_id: &str) -> Result<RouteFinalized, TransportError> {
        self.post_json(&self.config.finalize_path, &FinalizeRequest { route_id })
            .await
    }

    async fn lookup_account(&self, contract: &str) -> Result<AccountLookup, TransportError> {
        let url = self.config.endpoint(&self.config.lookup_path);
        let response = self
            .client
            .get(&url)
            .query(&[("contrato", contract)])
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        log::debug!("[TRANSPORT] GET {}?contrato={} -> {}", url, contract, status);
        decode_lookup(status, &text)
    }
}
