use async_trait::async_trait;
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// A single HTTP exchange, described independently of the client that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post(url: Url, body: Value) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    pub fn put(url: Url, body: Value) -> Self {
        Self {
            method: Method::PUT,
            url,
            body: Some(body),
        }
    }
}

/// Sends requests and hands back the JSON body of a successful response.
///
/// Decoding into concrete types is left to the caller so that one transport
/// serves both the library backend and Google Books.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, request.url.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: response.status(),
                url: request.url,
            });
        }

        let body = response.bytes().await?;
        let raw = serde_json::from_slice::<Value>(&body)?;
        debug!("Raw result {:?}", raw);

        Ok(raw)
    }
}
