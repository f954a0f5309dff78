//! HTTP access to the task API.
//!
//! [`ApiClient`] resolves relative paths against the configured base address
//! and hands each request to an [`HttpTransport`]. A client built with a
//! credential store attaches the session token as a bearer header on every
//! request; the plain one never does and is used for login and registration.

use crate::credentials::CredentialStore;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status { status: StatusCode, body: Value },
    /// A 2xx body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error body, when the server sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } if !body.is_null() => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: Option<Value>,
}

/// Status and JSON body of a response; the body is `Null` when empty or not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Successful, decoded response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

/// Executes one request. Non-2xx statuses are returned, not raised.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Production transport backed by `reqwest` (fetch on wasm32).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let ApiRequest {
            method,
            url,
            bearer_token,
            body,
        } = request;

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        builder = builder.header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(payload) = body {
            builder = builder.json(&payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(RawResponse { status, body })
    }
}

/// Client for one base address, optionally carrying the session token.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    credentials: Option<Rc<dyn CredentialStore>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client that never sends credentials.
    pub fn new(base_url: &str, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            credentials: None,
        }
    }

    /// Client that reads `credentials` before every request and attaches the
    /// token as `Authorization: Bearer <token>` when one is present.
    pub fn with_credentials(
        base_url: &str,
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            credentials: Some(credentials),
            ..Self::new(base_url, transport)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(payload)?;
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(payload)?;
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let request = ApiRequest {
            method,
            url: self.api_url(path),
            bearer_token: self
                .credentials
                .as_ref()
                .and_then(|credentials| credentials.token()),
            body,
        };

        let RawResponse { status, body } = self.transport.execute(request).await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        let data = serde_json::from_value(body)?;
        Ok(ApiResponse { status, data })
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
