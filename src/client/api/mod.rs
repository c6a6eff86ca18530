//! Authenticated access to the REST API.
//!
//! [`ApiClient`] owns URL construction, bearer authentication, JSON encoding and the mapping
//! of non-success responses onto [`ClientError`]. The HTTP exchange itself is delegated to an
//! [`ApiTransport`], which is `reqwasm` in the browser and a recording mock under test.

#[cfg(feature = "web")]
mod browser;

#[cfg(feature = "web")]
pub use browser::BrowserTransport;

use std::fmt;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::ClientConfig, error::ClientError, session::Session},
    model::api::ErrorDto,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };

        f.write_str(method)
    }
}

/// A fully built request handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations return `Err(ClientError::Request)` only when no response was received;
/// any status code, success or not, comes back as `Ok(ApiResponse)`.
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// REST client for the console's API
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base: config.api_base.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an endpoint path such as `/freezers?page=0`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET` a JSON document as the session's viewer.
    pub async fn get<R: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<R, ClientError> {
        let response = self.send(Method::Get, path, Some(session), None).await?;

        decode(&response)
    }

    /// `POST` a JSON body and decode the JSON answer.
    ///
    /// Pass `None` for the session only for public endpoints such as the login route.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        session: Option<&Session>,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        let body = serde_json::to_string(body)?;
        let response = self.send(Method::Post, path, session, Some(body)).await?;

        decode(&response)
    }

    /// `PUT` an optional JSON body, ignoring the answer's content.
    pub async fn put<B: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        let body = body.map(serde_json::to_string).transpose()?;
        self.send(Method::Put, path, Some(session), body).await?;

        Ok(())
    }

    pub async fn delete(&self, session: &Session, path: &str) -> Result<(), ClientError> {
        self.send(Method::Delete, path, Some(session), None).await?;

        Ok(())
    }

    /// Sends a pre-encoded request and fails on any non-success status.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<String>,
    ) -> Result<ApiResponse, ClientError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: session.map(|session| session.token().to_string()),
            body,
        };

        tracing::debug!(method = %method, url = %request.url, "Sending API request");

        let response = self.transport.send(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(status_error(&response))
        }
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ClientError> {
    serde_json::from_str(&response.body).map_err(|e| ClientError::Parse(e.to_string()))
}

fn status_error(response: &ApiResponse) -> ClientError {
    let message = match serde_json::from_str::<ErrorDto>(&response.body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if response.body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => response.body.clone(),
    };

    ClientError::Status {
        status: response.status,
        message,
    }
}
