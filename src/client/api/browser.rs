use reqwasm::http::Request;

use crate::client::{
    api::{ApiRequest, ApiResponse, ApiTransport, Method},
    error::ClientError,
};

/// Transport using the browser's `fetch` through `reqwasm`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTransport;

impl ApiTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Accept", "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
