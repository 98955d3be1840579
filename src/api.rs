//! Backend API Client
//!
//! The two mini app endpoints. Both are JSON POSTs that carry the raw
//! Telegram init data in a custom header.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{self, INIT_DATA_HEADER, REGISTER_PATH, STATUS_PATH};
use crate::error::ApiError;
use crate::models::{RegisterRequest, RegisterResponse, StatusRequest, StatusResponse};

/// Fetch registration status and dashboard data
pub async fn fetch_status(init_data: &str) -> Result<StatusResponse, ApiError> {
    post_json(STATUS_PATH, init_data, &StatusRequest { init_data }).await
}

/// Register (or link) the current Telegram user
pub async fn register(init_data: &str, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    post_json(REGISTER_PATH, init_data, request).await
}

async fn post_json<B, T>(path: &str, init_data: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = config::endpoint(&config::backend_base_url(), path);
    log::debug!("[API] POST {}", url);

    let response = Request::post(&url)
        .header(INIT_DATA_HEADER, init_data)
        .json(body)?
        .send()
        .await?;

    let response = ensure_ok(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a non-2xx response into [`ApiError::Status`] with its body text
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("[API] Could not read error body for status {}: {}", status, e);
            String::new()
        }
    };
    log::error!("[API] HTTP error! Status: {} {}", status, body);
    Err(ApiError::Status { status, body })
}
