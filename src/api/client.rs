//! HTTP API Client
//!
//! Typed wrappers for the BrainHealth backend endpoints. Every call resolves
//! the configured base URL, performs the request with gloo-net, and maps the
//! outcome into the [`ApiError`] taxonomy: network-level failures are
//! `Unreachable` (and eligible for demo fallback), non-2xx responses carry
//! the server's message, and malformed bodies are `Decode`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::api::types::{
    AnalyticsRange, AnalyticsSnapshot, ChatReply, DetectionResult, EmailShareRequest, Hospital,
    ReportRequest, ShareLink, ShareRequest, WellnessTip,
};
use crate::config;

/// Failure of an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response at all: refused connection, DNS failure, offline.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// The server answered with a non-2xx status. The message is the
    /// server-provided one when present, else a generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A response arrived but its body was not the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Only unreachable failures trigger the demo fallback; server-reported
    /// errors are surfaced instead.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

/// Error body shapes the backend is known to produce.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail.or(body.error).or(body.message))
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    Err(ApiError::Status { status, message })
}

async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, ApiError> {
    let url = format!("{}{}", config::api_base(), path_and_query);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = post_raw(path, body).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_raw<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Response, ApiError> {
    let url = format!("{}{}", config::api_base(), path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;
    check_status(response).await
}

/// Fetch the analytics snapshot for a time range.
pub async fn fetch_analytics(range: AnalyticsRange) -> Result<AnalyticsSnapshot, ApiError> {
    get_json(&format!("/api/analytics?range={}", range.as_query())).await
}

/// Ask the chatbot a question.
pub async fn send_chat_message(message: &str) -> Result<ChatReply, ApiError> {
    #[derive(Serialize)]
    struct ChatRequest<'a> {
        message: &'a str,
    }

    post_json("/api/chat", &ChatRequest { message }).await
}

/// Upload a brain-scan image for analysis (multipart).
pub async fn detect_stroke(file: &File) -> Result<DetectionResult, ApiError> {
    let form = FormData::new()
        .map_err(|_| ApiError::Decode("could not build multipart form".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Decode("could not attach file to form".to_string()))?;

    let url = format!("{}/api/detect-stroke", config::api_base());
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Generate the medical PDF report. Returns the raw PDF bytes.
pub async fn generate_report(request: &ReportRequest) -> Result<Vec<u8>, ApiError> {
    let response = post_raw("/api/generate-report", request).await?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch nearby neurology hospitals.
pub async fn fetch_hospitals(lat: f64, lon: f64) -> Result<Vec<Hospital>, ApiError> {
    #[derive(serde::Deserialize)]
    struct HospitalsResponse {
        hospitals: Vec<Hospital>,
    }

    let response: HospitalsResponse =
        get_json(&format!("/api/hospitals?lat={}&lon={}", lat, lon)).await?;
    Ok(response.hospitals)
}

/// Create a fresh share link for a scan.
pub async fn generate_share_link(request: &ShareRequest) -> Result<ShareLink, ApiError> {
    post_json("/api/share/generate", request).await
}

/// Send share-link invitations by email.
pub async fn send_share_emails(request: &EmailShareRequest) -> Result<(), ApiError> {
    post_raw("/api/share/email", request).await?;
    Ok(())
}

/// Fetch a brain-health wellness tip.
pub async fn fetch_wellness_tip() -> Result<String, ApiError> {
    let tip: WellnessTip = get_json("/api/wellness-tip").await?;
    Ok(tip.tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Invalid file type. Please upload an image file (JPG, PNG).".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload an image file (JPG, PNG)."
        );
        assert!(!err.is_unreachable());
    }

    #[test]
    fn only_network_failures_are_unreachable() {
        assert!(ApiError::Unreachable("connection refused".to_string()).is_unreachable());
        assert!(!ApiError::Decode("truncated body".to_string()).is_unreachable());
    }

    #[test]
    fn error_body_prefers_fastapi_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "boom", "message": "other"}"#).unwrap();
        assert_eq!(
            body.detail.or(body.error).or(body.message).as_deref(),
            Some("boom")
        );
    }
}
