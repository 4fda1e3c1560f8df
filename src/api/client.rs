//! HTTP Client
//!
//! Thin JSON-over-HTTP wrapper around the backend base URL. No retries, no
//! caching, no auth headers; concurrent GETs on one path are deduplicated.

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::inflight::InFlight;

/// Characters left readable in path segments (ids are UUIDs)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode one path segment
pub fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// API client for the parking backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    inflight: InFlight<Result<String, ApiError>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            inflight: InFlight::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[Api] GET {}", path);
        let body = self
            .inflight
            .run(path, move || async move {
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                read_body(response).await
            })
            .await?;
        let value = decode(&body)?;
        log::info!("[Api] GET {} ok", path);
        Ok(value)
    }

    /// POST `body` as JSON to `path` and decode the JSON answer
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        log::debug!("[Api] POST {}", path);
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = read_body(response).await?;
        let value = decode(&text)?;
        log::info!("[Api] POST {} ok", path);
        Ok(value)
    }

    /// POST with an empty JSON object, ignoring the answer body
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        log::debug!("[Api] POST {}", path);
        let request = Request::post(&self.url(path))
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await?;
        log::info!("[Api] POST {} ok", path);
        Ok(())
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response_ok(status) {
        Ok(text)
    } else {
        let err = ApiError::from_response(status, &text);
        log::warn!("[Api] Request failed with {}: {}", status, err.code_label());
        Err(err)
    }
}

fn response_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorCode;
    use crate::api::ParkingsEnvelope;

    #[test]
    fn test_segment_keeps_uuid_readable() {
        assert_eq!(segment("c8157290-8740-4b5a-b2e4-616c5ef8cfe8"), "c8157290-8740-4b5a-b2e4-616c5ef8cfe8");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(client.url("/parkings"), "http://localhost:8000/api/parkings");
    }

    #[test]
    fn test_decode_envelope_and_errors() {
        let parsed: ParkingsEnvelope = decode(r#"{"parkings":[]}"#).unwrap();
        assert!(parsed.parkings.is_empty());

        let err = decode::<ParkingsEnvelope>(r#"{"cars":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(response_ok(201));
        assert!(!response_ok(404));
        assert_eq!(
            ApiError::from_response(404, r#"{"message":"CAR_NOT_FOUND"}"#).code(),
            Some(&ErrorCode::CarNotFound)
        );
    }
}
