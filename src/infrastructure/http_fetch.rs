// JSON-over-HTTP fetch helper
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not the expected JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    #[cfg(test)]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// No timeout unless the caller supplies one.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }

    /// GET `url` and decode the body as `T`. Non-2xx statuses are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_router};
    use axum::{http::StatusCode as AxumStatus, routing::get, Json, Router};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Health {
        ok: bool,
    }

    async fn base() -> String {
        let router = Router::new()
            .route("/ok", get(|| async { Json(json!({"ok": true})) }))
            .route(
                "/boom",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, Json(json!({"ok": false}))) }),
            )
            .route("/text", get(|| async { "not json" }));
        spawn_router(router).await
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let base = base().await;
        let health: Health = HttpFetcher::default()
            .get_json(&format!("{}/ok", base))
            .await
            .unwrap();
        assert_eq!(health, Health { ok: true });
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let base = base().await;
        let err = HttpFetcher::default()
            .get_json::<Health>(&format!("{}/boom", base))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_invalid_body_is_a_decode_error() {
        let base = base().await;
        let err = HttpFetcher::default()
            .get_json::<Health>(&format!("{}/text", base))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let url = format!("{}/ok", closed_port_url().await);
        let err = HttpFetcher::default().get_json::<Health>(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
        assert_eq!(err.status(), None);
    }
}
