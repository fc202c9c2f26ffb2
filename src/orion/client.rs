use std::time::Duration;

use reqwest::header::ACCEPT;

use super::entity::EntitySnapshot;
use crate::config::OrionConfig;

/// NGSI-LD responses are requested as JSON-LD
pub const NGSI_LD_ACCEPT: &str = "application/ld+json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for reading the monitored entity from the context broker
#[derive(Debug, Clone)]
pub struct OrionClient {
    http_client: reqwest::Client,
    url: String,
}

impl OrionClient {
    pub fn new(config: &OrionConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: &OrionConfig, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            url: config.entity_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the entity, logging and swallowing any failure.
    /// `None` means there is no data for this cycle.
    pub async fn fetch(&self) -> Option<EntitySnapshot> {
        tracing::info!("[-] Fetching data from: {}", self.url);

        match self.try_fetch().await {
            Ok(snapshot) => {
                tracing::info!(attributes = snapshot.len(), "[+] Orion Data Received.");
                Some(snapshot)
            }
            Err(e) => {
                tracing::error!("[!] ORION FAILED: {}", e);
                None
            }
        }
    }

    /// Fetch the entity
    pub async fn try_fetch(&self) -> Result<EntitySnapshot, FetchError> {
        let response = self
            .http_client
            .get(&self.url)
            .header(ACCEPT, NGSI_LD_ACCEPT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        EntitySnapshot::from_json(json)
            .ok_or_else(|| FetchError::Decode("entity body is not a JSON object".to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Broker returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid entity body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_server, Hits};
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    const ENTITY: &str = "urn:ngsi-ld:WasteContainer:001";

    fn config_for(addr: std::net::SocketAddr) -> OrionConfig {
        OrionConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
            entity_id: ENTITY.to_string(),
        }
    }

    async fn entity_handler(
        Path(id): Path<String>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, StatusCode> {
        if headers.get("accept").and_then(|v| v.to_str().ok()) != Some(NGSI_LD_ACCEPT) {
            return Err(StatusCode::NOT_ACCEPTABLE);
        }
        Ok(Json(json!({
            "id": id,
            "type": "WasteContainer",
            "fillingLevel": {"type": "Property", "value": 92},
        })))
    }

    #[test]
    fn test_entity_url() {
        let config = OrionConfig {
            host: "172.21.32.104".to_string(),
            port: 1026,
            entity_id: ENTITY.to_string(),
        };
        let client = OrionClient::new(&config).unwrap();
        assert_eq!(
            client.url(),
            "http://172.21.32.104:1026/ngsi-ld/v1/entities/urn:ngsi-ld:WasteContainer:001"
        );
    }

    #[tokio::test]
    async fn test_fetch_entity() {
        let router = Router::new().route("/ngsi-ld/v1/entities/:id", get(entity_handler));
        let addr = spawn_server(router).await;

        let client = OrionClient::new(&config_for(addr)).unwrap();
        let snapshot = client.fetch().await.expect("entity should be returned");

        assert_eq!(snapshot.display("id"), ENTITY);
        assert_eq!(snapshot.display("fillingLevel"), "92");
    }

    #[tokio::test]
    async fn test_server_error_is_no_data() {
        let hits = Hits::default();
        let router = Router::new()
            .route(
                "/ngsi-ld/v1/entities/:id",
                get(|State(hits): State<Hits>| async move {
                    hits.record();
                    (StatusCode::INTERNAL_SERVER_ERROR, "broker exploded")
                }),
            )
            .with_state(hits.clone());
        let addr = spawn_server(router).await;
        let client = OrionClient::new(&config_for(addr)).unwrap();

        match client.try_fetch().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "broker exploded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(client.fetch().await.is_none());
        assert_eq!(hits.count(), 2);
    }

    #[tokio::test]
    async fn test_timeout_is_no_data() {
        let router = Router::new().route(
            "/ngsi-ld/v1/entities/:id",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let addr = spawn_server(router).await;
        let client =
            OrionClient::with_timeout(&config_for(addr), Duration::from_millis(100)).unwrap();

        assert!(matches!(client.try_fetch().await, Err(FetchError::Timeout)));
        assert!(client.fetch().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_broker_is_no_data() {
        // Bind and drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OrionClient::new(&config_for(addr)).unwrap();
        assert!(matches!(
            client.try_fetch().await,
            Err(FetchError::Network(_))
        ));
        assert!(client.fetch().await.is_none());
    }

    #[tokio::test]
    async fn test_non_object_body_is_no_data() {
        let router = Router::new().route(
            "/ngsi-ld/v1/entities/:id",
            get(|| async { Json(json!(["not", "an", "entity"])) }),
        );
        let addr = spawn_server(router).await;
        let client = OrionClient::new(&config_for(addr)).unwrap();

        assert!(matches!(client.try_fetch().await, Err(FetchError::Decode(_))));
        assert!(client.fetch().await.is_none());
    }
}
