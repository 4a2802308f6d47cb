// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

//! API client for the proxy server's tunnel management endpoints
//!
//! Three operations against a configurable base URL: list, create, delete.
//! Each call performs exactly one outbound HTTP request; there are no
//! retries, timeouts, or cancellation.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ProxyClientConfig;
use crate::error::{Error, Result};
use crate::types::{AddTunnelRequest, DeleteTunnelRequest, Tunnel};

/// Client for tunnel record operations
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    pub config: ProxyClientConfig,
}

impl ProxyClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ProxyClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ProxyClientConfig) -> Result<Self> {
        // No request timeout: a hung request hangs its caller, matching the
        // sequential-awaited-call model the store is built on.
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Get the base URL for API requests
    fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// List all tunnel records
    ///
    /// Returns the server's array verbatim, order preserved.
    pub async fn list_tunnels(&self) -> Result<Vec<Tunnel>> {
        let url = format!("{}/api/", self.base_url());
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    /// Create a tunnel record, returning the server-assigned id
    pub async fn add_tunnel(&self, from: &str, to: &str) -> Result<i64> {
        let url = format!("{}/api/", self.base_url());
        debug!("POST {} ({} -> {})", url, from, to);

        let request = AddTunnelRequest {
            from: from.to_string(),
            to: to.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        // The response body is a bare JSON number
        let body = response.text().await?;
        let id: i64 = serde_json::from_str(body.trim())?;

        debug!("Server assigned tunnel id {}", id);
        Ok(id)
    }

    /// Delete a tunnel record
    ///
    /// The server's verdict is not inspected: a server-side failure (e.g.
    /// unknown id) is reported as success. Only a transport-level failure
    /// is an error.
    pub async fn delete_tunnel(&self, tunnel: &Tunnel) -> Result<()> {
        let url = format!("{}/api/delete/", self.base_url());
        debug!("POST {} (id {})", url, tunnel.id);

        let response = self
            .client
            .post(&url)
            .json(&DeleteTunnelRequest { id: tunnel.id })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                "Delete of tunnel {} returned {}, ignoring",
                tunnel.id,
                response.status()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{extract::State, Json, Router};
    use std::sync::{Arc, Mutex};

    async fn serve(app: Router) -> String {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> ProxyClient {
        let config = ProxyClientConfig {
            server_url: base_url,
            ..ProxyClientConfig::default()
        };
        ProxyClient::with_config(config).unwrap()
    }

    #[tokio::test]
    async fn list_tunnels_returns_server_order() {
        let app = Router::new().route(
            "/api/",
            get(|| async {
                Json(vec![
                    Tunnel {
                        id: 1,
                        domain_from: "a.com".to_string(),
                        domain_to: "b.com".to_string(),
                    },
                    Tunnel {
                        id: 7,
                        domain_from: "c.com".to_string(),
                        domain_to: "d.com".to_string(),
                    },
                ])
            }),
        );

        let client = client_for(serve(app).await);
        let tunnels = client.list_tunnels().await.unwrap();

        assert_eq!(tunnels.len(), 2);
        assert_eq!(tunnels[0].id, 1);
        assert_eq!(tunnels[0].domain_from, "a.com");
        assert_eq!(tunnels[1].id, 7);
        assert_eq!(tunnels[1].domain_to, "d.com");
    }

    #[tokio::test]
    async fn list_tunnels_fails_on_error_status() {
        let app = Router::new().route(
            "/api/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

        let client = client_for(serve(app).await);
        let err = client.list_tunnels().await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn add_tunnel_returns_new_id() {
        let app = Router::new().route(
            "/api/",
            post(|Json(req): Json<AddTunnelRequest>| async move {
                assert_eq!(req.from, "x.com");
                assert_eq!(req.to, "y.com");
                Json(42i64)
            }),
        );

        let client = client_for(serve(app).await);
        let id = client.add_tunnel("x.com", "y.com").await.unwrap();

        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn add_tunnel_fails_on_malformed_response() {
        let app = Router::new().route("/api/", post(|| async { "not a number" }));

        let client = client_for(serve(app).await);
        let err = client.add_tunnel("x.com", "y.com").await.unwrap_err();

        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn delete_tunnel_posts_id_and_ignores_server_verdict() {
        let received: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/api/delete/",
                post(
                    |State(received): State<Arc<Mutex<Vec<i64>>>>,
                     Json(req): Json<DeleteTunnelRequest>| async move {
                        received.lock().unwrap().push(req.id);
                        (StatusCode::INTERNAL_SERVER_ERROR, "no such tunnel")
                    },
                ),
            )
            .with_state(received.clone());

        let client = client_for(serve(app).await);
        let tunnel = Tunnel {
            id: 1,
            domain_from: "a.com".to_string(),
            domain_to: "b.com".to_string(),
        };

        // Server-side failure is not surfaced
        client.delete_tunnel(&tunnel).await.unwrap();

        assert_eq!(*received.lock().unwrap(), vec![1]);
    }
}
