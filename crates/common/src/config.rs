// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

// Domain Tunnel Manager - Client Configuration
// Where to find the proxy server's management API

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the full API base URL
pub const API_URL_ENV: &str = "TUNNEL_API_URL";

/// Connection mode for client to proxy server communication
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionMode {
    /// HTTP (localhost deployments, no TLS)
    Http,
    /// HTTPS with TLS
    Https,
}

impl Default for ConnectionMode {
    fn default() -> Self {
        ConnectionMode::Http
    }
}

/// Client configuration for connecting to the proxy server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyClientConfig {
    /// Connection mode (Http or Https)
    #[serde(default)]
    pub connection_mode: ConnectionMode,

    /// Proxy server host (e.g., "main.localhost" or "192.168.1.100")
    #[serde(default = "default_server_host")]
    pub server_host: String,

    /// Proxy server port
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    /// Full base URL override; takes precedence over mode/host/port when set
    #[serde(default)]
    pub server_url: String,
}

fn default_server_host() -> String {
    "main.localhost".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for ProxyClientConfig {
    fn default() -> Self {
        Self {
            connection_mode: ConnectionMode::default(),
            server_host: default_server_host(),
            server_port: default_server_port(),
            server_url: String::new(),
        }
    }
}

impl ProxyClientConfig {
    /// Get the API base URL
    /// Constructs the full URL with protocol (http:// or https://) from
    /// connection_mode, unless an explicit server_url override is set
    pub fn base_url(&self) -> String {
        let trimmed = self.server_url.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }

        match self.connection_mode {
            ConnectionMode::Http => format!("http://{}:{}", self.server_host, self.server_port),
            ConnectionMode::Https => format!("https://{}:{}", self.server_host, self.server_port),
        }
    }

    /// Get the path to the client configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("domain-tunnel-manager").join("client.toml"))
    }

    /// Load client configuration from file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Return default config if file doesn't exist
            debug!("No client config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Load client configuration, applying the TUNNEL_API_URL environment
    /// variable as a server_url override
    pub fn from_env() -> Result<Self> {
        let mut config = Self::load()?;

        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("Using API base URL from {}", API_URL_ENV);
                config.server_url = url;
            }
        }

        Ok(config)
    }
}
