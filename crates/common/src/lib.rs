// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

// Domain Tunnel Manager - Common Library
// Shared types, configuration, and the proxy server API client

pub mod config;
pub mod error;
pub mod proxy_client;
pub mod types;

pub use config::{ConnectionMode, ProxyClientConfig};
pub use error::{Error, Result};
pub use proxy_client::ProxyClient;
pub use types::{AddTunnelRequest, DeleteTunnelRequest, Tunnel};
