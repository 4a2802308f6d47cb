// Common types for Domain Tunnel Manager

use serde::{Deserialize, Serialize};

/// A domain forwarding rule managed by the proxy server
///
/// The server matches incoming requests on `domain_from` and forwards them
/// to `domain_to`. The id is assigned by the server on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tunnel {
    pub id: i64,
    pub domain_from: String,
    pub domain_to: String,
}

/// Request body for creating a tunnel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTunnelRequest {
    pub from: String,
    pub to: String,
}

/// Request body for deleting a tunnel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTunnelRequest {
    pub id: i64,
}
