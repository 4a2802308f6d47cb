// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

//! Framework-agnostic client core for Domain Tunnel Manager
//!
//! This crate contains the shared state management and data models that
//! GUI front-ends sit on top of.

pub mod store;
pub mod view_models;

// Re-export commonly used types
pub use store::{ListenerId, TunnelStore};
pub use view_models::{create_tunnel_view_models, TunnelViewModel};

// Re-export types from common crate for convenience
pub use domain_tunnel_common::{ProxyClient, ProxyClientConfig, Tunnel};
