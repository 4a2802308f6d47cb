// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

//! Observable tunnel store
//!
//! Mirrors the server's tunnel list locally and re-syncs after mutations.
//! Each operation awaits the network call, then patches local state and
//! notifies subscribers synchronously on the calling task. The store is
//! single-threaded: no borrow is held across an await point, and listeners
//! run on whatever task invoked the mutation.

use std::cell::{Cell, RefCell};

use anyhow::{Context, Result};
use tracing::debug;

use domain_tunnel_common::{ProxyClient, Tunnel};

/// Handle returned by [`TunnelStore::subscribe`], used to unsubscribe
pub type ListenerId = u64;

type Listener = Box<dyn Fn(&[Tunnel])>;

/// Observable mutable list of tunnels, kept in sync with the proxy server
///
/// Built by an explicit constructor; the owning application triggers the
/// initial [`load`](TunnelStore::load) at its own initialization point.
/// Multiple independent instances are possible.
pub struct TunnelStore {
    client: ProxyClient,
    tunnels: RefCell<Vec<Tunnel>>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener_id: Cell<ListenerId>,
}

impl TunnelStore {
    /// Create a store with an empty collection
    pub fn new(client: ProxyClient) -> Self {
        Self {
            client,
            tunnels: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    /// Register a listener called after every completed mutation
    ///
    /// Listeners are invoked in subscription order with the post-mutation
    /// collection. They must not subscribe or unsubscribe from inside a
    /// notification.
    pub fn subscribe(&self, listener: impl Fn(&[Tunnel]) + 'static) -> ListenerId {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; unknown ids are a no-op
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    /// Get a copy of the current collection
    pub fn snapshot(&self) -> Vec<Tunnel> {
        self.tunnels.borrow().clone()
    }

    /// Apply a mutation, then notify listeners
    fn set_state(&self, mutate: impl FnOnce(&mut Vec<Tunnel>)) {
        mutate(&mut self.tunnels.borrow_mut());

        let current = self.tunnels.borrow();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(&current);
        }
    }

    /// Replace the local collection with the server's list
    ///
    /// Overlapping calls are not de-duplicated: two concurrent loads race
    /// and the later response to settle wins.
    pub async fn load(&self) -> Result<()> {
        let tunnels = self
            .client
            .list_tunnels()
            .await
            .context("Failed to load tunnels from server")?;

        debug!("Loaded {} tunnels", tunnels.len());
        self.set_state(|current| *current = tunnels);
        Ok(())
    }

    /// Create a tunnel on the server, then append it locally
    pub async fn add(&self, from: &str, to: &str) -> Result<()> {
        let id = self
            .client
            .add_tunnel(from, to)
            .await
            .context("Failed to create tunnel on server")?;

        self.set_state(|tunnels| {
            tunnels.push(Tunnel {
                id,
                domain_from: from.to_string(),
                domain_to: to.to_string(),
            })
        });
        Ok(())
    }

    /// Delete a tunnel on the server, then drop it locally
    ///
    /// Local removal happens once the request completes, regardless of the
    /// server-reported outcome. Every entry matching the id is dropped, so
    /// removing an already-removed id is a no-op.
    pub async fn remove(&self, tunnel: &Tunnel) -> Result<()> {
        self.client
            .delete_tunnel(tunnel)
            .await
            .context("Failed to delete tunnel on server")?;

        self.set_state(|tunnels| tunnels.retain(|t| t.id != tunnel.id));
        Ok(())
    }
}
