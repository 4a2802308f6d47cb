// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Domain Tunnel Manager Contributors

//! View models - Data structures prepared for UI display

use domain_tunnel_common::Tunnel;

/// Tunnel data prepared for UI display
#[derive(Debug, Clone)]
pub struct TunnelViewModel {
    pub id: i64,
    pub domain_from: String,
    pub domain_to: String,
    /// Preformatted route label, e.g. "a.com -> b.com"
    pub route: String,
}

impl TunnelViewModel {
    /// Create view model from a tunnel record
    pub fn from_tunnel(tunnel: &Tunnel) -> Self {
        Self {
            id: tunnel.id,
            domain_from: tunnel.domain_from.clone(),
            domain_to: tunnel.domain_to.clone(),
            route: format!("{} -> {}", tunnel.domain_from, tunnel.domain_to),
        }
    }
}

/// Create view models for all tunnels, preserving display order
pub fn create_tunnel_view_models(tunnels: &[Tunnel]) -> Vec<TunnelViewModel> {
    tunnels.iter().map(TunnelViewModel::from_tunnel).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label() {
        let tunnel = Tunnel {
            id: 1,
            domain_from: "a.com".to_string(),
            domain_to: "b.com".to_string(),
        };

        let vm = TunnelViewModel::from_tunnel(&tunnel);
        assert_eq!(vm.id, 1);
        assert_eq!(vm.route, "a.com -> b.com");
    }

    #[test]
    fn test_view_models_preserve_order() {
        let tunnels = vec![
            Tunnel {
                id: 2,
                domain_from: "c.com".to_string(),
                domain_to: "d.com".to_string(),
            },
            Tunnel {
                id: 1,
                domain_from: "a.com".to_string(),
                domain_to: "b.com".to_string(),
            },
        ];

        let vms = create_tunnel_view_models(&tunnels);
        assert_eq!(vms.len(), 2);
        assert_eq!(vms[0].id, 2);
        assert_eq!(vms[1].route, "a.com -> b.com");
    }
}
