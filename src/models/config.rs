//! Import configuration.
use crate::models::Afi;

/// Restricts which route families an import accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressFamilyMode {
    /// Accept both families; each route is tagged by the family of its address.
    #[default]
    Auto,
    Ipv4Only,
    Ipv6Only,
}

impl AddressFamilyMode {
    pub fn accepts(&self, afi: Afi) -> bool {
        match self {
            AddressFamilyMode::Auto => true,
            AddressFamilyMode::Ipv4Only => afi == Afi::Ipv4,
            AddressFamilyMode::Ipv6Only => afi == Afi::Ipv6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PeerAsType {
    #[default]
    Ebgp,
    Ibgp,
}

/// A test peer that will receive the imported routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPeer {
    pub name: String,
    pub as_type: PeerAsType,
}

impl TargetPeer {
    pub fn new(name: impl Into<String>, as_type: PeerAsType) -> Self {
        TargetPeer {
            name: name.into(),
            as_type,
        }
    }

    pub fn is_ebgp(&self) -> bool {
        self.as_type == PeerAsType::Ebgp
    }
}

/// Options controlling one import.
///
/// Exactly one target peer must be configured across both families. When both lists carry a
/// peer, the IPv4 peer is the one that receives the routes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportConfig {
    pub address_family: AddressFamilyMode,
    /// Only import lines marked best (`>`).
    pub best_routes_only: bool,
    /// Keep the next hop from the table instead of delegating to the test peer.
    pub retain_next_hop: bool,
    /// Process candidates in row order on the calling thread.
    pub sequential: bool,
    pub name_prefix: String,
    pub target_v4_peers: Vec<TargetPeer>,
    pub target_v6_peers: Vec<TargetPeer>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            address_family: AddressFamilyMode::Auto,
            best_routes_only: false,
            retain_next_hop: false,
            sequential: false,
            name_prefix: "route".to_string(),
            target_v4_peers: vec![],
            target_v6_peers: vec![],
        }
    }
}

impl ImportConfig {
    pub fn with_address_family(mut self, mode: AddressFamilyMode) -> Self {
        self.address_family = mode;
        self
    }

    pub fn with_best_routes_only(mut self, best_routes_only: bool) -> Self {
        self.best_routes_only = best_routes_only;
        self
    }

    pub fn with_retain_next_hop(mut self, retain_next_hop: bool) -> Self {
        self.retain_next_hop = retain_next_hop;
        self
    }

    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn with_name_prefix(mut self, name_prefix: impl Into<String>) -> Self {
        self.name_prefix = name_prefix.into();
        self
    }

    pub fn with_v4_peer(mut self, peer: TargetPeer) -> Self {
        self.target_v4_peers.push(peer);
        self
    }

    pub fn with_v6_peer(mut self, peer: TargetPeer) -> Self {
        self.target_v6_peers.push(peer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_family_mode() {
        assert!(AddressFamilyMode::Auto.accepts(Afi::Ipv4));
        assert!(AddressFamilyMode::Auto.accepts(Afi::Ipv6));
        assert!(AddressFamilyMode::Ipv4Only.accepts(Afi::Ipv4));
        assert!(!AddressFamilyMode::Ipv4Only.accepts(Afi::Ipv6));
        assert!(!AddressFamilyMode::Ipv6Only.accepts(Afi::Ipv4));
    }

    #[test]
    fn test_builder() {
        let config = ImportConfig::default()
            .with_best_routes_only(true)
            .with_name_prefix("r")
            .with_v4_peer(TargetPeer::new("peer1", PeerAsType::Ibgp));
        assert!(config.best_routes_only);
        assert!(!config.retain_next_hop);
        assert_eq!(config.name_prefix, "r");
        assert_eq!(config.target_v4_peers.len(), 1);
        assert!(!config.target_v4_peers[0].is_ebgp());
        assert!(config.target_v6_peers.is_empty());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_config_serde_defaults() {
        let config: ImportConfig = serde_json::from_str(r#"{"best_routes_only": true}"#).unwrap();
        assert!(config.best_routes_only);
        assert_eq!(config.name_prefix, "route");
        assert_eq!(config.address_family, AddressFamilyMode::Auto);
    }
}
