/*!
Destinations for imported routes.

An import hands each built [RouteRecord] to a [RouteSink] together with the target peer that
should advertise it. [RouteTable] is an in-memory sink that keeps per-peer route ranges split by
address family.
*/
use crate::models::*;
use std::collections::BTreeMap;

pub trait RouteSink {
    fn append_route(&mut self, peer: &TargetPeer, route: RouteRecord);
}

/// Collects routes without regard to the peer.
impl RouteSink for Vec<RouteRecord> {
    fn append_route(&mut self, _peer: &TargetPeer, route: RouteRecord) {
        self.push(route);
    }
}

/// Route ranges configured on one peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerRoutes {
    pub as_type: PeerAsType,
    pub v4_routes: Vec<RouteRecord>,
    pub v6_routes: Vec<RouteRecord>,
}

impl PeerRoutes {
    pub fn len(&self) -> usize {
        self.v4_routes.len() + self.v6_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All routes, IPv4 first.
    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.v4_routes.iter().chain(self.v6_routes.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteTable {
    peers: BTreeMap<String, PeerRoutes>,
}

impl RouteTable {
    pub fn new() -> Self {
        RouteTable::default()
    }

    pub fn peer(&self, name: &str) -> Option<&PeerRoutes> {
        self.peers.get(name)
    }

    pub fn peers(&self) -> impl Iterator<Item = (&String, &PeerRoutes)> {
        self.peers.iter()
    }

    /// Total number of routes across all peers.
    pub fn len(&self) -> usize {
        self.peers.values().map(PeerRoutes::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RouteSink for RouteTable {
    fn append_route(&mut self, peer: &TargetPeer, route: RouteRecord) {
        let entry = self
            .peers
            .entry(peer.name.clone())
            .or_insert_with(|| PeerRoutes {
                as_type: peer.as_type,
                ..Default::default()
            });
        match route.afi() {
            Afi::Ipv4 => entry.v4_routes.push(route),
            Afi::Ipv6 => entry.v6_routes.push(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::IpNet;
    use std::str::FromStr;

    fn record(name: &str, prefix: &str) -> RouteRecord {
        RouteRecord {
            name: name.to_string(),
            row: 0,
            prefix: IpNet::from_str(prefix).unwrap(),
            next_hop: NextHopMode::Local,
            local_pref: None,
            med: None,
            weight: None,
            origin: Some(Origin::IGP),
            as_path: AsPath::new(),
            status: RouteStatus::VALID,
        }
    }

    #[test]
    fn test_route_table_split_by_family() {
        let peer = TargetPeer::new("peer1", PeerAsType::Ibgp);
        let mut table = RouteTable::new();
        table.append_route(&peer, record("a", "10.0.0.0/8"));
        table.append_route(&peer, record("b", "2001:db8::/32"));
        table.append_route(&peer, record("c", "192.0.2.0/24"));

        assert_eq!(table.len(), 3);
        let routes = table.peer("peer1").unwrap();
        assert_eq!(routes.as_type, PeerAsType::Ibgp);
        assert_eq!(
            routes.v4_routes.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(routes.v6_routes.len(), 1);
        assert_eq!(routes.iter().count(), 3);
        assert!(table.peer("peer2").is_none());
    }

    #[test]
    fn test_vec_sink() {
        let peer = TargetPeer::new("peer1", PeerAsType::Ebgp);
        let mut sink: Vec<RouteRecord> = vec![];
        sink.append_route(&peer, record("a", "10.0.0.0/8"));
        assert_eq!(sink.len(), 1);
    }
}
