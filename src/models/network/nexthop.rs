use crate::models::Afi;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// How the next hop of an imported route range is configured.
///
/// [NextHopMode::Local] delegates to the test peer's own address; [NextHopMode::Manual] carries
/// the address read from the table. The next-hop family is independent of the route family, so an
/// IPv4 route may carry an IPv6 next hop.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NextHopMode {
    #[default]
    Local,
    Manual(IpAddr),
}

impl NextHopMode {
    /// Family of a manual next hop. `None` for [NextHopMode::Local].
    pub fn afi(&self) -> Option<Afi> {
        match self {
            NextHopMode::Local => None,
            NextHopMode::Manual(addr) => Some(Afi::from(*addr)),
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            NextHopMode::Local => None,
            NextHopMode::Manual(addr) => Some(*addr),
        }
    }
}

impl Display for NextHopMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NextHopMode::Local => write!(f, "local"),
            NextHopMode::Manual(v) => write!(f, "{}", v),
        }
    }
}
