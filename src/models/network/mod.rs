//! Common network-related structs.

mod afi;
mod asn;
mod nexthop;

pub use afi::*;
pub use asn::*;
pub use nexthop::*;
