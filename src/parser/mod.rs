/*!
parser module turns routing-table text into [RouteRecord]s.

Use [importer_for] to pick an importer for a file type, or construct a [CiscoImporter] directly.
*/
pub mod cisco;
pub(crate) mod document;
mod tasks;

pub use cisco::CiscoImporter;

use crate::error::{ImportError, RouteError};
use crate::models::*;
use crate::sink::RouteSink;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Vendor format of a routing-table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImportFileType {
    /// `show ip bgp` / `show bgp ipv6 unicast` output.
    Cisco,
    Juniper,
}

impl FromStr for ImportFileType {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cisco" => Ok(ImportFileType::Cisco),
            "juniper" => Ok(ImportFileType::Juniper),
            _ => Err(ImportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl Display for ImportFileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportFileType::Cisco => write!(f, "cisco"),
            ImportFileType::Juniper => write!(f, "juniper"),
        }
    }
}

/// A candidate line that did not produce a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRoute {
    /// Zero-based row of the candidate's first line.
    pub row: usize,
    pub error: RouteError,
}

impl SkippedRoute {
    /// One-based line number, for messages.
    pub fn line(&self) -> usize {
        self.row + 1
    }
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Names of the routes handed to the sink, in row order.
    pub route_names: Vec<String>,
    pub skipped: Vec<SkippedRoute>,
    /// Number of candidate lines found by the scanner.
    pub candidates: usize,
}

pub trait RouteImporter: Display + Send {
    fn session_id(&self) -> u32;

    /// Routes imported by this importer across all calls.
    fn valid_routes(&self) -> usize;

    /// Parses `input` and appends every valid route to `sink` for the designated target peer.
    ///
    /// Fatal errors are returned before the sink is touched.
    fn import_routes(
        &mut self,
        config: &ImportConfig,
        input: &[u8],
        sink: &mut dyn RouteSink,
    ) -> Result<ImportSummary, ImportError>;
}

/// Creates an importer for the given file type.
///
/// # Example
///
/// ```
/// use bgp_route_importer::{importer_for, ImportError, ImportFileType, RouteImporter};
///
/// let importer = importer_for(ImportFileType::Cisco, 7).unwrap();
/// assert_eq!(importer.session_id(), 7);
/// assert!(matches!(
///     importer_for(ImportFileType::Juniper, 7),
///     Err(ImportError::UnsupportedFormat(_))
/// ));
/// ```
pub fn importer_for(
    file_type: ImportFileType,
    session_id: u32,
) -> Result<Box<dyn RouteImporter>, ImportError> {
    match file_type {
        ImportFileType::Cisco => Ok(Box::new(CiscoImporter::new(session_id))),
        ImportFileType::Juniper => Err(ImportError::UnsupportedFormat(file_type.to_string())),
    }
}

fn single(family: &'static str, peers: &[TargetPeer]) -> Result<(), ImportError> {
    if peers.len() > 1 {
        return Err(ImportError::UnsupportedMultiPeer(family));
    }
    Ok(())
}

/// Picks the peer that receives the routes.
///
/// A single-family import uses the single peer of that family. [AddressFamilyMode::Auto] uses the
/// single IPv4 peer if present, otherwise the single IPv6 peer.
pub(crate) fn designated_peer(config: &ImportConfig) -> Result<&TargetPeer, ImportError> {
    let (v4, v6) = (&config.target_v4_peers, &config.target_v6_peers);
    match config.address_family {
        AddressFamilyMode::Ipv4Only => {
            single("v4", v4)?;
            v4.first().ok_or(ImportError::NoTargetPeer)
        }
        AddressFamilyMode::Ipv6Only => {
            single("v6", v6)?;
            v6.first().ok_or(ImportError::NoTargetPeer)
        }
        AddressFamilyMode::Auto => {
            single("v4", v4)?;
            single("v6", v6)?;
            v4.first()
                .or_else(|| v6.first())
                .ok_or(ImportError::NoTargetPeer)
        }
    }
}
