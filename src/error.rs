/*!
error module defines the error types used in bgp-route-importer.

[ImportError] aborts a whole import before any route reaches the sink. [RouteError] only
disqualifies a single candidate line, which is then reported as skipped.
*/
use std::net::AddrParseError;
use std::num::ParseIntError;
use thiserror::Error;

/// Problems with the layout of the table text itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Tabs make fixed-width column offsets meaningless.
    ///
    /// ## Occurs during:
    ///  - Locating the header line
    ///  - Scanning data lines
    #[error("tab character found on line {line}")]
    TabCharacter { line: usize },
    #[error("header line is missing the {0:?} column")]
    MissingHeaderLabel(&'static str),
    #[error("input is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Fatal import errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("empty routing table input")]
    EmptyInput,
    #[error("routing table header not found")]
    HeaderNotFound,
    #[error("invalid table format: {0}")]
    Format(#[from] FormatError),
    #[error("no target peers configured")]
    NoTargetPeer,
    #[error("multiple target {0} peers not supported")]
    UnsupportedMultiPeer(&'static str),
    #[error("unsupported import file type: {0}")]
    UnsupportedFormat(String),
}

/// Errors that disqualify one candidate route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid network {network:?}: {reason}")]
    InvalidNetwork { network: String, reason: String },
    #[error("invalid next hop {0:?}")]
    InvalidNextHop(String),
    #[error("malformed AS path {path:?}: {reason}")]
    MalformedAsPath { path: String, reason: String },
    #[error("unknown origin in path {0:?}")]
    UnknownOrigin(String),
    #[error("invalid {field} value {value:?}")]
    InvalidNumericField { field: &'static str, value: String },
    #[error("route {network} does not match the requested address family")]
    AddressFamilyMismatch { network: String },
}

/// Failures while reading a dump from disk or the network.
#[cfg(feature = "oneio")]
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    OneIo(#[from] oneio::OneIoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RouteError {
    pub(crate) fn invalid_network(network: &str, reason: impl ToString) -> Self {
        RouteError::InvalidNetwork {
            network: network.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed_path(path: &str, reason: impl ToString) -> Self {
        RouteError::MalformedAsPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<(&str, AddrParseError)> for RouteError {
    fn from((next_hop, _): (&str, AddrParseError)) -> Self {
        RouteError::InvalidNextHop(next_hop.to_string())
    }
}

impl From<(&'static str, &str, ParseIntError)> for RouteError {
    fn from((field, value, _): (&'static str, &str, ParseIntError)) -> Self {
        RouteError::InvalidNumericField {
            field,
            value: value.to_string(),
        }
    }
}
