//! Route records produced by a table import.
mod aspath;
mod origin;
mod status;

pub use aspath::*;
pub use origin::*;
pub use status::*;

use crate::models::*;
use ipnet::IpNet;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// # RouteRecord
///
/// One imported route range: a single destination prefix with the attributes decoded from its
/// table line(s).
///
/// - `name`: unique name of the record, `{name_prefix}-{row}`.
/// - `row`: zero-based index of the table line that starts the route.
/// - `prefix`: destination network.
/// - `next_hop`: [NextHopMode::Local] unless the importer was asked to retain table next hops.
/// - `local_pref`, `med`, `weight`: present only when the column was non-empty.
/// - `origin`: ORIGIN decoded from the trailing code of the path column.
/// - `as_path`: AS path in table order.
/// - `status`: flags from the status column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    pub name: String,
    pub row: usize,
    pub prefix: IpNet,
    pub next_hop: NextHopMode,
    pub local_pref: Option<u32>,
    pub med: Option<u32>,
    pub weight: Option<u32>,
    pub origin: Option<Origin>,
    pub as_path: AsPath,
    pub status: RouteStatus,
}

/// Helper struct to print an `Option` as its inner value or as an empty string.
struct OptionToStr<'a, T>(&'a Option<T>);

impl<T: Display> Display for OptionToStr<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            None => Ok(()),
            Some(x) => write!(f, "{x}"),
        }
    }
}

impl RouteRecord {
    pub fn afi(&self) -> Afi {
        Afi::from(&self.prefix)
    }

    pub fn address(&self) -> IpAddr {
        self.prefix.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix.prefix_len()
    }

    pub fn is_best(&self) -> bool {
        self.status.is_best()
    }

    /// Returns the PSV header as a string.
    ///
    /// ```
    /// use bgp_route_importer::RouteRecord;
    ///
    /// let header = RouteRecord::get_psv_header();
    /// assert_eq!(header, "name|row|status|prefix|next_hop|local_pref|med|weight|as_path|origin|as_set_mode");
    /// ```
    pub fn get_psv_header() -> String {
        let fields = [
            "name",
            "row",
            "status",
            "prefix",
            "next_hop",
            "local_pref",
            "med",
            "weight",
            "as_path",
            "origin",
            "as_set_mode",
        ];
        fields.join("|")
    }

    /// Converts the record into a pipe-separated values (PSV) line matching
    /// [RouteRecord::get_psv_header].
    pub fn to_psv(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{:?}",
            &self.name,
            self.row,
            self.status.to_status_codes(),
            &self.prefix,
            &self.next_hop,
            OptionToStr(&self.local_pref),
            OptionToStr(&self.med),
            OptionToStr(&self.weight),
            &self.as_path,
            OptionToStr(&self.origin),
            self.as_path.as_set_mode,
        )
    }
}

impl Display for RouteRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            &self.name,
            &self.prefix,
            &self.next_hop,
            &self.as_path,
            OptionToStr(&self.origin),
        )
    }
}
