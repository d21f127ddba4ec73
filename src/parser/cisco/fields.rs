//! Fixed-width field extraction for a single candidate.
use crate::parser::cisco::header::HeaderLayout;
use crate::parser::document::{FieldCursor, RawDocument};

/// Raw column text for one candidate. Empty strings mean the column was blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DecodedFields {
    /// Only read when next hops are retained.
    pub next_hop: Option<String>,
    pub metric: String,
    pub local_pref: String,
    pub weight: String,
    pub path: String,
    pub final_row: usize,
}

pub(crate) fn decode_fields(
    doc: &RawDocument,
    layout: &HeaderLayout,
    row: usize,
    retain_next_hop: bool,
) -> DecodedFields {
    let mut cursor = FieldCursor::new(doc, row);

    let next_hop = retain_next_hop.then(|| cursor.next_field(layout.next_hop, Some(layout.metric)));
    let metric = cursor.next_field(layout.metric, Some(layout.local_pref));
    let local_pref = cursor.next_field(layout.local_pref, Some(layout.weight));
    let weight = cursor.next_field(layout.weight, Some(layout.path));
    let path = cursor.next_field(layout.path, None);

    DecodedFields {
        next_hop,
        metric,
        local_pref,
        weight,
        path,
        final_row: cursor.row(),
    }
}
