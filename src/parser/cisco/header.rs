//! Locating the `show ip bgp` column header.
use crate::error::{FormatError, ImportError};
use crate::parser::document::RawDocument;

const HEADER_PREFIX: &str = "   Network";

/// Column labels in the order they appear on the header line.
const HEADER_LABELS: [&str; 6] = ["Network", "Next Hop", "Metric", "LocPrf", "Weight", "Path"];

/// Byte offsets of each column's label on the header line. Strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeaderLayout {
    pub network: usize,
    pub next_hop: usize,
    pub metric: usize,
    pub local_pref: usize,
    pub weight: usize,
    pub path: usize,
}

/// Finds the header line and returns its layout together with the first data row.
pub(crate) fn locate_header(doc: &RawDocument) -> Result<(HeaderLayout, usize), ImportError> {
    let (row, line) = doc
        .iter_from(0)
        .find(|(_, line)| line.starts_with(HEADER_PREFIX))
        .ok_or(ImportError::HeaderNotFound)?;

    if line.contains('\t') {
        return Err(FormatError::TabCharacter { line: row + 1 }.into());
    }

    let mut offsets = [0usize; HEADER_LABELS.len()];
    let mut search_from = 0;
    for (offset, label) in offsets.iter_mut().zip(HEADER_LABELS) {
        let found = line[search_from..]
            .find(label)
            .ok_or(FormatError::MissingHeaderLabel(label))?;
        *offset = search_from + found;
        search_from = *offset + label.len();
    }

    let [network, next_hop, metric, local_pref, weight, path] = offsets;
    let layout = HeaderLayout {
        network,
        next_hop,
        metric,
        local_pref,
        weight,
        path,
    };
    Ok((layout, row + 1))
}
