//! Walking table lines into row-indexed route candidates.
use crate::error::FormatError;
use crate::models::RouteStatus;
use crate::parser::cisco::header::HeaderLayout;
use crate::parser::document::{column, RawDocument};

/// A route line that survived scanning. `row` is the zero-based index of the line in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub row: usize,
    pub prefix: String,
    pub status: RouteStatus,
}

/// Collects candidate route lines starting at `first_row`.
///
/// Only lines starting with `*` are routes. A route line with a blank network column repeats the
/// network of the previous route line, including lines dropped by `best_routes_only`.
pub(crate) fn scan_candidates(
    doc: &RawDocument,
    layout: &HeaderLayout,
    first_row: usize,
    best_routes_only: bool,
) -> Result<Vec<Candidate>, FormatError> {
    let mut candidates = vec![];
    let mut last_prefix = String::new();

    for (row, line) in doc.iter_from(first_row) {
        if line.contains('\t') {
            return Err(FormatError::TabCharacter { line: row + 1 });
        }
        if !line.starts_with('*') {
            continue;
        }

        let bytes = line.as_bytes();
        match bytes.get(layout.network) {
            None | Some(b' ') => {}
            Some(_) => {
                let rest = column(line, layout.network, None);
                last_prefix = rest.split(' ').next().unwrap_or_default().to_string();
            }
        }

        if best_routes_only && bytes.get(1) != Some(&b'>') {
            continue;
        }

        let status = RouteStatus::from_status_codes(&column(line, 0, Some(layout.network)));
        candidates.push(Candidate {
            row,
            prefix: last_prefix.clone(),
            status,
        });
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: HeaderLayout = HeaderLayout {
        network: 3,
        next_hop: 20,
        metric: 40,
        local_pref: 47,
        weight: 54,
        path: 61,
    };

    const TABLE: &str = concat!(
        "*  1.0.0.0/24       10.0.0.2                               0 65002 i\n",
        "*>                  10.0.0.1                 0             0 65001 i\n",
        "\n",
        "   orphan continuation\n",
        "*>i2.0.0.0/16       10.0.0.3                 0    100      0 65003 ?\n",
    );

    #[test]
    fn test_scan_all() {
        let doc = RawDocument::new(TABLE);
        let candidates = scan_candidates(&doc, &LAYOUT, 0, false).unwrap();
        assert_eq!(
            candidates.iter().map(|c| c.row).collect::<Vec<_>>(),
            vec![0, 1, 4]
        );
        assert_eq!(candidates[0].prefix, "1.0.0.0/24");
        assert_eq!(candidates[1].prefix, "1.0.0.0/24");
        assert_eq!(candidates[2].prefix, "2.0.0.0/16");
        assert!(!candidates[0].status.is_best());
        assert!(candidates[1].status.is_best());
        assert!(candidates[2].status.contains(RouteStatus::INTERNAL));
    }

    #[test]
    fn test_scan_best_only_keeps_prefix() {
        let doc = RawDocument::new(TABLE);
        let candidates = scan_candidates(&doc, &LAYOUT, 0, true).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].row, 1);
        assert_eq!(candidates[0].prefix, "1.0.0.0/24");
        assert_eq!(candidates[1].row, 4);
    }

    #[test]
    fn test_scan_short_line_inherits() {
        let doc = RawDocument::new("*> 9.9.9.0/24      1.1.1.1\n*>");
        let candidates = scan_candidates(&doc, &LAYOUT, 0, false).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].prefix, "9.9.9.0/24");
    }

    #[test]
    fn test_scan_tab() {
        let doc = RawDocument::new("*> 1.0.0.0/24\n*>\t2.0.0.0/24");
        assert_eq!(
            scan_candidates(&doc, &LAYOUT, 0, false),
            Err(FormatError::TabCharacter { line: 2 })
        );
    }
}
