//! Line arena over the table text and the per-candidate field cursor.
use std::borrow::Cow;

/// The input text split into lines. Built once per import and only ever borrowed afterwards.
#[derive(Debug)]
pub(crate) struct RawDocument<'a> {
    lines: Vec<&'a str>,
}

impl<'a> RawDocument<'a> {
    /// Splits on `\n`; a trailing `\r` on each line is dropped.
    pub(crate) fn new(text: &'a str) -> Self {
        RawDocument {
            lines: text.lines().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn line(&self, row: usize) -> Option<&'a str> {
        self.lines.get(row).copied()
    }

    /// A valid route line starts with `*`.
    pub(crate) fn is_route_line(&self, row: usize) -> bool {
        self.line(row).is_some_and(|l| l.starts_with('*'))
    }

    pub(crate) fn iter_from(&self, row: usize) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .copied()
            .enumerate()
            .skip(row)
    }
}

/// Byte-offset slice `[start, end)` of a line, clamped to the line length.
///
/// Column offsets come from the header and are byte positions, so slicing is done on bytes.
pub(crate) fn column(line: &str, start: usize, end: Option<usize>) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let end = end.map_or(bytes.len(), |e| e.min(bytes.len()));
    if start >= end {
        return Cow::Borrowed("");
    }
    String::from_utf8_lossy(&bytes[start..end])
}

/// Reads fixed-width fields for one candidate, moving down onto continuation lines when a
/// field starts past the end of the current line.
pub(crate) struct FieldCursor<'d, 'a> {
    doc: &'d RawDocument<'a>,
    row: usize,
}

impl<'d, 'a> FieldCursor<'d, 'a> {
    pub(crate) fn new(doc: &'d RawDocument<'a>, row: usize) -> Self {
        FieldCursor { doc, row }
    }

    /// Last row the cursor has consumed.
    pub(crate) fn row(&self) -> usize {
        self.row
    }

    /// Returns the trimmed text in `[start, end)`, where `end = None` means end of line.
    ///
    /// While the current line has no character at `start`, the cursor advances to the next line
    /// if that line exists and is not itself a route line. Otherwise the field is empty and the
    /// cursor stays put.
    pub(crate) fn next_field(&mut self, start: usize, end: Option<usize>) -> String {
        loop {
            let Some(line) = self.doc.line(self.row) else {
                return String::new();
            };
            if line.len() > start {
                return column(line, start, end).trim().to_string();
            }
            let next = self.row + 1;
            if next < self.doc.len() && !self.doc.is_route_line(next) {
                self.row = next;
            } else {
                return String::new();
            }
        }
    }
}
