//! Grammar for the path column: AS numbers with bracketed set markers followed by an origin code.
//!
//! ```text
//! 100 200 {300,400} (65001 65002) [65003,65004] i
//! ```
//!
//! `{..}` is an AS_SET, `[..]` a confederation set and `(..)` a confederation sequence. Anything
//! outside brackets belongs to a plain AS_SEQUENCE.
use crate::error::RouteError;
use crate::models::{Asn, AsPathSegment, Origin, SegmentType};
use std::mem;

const MARKED_SEGMENTS: [SegmentType; 3] = [
    SegmentType::AsSet,
    SegmentType::ConfedSet,
    SegmentType::ConfedSequence,
];

fn opened_by(c: char) -> Option<SegmentType> {
    MARKED_SEGMENTS
        .into_iter()
        .find(|t| t.delimiters().is_some_and(|(open, _)| open == c))
}

fn closed_by(c: char) -> Option<SegmentType> {
    MARKED_SEGMENTS
        .into_iter()
        .find(|t| t.delimiters().is_some_and(|(_, close)| close == c))
}

/// Splits the trailing origin code off the path text.
pub(crate) fn split_origin(path: &str) -> Result<(Origin, &str), RouteError> {
    let trimmed = path.trim();
    let code = trimmed
        .chars()
        .last()
        .ok_or_else(|| RouteError::UnknownOrigin(path.to_string()))?;
    let origin =
        Origin::from_table_code(code).ok_or_else(|| RouteError::UnknownOrigin(path.to_string()))?;
    Ok((origin, &trimmed[..trimmed.len() - code.len_utf8()]))
}

/// Parses the AS numbers of a path (origin already removed) into typed segments.
pub(crate) fn parse_segments(text: &str) -> Result<Vec<AsPathSegment>, RouteError> {
    let mut segments = vec![];
    let mut kind = SegmentType::AsSequence;
    let mut members: Vec<Asn> = vec![];

    let tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    for token in tokens {
        let mut asn_text = token;

        if let Some(opened) = asn_text.chars().next().and_then(opened_by) {
            if kind == SegmentType::AsSequence {
                if !members.is_empty() {
                    segments.push(AsPathSegment::new(kind, mem::take(&mut members)));
                }
                kind = opened;
            } else if kind != opened {
                return Err(RouteError::malformed_path(
                    text,
                    format!("{:?} opened inside {:?}", opened, kind),
                ));
            }
            asn_text = &asn_text[1..];
        }

        let closed = asn_text.chars().last().and_then(closed_by);
        if let Some(closed) = closed {
            if closed != kind {
                return Err(RouteError::malformed_path(
                    text,
                    format!("unexpected end of {:?}", closed),
                ));
            }
            asn_text = &asn_text[..asn_text.len() - 1];
        }

        // plain decimal only, `u32::from_str` would take a leading `+`
        let asn = Some(asn_text)
            .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|t| t.parse::<Asn>().ok())
            .ok_or_else(|| {
                RouteError::malformed_path(text, format!("bad AS number {:?}", token))
            })?;
        members.push(asn);

        if closed.is_some() {
            segments.push(AsPathSegment::new(kind, mem::take(&mut members)));
            kind = SegmentType::AsSequence;
        }
    }

    // an unterminated set is kept as it stands
    if !members.is_empty() {
        segments.push(AsPathSegment::new(kind, members));
    }

    Ok(segments)
}

/// Parses a full path column, e.g. `2497 4826 38803 56203 i`.
pub(crate) fn parse_path(path: &str) -> Result<(Vec<AsPathSegment>, Origin), RouteError> {
    let (origin, rest) = split_origin(path)?;
    let segments = parse_segments(rest)?;
    Ok((segments, origin))
}
