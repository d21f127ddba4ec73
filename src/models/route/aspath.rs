use crate::models::*;
use itertools::Itertools;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};

/// AS path segment types.
///
/// Values follow the on-wire codes from RFC 4271 (AS_SET, AS_SEQUENCE) and RFC 5065
/// (AS_CONFED_SEQUENCE, AS_CONFED_SET).
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SegmentType {
    AsSet = 1,
    AsSequence = 2,
    ConfedSequence = 3,
    ConfedSet = 4,
}

impl SegmentType {
    /// Opening and closing characters used by router CLI output for this segment type.
    /// Plain sequences are printed without delimiters.
    pub const fn delimiters(&self) -> Option<(char, char)> {
        match self {
            SegmentType::AsSequence => None,
            SegmentType::AsSet => Some(('{', '}')),
            SegmentType::ConfedSet => Some(('[', ']')),
            SegmentType::ConfedSequence => Some(('(', ')')),
        }
    }

    /// Separator printed between members of a segment of this type.
    pub const fn separator(&self) -> char {
        match self {
            SegmentType::AsSet | SegmentType::ConfedSet => ',',
            SegmentType::AsSequence | SegmentType::ConfedSequence => ' ',
        }
    }
}

/// Enum of AS path segment.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "asns"))]
pub enum AsPathSegment {
    AsSequence(Vec<Asn>),
    AsSet(Vec<Asn>),
    ConfedSequence(Vec<Asn>),
    ConfedSet(Vec<Asn>),
}

impl AsPathSegment {
    pub fn new(segment_type: SegmentType, asns: Vec<Asn>) -> Self {
        match segment_type {
            SegmentType::AsSequence => AsPathSegment::AsSequence(asns),
            SegmentType::AsSet => AsPathSegment::AsSet(asns),
            SegmentType::ConfedSequence => AsPathSegment::ConfedSequence(asns),
            SegmentType::ConfedSet => AsPathSegment::ConfedSet(asns),
        }
    }

    /// Shorthand for creating an `AsSequence` segment.
    pub fn sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSequence(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Shorthand for creating an `AsSet` segment.
    pub fn set<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSet(seq.as_ref().iter().copied().map_into().collect())
    }

    pub fn confed_sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::ConfedSequence(seq.as_ref().iter().copied().map_into().collect())
    }

    pub fn confed_set<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::ConfedSet(seq.as_ref().iter().copied().map_into().collect())
    }

    pub fn segment_type(&self) -> SegmentType {
        match self {
            AsPathSegment::AsSequence(_) => SegmentType::AsSequence,
            AsPathSegment::AsSet(_) => SegmentType::AsSet,
            AsPathSegment::ConfedSequence(_) => SegmentType::ConfedSequence,
            AsPathSegment::ConfedSet(_) => SegmentType::ConfedSet,
        }
    }

    /// Get the number of ASNs this segment adds to the route. For the number of ASNs within the
    /// segment use [AsPathSegment::len] instead.
    pub fn route_len(&self) -> usize {
        match self {
            AsPathSegment::AsSequence(v) => v.len(),
            AsPathSegment::AsSet(_) => 1,
            AsPathSegment::ConfedSequence(_) | AsPathSegment::ConfedSet(_) => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    /// Gets if a segment represents the local members of an autonomous system confederation.
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc5065#section-3>
    pub fn is_confed(&self) -> bool {
        matches!(
            self,
            AsPathSegment::ConfedSequence(_) | AsPathSegment::ConfedSet(_)
        )
    }

    pub fn to_u32_vec(&self) -> Vec<u32> {
        self.as_ref().iter().copied().map_into().collect()
    }
}

impl AsRef<[Asn]> for AsPathSegment {
    fn as_ref(&self) -> &[Asn] {
        let (AsPathSegment::AsSequence(x)
        | AsPathSegment::AsSet(x)
        | AsPathSegment::ConfedSequence(x)
        | AsPathSegment::ConfedSet(x)) = self;
        x
    }
}

impl Display for AsPathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let segment_type = self.segment_type();
        let members = self
            .as_ref()
            .iter()
            .join(&segment_type.separator().to_string());
        match segment_type.delimiters() {
            Some((open, close)) => write!(f, "{}{}{}", open, members, close),
            None => write!(f, "{}", members),
        }
    }
}

/// How the test peer adds its own AS number when advertising an imported path.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AsSetMode {
    #[default]
    DoNotIncludeLocalAs,
    IncludeAsSeq,
    IncludeAsSet,
    IncludeAsConfedSeq,
    IncludeAsConfedSet,
    PrependToFirstSegment,
}

#[derive(Debug, PartialEq, Clone, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsPath {
    pub segments: Vec<AsPathSegment>,
    pub as_set_mode: AsSetMode,
}

impl AsPath {
    pub fn new() -> AsPath {
        AsPath::default()
    }

    /// Shorthand for creating an `AsPath` consisting of a single `AsSequence` segment.
    pub fn from_sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPath::from_segments(vec![AsPathSegment::sequence(seq)])
    }

    pub fn from_segments(segments: Vec<AsPathSegment>) -> AsPath {
        AsPath {
            segments,
            as_set_mode: AsSetMode::default(),
        }
    }

    /// Adds a new segment to the end of the path. No validation or merging is performed.
    pub fn append_segment(&mut self, segment: AsPathSegment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments. For the number of ASNs along the route use [AsPath::route_len].
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Confederation segments do not count towards the route length.
    pub fn route_len(&self) -> usize {
        self.segments.iter().map(AsPathSegment::route_len).sum()
    }

    pub fn iter_segments(&self) -> std::slice::Iter<'_, AsPathSegment> {
        self.segments.iter()
    }

    pub fn contains_asn(&self, asn: Asn) -> bool {
        self.segments.iter().any(|s| s.as_ref().contains(&asn))
    }
}

/// Renders the path the way `show ip bgp` prints it, e.g. `100 200 {300,400} [65001,65002]`.
impl Display for AsPath {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.segments.iter().join(" "))
    }
}
