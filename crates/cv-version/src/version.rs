use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rand::Rng;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{Segment, SegmentType, VersionError};

/// Default separator between segments.
pub const SEPARATOR: char = '.';
/// Fewest segments a version string may contain.
pub const MIN_SEGMENTS: usize = 2;
/// Most segments a version can hold.
pub const MAX_SEGMENTS: usize = 4;

/// A `major.minor.patch.build` version identifier.
///
/// Each slot holds a segment of its own type, or nothing when the version was
/// parsed from a shorter string. Absent slots compare, hash and test equal as
/// zero, so `2.5`, `2.5.0` and `2.5.0.0` are the same version. They only
/// differ in how they are displayed.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    segments: [Option<Segment>; MAX_SEGMENTS],
}

impl Version {
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        Self::parse_with(text, SEPARATOR)
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    pub fn parse_with(text: &str, separator: char) -> Result<Self, VersionError> {
        let text = text.trim();
        let tokens = text.split(separator).collect::<Vec<_>>();

        if tokens.len() > MAX_SEGMENTS {
            return Err(VersionError::TooManySegments {
                version: text.into(),
            });
        }
        if tokens.len() < MIN_SEGMENTS {
            return Err(VersionError::MalformedVersion {
                version: text.into(),
            });
        }

        let mut segments = [None; MAX_SEGMENTS];
        for (segment_type, token) in SegmentType::ALL.into_iter().zip(tokens) {
            segments[segment_type.index()] = Some(Self::parse_segment(segment_type, token)?);
        }

        Ok(Self { segments })
    }

    /// Non-numeric tokens are parse failures. Numeric tokens, however large,
    /// are range checked.
    fn parse_segment(segment_type: SegmentType, token: &str) -> Result<Segment, VersionError> {
        let trimmed = token.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::InvalidSegment {
                segment: token.into(),
            });
        }

        match digits.parse::<u32>() {
            Ok(value) => Segment::new(segment_type, value),
            Err(_) => Err(VersionError::SegmentOutOfRange {
                segment_type,
                value: digits.parse::<i64>().unwrap_or(i64::MAX),
            }),
        }
    }

    pub fn from_components(
        major: u32,
        minor: u32,
        patch: u32,
        build: u32,
    ) -> Result<Self, VersionError> {
        Ok(Self {
            segments: [
                Some(Segment::new(SegmentType::Major, major)?),
                Some(Segment::new(SegmentType::Minor, minor)?),
                Some(Segment::new(SegmentType::Patch, patch)?),
                Some(Segment::new(SegmentType::Build, build)?),
            ],
        })
    }

    pub fn from_major_minor(major: u32, minor: u32) -> Result<Self, VersionError> {
        Self::from_components(major, minor, 0, 0)
    }

    /// Builds a version from leading segments given in canonical order.
    /// Slots past the end of `segments` are left absent.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Result<Self, VersionError> {
        let segments = segments.into_iter().collect::<Vec<_>>();

        if segments.is_empty() {
            return Err(VersionError::MissingArgument {
                argument: "segments",
            });
        }
        if segments.len() > MAX_SEGMENTS {
            return Err(VersionError::SegmentCountOutOfRange {
                count: segments.len(),
            });
        }

        let mut slots = [None; MAX_SEGMENTS];
        for (expected, segment) in SegmentType::ALL.into_iter().zip(segments) {
            if segment.segment_type() != expected {
                return Err(VersionError::SegmentTypeMismatch {
                    left: expected,
                    right: segment.segment_type(),
                });
            }
            slots[expected.index()] = Some(segment);
        }

        Ok(Self { segments: slots })
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            segments: SegmentType::ALL.map(|segment_type| Some(Segment::random(segment_type, rng))),
        }
    }

    /// A random version with only the first `count` slots populated.
    pub fn random_with_segments<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
    ) -> Result<Self, VersionError> {
        if count == 0 || count > MAX_SEGMENTS {
            return Err(VersionError::SegmentCountOutOfRange { count });
        }

        let mut segments = [None; MAX_SEGMENTS];
        for segment_type in SegmentType::ALL.into_iter().take(count) {
            segments[segment_type.index()] = Some(Segment::random(segment_type, rng));
        }

        Ok(Self { segments })
    }

    pub fn major(&self) -> Option<Segment> {
        self.get(SegmentType::Major)
    }

    pub fn minor(&self) -> Option<Segment> {
        self.get(SegmentType::Minor)
    }

    pub fn patch(&self) -> Option<Segment> {
        self.get(SegmentType::Patch)
    }

    pub fn build(&self) -> Option<Segment> {
        self.get(SegmentType::Build)
    }

    pub fn get(&self, segment_type: SegmentType) -> Option<Segment> {
        self.segments[segment_type.index()]
    }

    pub fn get_index(&self, position: usize) -> Option<Segment> {
        self.segments.get(position).copied().flatten()
    }

    /// The value in `segment_type`'s slot, with an absent slot reading as zero.
    pub fn value(&self, segment_type: SegmentType) -> u8 {
        self.get(segment_type).map_or(0, |segment| segment.value())
    }

    fn values(&self) -> [u8; MAX_SEGMENTS] {
        SegmentType::ALL.map(|segment_type| self.value(segment_type))
    }

    /// Present segments in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(Option::is_some)
    }

    /// A copy with every absent slot filled with zero.
    pub fn normalized(&self) -> Self {
        Self {
            segments: SegmentType::ALL
                .map(|segment_type| Some(self.get(segment_type).unwrap_or(Segment::zero(segment_type)))),
        }
    }

    /// Number of leading present segments.
    pub fn field_count(&self) -> usize {
        self.segments.iter().take_while(|s| s.is_some()).count()
    }

    pub fn to_string_fields(&self, field_count: usize) -> Result<String, VersionError> {
        self.format_with(field_count, SEPARATOR)
    }

    pub fn format_with(&self, field_count: usize, separator: char) -> Result<String, VersionError> {
        if field_count == 0 || field_count > self.field_count() {
            return Err(VersionError::FieldCountOutOfRange {
                field_count,
                available: self.field_count(),
            });
        }

        Ok(self
            .iter()
            .take(field_count)
            .map(Segment::to_string)
            .collect::<Vec<_>>()
            .join(&separator.to_string()))
    }

    /// How many slots `Display` writes: up to the last present one, and never
    /// fewer than [`MIN_SEGMENTS`] so the output always parses back.
    fn display_len(&self) -> usize {
        self.segments
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1)
            .max(MIN_SEGMENTS)
    }

    pub fn checked_add(&self, other: &Version) -> Result<Version, VersionError> {
        self.combine(other, Segment::checked_add)
    }

    pub fn checked_sub(&self, other: &Version) -> Result<Version, VersionError> {
        self.combine(other, Segment::checked_sub)
    }

    /// Applies `op` to each pair of segments sharing a type. A slot absent
    /// on either side stays absent.
    fn combine(
        &self,
        other: &Version,
        op: impl Fn(&Segment, &Segment) -> Result<Segment, VersionError>,
    ) -> Result<Version, VersionError> {
        let mut segments = [None; MAX_SEGMENTS];
        for segment_type in SegmentType::ALL {
            if let (Some(left), Some(right)) = (self.get(segment_type), other.get(segment_type)) {
                segments[segment_type.index()] = Some(op(&left, &right)?);
            }
        }
        Ok(Self { segments })
    }

    /// Puts `segment` into its slot. An occupied slot is only overwritten when
    /// `replace_if_found` is set; returns whether the segment was stored.
    pub fn add_segment(&mut self, segment: Segment, replace_if_found: bool) -> bool {
        let slot = &mut self.segments[segment.segment_type().index()];
        if slot.is_some() && !replace_if_found {
            return false;
        }
        *slot = Some(segment);
        true
    }

    pub fn replace_segment(&mut self, segment: Segment) -> bool {
        self.add_segment(segment, true)
    }

    pub fn remove_segment(&mut self, segment_type: SegmentType) -> bool {
        self.segments[segment_type.index()].take().is_some()
    }

    /// Packs the four values into one `u32`: major in bits 28-31, minor in
    /// 20-27, build in 12-19 and patch in 0-11. Not collision resistant.
    pub fn hash_code(&self) -> u32 {
        let [major, minor, patch, build] = self.values().map(u32::from);

        let mut accumulator = 0;
        accumulator |= (major & 0x0000_000F) << 28;
        accumulator |= (minor & 0x0000_00FF) << 20;
        accumulator |= (build & 0x0000_00FF) << 12;
        accumulator |= patch & 0x0000_0FFF;
        accumulator
    }
}

impl Default for Version {
    fn default() -> Self {
        Version {
            segments: SegmentType::ALL.map(|segment_type| Some(Segment::zero(segment_type))),
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values().cmp(&other.values())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = SegmentType::ALL.into_iter().take(self.display_len());
        for (index, segment_type) in slots.enumerate() {
            if index != 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", self.value(segment_type))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}

impl<'a> IntoIterator for &'a Version {
    type Item = &'a Segment;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Segment>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter().flatten()
    }
}
