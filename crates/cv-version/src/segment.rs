use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::VersionError;

/// Smallest value a segment can hold.
pub const SEGMENT_FLOOR: u8 = 0;
/// Exclusive upper bound for segment values.
pub const SEGMENT_CEILING: u8 = 100;

/// The fixed position a [`Segment`] occupies inside a [`crate::Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SegmentType {
    #[default]
    Major = 0,
    Minor = 1,
    Patch = 2,
    Build = 3,
}

impl SegmentType {
    /// All segment types in canonical order.
    pub const ALL: [SegmentType; 4] = [Self::Major, Self::Minor, Self::Patch, Self::Build];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SegmentType::Major => "major",
            SegmentType::Minor => "minor",
            SegmentType::Patch => "patch",
            SegmentType::Build => "build",
        };
        f.write_str(name)
    }
}

/// A single numeric component of a version.
///
/// Equality, ordering and hashing look at the value only; the segment type is
/// only consulted by the arithmetic operations, which refuse to mix types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segment {
    segment_type: SegmentType,
    value: u8,
}

impl Segment {
    pub fn new(segment_type: SegmentType, value: u32) -> Result<Self, VersionError> {
        if value >= u32::from(SEGMENT_CEILING) {
            return Err(VersionError::SegmentOutOfRange {
                segment_type,
                value: i64::from(value),
            });
        }

        Ok(Self {
            segment_type,
            value: value as u8,
        })
    }

    /// The additive identity for segments of `segment_type`.
    pub const fn zero(segment_type: SegmentType) -> Self {
        Self {
            segment_type,
            value: SEGMENT_FLOOR,
        }
    }

    /// A segment with a value drawn uniformly from `[SEGMENT_FLOOR, SEGMENT_CEILING)`.
    pub fn random<R: Rng + ?Sized>(segment_type: SegmentType, rng: &mut R) -> Self {
        Self {
            segment_type,
            value: rng.random_range(SEGMENT_FLOOR..SEGMENT_CEILING),
        }
    }

    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn parts(&self) -> (SegmentType, u8) {
        (self.segment_type, self.value)
    }

    pub fn checked_add(&self, other: &Segment) -> Result<Segment, VersionError> {
        self.ensure_same_type(other)?;
        self.with_value(i64::from(self.value) + i64::from(other.value))
    }

    pub fn checked_sub(&self, other: &Segment) -> Result<Segment, VersionError> {
        self.ensure_same_type(other)?;
        self.with_value(i64::from(self.value) - i64::from(other.value))
    }

    pub fn increment(&self) -> Result<Segment, VersionError> {
        self.with_value(i64::from(self.value) + 1)
    }

    pub fn decrement(&self) -> Result<Segment, VersionError> {
        self.with_value(i64::from(self.value) - 1)
    }

    fn ensure_same_type(&self, other: &Segment) -> Result<(), VersionError> {
        if self.segment_type != other.segment_type {
            return Err(VersionError::SegmentTypeMismatch {
                left: self.segment_type,
                right: other.segment_type,
            });
        }
        Ok(())
    }

    fn with_value(&self, value: i64) -> Result<Segment, VersionError> {
        match u32::try_from(value) {
            Ok(value) => Segment::new(self.segment_type, value),
            Err(_) => Err(VersionError::SegmentOutOfRange {
                segment_type: self.segment_type,
                value,
            }),
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
