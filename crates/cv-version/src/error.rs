use crate::SegmentType;

/// Broad category of a [`VersionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionErrorKind {
    OutOfRange,
    TypeMismatch,
    ParseFailure,
    NullArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Segment {segment_type} cannot be {value}, it must be between {floor} and {ceiling_inclusive}", floor = crate::SEGMENT_FLOOR, ceiling_inclusive = crate::SEGMENT_CEILING - 1)]
    SegmentOutOfRange {
        segment_type: SegmentType,
        value: i64,
    },
    #[error("Version string can only have at most {max} segments: {version}", max = crate::MAX_SEGMENTS)]
    TooManySegments { version: String },
    #[error("Field count {field_count} is out of range, at most {available} fields are available")]
    FieldCountOutOfRange {
        field_count: usize,
        available: usize,
    },
    #[error("Cannot create a version with {count} segments, it must be between 1 and {max}", max = crate::MAX_SEGMENTS)]
    SegmentCountOutOfRange { count: usize },
    #[error("Segment type of left is {left} and does not match right segment type which is {right}")]
    SegmentTypeMismatch {
        left: SegmentType,
        right: SegmentType,
    },
    #[error("Argument {argument} must be of type 'Version'")]
    NotAVersion { argument: &'static str },
    #[error("Malformed version number string {version}")]
    MalformedVersion { version: String },
    #[error("Invalid segment in version: {segment}")]
    InvalidSegment { segment: String },
    #[error("Argument {argument} cannot be empty")]
    MissingArgument { argument: &'static str },
}

impl VersionError {
    pub fn kind(&self) -> VersionErrorKind {
        match self {
            Self::SegmentOutOfRange { .. }
            | Self::TooManySegments { .. }
            | Self::FieldCountOutOfRange { .. }
            | Self::SegmentCountOutOfRange { .. } => VersionErrorKind::OutOfRange,
            Self::SegmentTypeMismatch { .. } | Self::NotAVersion { .. } => {
                VersionErrorKind::TypeMismatch
            }
            Self::MalformedVersion { .. } | Self::InvalidSegment { .. } => {
                VersionErrorKind::ParseFailure
            }
            Self::MissingArgument { .. } => VersionErrorKind::NullArgument,
        }
    }
}
