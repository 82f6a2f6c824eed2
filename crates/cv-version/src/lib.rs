pub mod comparator;
pub mod error;
pub mod segment;
pub mod version;

pub use comparator::{Comparator, Comparison};
pub use error::{VersionError, VersionErrorKind};
pub use segment::{SEGMENT_CEILING, SEGMENT_FLOOR, Segment, SegmentType};
pub use version::{MAX_SEGMENTS, MIN_SEGMENTS, SEPARATOR, Version};
