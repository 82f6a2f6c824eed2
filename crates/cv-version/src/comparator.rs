use std::any::Any;
use std::cmp::Ordering;

use crate::{SEPARATOR, Version, VersionError};

/// Compares versions for callers that hold raw strings or type-erased values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    separator: char,
}

impl Default for Comparator {
    fn default() -> Self {
        Self {
            separator: SEPARATOR,
        }
    }
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn parse(&self, version: &str) -> Result<Version, VersionError> {
        Version::parse_with(version, self.separator)
    }

    pub fn compare(&self, left: &str, right: &str) -> Result<Ordering, VersionError> {
        let left = self.parse(left)?;
        let right = self.parse(right)?;
        Ok(self.compare_versions(&left, &right))
    }

    pub fn compare_versions(&self, left: &Version, right: &Version) -> Ordering {
        left.cmp(right)
    }

    /// A missing left side sorts first, a missing right side sorts last.
    pub fn compare_optional(&self, left: Option<&Version>, right: Option<&Version>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => self.compare_versions(left, right),
        }
    }

    pub fn compare_any(&self, left: &dyn Any, right: &dyn Any) -> Result<Ordering, VersionError> {
        let left = left
            .downcast_ref::<Version>()
            .ok_or(VersionError::NotAVersion { argument: "left" })?;
        let right = right
            .downcast_ref::<Version>()
            .ok_or(VersionError::NotAVersion { argument: "right" })?;
        Ok(self.compare_versions(left, right))
    }

    pub fn equals(&self, left: &Version, right: &Version) -> bool {
        left == right
    }

    pub fn hash(&self, version: &Version) -> u32 {
        version.hash_code()
    }

    /// Parses and compares, keeping both versions alongside the result.
    pub fn comparison(&self, left: &str, right: &str) -> Result<Comparison, VersionError> {
        let left = self.parse(left)?;
        let right = self.parse(right)?;
        Ok(Comparison::new(left, right))
    }
}

/// The outcome of comparing two versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Version,
    pub right: Version,
    pub ordering: Ordering,
}

impl Comparison {
    pub fn new(left: Version, right: Version) -> Self {
        let ordering = left.cmp(&right);
        Self {
            left,
            right,
            ordering,
        }
    }

    pub fn sign(&self) -> i8 {
        match self.ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn relation(&self) -> &'static str {
        match self.ordering {
            Ordering::Less => "is less than",
            Ordering::Equal => "is equal to",
            Ordering::Greater => "is greater than",
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}: The result was {}",
            self.left,
            self.relation(),
            self.right,
            self.sign()
        )
    }
}
