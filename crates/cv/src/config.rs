use cv_version::{Comparator, Version, VersionError};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub separator: char,
    pub format: OutputFormat,
}

impl Config {
    pub fn comparator(&self) -> Comparator {
        Comparator::with_separator(self.separator)
    }

    pub fn parse(&self, version: &str) -> Result<Version, VersionError> {
        self.comparator().parse(version)
    }

    /// Renders every leading segment of `version` with the configured separator.
    pub fn render(&self, version: &Version) -> Result<String, VersionError> {
        version.format_with(version.field_count(), self.separator)
    }
}
