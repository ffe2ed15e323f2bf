//! Source-list files.
//!
//! One location per line, `# comments` stripped, blank lines ignored.
//! A location starting with `file://` (any case) is read from disk,
//! everything else is fetched over the network.

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;

/// File name of the source list, looked up in the working directory and in
/// the configuration directory.
pub const SOURCE_LIST_FILENAME: &str = "adhosts.cfg";

static TRAILING_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*#.*$").expect("comment pattern is valid"));

const FILE_SCHEME: &str = "file://";

/// Where a blocklist is retrieved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(PathBuf),
    Remote(String),
}

impl SourceLocation {
    /// Parse a single location. Returns `None` for empty input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let is_file = raw
            .get(..FILE_SCHEME.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(FILE_SCHEME));
        if is_file {
            Some(Self::File(PathBuf::from(&raw[FILE_SCHEME.len()..])))
        } else {
            Some(Self::Remote(raw.to_string()))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}{}", FILE_SCHEME, path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// Parse the text of a source-list file.
pub fn parse_source_list(text: &str) -> Vec<SourceLocation> {
    text.lines()
        .filter_map(|line| SourceLocation::parse(&TRAILING_COMMENT.replace(line, "")))
        .collect()
}

/// Locations gathered from every source list, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct SourceList {
    locations: Vec<SourceLocation>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the locations found in one source-list file.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let parsed = parse_source_list(text);
        let count = parsed.len();
        self.locations.extend(parsed);
        count
    }

    pub fn push(&mut self, location: SourceLocation) {
        self.locations.push(location);
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The configured locations; an empty list is a configuration error.
    pub fn into_locations(self) -> Result<Vec<SourceLocation>, ConfigError> {
        if self.locations.is_empty() {
            return Err(ConfigError::NoSources);
        }
        Ok(self.locations)
    }
}
