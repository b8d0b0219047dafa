use super::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered property segments locating the compared field.
///
/// A single segment addresses a top-level property; more segments walk
/// through references (`["writtenBy", "Author", "name"]`). Always holds at
/// least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathRepr", into = "Vec<String>")]
pub struct FilterPath(Vec<String>);

/// Accepts both `"age"` and `["age"]` when reading a path.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Single(String),
    Segments(Vec<String>),
}

impl FilterPath {
    pub fn new<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments.into_iter().map(Into::into).collect::<Vec<_>>();
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(index) = segments.iter().position(String::is_empty) {
            return Err(PathError::EmptySegment { index });
        }
        Ok(FilterPath(segments))
    }

    /// Targets the length of the last property instead of its value.
    pub fn length(mut self) -> Self {
        if let Some(last) = self.0.last_mut() {
            *last = format!("len({last})");
        }
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl TryFrom<PathRepr> for FilterPath {
    type Error = PathError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        match repr {
            PathRepr::Single(segment) => FilterPath::new([segment]),
            PathRepr::Segments(segments) => FilterPath::new(segments),
        }
    }
}

impl TryFrom<Vec<String>> for FilterPath {
    type Error = PathError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        FilterPath::new(segments)
    }
}

impl From<FilterPath> for Vec<String> {
    fn from(path: FilterPath) -> Self {
        path.0
    }
}

// Literal conversions; a blank segment is a programming error, use
// `FilterPath::new` for names read at runtime.
impl From<&str> for FilterPath {
    fn from(name: &str) -> Self {
        FilterPath::from(name.to_string())
    }
}

impl From<String> for FilterPath {
    fn from(name: String) -> Self {
        debug_assert!(!name.is_empty(), "filter path segment must not be empty");
        FilterPath(vec![name])
    }
}

impl<const N: usize> From<[&str; N]> for FilterPath {
    fn from(segments: [&str; N]) -> Self {
        const { assert!(N > 0, "filter path must contain at least one segment") };
        debug_assert!(
            segments.iter().all(|s| !s.is_empty()),
            "filter path segment must not be empty"
        );
        FilterPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for FilterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
