//! Dotted path expressions
//!
//! A path such as `entity.uri.query.items.0.name` is split on `.` into
//! segments. Every segment is usable as a map key; segments made only of
//! ASCII digits additionally carry the sequence index they denote.
//!
//! Copyright (c) 2025 Postbridge Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::str::FromStr;

/// One step of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    key: String,
    index: Option<usize>,
}

impl Segment {
    /// Build a segment from its raw text
    pub fn new(raw: impl Into<String>) -> Self {
        let key = raw.into();
        let index = parse_index(&key);
        Self { key, index }
    }

    /// The segment text, used for map lookups
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The sequence position this segment denotes, if it is numeric
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// Numeric segments compare by position, so `"01"` addresses element 1.
/// Signs and whitespace are rejected even though `usize::from_str` takes `+`.
fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// An ordered sequence of segments, resolved strictly left to right
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a dotted expression. The empty string is the empty path.
    pub fn parse(expression: &str) -> Self {
        if expression.is_empty() {
            return Self::default();
        }
        Self {
            segments: expression.split('.').map(Segment::new).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return a new path with `segment` appended
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::new(segment));
        Self { segments }
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(expression: &str) -> Self {
        Self::parse(expression)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.key)?;
        }
        Ok(())
    }
}
