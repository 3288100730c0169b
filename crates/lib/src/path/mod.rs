//! Property path parsing.
//!
//! A property path addresses a value nested inside a dynamic data tree using
//! dotted field names and bracketed sequence indices:
//!
//! ```text
//! path      := token ("." token)*
//! token     := field ("[" index "]")*
//! field     := 1*(character except '.', '[', ']', whitespace)
//! index     := 1*DIGIT
//! ```
//!
//! # Core Types
//!
//! - [`Segment`] - One navigation step: a field name or a sequence index
//! - [`PropertyPath`] - An immutable, parsed sequence of segments
//! - [`PathBuilder`] - Programmatic construction of a [`PropertyPath`]
//!
//! # Usage
//!
//! ```rust
//! use propedit::path::{PropertyPath, Segment};
//!
//! let path: PropertyPath = "user.scores[1][0]".parse()?;
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::field("user"),
//!         Segment::field("scores"),
//!         Segment::Index(1),
//!         Segment::Index(0),
//!     ]
//! );
//! assert_eq!(path.to_string(), "user.scores[1][0]");
//! # Ok::<(), propedit::path::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use tracing::trace;

pub mod errors;

pub use errors::PathError;

/// One navigation step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Selects a named member of a record-like node
    Field(String),
    /// Selects a positional member of a sequence-like node
    Index(usize),
}

impl Segment {
    /// Creates a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        Segment::Field(name.into())
    }

    /// Returns true if this segment addresses a sequence position
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Returns true if this segment addresses a record member
    pub fn is_field(&self) -> bool {
        matches!(self, Segment::Field(_))
    }

    /// Returns the field name, if this is a field segment
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Segment::Field(name) => Some(name),
            Segment::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index segment
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Field(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{name}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// A parsed property path.
///
/// `PropertyPath` is computed once from a path string and is never mutated
/// afterwards. Accessors are built from it by value, so a path can be cloned
/// cheaply into as many readers and writers as needed.
///
/// The textual form is the canonical notation (`a.b[1][0]`). Serde
/// serializes a path as that string and deserializes it through [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Returns the segments in navigation order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    ///
    /// Parsed paths are never empty; an empty path can only come from a
    /// [`PathBuilder`] or [`Default`].
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the terminal segment, or `None` if the path is empty.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the path without its terminal segment, or `None` if empty.
    pub fn parent(&self) -> Option<PropertyPath> {
        self.segments.split_last().map(|(_, rest)| PropertyPath {
            segments: rest.to_vec(),
        })
    }

    /// Splits the path into its navigation segments and its terminal segment.
    pub fn split_terminal(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }

    /// Consumes the path and returns its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

/// Parses a path string into a [`PropertyPath`].
///
/// The path is split on `.`; every token must be non-empty and free of
/// whitespace. A token ending in `]` contributes one field segment followed
/// by one index segment per trailing `[n]` group, in left-to-right order.
///
/// # Errors
///
/// Returns a [`PathError`] if the string does not follow the path grammar.
/// Tokens made only of index groups (`"[0]"`) are rejected because they have
/// no field name.
///
/// # Examples
///
/// ```rust
/// # use propedit::path::{parse, Segment};
/// let path = parse("a[1][0]").unwrap();
/// assert_eq!(
///     path.segments(),
///     &[Segment::field("a"), Segment::Index(1), Segment::Index(0)]
/// );
///
/// assert!(parse("a. b").is_err());
/// assert!(parse("a..b").is_err());
/// ```
pub fn parse(path: &str) -> Result<PropertyPath, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let tokens: Vec<&str> = path.split('.').collect();
    for (position, token) in tokens.iter().enumerate() {
        if token.is_empty() {
            return Err(PathError::EmptyToken {
                path: path.to_string(),
                position,
            });
        }
        if token.chars().any(char::is_whitespace) {
            return Err(PathError::Whitespace {
                path: path.to_string(),
                token: token.to_string(),
            });
        }
    }

    let mut segments = Vec::with_capacity(tokens.len());
    for token in tokens {
        parse_token(path, token, &mut segments)?;
    }

    trace!(path, segments = segments.len(), "Parsed property path");
    Ok(PropertyPath { segments })
}

/// Splits one dot-separated token into a field segment and its trailing indices.
fn parse_token(path: &str, token: &str, segments: &mut Vec<Segment>) -> Result<(), PathError> {
    let mut field = token;
    // Extracted right to left, emitted left to right
    let mut indices = Vec::new();

    while let Some(inner) = field.strip_suffix(']') {
        let Some(open) = inner.rfind('[') else {
            return Err(PathError::UnbalancedBracket {
                path: path.to_string(),
                token: token.to_string(),
            });
        };
        indices.push(parse_index(path, &inner[open + 1..])?);
        field = &inner[..open];
    }

    if field.is_empty() {
        return Err(PathError::EmptyField {
            path: path.to_string(),
            token: token.to_string(),
        });
    }
    if field.contains(['[', ']']) {
        return Err(PathError::UnbalancedBracket {
            path: path.to_string(),
            token: token.to_string(),
        });
    }

    segments.push(Segment::Field(field.to_string()));
    segments.extend(indices.into_iter().rev().map(Segment::Index));
    Ok(())
}

fn parse_index(path: &str, digits: &str) -> Result<usize, PathError> {
    let invalid = || PathError::InvalidIndex {
        path: path.to_string(),
        index: digits.to_string(),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Overflow is the only failure left
    digits.parse().map_err(|_| invalid())
}

fn is_valid_field(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']') || c.is_whitespace())
}

impl FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for PropertyPath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}

impl TryFrom<String> for PropertyPath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse(&s)
    }
}

impl From<PropertyPath> for String {
    fn from(path: PropertyPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && segment.is_field() {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PropertyPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for PropertyPath {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// A builder for constructing paths segment by segment.
///
/// Field names are validated the same way the parser validates them. A
/// builder may start with an index, which addresses a sequence-like root;
/// such paths have no string form that [`parse`] accepts back.
///
/// ```rust
/// # use propedit::path::PathBuilder;
/// let path = PathBuilder::new()
///     .field("matrix")?
///     .index(1)
///     .index(0)
///     .build();
/// assert_eq!(path.to_string(), "matrix[1][0]");
/// # Ok::<(), propedit::path::PathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Creates a new empty path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field segment.
    pub fn field(mut self, name: impl Into<String>) -> Result<Self, PathError> {
        let name = name.into();
        if !is_valid_field(&name) {
            return Err(PathError::InvalidField { field: name });
        }
        self.segments.push(Segment::Field(name));
        Ok(self)
    }

    /// Adds an index segment.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Appends every segment of an existing path.
    pub fn join(mut self, path: &PropertyPath) -> Self {
        self.segments.extend(path.iter().cloned());
        self
    }

    /// Builds the final `PropertyPath`.
    pub fn build(self) -> PropertyPath {
        PropertyPath {
            segments: self.segments,
        }
    }
}
