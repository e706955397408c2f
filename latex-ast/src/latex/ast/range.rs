//! Offsets, ranges and line/column positions in LaTeX source
//!
//! This module defines the data structures for representing positions and locations in
//! LaTeX source, as well as utilities for converting offsets to line/column positions.
//!
//! ## Types
//!
//! - [`Position`] - A line:column point in the text
//! - [`Location`] - The start and end [`Position`] of a node
//! - [`Range`] - A half-open `[start, end)` span of UTF-16 offsets
//! - [`SourceText`] - Utility for slicing the text and converting offsets to positions
//!
//! ## Key Design
//!
//! - **Two views of one span**: every node carries both a [`Range`] and a [`Location`],
//!   and the two always describe the same stretch of text
//! - **UTF-16 offsets**: ranges and columns count UTF-16 code units, the way the grammar
//!   and the host index strings, so [`SourceText`] keeps a table of byte boundaries for
//!   slicing
//! - **Lines are 1-based, columns 0-based**, matching the host's AST contract
//! - **Efficient conversion**: O(log n) binary search for offset-to-position conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line (1-based) and column (0-based) in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A half-open span `[start, end)` of UTF-16 offsets into the document text.
///
/// Serialized as a two-element array, the way the host AST writes `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

impl From<[usize; 2]> for Range {
    fn from([start, end]: [usize; 2]) -> Self {
        Self::new(start, end)
    }
}

impl From<Range> for [usize; 2] {
    fn from(range: Range) -> Self {
        [range.start, range.end]
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Provides slicing by UTF-16 offset and fast offset-to-position conversion
pub struct SourceText<'a> {
    text: &'a str,
    /// `(utf16_offset, byte_offset)` of every character, plus a trailing entry for the end
    /// of the text
    boundaries: Vec<(usize, usize)>,
    /// UTF-16 offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    /// Create a new SourceText from source code
    pub fn new(text: &'a str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut line_starts = vec![0];
        let mut unit = 0;

        for (byte_pos, ch) in text.char_indices() {
            boundaries.push((unit, byte_pos));
            unit += ch.len_utf16();
            if ch == '\n' {
                line_starts.push(unit);
            }
        }
        boundaries.push((unit, text.len()));

        Self {
            text,
            boundaries,
            line_starts,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the text in UTF-16 code units
    pub fn len(&self) -> usize {
        self.boundaries.last().map_or(0, |&(unit, _)| unit)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of a UTF-16 offset, or `None` past the end or inside a surrogate pair
    fn byte_offset(&self, offset: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&offset, |&(unit, _)| unit)
            .ok()
            .map(|index| self.boundaries[index].1)
    }

    /// The text covered by `range`, or `None` when the range is inverted, runs past the
    /// end or splits a character
    pub fn slice(&self, range: Range) -> Option<&'a str> {
        if range.is_inverted() {
            return None;
        }
        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;
        Some(&self.text[start..end])
    }

    /// Convert a UTF-16 offset to a line/column position
    pub fn position(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line + 1, offset - self.line_starts[line])
    }

    /// Convert a range to the matching location
    pub fn location(&self, range: Range) -> Location {
        Location::new(self.position(range.start), self.position(range.end))
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
