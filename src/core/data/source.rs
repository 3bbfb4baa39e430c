//! Source text with offset <-> line/column mapping.

use std::fmt;

use serde::Serialize;

/// Byte range of a recognized node inside its source file.
///
/// Offsets are relative to the start of the file text. The span is opaque to
/// resolution; presentation uses it for positioning and deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `offset` lies inside the span (end-exclusive).
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// 1-based line/column position. The column counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// File contents plus a pre-computed line index for O(log n) lookups.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Byte offsets where each line starts. Line 1 starts at offset 0.
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All text strictly before `offset`.
    ///
    /// Offsets beyond the end are clamped; offsets inside a multi-byte
    /// character are moved back to the character boundary.
    pub fn preceding(&self, offset: usize) -> &str {
        let mut end = offset.min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        &self.text[..end]
    }

    /// Text covered by `span`, or `None` if the span is out of range.
    pub fn slice(&self, span: SourceSpan) -> Option<&str> {
        self.text.get(span.start..span.end)
    }

    /// Convert a byte offset to a 1-based line/column.
    pub fn line_column(&self, offset: usize) -> Option<LineColumn> {
        if offset > self.text.len() {
            return None;
        }
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self.text.get(line_start..offset)?.chars().count() + 1;
        Some(LineColumn {
            line: line_idx + 1,
            column,
        })
    }

    /// Convert a 1-based line/column back to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end.
    pub fn offset_of(&self, position: LineColumn) -> Option<usize> {
        if position.line == 0 || position.column == 0 {
            return None;
        }
        let line_start = *self.line_starts.get(position.line - 1)?;
        let line_end = self
            .line_starts
            .get(position.line)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let line = &self.text[line_start..line_end];
        let within = line
            .char_indices()
            .nth(position.column - 1)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        Some(line_start + within)
    }

    /// The full text of the 1-based `line`, without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches('\r'))
    }
}
