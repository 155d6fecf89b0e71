//! Source positions for diagnostics.
//!
//! Positions are byte offsets into the text being reported on (a JSON tree
//! or an emitted stream). [`LineIndex`] maps the line/column pairs some
//! parsers report back to offsets.

use std::ops::Range;

/// Byte-offset span, start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// The span as a `usize` range, the form report builders take.
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Line start offsets of one source text.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|&(_, byte)| byte == b'\n')
                    .map(|(i, _)| (i + 1) as u32),
            )
            .collect();
        Self {
            line_starts,
            len: source.len() as u32,
        }
    }

    /// Byte offset of a 1-based (line, column) pair, clamped to the text.
    ///
    /// Line 0 or column 0 (used by some parsers for "no position") map to
    /// the start of the line or the start of the text.
    pub fn offset(&self, line: usize, column: usize) -> u32 {
        let Some(&start) = self.line_starts.get(line.saturating_sub(1)) else {
            return self.len;
        };
        let offset = start as usize + column.saturating_sub(1);
        (offset as u32).min(self.len)
    }
}
