//! Token and span models produced by the highlighter.
//!
//! A `Token` pairs a [`StyleCategory`] with byte offsets into the scanned
//! text. A `StyleSpan` is the offset-free form handed to an editor widget:
//! successive spans are laid end to end starting at the styling position.
use crate::rql::style::StyleCategory;

/// A classified run of source text.
///
/// Invariants:
/// - `end > start` for every token produced by the highlighter
/// - `[start, end)` is a valid slice range of the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub style: StyleCategory,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(style: StyleCategory, start: usize, end: usize) -> Self {
        Self { style, start, end }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the byte offset lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Slice of `source` covered by this token. `source` must be the text
    /// the token was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A contiguous styled run: `len` bytes in style `style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    pub len: usize,
    pub style: StyleCategory,
}

impl StyleSpan {
    pub const fn new(len: usize, style: StyleCategory) -> Self {
        Self { len, style }
    }

    pub const fn style_id(&self) -> u8 {
        self.style.id()
    }
}

impl From<Token> for StyleSpan {
    fn from(token: Token) -> Self {
        StyleSpan::new(token.len(), token.style)
    }
}
