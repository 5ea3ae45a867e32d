//! Tag application for one block
//!
//! Tags are applied one at a time. Each applied tag repaints the bytes it
//! covers, so when two tags overlap the one applied later decides the
//! category of the shared bytes.

use super::tokens::TokenCategory;

/// One styled span as produced by a rule or region scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Byte offset where the tag starts
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
    /// Category assigned to the span
    pub category: TokenCategory,
}

impl Tag {
    /// Create a new tag
    pub fn new(offset: usize, len: usize, category: TokenCategory) -> Self {
        Self { offset, len, category }
    }

    /// Byte offset just past the tag
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// A resolved run of bytes sharing one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category painted over the span
    pub category: TokenCategory,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: TokenCategory) -> Self {
        Self { start, end, category }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Tags applied to one block, in application order, with last-write-wins paint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlights {
    applied: Vec<Tag>,
    paint: Vec<Option<TokenCategory>>,
}

impl Highlights {
    /// Create an empty result for a block of `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            applied: Vec::new(),
            paint: vec![None; len],
        }
    }

    /// Apply a tag, repainting every byte it covers
    ///
    /// Empty tags are ignored and tags running past the block are clipped.
    pub fn apply(&mut self, tag: Tag) {
        let start = tag.offset.min(self.paint.len());
        let end = tag.end().min(self.paint.len());
        if start >= end {
            return;
        }
        let tag = Tag::new(start, end - start, tag.category);
        self.paint[start..end].fill(Some(tag.category));
        self.applied.push(tag);
    }

    /// Tags in the order they were applied
    pub fn tags(&self) -> &[Tag] {
        &self.applied
    }

    /// Length of the block in bytes
    pub fn len(&self) -> usize {
        self.paint.len()
    }

    /// Check if the block is empty
    pub fn is_empty(&self) -> bool {
        self.paint.is_empty()
    }

    /// Final category at a byte offset
    pub fn category_at(&self, offset: usize) -> Option<TokenCategory> {
        self.paint.get(offset).copied().flatten()
    }

    /// Maximal runs of equal category, left to right
    pub fn spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for (pos, category) in self.paint.iter().enumerate() {
            let Some(category) = *category else { continue };
            match spans.last_mut() {
                Some(last) if last.end == pos && last.category == category => last.end = pos + 1,
                _ => spans.push(Span::new(pos, pos + 1, category)),
            }
        }
        spans
    }
}
