//! Sequential re-highlighting of a whole document
//!
//! Keeps, per line, the state the line was highlighted from and the
//! result. After an edit only the stale lines, and the lines whose
//! incoming state changed because of them, are highlighted again.

use std::ops::Range;

use tracing::debug;

use super::highlighter::{highlight_block, BlockHighlight};
use super::language::RuleSet;
use super::rules::BlockState;

/// Cached result for one line
#[derive(Debug, Clone)]
struct CachedBlock {
    /// State the line was highlighted from
    previous: BlockState,
    result: BlockHighlight,
}

/// Per-document highlight cache
#[derive(Debug, Clone, Default)]
pub struct DocumentHighlight {
    /// `None` marks a line that must be highlighted again
    blocks: Vec<Option<CachedBlock>>,
}

impl DocumentHighlight {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything (document reloaded or language changed)
    pub fn reset(&mut self) {
        self.blocks.clear();
    }

    /// Replace `removed` lines at `at` with `inserted` stale lines
    ///
    /// The first line after the edit is marked stale too, since its
    /// predecessor changed.
    pub fn splice(&mut self, at: usize, removed: usize, inserted: usize) {
        let at = at.min(self.blocks.len());
        let end = (at + removed).min(self.blocks.len());
        self.blocks.splice(at..end, std::iter::repeat_with(|| None).take(inserted));
        self.invalidate(at + inserted);
    }

    /// Mark one line as edited in place
    pub fn invalidate(&mut self, line: usize) {
        if let Some(block) = self.blocks.get_mut(line) {
            *block = None;
        }
    }

    /// Bring the cache up to date with `lines`
    ///
    /// Lines are processed strictly in document order starting at the first
    /// stale one. A cached line is reused only if it was highlighted from the
    /// state its predecessor now ends in. Returns the range of lines that
    /// were highlighted again.
    pub fn refresh<S: AsRef<str>>(&mut self, lines: &[S], rule_set: &RuleSet) -> Range<usize> {
        self.blocks.resize_with(lines.len(), || None);

        let Some(first) = self.blocks.iter().position(Option::is_none) else {
            return lines.len()..lines.len();
        };

        let mut last = first;
        let mut i = first;
        while i < lines.len() {
            let previous = self.state_before(i);
            let valid = matches!(&self.blocks[i], Some(cached) if cached.previous == previous);
            if valid {
                // Valid from here up to the next stale line
                match self.blocks[i..].iter().position(Option::is_none) {
                    Some(offset) => i += offset,
                    None => break,
                }
            } else {
                let result = highlight_block(lines[i].as_ref(), rule_set, previous);
                self.blocks[i] = Some(CachedBlock { previous, result });
                last = i;
                i += 1;
            }
        }

        debug!(language = %rule_set.name, from = first, to = last + 1, "refreshed lines");
        first..last + 1
    }

    fn state_before(&self, line: usize) -> BlockState {
        match line.checked_sub(1).and_then(|prev| self.blocks.get(prev)) {
            Some(Some(cached)) => cached.result.state,
            _ => BlockState::NORMAL,
        }
    }

    /// Highlight result for a line, if it is up to date
    pub fn block(&self, line: usize) -> Option<&BlockHighlight> {
        self.blocks.get(line)?.as_ref().map(|cached| &cached.result)
    }

    /// State a line ended in, if it is up to date
    pub fn state(&self, line: usize) -> Option<BlockState> {
        self.block(line).map(|block| block.state)
    }

    /// Number of lines tracked
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no lines are tracked
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
