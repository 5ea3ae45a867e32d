//! Pattern rules for syntax tagging
//!
//! This module defines the single-line [`Rule`], the multi-line
//! [`Region`] and the per-block [`BlockState`] carried between them.

use regex::Regex;

use super::tokens::TokenCategory;
use crate::error::{Error, Result};

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        name: name.to_string(),
        source,
    })
}

/// A single-line pattern rule
///
/// Every match of `pattern` on a line tags the `capture` group with
/// `category`. Capture 0 is the whole match.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Capture group that receives the tag
    pub capture: usize,
    /// Category assigned to the captured text
    pub category: TokenCategory,
}

impl Rule {
    /// Create a new rule, validating the pattern and capture index
    pub fn new(name: &str, pattern: &str, capture: usize, category: TokenCategory) -> Result<Self> {
        let pattern = compile(name, pattern)?;
        if capture >= pattern.captures_len() {
            return Err(Error::MissingCapture {
                name: name.to_string(),
                index: capture,
            });
        }
        Ok(Self {
            name: name.to_string(),
            pattern,
            capture,
            category,
        })
    }

    /// Create a rule matching `word` as a whole word
    pub fn word(word: &str, category: TokenCategory) -> Result<Self> {
        Self::new(word, &format!(r"\b{}\b", regex::escape(word)), 0, category)
    }

    /// Create a rule matching `literal` verbatim
    pub fn literal(literal: &str, category: TokenCategory) -> Result<Self> {
        Self::new(literal, &regex::escape(literal), 0, category)
    }
}

/// A multi-line construct (triple-quoted string, block comment)
///
/// Symmetric regions reuse the opening delimiter to close; asymmetric
/// regions have a distinct closing delimiter.
#[derive(Debug, Clone)]
pub struct Region {
    /// Name for debugging
    pub name: String,
    open: Regex,
    close: Option<Regex>,
    state_id: u8,
    /// Category painted over the region
    pub category: TokenCategory,
}

impl Region {
    /// Create a region whose open and close delimiters are the same token
    pub fn symmetric(name: &str, delimiter: &str, state_id: u8, category: TokenCategory) -> Result<Self> {
        Self::build(name, delimiter, None, state_id, category)
    }

    /// Create a region with distinct open and close delimiters
    pub fn asymmetric(
        name: &str,
        open: &str,
        close: &str,
        state_id: u8,
        category: TokenCategory,
    ) -> Result<Self> {
        Self::build(name, open, Some(close), state_id, category)
    }

    fn build(
        name: &str,
        open: &str,
        close: Option<&str>,
        state_id: u8,
        category: TokenCategory,
    ) -> Result<Self> {
        if state_id == 0 {
            return Err(Error::ZeroStateId(name.to_string()));
        }
        let open = delimiter(name, open)?;
        let close = close.map(|close| delimiter(name, close)).transpose()?;
        Ok(Self {
            name: name.to_string(),
            open,
            close,
            state_id,
            category,
        })
    }

    /// Pattern that opens the region
    pub fn open(&self) -> &Regex {
        &self.open
    }

    /// Pattern that closes the region
    pub fn close(&self) -> &Regex {
        self.close.as_ref().unwrap_or(&self.open)
    }

    /// Whether one pattern serves as both delimiters
    pub fn is_symmetric(&self) -> bool {
        self.close.is_none()
    }

    /// Block state recorded while this region is open
    pub fn state_id(&self) -> u8 {
        self.state_id
    }
}

/// Compile a delimiter, refusing patterns that can match nothing at all
///
/// Assertions such as `\b` never match the empty input yet still match
/// zero bytes inside a line, so the shortest possible match is checked.
fn delimiter(name: &str, pattern: &str) -> Result<Regex> {
    let regex = compile(name, pattern)?;
    let min_len = regex_syntax::Parser::new()
        .parse(pattern)
        .ok()
        .and_then(|hir| hir.properties().minimum_len());
    if min_len == Some(0) || regex.is_match("") {
        return Err(Error::EmptyDelimiter(name.to_string()));
    }
    Ok(regex)
}

/// State carried from the end of one block into the next
///
/// 0 means the block ended outside every region; any other value is the
/// state id of the region still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockState {
    region_id: u8,
}

impl BlockState {
    /// Outside every region
    pub const NORMAL: BlockState = BlockState { region_id: 0 };

    /// State for being inside the region with `state_id`
    pub fn inside(state_id: u8) -> Self {
        Self { region_id: state_id }
    }

    /// State id of the open region, 0 when none is open
    pub fn region_id(&self) -> u8 {
        self.region_id
    }

    /// Check if a region is open
    pub fn is_inside_region(&self) -> bool {
        self.region_id != 0
    }

    /// Check if we're in normal (no region) state
    pub fn is_normal(&self) -> bool {
        self.region_id == 0
    }
}

impl From<u8> for BlockState {
    fn from(raw: u8) -> Self {
        Self::inside(raw)
    }
}

impl From<BlockState> for u8 {
    fn from(state: BlockState) -> Self {
        state.region_id
    }
}
