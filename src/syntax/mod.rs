//! Syntax tagging module
//!
//! Line-at-a-time tagging of source text. Each block (line) is tagged from
//! its own text and the [`BlockState`] the previous block ended in:
//! - [`tagger`] applies the single-line rules
//! - [`region`] tracks multi-line regions across block boundaries
//! - [`highlight_block`] runs both in a fixed order

mod builtin;
mod document;
mod highlighter;
mod highlights;
mod language;
mod registry;
mod rules;
mod style;
mod tokens;

pub mod region;
pub mod tagger;

pub use builtin::{add_common, all_languages, csharp_rules, python_rules, BRACES, OPERATORS};
pub use document::DocumentHighlight;
pub use highlighter::{highlight_block, BlockHighlight};
pub use highlights::{Highlights, Span, Tag};
pub use language::RuleSet;
pub use registry::LanguageRegistry;
pub use rules::{BlockState, Region, Rule};
pub use style::{Color, Style, Theme};
pub use tokens::TokenCategory;
