//! Built-in rule sets
//!
//! This module provides rule sets for the languages supported out of the
//! box, plus the operator, brace, string and number rules they share.

mod csharp;
mod python;

use super::language::RuleSet;
use super::rules::Rule;
use super::tokens::TokenCategory;
use crate::error::Result;

pub use csharp::csharp_rules;
pub use python::python_rules;

/// Operators shared by every built-in language
pub const OPERATORS: &[&str] = &[
    "=",
    // Comparison
    "==", "!=", "<", "<=", ">", ">=",
    // Arithmetic
    "+", "-", "*", "/", "//", "%", "**",
    // In-place
    "+=", "-=", "*=", "/=", "%=",
    // Bitwise
    "^", "|", "&", "~", ">>", "<<",
];

/// Braces shared by every built-in language
pub const BRACES: &[&str] = &["{", "}", "(", ")", "[", "]"];

/// Get all built-in rule sets
pub fn all_languages() -> Result<Vec<RuleSet>> {
    Ok(vec![python_rules()?, csharp_rules()?])
}

/// Keywords, then the shared operators, then the shared braces
pub fn add_common(set: &mut RuleSet, keywords: &[&str], operators: bool, braces: bool) -> Result<()> {
    set.add_words(keywords, TokenCategory::Keyword)?;
    if operators {
        set.add_literals(OPERATORS, TokenCategory::Operator)?;
    }
    if braces {
        set.add_literals(BRACES, TokenCategory::Brace)?;
    }
    Ok(())
}

/// Double- and single-quoted strings with backslash escapes
pub(crate) fn quoted_strings() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("double_string", r#""[^"\\]*(\\.[^"\\]*)*""#, 0, TokenCategory::String)?,
        Rule::new("single_string", r"'[^'\\]*(\\.[^'\\]*)*'", 0, TokenCategory::String)?,
    ])
}

/// `keyword name`, tagging only the name
pub(crate) fn declaration(keyword: &str) -> Result<Rule> {
    Rule::new(
        &format!("{keyword}_name"),
        &format!(r"\b{}\b\s*(\w+)", regex::escape(keyword)),
        1,
        TokenCategory::Declaration,
    )
}

/// Decimal, hex and float literals, in that order
pub(crate) fn numbers() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("integer", r"\b[+-]?[0-9]+[lL]?\b", 0, TokenCategory::Number)?,
        Rule::new("hex", r"\b[+-]?0[xX][0-9A-Fa-f]+[lL]?\b", 0, TokenCategory::Number)?,
        Rule::new(
            "float",
            r"\b[+-]?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?\b",
            0,
            TokenCategory::Number,
        )?,
    ])
}
