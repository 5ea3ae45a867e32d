//! Token categories for syntax tagging
//!
//! The closed set of lexical categories a rule can assign. A category
//! selects a style; it has no influence on how matching happens.

/// Lexical token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Language keywords (def, class, if, ...)
    Keyword,
    /// Operators (=, ==, +=, ...)
    Operator,
    /// Braces, brackets and parentheses
    Brace,
    /// Identifier following a declaration keyword (`def name`)
    Declaration,
    /// Single-line string literals
    String,
    /// Multi-line string literals and regions
    String2,
    /// Comments
    Comment,
    /// The receiver identifier (self, this)
    SelfIdent,
    /// Numeric literals
    Number,
}

impl TokenCategory {
    /// Number of categories
    pub const COUNT: usize = 9;

    /// Every category, in declaration order
    pub const ALL: [TokenCategory; Self::COUNT] = [
        TokenCategory::Keyword,
        TokenCategory::Operator,
        TokenCategory::Brace,
        TokenCategory::Declaration,
        TokenCategory::String,
        TokenCategory::String2,
        TokenCategory::Comment,
        TokenCategory::SelfIdent,
        TokenCategory::Number,
    ];

    /// Position of this category in [`TokenCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the configuration name for this category
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Operator => "operator",
            TokenCategory::Brace => "brace",
            TokenCategory::Declaration => "declaration",
            TokenCategory::String => "string",
            TokenCategory::String2 => "string2",
            TokenCategory::Comment => "comment",
            TokenCategory::SelfIdent => "self",
            TokenCategory::Number => "number",
        }
    }

    /// Parse a category from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(TokenCategory::Keyword),
            "operator" => Some(TokenCategory::Operator),
            "brace" => Some(TokenCategory::Brace),
            "declaration" | "defclass" => Some(TokenCategory::Declaration),
            "string" => Some(TokenCategory::String),
            "string2" => Some(TokenCategory::String2),
            "comment" => Some(TokenCategory::Comment),
            "self" => Some(TokenCategory::SelfIdent),
            "number" | "numbers" => Some(TokenCategory::Number),
            _ => None,
        }
    }
}
