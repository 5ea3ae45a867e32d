//! Python rule set

use crate::error::Result;
use crate::syntax::language::RuleSet;
use crate::syntax::rules::{Region, Rule};
use crate::syntax::tokens::TokenCategory;

use super::{add_common, declaration, numbers, quoted_strings};

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "print", "raise", "return", "try", "while",
    "with", "yield", "None", "True", "False",
];

/// State id of the `'''` region
pub const TRIPLE_SINGLE: u8 = 1;
/// State id of the `"""` region
pub const TRIPLE_DOUBLE: u8 = 2;

/// Create the Python rule set
pub fn python_rules() -> Result<RuleSet> {
    let mut set = RuleSet::new("Python");
    set.add_extension("py");
    set.add_extension("pyw");
    set.add_extension("pyi");

    add_common(&mut set, KEYWORDS, true, true)?;
    set.add_rule(Rule::word("self", TokenCategory::SelfIdent)?);
    set.add_rules(quoted_strings()?);
    set.add_rule(declaration("def")?);
    set.add_rule(declaration("class")?);
    set.add_rule(Rule::new("comment", r"#[^\n]*", 0, TokenCategory::Comment)?);
    set.add_rules(numbers()?);

    // Triple-quoted strings (docstrings), single quotes checked first
    set.add_region(Region::symmetric("triple_single", "'''", TRIPLE_SINGLE, TokenCategory::String2)?)?;
    set.add_region(Region::symmetric("triple_double", r#"""""#, TRIPLE_DOUBLE, TokenCategory::String2)?)?;

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::highlighter::highlight_block;
    use crate::syntax::rules::BlockState;

    fn category(line: &str, needle: &str) -> Option<TokenCategory> {
        let set = python_rules().unwrap();
        let offset = line.find(needle).unwrap();
        highlight_block(line, &set, BlockState::NORMAL).highlights.category_at(offset)
    }

    #[test]
    fn test_def_name_and_self() {
        let line = "def area(self):";
        assert_eq!(category(line, "def"), Some(TokenCategory::Keyword));
        assert_eq!(category(line, "area"), Some(TokenCategory::Declaration));
        assert_eq!(category(line, "self"), Some(TokenCategory::SelfIdent));
        assert_eq!(category(line, "("), Some(TokenCategory::Brace));
    }

    #[test]
    fn test_keyword_inside_string_repainted() {
        let line = r#"x = "if not""#;
        assert_eq!(category(line, "if"), Some(TokenCategory::String));
        assert_eq!(category(line, "="), Some(TokenCategory::Operator));
    }

    #[test]
    fn test_comment_repaints_code() {
        let line = "y = 2  # return 0x1F";
        assert_eq!(category(line, "return"), Some(TokenCategory::Comment));
        assert_eq!(category(line, "2"), Some(TokenCategory::Number));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(category("n = 0x1F", "0x1F"), Some(TokenCategory::Number));
        assert_eq!(category("n = 3.5e10", "3.5e10"), Some(TokenCategory::Number));
        assert_eq!(category("n = 3.5e10", "e10"), Some(TokenCategory::Number));
    }

    #[test]
    fn test_docstring_regions() {
        let set = python_rules().unwrap();

        let open = highlight_block(r#"    """Summary"#, &set, BlockState::NORMAL);
        assert_eq!(open.state, BlockState::inside(TRIPLE_DOUBLE));

        let body = highlight_block("    it's # fine", &set, open.state);
        assert_eq!(body.state, BlockState::inside(TRIPLE_DOUBLE));
        assert_eq!(body.highlights.spans().len(), 1);
        assert_eq!(body.highlights.category_at(9), Some(TokenCategory::String2));

        let close = highlight_block(r#"    """"#, &set, body.state);
        assert!(close.state.is_normal());
    }
}
