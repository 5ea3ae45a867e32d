//! C# rule set

use crate::error::Result;
use crate::syntax::language::RuleSet;
use crate::syntax::rules::{Region, Rule};
use crate::syntax::tokens::TokenCategory;

use super::{add_common, declaration, numbers, quoted_strings};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "throw", "true", "try",
    "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void",
    "volatile", "while", "var",
];

const DECLARATIONS: &[&str] = &["class", "struct", "interface", "enum", "namespace"];

/// State id of the block comment region
pub const BLOCK_COMMENT: u8 = 3;

/// Create the C# rule set
pub fn csharp_rules() -> Result<RuleSet> {
    let mut set = RuleSet::new("C#");
    set.add_extension("cs");

    add_common(&mut set, KEYWORDS, true, true)?;
    set.add_rule(Rule::word("this", TokenCategory::SelfIdent)?);
    set.add_rules(quoted_strings()?);
    for keyword in DECLARATIONS {
        set.add_rule(declaration(keyword)?);
    }
    set.add_rule(Rule::new("line_comment", r"//[^\n]*", 0, TokenCategory::Comment)?);
    set.add_rules(numbers()?);

    set.add_region(Region::asymmetric(
        "block_comment",
        r"/\*",
        r"\*/",
        BLOCK_COMMENT,
        TokenCategory::Comment,
    )?)?;

    Ok(set)
}
