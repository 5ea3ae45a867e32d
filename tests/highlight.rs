//! Block-by-block highlighting through the public API

use coloring::syntax::{
    highlight_block, python_rules, BlockState, Region, Rule, RuleSet, Span, TokenCategory,
};
use proptest::prelude::*;

/// Keyword `define`, `=` operator, numbers, `#` comments and `'''` strings
fn illustrative() -> RuleSet {
    let mut set = RuleSet::new("Illustrative");
    set.add_words(&["define"], TokenCategory::Keyword).unwrap();
    set.add_literals(&["="], TokenCategory::Operator).unwrap();
    set.add_rule(Rule::new("comment", r"#[^\n]*", 0, TokenCategory::Comment).unwrap());
    set.add_rule(Rule::new("number", r"\b[0-9]+\b", 0, TokenCategory::Number).unwrap());
    set.add_region(Region::symmetric("triple", "'''", 7, TokenCategory::String2).unwrap())
        .unwrap();
    set
}

#[test]
fn document_walkthrough() {
    let set = illustrative();

    let line = highlight_block("define x = 1  # note", &set, BlockState::NORMAL);
    assert_eq!(
        line.highlights.spans(),
        vec![
            Span::new(0, 6, TokenCategory::Keyword),
            Span::new(9, 10, TokenCategory::Operator),
            Span::new(11, 12, TokenCategory::Number),
            Span::new(14, 20, TokenCategory::Comment),
        ]
    );
    assert_eq!(line.state, BlockState::NORMAL);

    let open = highlight_block("s = '''start", &set, line.state);
    assert_eq!(open.state, BlockState::inside(7));
    assert_eq!(open.highlights.spans().last(), Some(&Span::new(4, 12, TokenCategory::String2)));

    let inside = highlight_block("still inside", &set, open.state);
    assert_eq!(inside.state, BlockState::inside(7));
    assert_eq!(inside.highlights.spans(), vec![Span::new(0, 12, TokenCategory::String2)]);

    let close = highlight_block("end'''", &set, inside.state);
    assert_eq!(close.state, BlockState::NORMAL);
    assert_eq!(close.highlights.spans(), vec![Span::new(0, 6, TokenCategory::String2)]);
}

#[test]
fn number_followed_by_operator() {
    // Pinned: with no space the integer and `+=` are still separate tags
    let set = python_rules().unwrap();
    let result = highlight_block("x=1+=2", &set, BlockState::NORMAL);
    assert_eq!(
        result.highlights.spans(),
        vec![
            Span::new(1, 2, TokenCategory::Operator),
            Span::new(2, 3, TokenCategory::Number),
            Span::new(3, 5, TokenCategory::Operator),
            Span::new(5, 6, TokenCategory::Number),
        ]
    );
}

#[test]
fn sign_joins_number_only_after_a_word() {
    // Pinned: the leading `\b` of the number rules decides whether a sign is
    // part of the literal, and numbers run after operators
    let set = python_rules().unwrap();

    let spaced = highlight_block("y = a -5", &set, BlockState::NORMAL);
    assert_eq!(spaced.highlights.category_at(6), Some(TokenCategory::Operator));
    assert_eq!(spaced.highlights.category_at(7), Some(TokenCategory::Number));

    let joined = highlight_block("y = a-5", &set, BlockState::NORMAL);
    assert_eq!(joined.highlights.category_at(5), Some(TokenCategory::Number));
    assert_eq!(joined.highlights.category_at(6), Some(TokenCategory::Number));
}

fn no_quotes() -> impl Strategy<Value = String> {
    "[a-z0-9 =+#()\\[\\]_.-]{0,24}"
}

proptest! {
    #[test]
    fn no_delimiter_means_normal_state(line in "[a-z0-9 =+#()'\"]{0,40}") {
        prop_assume!(!line.contains("'''") && !line.contains("\"\"\""));
        let result = highlight_block(&line, &python_rules().unwrap(), BlockState::NORMAL);
        prop_assert_eq!(result.state, BlockState::NORMAL);
    }

    #[test]
    fn highlighting_is_pure(line in "\\PC{0,40}", previous in 0u8..4) {
        let set = python_rules().unwrap();
        let a = highlight_block(&line, &set, BlockState::inside(previous));
        let b = highlight_block(&line, &set, BlockState::inside(previous));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn region_continues_over_plain_line(line in no_quotes()) {
        let set = illustrative();
        let result = highlight_block(&line, &set, BlockState::inside(7));
        prop_assert_eq!(result.state, BlockState::inside(7));
        if !line.is_empty() {
            prop_assert_eq!(result.highlights.spans(), vec![Span::new(0, line.len(), TokenCategory::String2)]);
        }
    }

    #[test]
    fn closed_region_spans_both_delimiters(pre in no_quotes(), body in no_quotes(), post in no_quotes()) {
        let line = format!("{pre}'''{body}'''{post}");
        let result = highlight_block(&line, &illustrative(), BlockState::NORMAL);
        prop_assert_eq!(result.state, BlockState::NORMAL);

        let start = pre.len();
        let end = start + body.len() + 6;
        let region: Vec<_> = result
            .highlights
            .spans()
            .into_iter()
            .filter(|s| s.category == TokenCategory::String2)
            .collect();
        prop_assert_eq!(region, vec![Span::new(start, end, TokenCategory::String2)]);
    }
}
