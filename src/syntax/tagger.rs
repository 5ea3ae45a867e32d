//! Single-line tagger
//!
//! Applies an ordered rule list to one line. Each rule is scanned left to
//! right and every match is applied immediately, so a later rule repaints
//! whatever an earlier rule tagged at the same bytes.

use tracing::warn;

use super::highlights::{Highlights, Tag};
use super::rules::Rule;

/// Upper bound on match attempts for one pattern over one line
///
/// Every attempt moves the search position forward by at least one
/// character, so a line of `n` bytes never needs more than `n + 1`.
pub(crate) fn scan_budget(line: &str) -> usize {
    line.len() + 1
}

/// Next search position after a match ending at `next`, found from `pos`
///
/// Always moves past `pos` and never lands inside a UTF-8 character.
/// Returns a value past `line.len()` once the line is exhausted.
pub(crate) fn advance(line: &str, pos: usize, next: usize) -> usize {
    if next > pos {
        return next;
    }
    match line.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(ch) => pos + ch.len_utf8(),
        None => line.len() + 1,
    }
}

/// Apply every rule to `line`, in order
pub fn tag_line(line: &str, rules: &[Rule], highlights: &mut Highlights) {
    for rule in rules {
        tag_rule(line, rule, highlights);
    }
}

fn tag_rule(line: &str, rule: &Rule, highlights: &mut Highlights) {
    let budget = scan_budget(line);
    let mut pos = 0;
    let mut attempts = 0;

    while pos <= line.len() {
        if attempts == budget {
            warn!(rule = %rule.name, line_len = line.len(), "scan budget exhausted");
            break;
        }
        attempts += 1;

        let Some(caps) = rule.pattern.captures_at(line, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        // Resume right after the captured text, not the whole match
        let next = match caps.get(rule.capture) {
            Some(m) => {
                highlights.apply(Tag::new(m.start(), m.len(), rule.category));
                m.end()
            }
            None => whole.end(),
        };
        pos = advance(line, pos, next);
    }
}
