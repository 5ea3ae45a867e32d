//! Block dispatcher
//!
//! Runs the single-line rules of a [`RuleSet`] over one block and then its
//! regions, producing the block's tags and the state handed to the next
//! block. The function is pure: the caller owns every block state.

use tracing::trace;

use super::highlights::Highlights;
use super::language::RuleSet;
use super::region::{region_state, scan_region};
use super::rules::BlockState;
use super::tagger::tag_line;

/// Result of highlighting a single block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockHighlight {
    /// Tags applied to this block
    pub highlights: Highlights,
    /// State at end of block (for the next block)
    pub state: BlockState,
}

/// Highlight one block given the state the previous block ended in
///
/// Base rules are applied first and regions after them, so region tags
/// repaint anything the single-line rules found inside a region. Regions
/// are tried in declaration order; the first one still open at the end of
/// the block decides the new state and the remaining regions are skipped.
/// A `previous` state naming no region of `rule_set` acts as normal.
pub fn highlight_block(text: &str, rule_set: &RuleSet, previous: BlockState) -> BlockHighlight {
    let mut highlights = Highlights::new(text.len());
    tag_line(text, rule_set.rules(), &mut highlights);

    let mut state = BlockState::NORMAL;
    for region in rule_set.regions() {
        if scan_region(text, region, previous, &mut highlights) {
            state = region_state(region, true);
            break;
        }
    }

    if state != previous {
        trace!(
            language = %rule_set.name,
            from = previous.region_id(),
            to = state.region_id(),
            "block state changed"
        );
    }

    BlockHighlight { highlights, state }
}
