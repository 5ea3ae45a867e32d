//! Multi-line region tracker
//!
//! Decides which parts of one line belong to a [`Region`] given the state
//! the previous line ended in, and whether the region is still open when
//! the line ends.

use tracing::warn;

use super::highlights::{Highlights, Tag};
use super::rules::{BlockState, Region};
use super::tagger::{advance, scan_budget};

/// Tag the parts of `line` covered by `region`
///
/// Returns `true` if the region is still open at the end of the line.
/// Regions that open and close within the line are tagged and scanning
/// continues for further openings after them.
pub fn scan_region(line: &str, region: &Region, previous: BlockState, highlights: &mut Highlights) -> bool {
    // (region start, width of the opening delimiter on this line)
    let mut opening = if previous.region_id() == region.state_id() {
        Some((0, 0))
    } else {
        region.open().find(line).map(|m| (m.start(), m.len()))
    };

    let budget = scan_budget(line);
    let mut attempts = 0;
    let mut open_at_end = false;

    while let Some((start, add)) = opening {
        if attempts == budget {
            warn!(region = %region.name, line_len = line.len(), "scan budget exhausted");
            break;
        }
        attempts += 1;

        let Some(close) = region.close().find_at(line, start + add) else {
            highlights.apply(Tag::new(start, line.len() - start, region.category));
            open_at_end = true;
            break;
        };

        highlights.apply(Tag::new(start, close.end() - start, region.category));
        open_at_end = false;

        let resume = advance(line, start, close.end());
        opening = if resume > line.len() {
            None
        } else {
            region.open().find_at(line, resume).map(|m| (m.start(), m.len()))
        };
    }

    open_at_end
}

/// Block state after scanning one region over a line
pub fn region_state(region: &Region, open_at_end: bool) -> BlockState {
    if open_at_end {
        BlockState::inside(region.state_id())
    } else {
        BlockState::NORMAL
    }
}
