//! Rule sets for syntax tagging
//!
//! A [`RuleSet`] bundles the ordered single-line rules and the multi-line
//! regions of one language. Rule order is significant: rules run in
//! insertion order and later rules repaint earlier ones.

use super::rules::{Region, Rule};
use super::tokens::TokenCategory;
use crate::error::{Error, Result};

/// The complete tagging configuration for one language
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Language name (e.g., "Python", "C#")
    pub name: String,
    /// File extensions without the dot (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    rules: Vec<Rule>,
    regions: Vec<Region>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_string());
    }

    /// Append a rule after every rule added so far
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append several rules, keeping their order
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
    }

    /// Append one whole-word rule per keyword
    pub fn add_words(&mut self, words: &[&str], category: TokenCategory) -> Result<()> {
        for word in words {
            self.add_rule(Rule::word(word, category)?);
        }
        Ok(())
    }

    /// Append one literal rule per token
    pub fn add_literals(&mut self, literals: &[&str], category: TokenCategory) -> Result<()> {
        for literal in literals {
            self.add_rule(Rule::literal(literal, category)?);
        }
        Ok(())
    }

    /// Append a region; regions are checked in the order they are added
    pub fn add_region(&mut self, region: Region) -> Result<()> {
        if self.region(region.state_id()).is_some() {
            return Err(Error::DuplicateStateId {
                language: self.name.clone(),
                state_id: region.state_id(),
            });
        }
        self.regions.push(region);
        Ok(())
    }

    /// Single-line rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Regions in declaration order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Get a region by state ID
    pub fn region(&self, state_id: u8) -> Option<&Region> {
        self.regions.iter().find(|r| r.state_id() == state_id)
    }

    /// Check whether a file extension belongs to this language
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
