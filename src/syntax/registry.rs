//! Language registry
//!
//! Resolves which [`RuleSet`] applies to a document, by name or by file
//! extension. The highlighter never does this itself; it is always handed
//! an already-selected rule set.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::language::RuleSet;
use crate::error::{Error, Result};

/// Loaded rule sets and the extension map pointing at them
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    /// Rule sets keyed by lowercase name
    languages: HashMap<String, RuleSet>,
    /// Extension to lowercase language name mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in languages
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for lang in builtin::all_languages()? {
            registry.add(lang);
        }
        Ok(registry)
    }

    /// Add a rule set, replacing any language with the same name
    pub fn add(&mut self, lang: RuleSet) {
        let key = lang.name.to_lowercase();
        if let Some(old) = self.languages.remove(&key) {
            self.extension_map.retain(|_, name| *name != key);
            debug!(language = %old.name, "replacing language");
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
        debug!(language = %lang.name, extensions = ?lang.extensions, "registered language");
        self.languages.insert(key, lang);
    }

    /// Get a rule set by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.languages.get(&name.to_lowercase())
    }

    /// Get a rule set by name or fail
    pub fn require(&self, name: &str) -> Result<&RuleSet> {
        self.get(name).ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    /// Detect the rule set for a file from its extension
    pub fn detect(&self, filename: &Path) -> Option<&RuleSet> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let lang = self.extension_map.get(&ext).and_then(|key| self.languages.get(key));
        debug!(file = %filename.display(), language = ?lang.map(|l| l.name.as_str()), "detected language");
        lang
    }

    /// List available languages
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.values().map(|l| l.name.as_str()).collect();
        names.sort();
        names
    }
}
