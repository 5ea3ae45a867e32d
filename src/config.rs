//! Configuration file support
//!
//! Loads settings from ~/.coloring.toml (or %USERPROFILE%\.coloring.toml on
//! Windows). Besides display settings, the file can restyle categories and
//! declare extra languages.
//!
//! Example:
//! ```text
//! theme = "dark"
//! tab-width = 4
//!
//! [styles.comment]
//! color = "#808080"
//! italic = true
//!
//! [[language]]
//! name = "Shell"
//! extensions = ["sh"]
//! keywords = ["if", "then", "fi"]
//!
//! [[language.rule]]
//! pattern = '#[^\n]*'
//! category = "comment"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::syntax::{add_common, Color, Region, Rule, RuleSet, Style, Theme, TokenCategory};

/// Configuration settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Built-in style table to start from
    pub theme: String,
    /// Tab width for display
    pub tab_width: usize,
    /// Whether to show line numbers
    pub line_numbers: bool,
    /// Per-category style overrides
    pub styles: BTreeMap<String, StyleConfig>,
    /// Extra languages
    #[serde(rename = "language")]
    pub languages: Vec<LanguageConfig>,
}

/// Style override for one category
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

/// A language declared in the configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageConfig {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Include the shared operator list
    #[serde(default = "default_true")]
    pub operators: bool,
    /// Include the shared brace list
    #[serde(default = "default_true")]
    pub braces: bool,
    /// Rules applied after keywords, operators and braces, in order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
    #[serde(default, rename = "region")]
    pub regions: Vec<RegionConfig>,
}

/// One single-line rule
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,
    #[serde(default)]
    pub capture: usize,
    pub category: String,
}

/// One multi-line region; without `close` the region is symmetric
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    pub open: String,
    pub close: Option<String>,
    pub state: u8,
    pub category: String,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            tab_width: 8,
            line_numbers: false,
            styles: BTreeMap::new(),
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".coloring.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".coloring.toml"))
        }
    }

    /// Load the user's configuration; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), languages = config.languages.len(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.tab_width = config.tab_width.clamp(1, 16);
        Ok(config)
    }

    /// Build the theme: the named base table plus overrides
    pub fn build_theme(&self) -> Result<Theme> {
        let mut theme = Theme::by_name(&self.theme)?;
        for (name, style) in &self.styles {
            let category = parse_category(name)?;
            let fg = match &style.color {
                Some(color) => Color::parse(color)?,
                None => theme.style(category).fg,
            };
            theme = theme.with_style(
                category,
                Style {
                    fg,
                    bold: style.bold,
                    italic: style.italic,
                },
            );
        }
        Ok(theme)
    }

    /// Build every configured language
    pub fn build_languages(&self) -> Result<Vec<RuleSet>> {
        self.languages.iter().map(LanguageConfig::build).collect()
    }
}

impl LanguageConfig {
    /// Build the rule set this entry describes
    pub fn build(&self) -> Result<RuleSet> {
        let mut set = RuleSet::new(&self.name);
        for ext in &self.extensions {
            set.add_extension(ext);
        }

        let keywords: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        add_common(&mut set, &keywords, self.operators, self.braces)?;

        for (i, rule) in self.rules.iter().enumerate() {
            let name = format!("{}#{}", self.name, i);
            set.add_rule(Rule::new(&name, &rule.pattern, rule.capture, parse_category(&rule.category)?)?);
        }

        for (i, region) in self.regions.iter().enumerate() {
            let name = format!("{}#region{}", self.name, i);
            let category = parse_category(&region.category)?;
            let region = match &region.close {
                Some(close) => Region::asymmetric(&name, &region.open, close, region.state, category)?,
                None => Region::symmetric(&name, &region.open, region.state, category)?,
            };
            set.add_region(region)?;
        }

        Ok(set)
    }
}

fn parse_category(name: &str) -> Result<TokenCategory> {
    TokenCategory::from_name(name).ok_or_else(|| Error::UnknownCategory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_block, BlockState};
    use std::io::Write;

    const SHELL: &str = r#"
theme = "dark"
tab-width = 40
line-numbers = true

[styles.comment]
color = "cyan"
italic = true

[styles.keyword]
bold = true

[[language]]
name = "Shell"
extensions = ["sh", "bash"]
keywords = ["if", "then", "fi"]
braces = false

[[language.rule]]
pattern = '#[^\n]*'
category = "comment"

[[language.rule]]
pattern = '\bfunction\s+(\w+)'
capture = 1
category = "declaration"

[[language.region]]
open = "<<EOF"
close = "^EOF"
state = 1
category = "string2"
"#;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.tab_width, 8);
        assert!(!config.line_numbers);
        assert!(config.languages.is_empty());
    }

    #[test]
    fn test_parse_settings() {
        let config = Config::parse(SHELL).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tab_width, 16);
        assert!(config.line_numbers);
        assert_eq!(config.languages.len(), 1);
        assert_eq!(config.languages[0].rules.len(), 2);
    }

    #[test]
    fn test_build_theme() {
        let theme = Config::parse(SHELL).unwrap().build_theme().unwrap();
        assert_eq!(theme.name(), "dark");
        assert_eq!(theme.style(TokenCategory::Comment), Style::fg(Color::Cyan).with_italic());
        // No color given: keep the base color
        assert_eq!(theme.style(TokenCategory::Keyword).fg, Theme::dark().style(TokenCategory::Keyword).fg);
    }

    #[test]
    fn test_build_language() {
        let languages = Config::parse(SHELL).unwrap().build_languages().unwrap();
        let shell = &languages[0];
        assert!(shell.handles_extension("bash"));
        assert_eq!(shell.regions().len(), 1);

        let result = highlight_block("function greet # hi", shell, BlockState::NORMAL);
        assert_eq!(result.highlights.category_at(9), Some(TokenCategory::Declaration));
        assert_eq!(result.highlights.category_at(15), Some(TokenCategory::Comment));

        let result = highlight_block("cat <<EOF", shell, BlockState::NORMAL);
        assert_eq!(result.state, BlockState::inside(1));
        let result = highlight_block("EOF", shell, result.state);
        assert!(result.state.is_normal());
    }

    #[test]
    fn test_bad_category() {
        let config = Config::parse(
            r#"
[[language]]
name = "Broken"
[[language.rule]]
pattern = "x"
category = "sparkle"
"#,
        )
        .unwrap();
        assert!(matches!(config.build_languages(), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn test_bad_pattern() {
        let config = Config::parse(
            r#"
[[language]]
name = "Broken"
[[language.rule]]
pattern = "(x"
category = "keyword"
"#,
        )
        .unwrap();
        assert!(matches!(config.build_languages(), Err(Error::Pattern { .. })));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(Config::parse("theme = "), Err(Error::Config(_))));
        assert!(matches!(
            Config::parse("theme = \"neon\"").unwrap().build_theme(),
            Err(Error::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"theme = \"dark\"\ntab-width = 2\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tab_width, 2);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Config::load_from(&missing), Err(Error::Io(_))));
    }
}
