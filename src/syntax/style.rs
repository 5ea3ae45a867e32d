//! Style types and the style registry
//!
//! A [`Theme`] maps every [`TokenCategory`] to a display [`Style`]. Themes
//! are built once at startup and only read afterwards.

use super::tokens::TokenCategory;
use crate::error::{Error, Result};

/// Foreground colors: the ANSI 16-color palette plus true color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a palette name or a `#rrggbb` literal
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::UnknownColor(s.to_string()));
        }

        let color = match s.to_lowercase().replace('_', "-").as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return Err(Error::UnknownColor(s.to_string())),
        };
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Display attributes for one token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Style registry: one style per token category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    styles: [Style; TokenCategory::COUNT],
}

impl Theme {
    /// Palette for light backgrounds
    pub fn light() -> Self {
        Self::from_fn("light", |category| match category {
            TokenCategory::Keyword => Style::fg(Color::Blue),
            TokenCategory::Operator => Style::fg(Color::Red),
            TokenCategory::Brace => Style::fg(Color::BrightBlack),
            TokenCategory::Declaration => Style::fg(Color::Black).with_bold(),
            TokenCategory::String => Style::fg(Color::BrightMagenta),
            TokenCategory::String2 => Style::fg(Color::Magenta),
            TokenCategory::Comment => Style::fg(Color::Green).with_italic(),
            TokenCategory::SelfIdent => Style::fg(Color::Black).with_italic(),
            TokenCategory::Number => Style::fg(Color::Rgb(165, 42, 42)),
        })
    }

    /// Palette for dark backgrounds
    pub fn dark() -> Self {
        Self::from_fn("dark", |category| match category {
            TokenCategory::Keyword => Style::fg(Color::Rgb(200, 120, 50)).with_bold(),
            TokenCategory::Operator => Style::fg(Color::Rgb(150, 150, 150)),
            TokenCategory::Brace => Style::fg(Color::BrightBlack),
            TokenCategory::Declaration => Style::fg(Color::Rgb(220, 220, 255)).with_bold(),
            TokenCategory::String => Style::fg(Color::Rgb(20, 110, 100)),
            TokenCategory::String2 => Style::fg(Color::Rgb(30, 120, 110)),
            TokenCategory::Comment => Style::fg(Color::Rgb(128, 128, 128)),
            TokenCategory::SelfIdent => Style::fg(Color::Rgb(150, 85, 140)).with_italic(),
            TokenCategory::Number => Style::fg(Color::Rgb(100, 150, 190)),
        })
    }

    /// Look up a built-in theme by name
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "light" => Ok(Self::light()),
            "dark" => Ok(Self::dark()),
            _ => Err(Error::UnknownTheme(name.to_string())),
        }
    }

    fn from_fn(name: &str, f: impl Fn(TokenCategory) -> Style) -> Self {
        Self {
            name: name.to_string(),
            styles: TokenCategory::ALL.map(f),
        }
    }

    /// Theme name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style for a category
    pub fn style(&self, category: TokenCategory) -> Style {
        self.styles[category.index()]
    }

    /// Builder: replace the style of one category
    pub fn with_style(mut self, category: TokenCategory, style: Style) -> Self {
        self.styles[category.index()] = style;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_italic();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("red").unwrap(), Color::Red);
        assert_eq!(Color::parse("Bright_Blue").unwrap(), Color::BrightBlue);
        assert_eq!(Color::parse("grey").unwrap(), Color::BrightBlack);
        assert_eq!(Color::parse("#c87832").unwrap(), Color::Rgb(200, 120, 50));
        assert!(matches!(Color::parse("#c878"), Err(Error::UnknownColor(_))));
        assert!(matches!(Color::parse("chartreuse"), Err(Error::UnknownColor(_))));
    }

    #[test]
    fn test_every_category_styled() {
        for theme in [Theme::light(), Theme::dark()] {
            for category in TokenCategory::ALL {
                assert!(!theme.style(category).is_default(), "{} in {}", category.name(), theme.name());
            }
        }
    }

    #[test]
    fn test_theme_lookup_and_override() {
        let theme = Theme::by_name("Dark").unwrap();
        assert!(theme.style(TokenCategory::Keyword).bold);
        assert!(theme.style(TokenCategory::SelfIdent).italic);

        let theme = theme.with_style(TokenCategory::Comment, Style::fg(Color::Cyan));
        assert_eq!(theme.style(TokenCategory::Comment), Style::fg(Color::Cyan));
        assert!(matches!(Theme::by_name("solarized"), Err(Error::UnknownTheme(_))));
    }
}
