//! Terminal rendering of highlighted lines
//!
//! Writes each line through crossterm styling commands, expanding tabs and
//! clipping to a display width.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::syntax::{Color, Highlights, Style, Theme};

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as C;
        match color {
            Color::Default => C::Reset,
            Color::Black => C::Black,
            Color::Red => C::DarkRed,
            Color::Green => C::DarkGreen,
            Color::Yellow => C::DarkYellow,
            Color::Blue => C::DarkBlue,
            Color::Magenta => C::DarkMagenta,
            Color::Cyan => C::DarkCyan,
            Color::White => C::Grey,
            Color::BrightBlack => C::DarkGrey,
            Color::BrightRed => C::Red,
            Color::BrightGreen => C::Green,
            Color::BrightYellow => C::Yellow,
            Color::BrightBlue => C::Blue,
            Color::BrightMagenta => C::Magenta,
            Color::BrightCyan => C::Cyan,
            Color::BrightWhite => C::White,
            Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        }
    }
}

/// Writes highlighted lines to a terminal or any other writer
pub struct Renderer<W: Write> {
    out: W,
    theme: Theme,
    tab_width: usize,
    /// Maximum display columns per line (gutter excluded)
    width: Option<usize>,
    color: bool,
    line_numbers: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a colored renderer with no width limit
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            tab_width: 8,
            width: None,
            color: true,
            line_numbers: false,
        }
    }

    /// Builder: set tab width
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Builder: clip lines to `width` display columns
    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Builder: enable or disable styling
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder: show a line number gutter
    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    /// Render one line; `number` is 1-based and only used for the gutter
    ///
    /// `highlights` should come from highlighting `text`. Spans past the end
    /// of `text` are clipped, and once a span does not fall on character
    /// boundaries the rest of the line is written unstyled.
    pub fn render_line(&mut self, number: usize, text: &str, highlights: &Highlights) -> Result<()> {
        if self.line_numbers {
            queue!(self.out, Print(format!("{number:>4} ")))?;
        }

        let mut col = 0;
        let mut pos = 0;
        let mut fits = true;
        for span in highlights.spans() {
            let start = span.start.clamp(pos, text.len());
            let end = span.end.min(text.len());
            let (Some(before), Some(styled)) = (text.get(pos..start), text.get(start..end)) else {
                break;
            };
            fits = self.segment(before, None, &mut col)?;
            if !fits {
                break;
            }
            let style = self.theme.style(span.category);
            fits = self.segment(styled, Some(style), &mut col)?;
            pos = end;
            if !fits {
                break;
            }
        }
        if fits {
            if let Some(rest) = text.get(pos..) {
                self.segment(rest, None, &mut col)?;
            }
        }

        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    /// Write one run of text; returns `false` once the width limit is hit
    fn segment(&mut self, text: &str, style: Option<Style>, col: &mut usize) -> Result<bool> {
        let limit = self.width.unwrap_or(usize::MAX);
        let mut visible = String::new();
        let mut fits = true;

        for ch in text.chars() {
            let width = if ch == '\t' {
                self.tab_width - *col % self.tab_width
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(1)
            };
            if *col + width > limit {
                fits = false;
                break;
            }
            if ch == '\t' {
                visible.extend(std::iter::repeat(' ').take(width));
            } else {
                visible.push(ch);
            }
            *col += width;
        }

        if visible.is_empty() {
            return Ok(fits);
        }

        match style.filter(|_| self.color) {
            Some(style) => {
                queue!(self.out, SetForegroundColor(style.fg.into()))?;
                if style.bold {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if style.italic {
                    queue!(self.out, SetAttribute(Attribute::Italic))?;
                }
                queue!(self.out, Print(&visible), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            None => queue!(self.out, Print(&visible))?,
        }
        Ok(fits)
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the renderer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
