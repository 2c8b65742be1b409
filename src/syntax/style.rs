//! Style types for highlighted output
//!
//! Colours are 24-bit RGB. A [`Style`] can be written and read in the
//! compact descriptor form used by Pygments styles, e.g.
//! `"#808080 italic"` or `"#fa8b61 bold bg:#2b2b2b"`.

use std::fmt;

use crate::error::{Error, Result};

/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rgb` or `#rrggbb`
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 16 + v
                });
                Some(Rgb(channels.next()?, channels.next()?, channels.next()?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground colour (None = inherit the theme default)
    pub fg: Option<Rgb>,
    /// Background colour
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
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

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a descriptor such as `"#808080 italic"`
    pub fn parse(descriptor: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidStyle {
            descriptor: descriptor.to_string(),
            reason,
        };

        let mut style = Style::default();
        for word in descriptor.split_whitespace() {
            match word {
                "bold" => style.bold = true,
                "nobold" => style.bold = false,
                "italic" => style.italic = true,
                "noitalic" => style.italic = false,
                "underline" => style.underline = true,
                "nounderline" => style.underline = false,
                _ if word.starts_with("bg:") => {
                    let color = Rgb::parse(&word[3..])
                        .ok_or_else(|| invalid(format!("bad background colour '{}'", &word[3..])))?;
                    style.bg = Some(color);
                }
                _ if word.starts_with('#') => {
                    let color =
                        Rgb::parse(word).ok_or_else(|| invalid(format!("bad colour '{word}'")))?;
                    style.fg = Some(color);
                }
                _ => return Err(invalid(format!("unknown attribute '{word}'"))),
            }
        }
        Ok(style)
    }

    /// Inline CSS for HTML output
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(fg) = self.fg {
            parts.push(format!("color: {fg}"));
        }
        if let Some(bg) = self.bg {
            parts.push(format!("background-color: {bg}"));
        }
        if self.bold {
            parts.push("font-weight: bold".to_string());
        }
        if self.italic {
            parts.push("font-style: italic".to_string());
        }
        if self.underline {
            parts.push("text-decoration: underline".to_string());
        }
        parts.join("; ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::new();
        if let Some(fg) = self.fg {
            words.push(fg.to_string());
        }
        if self.bold {
            words.push("bold".to_string());
        }
        if self.italic {
            words.push("italic".to_string());
        }
        if self.underline {
            words.push("underline".to_string());
        }
        if let Some(bg) = self.bg {
            words.push(format!("bg:{bg}"));
        }
        f.write_str(&words.join(" "))
    }
}
