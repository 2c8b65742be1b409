//! Colour themes
//!
//! A theme maps every token category to a [`Style`]. The built-in
//! `riddl` theme follows the RIDDL IntelliJ plugin and VS Code colours on
//! a Darcula-like background. Themes can be adjusted with a TOML file:
//!
//! ```toml
//! name = "riddl-light"
//! background = "#ffffff"
//! default = "#000000"
//!
//! [styles]
//! "Keyword.Declaration" = "#a626a4 bold"
//! "Comment.Single" = "#a0a1a7 italic"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::style::{Rgb, Style};
use super::tokens::TokenType;

/// A complete category -> style mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Rgb,
    /// Style for text whose entry has no colour of its own
    pub default_style: Style,
    styles: HashMap<TokenType, Style>,
}

const COMMENT: Rgb = Rgb(0x80, 0x80, 0x80);
const STRING: Rgb = Rgb(0x98, 0xc3, 0x79);
const ESCAPE: Rgb = Rgb(0xe0, 0xbe, 0x35);
const DOC: Rgb = Rgb(0x62, 0x97, 0x55);
const KEYWORD: Rgb = Rgb(0xfa, 0x8b, 0x61);
const READABILITY: Rgb = Rgb(0xb3, 0xae, 0x60);
const BUILTIN: Rgb = Rgb(0x19, 0xc4, 0xbf);
const OPTION_VALUE: Rgb = Rgb(0x57, 0xd0, 0x7c);
const FOREGROUND: Rgb = Rgb(0xa9, 0xb7, 0xc6);
const NUMBER: Rgb = Rgb(0x68, 0x97, 0xbb);
const PUNCTUATION: Rgb = Rgb(0x0d, 0xa1, 0x9e);
const ERROR: Rgb = Rgb(0xc4, 0x19, 0x19);

impl Theme {
    /// Create a theme with no category entries
    pub fn empty(name: &str, background: Rgb, default_style: Style) -> Self {
        Self {
            name: name.to_string(),
            background,
            default_style,
            styles: HashMap::new(),
        }
    }

    /// The built-in RIDDL dark theme
    pub fn riddl() -> Self {
        let mut theme = Self::empty("riddl", Rgb(0x2b, 0x2b, 0x2b), Style::fg(FOREGROUND));
        let entries = [
            (TokenType::Text, Style::fg(FOREGROUND)),
            (TokenType::CommentSingle, Style::fg(COMMENT).with_italic()),
            (TokenType::CommentMultiline, Style::fg(COMMENT).with_italic()),
            (TokenType::StringDouble, Style::fg(STRING)),
            (TokenType::StringEscape, Style::fg(ESCAPE)),
            (TokenType::StringDoc, Style::fg(DOC).with_italic()),
            (TokenType::GenericError, Style::fg(ERROR)),
            (TokenType::NameConstant, Style::fg(OPTION_VALUE)),
            (TokenType::KeywordDeclaration, Style::fg(KEYWORD)),
            (TokenType::Keyword, Style::fg(KEYWORD)),
            (TokenType::KeywordNamespace, Style::fg(KEYWORD)),
            (TokenType::KeywordReserved, Style::fg(KEYWORD)),
            (TokenType::KeywordPseudo, Style::fg(READABILITY)),
            (TokenType::NameBuiltin, Style::fg(BUILTIN)),
            (TokenType::Number, Style::fg(NUMBER)),
            (TokenType::Operator, Style::fg(FOREGROUND)),
            (TokenType::Punctuation, Style::fg(PUNCTUATION)),
            (TokenType::Name, Style::fg(FOREGROUND)),
        ];
        for (token_type, style) in entries {
            theme.set(token_type, style);
        }
        theme
    }

    pub fn set(&mut self, token_type: TokenType, style: Style) {
        self.styles.insert(token_type, style);
    }

    /// Raw entry for a category, if the theme defines one
    pub fn get(&self, token_type: TokenType) -> Option<&Style> {
        self.styles.get(&token_type)
    }

    /// Effective style for a category
    ///
    /// Missing colours are filled in from the default style.
    pub fn style(&self, token_type: TokenType) -> Style {
        let mut style = self.styles.get(&token_type).copied().unwrap_or(self.default_style);
        if style.fg.is_none() {
            style.fg = self.default_style.fg;
        }
        style
    }

    /// Categories without an entry, in declaration order
    pub fn missing_categories(&self) -> Vec<&'static str> {
        TokenType::ALL
            .iter()
            .filter(|t| !self.styles.contains_key(t))
            .map(|t| t.name())
            .collect()
    }

    /// Check that every category has an entry
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_categories();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::IncompleteTheme {
                theme: self.name.clone(),
                missing,
            })
        }
    }

    /// Entries sorted by category
    pub fn entries(&self) -> Vec<(TokenType, Style)> {
        let mut entries: Vec<_> = self.styles.iter().map(|(t, s)| (*t, *s)).collect();
        entries.sort_by_key(|(t, _)| *t);
        entries
    }

    /// Build a theme from a TOML override on top of the built-in one
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut theme = Self::riddl();
        theme.merge_toml(contents)?;
        Ok(theme)
    }

    /// Load a TOML override file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let theme = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), theme = %theme.name, "loaded style file");
        Ok(theme)
    }

    /// Apply the settings of a TOML document to this theme
    ///
    /// On error the theme is left unchanged.
    pub fn merge_toml(&mut self, contents: &str) -> Result<()> {
        let table: toml::Table = contents.parse()?;
        let mut theme = self.clone();

        for (key, value) in &table {
            match key.as_str() {
                "name" => theme.name = expect_str(key, value)?.to_string(),
                "background" => {
                    let hex = expect_str(key, value)?;
                    theme.background = Rgb::parse(hex).ok_or_else(|| Error::InvalidStyle {
                        descriptor: hex.to_string(),
                        reason: "background must be #rgb or #rrggbb".to_string(),
                    })?;
                }
                "default" => theme.default_style = Style::parse(expect_str(key, value)?)?,
                "styles" => {
                    let styles = value
                        .as_table()
                        .ok_or_else(|| Error::Message("'styles' must be a table".to_string()))?;
                    for (category, descriptor) in styles {
                        let token_type = TokenType::from_name(category)
                            .ok_or_else(|| Error::UnknownCategory(category.clone()))?;
                        theme.set(token_type, Style::parse(expect_str(category, descriptor)?)?);
                    }
                }
                _ => tracing::warn!(key = %key, "ignoring unknown style file key"),
            }
        }

        theme.validate()?;
        *self = theme;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::riddl()
    }
}

fn expect_str<'a>(key: &str, value: &'a toml::Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::Message(format!("'{key}' must be a string")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::riddl_language;

    #[test]
    fn test_riddl_theme_is_complete() {
        let theme = Theme::riddl();
        assert!(theme.missing_categories().is_empty());
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_theme_covers_every_emitted_category() {
        let theme = Theme::riddl();
        for token_type in riddl_language().token_types() {
            assert!(theme.get(token_type).is_some(), "no style for {token_type}");
        }
    }

    #[test]
    fn test_reference_colours() {
        let theme = Theme::riddl();
        assert_eq!(theme.background.to_string(), "#2b2b2b");
        assert_eq!(theme.style(TokenType::CommentSingle).to_string(), "#808080 italic");
        assert_eq!(theme.style(TokenType::KeywordPseudo).to_string(), "#b3ae60");
        assert_eq!(theme.style(TokenType::NameConstant).to_string(), "#57d07c");
        assert_eq!(theme.style(TokenType::GenericError).to_string(), "#c41919");
    }

    #[test]
    fn test_incomplete_theme_rejected() {
        let mut theme = Theme::empty("bare", Rgb(0, 0, 0), Style::default());
        theme.set(TokenType::Text, Style::default());
        let missing = theme.missing_categories();
        assert_eq!(missing.len(), TokenType::ALL.len() - 1);
        assert!(matches!(theme.validate(), Err(Error::IncompleteTheme { .. })));
    }

    #[test]
    fn test_style_fills_default_colour() {
        let mut theme = Theme::riddl();
        theme.set(TokenType::Name, Style::default().with_bold());
        let style = theme.style(TokenType::Name);
        assert!(style.bold);
        assert_eq!(style.fg, Some(FOREGROUND));
    }

    #[test]
    fn test_toml_override() {
        let theme = Theme::from_toml(
            r##"
name = "riddl-light"
background = "#ffffff"
default = "#000000"

[styles]
"Keyword.Declaration" = "#a626a4 bold"
"##,
        )
        .unwrap();

        assert_eq!(theme.name, "riddl-light");
        assert_eq!(theme.background, Rgb(255, 255, 255));
        assert_eq!(
            theme.style(TokenType::KeywordDeclaration),
            Style::fg(Rgb(0xa6, 0x26, 0xa4)).with_bold()
        );
        // Untouched entries keep the built-in style
        assert_eq!(theme.style(TokenType::Number), Style::fg(NUMBER));
    }

    #[test]
    fn test_toml_unknown_category() {
        let err = Theme::from_toml("[styles]\n\"Keyword.Bogus\" = \"#fff\"\n").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(name) if name == "Keyword.Bogus"));
    }

    #[test]
    fn test_toml_bad_values() {
        assert!(matches!(Theme::from_toml("background = 3"), Err(Error::Message(_))));
        assert!(matches!(Theme::from_toml("background = \"red\""), Err(Error::InvalidStyle { .. })));
        assert!(matches!(Theme::from_toml("styles = \"x\""), Err(Error::Message(_))));
        assert!(matches!(Theme::from_toml("not toml ["), Err(Error::Toml(_))));
    }

    #[test]
    fn test_failed_merge_leaves_theme_unchanged() {
        let mut theme = Theme::riddl();
        let contents = "name = \"broken\"\nbackground = \"#ffffff\"\n[styles]\nNumber = \"#000\"\n\"Keyword.Bogus\" = \"#fff\"\n";
        assert!(matches!(theme.merge_toml(contents), Err(Error::UnknownCategory(_))));
        assert_eq!(theme, Theme::riddl());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load(Path::new("/nonexistent/riddl-style.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
