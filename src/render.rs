//! Output front ends for highlighted text
//!
//! Turns a token stream plus a [`Theme`] into terminal escape sequences
//! (via crossterm), standalone HTML, or a plain token listing.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use crate::error::Result;
use crate::syntax::{Rgb, Theme, Token, TokenType};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// 24-bit colour terminal output
    #[default]
    Ansi,
    Html,
    /// One token per line, for debugging rule order
    Tokens,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Ansi => "ansi",
            Format::Html => "html",
            Format::Tokens => "tokens",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ansi" | "terminal" => Some(Format::Ansi),
            "html" => Some(Format::Html),
            "tokens" | "raw" => Some(Format::Tokens),
            _ => None,
        }
    }
}

/// Settings for terminal output
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiOptions {
    /// Prefix each line with its number
    pub line_numbers: bool,
    /// Paint the theme background behind the text
    pub background: bool,
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Write tokens with terminal colours
///
/// Styles are reset at every line end so that the output can be piped
/// through line-oriented tools.
pub fn write_ansi<'a, W, I>(out: &mut W, tokens: I, theme: &Theme, options: AnsiOptions) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    let mut line = 1;
    let mut at_line_start = true;

    for token in tokens {
        let style = theme.style(token.token_type);
        for piece in token.text.split_inclusive('\n') {
            if at_line_start && options.line_numbers {
                queue!(
                    out,
                    SetAttribute(Attribute::Dim),
                    Print(format!("{line:>4} ")),
                    SetAttribute(Attribute::Reset)
                )?;
            }

            let (body, newline) = match piece.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (piece, false),
            };

            if !body.is_empty() {
                if options.background {
                    queue!(out, SetBackgroundColor(term_color(style.bg.unwrap_or(theme.background))))?;
                }
                if let Some(fg) = style.fg {
                    queue!(out, SetForegroundColor(term_color(fg)))?;
                }
                if style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                if style.italic {
                    queue!(out, SetAttribute(Attribute::Italic))?;
                }
                if style.underline {
                    queue!(out, SetAttribute(Attribute::Underlined))?;
                }
                queue!(out, Print(body), SetAttribute(Attribute::Reset), ResetColor)?;
            }

            at_line_start = newline;
            if newline {
                queue!(out, Print("\n"))?;
                line += 1;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Escape text for HTML element content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write a standalone `<div class="highlight">` block with inline styles
pub fn write_html<'a, W, I>(out: &mut W, tokens: I, theme: &Theme) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    write!(
        out,
        "<div class=\"highlight\" style=\"background: {}\"><pre style=\"line-height: 125%; {}\">",
        theme.background,
        theme.default_style.to_css()
    )?;

    for token in tokens {
        let text = escape_html(token.text);
        let css = theme.get(token.token_type).map(|s| s.to_css()).unwrap_or_default();
        // Whitespace and unstyled text need no wrapper
        if css.is_empty() || token.token_type == TokenType::Text {
            out.write_all(text.as_bytes())?;
        } else {
            write!(out, "<span style=\"{css}\">{text}</span>")?;
        }
    }

    writeln!(out, "</pre></div>")?;
    Ok(())
}

/// CSS rules for class-based HTML (`.highlight .kd { ... }`)
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = format!(
        ".highlight {{ background: {}; {} }}\n",
        theme.background,
        theme.default_style.to_css()
    );
    for (token_type, style) in theme.entries() {
        let class = token_type.css_class();
        if class.is_empty() {
            continue;
        }
        css.push_str(&format!(
            ".highlight .{class} {{ {} }} /* {} */\n",
            style.to_css(),
            token_type.name()
        ));
    }
    css
}

/// Write one `Token.<Category>\t"<text>"` line per token
pub fn write_token_dump<'a, W, I>(out: &mut W, tokens: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token<'a>>,
{
    for token in tokens {
        writeln!(out, "Token.{}\t{:?}", token.token_type.name(), token.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::riddl_language;

    fn render<F>(text: &str, f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>, crate::syntax::Tokens<'_>),
    {
        let lang = riddl_language();
        let mut out = Vec::new();
        f(&mut out, lang.tokens(text));
        String::from_utf8(out).unwrap()
    }

    fn strip_ansi(text: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(text, "").into_owned()
    }

    #[test]
    fn test_format_names() {
        for format in [Format::Ansi, Format::Html, Format::Tokens] {
            assert_eq!(Format::from_name(format.name()), Some(format));
        }
        assert_eq!(Format::from_name("HTML"), Some(Format::Html));
        assert_eq!(Format::from_name("svg"), None);
    }

    #[test]
    fn test_ansi_keeps_text() {
        let text = "domain Shop is {\n  // note\n}\n";
        let theme = Theme::riddl();
        let output = render(text, |out, tokens| {
            write_ansi(out, tokens, &theme, AnsiOptions::default()).unwrap()
        });
        assert_eq!(strip_ansi(&output), text);
        // Keyword colour #fa8b61
        assert!(output.contains("\x1b[38;2;250;139;97m"));
    }

    #[test]
    fn test_ansi_line_numbers() {
        let theme = Theme::riddl();
        let options = AnsiOptions {
            line_numbers: true,
            background: false,
        };
        let output = render("a\n/* b\nc */\n", |out, tokens| {
            write_ansi(out, tokens, &theme, options).unwrap()
        });
        assert_eq!(strip_ansi(&output), "   1 a\n   2 /* b\n   3 c */\n");
    }

    #[test]
    fn test_html_escapes_and_styles() {
        let theme = Theme::riddl();
        let output = render("type A is \"<b>\"", |out, tokens| {
            write_html(out, tokens, &theme).unwrap()
        });
        assert!(output.starts_with("<div class=\"highlight\" style=\"background: #2b2b2b\">"));
        assert!(output.contains("<span style=\"color: #fa8b61\">type</span>"));
        assert!(output.contains("&lt;b&gt;"));
        assert!(!output.contains("<b>"));
        assert!(output.trim_end().ends_with("</pre></div>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & <b> \"c\" 'd'"), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
    }

    #[test]
    fn test_stylesheet() {
        let css = stylesheet(&Theme::riddl());
        assert!(css.starts_with(".highlight { background: #2b2b2b; color: #a9b7c6 }"));
        assert!(css.contains(".highlight .kd { color: #fa8b61 } /* Keyword.Declaration */"));
        assert!(css.contains(".highlight .c1 { color: #808080; font-style: italic }"));
    }

    #[test]
    fn test_token_dump() {
        let output = render("entity \"x\"", |out, tokens| write_token_dump(out, tokens).unwrap());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Token.Keyword.Declaration\t\"entity\"",
                "Token.Text\t\" \"",
                "Token.String.Double\t\"\\\"\"",
                "Token.String.Double\t\"x\"",
                "Token.String.Double\t\"\\\"\"",
            ]
        );
    }
}
