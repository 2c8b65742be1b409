//! riddl-highlight - syntax highlighting for RIDDL files
//!
//! Reads a RIDDL source (or stdin) and writes it highlighted for the
//! terminal, as HTML, or as a token listing.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use riddl_highlight::config::Config;
use riddl_highlight::render::{self, AnsiOptions, Format};
use riddl_highlight::syntax::{Mode, SyntaxManager, Theme, TokenType};
use riddl_highlight::{init_tracing, Error, Result};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    file: Option<PathBuf>,
    format: Option<Format>,
    style_file: Option<PathBuf>,
    language: Option<String>,
    mode: Option<Mode>,
    line_numbers: bool,
    check_style: bool,
    css: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Highlight(Options),
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Highlight(options) => options,
    };

    let config = Config::load();
    let theme = match options.style_file.as_ref().or(config.style_file.as_ref()) {
        Some(path) => Theme::load(path)?,
        None => Theme::riddl(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if options.check_style {
        return check_style(&mut out, &theme);
    }
    if options.css {
        out.write_all(render::stylesheet(&theme).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let manager = SyntaxManager::new();
    let language = match (&options.language, &options.file) {
        (Some(name), _) => manager
            .get_language(name)
            .ok_or_else(|| Error::Message(format!("Unknown language: {name}")))?,
        (None, Some(path)) => manager
            .language_for_path(path)
            .or_else(|| manager.get_language("riddl"))
            .ok_or_else(|| Error::Message("No RIDDL language definition".to_string()))?,
        (None, None) => manager
            .get_language("riddl")
            .ok_or_else(|| Error::Message("No RIDDL language definition".to_string()))?,
    };

    let text = read_input(options.file.as_deref())?;
    let tokens = language.tokens_from(&text, options.mode.unwrap_or(Mode::Root));

    match options.format.unwrap_or(config.format) {
        Format::Ansi => {
            let ansi = AnsiOptions {
                line_numbers: options.line_numbers || config.line_numbers,
                background: config.background,
            };
            render::write_ansi(&mut out, tokens, &theme, ansi)?;
        }
        Format::Html => render::write_html(&mut out, tokens, &theme)?,
        Format::Tokens => render::write_token_dump(&mut out, tokens)?,
    }
    out.flush()?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| Error::Message(format!("{flag} requires a value")))
        };

        match arg {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--format" | "-f" => {
                let name = value(arg)?;
                let format = Format::from_name(&name)
                    .ok_or_else(|| Error::Message(format!("Unknown format: {name}")))?;
                options.format = Some(format);
            }
            "--style" | "-s" => options.style_file = Some(PathBuf::from(value(arg)?)),
            "--language" | "-l" => options.language = Some(value(arg)?),
            "--mode" | "-m" => {
                let name = value(arg)?;
                options.mode = Some(Mode::from_name(&name).ok_or(Error::UnknownMode(name))?);
            }
            "--line-numbers" | "-n" => options.line_numbers = true,
            "--check-style" => options.check_style = true,
            "--css" => options.css = true,
            "-" => options.file = None,
            unknown if unknown.starts_with('-') => {
                return Err(Error::Message(format!("Unknown option: {unknown} (try --help)")));
            }
            path => {
                if options.file.is_some() {
                    return Err(Error::Message("Only one input file is supported".to_string()));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Highlight(options))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

/// Report whether the theme styles every category
fn check_style<W: Write>(out: &mut W, theme: &Theme) -> Result<()> {
    theme.validate()?;
    writeln!(
        out,
        "Theme '{}' styles all {} categories (background {})",
        theme.name,
        TokenType::ALL.len(),
        theme.background
    )?;
    for (token_type, style) in theme.entries() {
        writeln!(out, "  {:<20} {}", token_type.name(), style)?;
    }
    out.flush()?;
    Ok(())
}

fn print_usage() {
    println!("riddl-highlight {} - syntax highlighting for RIDDL", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: riddl-highlight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or standard input when FILE is missing or '-'.");
    println!();
    println!("Options:");
    println!("  -f, --format FORMAT   Output format: ansi, html, tokens (default ansi)");
    println!("  -s, --style FILE      TOML style overrides for the riddl theme");
    println!("  -l, --language NAME   Language name or alias (default from extension)");
    println!("  -m, --mode MODE       Starting mode: root, multiline-comment, string, code-block");
    println!("  -n, --line-numbers    Number lines in terminal output");
    println!("      --check-style     Validate the theme and list its styles");
    println!("      --css             Print a stylesheet for class-based HTML");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Defaults can be set in ~/.riddl-highlight.conf (format, style-file,");
    println!("line-numbers, background).");
}

fn print_version() {
    println!("riddl-highlight {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_options() {
        let command = parse_args(&args(&[
            "-f", "html", "--mode", "string", "-n", "-s", "light.toml", "shop.riddl",
        ]))
        .unwrap();
        let Command::Highlight(options) = command else {
            panic!("expected highlight command");
        };
        assert_eq!(options.format, Some(Format::Html));
        assert_eq!(options.mode, Some(Mode::String));
        assert!(options.line_numbers);
        assert_eq!(options.style_file, Some(PathBuf::from("light.toml")));
        assert_eq!(options.file, Some(PathBuf::from("shop.riddl")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_args(&args(&["--bogus"])), Err(Error::Message(_))));
        assert!(matches!(parse_args(&args(&["-f"])), Err(Error::Message(_))));
        assert!(matches!(parse_args(&args(&["-f", "pdf"])), Err(Error::Message(_))));
        assert!(matches!(parse_args(&args(&["-m", "comment"])), Err(Error::UnknownMode(_))));
        assert!(matches!(parse_args(&args(&["a.riddl", "b.riddl"])), Err(Error::Message(_))));
    }

    #[test]
    fn test_stdin_dash() {
        let Command::Highlight(options) = parse_args(&args(&["-"])).unwrap() else {
            panic!("expected highlight command");
        };
        assert_eq!(options.file, None);
    }

    #[test]
    fn test_check_style_lists_entries() {
        let mut out = Vec::new();
        check_style(&mut out, &Theme::riddl()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Theme 'riddl' styles all 18 categories"));
        assert_eq!(text.lines().count(), 1 + TokenType::ALL.len());
    }
}
