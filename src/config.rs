//! Configuration file support
//!
//! Loads settings from ~/.riddl-highlight.conf (or
//! %USERPROFILE%\.riddl-highlight.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # riddl-highlight configuration
//! format = ansi
//! style-file = ~/.config/riddl/light.toml
//! line-numbers = true
//! background = false
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::render::Format;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Output format
    pub format: Format,
    /// TOML style override applied on top of the built-in theme
    pub style_file: Option<PathBuf>,
    /// Whether to show line numbers
    pub line_numbers: bool,
    /// Whether to paint the theme background in terminal output
    pub background: bool,
}

impl Config {
    fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::home_dir().map(|home| home.join(".riddl-highlight.conf"))
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    let settings = Self::parse(&contents);
                    config.apply(&settings);
                    tracing::debug!(path = %path.display(), "loaded config");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot read config"),
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("format") {
            match Format::from_name(value) {
                Some(format) => self.format = format,
                None => tracing::warn!(value = %value, "unknown format in config"),
            }
        }

        if let Some(value) = settings.get("style-file") {
            if !value.is_empty() {
                self.style_file = Some(expand_home(value));
            }
        }

        if let Some(value) = settings.get("line-numbers") {
            self.line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("background") {
            self.background = parse_bool(value);
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), Config::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
