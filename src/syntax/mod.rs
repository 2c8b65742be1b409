//! Syntax highlighting
//!
//! This module provides the token classifier and the colour mapping:
//! - Rules and scanning modes for a language
//! - The mode-stack scanner producing gap-free token streams
//! - Built-in language definitions (RIDDL)
//! - Styles and themes mapping token categories to colours

mod builtin;
mod language;
mod manager;
mod rules;
mod scanner;
mod style;
mod theme;
mod tokens;

pub use builtin::{
    all_languages, riddl_language, CONTROL_KEYWORDS, DEFINITION_KEYWORDS, IMPORT_KEYWORDS,
    OPTION_VALUES, OTHER_KEYWORDS, PREDEFINED_TYPES, READABILITY_WORDS,
};
pub use language::LanguageDefinition;
pub use manager::SyntaxManager;
pub use rules::{Action, HighlightResult, LineState, Matcher, Mode, Rule, WordSet};
pub use scanner::{Span, Token, Tokens};
pub use style::{Rgb, Style};
pub use theme::Theme;
pub use tokens::TokenType;
