//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for the
//! languages shipped with the crate.

mod riddl;

use super::language::LanguageDefinition;

pub use riddl::{
    riddl_language, CONTROL_KEYWORDS, DEFINITION_KEYWORDS, IMPORT_KEYWORDS, OPTION_VALUES,
    OTHER_KEYWORDS, PREDEFINED_TYPES, READABILITY_WORDS,
};

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![riddl::riddl_language()]
}
