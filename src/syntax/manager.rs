//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that holds the known
//! language definitions and picks one for a file, alias or mimetype.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;

/// Registry of language definitions
pub struct SyntaxManager {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Lowercased name/alias to language name mapping
    alias_map: HashMap<String, String>,
    mimetype_map: HashMap<String, String>,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        let mut manager = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
            alias_map: HashMap::new(),
            mimetype_map: HashMap::new(),
        };

        for lang in builtin::all_languages() {
            manager.add_language(lang);
        }

        manager
    }

    /// Add a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.alias_map.insert(name.to_lowercase(), name.clone());
        for alias in &lang.aliases {
            self.alias_map.insert(alias.to_lowercase(), name.clone());
        }
        for mimetype in &lang.mimetypes {
            self.mimetype_map.insert(mimetype.clone(), name.clone());
        }
        tracing::debug!(language = %name, "registered language");
        self.languages.insert(name, lang);
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a language definition by name or alias (case-insensitive)
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        let name = self.alias_map.get(&name.to_lowercase())?;
        self.languages.get(name)
    }

    /// Get the language for a file path
    pub fn language_for_path(&self, path: &Path) -> Option<&LanguageDefinition> {
        self.detect_language(path).and_then(|name| self.languages.get(name))
    }

    pub fn language_for_mimetype(&self, mimetype: &str) -> Option<&LanguageDefinition> {
        let name = self.mimetype_map.get(mimetype)?;
        self.languages.get(name)
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}
