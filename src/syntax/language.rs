//! Language definitions for syntax highlighting
//!
//! This module provides the LanguageDefinition struct that holds the
//! ordered rule list of every scanning mode for one language, plus the
//! metadata hosts use to pick it (aliases, extensions, mimetypes).

use std::collections::BTreeSet;

use super::rules::{Action, HighlightResult, LineState, Mode, Rule};
use super::scanner::Tokens;
use super::tokens::TokenType;

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "RIDDL")
    pub name: String,
    /// Short names accepted on the command line (e.g., ["riddl"])
    pub aliases: Vec<String>,
    /// File extensions (e.g., ["riddl"])
    pub extensions: Vec<String>,
    pub mimetypes: Vec<String>,
    /// Rules per mode, indexed by `Mode::index`, in match order
    modes: [Vec<Rule>; 4],
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: Vec::new(),
            mimetypes: Vec::new(),
            modes: Default::default(),
        }
    }

    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    pub fn add_mimetype(&mut self, mimetype: &str) {
        self.mimetypes.push(mimetype.to_string());
    }

    /// Append a rule to `mode`
    ///
    /// Order matters: rules are tried in the order they were added.
    pub fn add_rule(&mut self, mode: Mode, rule: Rule) {
        self.modes[mode.index()].push(rule);
    }

    /// Rules of `mode` in match order
    pub fn rules(&self, mode: Mode) -> &[Rule] {
        &self.modes[mode.index()]
    }

    /// Every category this language can emit, including the fallback
    pub fn token_types(&self) -> BTreeSet<TokenType> {
        let mut types: BTreeSet<_> = self.modes.iter().flatten().map(|r| r.token_type).collect();
        types.insert(TokenType::Text);
        types
    }

    /// Modes that some rule enters but no rule of that mode leaves
    pub fn unclosed_modes(&self) -> Vec<Mode> {
        let mut unclosed: Vec<Mode> = Vec::new();
        for rule in self.modes.iter().flatten() {
            if let Action::Push(mode) = rule.action {
                let closes = self.rules(mode).iter().any(|r| r.action == Action::Pop);
                if !closes && !unclosed.contains(&mode) {
                    unclosed.push(mode);
                }
            }
        }
        unclosed
    }

    /// Tokenize a whole document starting at top level
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens::new(self, text, LineState::default())
    }

    /// Tokenize a document whose first byte is already inside `mode`
    pub fn tokens_from<'a>(&'a self, text: &'a str, mode: Mode) -> Tokens<'a> {
        Tokens::new(self, text, LineState::starting_in(mode))
    }

    /// Tokenize text resuming from a saved scanner state
    pub fn tokens_with_state<'a>(&'a self, text: &'a str, state: LineState) -> Tokens<'a> {
        Tokens::new(self, text, state)
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: &LineState) -> HighlightResult {
        let mut tokens = self.tokens_with_state(text, prev_state.clone());
        let spans = tokens.by_ref().map(|t| t.span()).collect();
        HighlightResult {
            spans,
            end_state: tokens.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("Test");
        lang.add_extension("test");

        if let Some(rule) = Rule::pattern("line_comment", r"//[^\n]*", TokenType::CommentSingle) {
            lang.add_rule(Mode::Root, rule);
        }
        if let Some(rule) = Rule::pattern("block_open", r"/\*", TokenType::CommentMultiline) {
            lang.add_rule(Mode::Root, rule.push(Mode::MultilineComment));
        }
        if let Some(rule) = Rule::word_pattern("number", r"\d+", TokenType::Number) {
            lang.add_rule(Mode::Root, rule);
        }
        if let Some(rule) = Rule::pattern("whitespace", r"\s+", TokenType::Text) {
            lang.add_rule(Mode::Root, rule);
        }

        if let Some(rule) = Rule::pattern("block_close", r"\*/", TokenType::CommentMultiline) {
            lang.add_rule(Mode::MultilineComment, rule.pop());
        }
        if let Some(rule) = Rule::pattern("block_body", r"[^*]+|\*", TokenType::CommentMultiline) {
            lang.add_rule(Mode::MultilineComment, rule);
        }

        lang
    }

    #[test]
    fn test_simple_highlighting() {
        let lang = create_test_language();
        let result = lang.highlight_line("x = 42;", &LineState::default());

        assert!(result.end_state.is_normal());
        assert!(result
            .spans
            .iter()
            .any(|s| s.start == 4 && s.end == 6 && s.token_type == TokenType::Number));
    }

    #[test]
    fn test_line_comment() {
        let lang = create_test_language();
        let result = lang.highlight_line("x // comment", &LineState::default());

        assert!(result.end_state.is_normal());
        let last = result.spans.last().unwrap();
        assert_eq!((last.start, last.end), (2, 12));
        assert_eq!(last.token_type, TokenType::CommentSingle);
    }

    #[test]
    fn test_multiline_start() {
        let lang = create_test_language();
        let result = lang.highlight_line("x /* comment", &LineState::default());

        assert!(result.end_state.is_inside_multiline());
        assert_eq!(result.end_state.current(), Mode::MultilineComment);
    }

    #[test]
    fn test_multiline_continue() {
        let lang = create_test_language();
        let state = LineState::inside(Mode::MultilineComment);
        let result = lang.highlight_line("still in comment", &state);

        assert!(result.end_state.is_inside_multiline());
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].token_type, TokenType::CommentMultiline);
    }

    #[test]
    fn test_multiline_end() {
        let lang = create_test_language();
        let state = LineState::inside(Mode::MultilineComment);
        let result = lang.highlight_line("end */ 7", &state);

        assert!(result.end_state.is_normal());
        assert_eq!(result.spans.last().unwrap().token_type, TokenType::Number);
    }

    #[test]
    fn test_rule_order_is_insertion_order() {
        let lang = create_test_language();
        let names: Vec<_> = lang.rules(Mode::Root).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["line_comment", "block_open", "number", "whitespace"]);
    }

    #[test]
    fn test_token_types_include_fallback() {
        let lang = create_test_language();
        let types = lang.token_types();
        assert!(types.contains(&TokenType::Text));
        assert!(types.contains(&TokenType::CommentMultiline));
        assert!(!types.contains(&TokenType::Name));
    }

    #[test]
    fn test_unclosed_modes() {
        let mut lang = create_test_language();
        assert!(lang.unclosed_modes().is_empty());

        if let Some(rule) = Rule::pattern("quote", "\"", TokenType::StringDouble) {
            lang.add_rule(Mode::Root, rule.push(Mode::String));
        }
        assert_eq!(lang.unclosed_modes(), vec![Mode::String]);
    }
}
