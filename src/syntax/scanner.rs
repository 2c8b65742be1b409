//! Mode-stack scanner
//!
//! Walks a document with the rules of a [`LanguageDefinition`], keeping
//! an explicit stack of modes so that constructs still open at the end
//! of the input are visible as data instead of an error.

use std::iter::FusedIterator;

use super::language::LanguageDefinition;
use super::rules::{Action, LineState, Mode};
use super::tokens::TokenType;

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    pub text: &'a str,
    pub token_type: TokenType,
}

impl Token<'_> {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end, self.token_type)
    }
}

/// A classified byte range, detached from the text it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub token_type: TokenType,
}

impl Span {
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        Self { start, end, token_type }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lazy token stream over one document
///
/// Every byte of the input ends up in exactly one token. Cloning the
/// iterator snapshots the cursor and mode stack, so a clone can be
/// resumed independently.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    lang: &'a LanguageDefinition,
    text: &'a str,
    pos: usize,
    stack: Vec<Mode>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(lang: &'a LanguageDefinition, text: &'a str, state: LineState) -> Self {
        let mut stack = state.stack().to_vec();
        if stack.is_empty() {
            stack.push(Mode::Root);
        }
        Self {
            lang,
            text,
            pos: 0,
            stack,
        }
    }

    /// Current mode stack, outermost first
    pub fn stack(&self) -> &[Mode] {
        &self.stack
    }

    /// Byte offset of the next token
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if a comment, string or code block is open at the cursor
    pub fn is_unterminated(&self) -> bool {
        self.stack.last().is_some_and(|m| *m != Mode::Root)
    }

    /// Scanner state at the cursor, for resuming on the next line
    pub fn state(&self) -> LineState {
        LineState::from_stack(self.stack.clone())
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Push(mode) => self.stack.push(mode),
            Action::Pop => {
                // The outermost mode is never closed
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        if start >= self.text.len() {
            return None;
        }

        let mode = self.stack.last().copied().unwrap_or(Mode::Root);
        let (lang, text) = (self.lang, self.text);
        let matched = lang
            .rules(mode)
            .iter()
            .find_map(|rule| rule.match_at(text, start).map(|end| (rule, end)));

        let (end, token_type) = match matched {
            Some((rule, end)) => {
                self.apply(rule.action);
                (end, rule.token_type)
            }
            None => {
                // Nothing matched: emit one character as plain text
                let width = text[start..].chars().next().map_or(1, char::len_utf8);
                tracing::trace!(pos = start, mode = mode.name(), "no rule matched");
                (start + width, TokenType::Text)
            }
        };

        self.pos = end;
        Some(Token {
            start,
            end,
            text: &text[start..end],
            token_type,
        })
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, TokenType::Name);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_empty_language_falls_back_per_char() {
        let lang = LanguageDefinition::new("Empty");
        let tokens: Vec<_> = lang.tokens("aé\n").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Text));
        assert_eq!(tokens[1].text, "é");
        assert_eq!(tokens[2].start, 3);
    }

    #[test]
    fn test_clone_resumes_independently() {
        let lang = LanguageDefinition::new("Empty");
        let mut tokens = lang.tokens("abc");
        tokens.next();
        assert_eq!(tokens.position(), 1);
        let snapshot = tokens.clone();
        let rest: Vec<_> = tokens.map(|t| t.text).collect();
        let again: Vec<_> = snapshot.map(|t| t.text).collect();
        assert_eq!(rest, again);
        assert_eq!(rest, vec!["b", "c"]);
    }
}
