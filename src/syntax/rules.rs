//! Rules for syntax highlighting
//!
//! This module defines the scanning modes, the rule type used to match
//! and classify source text, and the state carried between lines.

use std::collections::HashSet;

use regex::Regex;

use super::scanner::Span;
use super::tokens::TokenType;

/// A named scanning state with its own rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Top level of a document
    Root,
    /// Inside `/* ... */`
    MultilineComment,
    /// Inside `"..."`
    String,
    /// Inside a ``` fenced block
    CodeBlock,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Root, Mode::MultilineComment, Mode::String, Mode::CodeBlock];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::MultilineComment => "multiline-comment",
            Mode::String => "string",
            Mode::CodeBlock => "code-block",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Mode stack change caused by a successful match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    /// Enter a nested construct
    Push(Mode),
    /// Close the current construct
    Pop,
}

/// Word characters for boundary checks
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if `pos` is not preceded by a word character
fn word_boundary_before(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, |c| !is_word_char(c))
}

/// True if `pos` sits between a word character and a non-word character
fn word_boundary_at(text: &str, pos: usize) -> bool {
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    word_boundary_before(text, pos) == after
}

/// Length in bytes of the leading run of word characters
fn word_run_len(text: &str) -> usize {
    text.find(|c: char| !is_word_char(c)).unwrap_or(text.len())
}

/// A fixed set of words matched on word boundaries
///
/// Words may contain hyphens (`event-sourced`); in that case the
/// longest hyphen-joined run that is a member wins.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: HashSet<&'static str>,
    hyphenated: bool,
}

impl WordSet {
    pub fn new(words: &[&'static str]) -> Self {
        Self {
            hyphenated: words.iter().any(|w| w.contains('-')),
            words: words.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Match a member word at `pos`, returning the end offset
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        if !word_boundary_before(text, pos) {
            return None;
        }
        let rest = &text[pos..];
        let mut end = word_run_len(rest);
        if end == 0 {
            return None;
        }

        let mut best = self.words.contains(&rest[..end]).then_some(end);
        if self.hyphenated {
            while rest[end..].starts_with('-') {
                let run = word_run_len(&rest[end + 1..]);
                if run == 0 {
                    break;
                }
                end += 1 + run;
                if self.words.contains(&rest[..end]) {
                    best = Some(end);
                }
            }
        }
        best.map(|len| pos + len)
    }
}

/// How a rule recognises text at the cursor
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Word-boundary-delimited membership test
    Words(WordSet),
    /// Regular expression anchored at the cursor
    Pattern {
        regex: Regex,
        /// Whole-match form of `regex`, present for word patterns; the
        /// match must start and end on a word boundary
        word: Option<Regex>,
    },
}

/// A single classification rule
///
/// Rules are tried in the order they were added to a mode; the first
/// rule that matches at the cursor wins.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    pub matcher: Matcher,
    /// Token type assigned to matches
    pub token_type: TokenType,
    pub action: Action,
}

impl Rule {
    /// Create a regex rule
    pub fn pattern(name: &str, pattern: &str, token_type: TokenType) -> Option<Self> {
        Self::compile(name, pattern, token_type, false)
    }

    /// Create a regex rule delimited by word boundaries on both sides
    ///
    /// Equivalent to `\b(?:pattern)\b`, with word characters being
    /// alphanumerics and `_` (the same class [`WordSet`] uses).
    pub fn word_pattern(name: &str, pattern: &str, token_type: TokenType) -> Option<Self> {
        Self::compile(name, pattern, token_type, true)
    }

    /// Create a word set rule
    pub fn words(name: &str, words: &[&'static str], token_type: TokenType) -> Self {
        Self {
            name: name.to_string(),
            matcher: Matcher::Words(WordSet::new(words)),
            token_type,
            action: Action::None,
        }
    }

    fn compile(name: &str, pattern: &str, token_type: TokenType, bounded: bool) -> Option<Self> {
        let compiled = Regex::new(&format!(r"\A(?:{pattern})")).and_then(|regex| {
            let word = bounded
                .then(|| Regex::new(&format!(r"\A(?:{pattern})\z")))
                .transpose()?;
            Ok((regex, word))
        });
        match compiled {
            Ok((regex, word)) => Some(Self {
                name: name.to_string(),
                matcher: Matcher::Pattern { regex, word },
                token_type,
                action: Action::None,
            }),
            Err(e) => {
                tracing::warn!(rule = name, error = %e, "dropping rule with invalid pattern");
                None
            }
        }
    }

    /// Builder: enter `mode` after a match
    pub fn push(mut self, mode: Mode) -> Self {
        self.action = Action::Push(mode);
        self
    }

    /// Builder: leave the current mode after a match
    pub fn pop(mut self) -> Self {
        self.action = Action::Pop;
        self
    }

    /// Try this rule at `pos`, returning the end of a non-empty match
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        let end = match &self.matcher {
            Matcher::Words(set) => set.match_at(text, pos)?,
            Matcher::Pattern { regex, word: None } => pos + regex.find(&text[pos..])?.end(),
            Matcher::Pattern { regex, word: Some(whole) } => {
                if !word_boundary_before(text, pos) {
                    return None;
                }
                // Back off from the longest match to the last end that is
                // both a word boundary and a complete match
                let longest = pos + regex.find(&text[pos..])?.end();
                text[pos..longest]
                    .char_indices()
                    .map(|(i, _)| pos + i)
                    .chain(std::iter::once(longest))
                    .rev()
                    .find(|&end| {
                        end > pos && word_boundary_at(text, end) && whole.is_match(&text[pos..end])
                    })?
            }
        };
        (end > pos).then_some(end)
    }
}

/// Scanner state carried from the end of one line to the next
///
/// Holds the mode stack; an innermost mode other than root means a
/// comment, string or code block is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    stack: Vec<Mode>,
}

impl Default for LineState {
    fn default() -> Self {
        Self::starting_in(Mode::Root)
    }
}

impl LineState {
    /// State for text that starts in `mode`
    ///
    /// A nested mode is placed on top of root so that closing it
    /// returns to top level.
    pub fn starting_in(mode: Mode) -> Self {
        match mode {
            Mode::Root => Self { stack: vec![Mode::Root] },
            nested => Self::inside(nested),
        }
    }

    /// State for being inside `mode` nested in root
    pub fn inside(mode: Mode) -> Self {
        Self {
            stack: vec![Mode::Root, mode],
        }
    }

    pub(crate) fn from_stack(stack: Vec<Mode>) -> Self {
        Self { stack }
    }

    pub fn stack(&self) -> &[Mode] {
        &self.stack
    }

    /// Innermost active mode
    pub fn current(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Root)
    }

    /// Check if we're inside a nested construct
    pub fn is_inside_multiline(&self) -> bool {
        self.current() != Mode::Root
    }

    /// Check if we're at top level
    pub fn is_normal(&self) -> bool {
        !self.is_inside_multiline()
    }
}

/// Result of highlighting a single line
#[derive(Debug)]
pub struct HighlightResult {
    /// Classified spans covering the line
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}
