//! Token types for syntax highlighting
//!
//! This module defines the token categories the classifier emits.
//! The dotted names follow the Pygments token hierarchy so that
//! documentation toolchains can bind them to their own styles.

/// Token categories produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Whitespace and unmatched input
    Text,
    /// `// ...` to end of line
    CommentSingle,
    /// `/* ... */`, possibly spanning lines
    CommentMultiline,
    /// Quoted string content and delimiters
    StringDouble,
    /// Escape sequences inside strings
    StringEscape,
    /// Markdown doc lines (`| ...`) and fenced code blocks
    StringDoc,
    /// The `???` undefined placeholder
    GenericError,
    /// Well-known option values (event-sourced, aggregate, ...)
    NameConstant,
    /// Definition keywords (domain, context, entity, ...)
    KeywordDeclaration,
    /// Control flow keywords (if, then, send, ...)
    Keyword,
    /// import, include
    KeywordNamespace,
    /// Remaining reserved words
    KeywordReserved,
    /// Readability words (is, of, by, with, ...)
    KeywordPseudo,
    /// Predefined type names
    NameBuiltin,
    /// Integer and decimal literals
    Number,
    /// `= + ? * @`
    Operator,
    /// Braces, parens, brackets, comma, colon, period
    Punctuation,
    /// Identifiers
    Name,
}

impl TokenType {
    /// Every category, in declaration order
    pub const ALL: [TokenType; 18] = [
        TokenType::Text,
        TokenType::CommentSingle,
        TokenType::CommentMultiline,
        TokenType::StringDouble,
        TokenType::StringEscape,
        TokenType::StringDoc,
        TokenType::GenericError,
        TokenType::NameConstant,
        TokenType::KeywordDeclaration,
        TokenType::Keyword,
        TokenType::KeywordNamespace,
        TokenType::KeywordReserved,
        TokenType::KeywordPseudo,
        TokenType::NameBuiltin,
        TokenType::Number,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Name,
    ];

    /// Dotted category name (e.g. "Keyword.Declaration")
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Text => "Text",
            TokenType::CommentSingle => "Comment.Single",
            TokenType::CommentMultiline => "Comment.Multiline",
            TokenType::StringDouble => "String.Double",
            TokenType::StringEscape => "String.Escape",
            TokenType::StringDoc => "String.Doc",
            TokenType::GenericError => "Generic.Error",
            TokenType::NameConstant => "Name.Constant",
            TokenType::KeywordDeclaration => "Keyword.Declaration",
            TokenType::Keyword => "Keyword",
            TokenType::KeywordNamespace => "Keyword.Namespace",
            TokenType::KeywordReserved => "Keyword.Reserved",
            TokenType::KeywordPseudo => "Keyword.Pseudo",
            TokenType::NameBuiltin => "Name.Builtin",
            TokenType::Number => "Number",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Name => "Name",
        }
    }

    /// Parse a category from its dotted name (for style files)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Top-level family of this category ("Keyword.Pseudo" -> "Keyword")
    pub fn family(&self) -> &'static str {
        let name = self.name();
        name.split_once('.').map_or(name, |(head, _)| head)
    }

    /// Short CSS class, following the Pygments abbreviations
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenType::Text => "",
            TokenType::CommentSingle => "c1",
            TokenType::CommentMultiline => "cm",
            TokenType::StringDouble => "s2",
            TokenType::StringEscape => "se",
            TokenType::StringDoc => "sd",
            TokenType::GenericError => "gr",
            TokenType::NameConstant => "no",
            TokenType::KeywordDeclaration => "kd",
            TokenType::Keyword => "k",
            TokenType::KeywordNamespace => "kn",
            TokenType::KeywordReserved => "kr",
            TokenType::KeywordPseudo => "kp",
            TokenType::NameBuiltin => "nb",
            TokenType::Number => "m",
            TokenType::Operator => "o",
            TokenType::Punctuation => "p",
            TokenType::Name => "n",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name("keyword"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_family() {
        assert_eq!(TokenType::KeywordPseudo.family(), "Keyword");
        assert_eq!(TokenType::Keyword.family(), "Keyword");
        assert_eq!(TokenType::StringDoc.family(), "String");
        assert_eq!(TokenType::Text.family(), "Text");
    }

    #[test]
    fn test_css_classes_unique() {
        let mut classes: Vec<_> = TokenType::ALL.iter().map(|t| t.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), TokenType::ALL.len());
    }
}
