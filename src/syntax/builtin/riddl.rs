//! RIDDL language definition
//!
//! RIDDL (Reactive Interface to Domain Definition Language) describes
//! reactive, distributed systems in Domain-Driven Design terms.
//!
//! Root rules are tried strictly in the order they are added below.
//! Option values come before the keyword sets and doc lines come before
//! whitespace; moving either changes which category wins.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{Mode, Rule};
use crate::syntax::tokens::TokenType;

/// Definition keywords - major structural elements
pub const DEFINITION_KEYWORDS: &[&str] = &[
    "adaptor", "application", "author", "case", "command", "connector",
    "constant", "context", "domain", "entity", "epic", "event",
    "field", "flow", "function", "graph", "group", "handler", "inlet",
    "input", "invariant", "merge", "module", "nebula", "outlet",
    "output", "pipe", "plant", "projector", "query", "record",
    "relationship", "replica", "repository", "result", "router", "saga",
    "sink", "source", "split", "state", "step", "streamlet", "table",
    "term", "type", "user", "void",
];

/// Control flow keywords
pub const CONTROL_KEYWORDS: &[&str] = &[
    "become", "call", "do", "else", "error", "execute", "for",
    "foreach", "if", "match", "morph", "on", "return", "reverted",
    "send", "set", "stop", "take", "tell", "then", "when",
];

pub const IMPORT_KEYWORDS: &[&str] = &["import", "include"];

/// Remaining reserved words
pub const OTHER_KEYWORDS: &[&str] = &[
    "acquires", "all", "any", "append", "attachment", "benefit",
    "body", "brief", "briefly", "capability", "commands", "condition",
    "container", "contains", "create", "described", "description",
    "details", "direct", "email", "end", "example", "explained",
    "explanation", "file", "focus", "fully", "index", "init", "inlets",
    "items", "label", "link", "many", "mapping", "message", "name",
    "one", "option", "optional", "options", "organization", "other",
    "outlets", "parallel", "presents", "range", "reference", "remove",
    "reply", "required", "requires", "results", "returns", "schema",
    "selects", "sequence", "show", "shown", "story", "title", "updates",
    "url", "value", "where",
];

/// Prepositions and connectors that make definitions read as prose
pub const READABILITY_WORDS: &[&str] = &[
    "and", "are", "as", "at", "by", "for", "from", "in", "is", "of",
    "or", "so", "that", "to", "wants", "with",
];

pub const PREDEFINED_TYPES: &[&str] = &[
    "Abstract", "Blob", "Boolean", "Currency", "Current", "Date",
    "DateTime", "Decimal", "Duration", "Id", "Integer", "Length",
    "List", "Location", "Luminosity", "Map", "Mapping", "Mass", "Mole",
    "Natural", "Nothing", "Number", "Pattern", "Range", "Real", "Sequence",
    "Set", "String", "Temperature", "Time", "Timestamp", "TimeStamp",
    "Unknown", "URI", "URL", "UserId", "UUID", "Whole", "ZonedDate",
    "ZonedDateTime",
];

/// Common option values, some hyphenated
pub const OPTION_VALUES: &[&str] = &[
    "event-sourced", "finite-state-machine", "message-queue",
    "value-object", "aggregate", "transient", "available",
    "device", "kind", "css", "faicon", "technology", "persistent",
];

/// Create RIDDL language definition
pub fn riddl_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("RIDDL");
    lang.add_alias("riddl");
    lang.add_extension("riddl");
    lang.add_mimetype("text/x-riddl");

    add_root_rules(&mut lang);

    // Block comments
    if let Some(rule) = Rule::pattern("comment_close", r"\*/", TokenType::CommentMultiline) {
        lang.add_rule(Mode::MultilineComment, rule.pop());
    }
    if let Some(rule) = Rule::pattern("comment_body", r"[^*]+", TokenType::CommentMultiline) {
        lang.add_rule(Mode::MultilineComment, rule);
    }
    if let Some(rule) = Rule::pattern("comment_star", r"\*", TokenType::CommentMultiline) {
        lang.add_rule(Mode::MultilineComment, rule);
    }

    // Strings
    if let Some(rule) = Rule::pattern("escape", r"\\.", TokenType::StringEscape) {
        lang.add_rule(Mode::String, rule);
    }
    if let Some(rule) = Rule::pattern("string_close", "\"", TokenType::StringDouble) {
        lang.add_rule(Mode::String, rule.pop());
    }
    if let Some(rule) = Rule::pattern("string_body", r#"[^"\\]+"#, TokenType::StringDouble) {
        lang.add_rule(Mode::String, rule);
    }

    // Fenced code blocks
    if let Some(rule) = Rule::pattern("fence_close", "```", TokenType::StringDoc) {
        lang.add_rule(Mode::CodeBlock, rule.pop());
    }
    if let Some(rule) = Rule::pattern("fence_body", "[^`]+", TokenType::StringDoc) {
        lang.add_rule(Mode::CodeBlock, rule);
    }
    if let Some(rule) = Rule::pattern("fence_backtick", "`", TokenType::StringDoc) {
        lang.add_rule(Mode::CodeBlock, rule);
    }

    lang
}

fn add_root_rules(lang: &mut LanguageDefinition) {
    if let Some(rule) = Rule::pattern("line_comment", r"//[^\n]*", TokenType::CommentSingle) {
        lang.add_rule(Mode::Root, rule);
    }
    if let Some(rule) = Rule::pattern("comment_open", r"/\*", TokenType::CommentMultiline) {
        lang.add_rule(Mode::Root, rule.push(Mode::MultilineComment));
    }

    if let Some(rule) = Rule::pattern("fence_open", "```", TokenType::StringDoc) {
        lang.add_rule(Mode::Root, rule.push(Mode::CodeBlock));
    }

    // Markdown doc lines: must run before whitespace eats the indent
    if let Some(rule) = Rule::pattern("doc_line", r"\|[^\n]*", TokenType::StringDoc) {
        lang.add_rule(Mode::Root, rule);
    }

    if let Some(rule) = Rule::pattern("string_open", "\"", TokenType::StringDouble) {
        lang.add_rule(Mode::Root, rule.push(Mode::String));
    }

    if let Some(rule) = Rule::pattern("undefined", r"\?\?\?", TokenType::GenericError) {
        lang.add_rule(Mode::Root, rule);
    }

    lang.add_rule(Mode::Root, Rule::words("option_values", OPTION_VALUES, TokenType::NameConstant));
    lang.add_rule(
        Mode::Root,
        Rule::words("definition_keywords", DEFINITION_KEYWORDS, TokenType::KeywordDeclaration),
    );
    lang.add_rule(Mode::Root, Rule::words("control_keywords", CONTROL_KEYWORDS, TokenType::Keyword));
    lang.add_rule(
        Mode::Root,
        Rule::words("import_keywords", IMPORT_KEYWORDS, TokenType::KeywordNamespace),
    );
    lang.add_rule(Mode::Root, Rule::words("other_keywords", OTHER_KEYWORDS, TokenType::KeywordReserved));
    lang.add_rule(
        Mode::Root,
        Rule::words("readability_words", READABILITY_WORDS, TokenType::KeywordPseudo),
    );
    lang.add_rule(Mode::Root, Rule::words("predefined_types", PREDEFINED_TYPES, TokenType::NameBuiltin));

    if let Some(rule) = Rule::word_pattern("number", r"[0-9]+(?:\.[0-9]+)?", TokenType::Number) {
        lang.add_rule(Mode::Root, rule);
    }

    if let Some(rule) = Rule::pattern("operator", r"[=+?*@]", TokenType::Operator) {
        lang.add_rule(Mode::Root, rule);
    }

    // Punctuation, grouped by visual role
    for (name, pattern) in [
        ("braces", r"[{}]"),
        ("parens", r"[()]"),
        ("brackets", r"[\[\]]"),
        ("separators", r"[,:]"),
        ("period", r"\."),
    ] {
        if let Some(rule) = Rule::pattern(name, pattern, TokenType::Punctuation) {
            lang.add_rule(Mode::Root, rule);
        }
    }

    // Identifiers may contain hyphens
    if let Some(rule) = Rule::word_pattern("identifier", r"[a-zA-Z_][a-zA-Z0-9_-]*", TokenType::Name) {
        lang.add_rule(Mode::Root, rule);
    }

    if let Some(rule) = Rule::pattern("whitespace", r"\s+", TokenType::Text) {
        lang.add_rule(Mode::Root, rule);
    }
}
