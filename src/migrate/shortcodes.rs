//! Hugo shortcode rewriting
//!
//! Turns `relref` shortcodes into relative markdown links and `hint`
//! blocks into MkDocs Material admonitions, and drops table of contents
//! markers that MkDocs renders on its own.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::frontmatter::clean_frontmatter;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("shortcode pattern is valid")
}

static RELREF: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"\{\{<\s*relref\s+["']?([^"'}>]+)["']?\s*>\}\}"#));
static HINT_START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\{\{<\s*hint\s+type=(\w+)\s*>\}\}"));
static HINT_END: LazyLock<Regex> = LazyLock::new(|| compile(r"\{\{<\s*/hint\s*>\}\}"));
static TOC: LazyLock<Regex> = LazyLock::new(|| compile(r"\{\{<\s*toc\s*>\}\}"));
static TOC_TREE: LazyLock<Regex> = LazyLock::new(|| compile(r"\{\{<\s*toc-tree\s*>\}\}"));
static ANY_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| compile(r"\{\{<.*?>\}\}"));
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{3,}"));

/// Result of converting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub content: String,
    /// Shortcodes the pipeline does not know how to rewrite
    pub leftover_shortcodes: Vec<String>,
}

/// Turn a `relref` target into a relative `.md` link
///
/// References whose last segment has no extension point at a section and
/// get `/index.md` appended; Hugo's `_index.md` becomes `index.md`.
pub fn convert_relref(reference: &str) -> String {
    let reference = reference.trim().trim_matches(|c| c == '"' || c == '\'');
    let mut result = reference
        .trim_start_matches(|c| c == '.' || c == '/')
        .to_string();

    if !result.ends_with(".md") {
        let last = result.rsplit('/').next().unwrap_or("");
        if last.contains('.') {
            result.push_str(".md");
        } else {
            if !result.is_empty() && !result.ends_with('/') {
                result.push('/');
            }
            result.push_str("index.md");
        }
    }

    result.replace("_index.md", "index.md")
}

/// Map a Hugo hint type to an admonition type
pub fn admonition_type(hint_type: &str) -> &'static str {
    match hint_type {
        "info" => "info",
        "warning" | "important" => "warning",
        "danger" => "danger",
        "tip" => "tip",
        _ => "note",
    }
}

/// Rewrite `{{< hint type=X >}}` as `!!! X`
pub fn convert_hint(hint_type: &str) -> String {
    format!("!!! {}", admonition_type(hint_type))
}

/// Run the full conversion pipeline over one document
pub fn convert_content(content: &str) -> Conversion {
    let content = clean_frontmatter(content);

    let content = RELREF.replace_all(&content, |caps: &Captures| convert_relref(&caps[1]));
    let content = HINT_START.replace_all(&content, |caps: &Captures| convert_hint(&caps[1]));
    let content = HINT_END.replace_all(&content, "");
    let content = TOC.replace_all(&content, "");
    let content = TOC_TREE.replace_all(&content, "");

    let leftover_shortcodes = ANY_SHORTCODE
        .find_iter(&content)
        .map(|m| m.as_str().to_string())
        .collect();

    let content = BLANK_RUN.replace_all(&content, "\n\n").into_owned();

    Conversion {
        content,
        leftover_shortcodes,
    }
}
