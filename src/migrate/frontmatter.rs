//! Front matter cleanup
//!
//! Hugo pages carry keys MkDocs does not use. `type` and `date` are
//! dropped, and `draft` is only kept when it is true.

use std::sync::LazyLock;

use regex::Regex;

static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("front matter pattern is valid")
});

/// Normalize the YAML front matter block at the start of `content`
///
/// Content without a front matter block is returned unchanged. If no
/// keys survive, the block is removed entirely.
pub fn clean_frontmatter(content: &str) -> String {
    let Some(captures) = FRONTMATTER.captures(content) else {
        return content.to_string();
    };
    let block = captures.get(1).map_or("", |m| m.as_str());
    let rest = &content[captures.get(0).map_or(0, |m| m.end())..];

    let mut kept: Vec<&str> = Vec::new();
    for line in block.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with("type:") || trimmed.starts_with("date:") {
            continue;
        }
        if trimmed.starts_with("draft:") {
            if line.to_lowercase().contains("true") {
                kept.push("draft: true");
            }
            continue;
        }
        if !trimmed.is_empty() {
            kept.push(line);
        }
    }

    if kept.is_empty() {
        rest.trim_start().to_string()
    } else {
        format!("---\n{}\n---\n\n{}", kept.join("\n"), rest.trim_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hugo_keys() {
        let input = "---\ntype: post\ndate: 2024-01-01\ndraft: false\ntitle: X\n---\n\nBody\n";
        assert_eq!(clean_frontmatter(input), "---\ntitle: X\n---\n\nBody\n");
    }

    #[test]
    fn test_draft_true_normalized() {
        let input = "---\ntitle: \"Intro\"\ndraft: True\nweight: 10\n---\nBody";
        assert_eq!(
            clean_frontmatter(input),
            "---\ntitle: \"Intro\"\ndraft: true\nweight: 10\n---\n\nBody"
        );
    }

    #[test]
    fn test_block_removed_when_empty() {
        let input = "---\ntype: docs\n\ndraft: false\n---\n\n\n# Heading\n";
        assert_eq!(clean_frontmatter(input), "# Heading\n");
    }

    #[test]
    fn test_no_frontmatter_unchanged() {
        let input = "# Title\n---\ntype: x\n---\n";
        assert_eq!(clean_frontmatter(input), input);
    }

    #[test]
    fn test_nested_values_kept() {
        let input = "---\ntitle: A\nmenu:\n  main:\n    weight: 2\n---\ntext";
        assert_eq!(
            clean_frontmatter(input),
            "---\ntitle: A\nmenu:\n  main:\n    weight: 2\n---\n\ntext"
        );
    }
}
