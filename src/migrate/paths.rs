//! Destination file naming

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel case pattern is valid"));

/// MkDocs name for a Hugo document file name
///
/// `_index.md` becomes `index.md`; other names are converted from
/// camelCase to kebab-case (`myPage.md` -> `my-page.md`).
pub fn destination_name(file_name: &str) -> String {
    match file_name {
        "_index.md" | "index.md" => "index.md".to_string(),
        _ => CAMEL_BOUNDARY
            .replace_all(file_name, "${1}-${2}")
            .to_lowercase(),
    }
}

/// Destination path for a source path relative to the source root
///
/// Only the file name is renamed; directories are kept as they are.
pub fn destination_path(relative: &Path) -> PathBuf {
    match relative.file_name().and_then(|n| n.to_str()) {
        Some(name) => relative.with_file_name(destination_name(name)),
        None => relative.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name("myPage.md"), "my-page.md");
        assert_eq!(destination_name("_index.md"), "index.md");
        assert_eq!(destination_name("index.md"), "index.md");
        assert_eq!(destination_name("whatIsRIDDL.md"), "what-is-riddl.md");
        assert_eq!(destination_name("plain.md"), "plain.md");
        assert_eq!(destination_name("Upper.md"), "upper.md");
    }

    #[test]
    fn test_destination_path_keeps_directories() {
        assert_eq!(
            destination_path(Path::new("conceptGuide/entityTypes.md")),
            PathBuf::from("conceptGuide/entity-types.md")
        );
        assert_eq!(
            destination_path(Path::new("tutorial/_index.md")),
            PathBuf::from("tutorial/index.md")
        );
    }
}
