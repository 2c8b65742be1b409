//! Hugo to MkDocs Material document migration
//!
//! Copies every `.md` file under a source tree to a destination tree,
//! renaming files and rewriting Hugo-specific markup on the way:
//! - front matter cleanup
//! - `relref` shortcodes to relative links
//! - `hint` shortcodes to `!!!` admonitions
//! - `toc` markers removed, blank line runs collapsed

mod frontmatter;
mod paths;
mod shortcodes;

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};

pub use frontmatter::clean_frontmatter;
pub use paths::{destination_name, destination_path};
pub use shortcodes::{admonition_type, convert_content, convert_hint, convert_relref, Conversion};

/// One converted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedFile {
    pub source: PathBuf,
    /// Destination path relative to the destination root
    pub destination: PathBuf,
    pub leftover_shortcodes: Vec<String>,
}

/// Summary of a migration run
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub files: Vec<MigratedFile>,
}

impl MigrationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Files that still contain shortcodes after conversion
    pub fn with_leftovers(&self) -> impl Iterator<Item = &MigratedFile> {
        self.files.iter().filter(|f| !f.leftover_shortcodes.is_empty())
    }
}

/// Markdown files under `source`, relative to it, in sorted order
fn markdown_files(source: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(source).standard_filters(false).build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
        if is_file && is_markdown {
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| Error::Message(format!("{}: {e}", entry.path().display())))?;
            files.push(relative.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Convert one document and write it to `dest_path`
pub fn convert_file(source_path: &Path, dest_path: &Path) -> Result<Conversion> {
    let content = fs::read_to_string(source_path)?;
    let conversion = convert_content(&content);

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, &conversion.content)?;
    tracing::debug!(
        source = %source_path.display(),
        dest = %dest_path.display(),
        "converted"
    );
    Ok(conversion)
}

/// Migrate all markdown files from `source` to `dest`
///
/// `on_file` is called after each file is written. The run stops at the
/// first file that cannot be read or written.
pub fn migrate_directory<F>(source: &Path, dest: &Path, mut on_file: F) -> Result<MigrationReport>
where
    F: FnMut(&MigratedFile),
{
    if !source.is_dir() {
        return Err(Error::SourceMissing(source.to_path_buf()));
    }

    let mut report = MigrationReport::default();
    for relative in markdown_files(source)? {
        let source_path = source.join(&relative);
        let destination = destination_path(&relative);
        let conversion = convert_file(&source_path, &dest.join(&destination))?;

        let migrated = MigratedFile {
            source: source_path,
            destination,
            leftover_shortcodes: conversion.leftover_shortcodes,
        };
        if !migrated.leftover_shortcodes.is_empty() {
            tracing::warn!(
                file = %migrated.source.display(),
                count = migrated.leftover_shortcodes.len(),
                "unconverted shortcodes"
            );
        }
        on_file(&migrated);
        report.files.push(migrated);
    }

    Ok(report)
}
