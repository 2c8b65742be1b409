//! migrate-hugo - convert Hugo markdown to MkDocs Material
//!
//! Usage: migrate-hugo <source_dir> <dest_dir>

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use riddl_highlight::migrate::{migrate_directory, MigrationReport};
use riddl_highlight::{init_tracing, Error, Result};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let code = run(&args, &mut stdout.lock());
    process::exit(code);
}

#[derive(Debug, PartialEq)]
enum Command {
    Usage,
    Migrate { source: PathBuf, dest: PathBuf },
}

/// Arguments past the two directories are ignored
fn parse_args(args: &[String]) -> Command {
    match args {
        [source, dest, ..] => Command::Migrate {
            source: PathBuf::from(source),
            dest: PathBuf::from(dest),
        },
        _ => Command::Usage,
    }
}

/// Run the command line, returning the process exit status
fn run<W: Write>(args: &[String], out: &mut W) -> i32 {
    let result = match parse_args(args) {
        Command::Usage => {
            let _ = print_usage(out);
            return 1;
        }
        Command::Migrate { source, dest } => migrate(&source, &dest, out),
    };

    match result {
        Ok(_) => 0,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn migrate<W: Write>(source: &Path, dest: &Path, out: &mut W) -> Result<MigrationReport> {
    if !source.is_dir() {
        return Err(Error::SourceMissing(source.to_path_buf()));
    }

    writeln!(out, "Migrating Hugo content from: {}", source.display())?;
    writeln!(out, "                        to: {}", dest.display())?;
    writeln!(out)?;

    let mut output = Ok(());
    let report = migrate_directory(source, dest, |file| {
        let name = file
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut line = writeln!(out, "  {} -> {}", name, file.destination.display());
        if !file.leftover_shortcodes.is_empty() {
            line = line.and_then(|()| {
                writeln!(
                    out,
                    "  Warning: Remaining shortcodes in {}: {:?}",
                    file.source.display(),
                    file.leftover_shortcodes
                )
            });
        }
        if output.is_ok() {
            output = line;
        }
    })?;
    output?;

    writeln!(out)?;
    writeln!(out, "Migrated {} files successfully.", report.file_count())?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  1. Review converted files for any remaining issues")?;
    writeln!(out, "  2. Update mkdocs.yml navigation")?;
    writeln!(out, "  3. Run 'mkdocs serve' to verify rendering")?;
    out.flush()?;
    Ok(report)
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: migrate-hugo <source_dir> <dest_dir>")?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(
        out,
        "  migrate-hugo ../riddl/doc/src/main/hugo/content/tutorial/ docs/riddl/tutorials/"
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_captured(list: &[&str]) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(&args(list), &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&args(&[])), Command::Usage);
        assert_eq!(parse_args(&args(&["content"])), Command::Usage);
        assert_eq!(
            parse_args(&args(&["content", "docs", "extra"])),
            Command::Migrate {
                source: PathBuf::from("content"),
                dest: PathBuf::from("docs"),
            }
        );
    }

    #[test]
    fn test_missing_arguments_print_usage() {
        for list in [&[][..], &["content"][..]] {
            let (code, output) = run_captured(list);
            assert_eq!(code, 1);
            assert!(output.starts_with("Usage: migrate-hugo <source_dir> <dest_dir>"));
            assert!(output.contains("Example:"));
        }
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("nowhere");
        let dest = dir.path().join("docs");

        let (code, output) =
            run_captured(&[source.to_str().unwrap(), dest.to_str().unwrap()]);
        assert_eq!(code, 1);
        assert!(output.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_migrate_reports_files() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::write(source.path().join("_index.md"), "# Home\n").unwrap();
        fs::write(source.path().join("gettingStarted.md"), "{{< columns >}}\n").unwrap();

        let (code, output) = run_captured(&[
            source.path().to_str().unwrap(),
            dest.path().to_str().unwrap(),
        ]);
        assert_eq!(code, 0);
        assert!(output.contains("  _index.md -> index.md\n"));
        assert!(output.contains("  gettingStarted.md -> getting-started.md\n"));
        assert!(output.contains("Warning: Remaining shortcodes in"));
        assert!(output.contains("Migrated 2 files successfully."));
        assert!(dest.path().join("getting-started.md").is_file());
    }
}
