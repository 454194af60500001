//! The `tailsort` run: discover files, format them in parallel, report.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::cli::{Cli, OutputMode};
use crate::config::FormatOptions;
use crate::dispatch::ParserId;
use crate::errors::Error;
use crate::formatter::Formatter;
use crate::observability::{increment_processed, set_progress};

/// Settings of one run, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub paths: Vec<PathBuf>,
    /// Parser forced for every file
    pub parser: Option<ParserId>,
    pub mode: OutputMode,
    pub options: FormatOptions,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let parser = match &cli.parser {
            Some(name) => {
                Some(ParserId::from_name(name).ok_or_else(|| Error::UnknownParser(name.clone()))?)
            }
            None => None,
        };
        Ok(Self {
            paths: cli.paths.clone(),
            parser,
            mode: cli.mode(),
            options: FormatOptions {
                tailwind_config: cli.config.clone(),
            },
        })
    }
}

/// A file and its formatted text.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub original: String,
    pub formatted: String,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.original != self.formatted
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub changed: Vec<PathBuf>,
    pub failed: usize,
}

impl RunSummary {
    /// Whether the process should exit non-zero.
    pub fn is_failure(&self, mode: OutputMode) -> bool {
        self.failed > 0 || (mode == OutputMode::Check && !self.changed.is_empty())
    }
}

/// Size the global rayon pool; `0` keeps one worker per core.
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }
    if let Err(e) = builder.build_global() {
        warn!("Thread pool already configured: {}", e);
    }
}

/// Files to format under `paths`.
///
/// Directories are walked honouring ignore files and only keep files whose
/// parser can be inferred. Files named directly are always kept.
pub fn discover_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        let walker = WalkBuilder::new(root).hidden(false).git_ignore(true).build();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && ParserId::infer_from_path(path).is_some() {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => warn!("Skipping unreadable entry under {}: {}", root.display(), e),
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

fn format_file(formatter: &Formatter, path: &Path, forced: Option<ParserId>) -> Result<FileOutcome> {
    let parser = forced
        .or_else(|| ParserId::infer_from_path(path))
        .with_context(|| format!("Cannot infer a parser for {}", path.display()))?;
    let original =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let formatted = formatter.format_with(&original, parser, path)?;
    Ok(FileOutcome {
        path: path.to_path_buf(),
        original,
        formatted,
    })
}

/// Format every discovered file and report according to the mode.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<RunSummary> {
    let files = discover_files(&config.paths);
    set_progress(0, files.len());
    info!("Formatting {} files", files.len());

    let formatter = Formatter::new(config.options.clone());
    let outcomes: Vec<(PathBuf, Result<FileOutcome>)> = files
        .par_iter()
        .map(|path| {
            let outcome = format_file(&formatter, path, config.parser);
            increment_processed();
            (path.clone(), outcome)
        })
        .collect();

    let mut summary = RunSummary {
        files: files.len(),
        ..RunSummary::default()
    };
    for (path, outcome) in outcomes {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };
        if outcome.changed() {
            summary.changed.push(outcome.path.clone());
        }
        report(config.mode, &outcome, out)?;
    }

    info!(
        "{} files, {} changed, {} failed ({} configurations resolved)",
        summary.files,
        summary.changed.len(),
        summary.failed,
        formatter.cache().resolutions()
    );
    Ok(summary)
}

fn report(mode: OutputMode, outcome: &FileOutcome, out: &mut impl Write) -> Result<()> {
    match mode {
        OutputMode::Stdout => out.write_all(outcome.formatted.as_bytes())?,
        OutputMode::Write if outcome.changed() => {
            fs::write(&outcome.path, &outcome.formatted)
                .with_context(|| format!("Failed to write {}", outcome.path.display()))?;
            info!("Sorted classes in {}", outcome.path.display());
        }
        OutputMode::Check if outcome.changed() => {
            writeln!(out, "{}", outcome.path.display())?;
        }
        OutputMode::Write | OutputMode::Check => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("src")).unwrap();
        fs::write(
            root.path().join("src/index.html"),
            r#"<div class="sm:p-0 p-0"></div>"#,
        )
        .unwrap();
        fs::write(
            root.path().join("src/sorted.html"),
            r#"<div class="p-0 sm:p-0"></div>"#,
        )
        .unwrap();
        fs::write(root.path().join("src/notes.md"), "class=\"b a\"").unwrap();
        root
    }

    fn config(root: &Path, mode: OutputMode) -> RunConfig {
        RunConfig {
            paths: vec![root.to_path_buf()],
            parser: None,
            mode,
            options: FormatOptions::default(),
        }
    }

    #[test]
    fn test_discover_skips_unknown_extensions() {
        let root = project();
        let files = discover_files(&[root.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["index.html", "sorted.html"]);
    }

    #[test]
    fn test_check_mode_lists_changed_files() {
        let root = project();
        let mut out = Vec::new();
        let summary = run(&config(root.path(), OutputMode::Check), &mut out).unwrap();

        assert_eq!(summary.files, 2);
        assert_eq!(summary.changed, vec![root.path().join("src/index.html")]);
        assert!(summary.is_failure(OutputMode::Check));
        assert!(String::from_utf8(out).unwrap().contains("index.html"));
    }

    #[test]
    fn test_write_mode_rewrites_in_place() {
        let root = project();
        let summary = run(&config(root.path(), OutputMode::Write), &mut Vec::new()).unwrap();
        assert!(!summary.is_failure(OutputMode::Write));
        assert_eq!(
            fs::read_to_string(root.path().join("src/index.html")).unwrap(),
            r#"<div class="p-0 sm:p-0"></div>"#
        );
    }

    #[test]
    fn test_broken_config_fails_the_file_not_the_run() {
        let root = project();
        fs::write(root.path().join("tailwind.config.json"), "{ nope").unwrap();
        let summary = run(&config(root.path(), OutputMode::Stdout), &mut Vec::new()).unwrap();
        assert_eq!(summary.failed, 2);
        assert!(summary.is_failure(OutputMode::Stdout));
    }
}
