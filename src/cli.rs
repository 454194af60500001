use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// What to do with formatted files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print formatted sources to stdout
    Stdout,
    /// Rewrite changed files in place
    Write,
    /// List files whose classes are out of order
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "tailsort")]
#[command(about = "Sort utility classes in markup, scripts and stylesheets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files or directories to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Configuration file, skipping discovery
    #[arg(long, env = "TAILSORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Parser for every file instead of inferring it from the extension
    #[arg(long)]
    pub parser: Option<String>,

    /// Rewrite files in place
    #[arg(long, conflicts_with = "check")]
    pub write: bool,

    /// Exit with status 1 when any file would change
    #[arg(long)]
    pub check: bool,

    /// Worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0")]
    pub jobs: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn mode(&self) -> OutputMode {
        if self.write {
            OutputMode::Write
        } else if self.check {
            OutputMode::Check
        } else {
            OutputMode::Stdout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        let cli = Cli::parse_from(["tailsort", "src"]);
        assert_eq!(cli.mode(), OutputMode::Stdout);
        assert_eq!(cli.jobs, 0);

        let cli = Cli::parse_from(["tailsort", "--write", "-j", "2", "src"]);
        assert_eq!(cli.mode(), OutputMode::Write);
        assert_eq!(cli.jobs, 2);

        let cli = Cli::parse_from(["tailsort", "--check", "-vv", "a.html", "b.vue"]);
        assert_eq!(cli.mode(), OutputMode::Check);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_write_conflicts_with_check() {
        assert!(Cli::try_parse_from(["tailsort", "--write", "--check", "src"]).is_err());
    }

    #[test]
    fn test_paths_are_required() {
        assert!(Cli::try_parse_from(["tailsort"]).is_err());
    }
}
