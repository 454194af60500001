//! Panic hook printing a crash report with the formatting context.
//!
//! The report names the phase and file the panicking worker was on and how
//! many files the run had finished, which is usually enough to reproduce.

use super::context::{get_current_context, get_progress, FormatContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the crash-report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();
    eprintln!();
    eprintln!("{}", crash_report(info, &context, processed, total));
}

fn crash_report(
    info: &PanicHookInfo<'_>,
    context: &FormatContext,
    processed: usize,
    total: usize,
) -> String {
    let mut lines = vec![
        rule('╔', '╗'),
        boxed("TAILSORT CRASH REPORT"),
        rule('╠', '╣'),
        boxed(&format!("Version: {VERSION}")),
        boxed(&format!("Platform: {}", std::env::consts::OS)),
        rule('╠', '╣'),
        boxed(&format!("PANIC: {}", extract_panic_message(info))),
    ];
    if let Some(location) = info.location() {
        lines.push(boxed(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        )));
    }
    lines.push(rule('╠', '╣'));
    lines.extend(context_lines(context, processed, total));
    lines.push(rule('╠', '╣'));
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(boxed("STACK TRACE:"));
        lines.push(rule('╚', '╝'));
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push(boxed("Run with RUST_BACKTRACE=1 for stack trace"));
        lines.push(rule('╚', '╝'));
    }
    if let Some(file) = &context.current_file {
        lines.push(format!("Include this crash report and the file: {}", file.display()));
    }
    lines.join("\n")
}

fn context_lines(context: &FormatContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = vec![boxed("OPERATION CONTEXT:")];
    match &context.phase {
        Some(phase) => lines.push(boxed(&format!("  Phase: {phase}"))),
        None => lines.push(boxed("  Phase: (not set, crashed before formatting started)")),
    }
    if let Some(metadata) = Span::current().metadata() {
        lines.push(boxed(&format!("  Span: {}", metadata.name())));
    }
    if let Some(file) = &context.current_file {
        lines.push(boxed(&format!("  File: {}", file.display())));
    }
    if total > 0 {
        let pct = processed * 100 / total;
        lines.push(boxed(&format!("  Progress: {processed} / {total} files ({pct}%)")));
    }
    lines
}

const WIDTH: usize = 78;

fn rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(WIDTH))
}

fn boxed(text: &str) -> String {
    format!("║  {:<width$}║", truncate(text, WIDTH - 2), width = WIDTH - 2)
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::context::FormatPhase;
    use std::path::PathBuf;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        let long = truncate("this is a long string that needs truncation", 20);
        assert_eq!(long.chars().count(), 20);
        assert!(long.ends_with("..."));
        assert_eq!(truncate("hello", 3), "...");
    }

    #[test]
    fn test_boxed_lines_have_fixed_width() {
        let line = boxed("Phase: parsing");
        assert_eq!(line.chars().count(), WIDTH + 2);
        assert_eq!(rule('╔', '╗').chars().count(), WIDTH + 2);
    }

    #[test]
    fn test_context_lines() {
        let context = FormatContext {
            phase: Some(FormatPhase::Extraction),
            current_file: Some(PathBuf::from("src/App.vue")),
        };
        let lines = context_lines(&context, 3, 4).join("\n");
        assert!(lines.contains("Phase: extraction"));
        assert!(lines.contains("File: src/App.vue"));
        assert!(lines.contains("3 / 4 files (75%)"));
    }
}
