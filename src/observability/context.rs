//! Thread-local context tracking for crash reports.
//!
//! Records which phase of the pipeline a worker is in and which file it is
//! formatting. Each rayon worker has its own context (`thread_local!`);
//! overall progress lives in atomic counters shared by all workers.
//! Guards restore the previous context on drop, so phases nest.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<FormatContext> = const { RefCell::new(FormatContext::new()) };
}

/// What this thread was doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatContext {
    pub phase: Option<FormatPhase>,
    pub current_file: Option<PathBuf>,
}

impl FormatContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

/// Stages of formatting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPhase {
    /// Finding and loading the file's configuration
    ConfigResolution,
    Parsing,
    /// Walking the tree for class lists
    Extraction,
    Sorting,
    Rewriting,
}

impl std::fmt::Display for FormatPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigResolution => write!(f, "config_resolution"),
            Self::Parsing => write!(f, "parsing"),
            Self::Extraction => write!(f, "extraction"),
            Self::Sorting => write!(f, "sorting"),
            Self::Rewriting => write!(f, "rewriting"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: FormatContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Enter `phase` until the returned guard drops.
#[must_use]
pub fn set_phase(phase: FormatPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Mark `path` as the file being formatted until the guard drops.
#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.into());
        ContextGuard { previous }
    })
}

pub fn set_progress(processed: usize, total: usize) {
    FILES_PROCESSED.store(processed, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> FormatContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// `(processed, total)` file counts.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = FormatContext::new();
    });
}
