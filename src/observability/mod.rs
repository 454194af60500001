//! Logging, crash reports and per-thread formatting context.
//!
//! ## Usage
//!
//! ```ignore
//! use tailsort::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     init_logging(0);
//!     install_panic_hook();
//! }
//! ```
//!
//! Track context while formatting:
//!
//! ```ignore
//! let _file = set_current_file(&path);
//! let _phase = set_phase(FormatPhase::Parsing);
//! // a panic here reports the file and the parsing phase
//! ```

pub mod context;
mod logging;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_file, set_phase,
    set_progress, ContextGuard, FormatContext, FormatPhase,
};
pub use logging::{default_level, init_logging, LOG_ENV};
pub use panic_hook::install_panic_hook;
