//! tailsort: sorts utility-first CSS class lists inside source files.
//!
//! Class lists are found with tree-sitter in markup attributes, framework
//! bindings, JSX attributes, script expressions and stylesheet `@apply`
//! rules. Each list is reordered with a [`ClassOrder`] oracle, normally the
//! [`DesignSystem`] built from the nearest `tailwind.config.{toml,json}`, and
//! spliced back without touching anything else in the file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod extract;
pub mod formatter;
pub mod observability;
pub mod oracle;
pub mod rewrite;
pub mod sorter;
pub mod syntax;

// Re-export commonly used types
pub use crate::config::{ConfigCache, FormatOptions, TailwindConfig};
pub use crate::dispatch::ParserId;
pub use crate::errors::{Error, Result};
pub use crate::formatter::{sort_classes, Formatter};
pub use crate::oracle::{ClassOrder, DesignSystem, Layer, SortKey};
pub use crate::sorter::{sort_class_list, SortOptions};
