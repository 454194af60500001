//! Per-file pipeline: resolve configuration, parse, extract, sort, splice.

use std::path::Path;

use tracing::{debug, debug_span};

use crate::config::{ConfigCache, FormatOptions};
use crate::dispatch::ParserId;
use crate::errors::Result;
use crate::extract::extract;
use crate::observability::{set_current_file, set_phase, FormatPhase};
use crate::oracle::{ClassOrder, ClassRanker};
use crate::rewrite::{apply_edits, edits_for_units};
use crate::syntax::parse;

/// Sort every class list of `source` with an explicit ordering oracle.
///
/// This is the configuration-free core: any [`ClassOrder`], including a
/// closure, can drive it.
pub fn sort_classes(source: &str, parser: ParserId, order: &dyn ClassOrder) -> Result<String> {
    let tree = {
        let _phase = set_phase(FormatPhase::Parsing);
        parse(source, parser)?
    };

    let units = {
        let _phase = set_phase(FormatPhase::Extraction);
        extract(&tree)
    };
    if units.is_empty() {
        return Ok(source.to_string());
    }

    let ranker = ClassRanker::new(order);
    let edits = {
        let _phase = set_phase(FormatPhase::Sorting);
        edits_for_units(source, &units, &ranker)
    };
    debug!(
        "{} class units, {} changed ({} parser)",
        units.len(),
        edits.len(),
        parser
    );

    let _phase = set_phase(FormatPhase::Rewriting);
    Ok(apply_edits(source, edits))
}

/// Formats sources against the configuration that governs their path.
///
/// Owns the run's [`ConfigCache`]; share one `Formatter` across workers.
#[derive(Debug, Default)]
pub struct Formatter {
    cache: ConfigCache,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            cache: ConfigCache::new(options),
        }
    }

    pub fn cache(&self) -> &ConfigCache {
        &self.cache
    }

    /// Format `source` by parser name. Unknown parser names return the
    /// source unchanged.
    pub fn format_source(&self, source: &str, parser: &str, path: &Path) -> Result<String> {
        match ParserId::from_name(parser) {
            Some(parser) => self.format_with(source, parser, path),
            None => {
                debug!("No extractors for parser {:?}, leaving {} as is", parser, path.display());
                Ok(source.to_string())
            }
        }
    }

    pub fn format_with(&self, source: &str, parser: ParserId, path: &Path) -> Result<String> {
        let span = debug_span!("format", file = %path.display(), parser = %parser);
        let _enter = span.enter();
        let _file = set_current_file(path);

        let system = {
            let _phase = set_phase(FormatPhase::ConfigResolution);
            self.cache.design_system_for(path)?
        };
        sort_classes(source, parser, system.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::SortKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_parser_is_a_no_op() {
        let formatter = Formatter::default();
        let source = r#"<div class="sm:p-0 p-0"></div>"#;
        assert_eq!(
            formatter
                .format_source(source, "markdown", Path::new("a.md"))
                .unwrap(),
            source
        );
    }

    #[test]
    fn test_default_design_system_without_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let formatter = Formatter::default();
        let out = formatter
            .format_source(
                r#"<div class="sm:p-0 p-0"></div>"#,
                "html",
                &dir.path().join("index.html"),
            )
            .unwrap();
        assert_eq!(out, r#"<div class="p-0 sm:p-0"></div>"#);
    }

    #[test]
    fn test_sort_classes_with_closure_oracle() {
        let order = |class: &str| match class {
            "A" => Some(SortKey::ordinal(1)),
            "B" => Some(SortKey::ordinal(2)),
            _ => None,
        };
        let out = sort_classes(
            "<div className={clsx('B A', ['B A'])} />",
            ParserId::Babel,
            &order,
        )
        .unwrap();
        assert_eq!(out, "<div className={clsx('A B', ['A B'])} />");
    }
}
