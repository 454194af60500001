//! Turning extracted units into text edits and splicing them in.
//!
//! Every edit is computed against the original source. Edits are applied in
//! one pass ordered by offset; an edit overlapping an earlier one is dropped.

use std::ops::Range;

use tracing::{debug, warn};

use crate::extract::{ClassSpan, ClassUnit, ObjectEntries};
use crate::oracle::ClassRanker;
use crate::sorter::{sort_class_list, tokenize, SortOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

/// Edit for a single class list, or `None` when it is already sorted.
pub fn rewrite_span(source: &str, span: &ClassSpan, ranker: &ClassRanker<'_>) -> Option<Edit> {
    let original = source.get(span.range.clone())?;
    let sorted = sort_class_list(original, ranker, span.options);
    (sorted != original).then(|| Edit {
        range: span.range.clone(),
        replacement: sorted,
    })
}

/// Edit reordering object members by the rank of their (sorted) keys.
///
/// Members carry their values with them; the separators between members stay
/// in their slots.
pub fn rewrite_entries(
    source: &str,
    object: &ObjectEntries,
    ranker: &ClassRanker<'_>,
) -> Option<Edit> {
    let region = object.region();
    let original = source.get(region.clone())?;

    let mut members = Vec::with_capacity(object.entries.len());
    for (index, entry) in object.entries.iter().enumerate() {
        let key = source.get(entry.key.range.clone())?;
        let key = if entry.key.is_class_list {
            sort_class_list(key, ranker, SortOptions::default())
        } else {
            key.to_string()
        };
        let rank = tokenize(&key).first().and_then(|token| ranker.rank(token.text));
        let text = format!(
            "{}{}{}",
            source.get(entry.range.start..entry.key.range.start)?,
            key,
            source.get(entry.key.range.end..entry.range.end)?
        );
        members.push((rank, index, text));
    }
    members.sort_by(|(a_rank, a_index, _), (b_rank, b_index, _)| {
        a_rank.cmp(b_rank).then(a_index.cmp(b_index))
    });

    let mut replacement = String::with_capacity(original.len());
    for (slot, (_, _, text)) in members.iter().enumerate() {
        replacement.push_str(text);
        if let Some(next) = object.entries.get(slot + 1) {
            replacement.push_str(source.get(object.entries[slot].range.end..next.range.start)?);
        }
    }

    (replacement != original).then_some(Edit {
        range: region,
        replacement,
    })
}

pub fn edits_for_units(source: &str, units: &[ClassUnit], ranker: &ClassRanker<'_>) -> Vec<Edit> {
    units
        .iter()
        .filter_map(|unit| {
            let (edit, kind) = match unit {
                ClassUnit::Span(span) => (rewrite_span(source, span, ranker), span.node_kind),
                ClassUnit::Entries(entries) => (rewrite_entries(source, entries, ranker), "object"),
            };
            match &edit {
                Some(_) => debug!("Sorted {} at {:?}", kind, unit.range()),
                None => debug!("{} at {:?} already sorted", kind, unit.range()),
            }
            edit
        })
        .collect()
}

/// Splice `edits` into `source` in a single pass.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.range.start < cursor || edit.range.end > source.len() {
            warn!(
                "Dropping edit at {:?} overlapping a previous edit",
                edit.range
            );
            continue;
        }
        out.push_str(&source[cursor..edit.range.start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    out.push_str(&source[cursor..]);
    out
}
