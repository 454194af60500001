//! Discovery of class-bearing text in a parsed source.
//!
//! Extraction is a pure walk: each extractor returns the [`ClassUnit`]s it
//! found and nothing is rewritten here. A unit is either a single
//! [`ClassSpan`] (a string whose tokens get sorted in place) or a whole
//! object literal whose entries move together with their keys.
//!
//! Shapes the walkers do not understand are skipped with a debug log. One
//! odd expression never stops the rest of the file from being extracted.

mod markup;
mod script;
mod stylesheet;

use std::ops::Range;

use crate::dispatch::{Extractor, LanguageFamily};
use crate::sorter::SortOptions;
use crate::syntax::SourceTree;

/// Syntactic position a class list was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A whole attribute value or string literal
    PlainString,
    /// A static segment of a template literal
    InterpolationSegment,
    ObjectKey,
    TernaryBranch,
    ArrayElement,
    CallArgument,
    /// Parameters of an at-rule such as `@apply`
    AtRuleParams,
}

/// One rewritable class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpan {
    /// Byte range of the list inside the source, quotes excluded
    pub range: Range<usize>,
    pub shape: Shape,
    /// Kind of the tree node that owns the text
    pub node_kind: &'static str,
    pub options: SortOptions,
}

/// Key of an object entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
    /// Key text, quotes excluded
    pub range: Range<usize>,
    /// String keys are class lists themselves; identifier keys are one token
    pub is_class_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// The whole `key: value` member
    pub range: Range<usize>,
    pub key: EntryKey,
}

/// Members of an object literal whose order may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntries {
    pub entries: Vec<ObjectEntry>,
}

impl ObjectEntries {
    /// From the first member's start to the last member's end.
    pub fn region(&self) -> Range<usize> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => first.range.start..last.range.end,
            _ => 0..0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassUnit {
    Span(ClassSpan),
    Entries(ObjectEntries),
}

impl ClassUnit {
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Span(span) => span.range.clone(),
            Self::Entries(entries) => entries.region(),
        }
    }

    fn shifted(self, map: &impl Fn(usize) -> usize) -> Self {
        let remap = |range: Range<usize>| map(range.start)..map(range.end);
        match self {
            Self::Span(span) => Self::Span(ClassSpan {
                range: remap(span.range),
                ..span
            }),
            Self::Entries(entries) => Self::Entries(ObjectEntries {
                entries: entries
                    .entries
                    .into_iter()
                    .map(|entry| ObjectEntry {
                        range: remap(entry.range),
                        key: EntryKey {
                            range: remap(entry.key.range),
                            is_class_list: entry.key.is_class_list,
                        },
                    })
                    .collect(),
            }),
        }
    }
}

/// Translate units found in a sub-tree back to host offsets.
pub fn map_offsets(units: Vec<ClassUnit>, map: impl Fn(usize) -> usize) -> Vec<ClassUnit> {
    units.into_iter().map(|unit| unit.shifted(&map)).collect()
}

/// Run every extractor of the tree's language, in dispatch order.
///
/// The result is ordered by start offset.
pub fn extract(tree: &SourceTree<'_>) -> Vec<ClassUnit> {
    let family = tree.parser.family();
    let profile = family.profile();

    let mut units = Vec::new();
    for extractor in profile.extractors {
        let found = match (extractor, family) {
            (Extractor::MarkupAttribute, LanguageFamily::Markup(_)) => {
                markup::attribute_units(tree, profile.attributes)
            }
            (Extractor::DirectiveBinding, LanguageFamily::Markup(_)) => {
                markup::binding_units(tree, profile.bindings)
            }
            (Extractor::JsxAttribute, LanguageFamily::Script(_)) => {
                script::jsx_attribute_units(tree, profile.attributes)
            }
            (Extractor::AtRuleParams, LanguageFamily::Stylesheet) => {
                stylesheet::at_rule_units(tree, profile.at_rules)
            }
            _ => Vec::new(),
        };
        units.extend(found);
    }
    units.sort_by_key(|unit| unit.range().start);
    units
}
