use std::ops::Range;

use tracing::debug;
use tree_sitter::Node;

use super::script::expression_units;
use super::{map_offsets, ClassSpan, ClassUnit, Shape};
use crate::sorter::SortOptions;
use crate::syntax::{for_each_node, parse_expression, SourceTree};

/// Name and value range of every attribute in the document.
fn attributes<'s>(tree: &SourceTree<'s>) -> Vec<(&'s str, Range<usize>)> {
    let mut found = Vec::new();
    for_each_node(tree.root(), |node| {
        if node.kind() != "attribute" {
            return;
        }
        let mut name = None;
        let mut value = None;
        for index in 0..node.named_child_count() {
            let Some(child) = node.named_child(index) else {
                continue;
            };
            match child.kind() {
                "attribute_name" => name = Some(tree.text(&child)),
                "quoted_attribute_value" => value = Some(quoted_value_range(child)),
                "attribute_value" => value = Some(child.byte_range()),
                _ => {}
            }
        }
        if let (Some(name), Some(value)) = (name, value) {
            found.push((name, value));
        }
    });
    found
}

fn quoted_value_range(node: Node<'_>) -> Range<usize> {
    let start = node.start_byte() + 1;
    let end = node.end_byte().saturating_sub(1).max(start);
    start..end
}

/// Plain attributes such as `class="..."`.
pub(super) fn attribute_units(tree: &SourceTree<'_>, names: &[&str]) -> Vec<ClassUnit> {
    attributes(tree)
        .into_iter()
        .filter(|(name, _)| names.iter().any(|wanted| wanted.eq_ignore_ascii_case(name)))
        .filter(|(_, range)| !range.is_empty())
        .map(|(_, range)| {
            ClassUnit::Span(ClassSpan {
                range,
                shape: Shape::PlainString,
                node_kind: "attribute_value",
                options: SortOptions::default(),
            })
        })
        .collect()
}

/// Bound attributes (`:class`, `[ngClass]`) whose value is a script
/// expression.
pub(super) fn binding_units(tree: &SourceTree<'_>, names: &[&str]) -> Vec<ClassUnit> {
    attributes(tree)
        .into_iter()
        .filter(|(name, _)| names.contains(name))
        .flat_map(|(name, range)| binding_value_units(tree.source, name, range))
        .collect()
}

fn binding_value_units(source: &str, name: &str, range: Range<usize>) -> Vec<ClassUnit> {
    let value = &source[range.clone()];
    if value.trim().is_empty() {
        return Vec::new();
    }

    // parenthesized so a leading `{` reads as an object, not a block
    let wrapped = format!("({value})");
    let tree = match parse_expression(&wrapped) {
        Ok(tree) => tree,
        Err(e) => {
            debug!("Skipping {} binding at byte {}: {}", name, range.start, e);
            return Vec::new();
        }
    };
    let root = tree.root_node();
    if root.has_error() {
        debug!("Skipping unparsable {} binding at byte {}", name, range.start);
        return Vec::new();
    }

    let expression = root
        .named_child(0)
        .filter(|statement| statement.kind() == "expression_statement")
        .and_then(|statement| statement.named_child(0));
    let Some(expression) = expression else {
        return Vec::new();
    };

    let units = expression_units(expression, &wrapped);
    map_offsets(units, |offset| offset + range.start - 1)
}
