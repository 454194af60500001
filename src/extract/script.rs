//! Class lists inside script expressions.
//!
//! The walker starts at a class-valued expression (a JSX attribute value or a
//! directive binding) and descends only through shapes whose strings are
//! class lists: concatenation, fallbacks, ternary branches, call arguments,
//! arrays, object keys and template literal segments. Conditions, callees,
//! object values and subscript indexes are never entered.

use tracing::debug;
use tree_sitter::Node;

use super::{ClassSpan, ClassUnit, EntryKey, ObjectEntries, ObjectEntry, Shape};
use crate::sorter::SortOptions;
use crate::syntax::{for_each_node, SourceTree};

/// Units of every `class` / `className` JSX attribute.
pub(super) fn jsx_attribute_units(tree: &SourceTree<'_>, attributes: &[&str]) -> Vec<ClassUnit> {
    let mut units = Vec::new();
    for_each_node(tree.root(), |node| {
        if node.kind() != "jsx_attribute" {
            return;
        }
        let Some(name) = node.named_child(0) else {
            return;
        };
        if !attributes.contains(&tree.text(&name)) {
            return;
        }
        let Some(value) = node.named_child(1) else {
            return;
        };
        if value.has_error() {
            debug!("Skipping malformed {} value at byte {}", tree.text(&name), value.start_byte());
            return;
        }
        units.extend(expression_units(value, tree.source));
    });
    units
}

/// Units of a class-valued expression node.
pub(super) fn expression_units(node: Node<'_>, source: &str) -> Vec<ClassUnit> {
    let mut walker = ExpressionWalker {
        source,
        units: Vec::new(),
    };
    walker.visit(node, Shape::PlainString);
    walker.units
}

struct ExpressionWalker<'s> {
    source: &'s str,
    units: Vec<ClassUnit>,
}

impl ExpressionWalker<'_> {
    fn visit(&mut self, node: Node<'_>, shape: Shape) {
        match node.kind() {
            "string" => self.string(node, shape),
            "template_string" => self.template(node, shape),
            "jsx_expression"
            | "parenthesized_expression"
            | "as_expression"
            | "satisfies_expression"
            | "non_null_expression" => {
                if let Some(inner) = first_expression(node) {
                    self.visit(inner, shape);
                }
            }
            "binary_expression" => self.binary(node, shape),
            "ternary_expression" => {
                for field in ["consequence", "alternative"] {
                    if let Some(branch) = node.child_by_field_name(field) {
                        self.visit(branch, Shape::TernaryBranch);
                    }
                }
            }
            "call_expression" => {
                let Some(arguments) = node.child_by_field_name("arguments") else {
                    return;
                };
                if arguments.kind() != "arguments" {
                    return;
                }
                for argument in named_children(arguments) {
                    self.visit(argument, Shape::CallArgument);
                }
            }
            "array" => {
                for element in named_children(node) {
                    self.visit(element, Shape::ArrayElement);
                }
            }
            "object" => self.object(node),
            "subscript_expression" => {
                let object = node
                    .child_by_field_name("object")
                    .and_then(unwrap_parentheses);
                if let Some(object) = object.filter(|object| object.kind() == "object") {
                    self.object(object);
                }
            }
            "comment" => {}
            kind => debug!("Skipping {} expression at byte {}", kind, node.start_byte()),
        }
    }

    fn binary(&mut self, node: Node<'_>, shape: Shape) {
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind())
            .unwrap_or_default();
        let left = node.child_by_field_name("left");
        let right = node.child_by_field_name("right");
        match operator {
            "+" | "||" | "??" => {
                for operand in [left, right].into_iter().flatten() {
                    self.visit(operand, shape);
                }
            }
            // the left operand is a condition
            "&&" => {
                if let Some(right) = right {
                    self.visit(right, shape);
                }
            }
            _ => {}
        }
    }

    fn string(&mut self, node: Node<'_>, shape: Shape) {
        if let Some(span) = string_content(node) {
            self.units.push(ClassUnit::Span(ClassSpan {
                range: span,
                shape,
                node_kind: node.kind(),
                options: SortOptions::default(),
            }));
        }
    }

    /// One span per static segment; substitutions are boundaries and are
    /// walked on their own.
    fn template(&mut self, node: Node<'_>, shape: Shape) {
        let content_end = node.end_byte().saturating_sub(1);
        let mut segment_start = node.start_byte() + 1;
        let mut after_hole = false;

        for child in named_children(node) {
            if child.kind() != "template_substitution" {
                continue;
            }
            self.segment(segment_start..child.start_byte(), after_hole, true);
            if let Some(inner) = first_expression(child) {
                self.visit(inner, shape);
            }
            segment_start = child.end_byte();
            after_hole = true;
        }
        if segment_start <= content_end {
            self.segment(segment_start..content_end, after_hole, false);
        }
    }

    fn segment(&mut self, range: std::ops::Range<usize>, after_hole: bool, before_hole: bool) {
        let text = &self.source[range.clone()];
        if text.trim().is_empty() || text.contains('\\') {
            return;
        }
        let options = SortOptions {
            ignore_first: after_hole && !text.starts_with(char::is_whitespace),
            ignore_last: before_hole && !text.ends_with(char::is_whitespace),
        };
        self.units.push(ClassUnit::Span(ClassSpan {
            range,
            shape: Shape::InterpolationSegment,
            node_kind: "template_string",
            options,
        }));
    }

    /// Reorder the entries when every member is a plain pair, otherwise only
    /// sort the string keys in place.
    fn object(&mut self, node: Node<'_>) {
        let members: Vec<Node<'_>> = named_children(node).collect();
        let entries: Option<Vec<ObjectEntry>> = members.iter().map(|member| plain_entry(*member)).collect();

        match entries {
            Some(entries) if !entries.is_empty() => {
                self.units.push(ClassUnit::Entries(ObjectEntries { entries }));
            }
            Some(_) => {}
            None => {
                debug!(
                    "Object at byte {} keeps its member order",
                    node.start_byte()
                );
                for member in members.iter().filter(|member| member.kind() == "pair") {
                    let key = member.child_by_field_name("key");
                    if let Some(range) = key.filter(|key| key.kind() == "string").and_then(string_content) {
                        self.units.push(ClassUnit::Span(ClassSpan {
                            range,
                            shape: Shape::ObjectKey,
                            node_kind: "string",
                            options: SortOptions::default(),
                        }));
                    }
                }
            }
        }
    }
}

/// A `key: value` member with a string or identifier key.
fn plain_entry(member: Node<'_>) -> Option<ObjectEntry> {
    if member.kind() != "pair" {
        return None;
    }
    let key = member.child_by_field_name("key")?;
    let key = match key.kind() {
        "string" => EntryKey {
            range: string_content(key)?,
            is_class_list: true,
        },
        "property_identifier" => EntryKey {
            range: key.byte_range(),
            is_class_list: false,
        },
        _ => return None,
    };
    Some(ObjectEntry {
        range: member.byte_range(),
        key,
    })
}

/// Range between the quotes of a string literal without escapes.
fn string_content(node: Node<'_>) -> Option<std::ops::Range<usize>> {
    if named_children(node).any(|child| child.kind() == "escape_sequence") {
        debug!("Skipping string with escapes at byte {}", node.start_byte());
        return None;
    }
    let start = node.start_byte() + 1;
    let end = node.end_byte().checked_sub(1)?;
    (start < end).then_some(start..end)
}

fn named_children<'t>(node: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    (0..node.named_child_count()).filter_map(move |index| node.named_child(index))
}

fn first_expression(node: Node<'_>) -> Option<Node<'_>> {
    named_children(node).find(|child| child.kind() != "comment")
}

fn unwrap_parentheses(mut node: Node<'_>) -> Option<Node<'_>> {
    while node.kind() == "parenthesized_expression" {
        node = first_expression(node)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ParserId;
    use crate::syntax::parse;

    fn texts(source: &str) -> Vec<(String, Shape)> {
        let tree = parse(source, ParserId::Babel).unwrap();
        jsx_attribute_units(&tree, &["class", "className"])
            .into_iter()
            .map(|unit| match unit {
                ClassUnit::Span(span) => (source[span.range].to_string(), span.shape),
                ClassUnit::Entries(entries) => {
                    (source[entries.region()].to_string(), Shape::ObjectKey)
                }
            })
            .collect()
    }

    #[test]
    fn test_plain_jsx_string() {
        assert_eq!(
            texts(r#"<div className="b a" id="x y" />"#),
            vec![("b a".to_string(), Shape::PlainString)]
        );
    }

    #[test]
    fn test_call_arguments_and_arrays() {
        assert_eq!(
            texts(r#"<div class={clsx('B A', ['C'])} />"#),
            vec![
                ("B A".to_string(), Shape::CallArgument),
                ("C".to_string(), Shape::ArrayElement),
            ]
        );
    }

    #[test]
    fn test_conditions_are_not_class_lists() {
        assert_eq!(
            texts(r#"<div className={'c' === x ? 'b a' : 'd c'} />"#),
            vec![
                ("b a".to_string(), Shape::TernaryBranch),
                ("d c".to_string(), Shape::TernaryBranch),
            ]
        );
        assert_eq!(
            texts(r#"<div className={'z y' && 'b a'} />"#),
            vec![("b a".to_string(), Shape::PlainString)]
        );
    }

    #[test]
    fn test_template_segments() {
        let source = "<div className={`b a ${x ? 'd c' : ''} foo-${y}`} />";
        let tree = parse(source, ParserId::Babel).unwrap();
        let units = jsx_attribute_units(&tree, &["className"]);
        let spans: Vec<(&str, SortOptions)> = units
            .iter()
            .filter_map(|unit| match unit {
                ClassUnit::Span(span) => Some((&source[span.range.clone()], span.options)),
                ClassUnit::Entries(_) => None,
            })
            .collect();
        assert_eq!(
            spans,
            vec![
                ("b a ", SortOptions::default()),
                ("d c", SortOptions::default()),
                (
                    " foo-",
                    SortOptions {
                        ignore_first: false,
                        ignore_last: true
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_object_entries_and_fallback() {
        assert_eq!(
            texts(r#"<div className={{ 'b a': x, c: y }} />"#),
            vec![("'b a': x, c: y".to_string(), Shape::ObjectKey)]
        );
        assert_eq!(
            texts(r#"<div className={{ 'b a': x, ...rest }} />"#),
            vec![("b a".to_string(), Shape::ObjectKey)]
        );
    }

    #[test]
    fn test_subscript_keys() {
        assert_eq!(
            texts(r#"<div className={{ 'b a': 1, 'd c': 2 }[size]} />"#),
            vec![("'b a': 1, 'd c': 2".to_string(), Shape::ObjectKey)]
        );
    }

    #[test]
    fn test_spans_record_their_node_kind() {
        let source = "<div className={clsx('b a', `d c`)} />";
        let tree = parse(source, ParserId::Babel).unwrap();
        let kinds: Vec<&str> = jsx_attribute_units(&tree, &["className"])
            .iter()
            .filter_map(|unit| match unit {
                ClassUnit::Span(span) => Some(span.node_kind),
                ClassUnit::Entries(_) => None,
            })
            .collect();
        assert_eq!(kinds, vec!["string", "template_string"]);
    }

    #[test]
    fn test_escaped_strings_are_skipped() {
        assert!(texts(r#"<div className={'b\ta'} />"#).is_empty());
    }
}
