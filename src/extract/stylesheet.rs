use tracing::debug;

use super::{ClassSpan, ClassUnit, Shape};
use crate::sorter::SortOptions;
use crate::syntax::{for_each_node, SourceTree};

/// Parameters of class-bearing at-rules such as `@apply`.
///
/// The span runs from the keyword to the `;`, `{` or `}` closing the rule. A
/// trailing `!important` stays outside the span so it remains last.
/// Preprocessor interpolation (`#{...}`, `@{...}`) and comments inside the
/// parameters leave the rule untouched.
pub(super) fn at_rule_units(tree: &SourceTree<'_>, at_rules: &[&str]) -> Vec<ClassUnit> {
    let source = tree.source;
    let mut units = Vec::new();

    for_each_node(tree.root(), |node| {
        if node.kind() != "at_keyword" || !at_rules.contains(&tree.text(&node)) {
            return;
        }
        let start = node.end_byte();
        let Some(end) = params_end(source, start) else {
            debug!("Skipping interpolated at-rule at byte {}", node.start_byte());
            return;
        };
        let params = &source[start..end];

        let end = start + strip_important(params).len();
        if source[start..end].trim().is_empty() {
            return;
        }
        units.push(ClassUnit::Span(ClassSpan {
            range: start..end,
            shape: Shape::AtRuleParams,
            node_kind: "at_rule",
            options: SortOptions::default(),
        }));
    });
    units
}

/// End of the parameters starting at `start`: the first `;`, `{` or `}`
/// outside brackets, parentheses and quotes.
///
/// `None` when the parameters hold `#{...}` / `@{...}` interpolation or a
/// comment.
fn params_end(source: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut previous = '\0';

    for (offset, ch) in source[start..].char_indices() {
        let at = start + offset;
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            previous = ch;
            continue;
        }
        match ch {
            '{' if previous == '#' || previous == '@' => return None,
            '*' if previous == '/' => return None,
            '\'' | '"' => quote = Some(ch),
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ';' | '{' | '}' if depth == 0 => return Some(at),
            _ => {}
        }
        previous = ch;
    }
    Some(source.len())
}

/// Drop a trailing `!important` flag (and nothing else).
fn strip_important(params: &str) -> &str {
    let trimmed = params.trim_end();
    match trimmed.strip_suffix("!important") {
        Some(rest) if rest.is_empty() || rest.ends_with(char::is_whitespace) => rest,
        _ => params,
    }
}
