//! Token-list sorting and whitespace-preserving reassembly.
//!
//! A class list is split on whitespace into [`Token`]s. Recognized tokens are
//! ordered by their [`SortKey`](crate::oracle::SortKey); unrecognized tokens
//! rank below every recognized one and keep their relative order, since the
//! sort key is `(rank, original index)`.

use crate::oracle::ClassRanker;

/// A contiguous non-whitespace run of a class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token inside the class list
    pub offset: usize,
}

/// Fragments of a class list that must not move.
///
/// Set when the list is a template segment glued to a neighbouring hole:
/// `foo-${x}` keeps `foo-` attached to the substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub ignore_first: bool,
    pub ignore_last: bool,
}

pub fn tokenize(value: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (index, ch) in value.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(from)) => {
                tokens.push(Token {
                    text: &value[from..index],
                    offset: from,
                });
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(from) = start {
        tokens.push(Token {
            text: &value[from..],
            offset: from,
        });
    }
    tokens
}

/// Stable sort by `(rank, original index)`.
pub fn sort_tokens<'a>(tokens: &[Token<'a>], ranker: &ClassRanker<'_>) -> Vec<Token<'a>> {
    let mut keyed: Vec<_> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| (ranker.rank(token.text), index, *token))
        .collect();
    keyed.sort_by(|(a_rank, a_index, _), (b_rank, b_index, _)| {
        a_rank.cmp(b_rank).then(a_index.cmp(b_index))
    });
    keyed.into_iter().map(|(_, _, token)| token).collect()
}

/// Reorder the classes of `value`.
///
/// Leading and trailing whitespace survive; the sorted tokens are re-joined
/// with single spaces. Lists carrying `{{` template interpolation are
/// returned untouched.
pub fn sort_class_list(value: &str, ranker: &ClassRanker<'_>, options: SortOptions) -> String {
    if value.contains("{{") {
        return value.to_string();
    }

    let tokens = tokenize(value);
    let Some((first, last)) = tokens.first().zip(tokens.last()) else {
        return value.to_string();
    };

    let leading = &value[..first.offset];
    let trailing = &value[last.offset + last.text.len()..];
    let gap = |index: usize| {
        let left = &tokens[index];
        &value[left.offset + left.text.len()..tokens[index + 1].offset]
    };

    let len = tokens.len();
    let start = usize::from(options.ignore_first);
    let end = if options.ignore_last {
        len.saturating_sub(1).max(start)
    } else {
        len
    };

    let mut out = String::with_capacity(value.len());
    out.push_str(leading);
    if start == 1 {
        out.push_str(first.text);
        if len > 1 {
            out.push_str(gap(0));
        }
    }

    let middle: Vec<&str> = sort_tokens(&tokens[start..end], ranker)
        .into_iter()
        .map(|token| token.text)
        .collect();
    out.push_str(&middle.join(" "));

    if end < len {
        if end > start {
            out.push_str(gap(end - 1));
        }
        out.push_str(tokens[end].text);
    }
    out.push_str(trailing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{ClassOrder, SortKey};
    use pretty_assertions::assert_eq;

    /// Ranks single letters alphabetically, anything else unrecognized.
    fn letters(class: &str) -> Option<SortKey> {
        let mut chars = class.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Some(SortKey::ordinal(c as u32)),
            _ => None,
        }
    }

    fn sort(value: &str, options: SortOptions) -> String {
        let order: &dyn ClassOrder = &letters;
        sort_class_list(value, &ClassRanker::new(order), options)
    }

    #[test]
    fn test_tokenize_offsets() {
        let tokens = tokenize("  a\tbb \n c ");
        let texts: Vec<_> = tokens.iter().map(|t| (t.text, t.offset)).collect();
        assert_eq!(texts, vec![("a", 2), ("bb", 4), ("c", 9)]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_sorts_and_preserves_outer_whitespace() {
        assert_eq!(sort("  C A B ", SortOptions::default()), "  A B C ");
    }

    #[test]
    fn test_inner_whitespace_collapses_to_single_spaces() {
        assert_eq!(sort("C\n\tA   B", SortOptions::default()), "A B C");
    }

    #[test]
    fn test_unrecognized_tokens_lead_in_original_order() {
        assert_eq!(
            sort("B zeta A alpha", SortOptions::default()),
            "zeta alpha A B"
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(sort("", SortOptions::default()), "");
        assert_eq!(sort("   ", SortOptions::default()), "   ");
        assert_eq!(sort("B", SortOptions::default()), "B");
        assert_eq!(sort("x y z", SortOptions::default()), "x y z");
    }

    #[test]
    fn test_template_interpolation_is_untouched() {
        assert_eq!(sort("C {{ b }} A", SortOptions::default()), "C {{ b }} A");
    }

    #[test]
    fn test_glued_fragments_stay_in_place() {
        let first = SortOptions {
            ignore_first: true,
            ignore_last: false,
        };
        assert_eq!(sort("-foo  C A", first), "-foo  A C");

        let last = SortOptions {
            ignore_first: false,
            ignore_last: true,
        };
        assert_eq!(sort(" C A bar-", last), " A C bar-");

        let both = SortOptions {
            ignore_first: true,
            ignore_last: true,
        };
        assert_eq!(sort("x C A y", both), "x A C y");
        assert_eq!(sort("x y", both), "x y");
        assert_eq!(sort("x", both), "x");
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(sort("B A B", SortOptions::default()), "A B B");
    }
}
