//! Decomposition of a class token into variants and a utility base.
//!
//! Grammar: `variant{sep}variant{sep}…[!][-][prefix][-]base[!]`. The separator
//! is never matched inside `[...]` or `(...)`, so arbitrary values and
//! arbitrary variants may contain it.

/// A token split into the parts the design system ranks separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub variants: Vec<&'a str>,
    pub base: &'a str,
    pub negative: bool,
    pub important: bool,
}

/// Split `raw` into a candidate.
///
/// Returns `None` when the token cannot be a utility under this separator
/// and prefix (empty variant, empty base, missing required prefix).
pub fn parse_candidate<'a>(raw: &'a str, separator: &str, prefix: &str) -> Option<Candidate<'a>> {
    let mut parts = split_top_level(raw, separator);
    let utility = parts.pop()?;
    if parts.iter().any(|variant| variant.is_empty()) {
        return None;
    }

    let (utility, mut important) = match utility.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };
    let utility = match utility.strip_suffix('!') {
        Some(rest) => {
            important = true;
            rest
        }
        None => utility,
    };

    let (mut utility, mut negative) = match utility.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (utility, false),
    };

    if !prefix.is_empty() {
        utility = utility.strip_prefix(prefix)?;
        if !negative {
            if let Some(rest) = utility.strip_prefix('-') {
                utility = rest;
                negative = true;
            }
        }
    }

    if utility.is_empty() {
        return None;
    }

    Some(Candidate {
        variants: parts,
        base: utility,
        negative,
        important,
    })
}

/// Split on `separator` outside of brackets and parentheses.
pub(crate) fn split_top_level<'a>(raw: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut iter = raw.char_indices();

    while let Some((index, ch)) = iter.next() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && raw[index..].starts_with(separator) => {
                parts.push(&raw[start..index]);
                start = index + separator.len();
                // skip the remainder of a multi-character separator
                for _ in separator.chars().skip(1) {
                    iter.next();
                }
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

/// Whether `value` is a bracketed arbitrary value such as `[3px]`.
pub(crate) fn is_arbitrary(value: &str) -> bool {
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}
