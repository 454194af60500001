//! Variant registration order.
//!
//! Every registered variant owns one bit; later registration means a higher
//! bit. The order mirrors the framework's own registration: pseudo-elements,
//! pseudo-classes (plain, then `group-*`, then `peer-*`), direction, motion,
//! dark mode, print, screens by ascending width, orientation and contrast,
//! configuration plugin variants, and finally arbitrary variants.

use crate::config::ThemeConfig;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

const PSEUDO_ELEMENTS: &[&str] = &[
    "first-letter",
    "first-line",
    "marker",
    "selection",
    "file",
    "placeholder",
    "backdrop",
    "before",
    "after",
];

const PSEUDO_CLASSES: &[&str] = &[
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
    "only-of-type",
    "visited",
    "target",
    "open",
    "default",
    "checked",
    "indeterminate",
    "placeholder-shown",
    "autofill",
    "optional",
    "required",
    "valid",
    "invalid",
    "in-range",
    "out-of-range",
    "read-only",
    "empty",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "enabled",
    "disabled",
];

const AFTER_PSEUDO_CLASSES: &[&str] = &["ltr", "rtl", "motion-safe", "motion-reduce", "dark", "print"];

const AFTER_SCREENS: &[&str] = &["portrait", "landscape", "contrast-more", "contrast-less"];

const DEFAULT_SCREENS: &[(&str, f64)] = &[
    ("sm", 640.0),
    ("md", 768.0),
    ("lg", 1024.0),
    ("xl", 1280.0),
    ("2xl", 1536.0),
];

/// Variant families that take a bracketed argument, e.g. `data-[open]`.
const ARBITRARY_FAMILIES: &[&str] = &["supports", "aria", "data", "group", "peer", "has", "min", "max"];

/// Lookup from variant name to its bit.
#[derive(Debug, Clone)]
pub struct VariantTable {
    bits: HashMap<String, u16>,
    arbitrary: u16,
}

impl VariantTable {
    pub fn new(screens: &[String], plugin_variants: &[String]) -> Self {
        let mut names: Vec<String> = Vec::new();
        names.extend(PSEUDO_ELEMENTS.iter().map(|v| v.to_string()));
        names.extend(PSEUDO_CLASSES.iter().map(|v| v.to_string()));
        names.extend(PSEUDO_CLASSES.iter().map(|v| format!("group-{v}")));
        names.extend(PSEUDO_CLASSES.iter().map(|v| format!("peer-{v}")));
        names.extend(AFTER_PSEUDO_CLASSES.iter().map(|v| v.to_string()));
        names.extend(screens.iter().cloned());
        names.extend(AFTER_SCREENS.iter().map(|v| v.to_string()));
        names.extend(plugin_variants.iter().cloned());

        let mut bits = HashMap::with_capacity(names.len());
        let mut next: u16 = 0;
        for name in names {
            // first registration wins, re-registering keeps the earlier bit
            if bits.contains_key(&name) {
                continue;
            }
            // the last bit belongs to arbitrary variants
            if next == u16::MAX {
                warn!("Variant table full, ignoring {} and later variants", name);
                break;
            }
            bits.insert(name, next);
            next += 1;
        }

        Self {
            bits,
            arbitrary: next,
        }
    }

    pub fn from_config(theme: &ThemeConfig, plugin_variants: &[String]) -> Self {
        Self::new(&screen_names(theme), plugin_variants)
    }

    pub fn bit(&self, variant: &str) -> Option<u16> {
        if let Some(&bit) = self.bits.get(variant) {
            return Some(bit);
        }
        is_arbitrary_variant(variant).then_some(self.arbitrary)
    }
}

impl Default for VariantTable {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), &[])
    }
}

fn is_arbitrary_variant(variant: &str) -> bool {
    let bracketed = |value: &str| value.len() > 2 && value.starts_with('[') && value.ends_with(']');
    if bracketed(variant) {
        return true;
    }
    ARBITRARY_FAMILIES.iter().any(|family| {
        variant
            .strip_prefix(family)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(bracketed)
    })
}

/// Screen names ordered by ascending minimum width.
///
/// `theme.screens` replaces the defaults, `theme.extend.screens` adds to them.
/// Screens whose width cannot be read sort after the measurable ones.
pub fn screen_names(theme: &ThemeConfig) -> Vec<String> {
    let mut screens: Vec<(String, Option<f64>)> = match theme.scales.get("screens") {
        Some(value) => screen_entries(value),
        None => DEFAULT_SCREENS
            .iter()
            .map(|(name, width)| (name.to_string(), Some(*width)))
            .collect(),
    };
    if let Some(value) = theme.extend.get("screens") {
        for (name, width) in screen_entries(value) {
            match screens.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = width,
                None => screens.push((name, width)),
            }
        }
    }

    screens.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    screens.into_iter().map(|(name, _)| name).collect()
}

fn screen_entries(value: &Value) -> Vec<(String, Option<f64>)> {
    let Value::Object(map) = value else {
        return Vec::new();
    };
    map.iter()
        .map(|(name, width)| {
            let width = match width {
                Value::String(raw) => parse_width(raw),
                Value::Number(number) => number.as_f64(),
                Value::Object(bounds) => bounds
                    .get("min")
                    .or_else(|| bounds.get("max"))
                    .and_then(Value::as_str)
                    .and_then(parse_width),
                _ => None,
            };
            (name.clone(), width)
        })
        .collect()
}

/// Parse a CSS length into pixels (`em`/`rem` at 16px).
fn parse_width(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Some(px) = raw.strip_suffix("px") {
        return px.trim().parse().ok();
    }
    if let Some(rem) = raw.strip_suffix("rem").or_else(|| raw.strip_suffix("em")) {
        return rem.trim().parse::<f64>().ok().map(|value| value * 16.0);
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme(value: Value) -> ThemeConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_state_variants_precede_screens() {
        let table = VariantTable::default();
        let hover = table.bit("hover").unwrap();
        let sm = table.bit("sm").unwrap();
        let md = table.bit("md").unwrap();
        assert!(hover < sm);
        assert!(sm < md);
    }

    #[test]
    fn test_group_and_peer_follow_plain_pseudo_classes() {
        let table = VariantTable::default();
        assert!(table.bit("disabled").unwrap() < table.bit("group-first").unwrap());
        assert!(table.bit("group-disabled").unwrap() < table.bit("peer-first").unwrap());
    }

    #[test]
    fn test_registration_stops_when_bits_run_out() {
        let plugin_variants: Vec<String> = (0..70_000).map(|i| format!("v{i}")).collect();
        let table = VariantTable::new(&[], &plugin_variants);
        assert_eq!(table.bit("[&>*]"), Some(u16::MAX));
        assert!(table.bit("v0").is_some());
        assert_eq!(table.bit("v69999"), None);
        assert!(table.bit("v0").unwrap() < u16::MAX);
    }

    #[test]
    fn test_unknown_variant_has_no_bit() {
        let table = VariantTable::default();
        assert_eq!(table.bit("potato"), None);
    }

    #[test]
    fn test_arbitrary_variants_share_the_last_bit() {
        let table = VariantTable::default();
        let arbitrary = table.bit("[&>*]").unwrap();
        assert_eq!(table.bit("data-[open]"), Some(arbitrary));
        assert_eq!(table.bit("supports-[display:grid]"), Some(arbitrary));
        assert!(table.bit("landscape").unwrap() < arbitrary);
        assert_eq!(table.bit("data-"), None);
    }

    #[test]
    fn test_plugin_variants_come_after_core_variants() {
        let table = VariantTable::new(&["sm".to_string()], &["hocus".to_string()]);
        assert!(table.bit("contrast-less").unwrap() < table.bit("hocus").unwrap());
    }

    #[test]
    fn test_screens_sorted_by_width() {
        let config = theme(json!({
            "screens": { "tablet": "640px", "laptop": "64rem", "phone": "320px" }
        }));
        assert_eq!(screen_names(&config), vec!["phone", "tablet", "laptop"]);
    }

    #[test]
    fn test_extended_screens_merge_with_defaults() {
        let config = theme(json!({ "extend": { "screens": { "3xl": "1920px", "xs": { "min": "480px" } } } }));
        assert_eq!(
            screen_names(&config),
            vec!["xs", "sm", "md", "lg", "xl", "2xl", "3xl"]
        );
    }

    #[test]
    fn test_parse_width_units() {
        assert_eq!(parse_width("640px"), Some(640.0));
        assert_eq!(parse_width("40rem"), Some(640.0));
        assert_eq!(parse_width("40em"), Some(640.0));
        assert_eq!(parse_width("wide"), None);
    }
}
