use super::candidate::{is_arbitrary, parse_candidate, Candidate};
use super::theme::Theme;
use super::utilities::CORE_FAMILIES;
use super::variants::VariantTable;
use super::{ClassOrder, Layer, SortKey, VariantOrder};
use crate::config::{PluginConfig, PluginLayer, TailwindConfig};
use std::collections::HashSet;
use tracing::debug;

/// Built-in ordering oracle evaluated from a resolved configuration.
///
/// Immutable once built; one instance is shared by every file that resolves
/// to the same configuration.
#[derive(Debug, Clone)]
pub struct DesignSystem {
    prefix: String,
    separator: String,
    theme: Theme,
    variants: VariantTable,
    disabled: HashSet<String>,
    plugins: Vec<PluginConfig>,
}

impl DesignSystem {
    pub fn new(config: &TailwindConfig) -> Self {
        let plugin_variants: Vec<String> = config
            .plugins
            .iter()
            .flat_map(|plugin| plugin.variants.iter().cloned())
            .collect();

        let disabled: HashSet<String> = CORE_FAMILIES
            .iter()
            .filter(|family| !config.core_plugins.is_enabled(family.name))
            .map(|family| family.name.to_string())
            .collect();
        if !disabled.is_empty() {
            debug!("Disabled core plugins: {:?}", disabled);
        }

        Self {
            prefix: config.prefix.clone(),
            separator: config.separator().to_string(),
            theme: Theme::from_config(&config.theme),
            variants: VariantTable::from_config(&config.theme, &plugin_variants),
            disabled,
            plugins: config.plugins.clone(),
        }
    }

    fn variant_order(&self, candidate: &Candidate<'_>) -> Option<VariantOrder> {
        let bits = candidate
            .variants
            .iter()
            .map(|variant| self.variants.bit(variant))
            .collect::<Option<Vec<u16>>>()?;
        Some(VariantOrder::from_bits(bits))
    }

    /// `(layer, family, rule)` of a variant-free utility base.
    fn locate(&self, candidate: &Candidate<'_>) -> Option<(Layer, u32, u32)> {
        let base = candidate.base;

        for (index, family) in CORE_FAMILIES.iter().enumerate() {
            if self.disabled.contains(family.name) {
                continue;
            }
            let matched = family
                .rules
                .iter()
                .position(|rule| rule.matches(base, candidate.negative, &self.theme));
            if let Some(rule) = matched {
                return Some((family.layer, index as u32, rule as u32));
            }
        }

        let offset = CORE_FAMILIES.len();
        for (index, plugin) in self.plugins.iter().enumerate() {
            if let Some(rule) = plugin_rule(plugin, base, candidate.negative) {
                let layer = match plugin.layer {
                    PluginLayer::Components => Layer::Components,
                    PluginLayer::Utilities => Layer::Utilities,
                };
                return Some((layer, (offset + index) as u32, rule));
            }
        }

        (!candidate.negative && is_arbitrary_property(base)).then_some((Layer::Arbitrary, 0, 0))
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self::new(&TailwindConfig::default())
    }
}

impl ClassOrder for DesignSystem {
    fn rank(&self, class: &str) -> Option<SortKey> {
        let candidate = parse_candidate(class, &self.separator, &self.prefix)?;
        let variants = self.variant_order(&candidate)?;
        let (layer, family, rule) = self.locate(&candidate)?;
        Some(SortKey::new(variants, layer, family, rule))
    }
}

fn plugin_rule(plugin: &PluginConfig, base: &str, negative: bool) -> Option<u32> {
    if negative {
        return None;
    }
    if plugin.classes.iter().any(|class| class == base) {
        return Some(0);
    }
    plugin.utilities.iter().enumerate().find_map(|(index, utility)| {
        let value = base
            .strip_prefix(utility.root.as_str())?
            .strip_prefix('-')?;
        let accepted = utility.values.iter().any(|known| known == value) || is_arbitrary(value);
        accepted.then_some(index as u32 + 1)
    })
}

/// `[property:value]` with a CSS-like property name.
fn is_arbitrary_property(base: &str) -> bool {
    let Some(inner) = base.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) else {
        return false;
    };
    let Some((property, value)) = inner.split_once(':') else {
        return false;
    };
    !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
