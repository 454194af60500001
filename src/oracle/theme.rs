//! Theme scales used to recognize functional utilities.
//!
//! Only the *keys* of a scale matter for ordering: `p-4` is a utility because
//! `4` is a key of the padding scale, whatever length it maps to. A
//! configuration's `theme.<key>` replaces a default scale and
//! `theme.extend.<key>` adds keys to it. Scales derived from spacing (margin,
//! padding, width, ...) are rebuilt from the final spacing scale, so extending
//! `spacing` extends all of them.

use crate::config::ThemeConfig;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;

const SPACING: &[&str] = &[
    "0", "px", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60",
    "64", "72", "80", "96",
];

const QUARTERS: &[&str] = &["1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "full"];

const WIDTH_EXTRA: &[&str] = &[
    "auto", "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5", "1/6", "2/6",
    "3/6", "4/6", "5/6", "1/12", "2/12", "3/12", "4/12", "5/12", "6/12", "7/12", "8/12", "9/12",
    "10/12", "11/12", "full", "screen", "svw", "lvw", "dvw", "min", "max", "fit",
];

const HEIGHT_EXTRA: &[&str] = &[
    "auto", "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5", "1/6", "2/6",
    "3/6", "4/6", "5/6", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit",
];

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const FLAT_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

static DEFAULT_COLORS: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut colors: HashSet<String> = FLAT_COLORS.iter().map(|c| c.to_string()).collect();
    for name in PALETTE {
        for shade in SHADES {
            colors.insert(format!("{name}-{shade}"));
        }
    }
    colors
});

/// Extensible theme scales.
///
/// Names follow the framework's camel-cased theme keys so configuration files
/// can address them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    Spacing,
    Inset,
    Margin,
    Padding,
    Gap,
    Space,
    Translate,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    FlexBasis,
    TextIndent,
    ScrollMargin,
    ScrollPadding,
    FontSize,
    FontWeight,
    FontFamily,
    LineHeight,
    LetterSpacing,
    BorderRadius,
    BorderWidth,
    Opacity,
    ZIndex,
    BoxShadow,
    Order,
    GridTemplateColumns,
    GridTemplateRows,
    GridColumn,
    GridRow,
    Columns,
    Rotate,
    Scale,
    Skew,
    TransitionDuration,
    TransitionDelay,
    TransitionTimingFunction,
    TransitionProperty,
    Animation,
    Blur,
    DropShadow,
    BackgroundImage,
    AspectRatio,
    Flex,
    FlexGrow,
    FlexShrink,
    OutlineWidth,
    RingWidth,
}

impl ThemeKey {
    pub const ALL: &'static [ThemeKey] = &[
        Self::Spacing,
        Self::Inset,
        Self::Margin,
        Self::Padding,
        Self::Gap,
        Self::Space,
        Self::Translate,
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MaxWidth,
        Self::MinHeight,
        Self::MaxHeight,
        Self::FlexBasis,
        Self::TextIndent,
        Self::ScrollMargin,
        Self::ScrollPadding,
        Self::FontSize,
        Self::FontWeight,
        Self::FontFamily,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::BorderRadius,
        Self::BorderWidth,
        Self::Opacity,
        Self::ZIndex,
        Self::BoxShadow,
        Self::Order,
        Self::GridTemplateColumns,
        Self::GridTemplateRows,
        Self::GridColumn,
        Self::GridRow,
        Self::Columns,
        Self::Rotate,
        Self::Scale,
        Self::Skew,
        Self::TransitionDuration,
        Self::TransitionDelay,
        Self::TransitionTimingFunction,
        Self::TransitionProperty,
        Self::Animation,
        Self::Blur,
        Self::DropShadow,
        Self::BackgroundImage,
        Self::AspectRatio,
        Self::Flex,
        Self::FlexGrow,
        Self::FlexShrink,
        Self::OutlineWidth,
        Self::RingWidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spacing => "spacing",
            Self::Inset => "inset",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Gap => "gap",
            Self::Space => "space",
            Self::Translate => "translate",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "minWidth",
            Self::MaxWidth => "maxWidth",
            Self::MinHeight => "minHeight",
            Self::MaxHeight => "maxHeight",
            Self::FlexBasis => "flexBasis",
            Self::TextIndent => "textIndent",
            Self::ScrollMargin => "scrollMargin",
            Self::ScrollPadding => "scrollPadding",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::FontFamily => "fontFamily",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::BorderRadius => "borderRadius",
            Self::BorderWidth => "borderWidth",
            Self::Opacity => "opacity",
            Self::ZIndex => "zIndex",
            Self::BoxShadow => "boxShadow",
            Self::Order => "order",
            Self::GridTemplateColumns => "gridTemplateColumns",
            Self::GridTemplateRows => "gridTemplateRows",
            Self::GridColumn => "gridColumn",
            Self::GridRow => "gridRow",
            Self::Columns => "columns",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Skew => "skew",
            Self::TransitionDuration => "transitionDuration",
            Self::TransitionDelay => "transitionDelay",
            Self::TransitionTimingFunction => "transitionTimingFunction",
            Self::TransitionProperty => "transitionProperty",
            Self::Animation => "animation",
            Self::Blur => "blur",
            Self::DropShadow => "dropShadow",
            Self::BackgroundImage => "backgroundImage",
            Self::AspectRatio => "aspectRatio",
            Self::Flex => "flex",
            Self::FlexGrow => "flexGrow",
            Self::FlexShrink => "flexShrink",
            Self::OutlineWidth => "outlineWidth",
            Self::RingWidth => "ringWidth",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    /// Scales whose default keys start from the spacing scale.
    fn inherits_spacing(self) -> bool {
        matches!(
            self,
            Self::Inset
                | Self::Margin
                | Self::Padding
                | Self::Gap
                | Self::Space
                | Self::Translate
                | Self::Width
                | Self::Height
                | Self::MaxHeight
                | Self::FlexBasis
                | Self::TextIndent
                | Self::ScrollMargin
                | Self::ScrollPadding
        )
    }

    /// Default keys on top of any inherited spacing keys.
    fn own_defaults(self) -> &'static [&'static str] {
        match self {
            Self::Spacing => SPACING,
            Self::Inset | Self::Translate => QUARTERS,
            Self::Margin => &["auto"],
            Self::Width => WIDTH_EXTRA,
            Self::Height => HEIGHT_EXTRA,
            Self::FlexBasis => &[
                "auto", "1/2", "1/3", "2/3", "1/4", "2/4", "3/4", "1/5", "2/5", "3/5", "4/5",
                "1/6", "5/6", "1/12", "5/12", "7/12", "11/12", "full",
            ],
            Self::MaxHeight => &["none", "full", "screen", "min", "max", "fit"],
            Self::Padding
            | Self::Gap
            | Self::Space
            | Self::TextIndent
            | Self::ScrollMargin
            | Self::ScrollPadding => &[],
            Self::MinWidth => &["0", "full", "min", "max", "fit"],
            Self::MaxWidth => &[
                "0", "none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
                "7xl", "full", "min", "max", "fit", "prose", "screen-sm", "screen-md",
                "screen-lg", "screen-xl", "screen-2xl",
            ],
            Self::MinHeight => &["0", "full", "screen", "min", "max", "fit"],
            Self::FontSize => &[
                "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
                "9xl",
            ],
            Self::FontWeight => &[
                "thin",
                "extralight",
                "light",
                "normal",
                "medium",
                "semibold",
                "bold",
                "extrabold",
                "black",
            ],
            Self::FontFamily => &["sans", "serif", "mono"],
            Self::LineHeight => &[
                "3", "4", "5", "6", "7", "8", "9", "10", "none", "tight", "snug", "normal",
                "relaxed", "loose",
            ],
            Self::LetterSpacing => &["tighter", "tight", "normal", "wide", "wider", "widest"],
            Self::BorderRadius => &[
                "none", "sm", "DEFAULT", "md", "lg", "xl", "2xl", "3xl", "full",
            ],
            Self::BorderWidth => &["DEFAULT", "0", "2", "4", "8"],
            Self::Opacity => &[
                "0", "5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55", "60", "65",
                "70", "75", "80", "85", "90", "95", "100",
            ],
            Self::ZIndex => &["0", "10", "20", "30", "40", "50", "auto"],
            Self::BoxShadow => &["sm", "DEFAULT", "md", "lg", "xl", "2xl", "inner", "none"],
            Self::Order => &[
                "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "first", "last",
                "none",
            ],
            Self::GridTemplateColumns => &[
                "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "none", "subgrid",
            ],
            Self::GridTemplateRows => &[
                "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "none", "subgrid",
            ],
            Self::GridColumn => &[
                "auto", "span-1", "span-2", "span-3", "span-4", "span-5", "span-6", "span-7",
                "span-8", "span-9", "span-10", "span-11", "span-12", "span-full",
            ],
            Self::GridRow => &[
                "auto", "span-1", "span-2", "span-3", "span-4", "span-5", "span-6", "span-7",
                "span-8", "span-9", "span-10", "span-11", "span-12", "span-full",
            ],
            Self::Columns => &[
                "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "auto", "3xs",
                "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
            ],
            Self::Rotate => &["0", "1", "2", "3", "6", "12", "45", "90", "180"],
            Self::Scale => &["0", "50", "75", "90", "95", "100", "105", "110", "125", "150"],
            Self::Skew => &["0", "1", "2", "3", "6", "12"],
            Self::TransitionDuration | Self::TransitionDelay => {
                &["0", "75", "100", "150", "200", "300", "500", "700", "1000"]
            }
            Self::TransitionTimingFunction => &["DEFAULT", "linear", "in", "out", "in-out"],
            Self::TransitionProperty => &[
                "none", "all", "DEFAULT", "colors", "opacity", "shadow", "transform",
            ],
            Self::Animation => &["none", "spin", "ping", "pulse", "bounce"],
            Self::Blur => &["0", "none", "sm", "DEFAULT", "md", "lg", "xl", "2xl", "3xl"],
            Self::DropShadow => &["sm", "DEFAULT", "md", "lg", "xl", "2xl", "none"],
            Self::BackgroundImage => &[
                "none",
                "gradient-to-t",
                "gradient-to-tr",
                "gradient-to-r",
                "gradient-to-br",
                "gradient-to-b",
                "gradient-to-bl",
                "gradient-to-l",
                "gradient-to-tl",
            ],
            Self::AspectRatio => &["auto", "square", "video"],
            Self::Flex => &["1", "auto", "initial", "none"],
            Self::FlexGrow | Self::FlexShrink => &["0", "DEFAULT"],
            Self::OutlineWidth => &["0", "1", "2", "4", "8"],
            Self::RingWidth => &["DEFAULT", "0", "1", "2", "4", "8"],
        }
    }
}

/// Resolved theme: the key set of every scale plus the color names.
#[derive(Debug, Clone)]
pub struct Theme {
    scales: HashMap<ThemeKey, HashSet<String>>,
    colors: HashSet<String>,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        warn_unknown_keys(config);

        let spacing = resolve_scale(ThemeKey::Spacing, config, &[]);
        let spacing_keys: Vec<String> = spacing.iter().cloned().collect();

        let mut scales = HashMap::with_capacity(ThemeKey::ALL.len());
        for &key in ThemeKey::ALL {
            let scale = if key == ThemeKey::Spacing {
                spacing.clone()
            } else if key.inherits_spacing() {
                resolve_scale(key, config, &spacing_keys)
            } else {
                resolve_scale(key, config, &[])
            };
            scales.insert(key, scale);
        }

        let mut colors: HashSet<String> = match config.scales.get("colors") {
            Some(value) => color_names(value).into_iter().collect(),
            None => default_colors(),
        };
        if let Some(value) = config.extend.get("colors") {
            colors.extend(color_names(value));
        }

        Self { scales, colors }
    }

    pub fn contains(&self, key: ThemeKey, value: &str) -> bool {
        self.scales
            .get(&key)
            .is_some_and(|scale| scale.contains(value))
    }

    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains(name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn resolve_scale(key: ThemeKey, config: &ThemeConfig, inherited: &[String]) -> HashSet<String> {
    let mut scale: HashSet<String> = match config.scales.get(key.name()) {
        Some(value) => scale_keys(value).into_iter().collect(),
        None => inherited
            .iter()
            .cloned()
            .chain(key.own_defaults().iter().map(|value| value.to_string()))
            .collect(),
    };
    if let Some(value) = config.extend.get(key.name()) {
        scale.extend(scale_keys(value));
    }
    scale
}

/// Keys of a scale value: object keys, or the entries of a list of names.
pub(crate) fn scale_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Flatten a color object: nested shades become `name-shade`, `DEFAULT`
/// becomes the bare name.
pub(crate) fn color_names(value: &Value) -> Vec<String> {
    let Value::Object(map) = value else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for (name, entry) in map {
        match entry {
            Value::Object(shades) => {
                for shade in shades.keys() {
                    if shade == "DEFAULT" {
                        names.push(name.clone());
                    } else {
                        names.push(format!("{name}-{shade}"));
                    }
                }
            }
            _ => names.push(name.clone()),
        }
    }
    names
}

fn default_colors() -> HashSet<String> {
    DEFAULT_COLORS.clone()
}

fn warn_unknown_keys(config: &ThemeConfig) {
    let known = |name: &str| {
        name == "colors" || name == "screens" || ThemeKey::from_name(name).is_some()
    };
    for name in config.scales.keys().chain(config.extend.keys()) {
        if !known(name) {
            debug!("Ignoring theme key without sortable utilities: {}", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn theme_config(scales: Value, extend: Value) -> ThemeConfig {
        let to_map = |value: Value| -> BTreeMap<String, Value> {
            serde_json::from_value(value).unwrap()
        };
        ThemeConfig {
            scales: to_map(scales),
            extend: to_map(extend),
        }
    }

    #[test]
    fn test_default_theme_has_core_scales() {
        let theme = Theme::default();
        assert!(theme.contains(ThemeKey::Padding, "4"));
        assert!(theme.contains(ThemeKey::Margin, "auto"));
        assert!(theme.contains(ThemeKey::Width, "1/2"));
        assert!(theme.contains(ThemeKey::FontSize, "sm"));
        assert!(!theme.contains(ThemeKey::FontSize, "potato"));
        assert!(theme.has_color("red-500"));
        assert!(theme.has_color("white"));
        assert!(!theme.has_color("tomato"));
    }

    #[test]
    fn test_extending_spacing_reaches_derived_scales() {
        let theme = Theme::from_config(&theme_config(json!({}), json!({ "spacing": { "128": "32rem" } })));
        assert!(theme.contains(ThemeKey::Spacing, "128"));
        assert!(theme.contains(ThemeKey::Padding, "128"));
        assert!(theme.contains(ThemeKey::Width, "128"));
        assert!(theme.contains(ThemeKey::Width, "full"));
    }

    #[test]
    fn test_overriding_a_scale_replaces_defaults() {
        let theme = Theme::from_config(&theme_config(json!({ "fontSize": { "tiny": "8px" } }), json!({})));
        assert!(theme.contains(ThemeKey::FontSize, "tiny"));
        assert!(!theme.contains(ThemeKey::FontSize, "sm"));
    }

    #[test]
    fn test_color_extension_flattens_shades() {
        let theme = Theme::from_config(&theme_config(
            json!({}),
            json!({ "colors": { "tomato": "tomato", "brand": { "DEFAULT": "#123", "500": "#456" } } }),
        ));
        assert!(theme.has_color("tomato"));
        assert!(theme.has_color("brand"));
        assert!(theme.has_color("brand-500"));
        assert!(theme.has_color("red-500"));
    }

    #[test]
    fn test_color_override_drops_palette() {
        let theme = Theme::from_config(&theme_config(json!({ "colors": { "ink": "#000" } }), json!({})));
        assert!(theme.has_color("ink"));
        assert!(!theme.has_color("red-500"));
    }

    #[test]
    fn test_theme_key_names_round_trip() {
        for &key in ThemeKey::ALL {
            assert_eq!(ThemeKey::from_name(key.name()), Some(key));
        }
    }
}
