//! Core utility families in generation order.
//!
//! Each family corresponds to one of the framework's core plugins and lists
//! the rules that recognize its class names. Family position is the primary
//! ordering of variant-free utilities; the rule position breaks ties inside a
//! family (`p-*` before `px-*`).
//!
//! Matching walks families in order and takes the first rule that accepts the
//! utility base, so ambiguous roots (`text-sm` vs `text-red-500`) resolve by
//! value: a family only accepts values from its own scale.

use super::candidate::is_arbitrary;
use super::theme::{Theme, ThemeKey};
use super::Layer;

/// Value domain of a functional rule.
#[derive(Debug, Clone, Copy)]
pub enum Values {
    /// Keys of a theme scale; accepts arbitrary values
    Theme(ThemeKey),
    /// Theme colors with an optional `/opacity` modifier
    Colors,
    /// Theme colors plus fixed keywords
    ColorsOr(&'static [&'static str]),
    /// Fixed keywords that also accept arbitrary values
    Fixed(&'static [&'static str]),
    /// Fixed keywords only
    Keywords(&'static [&'static str]),
}

/// A single way of spelling utilities of a family.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Complete class names, e.g. `block`
    Static(&'static [&'static str]),
    /// `root-value` (and bare `root` when the domain has a `DEFAULT` key)
    Functional {
        root: &'static str,
        values: Values,
        negative: bool,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub name: &'static str,
    pub layer: Layer,
    pub rules: &'static [Rule],
}

/// Coarse type of an arbitrary value, used to pick between families that
/// share a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Color,
    Length,
    Other,
}

const fn f(root: &'static str, values: Values) -> Rule {
    Rule::Functional {
        root,
        values,
        negative: false,
    }
}

const fn neg(root: &'static str, values: Values) -> Rule {
    Rule::Functional {
        root,
        values,
        negative: true,
    }
}

const fn family(name: &'static str, rules: &'static [Rule]) -> Family {
    Family {
        name,
        layer: Layer::Utilities,
        rules,
    }
}

const fn theme(key: ThemeKey) -> Values {
    Values::Theme(key)
}

const POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
    "plus-lighter",
];

const GRID_LINES: &[&str] = &[
    "auto", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
];

const BREAKS: &[&str] = &[
    "auto",
    "avoid",
    "all",
    "avoid-page",
    "page",
    "left",
    "right",
    "column",
];

const BRIGHTNESS: &[&str] = &[
    "0", "50", "75", "90", "95", "100", "105", "110", "125", "150", "200",
];
const CONTRAST: &[&str] = &["0", "50", "75", "100", "125", "150", "200"];
const HUE_ROTATE: &[&str] = &["0", "15", "30", "60", "90", "180"];
const SATURATE: &[&str] = &["0", "50", "100", "150", "200"];
const TOGGLE: &[&str] = &["0", "DEFAULT"];
const OFFSETS: &[&str] = &["0", "1", "2", "4", "8"];

const CURSORS: &[&str] = &[
    "auto",
    "default",
    "pointer",
    "wait",
    "text",
    "move",
    "help",
    "not-allowed",
    "none",
    "context-menu",
    "progress",
    "cell",
    "crosshair",
    "vertical-text",
    "alias",
    "copy",
    "no-drop",
    "grab",
    "grabbing",
    "all-scroll",
    "col-resize",
    "row-resize",
    "n-resize",
    "e-resize",
    "s-resize",
    "w-resize",
    "ne-resize",
    "nw-resize",
    "se-resize",
    "sw-resize",
    "ew-resize",
    "ns-resize",
    "nesw-resize",
    "nwse-resize",
    "zoom-in",
    "zoom-out",
];

/// Core families in the framework's generation order.
pub static CORE_FAMILIES: &[Family] = &[
    Family {
        name: "container",
        layer: Layer::Components,
        rules: &[Rule::Static(&["container"])],
    },
    family("accessibility", &[Rule::Static(&["sr-only", "not-sr-only"])]),
    family(
        "pointerEvents",
        &[Rule::Static(&["pointer-events-none", "pointer-events-auto"])],
    ),
    family("visibility", &[Rule::Static(&["visible", "invisible", "collapse"])]),
    family(
        "position",
        &[Rule::Static(&["static", "fixed", "absolute", "relative", "sticky"])],
    ),
    family(
        "inset",
        &[
            neg("inset", theme(ThemeKey::Inset)),
            neg("inset-x", theme(ThemeKey::Inset)),
            neg("inset-y", theme(ThemeKey::Inset)),
            neg("start", theme(ThemeKey::Inset)),
            neg("end", theme(ThemeKey::Inset)),
            neg("top", theme(ThemeKey::Inset)),
            neg("right", theme(ThemeKey::Inset)),
            neg("bottom", theme(ThemeKey::Inset)),
            neg("left", theme(ThemeKey::Inset)),
        ],
    ),
    family("isolation", &[Rule::Static(&["isolate", "isolation-auto"])]),
    family("zIndex", &[neg("z", theme(ThemeKey::ZIndex))]),
    family("order", &[neg("order", theme(ThemeKey::Order))]),
    family("gridColumn", &[f("col", theme(ThemeKey::GridColumn))]),
    family("gridColumnStart", &[f("col-start", Values::Fixed(GRID_LINES))]),
    family("gridColumnEnd", &[f("col-end", Values::Fixed(GRID_LINES))]),
    family("gridRow", &[f("row", theme(ThemeKey::GridRow))]),
    family("gridRowStart", &[f("row-start", Values::Fixed(GRID_LINES))]),
    family("gridRowEnd", &[f("row-end", Values::Fixed(GRID_LINES))]),
    family(
        "float",
        &[Rule::Static(&[
            "float-start",
            "float-end",
            "float-right",
            "float-left",
            "float-none",
        ])],
    ),
    family(
        "clear",
        &[Rule::Static(&[
            "clear-start",
            "clear-end",
            "clear-left",
            "clear-right",
            "clear-both",
            "clear-none",
        ])],
    ),
    family(
        "margin",
        &[
            neg("m", theme(ThemeKey::Margin)),
            neg("mx", theme(ThemeKey::Margin)),
            neg("my", theme(ThemeKey::Margin)),
            neg("ms", theme(ThemeKey::Margin)),
            neg("me", theme(ThemeKey::Margin)),
            neg("mt", theme(ThemeKey::Margin)),
            neg("mr", theme(ThemeKey::Margin)),
            neg("mb", theme(ThemeKey::Margin)),
            neg("ml", theme(ThemeKey::Margin)),
        ],
    ),
    family("boxSizing", &[Rule::Static(&["box-border", "box-content"])]),
    family(
        "display",
        &[Rule::Static(&[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ])],
    ),
    family("aspectRatio", &[f("aspect", theme(ThemeKey::AspectRatio))]),
    family("height", &[f("h", theme(ThemeKey::Height))]),
    family("maxHeight", &[f("max-h", theme(ThemeKey::MaxHeight))]),
    family("minHeight", &[f("min-h", theme(ThemeKey::MinHeight))]),
    family("width", &[f("w", theme(ThemeKey::Width))]),
    family("minWidth", &[f("min-w", theme(ThemeKey::MinWidth))]),
    family("maxWidth", &[f("max-w", theme(ThemeKey::MaxWidth))]),
    family("flex", &[f("flex", theme(ThemeKey::Flex))]),
    family(
        "flexShrink",
        &[
            f("shrink", theme(ThemeKey::FlexShrink)),
            f("flex-shrink", theme(ThemeKey::FlexShrink)),
        ],
    ),
    family(
        "flexGrow",
        &[
            f("grow", theme(ThemeKey::FlexGrow)),
            f("flex-grow", theme(ThemeKey::FlexGrow)),
        ],
    ),
    family("flexBasis", &[f("basis", theme(ThemeKey::FlexBasis))]),
    family("tableLayout", &[Rule::Static(&["table-auto", "table-fixed"])]),
    family(
        "borderCollapse",
        &[Rule::Static(&["border-collapse", "border-separate"])],
    ),
    family(
        "transformOrigin",
        &[f(
            "origin",
            Values::Fixed(&[
                "center",
                "top",
                "top-right",
                "right",
                "bottom-right",
                "bottom",
                "bottom-left",
                "left",
                "top-left",
            ]),
        )],
    ),
    family(
        "translate",
        &[
            neg("translate-x", theme(ThemeKey::Translate)),
            neg("translate-y", theme(ThemeKey::Translate)),
        ],
    ),
    family("rotate", &[neg("rotate", theme(ThemeKey::Rotate))]),
    family(
        "skew",
        &[
            neg("skew-x", theme(ThemeKey::Skew)),
            neg("skew-y", theme(ThemeKey::Skew)),
        ],
    ),
    family(
        "scale",
        &[
            neg("scale", theme(ThemeKey::Scale)),
            neg("scale-x", theme(ThemeKey::Scale)),
            neg("scale-y", theme(ThemeKey::Scale)),
        ],
    ),
    family(
        "transform",
        &[Rule::Static(&[
            "transform",
            "transform-cpu",
            "transform-gpu",
            "transform-none",
        ])],
    ),
    family("animation", &[f("animate", theme(ThemeKey::Animation))]),
    family("cursor", &[f("cursor", Values::Fixed(CURSORS))]),
    family(
        "touchAction",
        &[Rule::Static(&[
            "touch-auto",
            "touch-none",
            "touch-pan-x",
            "touch-pan-left",
            "touch-pan-right",
            "touch-pan-y",
            "touch-pan-up",
            "touch-pan-down",
            "touch-pinch-zoom",
            "touch-manipulation",
        ])],
    ),
    family(
        "userSelect",
        &[Rule::Static(&[
            "select-none",
            "select-text",
            "select-all",
            "select-auto",
        ])],
    ),
    family(
        "resize",
        &[Rule::Static(&["resize-none", "resize-y", "resize-x", "resize"])],
    ),
    family(
        "scrollSnapType",
        &[Rule::Static(&[
            "snap-none",
            "snap-x",
            "snap-y",
            "snap-both",
            "snap-mandatory",
            "snap-proximity",
        ])],
    ),
    family(
        "scrollSnapAlign",
        &[Rule::Static(&[
            "snap-start",
            "snap-end",
            "snap-center",
            "snap-align-none",
        ])],
    ),
    family("scrollSnapStop", &[Rule::Static(&["snap-normal", "snap-always"])]),
    family(
        "scrollMargin",
        &[
            neg("scroll-m", theme(ThemeKey::ScrollMargin)),
            neg("scroll-mx", theme(ThemeKey::ScrollMargin)),
            neg("scroll-my", theme(ThemeKey::ScrollMargin)),
            neg("scroll-ms", theme(ThemeKey::ScrollMargin)),
            neg("scroll-me", theme(ThemeKey::ScrollMargin)),
            neg("scroll-mt", theme(ThemeKey::ScrollMargin)),
            neg("scroll-mr", theme(ThemeKey::ScrollMargin)),
            neg("scroll-mb", theme(ThemeKey::ScrollMargin)),
            neg("scroll-ml", theme(ThemeKey::ScrollMargin)),
        ],
    ),
    family(
        "scrollPadding",
        &[
            f("scroll-p", theme(ThemeKey::ScrollPadding)),
            f("scroll-px", theme(ThemeKey::ScrollPadding)),
            f("scroll-py", theme(ThemeKey::ScrollPadding)),
            f("scroll-ps", theme(ThemeKey::ScrollPadding)),
            f("scroll-pe", theme(ThemeKey::ScrollPadding)),
            f("scroll-pt", theme(ThemeKey::ScrollPadding)),
            f("scroll-pr", theme(ThemeKey::ScrollPadding)),
            f("scroll-pb", theme(ThemeKey::ScrollPadding)),
            f("scroll-pl", theme(ThemeKey::ScrollPadding)),
        ],
    ),
    family("listStylePosition", &[Rule::Static(&["list-inside", "list-outside"])]),
    family(
        "listStyleType",
        &[f("list", Values::Fixed(&["none", "disc", "decimal"]))],
    ),
    family("appearance", &[Rule::Static(&["appearance-none", "appearance-auto"])]),
    family("columns", &[f("columns", theme(ThemeKey::Columns))]),
    family("breakBefore", &[f("break-before", Values::Keywords(BREAKS))]),
    family(
        "breakInside",
        &[f(
            "break-inside",
            Values::Keywords(&["auto", "avoid", "avoid-page", "avoid-column"]),
        )],
    ),
    family("breakAfter", &[f("break-after", Values::Keywords(BREAKS))]),
    family(
        "gridAutoColumns",
        &[f("auto-cols", Values::Fixed(&["auto", "min", "max", "fr"]))],
    ),
    family(
        "gridAutoFlow",
        &[Rule::Static(&[
            "grid-flow-row",
            "grid-flow-col",
            "grid-flow-dense",
            "grid-flow-row-dense",
            "grid-flow-col-dense",
        ])],
    ),
    family(
        "gridAutoRows",
        &[f("auto-rows", Values::Fixed(&["auto", "min", "max", "fr"]))],
    ),
    family(
        "gridTemplateColumns",
        &[f("grid-cols", theme(ThemeKey::GridTemplateColumns))],
    ),
    family(
        "gridTemplateRows",
        &[f("grid-rows", theme(ThemeKey::GridTemplateRows))],
    ),
    family(
        "flexDirection",
        &[Rule::Static(&[
            "flex-row",
            "flex-row-reverse",
            "flex-col",
            "flex-col-reverse",
        ])],
    ),
    family(
        "flexWrap",
        &[Rule::Static(&["flex-wrap", "flex-wrap-reverse", "flex-nowrap"])],
    ),
    family(
        "placeContent",
        &[f(
            "place-content",
            Values::Keywords(&[
                "center", "start", "end", "between", "around", "evenly", "baseline", "stretch",
            ]),
        )],
    ),
    family(
        "placeItems",
        &[f(
            "place-items",
            Values::Keywords(&["start", "end", "center", "baseline", "stretch"]),
        )],
    ),
    family(
        "alignContent",
        &[f(
            "content",
            Values::Keywords(&[
                "normal", "center", "start", "end", "between", "around", "evenly", "baseline",
                "stretch",
            ]),
        )],
    ),
    family(
        "alignItems",
        &[f(
            "items",
            Values::Keywords(&["start", "end", "center", "baseline", "stretch"]),
        )],
    ),
    family(
        "justifyContent",
        &[f(
            "justify",
            Values::Keywords(&[
                "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
            ]),
        )],
    ),
    family(
        "justifyItems",
        &[f(
            "justify-items",
            Values::Keywords(&["start", "end", "center", "stretch"]),
        )],
    ),
    family(
        "gap",
        &[
            f("gap", theme(ThemeKey::Gap)),
            f("gap-x", theme(ThemeKey::Gap)),
            f("gap-y", theme(ThemeKey::Gap)),
        ],
    ),
    family(
        "space",
        &[
            neg("space-x", theme(ThemeKey::Space)),
            neg("space-y", theme(ThemeKey::Space)),
            Rule::Static(&["space-x-reverse", "space-y-reverse"]),
        ],
    ),
    family(
        "divideWidth",
        &[
            f("divide-x", theme(ThemeKey::BorderWidth)),
            f("divide-y", theme(ThemeKey::BorderWidth)),
            Rule::Static(&["divide-x-reverse", "divide-y-reverse"]),
        ],
    ),
    family(
        "divideStyle",
        &[Rule::Static(&[
            "divide-solid",
            "divide-dashed",
            "divide-dotted",
            "divide-double",
            "divide-none",
        ])],
    ),
    family("divideColor", &[f("divide", Values::Colors)]),
    family("divideOpacity", &[f("divide-opacity", theme(ThemeKey::Opacity))]),
    family(
        "placeSelf",
        &[f(
            "place-self",
            Values::Keywords(&["auto", "start", "end", "center", "stretch"]),
        )],
    ),
    family(
        "alignSelf",
        &[f(
            "self",
            Values::Keywords(&["auto", "start", "end", "center", "stretch", "baseline"]),
        )],
    ),
    family(
        "justifySelf",
        &[f(
            "justify-self",
            Values::Keywords(&["auto", "start", "end", "center", "stretch"]),
        )],
    ),
    family(
        "overflow",
        &[Rule::Static(&[
            "overflow-auto",
            "overflow-hidden",
            "overflow-clip",
            "overflow-visible",
            "overflow-scroll",
            "overflow-x-auto",
            "overflow-y-auto",
            "overflow-x-hidden",
            "overflow-y-hidden",
            "overflow-x-clip",
            "overflow-y-clip",
            "overflow-x-visible",
            "overflow-y-visible",
            "overflow-x-scroll",
            "overflow-y-scroll",
        ])],
    ),
    family(
        "overscrollBehavior",
        &[Rule::Static(&[
            "overscroll-auto",
            "overscroll-contain",
            "overscroll-none",
            "overscroll-y-auto",
            "overscroll-y-contain",
            "overscroll-y-none",
            "overscroll-x-auto",
            "overscroll-x-contain",
            "overscroll-x-none",
        ])],
    ),
    family("scrollBehavior", &[Rule::Static(&["scroll-auto", "scroll-smooth"])]),
    family(
        "textOverflow",
        &[Rule::Static(&[
            "truncate",
            "overflow-ellipsis",
            "text-ellipsis",
            "text-clip",
        ])],
    ),
    family(
        "whitespace",
        &[f(
            "whitespace",
            Values::Keywords(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        )],
    ),
    family(
        "wordBreak",
        &[Rule::Static(&["break-normal", "break-words", "break-all", "break-keep"])],
    ),
    family(
        "borderRadius",
        &[
            f("rounded", theme(ThemeKey::BorderRadius)),
            f("rounded-s", theme(ThemeKey::BorderRadius)),
            f("rounded-e", theme(ThemeKey::BorderRadius)),
            f("rounded-t", theme(ThemeKey::BorderRadius)),
            f("rounded-r", theme(ThemeKey::BorderRadius)),
            f("rounded-b", theme(ThemeKey::BorderRadius)),
            f("rounded-l", theme(ThemeKey::BorderRadius)),
            f("rounded-ss", theme(ThemeKey::BorderRadius)),
            f("rounded-se", theme(ThemeKey::BorderRadius)),
            f("rounded-ee", theme(ThemeKey::BorderRadius)),
            f("rounded-es", theme(ThemeKey::BorderRadius)),
            f("rounded-tl", theme(ThemeKey::BorderRadius)),
            f("rounded-tr", theme(ThemeKey::BorderRadius)),
            f("rounded-br", theme(ThemeKey::BorderRadius)),
            f("rounded-bl", theme(ThemeKey::BorderRadius)),
        ],
    ),
    family(
        "borderWidth",
        &[
            f("border", theme(ThemeKey::BorderWidth)),
            f("border-x", theme(ThemeKey::BorderWidth)),
            f("border-y", theme(ThemeKey::BorderWidth)),
            f("border-s", theme(ThemeKey::BorderWidth)),
            f("border-e", theme(ThemeKey::BorderWidth)),
            f("border-t", theme(ThemeKey::BorderWidth)),
            f("border-r", theme(ThemeKey::BorderWidth)),
            f("border-b", theme(ThemeKey::BorderWidth)),
            f("border-l", theme(ThemeKey::BorderWidth)),
        ],
    ),
    family(
        "borderStyle",
        &[Rule::Static(&[
            "border-solid",
            "border-dashed",
            "border-dotted",
            "border-double",
            "border-hidden",
            "border-none",
        ])],
    ),
    family(
        "borderColor",
        &[
            f("border", Values::Colors),
            f("border-x", Values::Colors),
            f("border-y", Values::Colors),
            f("border-s", Values::Colors),
            f("border-e", Values::Colors),
            f("border-t", Values::Colors),
            f("border-r", Values::Colors),
            f("border-b", Values::Colors),
            f("border-l", Values::Colors),
        ],
    ),
    family("borderOpacity", &[f("border-opacity", theme(ThemeKey::Opacity))]),
    family("backgroundColor", &[f("bg", Values::Colors)]),
    family("backgroundOpacity", &[f("bg-opacity", theme(ThemeKey::Opacity))]),
    family("backgroundImage", &[f("bg", theme(ThemeKey::BackgroundImage))]),
    family(
        "gradientColorStops",
        &[
            f("from", Values::Colors),
            f("via", Values::Colors),
            f("to", Values::Colors),
        ],
    ),
    family(
        "boxDecorationBreak",
        &[Rule::Static(&[
            "decoration-slice",
            "decoration-clone",
            "box-decoration-slice",
            "box-decoration-clone",
        ])],
    ),
    family(
        "backgroundSize",
        &[f("bg", Values::Fixed(&["auto", "cover", "contain"]))],
    ),
    family(
        "backgroundAttachment",
        &[Rule::Static(&["bg-fixed", "bg-local", "bg-scroll"])],
    ),
    family(
        "backgroundClip",
        &[Rule::Static(&[
            "bg-clip-border",
            "bg-clip-padding",
            "bg-clip-content",
            "bg-clip-text",
        ])],
    ),
    family("backgroundPosition", &[f("bg", Values::Fixed(POSITIONS))]),
    family(
        "backgroundRepeat",
        &[Rule::Static(&[
            "bg-repeat",
            "bg-no-repeat",
            "bg-repeat-x",
            "bg-repeat-y",
            "bg-repeat-round",
            "bg-repeat-space",
        ])],
    ),
    family(
        "backgroundOrigin",
        &[Rule::Static(&[
            "bg-origin-border",
            "bg-origin-padding",
            "bg-origin-content",
        ])],
    ),
    family("fill", &[f("fill", Values::ColorsOr(&["none"]))]),
    family("stroke", &[f("stroke", Values::ColorsOr(&["none"]))]),
    family("strokeWidth", &[f("stroke", Values::Fixed(&["0", "1", "2"]))]),
    family(
        "objectFit",
        &[Rule::Static(&[
            "object-contain",
            "object-cover",
            "object-fill",
            "object-none",
            "object-scale-down",
        ])],
    ),
    family("objectPosition", &[f("object", Values::Fixed(POSITIONS))]),
    family(
        "padding",
        &[
            f("p", theme(ThemeKey::Padding)),
            f("px", theme(ThemeKey::Padding)),
            f("py", theme(ThemeKey::Padding)),
            f("ps", theme(ThemeKey::Padding)),
            f("pe", theme(ThemeKey::Padding)),
            f("pt", theme(ThemeKey::Padding)),
            f("pr", theme(ThemeKey::Padding)),
            f("pb", theme(ThemeKey::Padding)),
            f("pl", theme(ThemeKey::Padding)),
        ],
    ),
    family(
        "textAlign",
        &[Rule::Static(&[
            "text-left",
            "text-center",
            "text-right",
            "text-justify",
            "text-start",
            "text-end",
        ])],
    ),
    family("textIndent", &[neg("indent", theme(ThemeKey::TextIndent))]),
    family(
        "verticalAlign",
        &[f(
            "align",
            Values::Fixed(&[
                "baseline",
                "top",
                "middle",
                "bottom",
                "text-top",
                "text-bottom",
                "sub",
                "super",
            ]),
        )],
    ),
    family("fontFamily", &[f("font", theme(ThemeKey::FontFamily))]),
    family("fontSize", &[f("text", theme(ThemeKey::FontSize))]),
    family("fontWeight", &[f("font", theme(ThemeKey::FontWeight))]),
    family(
        "textTransform",
        &[Rule::Static(&["uppercase", "lowercase", "capitalize", "normal-case"])],
    ),
    family("fontStyle", &[Rule::Static(&["italic", "not-italic"])]),
    family(
        "fontVariantNumeric",
        &[Rule::Static(&[
            "normal-nums",
            "ordinal",
            "slashed-zero",
            "lining-nums",
            "oldstyle-nums",
            "proportional-nums",
            "tabular-nums",
            "diagonal-fractions",
            "stacked-fractions",
        ])],
    ),
    family("lineHeight", &[f("leading", theme(ThemeKey::LineHeight))]),
    family("letterSpacing", &[neg("tracking", theme(ThemeKey::LetterSpacing))]),
    family("textColor", &[f("text", Values::Colors)]),
    family("textOpacity", &[f("text-opacity", theme(ThemeKey::Opacity))]),
    family(
        "textDecoration",
        &[Rule::Static(&[
            "underline",
            "overline",
            "line-through",
            "no-underline",
        ])],
    ),
    family("textDecorationColor", &[f("decoration", Values::Colors)]),
    family(
        "textDecorationStyle",
        &[Rule::Static(&[
            "decoration-solid",
            "decoration-double",
            "decoration-dotted",
            "decoration-dashed",
            "decoration-wavy",
        ])],
    ),
    family(
        "textDecorationThickness",
        &[f(
            "decoration",
            Values::Fixed(&["auto", "from-font", "0", "1", "2", "4", "8"]),
        )],
    ),
    family(
        "textUnderlineOffset",
        &[f(
            "underline-offset",
            Values::Fixed(&["auto", "0", "1", "2", "4", "8"]),
        )],
    ),
    family(
        "fontSmoothing",
        &[Rule::Static(&["antialiased", "subpixel-antialiased"])],
    ),
    family("placeholderColor", &[f("placeholder", Values::Colors)]),
    family(
        "placeholderOpacity",
        &[f("placeholder-opacity", theme(ThemeKey::Opacity))],
    ),
    family("caretColor", &[f("caret", Values::Colors)]),
    family("accentColor", &[f("accent", Values::ColorsOr(&["auto"]))]),
    family("opacity", &[f("opacity", theme(ThemeKey::Opacity))]),
    family("backgroundBlendMode", &[f("bg-blend", Values::Keywords(BLEND_MODES))]),
    family("mixBlendMode", &[f("mix-blend", Values::Keywords(BLEND_MODES))]),
    family("boxShadow", &[f("shadow", theme(ThemeKey::BoxShadow))]),
    family("boxShadowColor", &[f("shadow", Values::Colors)]),
    family(
        "outlineStyle",
        &[Rule::Static(&[
            "outline-none",
            "outline",
            "outline-dashed",
            "outline-dotted",
            "outline-double",
        ])],
    ),
    family("outlineWidth", &[f("outline", theme(ThemeKey::OutlineWidth))]),
    family("outlineOffset", &[f("outline-offset", Values::Fixed(OFFSETS))]),
    family("outlineColor", &[f("outline", Values::Colors)]),
    family(
        "ringWidth",
        &[
            f("ring", theme(ThemeKey::RingWidth)),
            Rule::Static(&["ring-inset"]),
        ],
    ),
    family("ringColor", &[f("ring", Values::Colors)]),
    family("ringOpacity", &[f("ring-opacity", theme(ThemeKey::Opacity))]),
    family("ringOffsetWidth", &[f("ring-offset", Values::Fixed(OFFSETS))]),
    family("ringOffsetColor", &[f("ring-offset", Values::Colors)]),
    family("blur", &[f("blur", theme(ThemeKey::Blur))]),
    family("brightness", &[f("brightness", Values::Fixed(BRIGHTNESS))]),
    family("contrast", &[f("contrast", Values::Fixed(CONTRAST))]),
    family("dropShadow", &[f("drop-shadow", theme(ThemeKey::DropShadow))]),
    family("grayscale", &[f("grayscale", Values::Fixed(TOGGLE))]),
    family("hueRotate", &[neg("hue-rotate", Values::Fixed(HUE_ROTATE))]),
    family("invert", &[f("invert", Values::Fixed(TOGGLE))]),
    family("saturate", &[f("saturate", Values::Fixed(SATURATE))]),
    family("sepia", &[f("sepia", Values::Fixed(TOGGLE))]),
    family("filter", &[Rule::Static(&["filter", "filter-none"])]),
    family("backdropBlur", &[f("backdrop-blur", theme(ThemeKey::Blur))]),
    family(
        "backdropBrightness",
        &[f("backdrop-brightness", Values::Fixed(BRIGHTNESS))],
    ),
    family(
        "backdropContrast",
        &[f("backdrop-contrast", Values::Fixed(CONTRAST))],
    ),
    family(
        "backdropGrayscale",
        &[f("backdrop-grayscale", Values::Fixed(TOGGLE))],
    ),
    family(
        "backdropHueRotate",
        &[neg("backdrop-hue-rotate", Values::Fixed(HUE_ROTATE))],
    ),
    family("backdropInvert", &[f("backdrop-invert", Values::Fixed(TOGGLE))]),
    family(
        "backdropOpacity",
        &[f("backdrop-opacity", theme(ThemeKey::Opacity))],
    ),
    family(
        "backdropSaturate",
        &[f("backdrop-saturate", Values::Fixed(SATURATE))],
    ),
    family("backdropSepia", &[f("backdrop-sepia", Values::Fixed(TOGGLE))]),
    family(
        "backdropFilter",
        &[Rule::Static(&["backdrop-filter", "backdrop-filter-none"])],
    ),
    family(
        "transitionProperty",
        &[f("transition", theme(ThemeKey::TransitionProperty))],
    ),
    family("transitionDelay", &[f("delay", theme(ThemeKey::TransitionDelay))]),
    family(
        "transitionDuration",
        &[f("duration", theme(ThemeKey::TransitionDuration))],
    ),
    family(
        "transitionTimingFunction",
        &[f("ease", theme(ThemeKey::TransitionTimingFunction))],
    ),
    family(
        "willChange",
        &[f(
            "will-change",
            Values::Fixed(&["auto", "scroll", "contents", "transform"]),
        )],
    ),
    family("content", &[f("content", Values::Fixed(&["none"]))]),
];

impl Rule {
    /// Whether this rule produces `base` (already stripped of variants,
    /// important marker, negation and prefix).
    pub fn matches(&self, base: &str, negative: bool, theme: &Theme) -> bool {
        match *self {
            Rule::Static(names) => !negative && names.contains(&base),
            Rule::Functional {
                root,
                values,
                negative: allows_negative,
            } => {
                if negative && !allows_negative {
                    return false;
                }
                if base == root {
                    return values.accepts("DEFAULT", theme);
                }
                base.strip_prefix(root)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|value| !value.is_empty() && values.accepts(value, theme))
            }
        }
    }
}

impl Values {
    fn accepts(&self, value: &str, theme: &Theme) -> bool {
        match *self {
            Values::Theme(key) => {
                theme.contains(key, value) || accepts_arbitrary(value, |kind| kind_fits_scale(key, kind))
            }
            Values::Colors => accepts_color(value, theme, &[]),
            Values::ColorsOr(extra) => accepts_color(value, theme, extra),
            Values::Fixed(keywords) => {
                keywords.contains(&value) || accepts_arbitrary(value, |kind| kind != ValueKind::Color)
            }
            Values::Keywords(keywords) => keywords.contains(&value),
        }
    }
}

fn kind_fits_scale(key: ThemeKey, kind: ValueKind) -> bool {
    match key {
        ThemeKey::FontFamily => kind == ValueKind::Other,
        _ => kind != ValueKind::Color,
    }
}

fn accepts_color(value: &str, theme: &Theme, extra: &[&str]) -> bool {
    if extra.contains(&value) {
        return true;
    }
    let color = strip_opacity_modifier(value);
    theme.has_color(color) || accepts_arbitrary(color, |kind| kind == ValueKind::Color)
}

/// Drop a trailing `/50` or `/[.35]` opacity modifier outside brackets.
fn strip_opacity_modifier(value: &str) -> &str {
    let mut depth = 0usize;
    let mut cut = None;
    for (index, ch) in value.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => cut = Some(index),
            _ => {}
        }
    }
    match cut {
        Some(index) if index > 0 && index + 1 < value.len() => &value[..index],
        _ => value,
    }
}

fn accepts_arbitrary(value: &str, fits: impl Fn(ValueKind) -> bool) -> bool {
    is_arbitrary(value) && fits(guess_kind(&value[1..value.len() - 1]))
}

fn guess_kind(inner: &str) -> ValueKind {
    if let Some((hint, _)) = inner.split_once(':') {
        match hint {
            "color" => return ValueKind::Color,
            "length" | "size" | "number" | "percentage" => return ValueKind::Length,
            _ => {}
        }
    }
    const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "oklch(", "lab("];
    if inner.starts_with('#') || COLOR_FUNCTIONS.iter().any(|func| inner.starts_with(func)) {
        return ValueKind::Color;
    }
    const LENGTH_FUNCTIONS: &[&str] = &["calc(", "var(", "min(", "max(", "clamp("];
    let starts_numeric = inner
        .trim_start_matches('-')
        .starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if starts_numeric || LENGTH_FUNCTIONS.iter().any(|func| inner.starts_with(func)) {
        return ValueKind::Length;
    }
    ValueKind::Other
}
