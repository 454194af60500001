//! Parser identities and the per-language extraction table.
//!
//! `ParserId::from_name` is the only place a parser name string is
//! interpreted. Everything downstream matches exhaustively on
//! [`LanguageFamily`], so adding a dialect is a compile-time checked change.

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserId {
    Html,
    Lwc,
    Vue,
    Angular,
    Babel,
    Flow,
    BabelFlow,
    Espree,
    Meriyah,
    Acorn,
    Typescript,
    BabelTs,
    Css,
    Scss,
    Less,
    Postcss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupDialect {
    Html,
    Vue,
    Angular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptDialect {
    JavaScript,
    TypeScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    Markup(MarkupDialect),
    Script(ScriptDialect),
    Stylesheet,
}

/// Extractors a language runs, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Plain `class="..."` attribute values
    MarkupAttribute,
    /// Framework bindings whose value is a script expression
    DirectiveBinding,
    /// `class` / `className` attributes in JSX
    JsxAttribute,
    /// Parameters of class-bearing at-rules
    AtRuleParams,
}

/// What to look for in one language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub extractors: &'static [Extractor],
    pub attributes: &'static [&'static str],
    pub bindings: &'static [&'static str],
    pub at_rules: &'static [&'static str],
}

const HTML_PROFILE: LanguageProfile = LanguageProfile {
    extractors: &[Extractor::MarkupAttribute],
    attributes: &["class"],
    bindings: &[],
    at_rules: &[],
};

const VUE_PROFILE: LanguageProfile = LanguageProfile {
    extractors: &[Extractor::MarkupAttribute, Extractor::DirectiveBinding],
    attributes: &["class"],
    bindings: &[":class", "v-bind:class"],
    at_rules: &[],
};

const ANGULAR_PROFILE: LanguageProfile = LanguageProfile {
    extractors: &[Extractor::MarkupAttribute, Extractor::DirectiveBinding],
    attributes: &["class"],
    bindings: &["[ngClass]", "[class]"],
    at_rules: &[],
};

const SCRIPT_PROFILE: LanguageProfile = LanguageProfile {
    extractors: &[Extractor::JsxAttribute],
    attributes: &["class", "className"],
    bindings: &[],
    at_rules: &[],
};

const STYLESHEET_PROFILE: LanguageProfile = LanguageProfile {
    extractors: &[Extractor::AtRuleParams],
    attributes: &[],
    bindings: &[],
    at_rules: &["@apply"],
};

impl LanguageFamily {
    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::Markup(MarkupDialect::Html) => &HTML_PROFILE,
            Self::Markup(MarkupDialect::Vue) => &VUE_PROFILE,
            Self::Markup(MarkupDialect::Angular) => &ANGULAR_PROFILE,
            Self::Script(_) => &SCRIPT_PROFILE,
            Self::Stylesheet => &STYLESHEET_PROFILE,
        }
    }
}

impl ParserId {
    pub const ALL: &'static [ParserId] = &[
        Self::Html,
        Self::Lwc,
        Self::Vue,
        Self::Angular,
        Self::Babel,
        Self::Flow,
        Self::BabelFlow,
        Self::Espree,
        Self::Meriyah,
        Self::Acorn,
        Self::Typescript,
        Self::BabelTs,
        Self::Css,
        Self::Scss,
        Self::Less,
        Self::Postcss,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Lwc => "lwc",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Babel => "babel",
            Self::Flow => "flow",
            Self::BabelFlow => "babel-flow",
            Self::Espree => "espree",
            Self::Meriyah => "meriyah",
            Self::Acorn => "acorn",
            Self::Typescript => "typescript",
            Self::BabelTs => "babel-ts",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Postcss => "postcss",
        }
    }

    /// Look up a parser by name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Parser for a file, judged by its extension.
    pub fn infer_from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Self::Html),
            "vue" => Some(Self::Vue),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::Babel),
            "ts" | "tsx" | "mts" | "cts" => Some(Self::Typescript),
            "css" => Some(Self::Css),
            "scss" => Some(Self::Scss),
            "less" => Some(Self::Less),
            "pcss" | "postcss" => Some(Self::Postcss),
            _ => None,
        }
    }

    pub fn family(self) -> LanguageFamily {
        match self {
            Self::Html | Self::Lwc => LanguageFamily::Markup(MarkupDialect::Html),
            Self::Vue => LanguageFamily::Markup(MarkupDialect::Vue),
            Self::Angular => LanguageFamily::Markup(MarkupDialect::Angular),
            Self::Babel
            | Self::Flow
            | Self::BabelFlow
            | Self::Espree
            | Self::Meriyah
            | Self::Acorn => LanguageFamily::Script(ScriptDialect::JavaScript),
            Self::Typescript | Self::BabelTs => LanguageFamily::Script(ScriptDialect::TypeScript),
            Self::Css | Self::Scss | Self::Less | Self::Postcss => LanguageFamily::Stylesheet,
        }
    }

    pub fn profile(self) -> &'static LanguageProfile {
        self.family().profile()
    }
}

impl fmt::Display for ParserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
