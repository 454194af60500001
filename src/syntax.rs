//! Tree-sitter parsing of a source file into the tree extractors walk.

use crate::dispatch::{LanguageFamily, ParserId, ScriptDialect};
use crate::errors::{Error, Result};
use tree_sitter::{Language, Node, Parser, Tree};

/// Tree-sitter grammar backing a language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Html,
    JavaScript,
    Tsx,
    Css,
}

impl Grammar {
    pub fn for_family(family: LanguageFamily) -> Self {
        match family {
            LanguageFamily::Markup(_) => Self::Html,
            LanguageFamily::Script(ScriptDialect::JavaScript) => Self::JavaScript,
            LanguageFamily::Script(ScriptDialect::TypeScript) => Self::Tsx,
            LanguageFamily::Stylesheet => Self::Css,
        }
    }

    fn language(self) -> Language {
        match self {
            Self::Html => tree_sitter_html::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Css => tree_sitter_css::LANGUAGE.into(),
        }
    }
}

/// A parsed source, borrowing the text it was parsed from.
pub struct SourceTree<'s> {
    pub tree: Tree,
    pub source: &'s str,
    pub parser: ParserId,
}

impl<'s> SourceTree<'s> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self, node: &Node<'_>) -> &'s str {
        node_text(node, self.source)
    }
}

impl std::fmt::Debug for SourceTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTree")
            .field("parser", &self.parser)
            .field("len", &self.source.len())
            .finish()
    }
}

fn parse_with(grammar: Grammar, source: &str, name: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar.language())
        .map_err(|e| Error::parse(name, e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(name, "parser produced no tree"))
}

/// Parse `source` with the grammar of `parser`'s language family.
pub fn parse(source: &str, parser: ParserId) -> Result<SourceTree<'_>> {
    let grammar = Grammar::for_family(parser.family());
    let tree = parse_with(grammar, source, parser.name())?;
    Ok(SourceTree {
        tree,
        source,
        parser,
    })
}

/// Parse a standalone script expression (a directive binding value).
pub fn parse_expression(expression: &str) -> Result<Tree> {
    parse_with(Grammar::JavaScript, expression, "expression")
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node<'_>, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Visit every node below and including `root` in document order.
pub fn for_each_node<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == root {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
