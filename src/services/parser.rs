// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Thin adapter over the tree-sitter Python grammar.
//!
//! Everything tree-shaped in this crate goes through here: parsing, validity
//! checks, error message synthesis, tree walking, and the byte-range edit
//! engine the tree-aware transforms use instead of an unparser.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{Error, Result};

fn python() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Parse `source` as a full Python module. The returned tree may contain
/// error nodes; use [`parse_valid`] when validity is required.
pub fn parse(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&python())
        .map_err(|e| Error::Parse {
            message: format!("grammar load failed: {e}"),
        })?;
    parser.parse(source, None).ok_or_else(|| Error::Parse {
        message: "parser produced no tree".into(),
    })
}

/// Parse and require a tree without error or missing nodes.
pub fn parse_valid(source: &str) -> Result<Tree> {
    let tree = parse(source)?;
    if tree.root_node().has_error() {
        let message = syntax_error(&tree, source)
            .unwrap_or_else(|| "invalid syntax".to_string());
        return Err(Error::Parse { message });
    }
    Ok(tree)
}

pub fn is_valid(source: &str) -> bool {
    parse(source).is_ok_and(|tree| !tree.root_node().has_error())
}

/// Synthesize a message for the first error in the tree, if any.
pub fn syntax_error(tree: &Tree, source: &str) -> Option<String> {
    let mut found: Option<String> = None;
    for_each_node(tree.root_node(), &mut |node| {
        if found.is_some() {
            return;
        }
        if node.is_missing() {
            let pos = node.start_position();
            found = Some(format!(
                "missing {} at line {}, column {}",
                node.kind(),
                pos.row + 1,
                pos.column + 1
            ));
        } else if node.is_error() {
            let pos = node.start_position();
            let snippet: String = node
                .utf8_text(source.as_bytes())
                .unwrap_or_default()
                .chars()
                .take(20)
                .collect();
            found = Some(if snippet.trim().is_empty() {
                format!("invalid syntax at line {}, column {}", pos.row + 1, pos.column + 1)
            } else {
                format!(
                    "invalid syntax near '{}' at line {}, column {}",
                    snippet.trim(),
                    pos.row + 1,
                    pos.column + 1
                )
            });
        }
    });
    found
}

/// Preorder walk over every node in the subtree rooted at `node`.
pub fn for_each_node<'t>(node: Node<'t>, f: &mut impl FnMut(Node<'t>)) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        for_each_node(child, f);
    }
}

/// A byte-range replacement against the original source.
#[derive(Debug, Clone)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Apply non-overlapping edits. Ranges are in original-source coordinates;
/// application order is back to front so earlier ranges stay stable.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by(|a, b| b.start.cmp(&a.start));
    let mut out = source.to_string();
    for edit in edits {
        out.replace_range(edit.start..edit.end, &edit.replacement);
    }
    out
}

/// Byte offset of the start of the line containing `byte`.
pub fn line_start(source: &str, byte: usize) -> usize {
    source[..byte].rfind('\n').map_or(0, |i| i + 1)
}

/// Byte offset of the end of the line containing `byte` (exclusive of the
/// newline itself).
pub fn line_end(source: &str, byte: usize) -> usize {
    source[byte..].find('\n').map_or(source.len(), |i| byte + i)
}
