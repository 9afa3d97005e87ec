// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Error-handling scaffolding injection.
//!
//! The whole-program variants are textual: indent every line one level and
//! append handler boilerplate. The per-function variant is tree-aware and
//! rewrites each function body into a single try/except reporting the
//! function's name.

use tree_sitter::Node;

use crate::error::{Error, Result};
use crate::services::parser;
use crate::services::strip;

const INDENT: &str = "    ";

/// How the injected handler reports the intercepted exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerStyle {
    /// `print(f"Error: {e}")`
    Print,
    /// `traceback.print_exc()`
    Traceback,
    /// `logging.getLogger(__name__).exception(...)`
    Logging,
}

impl HandlerStyle {
    fn handler_lines(&self) -> &'static [&'static str] {
        match self {
            Self::Print => &["except Exception as e:", "    print(f\"Error: {e}\")"],
            Self::Traceback => &[
                "except Exception:",
                "    import traceback",
                "    traceback.print_exc()",
            ],
            Self::Logging => &[
                "except Exception:",
                "    import logging",
                "    logging.getLogger(__name__).exception(\"Unhandled error\")",
            ],
        }
    }
}

/// Wrap the entire program in one try/except block.
pub fn wrap_program(source: &str, style: HandlerStyle) -> String {
    let mut out = String::with_capacity(source.len() + 128);
    out.push_str("try:\n");
    for line in source.lines() {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }
    for line in style.handler_lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Replace each function body with a try/except wrapping the original body,
/// naming the function in the handler message. Nested functions are wrapped
/// innermost-first so every level gets its own handler.
pub fn wrap_per_function(source: &str) -> Result<String> {
    let tree = parser::parse_valid(source)?;

    let mut out = String::with_capacity(source.len() + 256);
    let mut pos = 0usize;
    emit(tree.root_node(), source, &mut out, &mut pos);
    out.push_str(&source[pos..]);

    if !parser::is_valid(&out) {
        return Err(Error::Operation {
            message: "per-function wrapping produced unparseable output".into(),
        });
    }
    Ok(out)
}

/// Copy source verbatim, replacing every function body encountered. `pos`
/// tracks how far the original text has been consumed.
fn emit(node: Node<'_>, source: &str, out: &mut String, pos: &mut usize) {
    if node.kind() == "function_definition" {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .unwrap_or("function");
        if let Some(body) = node.child_by_field_name("body") {
            // Transform nested functions first, into a scratch buffer.
            let mut inner = String::new();
            let mut inner_pos = body.start_byte();
            let mut cursor = body.walk();
            for child in body.children(&mut cursor) {
                emit(child, source, &mut inner, &mut inner_pos);
            }
            inner.push_str(&source[inner_pos..body.end_byte()]);

            out.push_str(&source[*pos..body.start_byte()]);
            out.push_str(&wrap_body(source, node, body, name, &inner));
            *pos = body.end_byte();
            return;
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        emit(child, source, out, pos);
    }
}

/// Build the replacement text for one function body range.
fn wrap_body(source: &str, func: Node<'_>, body: Node<'_>, name: &str, inner: &str) -> String {
    let handler = format!("print(f\"Error in {name}: {{e}}\")");

    let body_line_start = parser::line_start(source, body.start_byte());
    let before_body = &source[body_line_start..body.start_byte()];

    if before_body.trim().is_empty() {
        // Body starts on its own line; its indentation is the text before it.
        let base = before_body;
        let mut wrapped = String::with_capacity(inner.len() + 128);
        wrapped.push_str("try:\n");
        wrapped.push_str(base);
        wrapped.push_str(INDENT);
        wrapped.push_str(&reindent_tail(inner));
        wrapped.push('\n');
        wrapped.push_str(base);
        wrapped.push_str("except Exception as e:\n");
        wrapped.push_str(base);
        wrapped.push_str(INDENT);
        wrapped.push_str(&handler);
        wrapped
    } else {
        // Inline body: `def f(): return 1`. Move it onto fresh lines.
        let func_line_start = parser::line_start(source, func.start_byte());
        let base = &source[func_line_start..func.start_byte()];
        format!(
            "\n{base}{INDENT}try:\n{base}{INDENT}{INDENT}{inner}\n\
             {base}{INDENT}except Exception as e:\n{base}{INDENT}{INDENT}{handler}"
        )
    }
}

/// Add one indent level to every line after the first; the first line's
/// indentation is supplied by the caller. Lines that continue a string
/// literal are copied verbatim, since indenting them would change the
/// string's value.
fn reindent_tail(text: &str) -> String {
    let strings = strip::string_spans(text);
    let mut out = String::with_capacity(text.len() + 64);
    let mut pos = 0usize;
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
        pos += first.len() + 1;
    }
    for line in lines {
        out.push('\n');
        if !strip::starts_inside(&strings, pos) && !line.trim().is_empty() {
            out.push_str(INDENT);
        }
        out.push_str(line);
        pos += line.len() + 1;
    }
    out
}
