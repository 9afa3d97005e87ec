// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Comment, docstring and whitespace stripping.
//!
//! `strip_comments` is the line-level cleanup the chat bot shipped: drop
//! blank lines and full-line comments, keep everything else verbatim. The
//! minify path additionally removes inline comments with a string-aware
//! scanner, strips docstrings, and collapses blank-line runs.

use tree_sitter::Node;

use crate::error::{Error, Result};
use crate::services::parser::{self, Edit};

/// Remove blank lines and full-line comments. Total over arbitrary text and
/// idempotent; remaining lines keep their content (trailing whitespace
/// trimmed, no re-indentation). Purely line-based: a line whose first
/// non-blank character is `#` is dropped even when it sits inside a
/// triple-quoted string, so such literals can lose lines.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut any = false;
    for line in source.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }
        out.push_str(line.trim_end());
        out.push('\n');
        any = true;
    }
    if !any {
        out.clear();
    }
    out
}

/// Byte spans of every `#` comment, excluding hash marks inside string
/// literals. Spans run to the end of line, newline not included.
pub fn comment_spans(source: &str) -> Vec<(usize, usize)> {
    scan_spans(source).comments
}

/// Byte spans of every string literal, opening quote through closing quote.
/// An unterminated triple-quoted literal runs to the end of input.
pub fn string_spans(source: &str) -> Vec<(usize, usize)> {
    scan_spans(source).strings
}

struct Spans {
    comments: Vec<(usize, usize)>,
    strings: Vec<(usize, usize)>,
}

/// One pass of the string-aware scanner, collecting comment and string
/// literal spans together.
fn scan_spans(source: &str) -> Spans {
    enum State {
        Code,
        Str {
            quote: u8,
            triple: bool,
            raw: bool,
            start: usize,
        },
    }

    let bytes = source.as_bytes();
    let mut comments = Vec::new();
    let mut strings = Vec::new();
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        match state {
            State::Code => match bytes[i] {
                b'#' => {
                    let end = parser::line_end(source, i);
                    comments.push((i, end));
                    i = end;
                }
                q @ (b'"' | b'\'') => {
                    let triple = bytes.get(i + 1) == Some(&q) && bytes.get(i + 2) == Some(&q);
                    state = State::Str {
                        quote: q,
                        triple,
                        raw: has_raw_prefix(bytes, i),
                        start: i,
                    };
                    i += if triple { 3 } else { 1 };
                }
                _ => i += 1,
            },
            State::Str {
                quote,
                triple,
                raw,
                start,
            } => {
                if !raw && bytes[i] == b'\\' {
                    i += 2;
                } else if bytes[i] == quote {
                    if !triple {
                        strings.push((start, i + 1));
                        state = State::Code;
                        i += 1;
                    } else if bytes.get(i + 1) == Some(&quote) && bytes.get(i + 2) == Some(&quote)
                    {
                        strings.push((start, i + 3));
                        state = State::Code;
                        i += 3;
                    } else {
                        i += 1;
                    }
                } else if !triple && bytes[i] == b'\n' {
                    // Unterminated single-quoted string; the literal cannot
                    // continue past the line.
                    strings.push((start, i));
                    state = State::Code;
                    i += 1;
                } else {
                    i += 1;
                }
            }
        }
    }
    if let State::Str { start, .. } = state {
        strings.push((start, bytes.len()));
    }

    Spans { comments, strings }
}

/// Whether the line beginning at byte `line_start` falls inside one of the
/// given string literal spans.
pub fn starts_inside(spans: &[(usize, usize)], line_start: usize) -> bool {
    spans.iter().any(|&(s, e)| s < line_start && line_start < e)
}

/// String prefix letters (r, rb, fr, ...) immediately before a quote.
fn has_raw_prefix(bytes: &[u8], quote_at: usize) -> bool {
    let mut j = quote_at;
    let mut raw = false;
    while j > 0 && j >= quote_at.saturating_sub(2) {
        match bytes[j - 1] {
            b'r' | b'R' => {
                raw = true;
                j -= 1;
            }
            b'b' | b'B' | b'u' | b'U' | b'f' | b'F' => j -= 1,
            _ => break,
        }
    }
    raw
}

/// Remove the docstring of every module, class, function and async function
/// scope. A body left empty gets a `pass` placeholder so the construct stays
/// syntactically valid.
pub fn strip_docstrings(source: &str) -> Result<String> {
    let tree = parser::parse_valid(source)?;
    let mut edits = Vec::new();

    parser::for_each_node(tree.root_node(), &mut |node| {
        let body = match node.kind() {
            "module" => Some(node),
            "function_definition" | "class_definition" => node.child_by_field_name("body"),
            _ => None,
        };
        if let Some(body) = body {
            if let Some(edit) = docstring_edit(source, body) {
                edits.push(edit);
            }
        }
    });

    if edits.is_empty() {
        return Ok(source.to_string());
    }

    let result = parser::apply_edits(source, edits);
    if !parser::is_valid(&result) {
        return Err(Error::Operation {
            message: "docstring removal produced unparseable output".into(),
        });
    }
    Ok(result)
}

/// Compute the removal edit for one scope body, if its first statement is a
/// bare string literal.
fn docstring_edit(source: &str, body: Node<'_>) -> Option<Edit> {
    let statements: Vec<Node<'_>> = named_statements(body);
    let first = *statements.first()?;
    if !is_docstring(first) {
        return None;
    }
    let sole = statements.len() == 1;

    let start = first.start_byte();
    let end = first.end_byte();
    let ls = parser::line_start(source, start);
    let le = parser::line_end(source, end.saturating_sub(1).max(start));
    let alone_on_lines = source[ls..start].trim().is_empty() && source[end..le].trim().is_empty();

    if alone_on_lines {
        let removal_end = if le < source.len() { le + 1 } else { le };
        let replacement = if sole && body.kind() == "block" {
            let indent = &source[ls..start];
            format!("{indent}pass\n")
        } else {
            String::new()
        };
        return Some(Edit {
            start: ls,
            end: removal_end,
            replacement,
        });
    }

    // Inline body, e.g. `def f(): """doc"""` or `def f(): """doc"""; x = 1`.
    if sole {
        return Some(Edit {
            start,
            end,
            replacement: "pass".into(),
        });
    }
    let mut cut = end;
    let bytes = source.as_bytes();
    while cut < source.len() && bytes[cut] == b' ' {
        cut += 1;
    }
    if cut < source.len() && bytes[cut] == b';' {
        cut += 1;
        while cut < source.len() && bytes[cut] == b' ' {
            cut += 1;
        }
        return Some(Edit {
            start,
            end: cut,
            replacement: String::new(),
        });
    }
    // No separator found; neutralize rather than guess.
    Some(Edit {
        start,
        end,
        replacement: "pass".into(),
    })
}

/// Named children of a body, comments excluded.
fn named_statements(body: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

fn is_docstring(stmt: Node<'_>) -> bool {
    if stmt.kind() != "expression_statement" || stmt.named_child_count() != 1 {
        return false;
    }
    stmt.named_child(0)
        .is_some_and(|n| matches!(n.kind(), "string" | "concatenated_string"))
}

/// Full minification: docstrings out, comments out (inline included), blank
/// runs collapsed to one, leading/trailing blanks trimmed.
pub fn minify(source: &str) -> Result<String> {
    let without_docstrings = strip_docstrings(source)?;

    let spans = comment_spans(&without_docstrings);
    let mut text = without_docstrings;
    for (start, end) in spans.into_iter().rev() {
        text.replace_range(start..end, "");
    }

    // The whitespace passes must not touch lines that continue a string
    // literal: a blank line inside a triple-quoted string is part of its
    // value.
    let strings = string_spans(&text);
    let mut lines: Vec<(&str, bool)> = Vec::new();
    let mut pos = 0usize;
    for raw in text.split('\n') {
        lines.push((raw, starts_inside(&strings, pos)));
        pos += raw.len() + 1;
    }
    if text.ends_with('\n') {
        lines.pop();
    }

    while lines
        .first()
        .is_some_and(|&(l, inside)| !inside && l.trim().is_empty())
    {
        lines.remove(0);
    }
    while lines
        .last()
        .is_some_and(|&(l, inside)| !inside && l.trim().is_empty())
    {
        lines.pop();
    }

    let mut out = String::with_capacity(text.len());
    let mut previous_blank = false;
    for (line, inside) in lines {
        if inside {
            out.push_str(line);
            out.push('\n');
            previous_blank = false;
            continue;
        }
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        previous_blank = blank;
    }
    Ok(out)
}
