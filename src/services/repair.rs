// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Best-effort syntax repair, attempted once before every operation.
//!
//! Three purely textual heuristics: append missing colons to block headers,
//! strip common leading indentation, trim trailing whitespace. A repaired
//! text is only returned if it actually parses; otherwise the original flows
//! through unchanged and the downstream parse reports the real error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::RepairOutcome;
use crate::services::parser;

pub const ADVISORY: &str = "🔧 Auto-repaired syntax before processing";

// Deliberately a bare prefix match, not word-aware: a line starting with
// "elsewhere" matches "else". Known limitation of the heuristic, kept as-is.
static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(if|elif|else|for|while|def|class|async|try|except|finally|with)").unwrap()
});

/// Attempt to repair `source`. Never fails; the worst case is the original
/// text coming back untouched.
pub fn repair(source: &str) -> RepairOutcome {
    if parser::is_valid(source) {
        return RepairOutcome::unchanged(source);
    }

    let candidate = trim_trailing(&dedent(&append_colons(source)));

    if candidate != source && parser::is_valid(&candidate) {
        debug!(
            original_bytes = source.len(),
            repaired_bytes = candidate.len(),
            "repair heuristics produced parseable text"
        );
        return RepairOutcome {
            text: candidate,
            advisory: Some(ADVISORY.to_string()),
        };
    }

    RepairOutcome::unchanged(source)
}

/// Heuristic (a): append a colon to block-header-looking lines that end
/// without one and without a line continuation.
fn append_colons(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 8);
    for line in source.lines() {
        let stripped = line.trim();
        let needs_colon = BLOCK_HEADER.is_match(stripped)
            && !stripped.ends_with(':')
            && !stripped.ends_with('\\');
        if needs_colon {
            out.push_str(line.trim_end());
            out.push(':');
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    if !source.ends_with('\n') {
        out.pop();
    }
    out
}

/// Heuristic (b): remove the longest whitespace prefix shared by all
/// non-blank lines.
fn dedent(source: &str) -> String {
    let mut prefix: Option<&str> = None;
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        prefix = Some(match prefix {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
        if prefix == Some("") {
            break;
        }
    }

    let prefix = prefix.unwrap_or("");
    if prefix.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        out.push_str(line.strip_prefix(prefix).unwrap_or(line));
        out.push('\n');
    }
    if !source.ends_with('\n') {
        out.pop();
    }
    out
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Heuristic (c): strip trailing whitespace from every line.
fn trim_trailing(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if !source.ends_with('\n') {
        out.pop();
    }
    out
}
