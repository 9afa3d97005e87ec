// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Read-only analyses: syntax validation and structural statistics.
//!
//! Both run the repair pass themselves, then parse. Line and comment counts
//! come from the original (un-repaired) text; the structural counts walk the
//! full parse tree, nested scopes included.

use std::io::Write;
use std::process::Command;

use tracing::debug;

use crate::domain::{FailureKind, OperationResult};
use crate::error::Error;
use crate::services::parser;
use crate::services::repair;
use crate::services::tools::ToolKit;

pub fn validate(source: &str) -> OperationResult {
    let outcome = repair::repair(source);
    match parser::parse_valid(&outcome.text) {
        Ok(_) => {
            let mut text = String::new();
            if let Some(advisory) = outcome.advisory {
                text.push_str(&advisory);
                text.push_str("\n\n");
            }
            text.push_str("✅ Syntax is valid!");
            OperationResult::Report { text }
        }
        Err(e) => OperationResult::Failure {
            kind: FailureKind::Parse,
            message: parse_message(e),
        },
    }
}

pub fn stats(source: &str, tools: &ToolKit) -> OperationResult {
    let outcome = repair::repair(source);
    let tree = match parser::parse_valid(&outcome.text) {
        Ok(tree) => tree,
        Err(e) => {
            return OperationResult::Failure {
                kind: FailureKind::Parse,
                message: parse_message(e),
            };
        }
    };

    let mut functions = 0usize;
    let mut classes = 0usize;
    let mut imports = 0usize;
    parser::for_each_node(tree.root_node(), &mut |node| match node.kind() {
        "function_definition" => functions += 1,
        "class_definition" => classes += 1,
        "import_statement" | "import_from_statement" | "future_import_statement" => imports += 1,
        _ => {}
    });

    let lines = source.lines().count();
    let comments = source
        .lines()
        .filter(|l| l.trim_start().starts_with('#'))
        .count();

    let mut text = String::new();
    if let Some(advisory) = outcome.advisory {
        text.push_str(&advisory);
        text.push_str("\n\n");
    }
    text.push_str("📊 Code Statistics\n\n");
    text.push_str(&format!("📝 Lines of Code: {lines}\n"));
    text.push_str(&format!("⚙️ Functions: {functions}\n"));
    text.push_str(&format!("🏛 Classes: {classes}\n"));
    text.push_str(&format!("📦 Imports: {imports}\n"));
    text.push_str(&format!("💬 Comment Lines: {comments}\n"));

    if let Some(avg) = mean_complexity(tools, &outcome.text) {
        text.push_str(&format!("🧮 Avg Complexity: {avg:.2}\n"));
    }

    OperationResult::Report { text }
}

fn parse_message(e: Error) -> String {
    match e {
        Error::Parse { message } => message,
        other => other.to_string(),
    }
}

/// Arithmetic mean of cyclomatic complexity across all analyzed code units,
/// via `radon cc -j`. Radon only takes paths, so the source goes through a
/// temp file. Any failure along the way just drops the metric.
fn mean_complexity(tools: &ToolKit, source: &str) -> Option<f64> {
    if !tools.radon.is_available() {
        return None;
    }

    let mut file = tempfile::Builder::new()
        .prefix("codegroom-")
        .suffix(".py")
        .tempfile()
        .ok()?;
    file.write_all(source.as_bytes()).ok()?;

    let output = Command::new(&tools.radon.bin)
        .args(["cc", "-j"])
        .arg(file.path())
        .output()
        .ok()?;
    if !output.status.success() {
        debug!(status = %output.status, "radon exited nonzero, skipping complexity");
        return None;
    }

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).ok()?;
    let mut complexities = Vec::new();
    collect_complexities(&parsed, &mut complexities);

    let total: f64 = complexities.iter().sum();
    // Divisor floors at 1: a unit-less file reports 0.00 rather than NaN.
    Some(total / complexities.len().max(1) as f64)
}

/// Recursively gather every "complexity" number in radon's JSON (classes
/// nest their methods).
fn collect_complexities(value: &serde_json::Value, out: &mut Vec<f64>) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(c) = map.get("complexity").and_then(|v| v.as_f64()) {
                out.push(c);
            }
            for (key, nested) in map {
                if key != "complexity" {
                    collect_complexities(nested, out);
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_complexities(item, out);
            }
        }
        _ => {}
    }
}
