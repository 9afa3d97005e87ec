// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! Operation dispatcher. Uniform pre/post handling for every operation:
//! repair first, then the selected transform, then outcome classification.
//! Nothing that happens inside an operation escapes as an error; every path
//! resolves to one of the three `OperationResult` shapes.

use tracing::debug;

use crate::domain::{FailureKind, Operation, OperationKind, OperationResult};
use crate::error::Error;
use crate::services::parser;
use crate::services::repair;
use crate::services::stats;
use crate::services::strip;
use crate::services::tools::{self, FAILURE_MARKER, ToolKit, UNAVAILABLE_MARKER};
use crate::services::wrap::{self, HandlerStyle};

/// Entry point for callers holding a raw identifier string. Unknown
/// identifiers come back as a Failure, never a panic or error.
pub fn run(operation: &str, source: &str, tools: &ToolKit) -> OperationResult {
    match Operation::parse(operation) {
        Some(op) => run_operation(op, source, tools),
        None => OperationResult::Failure {
            kind: FailureKind::UnknownOperation,
            message: format!("Unknown operation: {operation}"),
        },
    }
}

pub fn run_operation(op: Operation, source: &str, tools: &ToolKit) -> OperationResult {
    debug!(operation = %op, bytes = source.len(), "dispatching");

    if op.kind() == OperationKind::Report {
        // Report operations run repair internally.
        return match op {
            Operation::Validate => stats::validate(source),
            Operation::Stats => stats::stats(source, tools),
            _ => unreachable!("only validate and stats are reports"),
        };
    }

    let outcome = repair::repair(source);
    if let Err(e) = parser::parse_valid(&outcome.text) {
        return failure(e);
    }

    match apply(op, &outcome.text, tools) {
        Ok(text) => classify(op, source, text, outcome.advisory),
        Err(e) => failure(e),
    }
}

fn apply(
    op: Operation,
    source: &str,
    tools: &ToolKit,
) -> crate::error::Result<String> {
    match op {
        Operation::Cleanup => Ok(strip::strip_comments(source)),
        Operation::Beautify => Ok(tools::delegate(&tools.autopep8, &["-"], source)),
        Operation::BlackFormat => Ok(tools::delegate(&tools.black, &["-q", "-"], source)),
        Operation::SortImports => Ok(tools::delegate(&tools.isort, &["-"], source)),
        Operation::Minify => strip::minify(source),
        Operation::RemoveDocstrings => strip::strip_docstrings(source),
        Operation::TryexceptBasic => Ok(wrap::wrap_program(source, HandlerStyle::Print)),
        Operation::TryexceptDetailed => Ok(wrap::wrap_program(source, HandlerStyle::Traceback)),
        Operation::TryexceptLogging => Ok(wrap::wrap_program(source, HandlerStyle::Logging)),
        Operation::TryexceptPerFunction => wrap::wrap_per_function(source),
        Operation::Validate | Operation::Stats => unreachable!("reports are dispatched earlier"),
    }
}

/// The uniform classification rule: failure glyph prefix means Failure,
/// unavailable glyph means a degraded Report, anything else is a code
/// artifact.
pub fn classify(
    op: Operation,
    original: &str,
    text: String,
    advisory: Option<String>,
) -> OperationResult {
    if text.starts_with(FAILURE_MARKER) {
        let message = text
            .strip_prefix(FAILURE_MARKER)
            .unwrap_or(&text)
            .trim()
            .to_string();
        return OperationResult::Failure {
            kind: FailureKind::Tool,
            message,
        };
    }

    if text.starts_with(UNAVAILABLE_MARKER) {
        let text = match advisory {
            Some(advisory) => format!("{advisory}\n\n{text}"),
            None => text,
        };
        return OperationResult::Report { text };
    }

    let reduction = if op == Operation::Minify {
        reduction_percent(original.len(), text.len())
    } else {
        None
    };

    let text = match advisory {
        // Advisory rides along as a comment so the artifact stays parseable.
        Some(advisory) => format!("# {advisory}\n{text}"),
        None => text,
    };

    OperationResult::Code {
        bytes: text.len(),
        reduction,
        text,
    }
}

/// `(len(original) - len(result)) / len(original)`, as a percentage,
/// reported only when positive.
fn reduction_percent(original: usize, result: usize) -> Option<f64> {
    if original == 0 || result >= original {
        return None;
    }
    Some((original - result) as f64 / original as f64 * 100.0)
}

// Failure messages carry the bare cause; the CLI layer re-wraps them in the
// error type that adds the user-facing prefix.
fn failure(e: Error) -> OperationResult {
    match e {
        Error::Parse { message } => OperationResult::Failure {
            kind: FailureKind::Parse,
            message,
        },
        Error::UnknownOperation { name } => OperationResult::Failure {
            kind: FailureKind::UnknownOperation,
            message: format!("Unknown operation: {name}"),
        },
        Error::Operation { message } => OperationResult::Failure {
            kind: FailureKind::Internal,
            message,
        },
        other => OperationResult::Failure {
            kind: FailureKind::Internal,
            message: other.to_string(),
        },
    }
}
