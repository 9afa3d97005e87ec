// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

/// Why a dispatched operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input (post-repair) is not valid Python.
    Parse,
    /// An external tool ran and reported an error.
    Tool,
    /// The requested identifier is not registered.
    UnknownOperation,
    /// Anything else raised inside a transform or report.
    Internal,
}

/// The single result shape every operation resolves to.
///
/// Exactly one variant per invocation; no error ever escapes the dispatcher
/// in any other form.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    /// A transformed code artifact, ready for delivery.
    Code {
        text: String,
        bytes: usize,
        /// Size reduction as a percentage, present only when positive.
        reduction: Option<f64>,
    },
    /// Human-readable report text (includes degraded tool-unavailable notes).
    Report { text: String },
    Failure { kind: FailureKind, message: String },
}

impl OperationResult {
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Result of the syntax repair pass.
///
/// When `advisory` is present, `text` differs from the submitted source and
/// parses successfully. When absent, `text` is the source unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    pub text: String,
    pub advisory: Option<String>,
}

impl RepairOutcome {
    pub fn unchanged(source: &str) -> Self {
        Self {
            text: source.to_string(),
            advisory: None,
        }
    }

    pub fn repaired(&self) -> bool {
        self.advisory.is_some()
    }
}
