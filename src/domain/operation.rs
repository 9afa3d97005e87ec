// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

/// The fixed set of operation identifiers callers may request.
///
/// Transforms produce a code artifact; reports produce human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Cleanup,
    Beautify,
    BlackFormat,
    SortImports,
    Minify,
    RemoveDocstrings,
    Validate,
    Stats,
    TryexceptBasic,
    TryexceptDetailed,
    TryexceptLogging,
    TryexceptPerFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Transform,
    Report,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Self::Cleanup,
        Self::Beautify,
        Self::BlackFormat,
        Self::SortImports,
        Self::Minify,
        Self::RemoveDocstrings,
        Self::Validate,
        Self::Stats,
        Self::TryexceptBasic,
        Self::TryexceptDetailed,
        Self::TryexceptLogging,
        Self::TryexceptPerFunction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cleanup => "cleanup",
            Self::Beautify => "beautify",
            Self::BlackFormat => "black-format",
            Self::SortImports => "sort-imports",
            Self::Minify => "minify",
            Self::RemoveDocstrings => "remove-docstrings",
            Self::Validate => "validate",
            Self::Stats => "stats",
            Self::TryexceptBasic => "tryexcept-basic",
            Self::TryexceptDetailed => "tryexcept-detailed",
            Self::TryexceptLogging => "tryexcept-logging",
            Self::TryexceptPerFunction => "tryexcept-per-function",
        }
    }

    /// Lookup by identifier string; `None` for anything unregistered.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Validate | Self::Stats => OperationKind::Report,
            _ => OperationKind::Transform,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Cleanup => "Remove comments and blank lines",
            Self::Beautify => "Auto-format with autopep8",
            Self::BlackFormat => "Format with Black",
            Self::SortImports => "Organize imports with isort",
            Self::Minify => "Strip comments, docstrings and extra blank lines",
            Self::Validate => "Check for syntax errors",
            Self::Stats => "Code metrics report",
            Self::RemoveDocstrings => "Strip all docstrings",
            Self::TryexceptBasic => "Wrap code in a try/except that prints the error",
            Self::TryexceptDetailed => "Wrap code in a try/except that prints the traceback",
            Self::TryexceptLogging => "Wrap code in a try/except that logs the exception",
            Self::TryexceptPerFunction => "Wrap each function body in its own try/except",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
