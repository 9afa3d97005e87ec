// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

//! External tool delegation and availability probing.
//!
//! The formatters (autopep8, black, isort) and the complexity analyzer
//! (radon) are black boxes: availability is resolved once at startup, each
//! delegation classifies into output / unavailable marker / error marker, and
//! a missing or broken tool never crashes the process.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Config;

/// Failure marker glyph; result text starting with this is classified as a
/// Failure.
pub const FAILURE_MARKER: &str = "❌";
/// Degraded marker glyph; result text starting with this is classified as a
/// Report ("your code is fine but we can't run this tool").
pub const UNAVAILABLE_MARKER: &str = "⚠️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Available,
    Unavailable,
}

/// One probed external tool.
#[derive(Debug, Clone)]
pub struct Tool {
    /// Display name used in markers and diagnostics.
    pub label: &'static str,
    /// Binary to invoke, from config.
    pub bin: String,
    pub status: ToolStatus,
    pub install_hint: &'static str,
}

impl Tool {
    pub fn is_available(&self) -> bool {
        self.status == ToolStatus::Available
    }
}

/// Tool availability, resolved once at process start and passed into the
/// pipeline as plain configuration.
#[derive(Debug, Clone)]
pub struct ToolKit {
    pub autopep8: Tool,
    pub black: Tool,
    pub isort: Tool,
    pub radon: Tool,
}

impl ToolKit {
    /// Probe each configured binary with `--version`.
    pub fn probe(config: &Config) -> Self {
        let kit = Self {
            autopep8: probe_tool(
                "autopep8",
                &config.tools.autopep8,
                "pip install autopep8",
            ),
            black: probe_tool("Black", &config.tools.black, "pip install black"),
            isort: probe_tool("isort", &config.tools.isort, "pip install isort"),
            radon: probe_tool("radon", &config.tools.radon, "pip install radon"),
        };
        debug!(
            autopep8 = kit.autopep8.is_available(),
            black = kit.black.is_available(),
            isort = kit.isort.is_available(),
            radon = kit.radon.is_available(),
            "tool availability probed"
        );
        kit
    }

    /// A kit with every tool marked unavailable; used when delegation should
    /// degrade (and by tests).
    pub fn unavailable() -> Self {
        let absent = |label: &'static str, bin: &str, hint: &'static str| Tool {
            label,
            bin: bin.to_string(),
            status: ToolStatus::Unavailable,
            install_hint: hint,
        };
        Self {
            autopep8: absent("autopep8", "autopep8", "pip install autopep8"),
            black: absent("Black", "black", "pip install black"),
            isort: absent("isort", "isort", "pip install isort"),
            radon: absent("radon", "radon", "pip install radon"),
        }
    }

    pub fn entries(&self) -> [&Tool; 4] {
        [&self.autopep8, &self.black, &self.isort, &self.radon]
    }
}

fn probe_tool(label: &'static str, bin: &str, install_hint: &'static str) -> Tool {
    let found = Command::new(bin)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success());
    Tool {
        label,
        bin: bin.to_string(),
        status: if found {
            ToolStatus::Available
        } else {
            ToolStatus::Unavailable
        },
        install_hint,
    }
}

/// Feed `source` to a formatter on stdin and classify the outcome into the
/// marker scheme: formatted text, `⚠️ <tool> not installed`, or
/// `❌ <tool> error: <message>`.
pub fn delegate(tool: &Tool, args: &[&str], source: &str) -> String {
    if !tool.is_available() {
        return format!("{UNAVAILABLE_MARKER} {} not installed", tool.label);
    }
    match run_stdin(&tool.bin, args, source) {
        Ok(formatted) => formatted,
        Err(message) => format!("{FAILURE_MARKER} {} error: {message}", tool.label),
    }
}

/// Run a tool with piped stdin/stdout. The input is written from a separate
/// thread so a tool that streams output early cannot deadlock the pipe.
pub fn run_stdin(bin: &str, args: &[&str], input: &str) -> Result<String, String> {
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| format!("failed to spawn: {e}"))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| "failed to open stdin".to_string())?;
    let payload = input.as_bytes().to_vec();
    let writer = std::thread::spawn(move || {
        let _ = stdin.write_all(&payload);
    });

    let output = child
        .wait_with_output()
        .map_err(|e| format!("failed to run: {e}"))?;
    let _ = writer.join();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(stderr.trim().to_string());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
