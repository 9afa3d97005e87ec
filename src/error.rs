// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Syntax error: {message}")]
    #[diagnostic(
        code(codegroom::parse::invalid),
        help("The input is not valid Python, even after auto-repair")
    )]
    Parse { message: String },

    #[error("Unknown operation '{name}'")]
    #[diagnostic(
        code(codegroom::dispatch::unknown),
        help("Run `codegroom ops` to list available operations")
    )]
    UnknownOperation { name: String },

    #[error("No operation given")]
    #[diagnostic(
        code(codegroom::cli::no_operation),
        help("Usage: codegroom <operation> [file]. Run `codegroom ops` to list operations")
    )]
    MissingOperation,

    #[error("Input too large: {bytes} bytes (limit {limit})")]
    #[diagnostic(
        code(codegroom::input::too_large),
        help("Raise max_input_bytes in the config file if this is intentional")
    )]
    InputTooLarge { bytes: usize, limit: usize },

    #[error("Operation failed: {message}")]
    #[diagnostic(code(codegroom::operation::failed))]
    Operation { message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(codegroom::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
