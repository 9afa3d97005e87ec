// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

mod operation;
mod outcome;

pub use operation::*;
pub use outcome::*;
