// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

pub mod dispatch;
pub mod parser;
pub mod repair;
pub mod stats;
pub mod strip;
pub mod tools;
pub mod wrap;
