// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use codegroom::services::{parser, repair};
use libfuzzer_sys::fuzz_target;

// Repair is total over arbitrary text and only ever returns a modified
// program when the modification actually parses.
fuzz_target!(|data: &str| {
    let outcome = repair::repair(data);
    if outcome.text != data {
        assert!(parser::is_valid(&outcome.text));
        assert!(outcome.advisory.is_some());
    } else {
        assert!(outcome.advisory.is_none());
    }
});
