// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use codegroom::services::strip;
use libfuzzer_sys::fuzz_target;

// Cleanup never panics and is idempotent; its output carries no blank lines
// and no full-line comments.
fuzz_target!(|data: &str| {
    let once = strip::strip_comments(data);
    assert_eq!(strip::strip_comments(&once), once);
    for line in once.lines() {
        let stripped = line.trim();
        assert!(!stripped.is_empty());
        assert!(!stripped.starts_with('#'));
    }
});
