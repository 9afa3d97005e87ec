// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use codegroom::services::strip;
use libfuzzer_sys::fuzz_target;

// Comment spans are in bounds, ordered, non-overlapping, and each one
// starts at a hash mark.
fuzz_target!(|data: &str| {
    let spans = strip::comment_spans(data);
    let mut previous_end = 0;
    for (start, end) in spans {
        assert!(start >= previous_end);
        assert!(start < end);
        assert!(end <= data.len());
        assert_eq!(data.as_bytes()[start], b'#');
        previous_end = end;
    }
});
