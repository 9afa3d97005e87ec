// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

use codegroom::services::{parser, repair};
use proptest::prelude::*;

// ─── No-op on valid input ────────────────────────────────────────────────────

#[test]
fn valid_input_passes_through() {
    let source = "x = 1\nprint(x)\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, source);
    assert!(outcome.advisory.is_none(), "valid input needs no advisory");
}

#[test]
fn empty_input_passes_through() {
    let outcome = repair::repair("");
    assert_eq!(outcome.text, "");
    assert!(outcome.advisory.is_none());
}

// ─── Colon insertion ─────────────────────────────────────────────────────────

#[test]
fn missing_colon_after_if_is_appended() {
    let source = "x=1\nif x==1\n    print(x)\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, "x=1\nif x==1:\n    print(x)\n");
    assert!(outcome.advisory.is_some(), "repair must carry an advisory");
}

#[test]
fn missing_colon_after_def_is_appended() {
    let source = "def f(x)\n    return x\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, "def f(x):\n    return x\n");
    assert!(outcome.advisory.is_some());
}

#[test]
fn continuation_lines_are_left_alone() {
    // The header ends with a backslash; appending a colon would be wrong,
    // so no repair succeeds and the original flows through.
    let source = "if x == \\\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, source);
    assert!(outcome.advisory.is_none());
}

// ─── Dedent and trailing whitespace ─────────────────────────────────────────

#[test]
fn common_indentation_is_removed() {
    let source = "  if x == 1\n      print(x)\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, "if x == 1:\n    print(x)\n");
    assert!(outcome.advisory.is_some());
}

#[test]
fn dedent_preserves_relative_indentation() {
    let source = "    def f()\n        return 1\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, "def f():\n    return 1\n");
    assert!(outcome.advisory.is_some());
}

#[test]
fn trailing_whitespace_is_trimmed_during_repair() {
    let source = "def f()   \n    return 1\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, "def f():\n    return 1\n");
    assert!(outcome.advisory.is_some());
}

// ─── Unrepairable input ──────────────────────────────────────────────────────

#[test]
fn unmatched_paren_returns_original_unchanged() {
    let source = "print((1)\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, source, "failed repair must not modify input");
    assert!(outcome.advisory.is_none());
}

// ─── Repair safety (spec-level property) ─────────────────────────────────────

proptest! {
    // Either the input comes back unchanged with no advisory, or the
    // returned text parses and the advisory is present.
    #[test]
    fn repair_never_returns_broken_text_with_advisory(source in ".{0,200}") {
        let outcome = repair::repair(&source);
        match outcome.advisory {
            Some(_) => {
                prop_assert_ne!(&outcome.text, &source);
                prop_assert!(parser::is_valid(&outcome.text));
            }
            None => prop_assert_eq!(&outcome.text, &source),
        }
    }
}

// ─── Documented heuristic limitation ─────────────────────────────────────────

#[test]
fn prefix_match_can_touch_non_headers() {
    // "elsewhere" starts with "else"; the heuristic appends a colon, the
    // result does not parse, so the original is returned. The point is that
    // repair stays safe even when the textual match is wrong.
    let source = "elsewhere = (1\n";
    let outcome = repair::repair(source);
    assert_eq!(outcome.text, source);
    assert!(outcome.advisory.is_none());
}
