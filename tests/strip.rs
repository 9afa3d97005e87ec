// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

mod helpers;

use codegroom::services::{parser, strip};
use helpers::DOCUMENTED_PROGRAM;
use proptest::prelude::*;

// ─── Line-level comment stripping (cleanup) ──────────────────────────────────

#[test]
fn removes_comment_and_blank_lines() {
    let source = "def f():\n    # comment\n\n    return 1\n";
    assert_eq!(strip::strip_comments(source), "def f():\n    return 1\n");
}

#[test]
fn keeps_inline_comments_in_line_mode() {
    // Line-level mode only drops whole comment lines.
    let source = "x = 1  # set x\n";
    assert_eq!(strip::strip_comments(source), "x = 1  # set x\n");
}

#[test]
fn all_comments_means_empty_output() {
    let source = "# one\n# two\n\n";
    assert_eq!(strip::strip_comments(source), "");
}

#[test]
fn trailing_newline_only_with_content() {
    assert_eq!(strip::strip_comments("x = 1"), "x = 1\n");
    assert_eq!(strip::strip_comments(""), "");
}

proptest! {
    #[test]
    fn strip_comments_is_idempotent(source in "(?s).{0,300}") {
        let once = strip::strip_comments(&source);
        let twice = strip::strip_comments(&once);
        prop_assert_eq!(once, twice);
    }
}

// ─── String-aware comment spans ──────────────────────────────────────────────

#[test]
fn hash_inside_string_is_not_a_comment() {
    let source = "x = \"# not a comment\"\n";
    assert!(strip::comment_spans(source).is_empty());
}

#[test]
fn hash_inside_triple_quoted_string_is_not_a_comment() {
    let source = "x = \"\"\"\n# still a string\n\"\"\"\n";
    assert!(strip::comment_spans(source).is_empty());
}

#[test]
fn inline_comment_after_string_is_found() {
    let source = "x = \"text\"  # real comment\n";
    let spans = strip::comment_spans(source);
    assert_eq!(spans.len(), 1);
    let (start, end) = spans[0];
    assert_eq!(&source[start..end], "# real comment");
}

#[test]
fn string_spans_cover_triple_quoted_literals() {
    let source = "x = \"\"\"a\nb\"\"\"\ny = 1\n";
    let spans = strip::string_spans(source);
    assert_eq!(spans.len(), 1);
    let (start, end) = spans[0];
    assert_eq!(&source[start..end], "\"\"\"a\nb\"\"\"");
}

#[test]
fn raw_string_backslash_does_not_escape() {
    let source = "x = r\"\\\"  # comment\n";
    let spans = strip::comment_spans(source);
    assert_eq!(spans.len(), 1, "raw string closes at the quote");
}

// ─── Docstring stripping ─────────────────────────────────────────────────────

#[test]
fn function_docstring_is_removed() {
    let source = "def f():\n    \"\"\"doc\"\"\"\n    return 1\n";
    let result = strip::strip_docstrings(source).unwrap();
    assert_eq!(result, "def f():\n    return 1\n");
}

#[test]
fn empty_body_gets_pass_placeholder() {
    let source = "def f():\n    \"\"\"doc\"\"\"\n";
    let result = strip::strip_docstrings(source).unwrap();
    assert_eq!(result, "def f():\n    pass\n");
    assert!(parser::is_valid(&result));
}

#[test]
fn class_and_module_docstrings_are_removed() {
    let result = strip::strip_docstrings(DOCUMENTED_PROGRAM).unwrap();
    assert!(!result.contains("Module docstring"));
    assert!(!result.contains("Say hello"));
    assert!(!result.contains("Holds a greeting"));
    assert!(!result.contains("Nothing but this docstring"));
    assert!(result.contains("    def only_doc(self):\n        pass\n"));
    assert!(parser::is_valid(&result), "output must re-parse");
}

#[test]
fn non_docstring_first_statement_is_kept() {
    let source = "def f():\n    x = \"not a docstring\"\n    return x\n";
    let result = strip::strip_docstrings(source).unwrap();
    assert_eq!(result, source);
}

#[test]
fn strip_docstrings_is_idempotent() {
    let once = strip::strip_docstrings(DOCUMENTED_PROGRAM).unwrap();
    let twice = strip::strip_docstrings(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn strip_docstrings_rejects_invalid_input() {
    assert!(strip::strip_docstrings("def f(:\n").is_err());
}

// ─── Minify ──────────────────────────────────────────────────────────────────

#[test]
fn minify_strips_comments_docstrings_and_blank_runs() {
    let source = "\"\"\"module doc\"\"\"\n\n\n# comment\nx = 1  # inline\n\n\n\ny = 2\n";
    let result = strip::minify(source).unwrap();
    assert_eq!(result, "x = 1\n\ny = 2\n");
}

#[test]
fn blank_lines_inside_strings_survive_minify() {
    // A blank run inside a triple-quoted literal is part of its value.
    let source = "x = \"\"\"a\n\n\nb\"\"\"\n";
    assert_eq!(strip::minify(source).unwrap(), source);
}

#[test]
fn minify_collapses_outside_but_not_inside_strings() {
    let source = "x = \"\"\"a\n\nb\"\"\"\n\n\n\ny = 2\n";
    let result = strip::minify(source).unwrap();
    assert_eq!(result, "x = \"\"\"a\n\nb\"\"\"\n\ny = 2\n");
}

#[test]
fn minify_is_idempotent() {
    let once = strip::minify(DOCUMENTED_PROGRAM).unwrap();
    let twice = strip::minify(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn minify_preserves_validity() {
    let result = strip::minify(DOCUMENTED_PROGRAM).unwrap();
    assert!(parser::is_valid(&result));
}

#[test]
fn minify_of_comment_only_input_is_empty() {
    let result = strip::minify("# nothing here\n").unwrap();
    assert_eq!(result, "");
}
