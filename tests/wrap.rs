// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

mod helpers;

use codegroom::services::{parser, wrap};
use helpers::{COUNTED_PROGRAM, NESTED_FUNCTIONS};
use wrap::HandlerStyle;

// ─── Whole-program wrapping ──────────────────────────────────────────────────

#[test]
fn basic_wrap_indents_and_appends_handler() {
    let source = "x = 1\nprint(x)\n";
    let result = wrap::wrap_program(source, HandlerStyle::Print);
    insta::assert_snapshot!(result, @r#"
    try:
        x = 1
        print(x)
    except Exception as e:
        print(f"Error: {e}")
    "#);
}

#[test]
fn traceback_wrap_imports_traceback() {
    let source = "x = 1\n";
    let result = wrap::wrap_program(source, HandlerStyle::Traceback);
    assert!(result.contains("import traceback"));
    assert!(result.contains("traceback.print_exc()"));
    assert!(parser::is_valid(&result));
}

#[test]
fn logging_wrap_uses_module_logger() {
    let source = "x = 1\n";
    let result = wrap::wrap_program(source, HandlerStyle::Logging);
    assert!(result.contains("logging.getLogger(__name__).exception"));
    assert!(parser::is_valid(&result));
}

#[test]
fn blank_lines_stay_blank_inside_wrap() {
    let source = "x = 1\n\ny = 2\n";
    let result = wrap::wrap_program(source, HandlerStyle::Print);
    assert!(result.contains("    x = 1\n\n    y = 2\n"));
    assert!(parser::is_valid(&result));
}

#[test]
fn wrap_preserves_validity_of_real_program() {
    let result = wrap::wrap_program(COUNTED_PROGRAM, HandlerStyle::Print);
    assert!(parser::is_valid(&result));
}

// ─── Per-function wrapping ───────────────────────────────────────────────────

#[test]
fn function_body_becomes_try_block() {
    let source = "def f(x):\n    y = x + 1\n    return y\n";
    let result = wrap::wrap_per_function(source).unwrap();
    insta::assert_snapshot!(result, @r#"
    def f(x):
        try:
            y = x + 1
            return y
        except Exception as e:
            print(f"Error in f: {e}")
    "#);
}

#[test]
fn handler_reports_the_function_name() {
    let source = "def compute():\n    return 1\n";
    let result = wrap::wrap_per_function(source).unwrap();
    assert!(result.contains("Error in compute"));
}

#[test]
fn nested_functions_each_get_a_handler() {
    let result = wrap::wrap_per_function(NESTED_FUNCTIONS).unwrap();
    assert!(result.contains("Error in outer"));
    assert!(result.contains("Error in inner"));
    assert!(result.contains("Error in fetch"));
    assert!(parser::is_valid(&result), "output must re-parse");
}

#[test]
fn methods_are_wrapped_too() {
    let result = wrap::wrap_per_function(COUNTED_PROGRAM).unwrap();
    assert!(result.contains("Error in __init__"));
    assert!(result.contains("Error in doubled"));
    assert!(parser::is_valid(&result));
}

#[test]
fn inline_body_is_moved_to_its_own_lines() {
    let source = "def f(): return 1\n";
    let result = wrap::wrap_per_function(source).unwrap();
    assert!(parser::is_valid(&result), "inline body must stay valid");
    assert!(result.contains("try:"));
    assert!(result.contains("Error in f"));
}

#[test]
fn multiline_string_in_body_keeps_its_value() {
    // Re-indenting the body must not shift continuation lines of a
    // triple-quoted literal, or the string's runtime value changes.
    let source = "def f():\n    x = \"\"\"a\nb\"\"\"\n    return x\n";
    let result = wrap::wrap_per_function(source).unwrap();
    assert!(
        result.contains("\"\"\"a\nb\"\"\""),
        "literal must be untouched: {result}"
    );
    assert!(parser::is_valid(&result));
}

#[test]
fn module_level_code_is_untouched() {
    let source = "x = 1\n\ndef f():\n    return x\n\nprint(f())\n";
    let result = wrap::wrap_per_function(source).unwrap();
    assert!(result.starts_with("x = 1\n"));
    assert!(result.ends_with("print(f())\n"));
}

#[test]
fn per_function_rejects_invalid_input() {
    assert!(wrap::wrap_per_function("def f(:\n").is_err());
}
