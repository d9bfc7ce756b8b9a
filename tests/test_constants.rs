mod common;
use crate::common::*;
use sciconsole::eval::constants::PHYSICS_CONSTANTS;
use sciconsole::eval::interpreter::{format_result, DEFAULT_PRECISION};

#[test]
fn test_every_constant_evaluates_to_its_value() {
    let session = open_session();
    for (name, value) in PHYSICS_CONSTANTS {
        assert_eq!(
            session.evaluate(name).unwrap(),
            format_result(*value, DEFAULT_PRECISION),
            "constant '{}'",
            name
        );
    }
}

#[test]
fn test_constants_listing() {
    let mut session = open_session();
    let output = run_line(&mut session, "constants");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Physics Constants:");
    assert_eq!(lines.len(), PHYSICS_CONSTANTS.len() + 1);
    assert_eq!(lines[1], "c            = 2.997925e+8");
    assert_console_contains!(output, "h            = 6.626070e-34");
    assert_console_contains!(output, "epsilon0     = 8.854188e-12");
    assert_console_contains!(output, "pi           = 3.141593e+0");
}

#[test]
fn test_whole_word_substitution() {
    let mut session = open_session();
    assert_console_error!(session, "spin", "Unknown symbol 'spin'");
    assert_console_output!(session, "2.99e8 / 1e8", "2.99");
    assert_console_output!(session, "e_math", "2.71828182846");
}

#[test]
fn test_case_sensitive_names() {
    assert_eq!(run_eval("g"), "9.80665");
    assert_eq!(run_eval("G"), "6.6743e-11");
    assert!(test_eval("C").is_err());
}

#[test]
fn test_constant_expressions() {
    assert_eq!(run_eval("h / (2 * pi)"), "1.05457181765e-34");
    assert_eq!(run_eval("NA * k"), "8.31446261815");
}
