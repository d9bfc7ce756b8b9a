mod common;
use crate::common::*;

#[test]
fn test_assign_and_reuse() {
    let mut session = open_session();
    assert_console_output!(session, "a = 5", "a = 5");
    assert_console_output!(session, "b = a * 2", "b = 10");
    assert_console_output!(session, "variables", "Stored Variables:\na = 5\nb = 10");
}

#[test]
fn test_assignment_echo_is_rounded_value() {
    let mut session = open_session();
    assert_console_output!(session, "x = 0.1 + 0.2", "x = 0.3");
    assert_eq!(session.variables().get("x"), Some(0.3));
    assert_console_output!(session, "x * 10", "3");
}

#[test]
fn test_energy_example() {
    let mut session = open_session();
    assert_console_output!(session, "E = me * c^2", "E = 8.18710577682e-14");
}

#[test]
fn test_variable_shadows_constant() {
    let mut session = open_session();
    assert_console_output!(session, "pi = 3", "pi = 3");
    assert_console_output!(session, "pi", "3");
    assert_console_output!(session, "pi", "3");
    assert_console_output!(session, "2 * pi", "6");
}

#[test]
fn test_reassignment_keeps_listing_order() {
    let mut session = open_session();
    run_lines(&mut session, &["a = 1", "b = 2", "a = 3"]);
    assert_console_output!(session, "variables", "Stored Variables:\na = 3\nb = 2");
}

#[test]
fn test_negative_variable_in_power() {
    let mut session = open_session();
    run_line(&mut session, "x = -3");
    assert_console_output!(session, "x^2", "9");
    assert_console_output!(session, "-x", "3");
}

#[test]
fn test_invalid_name_leaves_table_unchanged() {
    let mut session = open_session();
    run_line(&mut session, "a = 1");
    assert_console_error!(session, "2x = 1", "Invalid variable name '2x'");
    assert_console_error!(session, "my var = 1", "Invalid variable name");
    assert_console_error!(session, "= 4", "Invalid variable name ''");
    assert_eq!(session.variables().len(), 1);
    assert_eq!(session.variables().get("a"), Some(1.0));
}

#[test]
fn test_failed_evaluation_does_not_assign() {
    let mut session = open_session();
    assert_console_error!(session, "y = undefined_thing * 2", "Unknown symbol 'undefined_thing'");
    assert_console_error!(session, "y = 10^400", "not a finite number");
    assert!(session.variables().is_empty());
}

#[test]
fn test_double_equals_is_not_assignment() {
    let mut session = open_session();
    assert_console_error!(session, "x == 5", "Invalid expression");
    assert!(session.variables().is_empty());
}

#[test]
fn test_variable_named_like_function() {
    let mut session = open_session();
    run_line(&mut session, "sin = 2");
    assert_console_output!(session, "sin(0)", "0");
    assert_console_output!(session, "sin * 3", "6");
}

#[test]
fn test_sessions_are_independent() {
    let mut first = open_session();
    let mut second = open_session();
    run_line(&mut first, "x = 1");
    assert_console_error!(second, "x", "Unknown symbol 'x'");
    assert_console_output!(first, "x", "1");
}

#[test]
fn test_close_discards_variables() {
    let mut session = open_session();
    run_line(&mut session, "x = 1");
    session.close();
    session.open();
    assert_console_output!(session, "variables", "No variables stored");
}
