//! Session configuration through the builder
mod common;
use crate::common::*;
use sciconsole::{AngleMode, Session, SessionConfig};

#[test]
fn test_builder_defaults_match_new() {
    let built = Session::builder().build();
    assert_eq!(built.config(), Session::new().config());
    assert_eq!(built.config(), &SessionConfig::default());
}

#[test]
fn test_builder_precision() {
    test_init();
    let mut session = Session::builder().with_precision(3).build();
    session.open();
    assert_console_output!(session, "pi", "3.14");
    assert_console_output!(session, "x = 2 / 3", "x = 0.667");
    assert_eq!(session.variables().get("x"), Some(0.667));
}

#[test]
fn test_builder_angle_mode() {
    test_init();
    let mut session = Session::builder()
        .with_angle_mode(AngleMode::Degrees)
        .build();
    session.open();
    assert_console_output!(session, "cos(180)", "-1");
    assert_eq!(session.config().angle_mode, AngleMode::Degrees);
}

#[test]
fn test_builder_chaining() {
    let session = Session::builder()
        .with_precision(20)
        .with_history_capacity(5)
        .with_angle_mode(AngleMode::Radians)
        .build();
    assert_eq!(session.config().precision, 17);
    assert_eq!(session.history().capacity(), 5);
}
