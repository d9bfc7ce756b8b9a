#![forbid(unsafe_code)]
// #![warn(clippy::pedantic)]
#![warn(clippy::alloc_instead_of_core)]
#![warn(clippy::std_instead_of_core)]

pub mod commands;
pub mod config;
pub mod error;
pub mod eval;
pub mod history;
pub mod session;

pub use config::{AngleMode, SessionBuilder, SessionConfig};
pub use error::ConsoleError;
pub use eval::{EvalError, VariableTable};
pub use history::CommandHistory;
pub use session::{Response, Session, SessionState};

/// Evaluate one expression in a fresh session
///
/// Only constants are available; use a [`Session`] to keep variables.
pub fn evaluate(expr: &str) -> Result<String, ConsoleError> {
    Session::new().evaluate(expr)
}
