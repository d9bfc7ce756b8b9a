// Common test helpers for sciconsole integration tests
//
// - Session helpers: open_session(), run_line(), run_lines()
// - Assertion macros: assert_console_output!, assert_console_error!
//
// Macros (not functions) for assertions keep call-site line numbers.

use sciconsole::{ConsoleError, Response, Session};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment (logging).
///
/// Safe to call multiple times - initialization happens only once.
#[allow(dead_code)]
pub fn test_init() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Fresh session that is already open, with default settings.
#[allow(dead_code)]
pub fn open_session() -> Session {
    test_init();
    let mut session = Session::new();
    session.open();
    session
}

/// Execute one line and return its output as a single string.
///
/// Text and error responses are returned as-is, a blank line gives `""`,
/// and `clear` gives the redisplayed banner joined by newlines.
#[allow(dead_code)]
pub fn run_line(
    session: &mut Session,
    line: &str,
) -> String {
    match session.execute(line) {
        Response::None => String::new(),
        Response::Text(text) | Response::Error(text) => text,
        Response::Clear(banner) => banner.join("\n"),
    }
}

/// Execute several lines in order, returning the output of the last one.
#[allow(dead_code)]
pub fn run_lines(
    session: &mut Session,
    lines: &[&str],
) -> String {
    let mut last = String::new();
    for line in lines {
        last = run_line(session, line);
    }
    last
}

/// Evaluate an expression in a fresh session, returning the Result.
#[allow(dead_code)]
pub fn test_eval(expr: &str) -> Result<String, ConsoleError> {
    open_session().evaluate(expr)
}

/// Evaluate an expression in a fresh session and expect success.
#[allow(dead_code)]
pub fn run_eval(expr: &str) -> String {
    test_eval(expr).unwrap_or_else(|e| panic!("'{}' should evaluate: {}", expr, e))
}

// =============================================================================
// Assertion Macros (preserve call-site line numbers)
// =============================================================================

/// Assert that executing a line prints exactly the expected text.
///
/// ```ignore
/// assert_console_output!(session, "2 + 3", "5");
/// ```
#[macro_export]
macro_rules! assert_console_output {
    ($session:expr, $line:expr, $expected:expr) => {{
        let actual = $crate::common::run_line(&mut $session, $line);
        if actual != $expected {
            panic!(
                "\nAssertion failed: console output mismatch\n\
                 Input: \"{}\"\n\
                 Expected: \"{}\"\n\
                 Actual: \"{}\"\n",
                $line, $expected, actual
            );
        }
    }};
}

/// Assert that executing a line renders an error containing a substring.
///
/// ```ignore
/// assert_console_error!(session, "1/0", "division by zero");
/// ```
#[macro_export]
macro_rules! assert_console_error {
    ($session:expr, $line:expr, $expected_msg:expr) => {{
        match $session.execute($line) {
            sciconsole::Response::Error(message) => {
                if !message.starts_with("Error: ") || !message.contains($expected_msg) {
                    panic!(
                        "\nAssertion failed: error message mismatch\n\
                         Input: \"{}\"\n\
                         Expected substring: \"{}\"\n\
                         Actual error: \"{}\"\n",
                        $line, $expected_msg, message
                    );
                }
            }
            other => {
                panic!(
                    "\nAssertion failed: expected an error response\n\
                     Input: \"{}\"\n\
                     Actual response: {:?}\n",
                    $line, other
                );
            }
        }
    }};
}

/// Assert that text contains a substring, showing the full text on failure.
#[macro_export]
macro_rules! assert_console_contains {
    ($output:expr, $expected:expr) => {
        if !$output.contains($expected) {
            panic!(
                "\nAssertion failed: output does not contain expected string\n\
                 Expected substring: \"{}\"\n\
                 Actual output:\n{}\n",
                $expected, $output
            );
        }
    };
}
