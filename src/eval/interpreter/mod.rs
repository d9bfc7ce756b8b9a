pub mod ast;
pub mod core;
pub mod format;
pub mod math;
pub mod parsing;

// Re-export public format utilities
pub use format::{
    format_exponential, format_number, format_result, round_significant, DEFAULT_PRECISION,
};

// Re-export public core evaluation functions
pub use self::core::{evaluate_ast, evaluate_expression, evaluate_pipeline};

pub use math::MathFunc;
pub use parsing::parse_expression;

/// Maximum number of characters of an expression quoted back in an error
const SNIPPET_LIMIT: usize = 100;

/// Truncate text to a safe length respecting UTF-8 boundaries
///
/// Used for error messages to prevent overwhelming output while ensuring
/// we don't panic on UTF-8 character boundaries.
pub(crate) fn truncate_snippet(text: &str) -> String {
    if text.len() > SNIPPET_LIMIT {
        let mut end_idx = SNIPPET_LIMIT;
        while !text.is_char_boundary(end_idx) {
            end_idx -= 1;
        }
        format!("{}...", &text[..end_idx])
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Invalid expression: {message}")]
    Syntax { expr: String, message: String },

    #[error("Unknown symbol '{0}'")]
    UnknownSymbol(String),

    #[error("Unknown function '{0}()'")]
    UnknownFunction(String),

    #[error("{func}() expects {expected} argument(s), got {got}")]
    Arity {
        func: String,
        expected: usize,
        got: usize,
    },

    #[error("Math domain error: {message}")]
    Domain { func: String, message: String },
}

impl EvalError {
    pub(crate) fn syntax(
        expr: &str,
        message: impl Into<String>,
    ) -> Self {
        EvalError::Syntax {
            expr: truncate_snippet(expr),
            message: message.into(),
        }
    }

    pub(crate) fn domain(
        func: &str,
        message: impl Into<String>,
    ) -> Self {
        EvalError::Domain {
            func: func.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_snippet_short_text_unchanged() {
        assert_eq!(truncate_snippet("2 + 3"), "2 + 3");
    }

    #[test]
    fn test_truncate_snippet_respects_char_boundary() {
        // 99 ASCII bytes followed by a 2-byte char straddling the limit
        let text = format!("{}é{}", "a".repeat(99), "b".repeat(10));
        let snippet = truncate_snippet(&text);
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.len(), 99 + 3);
    }

    #[test]
    fn test_error_messages_are_single_line() {
        let errors = [
            EvalError::syntax("2 +", "unexpected end of expression"),
            EvalError::UnknownSymbol("x".to_string()),
            EvalError::UnknownFunction("sinh".to_string()),
            EvalError::Arity {
                func: "powf".to_string(),
                expected: 2,
                got: 1,
            },
            EvalError::domain("/", "division by zero"),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'), "multi-line: {}", err);
        }
    }
}
