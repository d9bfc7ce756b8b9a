use crate::eval::interpreter::EvalError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid variable name '{0}' (names must match [A-Za-z_][A-Za-z0-9_]*)")]
    InvalidVariableName(String),

    #[error("Constant '{0}' not found. Type 'constants' to see all available constants.")]
    UnknownConstant(String),

    #[error("{source}")]
    Eval {
        expr: String,
        #[source]
        source: EvalError,
    },

    #[error("Cannot assign {value} to '{name}': result is not a finite number")]
    NonFiniteAssignment { name: String, value: String },

    #[error("Terminal session is not open")]
    SessionClosed,
}

impl ConsoleError {
    /// The evaluation error underneath, if this failure came from the evaluator
    pub fn eval_error(&self) -> Option<&EvalError> {
        match self {
            ConsoleError::Eval { source, .. } => Some(source),
            _ => None,
        }
    }
}
