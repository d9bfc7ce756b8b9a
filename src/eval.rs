pub mod constants;
pub mod interpreter;
pub(crate) mod lexer;
pub mod rewrite;
pub mod symbols;

pub use interpreter::{evaluate_pipeline, EvalError};
pub use symbols::VariableTable;
