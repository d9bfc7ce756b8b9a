//! Syntax rewriting: console spellings → evaluator spellings
//!
//! Runs after substitution and before parsing. Function names are rewritten
//! only at a word boundary and only when followed by `(`, so numeric literals
//! produced by substitution are never touched.

use super::interpreter::math::SUPPORTED_MATH_FUNCS;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Console function name → canonical evaluator name
pub const FUNCTION_REWRITES: &[(&str, &str)] = &[
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("sqrt", "sqrt"),
    ("log", "log10"),
    ("ln", "ln"),
    ("pow", "powf"),
    ("abs", "abs"),
];

static FUNCTION_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_function_regex() -> &'static Regex {
    FUNCTION_REGEX.get_or_init(|| {
        let names: Vec<&str> = FUNCTION_REWRITES.iter().map(|(from, _)| *from).collect();
        let pattern = format!(r"\b({})\s*\(", names.join("|"));
        Regex::new(&pattern).expect("Function rewrite regex should be valid")
    })
}

/// True for any name usable as a function call, console or canonical spelling
pub fn is_function_name(name: &str) -> bool {
    FUNCTION_REWRITES.iter().any(|(from, _)| *from == name) || SUPPORTED_MATH_FUNCS.contains(&name)
}

/// Rewrite console function names to canonical ones and `^` to `**`
///
/// Purely textual: argument lists and nesting are left for the parser.
pub fn rewrite_syntax(input: &str) -> String {
    let rewritten = get_function_regex().replace_all(input, |caps: &Captures| {
        let name = &caps[1];
        let canonical = FUNCTION_REWRITES
            .iter()
            .find(|(from, _)| *from == name)
            .map_or(name, |(_, to)| *to);
        format!("{}(", canonical)
    });
    rewritten.replace('^', "**")
}
