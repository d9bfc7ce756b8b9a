//! Terminal command recognition and canned output
//!
//! Literal commands bypass the evaluator entirely. Keywords match
//! case-insensitively; the argument of `const` keeps its case because
//! constant names are case-sensitive (`G` vs `g`).

use crate::eval::interpreter::{format_exponential, format_number};
use crate::eval::symbols::VariableTable;

/// Keywords that are handled without evaluation
pub const COMMAND_KEYWORDS: &[&str] = &["help", "clear", "constants", "variables", "const"];

/// Width the constant names are padded to in the `constants` listing
const CONSTANT_NAME_WIDTH: usize = 12;

/// Fractional digits shown for each constant in the `constants` listing
const CONSTANT_LISTING_DIGITS: usize = 6;

/// One classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Clear,
    Constants,
    Variables,
    LookupConstant(&'a str),
    Assign { name: &'a str, expr: &'a str },
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a raw input line; `None` for a blank line
    ///
    /// A line containing `=` but no `==` is an assignment, split at the first
    /// `=`. The name is not validated here.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let keyword = line.to_ascii_lowercase();
        let command = match keyword.as_str() {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "constants" => Command::Constants,
            "variables" => Command::Variables,
            _ if keyword.starts_with("const ") => Command::LookupConstant(line[6..].trim()),
            _ => match line.split_once('=') {
                Some((name, expr)) if !line.contains("==") => Command::Assign {
                    name: name.trim(),
                    expr: expr.trim(),
                },
                _ => Command::Evaluate(line),
            },
        };
        Some(command)
    }
}

/// Lines shown when a session opens and after `clear`
pub fn welcome_banner() -> Vec<String> {
    vec![
        "Scientific Programming Console v1.0".to_string(),
        "Type \"help\" for commands, \"constants\" for physics constants".to_string(),
        "Examples: 2 + 3, c * 1e-9, E = me * c^2".to_string(),
        String::new(),
    ]
}

pub fn help_text() -> &'static str {
    "Available Commands:
help - Show this help text
clear - Clear terminal output
constants - Show all physics constants
variables - Show all stored variables
const <name> - Look up specific constant

Mathematical Operations:
Basic: +, -, *, /, ^, ()
Functions: sin(), cos(), tan(), sqrt(), log(), ln(), pow(), abs()
Constants: c, h, e, me, mp, k, G, pi, etc.
Variables: x = 5, result = x * c

Examples:
E = me * c^2
lambda = h / (me * c)
F = ke * e^2 / (4 * pi * epsilon0 * r^2)"
}

/// `constants` listing: padded name and 6-digit exponential value per line
pub fn constants_text(constants: &[(&str, f64)]) -> String {
    let mut text = String::from("Physics Constants:");
    for (name, value) in constants {
        text.push('\n');
        text.push_str(&format!(
            "{:<width$} = {}",
            name,
            format_exponential(*value, CONSTANT_LISTING_DIGITS),
            width = CONSTANT_NAME_WIDTH
        ));
    }
    text
}

/// `variables` listing in assignment order
pub fn variables_text(variables: &VariableTable) -> String {
    if variables.is_empty() {
        return "No variables stored".to_string();
    }
    let mut text = String::from("Stored Variables:");
    for (name, value) in variables.iter() {
        text.push('\n');
        text.push_str(&format!("{} = {}", name, format_number(value)));
    }
    text
}
