//! Session variables and whole-word symbol substitution
//!
//! Substitution is the first pipeline phase: every identifier that names a
//! variable or constant is replaced by a decimal literal before the text is
//! rewritten and parsed.

use super::constants::lookup_constant;
use super::interpreter::format_number;
use super::rewrite::is_function_name;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Identifier at a word boundary, plus an optional call paren after it
///
/// `\b` cannot fall between a digit and a letter, so the exponent marker in
/// `2.99e8` or `1e-9` is never taken for an identifier.
static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();
static VALID_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| {
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\b(\s*\()?")
            .expect("Identifier regex should be valid")
    })
}

fn get_valid_name_regex() -> &'static Regex {
    VALID_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Variable name regex should be valid")
    })
}

/// Check a user-chosen name against `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_identifier(name: &str) -> bool {
    get_valid_name_regex().is_match(name)
}

/// Variables assigned in one terminal session
///
/// Keeps assignment order for listing; re-assigning a name overwrites the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: IndexMap<String, f64>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Store `value` under `name`, returning the previous value if any
    pub fn set(
        &mut self,
        name: &str,
        value: f64,
    ) -> Option<f64> {
        self.values.insert(name.to_string(), value)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Render a value so it can be pasted into an expression
///
/// Negative values are parenthesised so `x^2` with `x = -3` reads `(-3)^2`.
pub fn render_literal(value: f64) -> String {
    let text = format_number(value);
    if text.starts_with('-') {
        format!("({})", text)
    } else {
        text
    }
}

/// Replace whole-word variable and constant names with their values
///
/// Lookup order is variables, then constants: a session variable shadows a
/// constant of the same name. Replacement is a single left-to-right pass, so
/// substituted text is never scanned again. Names of whitelisted functions
/// directly followed by `(` are calls and are left alone; unknown identifiers
/// are left in place for the parser to report.
pub fn substitute_symbols(
    input: &str,
    constants: &[(&str, f64)],
    variables: &VariableTable,
) -> String {
    get_identifier_regex()
        .replace_all(input, |caps: &Captures| {
            let name = &caps[1];
            let call_paren = caps.get(2).map_or("", |m| m.as_str());

            if !call_paren.is_empty() && is_function_name(name) {
                return caps[0].to_string();
            }

            let value = variables
                .get(name)
                .or_else(|| lookup_constant(constants, name));
            match value {
                Some(value) => {
                    let literal = render_literal(value);
                    log::trace!("[substitute] {} -> {}", name, literal);
                    format!("{}{}", literal, call_paren)
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
