use super::interpreter::EvalError;
use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static IDENT_REGEX: OnceLock<Regex> = OnceLock::new();
static POW_REGEX: OnceLock<Regex> = OnceLock::new();
static PUNCT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"^\s+").unwrap())
}

fn get_number_regex() -> &'static Regex {
    // Decimal literal with optional exponent: 12, 2., .5, 2.99e8, 1e-9
    //
    // The exponent group only matches when digits follow it, so `2e` lexes
    // as Number(2) followed by Ident(e) and fails in the parser.
    NUMBER_REGEX.get_or_init(|| Regex::new(r"^(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap())
}

fn get_ident_regex() -> &'static Regex {
    IDENT_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap())
}

fn get_pow_regex() -> &'static Regex {
    // `**` must be tried before the single `*` in PUNCT
    POW_REGEX.get_or_init(|| Regex::new(r"^(\*\*|\^)").unwrap())
}

fn get_punct_regex() -> &'static Regex {
    PUNCT_REGEX.get_or_init(|| Regex::new(r"^[-+*/(),]").unwrap())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TokenType {
    Number,
    Ident,
    Pow,
    Punct,
}

/// One lexed token with its byte offset in the source expression.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenType,
    pub text: String,
    pub position: usize,
}

pub(crate) struct Lexer<'a> {
    input_str: &'a str,
    regexes: Vec<(TokenType, &'static Regex)>,
    position: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str) -> Self {
        Lexer {
            input_str,
            regexes: vec![
                (TokenType::Number, get_number_regex()),
                (TokenType::Ident, get_ident_regex()),
                (TokenType::Pow, get_pow_regex()),
                (TokenType::Punct, get_punct_regex()),
            ],
            position: 0,
            failed: false,
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(m) = get_whitespace_regex().find(&self.input_str[self.position..]) {
            self.position += m.end();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Stop after the first error so callers collecting into a Result see it once
        if self.failed {
            return None;
        }

        self.skip_whitespace();
        if self.position >= self.input_str.len() {
            return None;
        }

        let remaining = &self.input_str[self.position..];
        for (token_type, regex) in self.regexes.iter() {
            if let Some(m) = regex.find(remaining) {
                debug_assert_eq!(
                    m.start(),
                    0,
                    "Regex matched at offset {} instead of 0 - regex must be anchored with ^",
                    m.start()
                );

                let token = Token {
                    kind: *token_type,
                    text: m.as_str().to_string(),
                    position: self.position,
                };
                self.position += m.end();
                log::trace!("[lexer] {:?} '{}' at {}", token.kind, token.text, token.position);
                return Some(Ok(token));
            }
        }

        // Nothing matched: report the offending character instead of silently stopping
        self.failed = true;
        let ch = remaining.chars().next().unwrap_or('?');
        Some(Err(EvalError::syntax(
            self.input_str,
            format!("unexpected character '{}' at position {}", ch, self.position),
        )))
    }
}

/// Tokenize a full expression, failing on the first unrecognised character
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    Lexer::new(input).collect()
}
