//! Recursive-descent parser for rewritten arithmetic expressions
//!
//! Grammar (lowest → highest precedence):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | IDENT '(' args ')' | '(' expr ')'
//! ```
//!
//! Power binds tighter than unary minus and is right-associative, so
//! `-2^2 = -4`, `2^3^2 = 512` and `2^-1 = 0.5`.

use super::ast::{BinaryOp, Expr};
use super::math::MathFunc;
use super::EvalError;
use crate::eval::lexer::{tokenize, Token, TokenType};

/// Nesting limit for parentheses, unary signs, exponents and operator chains
///
/// Keeps pathological input like `((((...))))` or a sum of thousands of
/// terms from exhausting the stack when the tree is evaluated or dropped.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse an expression into an [`Expr`] tree
///
/// The input must already be substituted and rewritten: any identifier that
/// is not a call to a whitelisted function is an [`EvalError::UnknownSymbol`].
pub fn parse_expression(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::syntax(input, "empty expression"));
    }

    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_expr()?;

    if let Some(token) = parser.peek() {
        return Err(parser.unexpected(token));
    }

    log::trace!("[parse] '{}' -> {}", input, expr);
    Ok(expr)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is the given punctuation
    fn eat_punct(
        &mut self,
        punct: &str,
    ) -> bool {
        match self.peek() {
            Some(token) if token.kind == TokenType::Punct && token.text == punct => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_pow(&mut self) -> bool {
        match self.peek() {
            Some(token) if token.kind == TokenType::Pow => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn unexpected(
        &self,
        token: &Token,
    ) -> EvalError {
        EvalError::syntax(
            self.input,
            format!("unexpected '{}' at position {}", token.text, token.position),
        )
    }

    fn end_of_input(&self) -> EvalError {
        EvalError::syntax(self.input, "unexpected end of expression")
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(EvalError::syntax(
                self.input,
                format!("expression nested deeper than {} levels", MAX_NESTING_DEPTH),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expr(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_term()?;
        let mut chained = 0;
        loop {
            let op = if self.eat_punct("+") {
                BinaryOp::Add
            } else if self.eat_punct("-") {
                BinaryOp::Sub
            } else {
                break;
            };
            // Each operator nests the chain one level deeper
            self.enter()?;
            chained += 1;
            let rhs = self.parse_term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_unary()?;
        let mut chained = 0;
        loop {
            let op = if self.eat_punct("*") {
                BinaryOp::Mul
            } else if self.eat_punct("/") {
                BinaryOp::Div
            } else {
                break;
            };
            // Each operator nests the chain one level deeper
            self.enter()?;
            chained += 1;
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, EvalError> {
        if self.eat_punct("-") {
            self.enter()?;
            let inner = self.parse_unary()?;
            self.leave();
            return Ok(Expr::Neg(Box::new(inner)));
        }
        if self.eat_punct("+") {
            self.enter()?;
            let inner = self.parse_unary()?;
            self.leave();
            return Ok(inner);
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, EvalError> {
        let base = self.parse_primary()?;
        if self.eat_pow() {
            // Exponent goes through unary so `2^-1` and `2^3^2` both work
            self.enter()?;
            let exponent = self.parse_unary()?;
            self.leave();
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        let token = match self.advance() {
            Some(token) => token,
            None => return Err(self.end_of_input()),
        };

        match token.kind {
            TokenType::Number => token
                .text
                .parse::<f64>()
                .map(Expr::Number)
                .map_err(|e| {
                    EvalError::syntax(
                        self.input,
                        format!("invalid number '{}': {}", token.text, e),
                    )
                }),
            TokenType::Ident => {
                if !self.eat_punct("(") {
                    return Err(EvalError::UnknownSymbol(token.text));
                }
                let func = MathFunc::from_name(&token.text)
                    .ok_or_else(|| EvalError::UnknownFunction(token.text.clone()))?;
                let args = self.parse_call_args()?;
                if args.len() != func.arity() {
                    return Err(EvalError::Arity {
                        func: func.name().to_string(),
                        expected: func.arity(),
                        got: args.len(),
                    });
                }
                Ok(Expr::Call { func, args })
            }
            TokenType::Punct if token.text == "(" => {
                self.enter()?;
                let inner = self.parse_expr()?;
                self.leave();
                if !self.eat_punct(")") {
                    return Err(match self.peek() {
                        Some(next) => self.unexpected(next),
                        None => EvalError::syntax(
                            self.input,
                            format!("unclosed '(' at position {}", token.position),
                        ),
                    });
                }
                Ok(inner)
            }
            _ => Err(self.unexpected(&token)),
        }
    }

    /// Arguments after an already-consumed `(`, through the closing `)`
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = Vec::new();
        if self.eat_punct(")") {
            return Ok(args);
        }

        self.enter()?;
        loop {
            args.push(self.parse_expr()?);
            if self.eat_punct(",") {
                continue;
            }
            if self.eat_punct(")") {
                break;
            }
            self.leave();
            return Err(match self.peek() {
                Some(next) => self.unexpected(next),
                None => self.end_of_input(),
            });
        }
        self.leave();
        Ok(args)
    }
}
