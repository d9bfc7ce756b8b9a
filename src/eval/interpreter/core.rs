use super::ast::{BinaryOp, Expr};
use super::math::{checked_div, checked_pow};
use super::parsing::parse_expression;
use super::EvalError;
use crate::config::AngleMode;
use crate::eval::rewrite::rewrite_syntax;
use crate::eval::symbols::{substitute_symbols, VariableTable};

/// Evaluate a parsed expression tree
///
/// Arithmetic only: the tree holds numbers, operators and whitelisted calls,
/// so evaluation has no access to session state or I/O.
pub fn evaluate_ast(
    expr: &Expr,
    angle_mode: AngleMode,
) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Neg(inner) => Ok(-evaluate_ast(inner, angle_mode)?),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate_ast(lhs, angle_mode)?;
            let rhs = evaluate_ast(rhs, angle_mode)?;
            match op {
                BinaryOp::Add => Ok(lhs + rhs),
                BinaryOp::Sub => Ok(lhs - rhs),
                BinaryOp::Mul => Ok(lhs * rhs),
                BinaryOp::Div => checked_div(lhs, rhs),
                BinaryOp::Pow => checked_pow("**", lhs, rhs),
            }
        }
        Expr::Call { func, args } => {
            let values = args
                .iter()
                .map(|arg| evaluate_ast(arg, angle_mode))
                .collect::<Result<Vec<_>, _>>()?;
            func.apply(&values, angle_mode)
        }
    }
}

/// Parse and evaluate an already rewritten expression
///
/// This is the evaluation phase alone: identifiers other than whitelisted
/// function calls are rejected, nothing is substituted here.
pub fn evaluate_expression(
    expr: &str,
    angle_mode: AngleMode,
) -> Result<f64, EvalError> {
    let ast = parse_expression(expr)?;
    let value = evaluate_ast(&ast, angle_mode)?;
    log::debug!("[evaluate_expression] {} = {}", ast, value);
    Ok(value)
}

/// Run the full pipeline on raw user input
///
/// 1. substitute variables and constants
/// 2. rewrite function names and `^`
/// 3. parse and evaluate
///
/// Each phase runs to completion before the next starts; the intermediate
/// strings are logged at debug level.
pub fn evaluate_pipeline(
    input: &str,
    constants: &[(&str, f64)],
    variables: &VariableTable,
    angle_mode: AngleMode,
) -> Result<f64, EvalError> {
    let substituted = substitute_symbols(input, constants, variables);
    log::debug!("[evaluate_pipeline] substituted: {}", substituted);

    let rewritten = rewrite_syntax(&substituted);
    log::debug!("[evaluate_pipeline] rewritten: {}", rewritten);

    evaluate_expression(&rewritten, angle_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::constants::PHYSICS_CONSTANTS;

    fn eval(input: &str) -> Result<f64, EvalError> {
        evaluate_pipeline(input, PHYSICS_CONSTANTS, &VariableTable::new(), AngleMode::Radians)
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(eval("2 + 3").unwrap(), 5.0);
        assert_eq!(eval("2^10").unwrap(), 1024.0);
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("(1 + 2) * -3").unwrap(), -9.0);
    }

    #[test]
    fn test_aliases_are_rewritten() {
        assert_eq!(eval("pow(2, 8)").unwrap(), 256.0);
        assert!((eval("log(1000)").unwrap() - 3.0).abs() < 1e-12);
        assert!((eval("ln(e_math)").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_expression_does_not_substitute() {
        let err = evaluate_expression("pi * 2", AngleMode::Radians).unwrap_err();
        assert_eq!(err, EvalError::UnknownSymbol("pi".to_string()));
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        assert!(matches!(eval("1/0"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("1/(2-2)"), Err(EvalError::Domain { .. })));
    }

    #[test]
    fn test_fractional_power_of_negative_is_domain_error() {
        assert!(matches!(eval("(-8)^(1/3)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("pow(-4, 0.5)"), Err(EvalError::Domain { .. })));
        assert_eq!(eval("(-2)^3").unwrap(), -8.0);
    }

    #[test]
    fn test_long_sum_is_rejected_not_overflowed() {
        let input = vec!["1"; 20_000].join("+");
        assert!(matches!(eval(&input), Err(EvalError::Syntax { .. })));
    }

    #[test]
    fn test_overflow_is_infinite_not_error() {
        assert_eq!(eval("10^400").unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_evaluate_ast_on_hand_built_tree() {
        let tree = Expr::binary(
            BinaryOp::Mul,
            Expr::Number(4.0),
            Expr::Neg(Box::new(Expr::Number(2.5))),
        );
        assert_eq!(evaluate_ast(&tree, AngleMode::Radians).unwrap(), -10.0);
    }
}
