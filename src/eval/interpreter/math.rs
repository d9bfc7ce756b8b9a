use super::EvalError;
use crate::config::AngleMode;

/// Whitelisted math functions understood by the evaluator
///
/// Names are the canonical (rewritten) spellings, matching the `f64` methods
/// that implement them. User-facing aliases such as `log` and `pow` are mapped
/// onto these by [`crate::eval::rewrite`] before parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathFunc {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log10,
    Ln,
    Exp,
    Powf,
    Abs,
    Floor,
    Ceil,
}

/// Canonical function names, longest first
pub const SUPPORTED_MATH_FUNCS: &[&str] = &[
    "log10", "floor", "asin", "acos", "atan", "sqrt", "powf", "ceil", "sin", "cos", "tan", "exp",
    "abs", "ln",
];

impl MathFunc {
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => MathFunc::Sin,
            "cos" => MathFunc::Cos,
            "tan" => MathFunc::Tan,
            "asin" => MathFunc::Asin,
            "acos" => MathFunc::Acos,
            "atan" => MathFunc::Atan,
            "sqrt" => MathFunc::Sqrt,
            "log10" => MathFunc::Log10,
            "ln" => MathFunc::Ln,
            "exp" => MathFunc::Exp,
            "powf" => MathFunc::Powf,
            "abs" => MathFunc::Abs,
            "floor" => MathFunc::Floor,
            "ceil" => MathFunc::Ceil,
            _ => return None,
        };
        Some(func)
    }

    pub fn name(self) -> &'static str {
        match self {
            MathFunc::Sin => "sin",
            MathFunc::Cos => "cos",
            MathFunc::Tan => "tan",
            MathFunc::Asin => "asin",
            MathFunc::Acos => "acos",
            MathFunc::Atan => "atan",
            MathFunc::Sqrt => "sqrt",
            MathFunc::Log10 => "log10",
            MathFunc::Ln => "ln",
            MathFunc::Exp => "exp",
            MathFunc::Powf => "powf",
            MathFunc::Abs => "abs",
            MathFunc::Floor => "floor",
            MathFunc::Ceil => "ceil",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            MathFunc::Powf => 2,
            _ => 1,
        }
    }

    /// Apply the function to already-evaluated arguments
    ///
    /// Arity is checked by the parser; this re-checks it so the function is
    /// safe to call on hand-built trees. Inputs outside the real domain are
    /// reported as [`EvalError::Domain`] instead of yielding NaN.
    pub fn apply(
        self,
        args: &[f64],
        angle_mode: AngleMode,
    ) -> Result<f64, EvalError> {
        if args.len() != self.arity() {
            return Err(EvalError::Arity {
                func: self.name().to_string(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        let x = args[0];

        let value = match self {
            MathFunc::Sin => angle_mode.to_radians(x).sin(),
            MathFunc::Cos => angle_mode.to_radians(x).cos(),
            MathFunc::Tan => angle_mode.to_radians(x).tan(),
            MathFunc::Asin | MathFunc::Acos => {
                if !(-1.0..=1.0).contains(&x) {
                    log::debug!("[math] {}({}) outside [-1, 1]", self.name(), x);
                    return Err(EvalError::domain(
                        self.name(),
                        format!("{}() argument must be in [-1, 1], got {}", self.name(), x),
                    ));
                }
                let radians = if self == MathFunc::Asin {
                    x.asin()
                } else {
                    x.acos()
                };
                angle_mode.unit_from_radians(radians)
            }
            MathFunc::Atan => angle_mode.unit_from_radians(x.atan()),
            MathFunc::Sqrt => {
                if x < 0.0 {
                    return Err(EvalError::domain(
                        "sqrt",
                        format!("square root of a negative number ({})", x),
                    ));
                }
                x.sqrt()
            }
            MathFunc::Log10 => {
                if x <= 0.0 {
                    return Err(EvalError::domain(
                        "log10",
                        format!("logarithm requires a positive number, got {}", x),
                    ));
                }
                x.log10()
            }
            MathFunc::Ln => {
                if x <= 0.0 {
                    return Err(EvalError::domain(
                        "ln",
                        format!("natural logarithm requires a positive number, got {}", x),
                    ));
                }
                x.ln()
            }
            MathFunc::Exp => x.exp(),
            MathFunc::Powf => checked_pow("powf", x, args[1])?,
            MathFunc::Abs => x.abs(),
            MathFunc::Floor => x.floor(),
            MathFunc::Ceil => x.ceil(),
        };

        log::trace!("[math] {}({:?}) = {}", self.name(), args, value);
        Ok(value)
    }
}

/// Divide, reporting a zero divisor as a domain error
pub(crate) fn checked_div(
    lhs: f64,
    rhs: f64,
) -> Result<f64, EvalError> {
    if rhs == 0.0 {
        return Err(EvalError::domain("/", "division by zero"));
    }
    Ok(lhs / rhs)
}

/// Raise `base` to `exponent`, reporting a complex result as a domain error
///
/// A negative base only has a real power for integer exponents. Overflow is
/// not an error here and yields infinity.
pub(crate) fn checked_pow(
    func: &str,
    base: f64,
    exponent: f64,
) -> Result<f64, EvalError> {
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::domain(
            func,
            format!(
                "negative base {} raised to non-integer power {}",
                base, exponent
            ),
        ));
    }
    Ok(base.powf(exponent))
}
