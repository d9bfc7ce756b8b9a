/// Significant digits kept when displaying a result
pub const DEFAULT_PRECISION: usize = 12;

/// Largest precision that still changes anything for an f64
const MAX_PRECISION: usize = 17;

/// Format an evaluation result for display
///
/// Non-finite values become words rather than host float tokens:
/// - NaN → `"Error"`
/// - ±∞ → `"Infinity"`
///
/// Finite values are rounded to `precision` significant digits and rendered
/// in shortest form, so floating-point noise disappears:
/// `0.1 + 0.2` → `"0.3"`, `1024.0` → `"1024"`.
pub fn format_result(
    value: f64,
    precision: usize,
) -> String {
    if value.is_nan() {
        return "Error".to_string();
    }
    if value.is_infinite() {
        return "Infinity".to_string();
    }
    format_number(round_significant(value, precision))
}

/// Round to `precision` significant digits
///
/// Goes through the `{:e}` formatter so rounding happens in decimal, the same
/// digits a user would see, rather than by scaling with powers of ten.
pub fn round_significant(
    value: f64,
    precision: usize,
) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let digits = precision.clamp(1, MAX_PRECISION);
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Shortest decimal literal that reads back as the same f64
///
/// Plain notation for magnitudes in `[1e-6, 1e21)`, scientific notation with
/// an explicit exponent sign outside it (`6.62607015e-34`, `1e+21`).
/// Negative zero prints as `"0"`. The output is always accepted by the
/// expression lexer.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        signed_exponent(format!("{:e}", value))
    }
}

/// Exponential notation with a fixed number of fractional digits
///
/// `format_exponential(2.99792458e8, 6)` → `"2.997925e+8"`.
pub fn format_exponential(
    value: f64,
    fraction_digits: usize,
) -> String {
    if !value.is_finite() {
        return format_result(value, DEFAULT_PRECISION);
    }
    signed_exponent(format!("{:.*e}", fraction_digits, value))
}

// Rust prints `1e21`; the console shows `1e+21`
fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
