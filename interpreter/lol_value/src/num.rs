//! Numeric literal parsing and operand resolution.
//!
//! Integer parsing accepts an optional sign and a `0x`/`0o`/`0b` radix
//! prefix; the same helper backs both the lexer's literal classification
//! and string-to-number coercion in arithmetic, so `"0x10"` means 16 in
//! both positions.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;

/// Parse an integer literal with optional sign and radix prefix.
pub fn parse_numbr(text: &str) -> Option<i64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => return text.parse().ok(),
    };
    if digits.is_empty() {
        return None;
    }
    // Re-attach the sign so `from_str_radix` handles i64::MIN correctly.
    let mut signed = String::with_capacity(digits.len() + 1);
    if text.starts_with('-') {
        signed.push('-');
    }
    signed.push_str(digits);
    i64::from_str_radix(&signed, radix).ok()
}

/// Parse a float literal. Accepts everything `f64::from_str` does,
/// including a trailing dot (`2.`) and exponent forms.
pub fn parse_numbar(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// An arithmetic operand after coercion: definitely a number, tagged with
/// the kind that decides integer-vs-float operator selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Widen to a float, for when the other operand forces float context.
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(n) => n as f64,
            Numeric::Float(x) => x,
        }
    }
}

/// Resolve a value into an arithmetic operand.
///
/// `NUMBR`/`NUMBAR` pass through. A `YARN` is parsed integer-first, then
/// as a float; a string that is neither is a fatal parse error. `TROOF`
/// and `NOOB` are type errors for arithmetic.
pub fn resolve_numeric(value: &Value) -> EvalResult<Numeric> {
    match value {
        Value::Numbr(n) => Ok(Numeric::Int(*n)),
        Value::Numbar(x) => Ok(Numeric::Float(*x)),
        Value::Yarn(s) => parse_numbr(s)
            .map(Numeric::Int)
            .or_else(|| parse_numbar(s).map(Numeric::Float))
            .ok_or_else(|| EvalError::NumericParse(s.clone())),
        other => Err(EvalError::non_numeric(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_radixes() {
        assert_eq!(parse_numbr("0"), Some(0));
        assert_eq!(parse_numbr("42"), Some(42));
        assert_eq!(parse_numbr("-42"), Some(-42));
        assert_eq!(parse_numbr("+7"), Some(7));
        assert_eq!(parse_numbr("0x10"), Some(16));
        assert_eq!(parse_numbr("-0xFF"), Some(-255));
        assert_eq!(parse_numbr("0o17"), Some(15));
        assert_eq!(parse_numbr("0b101"), Some(5));
        assert_eq!(parse_numbr("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_numbr("-0x8000000000000000"), Some(i64::MIN));
    }

    #[test]
    fn integer_rejects() {
        assert_eq!(parse_numbr(""), None);
        assert_eq!(parse_numbr("0x"), None);
        assert_eq!(parse_numbr("2.5"), None);
        assert_eq!(parse_numbr("abc"), None);
        assert_eq!(parse_numbr("1 2"), None);
    }

    #[test]
    fn float_forms() {
        assert_eq!(parse_numbar("2."), Some(2.0));
        assert_eq!(parse_numbar("0.25"), Some(0.25));
        assert_eq!(parse_numbar("-1e3"), Some(-1000.0));
        assert_eq!(parse_numbar("x"), None);
    }

    #[test]
    fn resolution() {
        assert_eq!(resolve_numeric(&Value::Numbr(3)), Ok(Numeric::Int(3)));
        assert_eq!(
            resolve_numeric(&Value::Numbar(1.5)),
            Ok(Numeric::Float(1.5))
        );
        assert_eq!(resolve_numeric(&Value::yarn("5")), Ok(Numeric::Int(5)));
        assert_eq!(
            resolve_numeric(&Value::yarn("2.0")),
            Ok(Numeric::Float(2.0))
        );
        assert_eq!(
            resolve_numeric(&Value::yarn("fish")),
            Err(EvalError::NumericParse("fish".to_string()))
        );
        assert_eq!(
            resolve_numeric(&Value::Troof(true)),
            Err(EvalError::NonNumericOperand("TROOF"))
        );
        assert_eq!(
            resolve_numeric(&Value::Noob),
            Err(EvalError::NonNumericOperand("NOOB"))
        );
    }
}
