//! Truthiness, equality, and cast semantics.
//!
//! Explicit casts (`MAEK`, `IS NOW A`) are looser than the implicit
//! conversions operators perform: an explicit `YARN` cast renders `NOOB`
//! as the empty string, while the implicit conversion used by `SMOOSH`
//! rejects it.

use crate::error::{EvalError, EvalResult};
use crate::num::{parse_numbar, parse_numbr};
use crate::value::Value;

/// Truthiness coercion, total over the closed union: `TROOF` passes
/// through, `NOOB` is false, a `YARN` is true iff non-empty, numbers are
/// true iff non-zero.
pub fn troof(value: &Value) -> bool {
    match value {
        Value::Troof(b) => *b,
        Value::Noob => false,
        Value::Yarn(s) => !s.is_empty(),
        Value::Numbr(n) => *n != 0,
        Value::Numbar(x) => *x != 0.0,
    }
}

/// `BOTH SAEM` equality: a `NUMBR`/`NUMBAR` pair widens the integer and
/// compares by value; any other pair is equal only if kind and value both
/// match exactly. A `YARN` is never equal to a number, whatever its text.
pub fn saem(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Numbr(n), Value::Numbar(f)) | (Value::Numbar(f), Value::Numbr(n)) => {
            *n as f64 == *f
        }
        _ => x == y,
    }
}

/// Explicit cast to `NUMBR`. Numbers convert directly (floats truncate
/// toward zero), `NOOB` is 0, `TROOF` is 1/0, and a `YARN` must parse as
/// an integer.
pub fn numbr(value: &Value) -> EvalResult {
    let n = match value {
        Value::Noob => 0,
        Value::Troof(b) => i64::from(*b),
        Value::Numbr(n) => *n,
        Value::Numbar(x) => *x as i64,
        Value::Yarn(s) => {
            parse_numbr(s).ok_or_else(|| EvalError::NumericParse(s.clone()))?
        }
    };
    Ok(Value::Numbr(n))
}

/// Explicit cast to `NUMBAR`. Same rules as [`numbr`] with float targets.
pub fn numbar(value: &Value) -> EvalResult {
    let x = match value {
        Value::Noob => 0.0,
        Value::Troof(b) => f64::from(u8::from(*b)),
        Value::Numbr(n) => *n as f64,
        Value::Numbar(x) => *x,
        Value::Yarn(s) => {
            parse_numbar(s).ok_or_else(|| EvalError::NumericParse(s.clone()))?
        }
    };
    Ok(Value::Numbar(x))
}

/// Explicit cast to `YARN`, total: booleans render as `WIN`/`FAIL` and
/// `NOOB` as the empty string.
pub fn yarn(value: &Value) -> String {
    match value {
        Value::Noob => String::new(),
        Value::Troof(true) => "WIN".to_string(),
        Value::Troof(false) => "FAIL".to_string(),
        Value::Numbr(n) => n.to_string(),
        Value::Numbar(x) => x.to_string(),
        Value::Yarn(s) => s.clone(),
    }
}

/// Implicit stringification, used by `SMOOSH`: identical to [`yarn`]
/// except `NOOB` is rejected.
pub fn yarn_implicit(value: &Value) -> EvalResult<String> {
    match value {
        Value::Noob => Err(EvalError::NoobSmoosh),
        other => Ok(yarn(other)),
    }
}

/// Cast dispatch keyed on the canonical type phrase carried by the cast
/// token (`A NOOB`, `A TROOF`, `A NUMBR`, `A NUMBAR`, `A YARN`).
pub fn cast(type_phrase: &str, value: &Value) -> EvalResult {
    match type_phrase {
        "A NOOB" => Ok(Value::Noob),
        "A TROOF" => Ok(Value::Troof(troof(value))),
        "A NUMBR" => numbr(value),
        "A NUMBAR" => numbar(value),
        // "A YARN"
        _ => Ok(Value::Yarn(yarn(value))),
    }
}
