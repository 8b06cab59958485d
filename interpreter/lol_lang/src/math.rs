//! Arithmetic reducers and the numeric promotion rule.
//!
//! An operator resolves both operands through
//! [`lol_value::resolve_numeric`]; if either comes out a float, both are
//! widened and the float form of the operator applies, otherwise the
//! integer form does. Integer add/sub/mul wrap; division truncates
//! toward zero and rejects a zero divisor; modulo is integer-only.

use lol_parse::ReduceError;
use lol_value::{resolve_numeric, EvalError, EvalResult, Numeric, Value};

use crate::sem::{take_expr, ExprFn, Sem};

type IntOp = fn(i64, i64) -> EvalResult;
type FloatOp = fn(f64, f64) -> EvalResult;

/// Apply a binary numeric operator to two values, after coercion and
/// promotion.
fn numeric_binary(x: &Value, y: &Value, int_op: IntOp, float_op: FloatOp) -> EvalResult {
    let x = resolve_numeric(x)?;
    let y = resolve_numeric(y)?;
    match (x, y) {
        (Numeric::Int(a), Numeric::Int(b)) => int_op(a, b),
        _ => float_op(x.as_f64(), y.as_f64()),
    }
}

/// Build the expression closure for a binary numeric operator.
fn math_expr(x: ExprFn, y: ExprFn, int_op: IntOp, float_op: FloatOp) -> Sem {
    Sem::expr(move |ns| numeric_binary(&x(ns)?, &y(ns)?, int_op, float_op))
}

/// Shared reducer shape: operands sit at child positions 1 and 3
/// (`<op> x AN y`).
fn binary(mut args: Vec<Option<Sem>>, int_op: IntOp, float_op: FloatOp) -> Result<Sem, ReduceError> {
    let x = take_expr(&mut args, 1)?;
    let y = take_expr(&mut args, 3)?;
    Ok(math_expr(x, y, int_op, float_op))
}

pub(crate) fn sum_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| Ok(Value::Numbr(a.wrapping_add(b))),
        |a, b| Ok(Value::Numbar(a + b)),
    )
}

pub(crate) fn diff_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| Ok(Value::Numbr(a.wrapping_sub(b))),
        |a, b| Ok(Value::Numbar(a - b)),
    )
}

pub(crate) fn produkt_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| Ok(Value::Numbr(a.wrapping_mul(b))),
        |a, b| Ok(Value::Numbar(a * b)),
    )
}

pub(crate) fn quoshunt_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Value::Numbr(a.wrapping_div(b)))
            }
        },
        // Float division by zero follows IEEE and yields an infinity.
        |a, b| Ok(Value::Numbar(a / b)),
    )
}

pub(crate) fn mod_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Value::Numbr(a.wrapping_rem(b)))
            }
        },
        |_, _| Err(EvalError::FloatModulo),
    )
}

pub(crate) fn biggr_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| Ok(Value::Numbr(a.max(b))),
        |a, b| Ok(Value::Numbar(a.max(b))),
    )
}

pub(crate) fn smallr_of(args: Vec<Option<Sem>>) -> Result<Sem, ReduceError> {
    binary(
        args,
        |a, b| Ok(Value::Numbr(a.min(b))),
        |a, b| Ok(Value::Numbar(a.min(b))),
    )
}
