//! Runtime values and coercion rules for the LOLCODE interpreter.
//!
//! This crate is the type core of the language: the closed [`Value`] union,
//! the evaluation error taxonomy, and the coercion functions (truthiness,
//! equality widening, numeric resolution, explicit and implicit casts) that
//! every operator in the evaluator is built from.
//!
//! Every coercion is a total function over the five `Value` variants;
//! the fatal cases are explicit `Err` arms, never panics.

mod cast;
mod error;
mod num;
mod value;

pub use cast::{cast, numbar, numbr, saem, troof, yarn, yarn_implicit};
pub use error::{EvalError, EvalResult};
pub use num::{parse_numbar, parse_numbr, resolve_numeric, Numeric};
pub use value::Value;
