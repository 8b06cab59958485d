//! Evaluation error taxonomy.
//!
//! Lexical errors travel as tokens and syntax errors belong to the parse
//! engine; everything that can go wrong while *executing* a closure is one
//! of these variants. Evaluation errors abort the current statement and
//! are not catchable from within the language.

use thiserror::Error;

use crate::value::Value;

/// Result of evaluating an expression (or, with `T = ()`, a statement).
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// A fatal runtime error raised during statement execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An expression read a name with no binding.
    #[error("reference to undefined variable: {0}")]
    UndefinedReference(String),

    /// `R` assignment to a name that was never declared.
    #[error("assignment to undefined variable: {0}")]
    UndefinedAssignment(String),

    /// Arithmetic on a `TROOF` or `NOOB` operand.
    #[error("cannot perform numerical operation on type {0}")]
    NonNumericOperand(&'static str),

    /// A `YARN` operand (or cast source) that is neither a valid integer
    /// nor a valid float.
    #[error("failed to parse numeric value from string: {0}")]
    NumericParse(String),

    /// `MOD OF` applied to floating operands.
    #[error("cannot use MOD OF with type NUMBAR")]
    FloatModulo,

    /// Integer `QUOSHUNT OF` / `MOD OF` with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,

    /// `NOOB` reached an implicit `YARN` conversion (`SMOOSH`).
    #[error("cannot implicitly cast NOOB to YARN")]
    NoobSmoosh,
}

impl EvalError {
    /// Undefined-reference error for the given identifier.
    pub fn undefined_reference(name: impl Into<String>) -> Self {
        EvalError::UndefinedReference(name.into())
    }

    /// Undefined-assignment error for the given identifier.
    pub fn undefined_assignment(name: impl Into<String>) -> Self {
        EvalError::UndefinedAssignment(name.into())
    }

    /// Type error for a non-numeric arithmetic operand.
    pub fn non_numeric(value: &Value) -> Self {
        EvalError::NonNumericOperand(value.type_name())
    }
}
