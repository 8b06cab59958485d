//! Parse error taxonomy.

use thiserror::Error;

/// A fatal syntax error, raised only after a rule attempt passed its
/// commit point. Carries a rendering of the offending token and the
/// continuations the failed position would have accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("syntax error: unexpected {found}, expected {}", .expected.join(" or "))]
pub struct SyntaxError {
    /// Rendering of the offending token, or `"end of input"`.
    pub found: String,
    /// Names of the symbols that would have continued the match.
    pub expected: Vec<String>,
}

/// Error raised by a reducer that could not combine its matched
/// children. This signals a defect in the grammar wiring (a child slot
/// held a value shape the reducer did not expect), so the engine treats
/// it as fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ReduceError {
    pub message: String,
}

impl ReduceError {
    pub fn new(message: impl Into<String>) -> Self {
        ReduceError {
            message: message.into(),
        }
    }
}

/// The outcome of a failed parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No rule of the start symbol matched. Nothing was consumed; the
    /// caller may try something else with the same stream.
    #[error("no rule matched: unexpected {found}")]
    Mismatch { found: String },

    /// Fatal syntax error past a commit point. The stream position is
    /// mid-rule and unreliable.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A reducer rejected its matched children (see [`ReduceError`]).
    #[error("cannot reduce {node}: {source}")]
    Reduce {
        node: String,
        source: ReduceError,
    },

    /// The token stream was already closed when the parse began. This is
    /// the driver's end-of-input signal, not a syntax error.
    #[error("end of input")]
    Exhausted,
}
