//! A generic, table-driven grammar engine with disciplined backtracking.
//!
//! A [`Dialect`] is a collection of parse rules that together form a
//! language. The engine is language-agnostic: the embedding language
//! supplies the symbol id space (ids `0..T` address token kinds, ids
//! `T..M` address non-terminals), one or more rules per non-terminal, and
//! a reducer per rule that maps the matched child values to a semantic
//! value of the embedder's choosing.
//!
//! # Backtracking discipline
//!
//! Rule alternatives are tried in registration order and must be
//! distinguishable by their leading children: a rule attempt that fails
//! before matching anything is an ordinary backtrack, but once an attempt
//! has matched (and therefore consumed) *any* child, a later failure is a
//! fatal syntax error: no alternative is retried, for this or any
//! enclosing symbol. This "point of no return" keeps parsing linear in
//! the input while still yielding a precise offending token and expected
//! set.
//!
//! The engine carries exactly one token of lookahead. Use a [`Session`]
//! to parse several units off one token stream; the lookahead consumed
//! past a completed parse is carried into the next one.

mod dialect;
mod error;
mod session;
mod token;

pub use dialect::{opt, req, ChildRef, Dialect, Reducer};
pub use error::{ParseError, ReduceError, SyntaxError};
pub use session::Session;
pub use token::{ParseValue, SymbolId, Token, TokenSource};
