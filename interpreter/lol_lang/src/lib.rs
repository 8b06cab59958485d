//! The LOLCODE dialect and evaluator.
//!
//! This crate wires the generic grammar engine to the language: it
//! defines the non-terminal id space, registers the rule table, and
//! supplies the reducers that build executable closures during parsing.
//! Evaluation happens by calling those closures against a [`Namespace`].
//!
//! Parsing a statement yields a [`Sem::Stmt`]; running it mutates the
//! namespace and nothing else. The pronoun variable `IT` always holds
//! the result of the last bare-expression statement.
//!
//! ```no_run
//! use std::io::BufReader;
//!
//! let dialect = lol_lang::dialect();
//! let mut namespace = lol_lang::Namespace::new();
//! let source = BufReader::new(std::fs::File::open("program.lol")?);
//! let mut session = lol_lang::session(source);
//! loop {
//!     match session.parse(&dialect, lol_lang::node::STATEMENT) {
//!         Ok(parsed) => {
//!             if let Some(statement) = parsed.into_stmt() {
//!                 statement(&mut namespace)?;
//!             }
//!         }
//!         Err(lol_parse::ParseError::Exhausted) => break,
//!         Err(error) => return Err(error.into()),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dialect;
mod expr;
mod math;
mod namespace;
mod sem;
mod stmt;
mod stream;

#[cfg(test)]
mod tests;

use std::io::BufRead;

use lol_parse::Session;
use lol_token::{phrases, spawn_pipeline};

pub use dialect::{dialect, node};
pub use namespace::{Namespace, IT};
pub use sem::{ExprFn, PredFn, Sem, StmtFn};
pub use stream::TokenStream;

/// Spawn the lexing pipeline over `reader` and wrap it in a parse
/// session ready for [`node::STATEMENT`] parses.
pub fn session<R>(reader: R) -> Session<Sem, TokenStream>
where
    R: BufRead + Send + 'static,
{
    Session::new(TokenStream::new(spawn_pipeline(reader, phrases())))
}
