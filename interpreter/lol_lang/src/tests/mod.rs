//! End-to-end tests: source text through the real pipeline (extractor
//! and lexer threads, bounded queues) into closures, evaluated against a
//! namespace.
#![allow(clippy::unwrap_used)]

mod stmt_tests;

use std::io::Cursor;

use lol_parse::{ParseError, SymbolId};
use lol_value::{EvalResult, Value};

use crate::{dialect, node, session, Namespace, Sem};

/// Parse one unit of `code` (a trailing newline is supplied).
fn parse(code: &str, start: SymbolId) -> Result<Sem, ParseError> {
    let d = dialect();
    let mut session = session(Cursor::new(format!("{code}\n").into_bytes()));
    session.parse(&d, start)
}

/// Parse `code` as an expression and evaluate it.
fn eval(code: &str, ns: &Namespace) -> EvalResult {
    let expression = parse(code, node::EXPR)
        .unwrap_or_else(|e| panic!("{code:?} failed to parse: {e}"))
        .into_expr()
        .unwrap();
    expression(ns)
}

/// Parse `code` as a statement and run it.
fn exec(code: &str, ns: &mut Namespace) -> EvalResult<()> {
    let statement = parse(code, node::STATEMENT)
        .unwrap_or_else(|e| panic!("{code:?} failed to parse: {e}"))
        .into_stmt()
        .unwrap();
    statement(ns)
}

/// The pre-seeded namespace the expression and statement tables share.
fn seeded() -> Namespace {
    let mut ns = Namespace::new();
    ns.declare("FOO", Value::Numbr(-10));
    ns.declare("BAR", Value::yarn("5"));
    ns.declare("NEWB", Value::Noob);
    ns
}
