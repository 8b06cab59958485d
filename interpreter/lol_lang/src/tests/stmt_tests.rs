//! Statement execution, program flow, and parse failure modes.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use lol_parse::ParseError;
use lol_value::{EvalError, Value};

use super::{exec, parse, seeded};
use crate::{dialect, node, session, Namespace, IT};

#[test]
fn basic_statements() {
    let cases: Vec<(&str, &str, Value)> = vec![
        ("6", IT, Value::Numbr(6)),
        ("BAR", IT, Value::yarn("5")),
        ("I HAS A FISH", "FISH", Value::Noob),
        ("I HAS A FISH ITZ WIN", "FISH", Value::Troof(true)),
        ("FOO R \"hello\"", "FOO", Value::yarn("hello")),
        ("FOO R SUM OF FOO AN 1", "FOO", Value::Numbr(-9)),
        ("FOO IS NOW A YARN", "FOO", Value::yarn("-10")),
        ("BAR IS NOW A NUMBR", "BAR", Value::Numbr(5)),
        ("NEWB IS NOW A TROOF", "NEWB", Value::Troof(false)),
        // Re-declaration silently overwrites.
        ("I HAS A FOO ITZ \"again\"", "FOO", Value::yarn("again")),
    ];
    for (code, variable, expected) in cases {
        let mut ns = seeded();
        exec(code, &mut ns).unwrap_or_else(|e| panic!("{code:?} failed: {e}"));
        assert_eq!(ns.get(variable), Ok(expected), "case: {code}");
    }
}

#[test]
fn bare_identifier_copies_into_the_pronoun() {
    let mut ns = seeded();
    exec("FOO", &mut ns).unwrap();
    assert_eq!(ns.get(IT), Ok(Value::Numbr(-10)));
}

#[test]
fn assignment_requires_prior_declaration() {
    let mut ns = Namespace::new();
    assert_eq!(
        exec("FISH R 1", &mut ns),
        Err(EvalError::UndefinedAssignment("FISH".to_string()))
    );
}

#[test]
fn cast_predicate_failures_leave_the_binding_alone() {
    let mut ns = Namespace::new();
    ns.declare("X", Value::yarn("fish"));
    assert_eq!(
        exec("X IS NOW A NUMBR", &mut ns),
        Err(EvalError::NumericParse("fish".to_string()))
    );
    assert_eq!(ns.get("X"), Ok(Value::yarn("fish")));
}

#[test]
fn program_markers_are_no_ops() {
    let mut ns = Namespace::new();
    exec("HAI 1.2", &mut ns).unwrap();
    exec("HAI", &mut ns).unwrap();
    exec("KTHXBYE", &mut ns).unwrap();
    assert_eq!(ns.get(IT), Ok(Value::Noob));
}

#[test]
fn syntax_errors_are_fatal_and_reported() {
    // The matched I HAS A commits the declaration rule; a literal where
    // the identifier belongs cannot backtrack.
    assert!(matches!(
        parse("I HAS A 5", node::STATEMENT),
        Err(ParseError::Syntax(_))
    ));
    // A lexical error token reaches the parser as an ordinary token and
    // fails the committed assignment rule there.
    assert!(matches!(
        parse("FOO R $bad", node::STATEMENT),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn unmatched_statements_are_mismatches() {
    assert!(matches!(
        parse("MKAY", node::STATEMENT),
        Err(ParseError::Mismatch { .. })
    ));
}

#[test]
fn whole_program_through_one_session() {
    let source = "HAI 1.2\n\
        I HAS A FISH ITZ 5 BTW a fish\n\
        FISH R SUM OF FISH AN 1, FISH R PRODUKT OF FISH AN 2\n\
        OBTW this block\n\
        is ignored\n\
        TLDR\n\
        SMOOSH \"fish=\" AN FISH MKAY\n\
        KTHXBYE\n";
    let d = dialect();
    let mut session = session(Cursor::new(source.as_bytes().to_vec()));
    let mut ns = Namespace::new();
    let mut statements = 0;
    loop {
        match session.parse(&d, node::STATEMENT) {
            Ok(sem) => {
                let statement = sem.into_stmt().unwrap();
                statement(&mut ns).unwrap();
                statements += 1;
            }
            Err(ParseError::Exhausted) => break,
            Err(error) => panic!("parse failed: {error}"),
        }
    }
    assert_eq!(statements, 6);
    assert_eq!(ns.get("FISH"), Ok(Value::Numbr(12)));
    assert_eq!(ns.get(IT), Ok(Value::yarn("fish=12")));
}
