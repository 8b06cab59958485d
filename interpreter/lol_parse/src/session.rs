//! Parse sessions: one token of lookahead, carried across parses.
//!
//! Matching a unit's final terminal forces the engine to pull one more
//! token, the first token of the *next* unit. A `Session` owns the
//! token source and keeps that lookahead, so consecutive `parse` calls
//! compose over one stream without losing tokens.

use crate::dialect::Dialect;
use crate::error::ParseError;
use crate::token::{ParseValue, SymbolId, Token, TokenSource};

/// A parsing context over one token stream.
pub struct Session<V, S> {
    source: S,
    lookahead: Option<Token<V>>,
    primed: bool,
}

impl<V: ParseValue, S: TokenSource<V>> Session<V, S> {
    pub fn new(source: S) -> Self {
        Session {
            source,
            lookahead: None,
            primed: false,
        }
    }

    /// Parse one `start` unit off the stream.
    ///
    /// Errors: [`ParseError::Exhausted`] when the stream was already
    /// closed (normal end of input), [`ParseError::Mismatch`] when no
    /// rule of `start` matched (nothing consumed),
    /// [`ParseError::Syntax`] for a fatal post-commit failure.
    pub fn parse(&mut self, dialect: &Dialect<V>, start: SymbolId) -> Result<V, ParseError> {
        self.prime();
        if self.lookahead.is_none() {
            return Err(ParseError::Exhausted);
        }
        match dialect.parse_node(start, self)? {
            Some(value) => Ok(value),
            None => Err(ParseError::Mismatch {
                found: self.describe_position(),
            }),
        }
    }

    /// True once the stream is closed and the lookahead is spent.
    pub fn at_end(&mut self) -> bool {
        self.prime();
        self.lookahead.is_none()
    }

    fn prime(&mut self) {
        if !self.primed {
            self.primed = true;
            self.lookahead = self.source.next_token();
        }
    }

    /// Consume the current token if its kind matches, pulling the next
    /// token into the lookahead slot.
    pub(crate) fn take_if(&mut self, kind: SymbolId) -> Option<V> {
        match self.lookahead.take() {
            Some(token) if token.kind == kind => {
                self.lookahead = self.source.next_token();
                Some(token.value)
            }
            other => {
                self.lookahead = other;
                None
            }
        }
    }

    /// Render the current position for diagnostics.
    pub(crate) fn describe_position(&self) -> String {
        match &self.lookahead {
            Some(token) => token.value.describe(),
            None => "end of input".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{opt, req};
    use crate::error::{ReduceError, SyntaxError};
    use pretty_assertions::assert_eq;

    // A calculator dialect over a handful of terminal kinds, small
    // enough to exercise every engine behavior.
    const LITERAL: SymbolId = 0;
    const SUM_OF: SymbolId = 1;
    const PRODUKT_OF: SymbolId = 2;
    const AN: SymbolId = 3;
    const MKAY: SymbolId = 4;
    const EOL: SymbolId = 5;
    const NUM_TOKENS: usize = 6;

    const EXPR: SymbolId = 6;
    const EXPR_LIST: SymbolId = 7;
    const STATEMENT: SymbolId = 8;
    const NUM_SYMBOLS: usize = 9;

    #[derive(Clone, Debug, PartialEq)]
    enum Calc {
        Int(i64),
        Word(String),
        Seq(Vec<Calc>),
    }

    impl Calc {
        fn int(&self) -> i64 {
            match self {
                Calc::Int(n) => *n,
                other => panic!("expected an integer, got {other:?}"),
            }
        }
    }

    impl ParseValue for Calc {
        fn sequence(items: Vec<Self>) -> Self {
            Calc::Seq(items)
        }

        fn describe(&self) -> String {
            match self {
                Calc::Int(n) => n.to_string(),
                Calc::Word(w) => w.clone(),
                Calc::Seq(items) => format!("{} items", items.len()),
            }
        }
    }

    fn fold(items: &Option<Calc>, zero: i64, op: fn(i64, i64) -> i64) -> Result<Calc, ReduceError> {
        match items {
            Some(Calc::Seq(items)) => {
                Ok(Calc::Int(items.iter().map(Calc::int).fold(zero, op)))
            }
            _ => Err(ReduceError::new("expected a sequence")),
        }
    }

    fn calculator() -> Dialect<Calc> {
        let mut d = Dialect::new(NUM_TOKENS, NUM_SYMBOLS);
        d.name(LITERAL, "literal");
        d.name(SUM_OF, "SUM OF");
        d.name(PRODUKT_OF, "PRODUKT OF");
        d.name(AN, "AN");
        d.name(EOL, "end of line");
        d.name(EXPR, "expression");
        d.name(EXPR_LIST, "expression list");
        d.rule(EXPR, |mut args| Ok(take(&mut args, 0)), &[req(LITERAL)]);
        d.rule(
            EXPR,
            |args| fold(&args[1], 0, |a, b| a + b),
            &[req(SUM_OF), req(EXPR_LIST), opt(MKAY)],
        );
        d.rule(
            EXPR,
            |args| fold(&args[1], 1, |a, b| a * b),
            &[req(PRODUKT_OF), req(EXPR_LIST), opt(MKAY)],
        );
        d.repeating_rule(
            EXPR_LIST,
            |mut args| Ok(take(&mut args, 1)),
            &[opt(AN), req(EXPR)],
        );
        d.rule(
            STATEMENT,
            |mut args| Ok(take(&mut args, 0)),
            &[req(EXPR), req(EOL)],
        );
        d
    }

    fn take(args: &mut [Option<Calc>], i: usize) -> Calc {
        args[i].take().unwrap_or(Calc::Seq(Vec::new()))
    }

    fn lit(n: i64) -> Token<Calc> {
        Token::new(LITERAL, Calc::Int(n))
    }

    fn word(kind: SymbolId) -> Token<Calc> {
        let text = match kind {
            SUM_OF => "SUM OF",
            PRODUKT_OF => "PRODUKT OF",
            AN => "AN",
            MKAY => "MKAY",
            _ => "End-of-line",
        };
        Token::new(kind, Calc::Word(text.to_string()))
    }

    #[test]
    fn flat_list() {
        // SUM OF 3 4 AN 5
        let tokens = vec![word(SUM_OF), lit(3), lit(4), word(AN), lit(5), word(EOL)];
        assert_eq!(
            calculator().parse(EXPR, tokens.into_iter()),
            Ok(Calc::Int(12))
        );
    }

    #[test]
    fn nested_lists_with_terminators() {
        // PRODUKT OF SUM OF 3 AN 4 MKAY AN 5
        let tokens = vec![
            word(PRODUKT_OF),
            word(SUM_OF),
            lit(3),
            word(AN),
            lit(4),
            word(MKAY),
            word(AN),
            lit(5),
            word(EOL),
        ];
        assert_eq!(
            calculator().parse(EXPR, tokens.into_iter()),
            Ok(Calc::Int(35))
        );
    }

    #[test]
    fn empty_lists_use_the_fold_identity() {
        let d = calculator();
        // SUM OF MKAY => 0; the repeating rule matched zero iterations.
        let tokens = vec![word(SUM_OF), word(MKAY), word(EOL)];
        assert_eq!(d.parse(EXPR, tokens.into_iter()), Ok(Calc::Int(0)));
        // PRODUKT OF <eol> => 1; the optional MKAY is absent too.
        let tokens = vec![word(PRODUKT_OF), word(EOL)];
        assert_eq!(d.parse(EXPR, tokens.into_iter()), Ok(Calc::Int(1)));
    }

    #[test]
    fn committed_failure_is_fatal() {
        // SUM OF 3 AN <eol>: the matched AN commits the list iteration,
        // so the missing expression is a syntax error, not a backtrack.
        let tokens = vec![word(SUM_OF), lit(3), word(AN), word(EOL)];
        let result = calculator().parse(EXPR, tokens.into_iter());
        assert_eq!(
            result,
            Err(ParseError::Syntax(SyntaxError {
                found: "End-of-line".to_string(),
                expected: vec![
                    "literal".to_string(),
                    "SUM OF".to_string(),
                    "PRODUKT OF".to_string(),
                ],
            }))
        );
    }

    #[test]
    fn fatal_errors_propagate_through_enclosing_rules() {
        // SUM OF 3 AN SUM OF <eol>: the failure is nested two lists deep.
        let tokens = vec![
            word(SUM_OF),
            lit(3),
            word(AN),
            word(SUM_OF),
            word(EOL),
        ];
        assert!(matches!(
            calculator().parse(EXPR, tokens.into_iter()),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn mismatch_consumes_nothing() {
        let tokens = vec![word(AN), lit(1), word(EOL)];
        let mut session = Session::new(tokens.into_iter());
        let d = calculator();
        assert_eq!(
            session.parse(&d, EXPR),
            Err(ParseError::Mismatch {
                found: "AN".to_string()
            })
        );
        // The stream is intact: the offending token is still current.
        assert!(!session.at_end());
    }

    #[test]
    fn exhausted_stream() {
        let d = calculator();
        assert_eq!(
            d.parse(EXPR, std::iter::empty()),
            Err(ParseError::Exhausted)
        );
    }

    #[test]
    fn session_carries_lookahead_across_statements() {
        // Two statements; matching the first EOL pulls the second
        // statement's leading token, which must not be lost.
        let tokens = vec![lit(1), word(EOL), word(SUM_OF), lit(2), word(AN), lit(3), word(EOL)];
        let d = calculator();
        let mut session = Session::new(tokens.into_iter());
        assert_eq!(session.parse(&d, STATEMENT), Ok(Calc::Int(1)));
        assert_eq!(session.parse(&d, STATEMENT), Ok(Calc::Int(5)));
        assert!(session.at_end());
        assert_eq!(session.parse(&d, STATEMENT), Err(ParseError::Exhausted));
    }

    #[test]
    fn reduce_errors_are_fatal() {
        let mut d = Dialect::new(NUM_TOKENS, NUM_SYMBOLS);
        d.name(EXPR, "expression");
        d.rule(
            EXPR,
            |_| Err(ReduceError::new("boom")),
            &[req(LITERAL)],
        );
        assert_eq!(
            d.parse(EXPR, vec![lit(1)].into_iter()),
            Err(ParseError::Reduce {
                node: "expression".to_string(),
                source: ReduceError::new("boom"),
            })
        );
    }
}
