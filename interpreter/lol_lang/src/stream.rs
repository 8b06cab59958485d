//! Adapter from the lexer's token queue to the grammar engine.

use crossbeam::channel::Receiver;

use lol_parse::Token;
use lol_token::{LexToken, LexValue};

use crate::sem::Sem;

/// Wraps the lexer stage's receiving end as an iterator of engine
/// tokens, lifting token payloads into [`Sem`]. (Every token iterator
/// is a `TokenSource`.) Blocks while the queue is empty but not closed;
/// ends once it is closed and drained.
pub struct TokenStream {
    rx: Receiver<LexToken>,
}

impl TokenStream {
    pub fn new(rx: Receiver<LexToken>) -> Self {
        TokenStream { rx }
    }
}

impl Iterator for TokenStream {
    type Item = Token<Sem>;

    fn next(&mut self) -> Option<Token<Sem>> {
        let token = self.rx.recv().ok()?;
        let value = match token.value {
            LexValue::Word(word) => Sem::Word(word),
            LexValue::Literal(literal) => Sem::Value(literal),
        };
        Some(Token::new(token.kind, value))
    }
}
