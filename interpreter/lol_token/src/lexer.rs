//! The phrase-trie lexer stage.
//!
//! Consumes the fragment queue and emits typed tokens. Each fragment
//! first attempts longest-match phrase recognition: the lexer descends
//! the trie one fragment at a time, holding one fragment of lookahead.
//! A complete phrase emits its token and lexing resumes from the
//! lookahead. An *incomplete* phrase (the descent stalled on a
//! non-terminal node) means the original fragment did not start a phrase
//! after all: the fragments consumed during the descent are replayed
//! through a pushback queue and the original fragment falls through to
//! literal classification.
//!
//! Lexical errors are ordinary [`kind::ERR`] tokens carrying a message;
//! rejecting them is the grammar engine's business, so lexing continues.

use std::collections::VecDeque;
use std::io::BufRead;
use std::thread;

use crossbeam::channel::{bounded, Receiver, Sender};

use lol_value::{parse_numbar, parse_numbr, Value};

use crate::fragment::{extract_fragments, QUEUE_DEPTH};
use crate::kind::{self, TokenKind};
use crate::phrase::PhraseTrie;

/// A lexed token: a terminal kind plus its payload.
#[derive(Clone, Debug, PartialEq)]
pub struct LexToken {
    pub kind: TokenKind,
    pub value: LexValue,
}

/// Token payload: canonical phrase text, identifier name, or diagnostic
/// message for `Word`; a runtime value for `Literal`.
#[derive(Clone, Debug, PartialEq)]
pub enum LexValue {
    Word(String),
    Literal(Value),
}

impl LexToken {
    fn word(kind: TokenKind, text: impl Into<String>) -> Self {
        LexToken {
            kind,
            value: LexValue::Word(text.into()),
        }
    }

    fn literal(value: Value) -> Self {
        LexToken {
            kind: kind::LITERAL,
            value: LexValue::Literal(value),
        }
    }

    fn error(message: String) -> Self {
        LexToken {
            kind: kind::ERR,
            value: LexValue::Word(message),
        }
    }
}

/// Fragment source with pushback, so fragments consumed by an abandoned
/// trie descent can be replayed in order.
struct Fragments {
    rx: Receiver<String>,
    pending: VecDeque<String>,
}

impl Fragments {
    fn next(&mut self) -> Option<String> {
        self.pending.pop_front().or_else(|| self.rx.recv().ok())
    }

    fn push_front(&mut self, fragment: String) {
        self.pending.push_front(fragment);
    }

    fn replay(&mut self, fragments: Vec<String>) {
        for fragment in fragments.into_iter().rev() {
            self.pending.push_front(fragment);
        }
    }
}

/// Lex the fragment stream to exhaustion, sending tokens on `out`.
///
/// Sole reader of the fragment queue and sole writer of the token queue.
/// Returns early when the token receiver disconnects, dropping the
/// fragment receiver and thereby cancelling the extractor stage.
pub fn emit_tokens(fragments: Receiver<String>, trie: &PhraseTrie, out: &Sender<LexToken>) {
    let mut fragments = Fragments {
        rx: fragments,
        pending: VecDeque::new(),
    };
    while let Some(word) = fragments.next() {
        let token = try_phrase(&word, trie, &mut fragments)
            .unwrap_or_else(|| classify(&word));
        if out.send(token).is_err() {
            return;
        }
    }
}

/// Attempt longest-match phrase recognition starting at `first`.
///
/// Returns `None` when `first` does not complete any phrase; consumed
/// lookahead fragments have then been replayed and `first` should be
/// classified as a literal.
fn try_phrase(first: &str, trie: &PhraseTrie, fragments: &mut Fragments) -> Option<LexToken> {
    let mut node = trie.enter(first)?;
    let mut tail: Vec<String> = Vec::new();
    let mut lookahead = None;
    while let Some(next) = fragments.next() {
        match node.step(&next) {
            Some(deeper) => {
                node = deeper;
                tail.push(next);
            }
            None => {
                lookahead = Some(next);
                break;
            }
        }
    }
    match node.terminal() {
        Some((kind, canonical)) => {
            if let Some(next) = lookahead {
                fragments.push_front(next);
            }
            Some(LexToken::word(kind, canonical))
        }
        None => {
            if let Some(next) = lookahead {
                tail.push(next);
            }
            fragments.replay(tail);
            None
        }
    }
}

/// Literal classification, in priority order: boolean keywords, the null
/// keyword, quoted strings, identifiers, integers, floats.
fn classify(word: &str) -> LexToken {
    match word {
        "WIN" => LexToken::literal(Value::Troof(true)),
        "FAIL" => LexToken::literal(Value::Troof(false)),
        "NOOB" => LexToken::literal(Value::Noob),
        _ if word.starts_with('"') => yarn_literal(word),
        _ if is_identifier(word) => LexToken::word(kind::IDENT, word),
        _ => {
            if let Some(n) = parse_numbr(word) {
                LexToken::literal(Value::Numbr(n))
            } else if let Some(x) = parse_numbar(word) {
                LexToken::literal(Value::Numbar(x))
            } else {
                LexToken::error(format!("unexpected token {word}"))
            }
        }
    }
}

/// A quoted string fragment. Quotes are stripped; there is no escape
/// processing (fragments cannot contain whitespace anyway).
fn yarn_literal(word: &str) -> LexToken {
    if word.len() >= 2 && word.ends_with('"') {
        LexToken::literal(Value::yarn(&word[1..word.len() - 1]))
    } else {
        LexToken::error(format!("invalid string literal: {word}"))
    }
}

/// `letter (letter | digit | '_')*`, ASCII.
fn is_identifier(word: &str) -> bool {
    let mut bytes = word.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Spawn the extractor and lexer stages over `reader`, returning the
/// token queue's receiving end.
///
/// Each stage runs on its own thread behind a bounded queue, so a slow
/// consumer applies backpressure all the way to the reader. Dropping the
/// returned receiver cancels both stages.
pub fn spawn_pipeline<R>(reader: R, trie: PhraseTrie) -> Receiver<LexToken>
where
    R: BufRead + Send + 'static,
{
    let (fragment_tx, fragment_rx) = bounded(QUEUE_DEPTH);
    let (token_tx, token_rx) = bounded(QUEUE_DEPTH);
    thread::spawn(move || extract_fragments(reader, &fragment_tx));
    thread::spawn(move || emit_tokens(fragment_rx, &trie, &token_tx));
    token_rx
}
