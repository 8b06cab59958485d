//! Fragment extraction and phrase-trie lexing.
//!
//! The two producer stages of the interpreter pipeline live here:
//!
//! 1. The **fragment extractor** turns a character stream into
//!    whitespace-delimited word fragments, consuming comment syntax
//!    (`BTW`, `OBTW`/`TLDR`) and splitting lines at `,`.
//! 2. The **lexer** groups fragments into typed tokens by longest-match
//!    phrase recognition over a [`PhraseTrie`], falling back to literal
//!    and identifier classification.
//!
//! Both stages run as independent threads connected by bounded channels;
//! see [`spawn_pipeline`]. Dropping the token receiver cancels the whole
//! pipeline: the lexer's next send fails and it exits, which in turn
//! disconnects the fragment queue and stops the extractor.

pub mod kind;

mod fragment;
mod lexer;
mod phrase;

pub use fragment::{extract_fragments, EOL_PHRASE, QUEUE_DEPTH};
pub use lexer::{emit_tokens, spawn_pipeline, LexToken, LexValue};
pub use phrase::{phrases, PhraseTrie};
