//! The fragment extractor stage.
//!
//! Reads lines from a text stream and emits whitespace-delimited word
//! fragments, with comments already consumed. A `,` splits a physical
//! line into sub-lines, each a statement of its own; logical line ends
//! are represented by the reserved [`EOL_PHRASE`] fragment, which the
//! phrase trie maps to the EOL token.
//!
//! Comment rules:
//! - `BTW` anywhere truncates the rest of the *physical* line, emitting
//!   a line break only if fragments preceded it on its sub-line.
//! - `OBTW` opens a block comment only as the first fragment of a
//!   sub-line; `TLDR` closes it, again only as a first fragment, and
//!   fragments after `TLDR` on its sub-line are processed normally.

use std::io::BufRead;

use crossbeam::channel::Sender;

/// The line-break marker fragment. Chosen so it can never collide with a
/// keyword, identifier, or literal.
pub const EOL_PHRASE: &str = "End-of-line";

/// Capacity of each pipeline queue.
pub const QUEUE_DEPTH: usize = 100;

/// Read `reader` to exhaustion, sending fragments on `out`.
///
/// Returns early when the receiving side disconnects; that is the
/// pipeline's cancellation signal. I/O errors also end the stream.
pub fn extract_fragments<R: BufRead>(mut reader: R, out: &Sender<String>) {
    let mut inside_comment = false;
    let mut line = String::new();
    'lines: loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        for sub_line in line.split(',') {
            let fragments: Vec<&str> = sub_line.split_whitespace().collect();
            if fragments.is_empty() {
                continue;
            }
            let mut start = 0;
            if inside_comment {
                if fragments[0] != "TLDR" {
                    continue;
                }
                inside_comment = false;
                if fragments.len() == 1 {
                    continue;
                }
                start = 1;
            } else if fragments[0] == "OBTW" {
                inside_comment = true;
                continue;
            }
            for (i, fragment) in fragments.iter().enumerate().skip(start) {
                if *fragment == "BTW" {
                    if i > start && out.send(EOL_PHRASE.to_string()).is_err() {
                        return;
                    }
                    continue 'lines;
                }
                if out.send((*fragment).to_string()).is_err() {
                    return;
                }
            }
            if out.send(EOL_PHRASE.to_string()).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::bounded;
    use pretty_assertions::assert_eq;

    fn fragments_of(source: &str) -> Vec<String> {
        let (tx, rx) = bounded(QUEUE_DEPTH);
        extract_fragments(source.as_bytes(), &tx);
        drop(tx);
        rx.into_iter().collect()
    }

    #[test]
    fn comment_fixture() {
        let source = "HAI 1.2\n\
            tok0,tok1 BTW comments here, including some commas\n\
            tok2\n\
            \n\
            \tBTW full line comment\n\
            tok3 BTW, OBTW doesnt work here\n\
            tok4\t OBTW   illegal comment\n\
            tok5, OBTW legal comment,, TLDR tok6,,,\n\
            tok7, OBTW legal comment TLDR\n\
            BTW that TLDR doesn't work lulz, TLDR BTW\n\
            KTHXBYE\n";
        let eol = EOL_PHRASE;
        let expected = vec![
            "HAI", "1.2", eol,
            "tok0", eol, "tok1", eol,
            "tok2", eol,
            "tok3", eol,
            "tok4", "OBTW", "illegal", "comment", eol,
            "tok5", eol,
            "tok6", eol,
            "tok7", eol,
            "KTHXBYE", eol,
        ];
        assert_eq!(fragments_of(source), expected);
    }

    #[test]
    fn empty_sub_lines_are_suppressed() {
        assert_eq!(fragments_of(",,  ,\n"), Vec::<String>::new());
        assert_eq!(
            fragments_of("a,,b\n"),
            vec!["a", EOL_PHRASE, "b", EOL_PHRASE]
        );
    }

    #[test]
    fn btw_truncates_the_physical_line() {
        // Everything after BTW goes, following sub-lines included.
        assert_eq!(
            fragments_of("a BTW x, b\nc\n"),
            vec!["a", EOL_PHRASE, "c", EOL_PHRASE]
        );
        // Leading BTW: no line break for the empty statement.
        assert_eq!(fragments_of("BTW x\na\n"), vec!["a", EOL_PHRASE]);
    }

    #[test]
    fn block_comment_spans_lines() {
        let source = "a\nOBTW one\ntwo\nthree TLDR nope\nTLDR b\nc\n";
        assert_eq!(
            fragments_of(source),
            vec!["a", EOL_PHRASE, "b", EOL_PHRASE, "c", EOL_PHRASE]
        );
    }

    #[test]
    fn final_line_without_newline() {
        assert_eq!(fragments_of("a b"), vec!["a", "b", EOL_PHRASE]);
    }
}
