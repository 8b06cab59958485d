//! LOLCODE interpreter CLI.
//!
//! Thin driver over the library crates: opens the input, spawns the
//! lexing pipeline, parses and executes statements against a long-lived
//! namespace, and reports diagnostics.
//!
//! Error policy: the first fatal syntax or evaluation error halts the
//! run. After a committed parse failure the stream position is mid-rule,
//! so resuming at the "next statement" is not well-defined.
//!
//! Exit codes: 0 success, 1 usage error, 2 any lexical, syntax, or
//! evaluation failure.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use lol_lang::{dialect, node, session, Namespace, IT};
use lol_parse::ParseError;
use lol_token::{kind, phrases, spawn_pipeline, LexValue, PhraseTrie};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }
    match args[1].as_str() {
        "run" => with_input(args.get(2), run_source),
        "lex" => with_input(args.get(2), lex_source),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: lolc <command> [file.lol]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.lol>   Execute a program ('-' reads stdin)");
    eprintln!("  lex <file.lol>   Dump the token stream, one token per line");
    eprintln!("  help             Show this message");
    eprintln!();
    eprintln!("Set LOLC_LOG (e.g. LOLC_LOG=lol_parse=trace) for engine traces.");
}

/// Open the input argument and hand it to `command`. `-` is stdin.
fn with_input(
    path: Option<&String>,
    command: fn(Box<dyn BufRead + Send>) -> ExitCode,
) -> ExitCode {
    let Some(path) = path else {
        eprintln!("error: missing file path");
        print_usage();
        return ExitCode::from(1);
    };
    if path == "-" {
        return command(Box::new(BufReader::new(io::stdin())));
    }
    match File::open(path) {
        Ok(file) => command(Box::new(BufReader::new(file))),
        Err(error) => {
            eprintln!("error: cannot open {path}: {error}");
            ExitCode::from(1)
        }
    }
}

/// Parse and execute statements until the stream closes, then print the
/// final value of the pronoun variable.
fn run_source(reader: Box<dyn BufRead + Send>) -> ExitCode {
    let dialect = dialect();
    let mut session = session(reader);
    let mut namespace = Namespace::new();
    loop {
        match session.parse(&dialect, node::STATEMENT) {
            Ok(parsed) => {
                let Some(statement) = parsed.into_stmt() else {
                    eprintln!("error: statement parse produced a non-statement");
                    return ExitCode::from(2);
                };
                if let Err(error) = statement(&mut namespace) {
                    eprintln!("error: {error}");
                    return ExitCode::from(2);
                }
            }
            Err(ParseError::Exhausted) => break,
            Err(error) => {
                eprintln!("error: {error}");
                return ExitCode::from(2);
            }
        }
    }
    if let Ok(value) = namespace.get(IT) {
        println!("{value}");
    }
    ExitCode::SUCCESS
}

/// Dump the token stream for debugging.
fn lex_source(reader: Box<dyn BufRead + Send>) -> ExitCode {
    let names = phrases();
    for token in spawn_pipeline(reader, phrases()) {
        let name = kind_name(token.kind, &names);
        match token.value {
            LexValue::Word(word) => println!("{name:<12} {word}"),
            LexValue::Literal(value) => println!("{name:<12} {value:?}"),
        }
    }
    ExitCode::SUCCESS
}

fn kind_name(kind: kind::TokenKind, trie: &PhraseTrie) -> &'static str {
    match kind {
        kind::ERR => "error",
        kind::LITERAL => "literal",
        kind::IDENT => "ident",
        kind::EOL => "eol",
        other => trie.canonical(other).unwrap_or("?"),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("LOLC_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
