//! The closed runtime value union.

use std::fmt;

/// A runtime value. This is the only type that flows through the
/// evaluator: every literal, variable binding, and operator result is one
/// of these five variants.
///
/// Variants carry the language's own type names: `NOOB` is the null
/// value, `TROOF` a boolean, `NUMBR` a 64-bit signed integer, `NUMBAR` a
/// 64-bit float, and `YARN` a string.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The null value; also the state of a freshly declared variable.
    Noob,
    /// Boolean, written `WIN` / `FAIL` in source.
    Troof(bool),
    /// 64-bit signed integer.
    Numbr(i64),
    /// 64-bit float.
    Numbar(f64),
    /// String.
    Yarn(String),
}

impl Value {
    /// The language-level type name, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Noob => "NOOB",
            Value::Troof(_) => "TROOF",
            Value::Numbr(_) => "NUMBR",
            Value::Numbar(_) => "NUMBAR",
            Value::Yarn(_) => "YARN",
        }
    }

    /// Convenience constructor for `Yarn` from any string-ish input.
    pub fn yarn(s: impl Into<String>) -> Self {
        Value::Yarn(s.into())
    }
}

/// Human-readable rendering for driver output and diagnostics.
///
/// This is *not* the `YARN` cast: `NOOB` displays as the word `NOOB` and
/// booleans as `WIN`/`FAIL`, so the interactive result of a statement is
/// always visible. Cast semantics live in [`crate::yarn`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Noob => f.write_str("NOOB"),
            Value::Troof(true) => f.write_str("WIN"),
            Value::Troof(false) => f.write_str("FAIL"),
            Value::Numbr(n) => write!(f, "{n}"),
            Value::Numbar(x) => write!(f, "{x}"),
            Value::Yarn(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_names() {
        assert_eq!(Value::Noob.type_name(), "NOOB");
        assert_eq!(Value::Troof(true).type_name(), "TROOF");
        assert_eq!(Value::Numbr(0).type_name(), "NUMBR");
        assert_eq!(Value::Numbar(0.0).type_name(), "NUMBAR");
        assert_eq!(Value::yarn("").type_name(), "YARN");
    }

    #[test]
    fn display_rendering() {
        assert_eq!(Value::Noob.to_string(), "NOOB");
        assert_eq!(Value::Troof(true).to_string(), "WIN");
        assert_eq!(Value::Troof(false).to_string(), "FAIL");
        assert_eq!(Value::Numbr(-42).to_string(), "-42");
        assert_eq!(Value::Numbar(16.0).to_string(), "16");
        assert_eq!(Value::Numbar(2.5).to_string(), "2.5");
        assert_eq!(Value::yarn("hello").to_string(), "hello");
    }
}
