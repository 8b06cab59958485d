//! The mutable variable namespace.

use rustc_hash::FxHashMap;

use lol_value::{EvalError, EvalResult, Value};

/// The pronoun variable: always present, always holding the result of
/// the last bare-expression statement.
pub const IT: &str = "IT";

/// A case-sensitive mapping from identifier to value, owned exclusively
/// by one evaluation context. Declared variables exist with some value
/// (possibly `NOOB`) until overwritten; there is no separate
/// declared-but-unset state.
#[derive(Debug, Default)]
pub struct Namespace {
    vars: FxHashMap<String, Value>,
}

impl Namespace {
    /// An empty namespace, with the pronoun seeded to `NOOB`.
    pub fn new() -> Self {
        let mut ns = Namespace::default();
        ns.declare(IT, Value::Noob);
        ns
    }

    /// Look up a variable. Referencing an unbound name is fatal.
    pub fn get(&self, name: &str) -> EvalResult {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::undefined_reference(name))
    }

    /// Bind a name, declaring it if needed. Re-declaring silently
    /// overwrites the previous binding.
    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Overwrite an existing binding. Declaration is mandatory before
    /// assignment; assigning to an unbound name is fatal.
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(EvalError::undefined_assignment(name)),
        }
    }

    /// Store a statement result into the pronoun variable.
    pub fn set_it(&mut self, value: Value) {
        self.declare(IT, value);
    }
}
