//! The semantic value that flows through the grammar engine.
//!
//! Token payloads enter a parse as [`Sem::Value`] / [`Sem::Word`];
//! reducers combine them into the three closure shapes; repeating rules
//! collect into [`Sem::Seq`]. The `take_*` accessors are how reducers
//! read their positional arguments; a shape mismatch is a wiring bug
//! and surfaces as a fatal [`ReduceError`], never a downcast panic.

use std::fmt;
use std::rc::Rc;

use lol_parse::{ParseValue, ReduceError};
use lol_value::{EvalResult, Value};

use crate::namespace::Namespace;

/// An expression closure: evaluates to a value against a namespace.
pub type ExprFn = Rc<dyn Fn(&Namespace) -> EvalResult>;

/// A statement closure: mutates the namespace, produces no value.
pub type StmtFn = Rc<dyn Fn(&mut Namespace) -> EvalResult<()>>;

/// A predicate closure: operates on an already-named variable.
pub type PredFn = Rc<dyn Fn(&str, &mut Namespace) -> EvalResult<()>>;

/// A parse-time semantic value.
#[derive(Clone)]
pub enum Sem {
    /// A literal token payload.
    Value(Value),
    /// Canonical phrase text or an identifier name.
    Word(String),
    /// An expression closure.
    Expr(ExprFn),
    /// A statement closure.
    Stmt(StmtFn),
    /// A variable-predicate closure.
    Pred(PredFn),
    /// Ordered repeating-rule output.
    Seq(Vec<Sem>),
}

impl Sem {
    /// Wrap an expression closure.
    pub(crate) fn expr(f: impl Fn(&Namespace) -> EvalResult + 'static) -> Self {
        Sem::Expr(Rc::new(f))
    }

    /// Wrap a statement closure.
    pub(crate) fn stmt(f: impl Fn(&mut Namespace) -> EvalResult<()> + 'static) -> Self {
        Sem::Stmt(Rc::new(f))
    }

    /// Wrap a predicate closure.
    pub(crate) fn pred(f: impl Fn(&str, &mut Namespace) -> EvalResult<()> + 'static) -> Self {
        Sem::Pred(Rc::new(f))
    }

    /// The statement closure, if this is one. A statement parse always
    /// produces one; `None` means the caller parsed some other node.
    pub fn into_stmt(self) -> Option<StmtFn> {
        match self {
            Sem::Stmt(f) => Some(f),
            _ => None,
        }
    }

    /// The expression closure, if this is one.
    pub fn into_expr(self) -> Option<ExprFn> {
        match self {
            Sem::Expr(f) => Some(f),
            _ => None,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            Sem::Value(_) => "literal",
            Sem::Word(_) => "word",
            Sem::Expr(_) => "expression",
            Sem::Stmt(_) => "statement",
            Sem::Pred(_) => "predicate",
            Sem::Seq(_) => "sequence",
        }
    }
}

impl fmt::Debug for Sem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sem::Value(v) => write!(f, "Value({v:?})"),
            Sem::Word(w) => write!(f, "Word({w:?})"),
            Sem::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            other => f.write_str(other.shape()),
        }
    }
}

impl ParseValue for Sem {
    fn sequence(items: Vec<Self>) -> Self {
        Sem::Seq(items)
    }

    fn describe(&self) -> String {
        match self {
            Sem::Value(v) => v.to_string(),
            Sem::Word(w) => w.clone(),
            other => other.shape().to_string(),
        }
    }
}

fn mismatch(index: usize, wanted: &str, got: Option<&Sem>) -> ReduceError {
    match got {
        Some(sem) => ReduceError::new(format!(
            "child {index}: expected {wanted}, got {}",
            sem.shape()
        )),
        None => ReduceError::new(format!("child {index}: expected {wanted}, got nothing")),
    }
}

/// Take the expression at `index`.
pub(crate) fn take_expr(args: &mut [Option<Sem>], index: usize) -> Result<ExprFn, ReduceError> {
    match args[index].take() {
        Some(Sem::Expr(f)) => Ok(f),
        other => Err(mismatch(index, "expression", other.as_ref())),
    }
}

/// Take the expression at `index` if the optional child matched.
pub(crate) fn take_opt_expr(
    args: &mut [Option<Sem>],
    index: usize,
) -> Result<Option<ExprFn>, ReduceError> {
    match args[index].take() {
        None => Ok(None),
        Some(Sem::Expr(f)) => Ok(Some(f)),
        other => Err(mismatch(index, "expression", other.as_ref())),
    }
}

/// Take the word (identifier or phrase text) at `index`.
pub(crate) fn take_word(args: &mut [Option<Sem>], index: usize) -> Result<String, ReduceError> {
    match args[index].take() {
        Some(Sem::Word(w)) => Ok(w),
        other => Err(mismatch(index, "word", other.as_ref())),
    }
}

/// Take the literal value at `index`.
pub(crate) fn take_value(args: &mut [Option<Sem>], index: usize) -> Result<Value, ReduceError> {
    match args[index].take() {
        Some(Sem::Value(v)) => Ok(v),
        other => Err(mismatch(index, "literal", other.as_ref())),
    }
}

/// Take the predicate at `index`.
pub(crate) fn take_pred(args: &mut [Option<Sem>], index: usize) -> Result<PredFn, ReduceError> {
    match args[index].take() {
        Some(Sem::Pred(f)) => Ok(f),
        other => Err(mismatch(index, "predicate", other.as_ref())),
    }
}

/// Take the expression sequence at `index`.
pub(crate) fn take_exprs(
    args: &mut [Option<Sem>],
    index: usize,
) -> Result<Vec<ExprFn>, ReduceError> {
    match args[index].take() {
        Some(Sem::Seq(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Sem::Expr(f) => Ok(f),
                other => Err(mismatch(i, "expression", Some(&other))),
            })
            .collect(),
        other => Err(mismatch(index, "sequence", other.as_ref())),
    }
}
