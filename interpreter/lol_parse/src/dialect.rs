//! Rule tables and the recursive-descent driver.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{ParseError, ReduceError, SyntaxError};
use crate::session::Session;
use crate::token::{ParseValue, SymbolId, TokenSource};

/// A reducer maps the positional vector of matched child values to the
/// rule's semantic result. Unmatched optional children arrive as `None`.
pub type Reducer<V> = Box<dyn Fn(Vec<Option<V>>) -> Result<V, ReduceError>>;

/// A child position in a rule: a symbol that must match, or one that may
/// be absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildRef {
    Required(SymbolId),
    Optional(SymbolId),
}

impl ChildRef {
    fn id(self) -> SymbolId {
        match self {
            ChildRef::Required(id) | ChildRef::Optional(id) => id,
        }
    }

    fn is_optional(self) -> bool {
        matches!(self, ChildRef::Optional(_))
    }
}

/// Shorthand for a required child reference in a rule table.
pub fn req(id: SymbolId) -> ChildRef {
    ChildRef::Required(id)
}

/// Shorthand for an optional child reference in a rule table.
pub fn opt(id: SymbolId) -> ChildRef {
    ChildRef::Optional(id)
}

struct Rule<V> {
    children: SmallVec<[ChildRef; 6]>,
    repeating: bool,
    reduce: Reducer<V>,
}

struct NonTerminal<V> {
    rules: Vec<Rule<V>>,
}

impl<V> Default for NonTerminal<V> {
    fn default() -> Self {
        NonTerminal { rules: Vec::new() }
    }
}

/// A collection of parse rules that together form a language.
///
/// Ids `0..num_tokens` are terminals (token kinds); ids
/// `num_tokens..num_symbols` are non-terminals defined through [`rule`]
/// and [`repeating_rule`]. The embedder is responsible for knowing both
/// counts up front; a `const` table of symbol ids is the intended
/// companion.
///
/// [`rule`]: Dialect::rule
/// [`repeating_rule`]: Dialect::repeating_rule
pub struct Dialect<V> {
    num_tokens: usize,
    nodes: Vec<NonTerminal<V>>,
    names: Vec<Option<String>>,
}

impl<V: ParseValue> Dialect<V> {
    /// Create a dialect with `num_tokens` terminal kinds and
    /// `num_symbols` total symbols.
    pub fn new(num_tokens: usize, num_symbols: usize) -> Self {
        let mut nodes = Vec::with_capacity(num_symbols - num_tokens);
        nodes.resize_with(num_symbols - num_tokens, NonTerminal::default);
        Dialect {
            num_tokens,
            nodes,
            names: vec![None; num_symbols],
        }
    }

    /// Assign a diagnostic name to a symbol. Names appear in syntax
    /// errors' expected sets.
    pub fn name(&mut self, id: SymbolId, name: impl Into<String>) {
        self.names[id] = Some(name.into());
    }

    /// Register a rule for non-terminal `id`: the children are matched
    /// in sequence, then `reduce` combines their values.
    ///
    /// A non-terminal may carry several rules if they are distinguishable
    /// by their leading children; registration order is trial order.
    pub fn rule(
        &mut self,
        id: SymbolId,
        reduce: impl Fn(Vec<Option<V>>) -> Result<V, ReduceError> + 'static,
        children: &[ChildRef],
    ) {
        self.add_rule(id, false, Box::new(reduce), children);
    }

    /// Like [`rule`](Dialect::rule), but the child sequence is matched as
    /// many times as it will go (zero is fine). `reduce` runs per
    /// iteration and the results are collected through
    /// [`ParseValue::sequence`]; a repeating rule can never itself fail.
    pub fn repeating_rule(
        &mut self,
        id: SymbolId,
        reduce: impl Fn(Vec<Option<V>>) -> Result<V, ReduceError> + 'static,
        children: &[ChildRef],
    ) {
        self.add_rule(id, true, Box::new(reduce), children);
    }

    fn add_rule(&mut self, id: SymbolId, repeating: bool, reduce: Reducer<V>, children: &[ChildRef]) {
        self.nodes[id - self.num_tokens].rules.push(Rule {
            children: SmallVec::from_slice(children),
            repeating,
            reduce,
        });
    }

    /// One-shot parse of `start` off a fresh token source. For parsing
    /// several units off one stream, use a [`Session`].
    pub fn parse<S: TokenSource<V>>(&self, start: SymbolId, source: S) -> Result<V, ParseError> {
        Session::new(source).parse(self, start)
    }

    /// Recursive core: `Ok(Some)` is a match, `Ok(None)` a clean
    /// non-match with nothing consumed, `Err` a fatal error.
    pub(crate) fn parse_node<S: TokenSource<V>>(
        &self,
        id: SymbolId,
        input: &mut Session<V, S>,
    ) -> Result<Option<V>, ParseError> {
        // Base case: a terminal matches the current token by kind.
        if id < self.num_tokens {
            return Ok(input.take_if(id));
        }
        trace!(node = %self.display_name(id), "trying rules");
        let node = &self.nodes[id - self.num_tokens];
        for rule in &node.rules {
            if let Some(value) = self.attempt_rule(id, rule, input)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn attempt_rule<S: TokenSource<V>>(
        &self,
        id: SymbolId,
        rule: &Rule<V>,
        input: &mut Session<V, S>,
    ) -> Result<Option<V>, ParseError> {
        if rule.repeating {
            let mut items = Vec::new();
            while let Some(value) = self.attempt_once(id, rule, input)? {
                items.push(value);
            }
            return Ok(Some(V::sequence(items)));
        }
        self.attempt_once(id, rule, input)
    }

    /// One pass over a rule's children. The first matched child,
    /// optional or not, is the commit point: its tokens are consumed,
    /// so a later required-child failure cannot backtrack and becomes a
    /// fatal syntax error.
    fn attempt_once<S: TokenSource<V>>(
        &self,
        id: SymbolId,
        rule: &Rule<V>,
        input: &mut Session<V, S>,
    ) -> Result<Option<V>, ParseError> {
        let mut values: Vec<Option<V>> = Vec::with_capacity(rule.children.len());
        let mut committed = false;
        for child in &rule.children {
            match self.parse_node(child.id(), input)? {
                Some(value) => {
                    committed = true;
                    values.push(Some(value));
                }
                None if child.is_optional() => values.push(None),
                None if !committed => return Ok(None),
                None => {
                    let error = SyntaxError {
                        found: input.describe_position(),
                        expected: self.expected_names(child.id()),
                    };
                    debug!(node = %self.display_name(id), %error, "fatal syntax error");
                    return Err(error.into());
                }
            }
        }
        let value = (rule.reduce)(values).map_err(|source| ParseError::Reduce {
            node: self.display_name(id),
            source,
        })?;
        Ok(Some(value))
    }

    pub(crate) fn display_name(&self, id: SymbolId) -> String {
        match &self.names[id] {
            Some(name) => name.clone(),
            None => format!("#{id}"),
        }
    }

    /// The continuations a failed symbol would have accepted: the symbol
    /// itself for a terminal, otherwise each rule's leading symbols up to
    /// and including the first required one.
    fn expected_names(&self, id: SymbolId) -> Vec<String> {
        if id < self.num_tokens {
            return vec![self.display_name(id)];
        }
        let mut expected = Vec::new();
        for rule in &self.nodes[id - self.num_tokens].rules {
            for child in &rule.children {
                let name = self.display_name(child.id());
                if !expected.contains(&name) {
                    expected.push(name);
                }
                if !child.is_optional() {
                    break;
                }
            }
        }
        if expected.is_empty() {
            expected.push(self.display_name(id));
        }
        expected
    }
}
