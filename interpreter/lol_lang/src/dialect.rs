//! Grammar node ids and the dialect rule table.

use lol_parse::{opt, req, Dialect};
use lol_token::{kind, phrases};

use crate::expr;
use crate::sem::Sem;
use crate::stmt;
use crate::math;

/// Non-terminal symbol ids, continuing the token-kind id space.
pub mod node {
    use lol_parse::SymbolId;
    use lol_token::kind::NUM_TOKENS;

    /// An expression.
    pub const EXPR: SymbolId = NUM_TOKENS;
    /// A full expression list: `x [[AN] y]... [MKAY]`.
    pub const EXPR_LIST: SymbolId = NUM_TOKENS + 1;
    /// The repeated tail of an expression list.
    pub const MOAR_LIST: SymbolId = NUM_TOKENS + 2;
    /// A statement, including its line end.
    pub const STATEMENT: SymbolId = NUM_TOKENS + 3;
    /// What to do with an already-named variable.
    pub const VAR_PREDICATE: SymbolId = NUM_TOKENS + 4;
    /// `ITZ <expr>` declaration initializer.
    pub const INITIALIZER: SymbolId = NUM_TOKENS + 5;
    /// A cast target type phrase.
    pub const CAST_TYPE: SymbolId = NUM_TOKENS + 6;

    /// Total symbol count (terminals + non-terminals).
    pub const NUM_SYMBOLS: usize = NUM_TOKENS + 7;
}

/// Build the language's dialect. Construct once and share by reference;
/// the rule table is read-only after this.
pub fn dialect() -> Dialect<Sem> {
    let mut d = Dialect::new(kind::NUM_TOKENS, node::NUM_SYMBOLS);

    // Diagnostic names: canonical phrase text for phrase kinds, fixed
    // names for the rest.
    let trie = phrases();
    for id in 0..kind::NUM_TOKENS {
        if let Some(canonical) = trie.canonical(id) {
            d.name(id, canonical);
        }
    }
    d.name(kind::ERR, "error token");
    d.name(kind::LITERAL, "literal");
    d.name(kind::IDENT, "identifier");
    d.name(node::EXPR, "expression");
    d.name(node::EXPR_LIST, "expression list");
    d.name(node::MOAR_LIST, "expression list tail");
    d.name(node::STATEMENT, "statement");
    d.name(node::VAR_PREDICATE, "variable predicate");
    d.name(node::INITIALIZER, "initializer");
    d.name(node::CAST_TYPE, "type");

    // Statement
    d.rule(
        node::STATEMENT,
        stmt::var_predicate,
        &[req(kind::IDENT), req(node::VAR_PREDICATE)],
    );
    d.rule(
        node::STATEMENT,
        stmt::declaration,
        &[
            req(kind::I_HAS_A),
            req(kind::IDENT),
            opt(node::INITIALIZER),
            req(kind::EOL),
        ],
    );
    d.rule(
        node::STATEMENT,
        stmt::bare_expr,
        &[req(node::EXPR), req(kind::EOL)],
    );
    d.rule(
        node::STATEMENT,
        stmt::marker,
        &[req(kind::HAI), opt(kind::LITERAL), req(kind::EOL)],
    );
    d.rule(
        node::STATEMENT,
        stmt::marker,
        &[req(kind::KTHXBYE), req(kind::EOL)],
    );

    // Initializer
    d.rule(
        node::INITIALIZER,
        stmt::initializer,
        &[req(kind::ITZ), req(node::EXPR)],
    );

    // Cast target types
    for type_kind in [
        kind::A_NOOB,
        kind::A_TROOF,
        kind::A_NUMBR,
        kind::A_NUMBAR,
        kind::A_YARN,
    ] {
        d.rule(node::CAST_TYPE, expr::cast_type, &[req(type_kind)]);
    }

    // Variable predicates
    d.rule(node::VAR_PREDICATE, stmt::it_predicate, &[req(kind::EOL)]);
    d.rule(
        node::VAR_PREDICATE,
        stmt::assign_predicate,
        &[req(kind::R), req(node::EXPR)],
    );
    d.rule(
        node::VAR_PREDICATE,
        stmt::cast_predicate,
        &[req(kind::IS_NOW), req(node::CAST_TYPE)],
    );

    // Expression lists
    d.rule(
        node::EXPR_LIST,
        expr::expr_list,
        &[req(node::EXPR), req(node::MOAR_LIST), opt(kind::MKAY)],
    );
    d.repeating_rule(
        node::MOAR_LIST,
        expr::list_element,
        &[opt(kind::AN), req(node::EXPR)],
    );

    // Expressions
    d.rule(node::EXPR, expr::literal, &[req(kind::LITERAL)]);
    d.rule(node::EXPR, expr::ident, &[req(kind::IDENT)]);
    d.rule(
        node::EXPR,
        expr::maek,
        &[req(kind::MAEK), req(node::EXPR), req(node::CAST_TYPE)],
    );
    // Boolean
    d.rule(node::EXPR, expr::not, &[req(kind::NOT), req(node::EXPR)]);
    d.rule(
        node::EXPR,
        expr::both_of,
        &[req(kind::BOTH_OF), req(node::EXPR), opt(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        expr::either_of,
        &[req(kind::EITHER_OF), req(node::EXPR), opt(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        expr::won_of,
        &[req(kind::WON_OF), req(node::EXPR), opt(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        expr::all_of,
        &[req(kind::ALL_OF), req(node::EXPR_LIST)],
    );
    d.rule(
        node::EXPR,
        expr::any_of,
        &[req(kind::ANY_OF), req(node::EXPR_LIST)],
    );
    // Comparison
    d.rule(
        node::EXPR,
        expr::both_saem,
        &[req(kind::BOTH_SAEM), req(node::EXPR), opt(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        expr::diffrint,
        &[req(kind::DIFFRINT), req(node::EXPR), opt(kind::AN), req(node::EXPR)],
    );
    // Math
    d.rule(
        node::EXPR,
        math::biggr_of,
        &[req(kind::BIGGR_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::smallr_of,
        &[req(kind::SMALLR_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::sum_of,
        &[req(kind::SUM_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::diff_of,
        &[req(kind::DIFF_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::produkt_of,
        &[req(kind::PRODUKT_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::quoshunt_of,
        &[req(kind::QUOSHUNT_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    d.rule(
        node::EXPR,
        math::mod_of,
        &[req(kind::MOD_OF), req(node::EXPR), req(kind::AN), req(node::EXPR)],
    );
    // Concatenation
    d.rule(
        node::EXPR,
        expr::smoosh,
        &[req(kind::SMOOSH), req(node::EXPR_LIST)],
    );

    d
}
