//! Expression reducers: literals, lookups, casts, boolean connectives,
//! comparison, and list operations.

use lol_parse::ReduceError;
use lol_value::{cast, saem, troof, yarn_implicit, Value};

use crate::sem::{take_expr, take_exprs, take_value, take_word, Sem};

type Args = Vec<Option<Sem>>;
type Reduced = Result<Sem, ReduceError>;

/// A literal token becomes a constant expression.
pub(crate) fn literal(mut args: Args) -> Reduced {
    let value = take_value(&mut args, 0)?;
    Ok(Sem::expr(move |_| Ok(value.clone())))
}

/// An identifier becomes a namespace lookup.
pub(crate) fn ident(mut args: Args) -> Reduced {
    let name = take_word(&mut args, 0)?;
    Ok(Sem::expr(move |ns| ns.get(&name)))
}

/// `MAEK x A <type>`: explicit cast.
pub(crate) fn maek(mut args: Args) -> Reduced {
    let x = take_expr(&mut args, 1)?;
    let type_phrase = take_word(&mut args, 2)?;
    Ok(Sem::expr(move |ns| cast(&type_phrase, &x(ns)?)))
}

/// A cast-type rule passes its canonical phrase text through.
pub(crate) fn cast_type(mut args: Args) -> Reduced {
    Ok(Sem::Word(take_word(&mut args, 0)?))
}

/// `NOT x`.
pub(crate) fn not(mut args: Args) -> Reduced {
    let x = take_expr(&mut args, 1)?;
    Ok(Sem::expr(move |ns| Ok(Value::Troof(!troof(&x(ns)?)))))
}

fn connective(mut args: Args, apply: fn(bool, bool) -> bool) -> Reduced {
    let x = take_expr(&mut args, 1)?;
    let y = take_expr(&mut args, 3)?;
    Ok(Sem::expr(move |ns| {
        // Both operands evaluate unconditionally; the two-operand
        // connectives never short-circuit.
        let a = troof(&x(ns)?);
        let b = troof(&y(ns)?);
        Ok(Value::Troof(apply(a, b)))
    }))
}

/// `BOTH OF x AN y`.
pub(crate) fn both_of(args: Args) -> Reduced {
    connective(args, |a, b| a && b)
}

/// `EITHER OF x AN y`.
pub(crate) fn either_of(args: Args) -> Reduced {
    connective(args, |a, b| a || b)
}

/// `WON OF x AN y`: exclusive or.
pub(crate) fn won_of(args: Args) -> Reduced {
    connective(args, |a, b| a != b)
}

/// `ALL OF ...`: short-circuits on the first false element; an empty
/// list is true.
pub(crate) fn all_of(mut args: Args) -> Reduced {
    let elements = take_exprs(&mut args, 1)?;
    Ok(Sem::expr(move |ns| {
        for element in &elements {
            if !troof(&element(ns)?) {
                return Ok(Value::Troof(false));
            }
        }
        Ok(Value::Troof(true))
    }))
}

/// `ANY OF ...`: short-circuits on the first true element; an empty
/// list is false.
pub(crate) fn any_of(mut args: Args) -> Reduced {
    let elements = take_exprs(&mut args, 1)?;
    Ok(Sem::expr(move |ns| {
        for element in &elements {
            if troof(&element(ns)?) {
                return Ok(Value::Troof(true));
            }
        }
        Ok(Value::Troof(false))
    }))
}

/// `BOTH SAEM x AN y`.
pub(crate) fn both_saem(mut args: Args) -> Reduced {
    let x = take_expr(&mut args, 1)?;
    let y = take_expr(&mut args, 3)?;
    Ok(Sem::expr(move |ns| Ok(Value::Troof(saem(&x(ns)?, &y(ns)?)))))
}

/// `DIFFRINT x AN y`.
pub(crate) fn diffrint(mut args: Args) -> Reduced {
    let x = take_expr(&mut args, 1)?;
    let y = take_expr(&mut args, 3)?;
    Ok(Sem::expr(move |ns| {
        Ok(Value::Troof(!saem(&x(ns)?, &y(ns)?)))
    }))
}

/// `SMOOSH ...`: left-to-right implicit stringification and
/// concatenation.
pub(crate) fn smoosh(mut args: Args) -> Reduced {
    let elements = take_exprs(&mut args, 1)?;
    Ok(Sem::expr(move |ns| {
        let mut out = String::new();
        for element in &elements {
            out.push_str(&yarn_implicit(&element(ns)?)?);
        }
        Ok(Value::Yarn(out))
    }))
}

/// An expression list: the leading expression plus the repeated tail,
/// flattened. The optional `MKAY` terminator is already consumed.
pub(crate) fn expr_list(mut args: Args) -> Reduced {
    let first = take_expr(&mut args, 0)?;
    let rest = take_exprs(&mut args, 1)?;
    let mut elements = vec![Sem::Expr(first)];
    elements.extend(rest.into_iter().map(Sem::Expr));
    Ok(Sem::Seq(elements))
}

/// One list-tail element: `[AN] x`.
pub(crate) fn list_element(mut args: Args) -> Reduced {
    Ok(Sem::Expr(take_expr(&mut args, 1)?))
}
