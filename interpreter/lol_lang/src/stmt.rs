//! Statement and variable-predicate reducers.

use lol_parse::ReduceError;
use lol_value::{cast, Value};

use crate::sem::{take_expr, take_opt_expr, take_pred, take_word, Sem};

type Args = Vec<Option<Sem>>;
type Reduced = Result<Sem, ReduceError>;

/// `<ident> <predicate>`: a statement that applies a predicate to a
/// named variable.
pub(crate) fn var_predicate(mut args: Args) -> Reduced {
    let name = take_word(&mut args, 0)?;
    let predicate = take_pred(&mut args, 1)?;
    Ok(Sem::stmt(move |ns| predicate(&name, ns)))
}

/// `I HAS A <ident> [ITZ <expr>]`: declaration, to `NOOB` or to the
/// initializer's value, unconditionally overwriting a prior binding.
pub(crate) fn declaration(mut args: Args) -> Reduced {
    let name = take_word(&mut args, 1)?;
    match take_opt_expr(&mut args, 2)? {
        None => Ok(Sem::stmt(move |ns| {
            ns.declare(name.clone(), Value::Noob);
            Ok(())
        })),
        Some(initializer) => Ok(Sem::stmt(move |ns| {
            let value = initializer(ns)?;
            ns.declare(name.clone(), value);
            Ok(())
        })),
    }
}

/// A bare expression as a statement: its value lands in the pronoun.
pub(crate) fn bare_expr(mut args: Args) -> Reduced {
    let expression = take_expr(&mut args, 0)?;
    Ok(Sem::stmt(move |ns| {
        let value = expression(ns)?;
        ns.set_it(value);
        Ok(())
    }))
}

/// `ITZ <expr>`: the initializer rule passes the expression through.
pub(crate) fn initializer(mut args: Args) -> Reduced {
    Ok(Sem::Expr(take_expr(&mut args, 1)?))
}

/// `HAI [version]` and `KTHXBYE`: the program markers execute as
/// no-ops.
pub(crate) fn marker(_args: Args) -> Reduced {
    Ok(Sem::stmt(|_| Ok(())))
}

/// A lone line end after the identifier: copy the variable into the
/// pronoun.
pub(crate) fn it_predicate(_args: Args) -> Reduced {
    Ok(Sem::pred(|name, ns| {
        let value = ns.get(name)?;
        ns.set_it(value);
        Ok(())
    }))
}

/// `R <expr>`: re-evaluate and assign. Fails on an undeclared name.
pub(crate) fn assign_predicate(mut args: Args) -> Reduced {
    let expression = take_expr(&mut args, 1)?;
    Ok(Sem::pred(move |name, ns| {
        let value = expression(ns)?;
        ns.assign(name, value)
    }))
}

/// `IS NOW <type>`: cast the variable in place.
pub(crate) fn cast_predicate(mut args: Args) -> Reduced {
    let type_phrase = take_word(&mut args, 1)?;
    Ok(Sem::pred(move |name, ns| {
        let value = ns.get(name)?;
        let converted = cast(&type_phrase, &value)?;
        ns.declare(name, converted);
        Ok(())
    }))
}
