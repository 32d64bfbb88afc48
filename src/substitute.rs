use crate::expr::{Expr, Expr::*};
use std::sync::Arc;

impl Expr {
    /// Substitute all subtrees (sub expressions) in this tree that are equal
    /// to `old` with `new`. Matching uses structural equality. The result is
    /// not simplified, and subtrees that contain no matches are shared with
    /// this tree rather than copied.
    pub fn substitute(&self, old: &Expr, new: &Expr) -> Expr {
        match substitute_node(self, old, new) {
            Some(replaced) => replaced,
            None => self.clone(), // No matches found for substitution.
        }
    }
}

/// Returns `None` when nothing under `expr` matched.
fn substitute_node(expr: &Expr, old: &Expr, new: &Expr) -> Option<Expr> {
    if expr == old {
        return Some(new.clone());
    }
    let (lhs, rhs) = match expr {
        Symbol(_) | Integer(_) => return None,
        Add(lhs, rhs) | Mul(lhs, rhs) => (lhs, rhs),
    };
    let newlhs = substitute_node(lhs, old, new);
    let newrhs = substitute_node(rhs, old, new);
    if newlhs.is_none() && newrhs.is_none() {
        return None;
    }
    let newlhs = newlhs.map(Arc::new).unwrap_or_else(|| lhs.clone());
    let newrhs = newrhs.map(Arc::new).unwrap_or_else(|| rhs.clone());
    Some(match expr {
        Add(..) => Add(newlhs, newrhs),
        _ => Mul(newlhs, newrhs),
    })
}
