use crate::{
    coerce::ToExpr,
    expr::{Expr, Expr::*, MaybeExpr},
};
use tracing::{debug, trace, trace_span};

/// Simplify `expr` after coercing it into an expression.
pub fn simplify(expr: impl ToExpr) -> MaybeExpr {
    Ok(expr.to_expr()?.simplify())
}

impl Expr {
    /// Apply the local rewrite rules once, bottom up:
    ///
    /// - `0 + a = a + 0 = a`
    /// - `a + a = 2 * a`
    /// - `0 * a = a * 0 = 0`
    /// - `1 * a = a * 1 = a`
    ///
    /// Rebuilding a sum re-applies the folding of integer sums.
    ///
    /// This is a single pass, not a fixed point iteration. A rewrite can
    /// expose another opportunity higher up that only a second call to
    /// `simplify` will take. For example an unfolded `(+ 1 1)` becomes `(* 2
    /// 1)`, and only simplifying that again yields `2`.
    pub fn simplify(&self) -> Expr {
        let _span = trace_span!("simplify").entered();
        debug!(expr = %self.to_sexpr(), "simplifying");
        simplify_node(self)
    }
}

fn simplify_node(expr: &Expr) -> Expr {
    match expr {
        Symbol(_) | Integer(_) => expr.clone(),
        Add(lhs, rhs) => {
            let a = simplify_node(lhs);
            let b = simplify_node(rhs);
            if a.is_zero() {
                trace!(rule = "zero-add", "dropping left operand");
                return b;
            }
            if b.is_zero() {
                trace!(rule = "zero-add", "dropping right operand");
                return a;
            }
            if a == b {
                trace!(rule = "duplicate-add", "{} + {} -> 2 * {}", a, b, a);
                return Expr::integer(2) * a;
            }
            a + b
        }
        Mul(lhs, rhs) => {
            let a = simplify_node(lhs);
            let b = simplify_node(rhs);
            if a.is_zero() || b.is_zero() {
                trace!(rule = "zero-mul", "{} * {} -> 0", a, b);
                return Expr::zero();
            }
            if a.is_one() {
                trace!(rule = "unit-mul", "dropping left operand");
                return b;
            }
            if b.is_one() {
                trace!(rule = "unit-mul", "dropping right operand");
                return a;
            }
            a * b
        }
    }
}
