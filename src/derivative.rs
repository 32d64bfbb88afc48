use crate::{
    coerce::ToExpr,
    error::Error,
    expr::{Expr, Expr::*, MaybeExpr},
};
use tracing::{debug, trace_span};

/// Compute the symbolic derivative of `expr` with respect to the symbol
/// `var`. Fails if either argument cannot be coerced, or if `var` is not a
/// symbol.
pub fn derivative(expr: impl ToExpr, var: impl ToExpr) -> MaybeExpr {
    let expr = expr.to_expr()?;
    match var.to_expr()? {
        Symbol(name) => Ok(expr.derivative(&name)),
        other => Err(Error::NotASymbol(other.to_sexpr())),
    }
}

impl Expr {
    /// Compute the derivative of this expression with respect to the symbol
    /// named `var`. The input is simplified first, and so is every
    /// intermediate result, so the derivative is returned in simplified
    /// form. Like terms are never collected: the derivative of `x * x * x`
    /// is `((2 * x) * x) + (x * x)`.
    pub fn derivative(&self, var: &str) -> Expr {
        let _span = trace_span!("derivative", var).entered();
        debug!(expr = %self.to_sexpr(), "differentiating");
        compute_deriv(self, var)
    }
}

fn compute_deriv(expr: &Expr, var: &str) -> Expr {
    let expr = expr.simplify();
    match &expr {
        Add(lhs, rhs) => (compute_deriv(lhs, var) + compute_deriv(rhs, var)).simplify(),
        Mul(lhs, rhs) => {
            // Product rule.
            let first = compute_deriv(lhs, var) * rhs.as_ref();
            let second = compute_deriv(rhs, var) * lhs.as_ref();
            (first + second).simplify()
        }
        Integer(_) => Expr::zero(),
        Symbol(name) => {
            if name == var {
                Expr::one()
            } else {
                Expr::zero()
            }
        }
    }
}
