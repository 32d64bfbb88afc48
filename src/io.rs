use crate::{
    coerce::ToExpr,
    error::Error,
    expr::{BinaryOp, Expr, Expr::*},
};
use std::fmt::Write;

/// Render `expr` in the canonical prefix notation, for example
/// `(+ 2 (* 3 4))`. Structural equality of expressions agrees with equality
/// of this rendering.
pub fn to_sexpr(expr: impl ToExpr) -> Result<String, Error> {
    Ok(expr.to_expr()?.to_sexpr())
}

impl Expr {
    /// Render this expression in the canonical prefix notation.
    pub fn to_sexpr(&self) -> String {
        let mut out = String::with_capacity(self.len() * 4); // Likely enough memory.
        write_sexpr(self, &mut out);
        return out;
    }
}

fn write_sexpr(expr: &Expr, out: &mut String) {
    match expr {
        Symbol(name) => out.push_str(name),
        Integer(value) => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value}");
        }
        Add(lhs, rhs) => write_sexpr_binary(BinaryOp::Add, lhs, rhs, out),
        Mul(lhs, rhs) => write_sexpr_binary(BinaryOp::Multiply, lhs, rhs, out),
    }
}

fn write_sexpr_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, out: &mut String) {
    out.push('(');
    out.push(op.symbol());
    out.push(' ');
    write_sexpr(lhs, out);
    out.push(' ');
    write_sexpr(rhs, out);
    out.push(')');
}

impl std::fmt::Display for Expr {
    /// The default rendering is infix, e.g. `((x * 2) + 1)`. The alternate
    /// flag, `{:#}`, draws the tree with one node per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f)?;
            return write_tree(self, f, &mut String::new(), None);
        }
        match self {
            Symbol(name) => write!(f, "{}", name),
            Integer(value) => write!(f, "{}", value),
            Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
        }
    }
}

/// Write one line per node. `prefix` holds the gutter drawn for the
/// ancestors, and `last` says whether this node is the last child of its
/// parent, or `None` for the root.
fn write_tree(
    expr: &Expr,
    f: &mut std::fmt::Formatter<'_>,
    prefix: &mut String,
    last: Option<bool>,
) -> std::fmt::Result {
    let label = match expr {
        Symbol(name) => format!("Symbol({})", name),
        Integer(value) => format!("Integer({})", value),
        Add(..) => "Add".to_string(),
        Mul(..) => "Mul".to_string(),
    };
    match last {
        None => writeln!(f, "{}", label)?,
        Some(true) => writeln!(f, "{} └── {}", prefix, label)?,
        Some(false) => writeln!(f, "{} ├── {}", prefix, label)?,
    }
    if let Some((lhs, rhs)) = expr.children() {
        let len = prefix.len();
        match last {
            None => {}
            Some(true) => prefix.push_str("     "),
            Some(false) => prefix.push_str(" │   "),
        }
        write_tree(lhs, f, prefix, Some(false))?;
        write_tree(rhs, f, prefix, Some(true))?;
        prefix.truncate(len);
    }
    Ok(())
}
