use crate::{coerce::ToExpr, error::Error};
use std::{
    hash::{Hash, Hasher},
    ops,
    sync::Arc,
};

/// Marker for operators where `(a op b) op c == a op (b op c)`. Carries no
/// behaviour, nothing in the simplifier relies on it.
pub trait Associative {}

/// Marker for operators that distribute over addition, i.e. `a op (b + c) ==
/// (a op b) + (a op c)`. The distribution is never expanded automatically.
pub trait Distributive {}

/// Tag type for addition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddOp;

/// Tag type for multiplication.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MulOp;

impl Associative for AddOp {}
impl Distributive for AddOp {}
impl Associative for MulOp {}
impl Distributive for MulOp {}

/// Represents an operation with two inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Multiply,
}

impl BinaryOp {
    /// The character used for this operator in both the infix and the prefix
    /// renderings.
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Multiply => '*',
        }
    }
}

/// An expression tree. Nodes are immutable once constructed, and children
/// are reference counted so that subtrees can be shared between trees, and
/// between threads.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(String),
    Integer(i64),
    Add(Arc<Expr>, Arc<Expr>),
    Mul(Arc<Expr>, Arc<Expr>),
}

use Expr::*;

pub type MaybeExpr = Result<Expr, Error>;

/// Whether `text` starts like an integer literal: a digit, or a sign
/// followed by a digit.
pub(crate) fn looks_like_integer(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') | Some('+') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Symbol names must survive a round trip through the canonical prefix
/// form, and must never be confused with integer literals.
fn is_valid_symbol_name(name: &str) -> bool {
    !name.is_empty()
        && !looks_like_integer(name)
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')')
}

impl Expr {
    /// Create a symbol with the given `name`.
    ///
    /// Panics if the name is empty, contains whitespace or parentheses, or
    /// looks like an integer literal.
    pub fn symbol(name: impl Into<String>) -> Expr {
        let name = name.into();
        assert!(
            is_valid_symbol_name(&name),
            "Invalid symbol name: {name:?}"
        );
        Symbol(name)
    }

    /// Create an integer literal.
    pub fn integer(value: i64) -> Expr {
        Integer(value)
    }

    pub fn zero() -> Expr {
        Integer(0)
    }

    pub fn one() -> Expr {
        Integer(1)
    }

    /// Create an `Add` node from the two operands without any folding.
    pub fn add_node(lhs: Expr, rhs: Expr) -> Expr {
        Add(Arc::new(lhs), Arc::new(rhs))
    }

    /// Create a `Mul` node from the two operands.
    pub fn mul_node(lhs: Expr, rhs: Expr) -> Expr {
        Mul(Arc::new(lhs), Arc::new(rhs))
    }

    /// Create a binary node for `op`, without any folding.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        match op {
            BinaryOp::Add => Expr::add_node(lhs, rhs),
            BinaryOp::Multiply => Expr::mul_node(lhs, rhs),
        }
    }

    /// Sum of two expressions. Two integers are folded into one, unless the
    /// sum overflows, in which case the `Add` node is kept.
    fn folded_sum(lhs: Expr, rhs: Expr) -> Expr {
        if let (Integer(a), Integer(b)) = (&lhs, &rhs) {
            if let Some(sum) = a.checked_add(*b) {
                return Integer(sum);
            }
        }
        Expr::add_node(lhs, rhs)
    }

    /// `Symbol` and `Integer` nodes have no children.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Symbol(_) | Integer(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Integer(0))
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Integer(1))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Integer(value) => Some(*value),
            Symbol(_) | Add(..) | Mul(..) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Symbol(name) => Some(name),
            Integer(_) | Add(..) | Mul(..) => None,
        }
    }

    /// The operator of a binary node.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Add(..) => Some(BinaryOp::Add),
            Mul(..) => Some(BinaryOp::Multiply),
            Symbol(_) | Integer(_) => None,
        }
    }

    /// The two inputs of a binary node.
    pub fn children(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Add(lhs, rhs) | Mul(lhs, rhs) => Some((lhs, rhs)),
            Symbol(_) | Integer(_) => None,
        }
    }

    /// The number of nodes in this tree. Shared subtrees are counted once for
    /// every time they are reachable.
    pub fn len(&self) -> usize {
        match self.children() {
            Some((lhs, rhs)) => 1 + lhs.len() + rhs.len(),
            None => 1,
        }
    }

    /// Length of the longest path from this node to a leaf. Atoms have depth 0.
    pub fn depth(&self) -> usize {
        match self.children() {
            Some((lhs, rhs)) => 1 + usize::max(lhs.depth(), rhs.depth()),
            None => 0,
        }
    }

    /// Get a unique list of all symbols in this tree. The symbols will appear
    /// in the same order as they first appear in the tree, reading left to
    /// right.
    pub fn symbols(&self) -> Vec<&str> {
        fn collect<'a>(expr: &'a Expr, dst: &mut Vec<&'a str>) {
            match expr {
                Symbol(name) => {
                    if !dst.contains(&name.as_str()) {
                        dst.push(name);
                    }
                }
                Integer(_) => {}
                Add(lhs, rhs) | Mul(lhs, rhs) => {
                    collect(lhs, dst);
                    collect(rhs, dst);
                }
            }
        }
        let mut symbols = Vec::new();
        collect(self, &mut symbols);
        return symbols;
    }
}

/// Children are compared by pointer first, so shared subtrees are not walked.
fn same_child(a: &Arc<Expr>, b: &Arc<Expr>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

impl PartialEq for Expr {
    /// Structural equality. Two trees are equal iff their canonical prefix
    /// forms are equal. This is not mathematical equivalence, `x + y` and
    /// `y + x` are different expressions.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Symbol(a), Symbol(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Add(l1, r1), Add(l2, r2)) | (Mul(l1, r1), Mul(l2, r2)) => {
                same_child(l1, l2) && same_child(r1, r2)
            }
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Symbol(name) => name.hash(state),
            Integer(value) => value.hash(state),
            Add(lhs, rhs) | Mul(lhs, rhs) => {
                lhs.hash(state);
                rhs.hash(state);
            }
        }
    }
}

impl PartialEq<i64> for Expr {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Integer(value) if value == other)
    }
}

impl PartialEq<Expr> for i64 {
    fn eq(&self, other: &Expr) -> bool {
        other == self
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::folded_sum(self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul_node(self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::integer(-1) * self
    }
}

impl ops::Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -self.clone()
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

/// Forward the operators on references to the owned implementations. Cloning
/// an expression only bumps the reference counts of its children.
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident) => {
        impl ops::$imp<&Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                ops::$imp::$method(self.clone(), rhs.clone())
            }
        }

        impl ops::$imp<Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                ops::$imp::$method(self.clone(), rhs)
            }
        }

        impl ops::$imp<&Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                ops::$imp::$method(self, rhs.clone())
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Mul, mul);
forward_ref_binop!(Sub, sub);

macro_rules! binary_func {
    ($name:ident, $op:tt) => {
        pub fn $name(lhs: impl ToExpr, rhs: impl ToExpr) -> MaybeExpr {
            Ok(lhs.to_expr()? $op rhs.to_expr()?)
        }
    };
}

binary_func!(add, +);
binary_func!(mul, *);
binary_func!(sub, -);

pub fn negate(expr: impl ToExpr) -> MaybeExpr {
    Ok(-expr.to_expr()?)
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Integer(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Integer(value as i64)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::symbol(name)
    }
}
