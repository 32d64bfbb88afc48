use crate::{
    error::Error,
    expr::{Expr, MaybeExpr},
};

/// Conversion of operands into expressions. This is the only way values
/// enter the arithmetic: expressions pass through unchanged, native integers
/// become `Integer` nodes, and everything else is rejected.
pub trait ToExpr {
    fn to_expr(self) -> MaybeExpr;
}

/// Convert `value` into an expression.
pub fn to_expr(value: impl ToExpr) -> MaybeExpr {
    value.to_expr()
}

impl ToExpr for Expr {
    fn to_expr(self) -> MaybeExpr {
        Ok(self)
    }
}

impl ToExpr for &Expr {
    fn to_expr(self) -> MaybeExpr {
        Ok(self.clone())
    }
}

impl ToExpr for MaybeExpr {
    fn to_expr(self) -> MaybeExpr {
        self
    }
}

macro_rules! lossless_integer {
    ($($t:ty),+) => {
        $(impl ToExpr for $t {
            fn to_expr(self) -> MaybeExpr {
                Ok(Expr::integer(i64::from(self)))
            }
        })+
    };
}

lossless_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer {
    ($($t:ty),+) => {
        $(impl ToExpr for $t {
            fn to_expr(self) -> MaybeExpr {
                match i64::try_from(self) {
                    Ok(value) => Ok(Expr::integer(value)),
                    Err(_) => Err(Error::IntegerOutOfRange),
                }
            }
        })+
    };
}

wide_integer!(isize, usize, u64, i128, u128);

macro_rules! not_coercible {
    ($($t:ty),+) => {
        $(impl ToExpr for $t {
            fn to_expr(self) -> MaybeExpr {
                Err(Error::CannotCoerce(stringify!($t)))
            }
        })+
    };
}

not_coercible!(f32, f64, bool, char, String);

impl ToExpr for &str {
    fn to_expr(self) -> MaybeExpr {
        Err(Error::CannotCoerce("&str"))
    }
}
