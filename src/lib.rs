pub mod coerce;
pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod io;
pub mod parser;
pub mod simplify;

mod macros;
mod substitute;


pub use coerce::{ToExpr, to_expr};
pub use derivative::derivative;
pub use error::{Error, ParseError};
pub use eval::Bindings;
pub use expr::{
    AddOp, Associative, BinaryOp, Distributive, Expr, MaybeExpr, MulOp, add, mul, negate, sub,
};
pub use io::to_sexpr;
pub use parser::from_sexpr;
pub use simplify::simplify;
