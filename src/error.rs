use std::fmt::{Debug, Display};

/// Reasons an s-expression could not be parsed.
#[derive(Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended in the middle of an expression.
    UnexpectedEnd,
    /// A closing parenthesis without a matching opening one.
    UnbalancedParens,
    /// An operator was applied to the wrong number of arguments.
    WrongArity(String, usize),
    /// More tokens were found after a complete expression.
    TrailingTokens,
    /// `()` is not an expression.
    EmptyList,
}

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// A value of the named type cannot be converted to an expression.
    CannotCoerce(&'static str),
    /// A native integer does not fit in the integer literal type.
    IntegerOutOfRange,
    /// An expression or operator outside the supported set.
    UnsupportedExpression(String),
    /// Derivatives can only be taken with respect to a symbol.
    NotASymbol(String),

    // Evaluation related errors
    /// A symbol was not assigned a value before evaluating.
    VariableNotFound(String),
    IntegerOverflow,

    // Serialization.
    ParseError(ParseError),
}

impl Debug for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;
        match self {
            UnexpectedEnd => write!(f, "UnexpectedEnd"),
            UnbalancedParens => write!(f, "UnbalancedParens"),
            WrongArity(op, n) => f.debug_tuple("WrongArity").field(op).field(n).finish(),
            TrailingTokens => write!(f, "TrailingTokens"),
            EmptyList => write!(f, "EmptyList"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            CannotCoerce(name) => f.debug_tuple("CannotCoerce").field(name).finish(),
            IntegerOutOfRange => write!(f, "IntegerOutOfRange"),
            UnsupportedExpression(what) => {
                f.debug_tuple("UnsupportedExpression").field(what).finish()
            }
            NotASymbol(what) => f.debug_tuple("NotASymbol").field(what).finish(),
            VariableNotFound(name) => f.debug_tuple("VariableNotFound").field(name).finish(),
            IntegerOverflow => write!(f, "IntegerOverflow"),
            ParseError(err) => f.debug_tuple("ParseError").field(err).finish(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            CannotCoerce(name) => write!(f, "cannot convert a value of type {name} to Expr"),
            IntegerOutOfRange => write!(f, "integer does not fit in an i64 literal"),
            UnsupportedExpression(what) => write!(f, "unsupported expression: {what}"),
            NotASymbol(what) => write!(f, "expected a symbol, found {what}"),
            VariableNotFound(name) => write!(f, "no value bound to symbol '{name}'"),
            IntegerOverflow => write!(f, "integer overflow during evaluation"),
            ParseError(err) => write!(f, "cannot parse s-expression: {err:?}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Error::ParseError(value)
    }
}
