use crate::{
    error::Error,
    expr::{BinaryOp, Expr, Expr::*},
};

impl BinaryOp {
    /// Compute the result of the operation on `lhs` and `rhs`.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, Error> {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Multiply => lhs.checked_mul(rhs),
        };
        result.ok_or(Error::IntegerOverflow)
    }
}

/// Values assigned to symbols for evaluation.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    vars: Vec<(String, i64)>,
}

impl Bindings {
    pub fn new() -> Bindings {
        Bindings::default()
    }

    /// Bind `value` to the symbol `label`, replacing any previous value.
    pub fn set_value(&mut self, label: &str, value: i64) {
        match self.vars.iter_mut().find(|(l, _)| l == label) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((label.to_string(), value)),
        }
    }

    pub fn value(&self, label: &str) -> Option<i64> {
        self.vars
            .iter()
            .find_map(|(l, v)| if l == label { Some(*v) } else { None })
    }

    /// Remove all bindings.
    pub fn clear(&mut self) {
        self.vars.clear();
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut bindings = Bindings::new();
        for (label, value) in iter {
            bindings.set_value(label.as_ref(), value);
        }
        return bindings;
    }
}

impl Expr {
    /// Compute the value of this expression, with the symbols taking their
    /// values from `bindings`. Arithmetic is checked, overflow is reported as
    /// an error instead of wrapping.
    pub fn eval(&self, bindings: &Bindings) -> Result<i64, Error> {
        match self {
            Integer(value) => Ok(*value),
            Symbol(label) => bindings
                .value(label)
                .ok_or_else(|| Error::VariableNotFound(label.clone())),
            Add(lhs, rhs) => BinaryOp::Add.apply(lhs.eval(bindings)?, rhs.eval(bindings)?),
            Mul(lhs, rhs) => BinaryOp::Multiply.apply(lhs.eval(bindings)?, rhs.eval(bindings)?),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::defexpr;

    #[test]
    fn t_constant() {
        assert_eq!(Expr::integer(-9).eval(&Bindings::new()), Ok(-9));
        assert_eq!(defexpr!(+ 2 (* 3 4)).unwrap().eval(&Bindings::new()), Ok(14));
    }

    #[test]
    fn t_symbols() {
        let tree = defexpr!(+ (* x x) (- y)).unwrap();
        let mut bindings: Bindings = [("x", 3), ("y", 5)].into_iter().collect();
        assert_eq!(tree.eval(&bindings), Ok(4));
        bindings.set_value("x", -4);
        assert_eq!(bindings.value("x"), Some(-4));
        assert_eq!(tree.eval(&bindings), Ok(11));
    }

    #[test]
    fn t_variable_not_found() {
        let tree = defexpr!(* x (+ y 1)).unwrap();
        let mut bindings = Bindings::new();
        bindings.set_value("x", 1);
        assert_eq!(
            tree.eval(&bindings),
            Err(Error::VariableNotFound("y".to_string()))
        );
        bindings.clear();
        assert_eq!(
            tree.eval(&bindings),
            Err(Error::VariableNotFound("x".to_string()))
        );
    }

    #[test]
    fn t_overflow() {
        let big = Expr::integer(i64::MAX);
        assert_eq!(
            (&big * Expr::integer(2)).eval(&Bindings::new()),
            Err(Error::IntegerOverflow)
        );
        // The sum cannot be folded at construction, so the overflow shows up here.
        assert_eq!(
            (&big + Expr::one()).eval(&Bindings::new()),
            Err(Error::IntegerOverflow)
        );
        assert_eq!(BinaryOp::Add.apply(i64::MIN, -1), Err(Error::IntegerOverflow));
        assert_eq!(BinaryOp::Multiply.apply(6, 7), Ok(42));
    }
}
