/// Construct an expression from the lisp expresion. Evaluates to a
/// `MaybeExpr`, because literals are coerced and may be rejected.
///
/// ```
/// use algebruh::defexpr;
///
/// let e = defexpr!(+ (* 2 x) (- y)).unwrap();
/// assert_eq!(e.to_sexpr(), "(+ (* 2 x) (* -1 y))");
/// ```
#[macro_export]
macro_rules! defexpr {
    () => {}; // empty;
    (($($a:tt)*)) => { // Unwrap redundant parens.
        $crate::defexpr!($($a)*)
    };
    ($a:block) => { // Block expressions.
        $crate::to_expr($a)
    };
    // Simplification and derivatives.
    (simplify $a:tt) => {
        $crate::simplify($crate::defexpr!($a))
    };
    (deriv $a:tt $var:ident) => {
        $crate::derivative($crate::defexpr!($a), $crate::Expr::symbol(stringify!($var)))
    };
    // Operators.
    (- $a:tt) => {
        $crate::negate($crate::defexpr!($a))
    };
    (- $a:tt $b:tt) => {
        $crate::sub($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (+ $a:tt $b:tt) => {
        $crate::add($crate::defexpr!($a), $crate::defexpr!($b))
    };
    (* $a:tt $b:tt) => {
        $crate::mul($crate::defexpr!($a), $crate::defexpr!($b))
    };
    // Constants
    ($a:literal) => {{
        let out: $crate::MaybeExpr = $crate::to_expr($a);
        out
    }};
    // Symbols
    ($a:ident) => {{
        let out: $crate::MaybeExpr = Ok($crate::Expr::symbol(stringify!($a)));
        out
    }};
}
