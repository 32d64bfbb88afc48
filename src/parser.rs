use crate::{
    error::{Error, ParseError},
    expr::{BinaryOp, Expr, MaybeExpr, looks_like_integer},
};
use std::str::CharIndices;

#[derive(Debug, Copy, Clone, PartialEq)]
enum Token<'a> {
    Open,
    Atom(&'a str),
    Close,
}
use Token::*;

struct Tokenizer<'a> {
    text: &'a str,
    iter: std::iter::Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn from(text: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            text,
            iter: text.char_indices().peekable(),
        }
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((start, c)) = self.iter.next() {
            match c {
                '(' => return Some(Open),
                ')' => return Some(Close),
                c if c.is_whitespace() => continue,
                _ => {
                    let mut end = start + c.len_utf8();
                    while let Some(&(i, c)) = self.iter.peek() {
                        if is_delimiter(c) {
                            break;
                        }
                        end = i + c.len_utf8();
                        self.iter.next();
                    }
                    return Some(Atom(&self.text[start..end]));
                }
            }
        }
        return None;
    }
}

#[derive(Debug)]
enum Parsed<'a> {
    Done(Expr),
    Todo(&'a str),
}
use Parsed::*;

/// Atoms outside the operator position are integers or symbols.
fn parse_atom(atom: &str) -> MaybeExpr {
    if looks_like_integer(atom) {
        return match atom.parse::<i64>() {
            Ok(value) => Ok(Expr::integer(value)),
            Err(_) => Err(Error::IntegerOutOfRange),
        };
    }
    // The tokenizer never produces empty atoms, or atoms with whitespace
    // or parentheses, so this is a valid symbol name.
    Ok(Expr::symbol(atom))
}

fn resolve(item: Parsed) -> MaybeExpr {
    match item {
        Done(expr) => Ok(expr),
        Todo(atom) => parse_atom(atom),
    }
}

fn parse_op(op: &str) -> Result<BinaryOp, Error> {
    match op {
        "+" => Ok(BinaryOp::Add),
        "*" => Ok(BinaryOp::Multiply),
        _ => Err(Error::UnsupportedExpression(op.to_string())),
    }
}

/// Parse the contents of one pair of parentheses.
fn parse_list(mut items: Vec<Parsed>) -> MaybeExpr {
    if items.is_empty() {
        return Err(ParseError::EmptyList.into());
    }
    let op = match items.remove(0) {
        Todo(op) => op,
        Done(head) => return Err(Error::UnsupportedExpression(head.to_sexpr())),
    };
    // An unknown operator is reported before a wrong argument count.
    let op = parse_op(op)?;
    if items.len() != 2 {
        return Err(ParseError::WrongArity(op.symbol().to_string(), items.len()).into());
    }
    let rhs = resolve(items.remove(1))?;
    let lhs = resolve(items.remove(0))?;
    // Nodes are built directly, so no folding happens while parsing.
    Ok(Expr::binary(op, lhs, rhs))
}

/// Parse an expression from its prefix notation, e.g. `(+ 2 (* 3 x))`. This
/// is the inverse of `to_sexpr`.
pub fn from_sexpr(text: &str) -> MaybeExpr {
    let mut parens: Vec<usize> = Vec::new();
    let mut stack: Vec<Parsed> = Vec::new();
    for token in Tokenizer::from(text) {
        match token {
            Open => parens.push(stack.len()),
            Atom(atom) => stack.push(Todo(atom)),
            Close => {
                // Drain everything from the most recent Open paren till the
                // end to get parsed into an expression.
                let start = parens.pop().ok_or(ParseError::UnbalancedParens)?;
                let items: Vec<Parsed> = stack.drain(start..).collect();
                stack.push(Done(parse_list(items)?));
            }
        }
    }
    if !parens.is_empty() {
        return Err(ParseError::UnexpectedEnd.into());
    }
    match stack.len() {
        0 => Err(ParseError::UnexpectedEnd.into()),
        1 => match stack.pop() {
            Some(item) => resolve(item),
            None => Err(ParseError::UnexpectedEnd.into()),
        },
        _ => Err(ParseError::TrailingTokens.into()),
    }
}

impl std::str::FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_sexpr(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::random_expr;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn t_tokenizer() {
        let tokens: Vec<_> = Tokenizer::from(" (+\tfoo(* -3 x))\n").collect();
        assert_eq!(
            tokens,
            vec![
                Open,
                Atom("+"),
                Atom("foo"),
                Open,
                Atom("*"),
                Atom("-3"),
                Atom("x"),
                Close,
                Close
            ]
        );
    }

    #[test]
    fn t_atoms() {
        assert_eq!(from_sexpr("x").unwrap(), Expr::symbol("x"));
        assert_eq!(from_sexpr("  42 ").unwrap(), 42);
        assert_eq!(from_sexpr("-7").unwrap(), -7);
        assert_eq!(from_sexpr("x_1'").unwrap(), Expr::symbol("x_1'"));
    }

    #[test]
    fn t_nested() {
        let e = from_sexpr("(+ 2 (* 3 4))").unwrap();
        assert_eq!(e, Expr::add_node(Expr::integer(2), Expr::integer(3) * Expr::integer(4)));
        let e: Expr = "(*   (+ x y)(+ x   y))".parse().unwrap();
        assert_eq!(e.to_sexpr(), "(* (+ x y) (+ x y))");
    }

    #[test]
    fn t_no_folding() {
        let e = from_sexpr("(+ 2 3)").unwrap();
        assert_eq!(e.len(), 3);
        assert_eq!(e.to_sexpr(), "(+ 2 3)");
    }

    #[test]
    fn t_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let e = random_expr(&mut rng, 6, &["x", "y", "zeta"]);
            let text = e.to_sexpr();
            let parsed = from_sexpr(&text).unwrap();
            assert_eq!(parsed, e, "{}", text);
        }
    }

    #[test]
    fn t_signed_atoms() {
        assert_eq!(from_sexpr("+5").unwrap(), Expr::integer(5));
        assert_eq!(from_sexpr("+5").unwrap().to_sexpr(), "5");
        for name in ["+", "-", "+x", "-x"] {
            let e = Expr::symbol(name) + Expr::symbol("y");
            assert_eq!(from_sexpr(&e.to_sexpr()).unwrap(), e);
        }
        let e = Expr::mul_node(Expr::symbol("+"), Expr::integer(-5));
        assert_eq!(e.to_sexpr(), "(* + -5)");
        assert_eq!(from_sexpr("(* + -5)").unwrap(), e);
    }

    #[test]
    fn t_errors() {
        assert_eq!(from_sexpr(""), Err(ParseError::UnexpectedEnd.into()));
        assert_eq!(from_sexpr("(+ 1 2"), Err(ParseError::UnexpectedEnd.into()));
        assert_eq!(from_sexpr("(+ 1 2))"), Err(ParseError::UnbalancedParens.into()));
        assert_eq!(from_sexpr("x y"), Err(ParseError::TrailingTokens.into()));
        assert_eq!(from_sexpr("()"), Err(ParseError::EmptyList.into()));
        assert_eq!(
            from_sexpr("(+ 1 2 3)"),
            Err(ParseError::WrongArity("+".to_string(), 3).into())
        );
        assert_eq!(
            from_sexpr("(* x)"),
            Err(ParseError::WrongArity("*".to_string(), 1).into())
        );
        assert_eq!(
            from_sexpr("(- x y)"),
            Err(Error::UnsupportedExpression("-".to_string()))
        );
        assert_eq!(
            from_sexpr("((+ 1 x) 2)"),
            Err(Error::UnsupportedExpression("(+ 1 x)".to_string()))
        );
        assert_eq!(
            from_sexpr("99999999999999999999"),
            Err(Error::IntegerOutOfRange)
        );
    }
}
