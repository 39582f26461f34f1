use crate::{
    cursor::Cursor,
    error::{Error, Result},
    syntax::{BinaryKind, Command, Expr, UnaryKind},
};
use chumsky::prelude::*;
use util::parser::{blank, command, rest, word};

/// Folds an optional left operand, operator and right operand into one
/// expression.
///
/// Exactly three shapes are accepted: a lone left side, a lone right side, or
/// all three parts. Anything else (an operator missing an operand, or
/// nothing at all) is a parse failure.
fn combine(left: Option<Expr>, op: Option<BinaryKind>, right: Option<Expr>) -> Result<Expr> {
    match (left, op, right) {
        (Some(e), None, None) | (None, None, Some(e)) => Ok(e),
        (Some(left), Some(op), Some(right)) => Ok(Expr::binary_op(op, left, right)),
        _ => Err(Error::ParseFailure),
    }
}

/// Recursive-descent parser over a single line:
///
/// ```text
/// expr    := subexpr (binop subexpr)*
/// subexpr := integer | '(' expr ')' | '-' subexpr
/// ```
///
/// Every production is picked by one character of lookahead, so the cursor
/// never moves backwards.
struct Grammar<'a> {
    cursor: Cursor<'a>,
    depth: usize,
}

/// Deepest nesting of parentheses and negations accepted in one line.
const MAX_DEPTH: usize = 256;

impl<'a> Grammar<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
        }
    }

    /// Runs `f` one nesting level deeper, failing once `MAX_DEPTH` is reached.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth == MAX_DEPTH {
            return Err(Error::ParseFailure);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn lookahead(&mut self) -> Option<char> {
        self.cursor.skip_whitespace();
        self.cursor.peek()
    }

    /// Left-associative fold over a chain of binary operators.
    fn expr(&mut self) -> Result<Expr> {
        let first = self.subexpr()?;
        let mut acc = combine(None, None, first)?;

        while let Some(op) = self.lookahead().and_then(BinaryKind::from_char) {
            let before = self.cursor.consumed();
            self.cursor.advance();
            let right = self.subexpr()?;
            acc = combine(Some(acc), Some(op), right)?;
            debug_assert!(self.cursor.consumed() > before);
        }

        Ok(acc)
    }

    /// `Ok(None)` means the input ran out before a subexpression started.
    fn subexpr(&mut self) -> Result<Option<Expr>> {
        let Some(c) = self.lookahead() else {
            return Ok(None);
        };

        if c.is_ascii_digit() {
            return Ok(Some(Expr::literal(self.cursor.consume_integer())));
        }

        if self.cursor.consume_if('(') {
            let e = self.nested(Self::expr)?;
            self.cursor.skip_whitespace();
            if !self.cursor.consume_if(')') {
                return Err(Error::ParseFailure);
            }
            return Ok(Some(e));
        }

        if let Some(op) = UnaryKind::from_char(c) {
            self.cursor.advance();
            let operand = self.nested(Self::subexpr)?.ok_or(Error::ParseFailure)?;
            return Ok(Some(Expr::unary_op(op, operand)));
        }

        Err(Error::ParseFailure)
    }

    /// The whole line has to be one expression.
    fn parse(mut self) -> Result<Expr> {
        let e = self.expr()?;
        self.cursor.skip_whitespace();
        if self.cursor.is_empty() {
            Ok(e)
        } else {
            Err(Error::ParseFailure)
        }
    }
}

impl Expr {
    pub fn parse(input: &str) -> Result<Self> {
        Grammar::new(input).parse()
    }

    fn parser() -> impl Parser<char, Self, Error = Simple<char>> + Clone {
        rest().try_map(|line: String, span| {
            Self::parse(&line).map_err(|err| Simple::custom(span, err))
        })
    }
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, Vec<Simple<char>>> {
        Self::parser().parse(input)
    }

    fn parser() -> impl Parser<char, Self, Error = Simple<char>> {
        let quit = word("quit").or(word("exit")).to(Self::Quit);
        let ast = command("ast").ignore_then(Expr::parser()).map(Self::Ast);
        let eval = command("eval").ignore_then(Expr::parser()).map(Self::Eval);
        let noop = blank().to(Self::Noop);
        let expr = Expr::parser().map(Self::Eval);

        choice((quit, ast, eval, noop, expr)).then_ignore(end())
    }
}
