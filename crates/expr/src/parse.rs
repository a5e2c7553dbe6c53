//! Recursive-descent parser over [`Token`]s.
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | IDENT | IDENT '(' expr ')' | '(' expr ')'
//! ```
//!
//! Power binds tighter than unary minus on its left (`-x^2` is `-(x^2)`) and
//! accepts a signed exponent on its right (`2^-1`). It is right associative.
//!
//! Every `(`, sign, `^` and chained `+ - * /` counts as one level of nesting.
//! Parsing fails with [`CompileError::TooDeep`] past [`MAX_DEPTH`] levels, so
//! the tree stays shallow enough to evaluate and drop recursively.

use crate::{
    CompileError,
    ast::{BinaryOp, Constant, Expr, Func},
    token::{Spanned, Token},
};

/// Deepest nesting a formula may use.
pub const MAX_DEPTH: usize = 256;

/// Parses a token stream into an expression tree.
pub(crate) fn parse(tokens: &[Spanned]) -> Result<Expr, CompileError> {
    if tokens.is_empty() {
        return Err(CompileError::Empty);
    }

    let mut parser = Parser {
        tokens,
        next: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(spanned) => Err(unexpected(spanned)),
    }
}

struct Parser<'t> {
    tokens: &'t [Spanned],
    next: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Spanned> {
        self.tokens.get(self.next)
    }

    fn bump(&mut self) -> Option<&'t Spanned> {
        let spanned = self.tokens.get(self.next)?;
        self.next += 1;
        Some(spanned)
    }

    /// Consumes the next token if it equals `token`, returning its position.
    fn eat(&mut self, token: &Token) -> Option<usize> {
        let spanned = self.peek().filter(|spanned| &spanned.token == token)?;
        self.next += 1;
        Some(spanned.pos)
    }

    /// Enters one more level of nesting for the token at `pos`.
    fn descend(&mut self, pos: usize) -> Result<(), CompileError> {
        if self.depth >= MAX_DEPTH {
            return Err(CompileError::TooDeep { pos });
        }
        self.depth += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, CompileError> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let (op, pos) = if let Some(pos) = self.eat(&Token::Plus) {
                (BinaryOp::Add, pos)
            } else if let Some(pos) = self.eat(&Token::Minus) {
                (BinaryOp::Sub, pos)
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            // Each link of a chain nests the tree built so far one level deeper.
            self.descend(pos)?;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, CompileError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let (op, pos) = if let Some(pos) = self.eat(&Token::Star) {
                (BinaryOp::Mul, pos)
            } else if let Some(pos) = self.eat(&Token::Slash) {
                (BinaryOp::Div, pos)
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            self.descend(pos)?;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Expr, CompileError> {
        if let Some(pos) = self.eat(&Token::Minus) {
            self.descend(pos)?;
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::Neg(Box::new(operand)));
        }
        if let Some(pos) = self.eat(&Token::Plus) {
            self.descend(pos)?;
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(operand);
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, CompileError> {
        let base = self.primary()?;
        if let Some(pos) = self.eat(&Token::Caret) {
            self.descend(pos)?;
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, CompileError> {
        let Some(spanned) = self.bump() else {
            return Err(CompileError::UnexpectedEnd);
        };

        match &spanned.token {
            Token::Number(value) => Ok(Expr::Number(*value)),
            Token::LParen => {
                self.descend(spanned.pos)?;
                let inner = self.expr()?;
                self.close(spanned.pos)?;
                self.depth -= 1;
                Ok(inner)
            }
            Token::Ident(name) => {
                if self.peek().is_some_and(|next| next.token == Token::LParen) {
                    let open = self.bump().map_or(spanned.pos, |paren| paren.pos);
                    self.descend(open)?;
                    let arg = Box::new(self.expr()?);
                    self.close(open)?;
                    self.depth -= 1;
                    return Ok(match Func::from_name(name) {
                        Some(func) => Expr::Call { func, arg },
                        None => Expr::UnboundCall {
                            name: name.clone(),
                            arg,
                        },
                    });
                }
                Ok(symbol(name))
            }
            _ => Err(unexpected(spanned)),
        }
    }

    /// Expects the `)` matching the `(` at `open`.
    fn close(&mut self, open: usize) -> Result<(), CompileError> {
        match self.bump() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Ok(()),
            Some(other) => Err(unexpected(other)),
            None => Err(CompileError::UnclosedParen { pos: open }),
        }
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn symbol(name: &str) -> Expr {
    if name == "x" {
        return Expr::Variable;
    }
    match Constant::from_name(name) {
        Some(constant) => Expr::Constant(constant),
        None => Expr::Unbound(name.to_string()),
    }
}

fn unexpected(spanned: &Spanned) -> CompileError {
    CompileError::UnexpectedToken {
        found: spanned.token.to_string(),
        pos: spanned.pos,
    }
}
