use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Recursive-descent parser for rendered expressions.
///
/// Grammar, with the usual precedence and left associativity:
///
/// ```text
/// expr   := term   (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := number | '(' expr ')'
/// ```
struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
        self.chars.peek().copied()
    }

    fn expect_end(&mut self) -> Result<(), ExpressionError> {
        match self.peek() {
            None => Ok(()),
            Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }

    fn binary_level(
        &mut self,
        precedence: u8,
        mut operand: impl FnMut(&mut Self) -> Result<Expression, ExpressionError>,
    ) -> Result<Expression, ExpressionError> {
        let mut left = operand(self)?;
        while let Some((_, c)) = self.peek()
            && let Some(op) = Operator::from_symbol(c)
            && op.precedence() == precedence
        {
            self.chars.next();
            let right = operand(self)?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn expr(&mut self) -> Result<Expression, ExpressionError> {
        self.binary_level(1, Self::term)
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        self.binary_level(2, Self::factor)
    }

    fn factor(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some((_, '(')) => {
                self.chars.next();
                let inner = self.expr()?;
                match self.peek() {
                    Some((_, ')')) => {
                        self.chars.next();
                        Ok(inner)
                    }
                    Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                        character,
                        position,
                    }),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((start, c)) if c.is_ascii_digit() => {
                let mut end = start;
                while let Some(&(i, d)) = self.chars.peek()
                    && d.is_ascii_digit()
                {
                    end = i + d.len_utf8();
                    self.chars.next();
                }
                let literal = self.input.get(start..end).unwrap_or_default();
                literal
                    .parse::<u64>()
                    .map(Expression::Number)
                    .map_err(|_| ExpressionError::InvalidNumber(literal.to_string()))
            }
            Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let expr = parser.expr()?;
        parser.expect_end()?;
        Ok(expr)
    }
}
