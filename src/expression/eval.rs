use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a sub-expression:
    /// - Divides by zero
    /// - Divides with a remainder
    /// - Subtracts a larger value from a smaller one
    /// - Overflows `u64`
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => return Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_add(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_sub(right).ok_or(ExpressionError::NegativeResult {
                    minuend: left,
                    subtrahend: right,
                })
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_mul(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0 {
                    Err(ExpressionError::DivisionByZero)
                } else if left % right != 0 {
                    Err(ExpressionError::InexactDivision {
                        dividend: left,
                        divisor: right,
                    })
                } else {
                    Ok(left / right)
                }
            }
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
