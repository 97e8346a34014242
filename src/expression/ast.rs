use crate::expression::operator::Operator;

/// Arithmetic expression over non-negative integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Combine two sub-expressions with the given operator
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Split a binary node into its operator and operands. `None` for literals.
    pub fn as_binary(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r) => Some((Operator::Add, l.as_ref(), r.as_ref())),
            Expression::Sub(l, r) => Some((Operator::Sub, l.as_ref(), r.as_ref())),
            Expression::Mul(l, r) => Some((Operator::Mul, l.as_ref(), r.as_ref())),
            Expression::Div(l, r) => Some((Operator::Div, l.as_ref(), r.as_ref())),
        }
    }

    /// Literal operands in left-to-right order
    pub fn numbers(&self) -> Vec<u64> {
        fn collect(expr: &Expression, out: &mut Vec<u64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Number of binary operations in the tree
    pub fn operations(&self) -> usize {
        match self.as_binary() {
            None => 0,
            Some((_, l, r)) => 1 + l.operations() + r.operations(),
        }
    }
}
