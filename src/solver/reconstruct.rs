use crate::expression::Expression;
use crate::solver::explorer::Explorer;
use crate::solver::state::StateKey;

impl Explorer {
    /// Rebuild the expression tree for a reachable state by following parent
    /// records down to the leaves. Returns `None` if `key` was never reached.
    ///
    /// Parent masks are strict subsets of the child's mask, so the recursion
    /// depth is at most the number of inputs.
    pub fn witness(&self, key: StateKey) -> Option<Expression> {
        if !self.contains(&key) {
            return None;
        }

        match self.parent(&key) {
            None => Some(Expression::Number(key.value())),
            Some(parent) => {
                let left = self.witness(parent.left)?;
                let right = self.witness(parent.right)?;
                Some(Expression::binary(parent.op, left, right))
            }
        }
    }

    /// Canonical parenthesized rendering of a reachable state
    pub fn render(&self, key: StateKey) -> Option<String> {
        self.witness(key).map(|expr| expr.to_string())
    }
}
