//! Serialized shapes shared by constraints, objectives and snapshots.

use linmod_expr::{Expr, NameError, Variable};
use serde::{Deserialize, Serialize};

/// Linear expression as `{"constant": c, "terms": [["x", 2.0], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ExprRecord {
    #[serde(default)]
    pub(crate) constant: f64,
    #[serde(default)]
    pub(crate) terms: Vec<(String, f64)>,
}

impl From<&Expr> for ExprRecord {
    fn from(expr: &Expr) -> Self {
        Self {
            constant: expr.constant(),
            terms: expr
                .linear_terms()
                .iter()
                .map(|(variable, coeff)| (variable.name().to_string(), *coeff))
                .collect(),
        }
    }
}

impl ExprRecord {
    pub(crate) fn into_expr(self) -> Result<Expr, NameError> {
        let terms = self
            .terms
            .into_iter()
            .map(|(name, coeff)| Ok((Variable::new(name)?, coeff)))
            .collect::<Result<Vec<_>, NameError>>()?;
        Ok(Expr::new(terms, self.constant))
    }
}
