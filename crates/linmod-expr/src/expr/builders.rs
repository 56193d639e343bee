//! Builder functions for constructing linear expressions.

use crate::expr::core::Expr;
use crate::expr::error::LinearExprError;
use crate::variable::Variable;

/// Build an Expr by zipping variables with coefficients.
///
/// Zero coefficients are dropped. Returns an error if lengths mismatch.
pub fn linear_terms(
    variables: Vec<Variable>,
    coefficients: Vec<f64>,
) -> Result<Expr, LinearExprError> {
    if variables.len() != coefficients.len() {
        return Err(LinearExprError::MismatchedLengths);
    }
    let filtered: Vec<_> = variables
        .into_iter()
        .zip(coefficients)
        .filter(|(_, c)| *c != 0.0)
        .collect();
    Ok(Expr::from_linear(filtered))
}

/// Combines multiple expressions into one by concatenating their terms
/// and adding their constants.
///
/// Duplicate variable terms are NOT merged - use `normalized_terms()` on the
/// result if term consolidation is needed.
pub fn linear_sum<I>(exprs: I) -> Expr
where
    I: IntoIterator<Item = Expr>,
{
    let mut constant = 0.0;
    let mut terms = Vec::new();
    for expr in exprs {
        let (linear, offset) = expr.into_parts();
        terms.extend(linear);
        constant += offset;
    }
    Expr::new(terms, constant)
}
