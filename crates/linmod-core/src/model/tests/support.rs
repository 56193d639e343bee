use linmod_expr::{Symbol, Variable};

use crate::constraint::Constraint;

pub(super) fn var(name: &str) -> Variable {
    Variable::new(name).unwrap()
}

pub(super) fn constraint<E: Into<Symbol>>(
    expression: E,
    name: &str,
    lb: Option<f64>,
    ub: Option<f64>,
) -> Constraint {
    Constraint::new(expression, Some(name), lb, ub).unwrap()
}
