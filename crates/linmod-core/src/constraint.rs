//! Bounded linear constraints.
//!
//! A [`Constraint`] pairs a constant-free linear expression with an optional
//! lower and upper bound. Any constant in the input expression is moved into
//! the bounds at construction, so `x + 3 >= -10` is stored as `x >= -13`.
//! Constraints are immutable once built.

use linmod_expr::{
    ComparisonSense, ConstraintExpr, Expr, LinearExprError, NameError, Symbol, Variable,
    format_number, validate_name,
};
use serde::{Deserialize, Serialize};

use crate::record::ExprRecord;
use crate::types::Bounds;

/// Errors raised while building a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// The constraint name is empty or contains whitespace.
    InvalidName(NameError),
    /// A variable name in serialized input is invalid.
    InvalidVariableName(NameError),
    /// Neither a lower nor an upper bound was given.
    Free,
    /// A bound is NaN, excludes every value, or lower exceeds upper.
    InvalidBounds {
        lower: Option<f64>,
        upper: Option<f64>,
    },
    /// The expression is not linear, not finite, or could not be evaluated.
    Expression(LinearExprError),
}

impl ConstraintError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ConstraintError::InvalidName(_) => "CONSTRAINT_INVALID_NAME",
            ConstraintError::InvalidVariableName(_) => "VARIABLE_INVALID_NAME",
            ConstraintError::Free => "CONSTRAINT_FREE",
            ConstraintError::InvalidBounds { .. } => "CONSTRAINT_INVALID_BOUNDS",
            ConstraintError::Expression(_) => "CONSTRAINT_INVALID_EXPRESSION",
        }
    }
}

fn describe_bound(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), format_number)
}

impl std::fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintError::InvalidName(err) => write!(
                f,
                "[{}] Constraint name {}",
                self.code(),
                err.detail()
            ),
            ConstraintError::InvalidVariableName(err) => {
                write!(f, "[{}] Variable name {}", self.code(), err.detail())
            }
            ConstraintError::Free => write!(
                f,
                "[{}] Constraint would be free: at least one of lb and ub must be set",
                self.code()
            ),
            ConstraintError::InvalidBounds { lower, upper } => write!(
                f,
                "[{}] Constraint bounds invalid: lb = {}, ub = {}",
                self.code(),
                describe_bound(*lower),
                describe_bound(*upper)
            ),
            ConstraintError::Expression(err) => write!(
                f,
                "[{}] Constraint expression invalid: {}",
                self.code(),
                err.detail()
            ),
        }
    }
}

impl std::error::Error for ConstraintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstraintError::InvalidName(err) | ConstraintError::InvalidVariableName(err) => {
                Some(err)
            }
            ConstraintError::Expression(err) => Some(err),
            ConstraintError::Free | ConstraintError::InvalidBounds { .. } => None,
        }
    }
}

/// A named linear expression with a lower and/or upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConstraintRecord", into = "ConstraintRecord")]
pub struct Constraint {
    name: Option<String>,
    expression: Expr,
    lb: Option<f64>,
    ub: Option<f64>,
}

impl Constraint {
    /// Build a constraint from a symbolic expression.
    ///
    /// Fails when the name is invalid, when both bounds are `None`, when the
    /// bounds are inconsistent, or when the expression is not linear.
    pub fn new<E>(
        expression: E,
        name: Option<&str>,
        lb: Option<f64>,
        ub: Option<f64>,
    ) -> Result<Self, ConstraintError>
    where
        E: Into<Symbol>,
    {
        if let Some(name) = name {
            validate_name(name).map_err(ConstraintError::InvalidName)?;
        }
        let expr = expression
            .into()
            .to_linear()
            .map_err(ConstraintError::Expression)?;
        Self::build(expr, name, lb, ub)
    }

    /// Build a constraint from an already-lowered expression.
    pub fn from_expr(
        expression: Expr,
        name: Option<&str>,
        lb: Option<f64>,
        ub: Option<f64>,
    ) -> Result<Self, ConstraintError> {
        if let Some(name) = name {
            validate_name(name).map_err(ConstraintError::InvalidName)?;
        }
        Self::build(expression, name, lb, ub)
    }

    /// Shared construction path; `name` has already been validated.
    fn build(
        expression: Expr,
        name: Option<&str>,
        lb: Option<f64>,
        ub: Option<f64>,
    ) -> Result<Self, ConstraintError> {
        if lb.is_none() && ub.is_none() {
            return Err(ConstraintError::Free);
        }
        // Finiteness is checked on the merged terms.
        let expression = Expr::new(expression.normalized_terms(), expression.constant());
        expression
            .ensure_finite()
            .map_err(ConstraintError::Expression)?;

        let invalid_bounds = || ConstraintError::InvalidBounds {
            lower: lb,
            upper: ub,
        };
        let bounds = Bounds::new(lb, ub).normalized().ok_or_else(invalid_bounds)?;
        if bounds.is_free() {
            return Err(ConstraintError::Free);
        }

        let (terms, constant) = expression.into_parts();
        let bounds = bounds.shifted(constant);
        if bounds
            .lower
            .into_iter()
            .chain(bounds.upper)
            .any(|bound| !bound.is_finite())
        {
            return Err(invalid_bounds());
        }
        let expression = Expr::from_linear(terms);

        tracing::trace!(
            component = "constraint",
            operation = "new",
            status = "success",
            name = name.unwrap_or(""),
            terms = expression.linear_terms().len(),
            "Built constraint"
        );

        Ok(Self {
            name: name.map(str::to_string),
            expression,
            lb: bounds.lower,
            ub: bounds.upper,
        })
    }

    /// Build a constraint from a comparison such as `expr.le_scalar(10.0)`.
    pub fn from_comparison(
        comparison: ConstraintExpr,
        name: Option<&str>,
    ) -> Result<Self, ConstraintError> {
        let (expr, sense, rhs) = comparison.into_parts();
        let (lb, ub) = match sense {
            ComparisonSense::LessEqual => (None, Some(rhs)),
            ComparisonSense::GreaterEqual => (Some(rhs), None),
            ComparisonSense::Equal => (Some(rhs), Some(rhs)),
        };
        Self::from_expr(expr, name, lb, ub)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The constant-free expression.
    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn lb(&self) -> Option<f64> {
        self.lb
    }

    pub fn ub(&self) -> Option<f64> {
        self.ub
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.lb, self.ub)
    }

    pub fn is_equality(&self) -> bool {
        self.bounds().is_fixed()
    }

    /// Variables referenced by the constraint, ordered by name.
    pub fn variables(&self) -> Vec<Variable> {
        self.expression.variables()
    }

    /// Value of the constraint expression for an assignment.
    pub fn evaluate<F>(&self, value_of: F) -> Result<f64, ConstraintError>
    where
        F: FnMut(&Variable) -> Option<f64>,
    {
        self.expression
            .evaluate(value_of)
            .map_err(ConstraintError::Expression)
    }

    /// Whether an assignment satisfies the bounds within `tolerance`.
    pub fn is_satisfied<F>(&self, value_of: F, tolerance: f64) -> Result<bool, ConstraintError>
    where
        F: FnMut(&Variable) -> Option<f64>,
    {
        let value = self.evaluate(value_of)?;
        Ok(self.bounds().contains(value, tolerance))
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        match (self.lb, self.ub) {
            (Some(lb), Some(ub)) => write!(
                f,
                "{} <= {} <= {}",
                format_number(lb),
                self.expression,
                format_number(ub)
            ),
            (Some(lb), None) => write!(f, "{} <= {}", format_number(lb), self.expression),
            (None, Some(ub)) => write!(f, "{} <= {}", self.expression, format_number(ub)),
            (None, None) => write!(f, "{}", self.expression),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConstraintRecord {
    #[serde(default)]
    name: Option<String>,
    expression: ExprRecord,
    #[serde(default)]
    lb: Option<f64>,
    #[serde(default)]
    ub: Option<f64>,
}

impl From<Constraint> for ConstraintRecord {
    fn from(constraint: Constraint) -> Self {
        Self {
            expression: ExprRecord::from(&constraint.expression),
            name: constraint.name,
            lb: constraint.lb,
            ub: constraint.ub,
        }
    }
}

impl TryFrom<ConstraintRecord> for Constraint {
    type Error = ConstraintError;

    fn try_from(record: ConstraintRecord) -> Result<Self, Self::Error> {
        let expression = record
            .expression
            .into_expr()
            .map_err(ConstraintError::InvalidVariableName)?;
        Constraint::from_expr(expression, record.name.as_deref(), record.lb, record.ub)
    }
}
