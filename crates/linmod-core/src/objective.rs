//! Objective functions.

use linmod_expr::{Expr, LinearExprError, NameError, Symbol, Variable, validate_name};
use serde::{Deserialize, Serialize};

use crate::record::ExprRecord;
use crate::types::Sense;

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveError {
    InvalidName(NameError),
    InvalidVariableName(NameError),
    Expression(LinearExprError),
}

impl ObjectiveError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ObjectiveError::InvalidName(_) => "OBJECTIVE_INVALID_NAME",
            ObjectiveError::InvalidVariableName(_) => "VARIABLE_INVALID_NAME",
            ObjectiveError::Expression(_) => "OBJECTIVE_INVALID_EXPRESSION",
        }
    }
}

impl std::fmt::Display for ObjectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveError::InvalidName(err) => {
                write!(f, "[{}] Objective name {}", self.code(), err.detail())
            }
            ObjectiveError::InvalidVariableName(err) => {
                write!(f, "[{}] Variable name {}", self.code(), err.detail())
            }
            ObjectiveError::Expression(err) => write!(
                f,
                "[{}] Objective expression invalid: {}",
                self.code(),
                err.detail()
            ),
        }
    }
}

impl std::error::Error for ObjectiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjectiveError::InvalidName(err) | ObjectiveError::InvalidVariableName(err) => {
                Some(err)
            }
            ObjectiveError::Expression(err) => Some(err),
        }
    }
}

/// Objective function with a sense and a linear expression.
///
/// Unlike constraints the constant term is kept, since it shifts the
/// objective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObjectiveRecord", into = "ObjectiveRecord")]
pub struct Objective {
    name: Option<String>,
    expression: Expr,
    sense: Sense,
}

impl Objective {
    pub fn new<E>(expression: E, sense: Sense) -> Result<Self, ObjectiveError>
    where
        E: Into<Symbol>,
    {
        let expression = expression
            .into()
            .to_linear()
            .map_err(ObjectiveError::Expression)?;
        Self::from_expr(expression, sense)
    }

    /// Objective from an already-lowered expression; duplicate terms are merged.
    ///
    /// Fails when the merged expression is not finite.
    pub fn from_expr(expression: Expr, sense: Sense) -> Result<Self, ObjectiveError> {
        let expression = expression.normalized();
        expression
            .ensure_finite()
            .map_err(ObjectiveError::Expression)?;
        Ok(Self {
            name: None,
            expression,
            sense,
        })
    }

    pub fn with_name(mut self, name: &str) -> Result<Self, ObjectiveError> {
        validate_name(name).map_err(ObjectiveError::InvalidName)?;
        self.name = Some(name.to_string());
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn variables(&self) -> Vec<Variable> {
        self.expression.variables()
    }

    /// Objective value for an assignment.
    pub fn evaluate<F>(&self, value_of: F) -> Result<f64, ObjectiveError>
    where
        F: FnMut(&Variable) -> Option<f64>,
    {
        self.expression
            .evaluate(value_of)
            .map_err(ObjectiveError::Expression)
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {name}: {}", self.sense.as_str(), self.expression),
            None => write!(f, "{} {}", self.sense.as_str(), self.expression),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectiveRecord {
    #[serde(default)]
    name: Option<String>,
    expression: ExprRecord,
    sense: Sense,
}

impl From<Objective> for ObjectiveRecord {
    fn from(objective: Objective) -> Self {
        Self {
            expression: ExprRecord::from(&objective.expression),
            name: objective.name,
            sense: objective.sense,
        }
    }
}

impl TryFrom<ObjectiveRecord> for Objective {
    type Error = ObjectiveError;

    fn try_from(record: ObjectiveRecord) -> Result<Self, Self::Error> {
        let expression = record
            .expression
            .into_expr()
            .map_err(ObjectiveError::InvalidVariableName)?;
        let objective = Objective::from_expr(expression, record.sense)?;
        match record.name {
            Some(name) => objective.with_name(&name),
            None => Ok(objective),
        }
    }
}
