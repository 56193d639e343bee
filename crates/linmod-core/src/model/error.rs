//! Model error types.

use linmod_expr::NameError;
use linmod_expr::ids::{ConstraintId, VariableId};

use crate::objective::ObjectiveError;

/// Errors that can occur during model operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Model name is empty or contains whitespace
    InvalidName(NameError),
    /// Invalid variable ID
    InvalidVariableId(VariableId),
    /// Invalid variable bounds
    InvalidVariableBounds {
        name: String,
        lower: Option<f64>,
        upper: Option<f64>,
    },
    /// A variable with this name already exists
    DuplicateVariable { name: String },
    /// Variable is still referenced by a constraint or the objective
    VariableInUse { name: String },
    /// Invalid constraint ID
    InvalidConstraintId(ConstraintId),
    /// A constraint with this name already exists
    DuplicateConstraint { name: String },
    /// Objective already set
    MultipleObjectives,
    /// Objective could not be built
    InvalidObjective(ObjectiveError),
    /// Snapshot could not be encoded or decoded
    Serialization { reason: String },
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidName(_) => "MODEL_INVALID_NAME",
            ModelError::InvalidVariableId(_) => "VARIABLE_INVALID_ID",
            ModelError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            ModelError::DuplicateVariable { .. } => "VARIABLE_DUPLICATE",
            ModelError::VariableInUse { .. } => "VARIABLE_IN_USE",
            ModelError::InvalidConstraintId(_) => "CONSTRAINT_INVALID_ID",
            ModelError::DuplicateConstraint { .. } => "CONSTRAINT_DUPLICATE",
            ModelError::MultipleObjectives => "OBJECTIVE_ALREADY_SET",
            ModelError::InvalidObjective(_) => "OBJECTIVE_INVALID",
            ModelError::Serialization { .. } => "MODEL_SERIALIZATION",
        }
    }
}

fn bound_label(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidName(err) => {
                write!(f, "[{}] Model name {}", self.code(), err.detail())
            }
            ModelError::InvalidVariableId(id) => write!(
                f,
                "[{}] Variable {} does not exist",
                self.code(),
                id
            ),
            ModelError::InvalidVariableBounds { name, lower, upper } => write!(
                f,
                "[{}] Variable '{}' bounds invalid: lower ({}), upper ({})",
                self.code(),
                name,
                bound_label(*lower),
                bound_label(*upper)
            ),
            ModelError::DuplicateVariable { name } => write!(
                f,
                "[{}] Variable '{}' already exists in the model",
                self.code(),
                name
            ),
            ModelError::VariableInUse { name } => write!(
                f,
                "[{}] Variable '{}' is referenced by a constraint or the objective",
                self.code(),
                name
            ),
            ModelError::InvalidConstraintId(id) => write!(
                f,
                "[{}] Constraint {} does not exist",
                self.code(),
                id
            ),
            ModelError::DuplicateConstraint { name } => write!(
                f,
                "[{}] Constraint '{}' already exists in the model",
                self.code(),
                name
            ),
            ModelError::MultipleObjectives => write!(
                f,
                "[{}] Model already has an objective; use set_objective to replace",
                self.code()
            ),
            ModelError::InvalidObjective(err) => write!(f, "[{}] {}", self.code(), err),
            ModelError::Serialization { reason } => {
                write!(f, "[{}] Snapshot serialization failed: {}", self.code(), reason)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidName(err) => Some(err),
            ModelError::InvalidObjective(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization {
            reason: err.to_string(),
        }
    }
}
