//! Linear modeling layer: constraints, objectives and models.

pub mod constraint;
pub mod logging;
pub mod model;
pub mod objective;
mod record;
pub mod types;

pub use constraint::{Constraint, ConstraintError};
pub use logging::{LogFormat, LoggingConfig, LoggingError, init_logging};
pub use model::{Model, ModelError, ModelSnapshot, PrettyPrintOptions, VariableView};
pub use objective::{Objective, ObjectiveError};
pub use types::{Bounds, Sense, VariableDef, VariableKind};

pub use linmod_expr::{
    ComparisonSense, ConstraintExpr, ConstraintId, Expr, LinearExprError, NameError, Symbol,
    Variable, VariableId,
};
