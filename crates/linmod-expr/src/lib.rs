pub mod expr;
pub mod ids;
pub mod name;
pub mod symbol;
pub mod variable;

pub use expr::{ComparisonSense, ConstraintExpr, Expr, LinearExprError, format_number};
pub use ids::{ConstraintId, VariableId};
pub use name::{NameError, validate_name};
pub use symbol::Symbol;
pub use variable::Variable;
