//! Expression types for optimization modeling.
//!
//! - `core`       — Expr: linear terms + constant
//! - `constraint` — ConstraintExpr: expression with comparison sense and RHS
//! - `builders`   — helpers for assembling expressions from parts
//! - `format`     — number rendering shared by all `Display` impls
//! - `error`      — Expression construction errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;
pub mod format;

pub use builders::{linear_sum, linear_terms};
pub use constraint::{ComparisonSense, ConstraintExpr};
pub use self::core::Expr;
pub use error::LinearExprError;
pub use format::format_number;
