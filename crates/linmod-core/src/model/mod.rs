//! Model module for building optimization models.
//!
//! This module provides the core [`Model`] type: a named container of
//! variable definitions, constraints and an optional objective.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`builder`]: Methods for adding and removing variables, constraints, and objectives
//! - [`metadata`]: Name and id lookups
//! - [`inspect`]: Serializable snapshots and JSON round-trip
//! - [`pretty`]: Human-readable listing

mod builder;
mod error;
mod inspect;
mod metadata;
mod pretty;

use std::collections::BTreeMap;

use linmod_expr::ids::{ConstraintId, VariableId};
use linmod_expr::{Variable, validate_name};

use crate::constraint::Constraint;
use crate::objective::Objective;
use crate::types::VariableDef;

pub use error::ModelError;
pub use inspect::{ModelSnapshot, VariableView};
pub use pretty::PrettyPrintOptions;

/// A container for a linear or mixed-integer model.
///
/// Variables and constraints get stable ids in insertion order. Names are
/// unique per kind.
#[derive(Debug, Clone, Default)]
pub struct Model {
    name: Option<String>,
    pub(crate) variables: BTreeMap<VariableId, VariableDef>,
    pub(crate) constraints: BTreeMap<ConstraintId, Constraint>,
    pub(crate) objective: Option<Objective>,
    pub(crate) variable_index: BTreeMap<Variable, VariableId>,
    pub(crate) constraint_index: BTreeMap<String, ConstraintId>,
    pub(crate) next_variable_id: u32,
    pub(crate) next_constraint_id: u32,
}

impl Model {
    /// Create a new empty, unnamed model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty model with a validated name.
    pub fn with_name(name: &str) -> Result<Self, ModelError> {
        validate_name(name).map_err(ModelError::InvalidName)?;
        tracing::debug!(
            component = "model",
            operation = "new",
            status = "success",
            name,
            "Created model"
        );
        Ok(Self {
            name: Some(name.to_string()),
            ..Self::default()
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the objective
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if self.variables.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }

    pub(crate) fn ensure_constraint_exists(&self, id: ConstraintId) -> Result<(), ModelError> {
        if self.constraints.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintId(id))
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Sense, VariableKind};
    use linmod_expr::NameError;

    mod builder_lifecycle;
    mod metadata_inspect;
    mod support;

    #[test]
    fn test_new_model_is_empty() {
        let model = Model::new();
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.num_constraints(), 0);
        assert!(model.objective().is_none());
        assert!(model.name().is_none());
    }

    #[test]
    fn test_model_name_validation() {
        assert_eq!(Model::with_name("R2D2").unwrap().name(), Some("R2D2"));
        assert_eq!(
            Model::with_name("").unwrap_err(),
            ModelError::InvalidName(NameError::Empty)
        );
        let err = Model::with_name("foo bar").unwrap_err();
        assert_eq!(err, ModelError::InvalidName(NameError::ContainsWhitespace));
        assert!(err.to_string().contains("cannot contain whitespace characters"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut model = Model::with_name("base").unwrap();
        let x = support::var("x");
        model
            .add_variable(VariableDef::continuous(x.clone(), Bounds::at_least(0.0)))
            .unwrap();
        let mut copy = model.clone();
        copy.add_constraint(support::constraint(x, "cap", None, Some(1.0)))
            .unwrap();
        assert_eq!(model.num_constraints(), 0);
        assert_eq!(copy.num_constraints(), 1);
    }

    #[test]
    fn test_objective_replaced_via_set_objective() {
        let mut model = Model::new();
        let x = support::var("x");
        model.minimize(x.clone() + 1).unwrap();
        assert_eq!(
            model.maximize(x.clone()).unwrap_err(),
            ModelError::MultipleObjectives
        );

        let replacement = crate::Objective::new(3.0 * &x, Sense::Maximize).unwrap();
        model.set_objective(replacement).unwrap();
        let objective = model.objective().unwrap();
        assert_eq!(objective.sense(), Sense::Maximize);
        assert_eq!(objective.expression().linear_terms(), &[(x, 3.0)]);
        assert_eq!(model.num_variables(), 1);
        assert_eq!(
            model.variable(VariableId::new(0)).unwrap().kind,
            VariableKind::Continuous
        );
    }
}
