//! Name and id lookups.

use linmod_expr::ids::{ConstraintId, VariableId};

use crate::constraint::Constraint;
use crate::model::Model;
use crate::model::error::ModelError;
use crate::types::VariableDef;

impl Model {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get a variable definition by id.
    pub fn variable(&self, id: VariableId) -> Result<&VariableDef, ModelError> {
        self.variables
            .get(&id)
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Get a constraint by id.
    pub fn constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.ensure_constraint_exists(id)?;
        Ok(&self.constraints[&id])
    }

    /// Lookup a variable by name.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_index.get(name).copied()
    }

    /// Lookup a constraint by name.
    pub fn get_constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        self.constraint_index.get(name).copied()
    }

    /// Variables in id order.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &VariableDef)> {
        self.variables.iter().map(|(id, def)| (*id, def))
    }

    /// Constraints in id order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().map(|(id, c)| (*id, c))
    }
}
