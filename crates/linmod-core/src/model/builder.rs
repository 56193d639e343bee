//! Model builder methods for adding variables, constraints, and objectives.

use std::collections::BTreeSet;

use linmod_expr::ids::{ConstraintId, VariableId};
use linmod_expr::{Symbol, Variable};

use crate::constraint::Constraint;
use crate::model::Model;
use crate::model::error::ModelError;
use crate::objective::Objective;
use crate::types::{Sense, VariableDef, VariableKind};

impl Model {
    /// Add a variable to the model.
    pub fn add_variable(&mut self, definition: VariableDef) -> Result<VariableId, ModelError> {
        let invalid_bounds = || ModelError::InvalidVariableBounds {
            name: definition.variable.name().to_string(),
            lower: definition.bounds.lower,
            upper: definition.bounds.upper,
        };
        let bounds = definition.bounds.normalized().ok_or_else(invalid_bounds)?;
        if definition.kind == VariableKind::Binary
            && (bounds.lower.is_none_or(|l| l < 0.0) || bounds.upper.is_none_or(|u| u > 1.0))
        {
            return Err(invalid_bounds());
        }
        if self.variable_index.contains_key(&definition.variable) {
            return Err(ModelError::DuplicateVariable {
                name: definition.variable.name().to_string(),
            });
        }

        let id = self.push_variable(VariableDef {
            bounds,
            ..definition
        });
        tracing::debug!(
            component = "model",
            operation = "add_variable",
            status = "success",
            variable_id = id.inner(),
            kind = ?self.variables[&id].kind,
            "Added variable"
        );
        Ok(id)
    }

    /// Add a constraint to the model.
    ///
    /// Variables referenced by the constraint that the model does not know
    /// yet are added as free continuous variables.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        if let Some(name) = constraint.name() {
            if self.constraint_index.contains_key(name) {
                return Err(ModelError::DuplicateConstraint {
                    name: name.to_string(),
                });
            }
        }

        let added_variables = self.adopt_variables(constraint.variables());

        let id = ConstraintId::new(self.next_constraint_id);
        self.next_constraint_id += 1;
        if let Some(name) = constraint.name() {
            self.constraint_index.insert(name.to_string(), id);
        }
        tracing::debug!(
            component = "model",
            operation = "add_constraint",
            status = "success",
            constraint_id = id.inner(),
            terms = constraint.expression().linear_terms().len(),
            added_variables,
            "Added constraint"
        );
        self.constraints.insert(id, constraint);
        Ok(id)
    }

    /// Add several constraints.
    ///
    /// Names are checked against the model and within the batch before any
    /// constraint is inserted, so a failed batch leaves the model unchanged.
    pub fn add_constraints<I>(&mut self, constraints: I) -> Result<Vec<ConstraintId>, ModelError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        let constraints: Vec<Constraint> = constraints.into_iter().collect();
        if let Some(name) = self.first_duplicate_name(&constraints) {
            tracing::warn!(
                component = "model",
                operation = "add_constraints",
                status = "rejected",
                batch_size = constraints.len(),
                "Duplicate constraint name in batch"
            );
            return Err(ModelError::DuplicateConstraint { name });
        }

        constraints
            .into_iter()
            .map(|constraint| self.add_constraint(constraint))
            .collect()
    }

    /// Remove a constraint and return it.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Result<Constraint, ModelError> {
        let constraint = self
            .constraints
            .remove(&id)
            .ok_or(ModelError::InvalidConstraintId(id))?;
        if let Some(name) = constraint.name() {
            self.constraint_index.remove(name);
        }
        tracing::debug!(
            component = "model",
            operation = "remove_constraint",
            status = "success",
            constraint_id = id.inner(),
            "Removed constraint"
        );
        Ok(constraint)
    }

    /// Remove a variable that no constraint or objective references.
    pub fn remove_variable(&mut self, id: VariableId) -> Result<VariableDef, ModelError> {
        self.ensure_variable_exists(id)?;
        let variable = self.variables[&id].variable.clone();
        let in_constraints = self
            .constraints
            .values()
            .any(|c| c.expression().linear_terms().iter().any(|(v, _)| *v == variable));
        let in_objective = self
            .objective
            .as_ref()
            .is_some_and(|o| o.expression().linear_terms().iter().any(|(v, _)| *v == variable));
        if in_constraints || in_objective {
            tracing::warn!(
                component = "model",
                operation = "remove_variable",
                status = "rejected",
                variable_id = id.inner(),
                "Variable still referenced"
            );
            return Err(ModelError::VariableInUse {
                name: variable.name().to_string(),
            });
        }

        self.variable_index.remove(&variable);
        self.variables
            .remove(&id)
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Set the objective function, replacing any existing one.
    pub fn set_objective(&mut self, objective: Objective) -> Result<(), ModelError> {
        let added_variables = self.adopt_variables(objective.variables());
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = objective.sense().as_str(),
            terms = objective.expression().linear_terms().len(),
            added_variables,
            "Set objective function"
        );
        self.objective = Some(objective);
        Ok(())
    }

    /// Minimize an expression.
    ///
    /// Returns an error if the model already has an objective.
    pub fn minimize<E: Into<Symbol>>(&mut self, expression: E) -> Result<(), ModelError> {
        self.set_new_objective(expression, Sense::Minimize)
    }

    /// Maximize an expression.
    ///
    /// Returns an error if the model already has an objective.
    pub fn maximize<E: Into<Symbol>>(&mut self, expression: E) -> Result<(), ModelError> {
        self.set_new_objective(expression, Sense::Maximize)
    }

    /// Drop the objective, returning it.
    pub fn clear_objective(&mut self) -> Option<Objective> {
        self.objective.take()
    }

    fn set_new_objective<E: Into<Symbol>>(
        &mut self,
        expression: E,
        sense: Sense,
    ) -> Result<(), ModelError> {
        if self.objective.is_some() {
            return Err(ModelError::MultipleObjectives);
        }
        let objective = Objective::new(expression, sense).map_err(ModelError::InvalidObjective)?;
        self.set_objective(objective)
    }

    fn first_duplicate_name(&self, constraints: &[Constraint]) -> Option<String> {
        let mut batch_names = BTreeSet::new();
        constraints
            .iter()
            .filter_map(Constraint::name)
            .find(|name| self.constraint_index.contains_key(*name) || !batch_names.insert(*name))
            .map(str::to_string)
    }

    fn adopt_variables(&mut self, variables: Vec<Variable>) -> usize {
        let mut added = 0;
        for variable in variables {
            if !self.variable_index.contains_key(&variable) {
                self.push_variable(VariableDef::free(variable));
                added += 1;
            }
        }
        added
    }

    fn push_variable(&mut self, definition: VariableDef) -> VariableId {
        let id = VariableId::new(self.next_variable_id);
        self.next_variable_id += 1;
        self.variable_index.insert(definition.variable.clone(), id);
        self.variables.insert(id, definition);
        id
    }
}
