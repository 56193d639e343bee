//! Model snapshots and JSON round-trip.

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::model::Model;
use crate::model::error::ModelError;
use crate::objective::Objective;
use crate::types::{Bounds, VariableDef, VariableKind};
use linmod_expr::Variable;

/// View of a variable in a model snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableView {
    pub name: String,
    #[serde(default)]
    pub lb: Option<f64>,
    #[serde(default)]
    pub ub: Option<f64>,
    #[serde(default)]
    pub kind: VariableKind,
}

/// Serializable copy of a whole model.
///
/// Constraints and the objective deserialize through their own validation,
/// so a snapshot that loads is always a valid model description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    pub variables: Vec<VariableView>,
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub objective: Option<Objective>,
}

impl Model {
    /// Capture variables, constraints and objective in id order.
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            name: self.name().map(str::to_string),
            variables: self
                .variables()
                .map(|(_, def)| VariableView {
                    name: def.variable.name().to_string(),
                    lb: def.bounds.lower,
                    ub: def.bounds.upper,
                    kind: def.kind,
                })
                .collect(),
            constraints: self.constraints().map(|(_, c)| c.clone()).collect(),
            objective: self.objective().cloned(),
        }
    }

    /// Rebuild a model from a snapshot. Ids are reassigned in snapshot order.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self, ModelError> {
        let mut model = match snapshot.name.as_deref() {
            Some(name) => Model::with_name(name)?,
            None => Model::new(),
        };
        for view in snapshot.variables {
            let variable = Variable::new(&view.name).map_err(|err| ModelError::Serialization {
                reason: format!("variable '{}': {}", view.name, err.detail()),
            })?;
            model.add_variable(VariableDef {
                variable,
                bounds: Bounds::new(view.lb, view.ub),
                kind: view.kind,
            })?;
        }
        model.add_constraints(snapshot.constraints)?;
        if let Some(objective) = snapshot.objective {
            model.set_objective(objective)?;
        }
        tracing::debug!(
            component = "model",
            operation = "from_snapshot",
            status = "success",
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "Restored model from snapshot"
        );
        Ok(model)
    }

    /// Encode the model as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Decode and validate a model from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let snapshot: ModelSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }
}
