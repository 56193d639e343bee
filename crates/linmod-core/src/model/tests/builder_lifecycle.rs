use super::support::{constraint, var};
use super::*;

#[test]
fn test_add_variable_assigns_sequential_ids() {
    let mut model = Model::new();
    let x = model
        .add_variable(VariableDef::continuous(var("x"), Bounds::between(0.0, 10.0)))
        .unwrap();
    let y = model
        .add_variable(VariableDef::integer(var("y"), Bounds::at_least(0.0)))
        .unwrap();
    assert_eq!(x.inner(), 0);
    assert_eq!(y.inner(), 1);
    assert_eq!(model.variable(y).unwrap().kind, VariableKind::Integer);
}

#[test]
fn test_add_variable_rejects_bad_bounds() {
    let mut model = Model::new();
    let err = model
        .add_variable(VariableDef::continuous(var("x"), Bounds::between(5.0, 1.0)))
        .unwrap_err();
    assert_eq!(err.code(), "VARIABLE_INVALID_BOUNDS");

    let err = model
        .add_variable(VariableDef {
            variable: var("b"),
            bounds: Bounds::between(0.0, 2.0),
            kind: VariableKind::Binary,
        })
        .unwrap_err();
    assert_eq!(err.code(), "VARIABLE_INVALID_BOUNDS");
    assert!(err.to_string().contains("'b'"));

    model
        .add_variable(VariableDef::integer(var("b"), Bounds::between(0.0, 1.0)))
        .unwrap();
    assert_eq!(model.num_variables(), 1);
}

#[test]
fn test_add_variable_normalizes_infinite_bounds() {
    let mut model = Model::new();
    let id = model
        .add_variable(VariableDef::continuous(
            var("x"),
            Bounds::new(Some(f64::NEG_INFINITY), Some(3.0)),
        ))
        .unwrap();
    assert_eq!(model.variable(id).unwrap().bounds, Bounds::at_most(3.0));
}

#[test]
fn test_duplicate_variable_name() {
    let mut model = Model::new();
    model.add_variable(VariableDef::free(var("x"))).unwrap();
    let err = model.add_variable(VariableDef::free(var("x"))).unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_add_constraint_adopts_unknown_variables() {
    let mut model = Model::new();
    let x = var("x");
    let y = var("y");
    model
        .add_variable(VariableDef::continuous(x.clone(), Bounds::at_least(0.0)))
        .unwrap();

    let id = model
        .add_constraint(constraint(x.clone() + 2.0 * &y, "mix", Some(1.0), None))
        .unwrap();

    assert_eq!(model.num_variables(), 2);
    let y_id = model.get_variable_by_name("y").unwrap();
    let y_def = model.variable(y_id).unwrap();
    assert_eq!(y_def.bounds, Bounds::free());
    assert_eq!(y_def.kind, VariableKind::Continuous);
    // existing definitions are left alone
    let x_id = model.get_variable_by_name("x").unwrap();
    assert_eq!(model.variable(x_id).unwrap().bounds, Bounds::at_least(0.0));
    assert_eq!(model.constraint(id).unwrap().name(), Some("mix"));
}

#[test]
fn test_duplicate_constraint_name() {
    let mut model = Model::new();
    let x = var("x");
    model
        .add_constraint(constraint(x.clone(), "cap", None, Some(1.0)))
        .unwrap();
    let err = model
        .add_constraint(constraint(x, "cap", None, Some(2.0)))
        .unwrap_err();
    assert_eq!(err.code(), "CONSTRAINT_DUPLICATE");
    assert_eq!(model.num_constraints(), 1);
}

#[test]
fn test_failed_batch_leaves_model_unchanged() {
    let mut model = Model::new();
    let err = model
        .add_constraints([
            constraint(var("a") + 1, "a", Some(0.0), None),
            constraint(var("b"), "a", None, Some(1.0)),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateConstraint {
            name: "a".to_string()
        }
    );
    assert_eq!(model.num_constraints(), 0);
    assert_eq!(model.num_variables(), 0);

    model
        .add_constraint(constraint(var("x"), "cap", None, Some(1.0)))
        .unwrap();
    let err = model
        .add_constraints([
            constraint(var("y"), "fresh", Some(0.0), None),
            constraint(var("z"), "cap", Some(0.0), None),
        ])
        .unwrap_err();
    assert_eq!(err.code(), "CONSTRAINT_DUPLICATE");
    assert_eq!(model.num_constraints(), 1);
    assert_eq!(model.num_variables(), 1);
    assert!(model.get_constraint_by_name("fresh").is_none());
}

#[test]
fn test_unnamed_constraints_do_not_collide() {
    let mut model = Model::new();
    let x = var("x");
    let first = Constraint::new(x.clone(), None, Some(0.0), None).unwrap();
    let second = Constraint::new(x, None, None, Some(1.0)).unwrap();
    let ids = model.add_constraints([first, second]).unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(model.num_constraints(), 2);
}

#[test]
fn test_remove_constraint_frees_name() {
    let mut model = Model::new();
    let x = var("x");
    let id = model
        .add_constraint(constraint(x.clone(), "cap", None, Some(1.0)))
        .unwrap();
    let removed = model.remove_constraint(id).unwrap();
    assert_eq!(removed.ub(), Some(1.0));
    assert!(model.get_constraint_by_name("cap").is_none());
    assert_eq!(
        model.remove_constraint(id).unwrap_err(),
        ModelError::InvalidConstraintId(id)
    );
    model
        .add_constraint(constraint(x, "cap", None, Some(2.0)))
        .unwrap();
}

#[test]
fn test_remove_variable_in_use() {
    let mut model = Model::new();
    let x = var("x");
    let cid = model
        .add_constraint(constraint(x.clone(), "cap", None, Some(1.0)))
        .unwrap();
    let vid = model.get_variable_by_name("x").unwrap();

    let err = model.remove_variable(vid).unwrap_err();
    assert_eq!(
        err,
        ModelError::VariableInUse {
            name: "x".to_string()
        }
    );

    model.remove_constraint(cid).unwrap();
    let removed = model.remove_variable(vid).unwrap();
    assert_eq!(removed.variable, x);
    assert!(model.get_variable_by_name("x").is_none());
}

#[test]
fn test_objective_variables_are_adopted() {
    let mut model = Model::new();
    model.maximize(3.0 * var("profit") - 1).unwrap();
    assert!(model.get_variable_by_name("profit").is_some());
    let vid = model.get_variable_by_name("profit").unwrap();
    assert_eq!(
        model.remove_variable(vid).unwrap_err().code(),
        "VARIABLE_IN_USE"
    );
    assert!(model.clear_objective().is_some());
    model.remove_variable(vid).unwrap();
}

#[test]
fn test_nonlinear_objective_is_rejected() {
    let mut model = Model::new();
    let err = model.minimize(var("x") * var("y")).unwrap_err();
    assert_eq!(err.code(), "OBJECTIVE_INVALID");
    assert!(model.objective().is_none());
}
