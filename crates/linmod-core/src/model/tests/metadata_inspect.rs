use super::support::{constraint, var};
use super::*;

fn sample_model() -> Model {
    let mut model = Model::with_name("diet").unwrap();
    let x = var("x");
    let y = var("y");
    let b = var("b");
    model
        .add_variable(VariableDef::continuous(x.clone(), Bounds::between(0.0, 10.0)))
        .unwrap();
    model
        .add_variable(VariableDef::integer(y.clone(), Bounds::at_least(0.0)))
        .unwrap();
    model.add_variable(VariableDef::binary(b.clone())).unwrap();
    model
        .add_constraint(constraint(x.clone() + &y, "cap", None, Some(8.0)))
        .unwrap();
    model
        .add_constraint(constraint(x.clone() - 5.0 * &b + 2, "link", Some(-5.0), Some(5.0)))
        .unwrap();
    model.minimize(2.0 * x + y).unwrap();
    model
}

#[test]
fn test_name_lookup_helpers() {
    let model = sample_model();
    assert_eq!(model.get_variable_by_name("x"), Some(VariableId::new(0)));
    assert_eq!(model.get_constraint_by_name("link").map(|id| id.inner()), Some(1));
    assert!(model.get_variable_by_name("missing").is_none());
    assert!(model.get_constraint_by_name("missing").is_none());
    let err = model.variable(VariableId::new(42)).unwrap_err();
    assert_eq!(err, ModelError::InvalidVariableId(VariableId::new(42)));
    assert_eq!(
        err.to_string(),
        "[VARIABLE_INVALID_ID] Variable v42 does not exist"
    );
}

#[test]
fn test_iterators_follow_id_order() {
    let model = sample_model();
    let names: Vec<&str> = model
        .variables()
        .map(|(_, def)| def.variable.name())
        .collect();
    assert_eq!(names, vec!["x", "y", "b"]);
    let constraints: Vec<Option<&str>> = model.constraints().map(|(_, c)| c.name()).collect();
    assert_eq!(constraints, vec![Some("cap"), Some("link")]);
}

#[test]
fn test_format_ascii_full() {
    let model = sample_model();
    let expected = [
        "model diet",
        "minimize 2.0*x + y",
        "subject to",
        " cap: x + y <= 8.0",
        " link: -7.0 <= -5.0*b + x <= 3.0",
        "bounds",
        " 0.0 <= x <= 10.0",
        " y >= 0.0",
        "integers",
        " y",
        "binaries",
        " b",
    ]
    .join("\n");
    assert_eq!(model.to_string(), expected);
}

#[test]
fn test_format_ascii_preview_truncates() {
    let mut model = Model::new();
    let x = var("x");
    for idx in 0..25 {
        model
            .add_constraint(constraint(x.clone(), &format!("c{idx}"), None, Some(f64::from(idx))))
            .unwrap();
    }
    let rendered = model.format_ascii(PrettyPrintOptions::preview());
    assert!(rendered.starts_with("objective: (not set)\nsubject to\n c0: x <= 0.0"));
    assert!(rendered.contains(" ... (5 more constraints)"));
    assert!(rendered.ends_with(" x free"));
}

#[test]
fn test_empty_model_listing() {
    assert_eq!(
        Model::new().to_string(),
        "objective: (not set)\nsubject to\n (none)"
    );
}

#[test]
fn test_snapshot_captures_everything() {
    let model = sample_model();
    let snapshot = model.snapshot();
    assert_eq!(snapshot.name.as_deref(), Some("diet"));
    assert_eq!(snapshot.variables.len(), 3);
    assert_eq!(snapshot.variables[2].kind, VariableKind::Binary);
    assert_eq!(snapshot.constraints.len(), 2);
    assert_eq!(snapshot.objective.as_ref().map(|o| o.sense()), Some(Sense::Minimize));
}

#[test]
fn test_json_round_trip() {
    let model = sample_model();
    let json = model.to_json().unwrap();
    let restored = Model::from_json(&json).unwrap();
    assert_eq!(restored.snapshot(), model.snapshot());
    assert_eq!(restored.to_string(), model.to_string());
}

#[test]
fn test_from_json_rejects_free_constraint() {
    let json = r#"{
        "name": "broken",
        "variables": [{"name": "x"}],
        "constraints": [{"name": "c", "expression": {"terms": [["x", 1.0]]}}]
    }"#;
    let err = Model::from_json(json).unwrap_err();
    assert_eq!(err.code(), "MODEL_SERIALIZATION");
    assert!(err.to_string().contains("free"));
}

#[test]
fn test_from_json_rejects_bad_model_name() {
    let json = r#"{"name": "two words", "variables": [], "constraints": []}"#;
    let err = Model::from_json(json).unwrap_err();
    assert_eq!(err, ModelError::InvalidName(NameError::ContainsWhitespace));
}
