//! Core expression type: linear terms + constant.
//!
//! This is the normalized form every `Symbol` tree lowers into. Terms keep
//! insertion order until `normalized_terms` merges them.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::expr::constraint::{ComparisonSense, ConstraintExpr};
use crate::expr::error::LinearExprError;
use crate::expr::format::format_number;
use crate::variable::Variable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    constant: f64,
    linear: Vec<(Variable, f64)>,
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// Empty expression (all zeros).
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Expression from linear terms and constant.
    pub fn new(linear: Vec<(Variable, f64)>, constant: f64) -> Self {
        Self { constant, linear }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            constant,
            ..Default::default()
        }
    }

    /// Single linear term: coeff * var.
    pub fn term(variable: Variable, coeff: f64) -> Self {
        if coeff == 0.0 {
            return Self::default();
        }
        Self {
            linear: vec![(variable, coeff)],
            ..Default::default()
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(variable: Variable) -> Self {
        Self::term(variable, 1.0)
    }

    /// From raw linear terms, no constant.
    pub fn from_linear(linear: Vec<(Variable, f64)>) -> Self {
        Self {
            linear,
            ..Default::default()
        }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn linear_terms(&self) -> &[(Variable, f64)] {
        &self.linear
    }

    /// Consume and return (linear_terms, constant).
    pub fn into_parts(self) -> (Vec<(Variable, f64)>, f64) {
        (self.linear, self.constant)
    }

    /// Max degree of any term (0 = constant only).
    pub fn degree(&self) -> usize {
        usize::from(!self.linear.is_empty())
    }

    /// Distinct variables referenced by the expression, ordered by name.
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen: Vec<Variable> = self.linear.iter().map(|(v, _)| v.clone()).collect();
        seen.sort();
        seen.dedup();
        seen
    }

    // ── Operations ──────────────────────────────────────────

    /// Scale all terms and constant by a factor.
    pub fn scale(&self, by: f64) -> Self {
        Self {
            constant: self.constant * by,
            linear: self
                .linear
                .iter()
                .map(|(v, c)| (v.clone(), *c * by))
                .filter(|(_, c)| *c != 0.0)
                .collect(),
        }
    }

    /// Add another expression (concatenates terms, sums constants).
    pub fn add(&self, other: &Expr) -> Self {
        let mut linear = Vec::with_capacity(self.linear.len() + other.linear.len());
        linear.extend_from_slice(&self.linear);
        linear.extend_from_slice(&other.linear);
        Self {
            constant: self.constant + other.constant,
            linear,
        }
    }

    /// Add a constant offset.
    pub fn add_constant(&self, value: f64) -> Self {
        Self {
            constant: self.constant + value,
            linear: self.linear.clone(),
        }
    }

    /// Copy with constant set to zero.
    pub fn without_constant(&self) -> Self {
        Self {
            constant: 0.0,
            linear: self.linear.clone(),
        }
    }

    /// Merged linear terms with duplicates combined, ordered by variable name.
    pub fn normalized_terms(&self) -> Vec<(Variable, f64)> {
        let mut merged: BTreeMap<Variable, f64> = BTreeMap::new();
        for (variable, coeff) in &self.linear {
            if *coeff == 0.0 {
                continue;
            }
            *merged.entry(variable.clone()).or_insert(0.0) += *coeff;
        }
        merged.into_iter().filter(|(_, c)| *c != 0.0).collect()
    }

    /// Copy with duplicate terms merged and the constant kept.
    pub fn normalized(&self) -> Self {
        Self::new(self.normalized_terms(), self.constant)
    }

    /// Fail if the constant or any coefficient is NaN or infinite.
    pub fn ensure_finite(&self) -> Result<(), LinearExprError> {
        if !self.constant.is_finite() {
            return Err(LinearExprError::NonFinite {
                value: self.constant,
            });
        }
        match self.linear.iter().find(|(_, c)| !c.is_finite()) {
            Some((_, coeff)) => Err(LinearExprError::NonFinite { value: *coeff }),
            None => Ok(()),
        }
    }

    /// Evaluate the expression for a variable assignment.
    pub fn evaluate<F>(&self, mut value_of: F) -> Result<f64, LinearExprError>
    where
        F: FnMut(&Variable) -> Option<f64>,
    {
        let mut total = self.constant;
        for (variable, coeff) in &self.linear {
            let value = value_of(variable).ok_or_else(|| LinearExprError::MissingValue {
                variable: variable.name().to_string(),
            })?;
            total += coeff * value;
        }
        Ok(total)
    }

    // ── Comparison methods (produce ConstraintExpr) ─────────

    pub fn compare_scalar(&self, rhs: f64, sense: ComparisonSense) -> ConstraintExpr {
        ConstraintExpr::new(self.without_constant(), sense, rhs - self.constant)
    }

    pub fn compare_expr(&self, other: &Expr, sense: ComparisonSense) -> ConstraintExpr {
        let combined = self.add(&other.scale(-1.0));
        ConstraintExpr::new(combined.without_constant(), sense, -combined.constant)
    }

    pub fn le_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_scalar(&self, rhs: f64) -> ConstraintExpr {
        self.compare_scalar(rhs, ComparisonSense::Equal)
    }

    pub fn le_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_expr(&self, rhs: &Expr) -> ConstraintExpr {
        self.compare_expr(rhs, ComparisonSense::Equal)
    }
}

// ── Rendering ───────────────────────────────────────────────

fn write_term(out: &mut String, first: bool, coeff: f64, body: Option<&str>) {
    let negative = coeff < 0.0;
    if first {
        if negative {
            out.push('-');
        }
    } else {
        out.push_str(if negative { " - " } else { " + " });
    }
    let magnitude = coeff.abs();
    match body {
        Some(name) if magnitude == 1.0 => out.push_str(name),
        Some(name) => {
            let _ = write!(out, "{}*{name}", format_number(magnitude));
        }
        None => out.push_str(&format_number(magnitude)),
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.linear.is_empty() {
            return f.write_str(&format_number(self.constant));
        }
        let mut rendered = String::new();
        for (idx, (variable, coeff)) in self.linear.iter().enumerate() {
            write_term(&mut rendered, idx == 0, *coeff, Some(variable.name()));
        }
        if self.constant != 0.0 {
            write_term(&mut rendered, false, self.constant, None);
        }
        f.write_str(&rendered)
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs.scale(-1.0))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
