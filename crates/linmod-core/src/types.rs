use linmod_expr::Variable;
use serde::{Deserialize, Serialize};

/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Optional lower and upper bounds for a variable or constraint.
///
/// `None` on a side means unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Bounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// No bound on either side.
    pub fn free() -> Self {
        Self::default()
    }

    pub fn at_least(lower: f64) -> Self {
        Self::new(Some(lower), None)
    }

    pub fn at_most(upper: f64) -> Self {
        Self::new(None, Some(upper))
    }

    pub fn between(lower: f64, upper: f64) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    pub fn fixed(value: f64) -> Self {
        Self::between(value, value)
    }

    pub fn is_free(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    pub fn is_fixed(&self) -> bool {
        matches!((self.lower, self.upper), (Some(l), Some(u)) if l == u)
    }

    /// Canonical form: infinite sides that impose nothing become `None`.
    ///
    /// Returns `None` for NaN, for a side that excludes every value
    /// (`lower = +inf`, `upper = -inf`), and for `lower > upper`.
    pub fn normalized(self) -> Option<Self> {
        let lower = match self.lower {
            Some(v) if v.is_nan() || v == f64::INFINITY => return None,
            Some(v) if v == f64::NEG_INFINITY => None,
            other => other,
        };
        let upper = match self.upper {
            Some(v) if v.is_nan() || v == f64::NEG_INFINITY => return None,
            Some(v) if v == f64::INFINITY => None,
            other => other,
        };
        if let (Some(l), Some(u)) = (lower, upper) {
            if l > u {
                return None;
            }
        }
        Some(Self { lower, upper })
    }

    /// Subtract `offset` from both sides.
    pub fn shifted(self, offset: f64) -> Self {
        Self {
            lower: self.lower.map(|l| l - offset),
            upper: self.upper.map(|u| u - offset),
        }
    }

    /// Whether `value` lies within the bounds, widened by `tolerance`.
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        self.lower.is_none_or(|l| value >= l - tolerance)
            && self.upper.is_none_or(|u| value <= u + tolerance)
    }
}

/// Integrality class of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    #[default]
    Continuous,
    Integer,
    Binary,
}

/// A variable as declared in a model: symbol, bounds and integrality.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDef {
    pub variable: Variable,
    pub bounds: Bounds,
    pub kind: VariableKind,
}

impl VariableDef {
    /// Create a continuous variable with specified bounds.
    pub fn continuous(variable: Variable, bounds: Bounds) -> Self {
        Self {
            variable,
            bounds,
            kind: VariableKind::Continuous,
        }
    }

    /// Create an integer variable with specified bounds.
    pub fn integer(variable: Variable, bounds: Bounds) -> Self {
        Self {
            variable,
            bounds,
            kind: VariableKind::Integer,
        }
    }

    /// Create a binary variable with bounds [0, 1].
    pub fn binary(variable: Variable) -> Self {
        Self {
            variable,
            bounds: Bounds::between(0.0, 1.0),
            kind: VariableKind::Binary,
        }
    }

    /// Continuous variable without bounds.
    pub fn free(variable: Variable) -> Self {
        Self::continuous(variable, Bounds::free())
    }
}
