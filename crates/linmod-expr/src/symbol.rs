//! Symbolic expression trees.
//!
//! A `Symbol` is what callers write (`2.0 * x + 3`); an `Expr` is what the
//! model stores. `Symbol::to_linear` is the only bridge between the two.

use std::ops::{Add, Mul, Neg, Sub};

use crate::expr::{Expr, LinearExprError, format_number, linear_sum};
use crate::variable::Variable;

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Constant(f64),
    Variable(Variable),
    Sum(Vec<Symbol>),
    Product(Vec<Symbol>),
}

impl Symbol {
    pub fn integer(value: i64) -> Self {
        Symbol::Constant(value as f64)
    }

    pub fn real(value: f64) -> Self {
        Symbol::Constant(value)
    }

    pub fn var(variable: &Variable) -> Self {
        Symbol::Variable(variable.clone())
    }

    /// Sum of `items`, flattening nested sums.
    pub fn sum<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut flat = Vec::new();
        for item in items {
            match item {
                Symbol::Sum(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Symbol::Sum(flat)
    }

    /// Product of `factors`, flattening nested products.
    pub fn product<I>(factors: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut flat = Vec::new();
        for factor in factors {
            match factor {
                Symbol::Product(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Symbol::Product(flat)
    }

    /// Lower the tree into `constant + Σ coeff·var`.
    ///
    /// Duplicate variables are kept as separate terms; callers that need a
    /// canonical form use `Expr::normalized`.
    pub fn to_linear(&self) -> Result<Expr, LinearExprError> {
        let expr = self.lower()?;
        expr.ensure_finite()?;
        Ok(expr)
    }

    fn lower(&self) -> Result<Expr, LinearExprError> {
        match self {
            Symbol::Constant(value) if !value.is_finite() => {
                Err(LinearExprError::NonFinite { value: *value })
            }
            Symbol::Constant(value) => Ok(Expr::from_constant(*value)),
            Symbol::Variable(variable) => Ok(Expr::var(variable.clone())),
            Symbol::Sum(items) => {
                let parts = items
                    .iter()
                    .map(Symbol::lower)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(linear_sum(parts))
            }
            Symbol::Product(factors) => {
                let mut acc = Expr::from_constant(1.0);
                for factor in factors {
                    let next = factor.lower()?;
                    acc = match (acc.degree(), next.degree()) {
                        (0, _) => next.scale(acc.constant()),
                        (_, 0) => acc.scale(next.constant()),
                        _ => return Err(LinearExprError::NonLinear),
                    };
                }
                Ok(acc)
            }
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Constant(value) => f.write_str(&format_number(*value)),
            Symbol::Variable(variable) => write!(f, "{variable}"),
            Symbol::Sum(items) if items.is_empty() => f.write_str("0.0"),
            Symbol::Product(factors) if factors.is_empty() => f.write_str("1.0"),
            Symbol::Sum(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Symbol::Product(factors) => {
                for (idx, factor) in factors.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("*")?;
                    }
                    match factor {
                        Symbol::Sum(_) => write!(f, "({factor})")?,
                        _ => write!(f, "{factor}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

// ── Conversions ─────────────────────────────────────────────

impl From<f64> for Symbol {
    fn from(value: f64) -> Self {
        Symbol::Constant(value)
    }
}

impl From<i32> for Symbol {
    fn from(value: i32) -> Self {
        Symbol::Constant(f64::from(value))
    }
}

impl From<i64> for Symbol {
    fn from(value: i64) -> Self {
        Symbol::integer(value)
    }
}

impl From<Variable> for Symbol {
    fn from(variable: Variable) -> Self {
        Symbol::Variable(variable)
    }
}

impl From<&Variable> for Symbol {
    fn from(variable: &Variable) -> Self {
        Symbol::var(variable)
    }
}

impl From<Expr> for Symbol {
    fn from(expr: Expr) -> Self {
        let (terms, constant) = expr.into_parts();
        let mut items: Vec<Symbol> = terms
            .into_iter()
            .map(|(variable, coeff)| {
                Symbol::product([Symbol::Constant(coeff), Symbol::Variable(variable)])
            })
            .collect();
        if constant != 0.0 || items.is_empty() {
            items.push(Symbol::Constant(constant));
        }
        Symbol::sum(items)
    }
}

// ── Operator overloads ──────────────────────────────────────

impl<R: Into<Symbol>> Add<R> for Symbol {
    type Output = Symbol;

    fn add(self, rhs: R) -> Self::Output {
        Symbol::sum([self, rhs.into()])
    }
}

impl<R: Into<Symbol>> Sub<R> for Symbol {
    type Output = Symbol;

    fn sub(self, rhs: R) -> Self::Output {
        Symbol::sum([self, -rhs.into()])
    }
}

impl<R: Into<Symbol>> Mul<R> for Symbol {
    type Output = Symbol;

    fn mul(self, rhs: R) -> Self::Output {
        Symbol::product([self, rhs.into()])
    }
}

impl Neg for Symbol {
    type Output = Symbol;

    fn neg(self) -> Self::Output {
        match self {
            Symbol::Constant(value) => Symbol::Constant(-value),
            other => Symbol::product([Symbol::Constant(-1.0), other]),
        }
    }
}

macro_rules! forward_variable_ops {
    ($lhs:ty) => {
        impl<R: Into<Symbol>> Add<R> for $lhs {
            type Output = Symbol;

            fn add(self, rhs: R) -> Self::Output {
                Symbol::from(self) + rhs
            }
        }

        impl<R: Into<Symbol>> Sub<R> for $lhs {
            type Output = Symbol;

            fn sub(self, rhs: R) -> Self::Output {
                Symbol::from(self) - rhs
            }
        }

        impl<R: Into<Symbol>> Mul<R> for $lhs {
            type Output = Symbol;

            fn mul(self, rhs: R) -> Self::Output {
                Symbol::from(self) * rhs
            }
        }

        impl Neg for $lhs {
            type Output = Symbol;

            fn neg(self) -> Self::Output {
                -Symbol::from(self)
            }
        }
    };
}

forward_variable_ops!(Variable);
forward_variable_ops!(&Variable);

macro_rules! scalar_lhs_ops {
    ($scalar:ty, $rhs:ty) => {
        impl Add<$rhs> for $scalar {
            type Output = Symbol;

            fn add(self, rhs: $rhs) -> Self::Output {
                Symbol::from(self) + rhs
            }
        }

        impl Sub<$rhs> for $scalar {
            type Output = Symbol;

            fn sub(self, rhs: $rhs) -> Self::Output {
                Symbol::from(self) - rhs
            }
        }

        impl Mul<$rhs> for $scalar {
            type Output = Symbol;

            fn mul(self, rhs: $rhs) -> Self::Output {
                Symbol::from(self) * rhs
            }
        }
    };
}

scalar_lhs_ops!(f64, Symbol);
scalar_lhs_ops!(f64, Variable);
scalar_lhs_ops!(f64, &Variable);
scalar_lhs_ops!(i32, Symbol);
scalar_lhs_ops!(i32, Variable);
scalar_lhs_ops!(i32, &Variable);
