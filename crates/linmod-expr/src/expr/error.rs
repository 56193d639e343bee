//! Expression construction errors.

#[derive(Debug, Clone, PartialEq)]
pub enum LinearExprError {
    /// A product has more than one non-constant factor.
    NonLinear,
    /// A constant or coefficient is NaN or infinite.
    NonFinite { value: f64 },
    /// Parallel variable/coefficient inputs differ in length.
    MismatchedLengths,
    /// No value was supplied for a variable during evaluation.
    MissingValue { variable: String },
}

impl LinearExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            LinearExprError::NonLinear => "EXPR_NONLINEAR",
            LinearExprError::NonFinite { .. } => "EXPR_NON_FINITE",
            LinearExprError::MismatchedLengths => "EXPR_MISMATCHED_LENGTHS",
            LinearExprError::MissingValue { .. } => "EXPR_MISSING_VALUE",
        }
    }

    /// Message without the error code.
    pub fn detail(&self) -> String {
        match self {
            LinearExprError::NonLinear => {
                "product of non-constant factors is not linear".to_string()
            }
            LinearExprError::NonFinite { value } => {
                format!("constants and coefficients must be finite (got {value})")
            }
            LinearExprError::MismatchedLengths => {
                "variables and coefficients must have the same length".to_string()
            }
            LinearExprError::MissingValue { variable } => {
                format!("no value given for variable '{variable}'")
            }
        }
    }
}

impl std::fmt::Display for LinearExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.detail())
    }
}

impl std::error::Error for LinearExprError {}

#[cfg(test)]
mod tests {
    use super::LinearExprError;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(LinearExprError::NonLinear.code(), "EXPR_NONLINEAR");
        assert_eq!(
            LinearExprError::NonFinite { value: f64::NAN }.code(),
            "EXPR_NON_FINITE"
        );
        assert_eq!(
            LinearExprError::MismatchedLengths.code(),
            "EXPR_MISMATCHED_LENGTHS"
        );
        assert_eq!(
            LinearExprError::MissingValue {
                variable: "x".to_string()
            }
            .code(),
            "EXPR_MISSING_VALUE"
        );
    }

    #[test]
    fn display_prefixes_error_code() {
        let rendered = LinearExprError::NonLinear.to_string();
        assert!(rendered.starts_with("[EXPR_NONLINEAR]"));
    }

    #[test]
    fn missing_value_names_the_variable() {
        let err = LinearExprError::MissingValue {
            variable: "flux".to_string(),
        };
        assert!(err.to_string().contains("'flux'"));
    }
}
