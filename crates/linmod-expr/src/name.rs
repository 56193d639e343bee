//! Identifier rules shared by variables, constraints, objectives and models.

/// Reasons a name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty,
    ContainsWhitespace,
}

impl NameError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            NameError::Empty => "NAME_EMPTY",
            NameError::ContainsWhitespace => "NAME_WHITESPACE",
        }
    }

    /// Message fragment without the error code.
    pub fn detail(&self) -> &'static str {
        match self {
            NameError::Empty => "must not be empty",
            NameError::ContainsWhitespace => "cannot contain whitespace characters",
        }
    }
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] Name {}", self.code(), self.detail())
    }
}

impl std::error::Error for NameError {}

/// Check that `name` is non-empty and free of any Unicode whitespace.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(NameError::ContainsWhitespace);
    }
    Ok(())
}
