//! Named decision variable symbols.

use std::sync::Arc;

use crate::name::{NameError, validate_name};

/// A named symbolic variable.
///
/// Identity is the name: two handles with the same name are the same
/// variable. Cloning shares the underlying string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    name: Arc<str>,
}

impl Variable {
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let name = name.as_ref();
        validate_name(name)?;
        Ok(Self { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::borrow::Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variable({:?})", self.name())
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Variable;
    use crate::name::NameError;

    #[test]
    fn equality_follows_name() {
        let a = Variable::new("x").unwrap();
        let b = Variable::new(String::from("x")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Variable::new("y").unwrap());
    }

    #[test]
    fn rejects_invalid_names() {
        assert_eq!(Variable::new("").unwrap_err(), NameError::Empty);
        assert_eq!(
            Variable::new("x y").unwrap_err(),
            NameError::ContainsWhitespace
        );
    }

    #[test]
    fn renders_name() {
        let x = Variable::new("flux").unwrap();
        assert_eq!(x.to_string(), "flux");
        assert_eq!(format!("{x:?}"), "Variable(\"flux\")");
    }
}
