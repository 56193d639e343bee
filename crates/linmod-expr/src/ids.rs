//! Typed ids handed out by a model for its variables and constraints.

macro_rules! define_id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }

            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        /// Renders as the prefix followed by the inner value, e.g. `v3`.
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_id_type!(VariableId, "v");
define_id_type!(ConstraintId, "c");
