use thiserror::Error;

#[cfg(doc)]
use crate::Csp;

/// Errors related to building a [`Csp`].
///
/// Nothing is added to the [`Csp`] when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A variable with the same name already exists in the [`Csp`].
    #[error("a variable named '{0}' already exists")]
    DuplicateVariableName(String),
    /// The domain provided for a variable lists the same value twice.
    #[error("the domain of variable '{variable}' contains the value {value} more than once")]
    DuplicateDomainValue { variable: String, value: i32 },
    /// A constraint was created over zero variables.
    #[error("constraint '{0}' has an empty scope")]
    EmptyScope(String),
    /// A constraint mentions the same variable at two positions of its scope.
    #[error("constraint '{constraint}' mentions variable '{variable}' more than once")]
    RepeatedScopeVariable {
        constraint: String,
        variable: String,
    },
    /// A constraint refers to a variable which does not belong to this [`Csp`].
    #[error("constraint '{0}' refers to a variable which is not part of the problem")]
    UnknownVariable(String),
    /// A satisfying tuple does not have one value per scope position.
    #[error("constraint '{constraint}' has a tuple of arity {actual} but its scope has arity {expected}")]
    TupleArityMismatch {
        constraint: String,
        expected: usize,
        actual: usize,
    },
    /// A satisfying tuple assigns a value which is not in the domain of the variable at that
    /// position.
    #[error("constraint '{constraint}' has a tuple assigning {value} to '{variable}', which is outside its domain")]
    ValueOutsideDomain {
        constraint: String,
        variable: String,
        value: i32,
    },
}
