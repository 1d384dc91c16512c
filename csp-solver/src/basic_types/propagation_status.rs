use crate::model::ConstraintId;
use crate::model::VariableId;

/// The result of invoking a propagator. The propagation can either succeed or identify an
/// inconsistency; in both cases the values which were pruned are recorded by the
/// [`PropagationContext`](crate::propagators::PropagationContext) so that they can be restored.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The reason why a branch of the search is infeasible.
///
/// Both variants are ordinary events during search; they make the driver try the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// The current domain of the variable has become empty.
    EmptyDomain(VariableId),
    /// All variables in the scope of the constraint are assigned and the assigned values do not
    /// form a satisfying tuple.
    ViolatedConstraint(ConstraintId),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(empty_domain: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain(empty_domain.0)
    }
}

/// Returned when a pruning removes the last value from the current domain of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain(pub VariableId);

/// A single value removed from the current domain of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: i32,
}
