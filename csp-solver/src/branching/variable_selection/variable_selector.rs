use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A trait containing the interface for [`VariableSelector`]s, which determine the variable the
/// search branches on next.
pub trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on.
    ///
    /// Should only return [`None`] when all variables of the CSP have been assigned; otherwise it
    /// should return an unassigned variable.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;
}
