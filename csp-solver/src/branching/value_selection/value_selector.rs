use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A trait containing the interface for [`ValueSelector`]s, which determine the order in which
/// the values of the selected variable are tried.
pub trait ValueSelector {
    /// Returns every value in the current domain of `variable` exactly once, in the order in which
    /// they should be tried.
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId) -> Vec<i32>;
}
