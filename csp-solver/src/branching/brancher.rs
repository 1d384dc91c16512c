#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::VariableId;
#[cfg(doc)]
use crate::Solver;

/// A branching strategy: it determines which unassigned variable the search branches on next and
/// in which order the values of that variable are tried.
///
/// Usually a [`VariableSelector`] and a [`ValueSelector`] combined through
/// [`IndependentVariableValueBrancher`](crate::branching::IndependentVariableValueBrancher), see
/// [`Solver::default_brancher`].
pub trait Brancher {
    /// Returns the variable to branch on next, or [`None`] if all variables are assigned.
    ///
    /// The returned variable must be unassigned.
    fn next_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;

    /// Returns the values of the current domain of `variable` in the order in which they should
    /// be tried. Every value of the current domain must be returned exactly once, otherwise the
    /// search is no longer complete.
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId) -> Vec<i32>;
}
