use super::value_selection::InDomainOrder;
use super::value_selection::ValueSelector;
use super::variable_selection::MinimumRemainingValues;
use super::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::model::VariableId;

/// The [`Brancher`] returned by [`Solver::default_brancher`](crate::Solver::default_brancher).
pub type DefaultBrancher = IndependentVariableValueBrancher<MinimumRemainingValues, InDomainOrder>;

/// An implementation of a [`Brancher`] which uses a single [`VariableSelector`] and a single
/// [`ValueSelector`] independently of one another.
#[derive(Debug, Clone)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// Determines which unassigned variable to branch on next.
    variable_selector: VariableSelect,
    /// Determines the order in which the values of the selected variable are tried.
    value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        self.variable_selector.select_variable(context)
    }

    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId) -> Vec<i32> {
        self.value_selector.order_values(context, variable)
    }
}
