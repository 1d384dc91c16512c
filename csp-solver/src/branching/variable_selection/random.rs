use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects an unassigned variable uniformly at random, using the
/// random source of the [`SelectionContext`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl VariableSelector for RandomSelector {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        let unassigned = context.csp().get_all_unasgn_vars().collect::<Vec<_>>();
        if unassigned.is_empty() {
            return None;
        }

        let index = context.random().generate_usize_in_range(0..unassigned.len());
        Some(unassigned[index])
    }
}
