use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the first unassigned variable in the order in which the
/// variables were created.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        context.csp().get_all_unasgn_vars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::test_utils::csp_with_domain_sizes;
    use crate::branching::variable_selection::test_utils::test_random;

    #[test]
    fn first_unassigned_variable_is_selected() {
        let (mut csp, variables) = csp_with_domain_sizes(&[5, 1, 5]);
        let mut random = test_random();
        {
            let mut context = SelectionContext::new(&csp, &mut random);
            assert_eq!(InputOrder.select_variable(&mut context), Some(variables[0]));
        }

        csp.assign(variables[0], 3);
        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(InputOrder.select_variable(&mut context), Some(variables[1]));
    }
}
