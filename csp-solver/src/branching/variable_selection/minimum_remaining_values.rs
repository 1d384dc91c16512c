use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::csp_assert_eq_simple;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest values left in
/// its current domain ("fail first").
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] which prefers the
/// variable created first. A custom [`TieBreaker`] can be provided with
/// [`MinimumRemainingValues::with_tie_breaker`].
#[derive(Debug, Clone)]
pub struct MinimumRemainingValues<TieBreaking = InOrderTieBreaker<VariableId, usize>> {
    tie_breaker: TieBreaking,
}

impl MinimumRemainingValues {
    pub fn new() -> Self {
        MinimumRemainingValues {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MinimumRemainingValues {
    fn default() -> Self {
        Self::new()
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        csp_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The tie-breaker provided to MinimumRemainingValues looks for the maximum value \
             instead of the minimum value"
        );
        MinimumRemainingValues { tie_breaker }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> VariableSelector
    for MinimumRemainingValues<TieBreaking>
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        context.csp().get_all_unasgn_vars().for_each(|variable| {
            self.tie_breaker
                .consider(variable, context.cur_domain_size(variable));
        });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::test_utils::csp_with_domain_sizes;
    use crate::branching::variable_selection::test_utils::test_random;

    #[test]
    fn smallest_current_domain_is_selected() {
        let (mut csp, variables) = csp_with_domain_sizes(&[4, 4, 4]);
        csp.prune_value(variables[2], 1);
        csp.prune_value(variables[2], 2);
        let mut random = test_random();

        let mut selector = MinimumRemainingValues::new();
        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(selector.select_variable(&mut context), Some(variables[2]));
    }

    #[test]
    fn ties_are_broken_by_creation_order() {
        let (csp, variables) = csp_with_domain_sizes(&[3, 2, 2]);
        let mut random = test_random();
        let mut selector = MinimumRemainingValues::new();

        for _ in 0..3 {
            let mut context = SelectionContext::new(&csp, &mut random);
            assert_eq!(selector.select_variable(&mut context), Some(variables[1]));
        }
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let (mut csp, variables) = csp_with_domain_sizes(&[1, 3]);
        csp.assign(variables[0], 1);
        csp.assign(variables[1], 2);
        let mut random = test_random();

        let mut selector = MinimumRemainingValues::new();
        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(selector.select_variable(&mut context), None);
    }

    #[test]
    #[should_panic]
    fn maximising_tie_breaker_is_rejected() {
        let _ = MinimumRemainingValues::with_tie_breaker(InOrderTieBreaker::<VariableId, usize>::new(
            Direction::Maximum,
        ));
    }
}
