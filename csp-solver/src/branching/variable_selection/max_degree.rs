use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::Csp;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable involved in the most constraints
/// that still have another unassigned variable in their scope (the degree heuristic).
///
/// Ties are broken in favour of the variable created first.
#[derive(Debug, Clone)]
pub struct MaxDegree {
    tie_breaker: InOrderTieBreaker<VariableId, usize>,
}

impl Default for MaxDegree {
    fn default() -> Self {
        MaxDegree {
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl MaxDegree {
    fn degree(csp: &Csp, variable: VariableId) -> usize {
        csp.get_cons_with_var(variable)
            .iter()
            .filter(|&&constraint| {
                csp.constraint(constraint)
                    .scope()
                    .iter()
                    .any(|&other| other != variable && !csp.variable(other).is_assigned())
            })
            .count()
    }
}

impl VariableSelector for MaxDegree {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        let csp = context.csp();
        csp.get_all_unasgn_vars().for_each(|variable| {
            self.tie_breaker
                .consider(variable, MaxDegree::degree(csp, variable));
        });
        self.tie_breaker.select()
    }
}
