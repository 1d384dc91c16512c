use log::trace;

use super::ConstraintQueue;
use super::PropagationContext;
use super::Propagator;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::csp_assert_simple;
use crate::model::ConstraintId;
use crate::model::VariableId;

/// Generalised arc consistency: repeatedly removes every value which has no support in some
/// constraint, until no constraint in the worklist can prune anything.
///
/// The worklist starts with the constraints on the assigned variable (or all constraints before
/// the search starts). A constraint which prunes a variable is revised again until it is locally
/// consistent, and the other constraints on the pruned variable are put back on the worklist.
#[derive(Debug, Default, Clone)]
pub struct GeneralisedArcConsistencyPropagator {
    queue: ConstraintQueue,
}

impl Propagator for GeneralisedArcConsistencyPropagator {
    fn name(&self) -> &str {
        "GeneralisedArcConsistency"
    }

    fn propagate(
        &mut self,
        mut context: PropagationContext<'_>,
        assigned_variable: Option<VariableId>,
    ) -> PropagationStatus {
        csp_assert_simple!(self.queue.is_empty());
        match assigned_variable {
            Some(variable) => context
                .csp()
                .get_cons_with_var(variable)
                .iter()
                .for_each(|&constraint| self.queue.enqueue(constraint)),
            None => context
                .csp()
                .get_all_cons()
                .for_each(|constraint| self.queue.enqueue(constraint)),
        }

        let result = self.enforce(&mut context);
        // After a wipeout the remaining constraints are irrelevant
        self.queue.clear();
        result
    }
}

impl GeneralisedArcConsistencyPropagator {
    fn enforce(&mut self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        while let Some(constraint) = self.queue.pop() {
            while self.revise(context, constraint)? {}
        }

        Ok(())
    }

    /// Prunes every value in the scope of `constraint` without support. Returns whether anything
    /// was pruned.
    fn revise(
        &mut self,
        context: &mut PropagationContext<'_>,
        constraint: ConstraintId,
    ) -> Result<bool, Inconsistency> {
        let scope = context.csp().constraint(constraint).scope().to_vec();
        let mut pruned_any = false;

        for variable in scope {
            let csp = context.csp();
            let unsupported = csp
                .variable(variable)
                .cur_domain()
                .filter(|&value| !csp.has_support(constraint, variable, value))
                .collect::<Vec<_>>();
            if unsupported.is_empty() {
                continue;
            }

            trace!(
                "{constraint} removes {unsupported:?} from '{}'",
                csp.variable(variable).name()
            );
            for value in unsupported {
                context.prune(variable, value)?;
            }
            pruned_any = true;

            for &other in context.csp().get_cons_with_var(variable) {
                if other != constraint {
                    self.queue.enqueue(other);
                }
            }
        }

        Ok(pruned_any)
    }
}
