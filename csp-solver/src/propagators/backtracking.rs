use super::PropagationContext;
use super::Propagator;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::model::VariableId;

/// Plain backtracking: checks the constraints on the assigned variable whose scope has become
/// fully assigned, and never prunes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingPropagator;

impl Propagator for BacktrackingPropagator {
    fn name(&self) -> &str {
        "Backtracking"
    }

    fn propagate(
        &mut self,
        context: PropagationContext<'_>,
        assigned_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let Some(variable) = assigned_variable else {
            return Ok(());
        };

        let csp = context.csp();
        for &constraint in csp.get_cons_with_var(variable) {
            if let Some(tuple) = csp.assigned_tuple(constraint) {
                if !csp.constraint(constraint).check(&tuple) {
                    return Err(Inconsistency::ViolatedConstraint(constraint));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::model::Csp;
    use crate::propagators::propagate;

    #[test]
    fn presearch_propagation_does_nothing() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![1, 2]).unwrap();
        let _ = csp.add_constraint(constraints::fixed_value(&csp, x, 2)).unwrap();

        let record = propagate(&mut BacktrackingPropagator, &mut csp, None);

        assert!(record.is_consistent());
        assert!(record.prunings.is_empty());
    }

    #[test]
    fn violated_complete_constraint_is_reported() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![1, 2]).unwrap();
        let y = csp.new_variable("y", vec![1, 2]).unwrap();
        let c = csp.add_constraint(constraints::not_equals(&csp, x, y)).unwrap();

        csp.assign(x, 1);
        let record = propagate(&mut BacktrackingPropagator, &mut csp, Some(x));
        assert!(record.is_consistent());

        csp.assign(y, 1);
        let record = propagate(&mut BacktrackingPropagator, &mut csp, Some(y));
        assert_eq!(record.status, Err(Inconsistency::ViolatedConstraint(c)));
        assert!(record.prunings.is_empty());
    }
}
