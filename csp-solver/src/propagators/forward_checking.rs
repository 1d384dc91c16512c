use super::PropagationContext;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::model::ConstraintId;
use crate::model::VariableId;

/// Forward checking: for every constraint on the assigned variable with exactly one unassigned
/// variable left, removes the values of that variable which are incompatible with the assigned
/// ones.
///
/// Before the search starts, every constraint with a single unassigned variable is checked, which
/// removes the values forbidden by unary constraints.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardCheckingPropagator;

impl Propagator for ForwardCheckingPropagator {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        mut context: PropagationContext<'_>,
        assigned_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let constraints: Vec<ConstraintId> = match assigned_variable {
            Some(variable) => context.csp().get_cons_with_var(variable).to_vec(),
            None => context.csp().get_all_cons().collect(),
        };

        for constraint in constraints {
            let csp = context.csp();
            let mut unassigned = csp
                .constraint(constraint)
                .scope()
                .iter()
                .filter(|&&variable| !csp.variable(variable).is_assigned());
            let (Some(&variable), None) = (unassigned.next(), unassigned.next()) else {
                continue;
            };

            let unsupported = csp
                .variable(variable)
                .cur_domain()
                .filter(|&value| !csp.has_support(constraint, variable, value))
                .collect::<Vec<_>>();

            for value in unsupported {
                context.prune(variable, value)?;
            }
        }

        Ok(())
    }
}
