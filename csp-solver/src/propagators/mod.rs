//! Propagators remove values from the current domains of unassigned variables which cannot be
//! part of a solution extending the current assignment.
//!
//! Three propagators are provided, in increasing order of strength:
//! [`BacktrackingPropagator`], [`ForwardCheckingPropagator`] and
//! [`GeneralisedArcConsistencyPropagator`]. They are usually selected through
//! [`PropagatorKind`] in the [`SolverOptions`](crate::options::SolverOptions), but can also be
//! run on their own with [`propagate`]:
//!
//! ```rust
//! # use csp_solver::constraints;
//! # use csp_solver::propagators::propagate;
//! # use csp_solver::propagators::ForwardCheckingPropagator;
//! # use csp_solver::Csp;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", vec![1, 2]).unwrap();
//! let y = csp.new_variable("y", vec![1, 2]).unwrap();
//! let x_ne_y = constraints::not_equals(&csp, x, y);
//! let _ = csp.add_constraint(x_ne_y).unwrap();
//!
//! csp.assign(x, 1);
//! let record = propagate(&mut ForwardCheckingPropagator, &mut csp, Some(x));
//! assert!(record.is_consistent());
//! assert_eq!(csp.variable(y).cur_domain().collect::<Vec<_>>(), vec![2]);
//!
//! // Undo the propagation before changing the assignment
//! record.undo(&mut csp);
//! csp.unassign(x);
//! assert_eq!(csp.variable(y).cur_domain_size(), 2);
//! ```
mod backtracking;
mod constraint_queue;
mod forward_checking;
mod generalised_arc_consistency;
mod propagator;

pub use backtracking::*;
pub(crate) use constraint_queue::*;
pub use forward_checking::*;
pub use generalised_arc_consistency::*;
pub use propagator::*;

pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::Inconsistency;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::Pruning;
use crate::basic_types::Trail;
use crate::model::Csp;
use crate::model::VariableId;

/// The outcome of a single propagation call together with every value it pruned, in the order in
/// which they were pruned.
///
/// The prunings are real: they have been applied to the [`Csp`] regardless of the status, and
/// [`PropagationRecord::undo`] has to be called before the assignment which triggered the
/// propagation is retracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationRecord {
    pub status: PropagationStatus,
    pub prunings: Vec<Pruning>,
}

impl PropagationRecord {
    /// Returns `true` if no inconsistency was detected.
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }

    /// Restores every pruned value, newest first.
    pub fn undo(self, csp: &mut Csp) {
        for pruning in self.prunings.into_iter().rev() {
            csp.restore_value(pruning.variable, pruning.value);
        }
    }
}

/// Runs `propagator` once on `csp`, after `assigned_variable` was assigned (or before search if
/// [`None`]), and returns what it did.
pub fn propagate<P: Propagator + ?Sized>(
    propagator: &mut P,
    csp: &mut Csp,
    assigned_variable: Option<VariableId>,
) -> PropagationRecord {
    let mut trail = Trail::default();
    trail.increase_decision_level();

    let status = propagator.propagate(PropagationContext::new(csp, &mut trail), assigned_variable);

    PropagationRecord {
        status,
        prunings: trail.values_on_decision_level(1).to_vec(),
    }
}
