use std::fmt::Debug;
use std::fmt::Display;

use super::BacktrackingPropagator;
use super::ForwardCheckingPropagator;
use super::GeneralisedArcConsistencyPropagator;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Pruning;
use crate::basic_types::Trail;
use crate::csp_assert_advanced;
use crate::csp_assert_simple;
use crate::model::Csp;
use crate::model::VariableId;

/// An inference strategy which is invoked after every trial assignment of the search.
///
/// A propagator may only remove values from the current domains of variables, and only through
/// [`PropagationContext::prune`], so that every removal can be undone when the search backtracks.
/// It reports an [`Inconsistency`](crate::basic_types::Inconsistency) when the current branch
/// cannot lead to a solution; the values pruned up to that point are restored by the caller.
pub trait Propagator: Debug {
    /// Returns the name of the propagator, used for logging.
    fn name(&self) -> &str;

    /// Performs propagation after `assigned_variable` has been assigned, or before the search
    /// starts if `assigned_variable` is [`None`].
    fn propagate(
        &mut self,
        context: PropagationContext<'_>,
        assigned_variable: Option<VariableId>,
    ) -> PropagationStatus;
}

/// Gives a [`Propagator`] read access to the [`Csp`] and records every value it prunes.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    csp: &'a mut Csp,
    trail: &'a mut Trail<Pruning>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(csp: &'a mut Csp, trail: &'a mut Trail<Pruning>) -> Self {
        PropagationContext { csp, trail }
    }

    pub fn csp(&self) -> &Csp {
        self.csp
    }

    /// Removes `value` from the current domain of `variable` and records the removal.
    ///
    /// Returns [`EmptyDomain`] if this removed the last value; the removal is recorded in that
    /// case as well.
    ///
    /// # Panics
    /// If `value` is not in the current domain of `variable`.
    pub fn prune(&mut self, variable: VariableId, value: i32) -> Result<(), EmptyDomain> {
        csp_assert_simple!(
            self.csp.variable(variable).in_cur_domain(value),
            "Pruning {value} from '{}' which is not in its current domain",
            self.csp.variable(variable).name()
        );
        let pruning = Pruning { variable, value };
        csp_assert_advanced!(!self.prunings().contains(&pruning));

        self.csp.prune_value(variable, value);
        self.trail.push(pruning);

        if self.csp.variable(variable).cur_domain_size() == 0 {
            Err(EmptyDomain(variable))
        } else {
            Ok(())
        }
    }

    /// The values pruned so far during the current propagation call.
    pub fn prunings(&self) -> &[Pruning] {
        self.trail
            .values_on_decision_level(self.trail.get_decision_level())
    }
}

/// The propagators available to the [`Solver`](crate::Solver).
///
/// All of them lead to the same set of solutions; stronger propagation visits fewer nodes at a
/// higher cost per node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagatorKind {
    /// Only rejects an assignment which violates a constraint whose scope is fully assigned.
    #[cfg_attr(feature = "clap", value(alias = "bt"))]
    Backtracking,
    /// Prunes the last unassigned variable of every constraint touched by the assignment.
    #[cfg_attr(feature = "clap", value(alias = "fc"))]
    ForwardChecking,
    /// Enforces generalised arc consistency on all constraints reachable from the assignment.
    #[default]
    #[cfg_attr(feature = "clap", value(alias = "gac"))]
    GeneralisedArcConsistency,
}

impl PropagatorKind {
    pub fn create(self) -> Box<dyn Propagator> {
        match self {
            PropagatorKind::Backtracking => Box::new(BacktrackingPropagator),
            PropagatorKind::ForwardChecking => Box::new(ForwardCheckingPropagator),
            PropagatorKind::GeneralisedArcConsistency => {
                Box::<GeneralisedArcConsistencyPropagator>::default()
            }
        }
    }
}

impl Display for PropagatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagatorKind::Backtracking => write!(f, "BT"),
            PropagatorKind::ForwardChecking => write!(f, "FC"),
            PropagatorKind::GeneralisedArcConsistency => write!(f, "GAC"),
        }
    }
}
