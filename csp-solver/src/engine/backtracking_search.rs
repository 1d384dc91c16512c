use std::ops::ControlFlow;

use log::debug;
use log::trace;
use rand::rngs::SmallRng;

use super::termination::TerminationCondition;
use super::SolverStatistics;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Pruning;
use crate::basic_types::Solution;
use crate::basic_types::Trail;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::csp_assert_advanced;
use crate::csp_assert_moderate;
use crate::csp_assert_simple;
use crate::model::Csp;
use crate::model::VariableId;
use crate::propagators::PropagationContext;
use crate::propagators::Propagator;
use crate::results::SearchOutcome;

/// Why the search stopped before exhausting the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interruption {
    /// The solution callback asked to stop
    Stopped,
    /// The termination condition triggered
    Terminated,
}

/// Depth-first search over the assignments of a [`Csp`], running a [`Propagator`] after every
/// assignment.
///
/// Every propagation call opens a new decision level on the trail, so abandoning a branch restores
/// exactly the values which that call pruned. When [`BacktrackingSearch::run`] returns, the CSP is
/// in the same state as before it was called.
#[derive(Debug)]
pub(crate) struct BacktrackingSearch<'a> {
    csp: &'a mut Csp,
    propagator: &'a mut dyn Propagator,
    random: &'a mut SmallRng,
    statistics: &'a mut SolverStatistics,
    trail: Trail<Pruning>,
}

impl<'a> BacktrackingSearch<'a> {
    pub(crate) fn new(
        csp: &'a mut Csp,
        propagator: &'a mut dyn Propagator,
        random: &'a mut SmallRng,
        statistics: &'a mut SolverStatistics,
    ) -> Self {
        BacktrackingSearch {
            csp,
            propagator,
            random,
            statistics,
            trail: Trail::default(),
        }
    }

    /// Explores the search space, handing every solution to `on_solution` until it breaks, the
    /// `termination` condition triggers, or no branches are left.
    pub(crate) fn run<B, T, F>(
        mut self,
        brancher: &mut B,
        termination: &mut T,
        mut on_solution: F,
    ) -> SearchOutcome
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
        F: FnMut(Solution) -> ControlFlow<()>,
    {
        csp_assert_simple!(
            self.csp.get_all_unasgn_vars().count() == self.csp.num_variables(),
            "The search should start without assigned variables"
        );
        debug!(
            "Searching '{}' ({} variables, {} constraints) using the {} propagator",
            self.csp.name(),
            self.csp.num_variables(),
            self.csp.num_constraints(),
            self.propagator.name()
        );

        let outcome = match self.propagate(None) {
            Ok(()) => match self.search(brancher, termination, &mut on_solution) {
                ControlFlow::Continue(()) => SearchOutcome::Exhausted,
                ControlFlow::Break(Interruption::Stopped) => SearchOutcome::Stopped,
                ControlFlow::Break(Interruption::Terminated) => SearchOutcome::Terminated,
            },
            Err(inconsistency) => {
                debug!("Propagation before search detected {inconsistency:?}");
                SearchOutcome::Exhausted
            }
        };
        self.backtrack();

        csp_assert_simple!(self.trail.is_empty());
        debug!("Search finished: {outcome:?}");
        outcome
    }

    fn search<B, T, F>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        on_solution: &mut F,
    ) -> ControlFlow<Interruption>
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
        F: FnMut(Solution) -> ControlFlow<()>,
    {
        if self.csp.get_all_unasgn_vars().next().is_none() {
            return self.report_solution(on_solution);
        }

        let (variable, values) = self.branch(brancher);

        for value in values {
            if termination.should_stop() {
                return ControlFlow::Break(Interruption::Terminated);
            }
            termination.decision_has_been_made();
            self.statistics.num_decisions += 1;

            trace!("Assigning {} = {value}", self.csp.variable(variable).name());
            self.csp.assign(variable, value);

            let flow = match self.propagate(Some(variable)) {
                Ok(()) => self.search(brancher, termination, on_solution),
                Err(_) => ControlFlow::Continue(()),
            };

            self.backtrack();
            self.csp.unassign(variable);

            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }

    /// Asks the brancher for the next variable and the order of its values.
    fn branch<B: Brancher + ?Sized>(&mut self, brancher: &mut B) -> (VariableId, Vec<i32>) {
        let mut context = SelectionContext::new(self.csp, self.random);
        let Some(variable) = brancher.next_variable(&mut context) else {
            panic!(
                "The brancher did not select a variable while {} variables are unassigned",
                self.csp.get_all_unasgn_vars().count()
            );
        };
        csp_assert_simple!(
            !self.csp.variable(variable).is_assigned(),
            "The brancher selected '{}' which is already assigned",
            self.csp.variable(variable).name()
        );

        let values = brancher.order_values(&mut context, variable);
        csp_assert_advanced!({
            let mut ordered = values.clone();
            let mut expected = self.csp.variable(variable).cur_domain().collect::<Vec<_>>();
            ordered.sort_unstable();
            expected.sort_unstable();
            ordered == expected
        });

        (variable, values)
    }

    fn report_solution<F>(&mut self, on_solution: &mut F) -> ControlFlow<Interruption>
    where
        F: FnMut(Solution) -> ControlFlow<()>,
    {
        let solution = Solution::from_assignment(self.csp);
        csp_assert_moderate!(
            solution.satisfies(self.csp),
            "The search reached an assignment which violates a constraint"
        );

        self.statistics.num_solutions += 1;
        debug!("Found solution {}", self.statistics.num_solutions);

        match on_solution(solution) {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(()) => ControlFlow::Break(Interruption::Stopped),
        }
    }

    /// Runs the propagator on a new decision level of the trail.
    fn propagate(&mut self, assigned_variable: Option<VariableId>) -> PropagationStatus {
        self.trail.increase_decision_level();
        let status = self.propagator.propagate(
            PropagationContext::new(self.csp, &mut self.trail),
            assigned_variable,
        );

        let decision_level = self.trail.get_decision_level();
        self.statistics.num_prunings +=
            self.trail.values_on_decision_level(decision_level).len() as u64;
        if let Err(inconsistency) = status {
            self.statistics.num_conflicts += 1;
            trace!("Conflict: {inconsistency:?}");
        }

        status
    }

    /// Restores every value pruned on the current decision level and removes the level.
    fn backtrack(&mut self) {
        let decision_level = self.trail.get_decision_level();
        for pruning in self.trail.synchronise(decision_level - 1) {
            self.csp.restore_value(pruning.variable, pruning.value);
        }
    }
}
