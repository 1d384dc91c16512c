use std::ops::ControlFlow;
use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::Solution;
use crate::branching::value_selection::InDomainOrder;
use crate::branching::variable_selection::MinimumRemainingValues;
use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::branching::IndependentVariableValueBrancher;
use crate::engine::BacktrackingSearch;
use crate::engine::SolverStatistics;
use crate::model::Csp;
use crate::options::SolverOptions;
use crate::propagators::Propagator;
use crate::results::AllSolutionsResult;
use crate::results::SatisfactionResult;
use crate::results::SearchOutcome;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;

/// Solves [`Csp`]s by backtracking search combined with the propagator chosen in the
/// [`SolverOptions`].
///
/// The solver does not own the model: every solve call borrows the [`Csp`] mutably while
/// searching and leaves it exactly as it was once the call returns, so the same model can be
/// solved repeatedly (for example with different options).
///
/// ```rust
/// # use csp_solver::constraints;
/// # use csp_solver::options::PropagatorKind;
/// # use csp_solver::options::SolverOptions;
/// # use csp_solver::termination::Indefinite;
/// # use csp_solver::Csp;
/// # use csp_solver::Solver;
/// let mut csp = Csp::new("pair");
/// let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
/// let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
/// let x_ne_y = constraints::not_equals(&csp, x, y);
/// let _ = csp.add_constraint(x_ne_y).unwrap();
///
/// let mut solver = Solver::with_options(SolverOptions {
///     propagator: PropagatorKind::ForwardChecking,
///     ..Default::default()
/// });
/// let mut brancher = solver.default_brancher();
/// let result = solver.satisfy_all(&mut csp, &mut brancher, &mut Indefinite);
///
/// assert!(result.complete);
/// assert_eq!(result.solutions.len(), 6);
/// ```
#[derive(Debug)]
pub struct Solver {
    options: SolverOptions,
    propagator: Box<dyn Propagator>,
    random: SmallRng,
    statistics: SolverStatistics,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            options,
            propagator: options.propagator.create(),
            random: SmallRng::seed_from_u64(options.random_seed),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// The statistics of the most recent solve call.
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Logs the statistics of the most recent solve call (see
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging)).
    pub fn log_statistics(&self) {
        log_statistic("propagator", self.options.propagator);
        self.statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }

    /// Creates an instance of the [`DefaultBrancher`]: the unassigned variable with the fewest
    /// remaining values is selected first and its values are tried in domain order.
    pub fn default_brancher(&self) -> DefaultBrancher {
        IndependentVariableValueBrancher::new(MinimumRemainingValues::new(), InDomainOrder)
    }
}

/// Functions for solving
impl Solver {
    /// Searches for a single solution of `csp`.
    ///
    /// The search stops at the first solution, when the whole search space has been explored, or
    /// when `termination` triggers, whichever comes first.
    pub fn satisfy<B, T>(
        &mut self,
        csp: &mut Csp,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        let mut found = None;
        let outcome = self.search(csp, brancher, termination, |solution| {
            found = Some(solution);
            ControlFlow::Break(())
        });

        match (found, outcome) {
            (Some(solution), _) => SatisfactionResult::Satisfiable(solution),
            (None, SearchOutcome::Exhausted) => SatisfactionResult::Unsatisfiable,
            (None, _) => SatisfactionResult::Unknown,
        }
    }

    /// Searches for every solution of `csp`.
    pub fn satisfy_all<B, T>(
        &mut self,
        csp: &mut Csp,
        brancher: &mut B,
        termination: &mut T,
    ) -> AllSolutionsResult
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        let mut solutions = Vec::new();
        let outcome = self.search(csp, brancher, termination, |solution| {
            solutions.push(solution);
            ControlFlow::Continue(())
        });

        AllSolutionsResult {
            solutions,
            complete: outcome == SearchOutcome::Exhausted,
        }
    }

    /// Calls `on_solution` with every solution of `csp` in the order in which the search finds
    /// them, until it returns [`ControlFlow::Break`].
    ///
    /// The [`Csp`] is still in its search state while `on_solution` runs, which is why only the
    /// solution is passed to it.
    pub fn for_each_solution<B, T>(
        &mut self,
        csp: &mut Csp,
        brancher: &mut B,
        termination: &mut T,
        mut on_solution: impl FnMut(&Solution) -> ControlFlow<()>,
    ) -> SearchOutcome
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        self.search(csp, brancher, termination, |solution| on_solution(&solution))
    }

    fn search<B, T>(
        &mut self,
        csp: &mut Csp,
        brancher: &mut B,
        termination: &mut T,
        on_solution: impl FnMut(Solution) -> ControlFlow<()>,
    ) -> SearchOutcome
    where
        B: Brancher + ?Sized,
        T: TerminationCondition + ?Sized,
    {
        self.statistics = SolverStatistics::default();
        let start = Instant::now();

        let outcome = BacktrackingSearch::new(
            csp,
            self.propagator.as_mut(),
            &mut self.random,
            &mut self.statistics,
        )
        .run(brancher, termination, on_solution);

        self.statistics.time_spent_in_solver = start.elapsed().as_millis() as u64;
        debug!(
            "Solved '{}' in {} ms: {} decisions, {} conflicts, {} solutions",
            csp.name(),
            self.statistics.time_spent_in_solver,
            self.statistics.num_decisions,
            self.statistics.num_conflicts,
            self.statistics.num_solutions
        );

        outcome
    }
}
