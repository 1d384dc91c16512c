use crate::create_statistics_struct;
#[cfg(doc)]
use crate::Solver;

create_statistics_struct!(
    /// Statistics of the most recent solve call of the [`Solver`].
    SolverStatistics {
        /// The number of values the search has assigned
        num_decisions: u64,
        /// The number of propagation calls which detected an inconsistency
        num_conflicts: u64,
        /// The number of values removed from current domains by propagation
        num_prunings: u64,
        /// The number of solutions which were found
        num_solutions: u64,
        /// The time spent in the solver in milliseconds
        time_spent_in_solver: u64,
});
