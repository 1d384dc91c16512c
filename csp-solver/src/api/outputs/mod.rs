use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found.
    Satisfiable(Solution),
    /// There is no solution to the CSP.
    Unsatisfiable,
    /// It is not known whether a solution exists because the [`TerminationCondition`] triggered.
    Unknown,
}

/// The result of a call to [`Solver::satisfy_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllSolutionsResult {
    /// The solutions in the order in which they were found.
    pub solutions: Vec<Solution>,
    /// Whether the whole search space was explored; `false` if the [`TerminationCondition`]
    /// triggered, in which case more solutions may exist.
    pub complete: bool,
}

impl AllSolutionsResult {
    /// Returns `true` if the search was complete and found no solution.
    pub fn is_unsatisfiable(&self) -> bool {
        self.complete && self.solutions.is_empty()
    }
}

/// How a call to [`Solver::for_each_solution`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every solution has been reported.
    Exhausted,
    /// The callback asked the search to stop.
    Stopped,
    /// The [`TerminationCondition`] triggered.
    Terminated,
}
