mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! We differentiate between 3 different kinds of results:
    //! - Looking for a single solution ([`SatisfactionResult`])
    //! - Looking for all solutions ([`AllSolutionsResult`])
    //! - Streaming solutions to a callback ([`SearchOutcome`])
    pub use crate::api::outputs::AllSolutionsResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::api::outputs::SearchOutcome;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These determine the propagator which is run after every assignment and the seed of the
    //! random source used by randomised branchers.
    pub use crate::engine::SolverOptions;
    pub use crate::propagators::PropagatorKind;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should stop
    //! searching even though it has not reached a conclusion.
    //!
    //! The [`TerminationCondition`] is polled by the [`Solver`] before every value it tries. The
    //! most common example is [`TimeBudget`], which terminates the [`Solver`] when the time budget
    //! is exceeded.
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::DecisionBudget;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
    #[cfg(doc)]
    use crate::Solver;
}
