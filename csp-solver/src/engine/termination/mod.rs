//! A [`TerminationCondition`] is polled by the search before every value it tries. When it
//! triggers, the search unwinds (restoring the CSP) and reports that it could not reach a
//! conclusion, e.g. [`SatisfactionResult::Unknown`](crate::results::SatisfactionResult::Unknown).
//!
//! The most common example is [`TimeBudget`]; conditions can be combined with [`Combinator`].

mod combinator;
mod decision_budget;
mod indefinite;
mod time_budget;

pub use combinator::*;
pub use decision_budget::*;
pub use indefinite::*;
pub use time_budget::*;

/// Determines when the solver should give up searching.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the search assigns a value to a variable.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(TerminationCondition::should_stop)
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made()
        }
    }
}
