#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;

/// The interface for a tie-breaker which considers elements together with a score; depending on
/// the [`Direction`] it only keeps the elements with the "best" score.
///
/// Used by [`VariableSelector`]s which rank variables by a numeric score.
pub trait TieBreaker<Var, Value> {
    /// Consider the next element with corresponding score.
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the element which was selected. Resets the stored state so that the tie-breaker can be
    /// used for the next selection without returning an out-of-date element.
    fn select(&mut self) -> Option<Var>;

    /// Returns whether the tie-breaker looks for the minimum ([`Direction::Minimum`]) or maximum
    /// ([`Direction::Maximum`]) score.
    fn get_direction(&self) -> Direction;
}

/// Whether the comparison should find the element with the maximum ([`Direction::Maximum`]) or
/// the minimum ([`Direction::Minimum`]) score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
