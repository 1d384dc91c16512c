//! Tie-breakers decide between variables which are equally good according to a
//! [`VariableSelector`](crate::branching::variable_selection::VariableSelector).
mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::*;
pub use tie_breaker::*;
