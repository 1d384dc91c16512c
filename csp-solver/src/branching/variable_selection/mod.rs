//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement.
//!
//! [`MinimumRemainingValues`] is the default; the others are alternatives which can be combined
//! with any [`ValueSelector`](crate::branching::value_selection::ValueSelector).
mod input_order;
mod max_degree;
mod minimum_remaining_values;
mod random;
mod variable_selector;

pub use input_order::*;
pub use max_degree::*;
pub use minimum_remaining_values::*;
pub use random::*;
pub use variable_selector::*;
