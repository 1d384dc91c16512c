//! Provides the [`ValueSelector`] trait which is required for value selectors to implement.
mod in_domain_order;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::*;
pub use least_constraining_value::*;
pub use value_selector::*;
