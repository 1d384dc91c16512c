//! The data model of a constraint satisfaction problem: [`Variable`]s with finite domains,
//! extensional [`Constraint`]s over them, and the [`Csp`] which owns both.
mod constraint;
mod csp;
mod variable;

pub use constraint::*;
pub use csp::*;
pub use variable::*;
