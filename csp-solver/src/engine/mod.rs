mod backtracking_search;
mod solver_options;
mod solver_statistics;
pub(crate) mod termination;

pub(crate) use backtracking_search::*;
pub use solver_options::*;
pub use solver_statistics::*;
