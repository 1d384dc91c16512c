//! Contains structures and traits which define how the search chooses the next variable and the
//! order of its values.
//!
//! A [`Brancher`] is passed to every solve call of the [`Solver`](crate::Solver). The easiest way
//! to construct one is by combining a
//! [`VariableSelector`](variable_selection::VariableSelector) with a
//! [`ValueSelector`](value_selection::ValueSelector):
//!
//! ```rust
//! # use csp_solver::branching::value_selection::LeastConstrainingValue;
//! # use csp_solver::branching::variable_selection::MaxDegree;
//! # use csp_solver::branching::IndependentVariableValueBrancher;
//! # use csp_solver::constraints;
//! # use csp_solver::results::SatisfactionResult;
//! # use csp_solver::termination::Indefinite;
//! # use csp_solver::Csp;
//! # use csp_solver::Solver;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
//! let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
//! let x_lt_y = constraints::less_than(&csp, x, y);
//! let _ = csp.add_constraint(x_lt_y).unwrap();
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(MaxDegree::default(), LeastConstrainingValue);
//! let mut solver = Solver::default();
//! let result = solver.satisfy(&mut csp, &mut brancher, &mut Indefinite);
//! assert!(matches!(result, SatisfactionResult::Satisfiable(_)));
//! ```
//!
//! Every selector only ever considers unassigned variables, and every value selector returns the
//! full current domain, so the choice of [`Brancher`] affects the size of the search tree but
//! never the set of solutions.
mod brancher;
mod independent_variable_value_brancher;
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::*;
pub use independent_variable_value_brancher::*;
pub use selection_context::*;
