//! # CSP Solver
//! A solver for finite-domain constraint satisfaction problems (CSPs) whose constraints are given
//! extensionally, as tables of satisfying tuples.
//!
//! A problem is solved by depth-first backtracking search. After every assignment a
//! [propagator][crate::propagators] removes values which can no longer be part of a solution; the
//! solver supports plain backtracking, forward checking and generalised arc consistency. The
//! order in which variables and values are tried is determined by a [`branching::Brancher`], by
//! default the unassigned variable with the fewest remaining values is selected first.
//!
//! # Using the solver
//! The first step is **creating the variables** of a [`Csp`]:
//! ```rust
//! # use csp_solver::Csp;
//! let mut csp = Csp::new("example");
//!
//! let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
//! let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
//! let z = csp.new_variable("z", vec![1, 2, 3]).unwrap();
//! ```
//!
//! Then we **add constraints**, either as explicit tables or through the functions in
//! [`constraints`]:
//! ```rust
//! # use csp_solver::constraints;
//! # use csp_solver::Csp;
//! # let mut csp = Csp::new("example");
//! # let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
//! # let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
//! # let z = csp.new_variable("z", vec![1, 2, 3]).unwrap();
//! // x < y
//! let x_lt_y = constraints::less_than(&csp, x, y);
//! let _ = csp.add_constraint(x_lt_y).unwrap();
//!
//! // x + y + z = 6
//! let sum = constraints::from_predicate(&csp, "sum", vec![x, y, z], |values| {
//!     values.iter().sum::<i32>() == 6
//! });
//! let _ = csp.add_constraint(sum).unwrap();
//! ```
//!
//! For **finding a solution**, a [`termination::TerminationCondition`] and a
//! [`branching::Brancher`] are passed to [`Solver::satisfy`]:
//! ```rust
//! # use csp_solver::constraints;
//! # use csp_solver::results::SatisfactionResult;
//! # use csp_solver::termination::Indefinite;
//! # use csp_solver::Csp;
//! # use csp_solver::Solver;
//! # let mut csp = Csp::new("example");
//! # let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
//! # let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
//! # let z = csp.new_variable("z", vec![1, 2, 3]).unwrap();
//! # let x_lt_y = constraints::less_than(&csp, x, y);
//! # let _ = csp.add_constraint(x_lt_y).unwrap();
//! # let sum = constraints::from_predicate(&csp, "sum", vec![x, y, z], |values| {
//! #     values.iter().sum::<i32>() == 6
//! # });
//! # let _ = csp.add_constraint(sum).unwrap();
//! let mut solver = Solver::default();
//! let mut brancher = solver.default_brancher();
//!
//! match solver.satisfy(&mut csp, &mut brancher, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert!(solution.get_value(x) < solution.get_value(y));
//!         assert!(solution.satisfies(&csp));
//!     }
//!     _ => panic!("This problem should have a solution"),
//! }
//!
//! // Solving does not change the problem
//! assert_eq!(csp.variable(x).cur_domain_size(), 3);
//! ```
//!
//! **All solutions** can be obtained with [`Solver::satisfy_all`], or streamed one at a time with
//! [`Solver::for_each_solution`].
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the solver.
//! - `clap`: Derive `clap::ValueEnum` for [`options::PropagatorKind`].
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod model;

#[doc(hidden)]
pub mod asserts;

pub mod branching;
pub mod constraints;
pub mod propagators;
pub mod puzzles;
pub mod statistics;

// Private module with public re-exports, so that the API is available directly from the crate
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::ModelError;
pub use crate::basic_types::Random;
pub use crate::branching::DefaultBrancher;
pub use crate::engine::SolverStatistics;
pub use crate::model::Constraint;
pub use crate::model::ConstraintId;
pub use crate::model::Csp;
pub use crate::model::Variable;
pub use crate::model::VariableId;
