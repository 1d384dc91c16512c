//! Functions which create extensional [`Constraint`]s.
//!
//! Every constraint in the engine is a table of satisfying tuples; the functions in this module
//! enumerate those tables from the original domains of the variables in the scope. The resulting
//! [`Constraint`] still has to be added to the [`Csp`] with [`Csp::add_constraint`].
//!
//! ```rust
//! # use csp_solver::constraints;
//! # use csp_solver::Csp;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
//! let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
//!
//! let x_lt_y = constraints::less_than(&csp, x, y);
//! assert_eq!(x_lt_y.num_satisfying_tuples(), 3);
//!
//! let _ = csp.add_constraint(x_lt_y).unwrap();
//! ```
mod all_different;
mod arithmetic;
mod binary;

pub use all_different::*;
pub use arithmetic::*;
pub use binary::*;

use itertools::Itertools;

use crate::model::Constraint;
use crate::model::Csp;
use crate::model::VariableId;

/// Creates a constraint from an explicit list of satisfying tuples.
pub fn table<Tuple: Into<Box<[i32]>>>(
    name: impl Into<String>,
    scope: Vec<VariableId>,
    tuples: impl IntoIterator<Item = Tuple>,
) -> Constraint {
    let mut constraint = Constraint::new(name, scope);
    constraint.add_satisfying_tuples(tuples);
    constraint
}

/// Creates a constraint whose satisfying tuples are all combinations of domain values for which
/// `predicate` holds.
///
/// This enumerates the full Cartesian product of the domains in the scope.
pub fn from_predicate(
    csp: &Csp,
    name: impl Into<String>,
    scope: Vec<VariableId>,
    predicate: impl Fn(&[i32]) -> bool,
) -> Constraint {
    let tuples = scope
        .iter()
        .map(|&variable| csp.variable(variable).domain().iter().copied())
        .multi_cartesian_product()
        .filter(|tuple| predicate(tuple.as_slice()))
        .collect::<Vec<_>>();

    table(name, scope, tuples)
}

/// Creates a unary constraint which only allows `variable` to take `value`.
pub fn fixed_value(csp: &Csp, variable: VariableId, value: i32) -> Constraint {
    table(
        format!("{}={value}", csp.variable(variable).name()),
        vec![variable],
        [[value]],
    )
}
