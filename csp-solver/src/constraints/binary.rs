use super::from_predicate;
use crate::model::Constraint;
use crate::model::Csp;
use crate::model::VariableId;

/// Creates the constraint `a != b`.
pub fn not_equals(csp: &Csp, a: VariableId, b: VariableId) -> Constraint {
    binary(csp, a, b, "!=", |x, y| x != y)
}

/// Creates the constraint `a < b`.
pub fn less_than(csp: &Csp, a: VariableId, b: VariableId) -> Constraint {
    binary(csp, a, b, "<", |x, y| x < y)
}

/// Creates the constraint `a == b`.
pub fn equals(csp: &Csp, a: VariableId, b: VariableId) -> Constraint {
    binary(csp, a, b, "==", |x, y| x == y)
}

fn binary(
    csp: &Csp,
    a: VariableId,
    b: VariableId,
    symbol: &str,
    relation: impl Fn(i32, i32) -> bool,
) -> Constraint {
    let name = format!(
        "{}{symbol}{}",
        csp.variable(a).name(),
        csp.variable(b).name()
    );
    from_predicate(csp, name, vec![a, b], |values| relation(values[0], values[1]))
}
