use std::fmt::Display;

use itertools::Itertools;

use super::from_predicate;
use crate::model::Constraint;
use crate::model::Csp;
use crate::model::VariableId;

/// The operation of an arithmetic cage, such as the cages of a FunPuzz (KenKen) grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperation {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl ArithmeticOperation {
    /// Returns whether `values` combine to `target` under this operation.
    ///
    /// Addition and multiplication are order independent. Subtraction and division hold if some
    /// ordering `v1, v2, ..., vn` of the values gives `v1 - v2 - ... - vn == target` (resp.
    /// `v1 / v2 / ... / vn == target` where every division is exact).
    pub fn evaluate(self, values: &[i32], target: i32) -> bool {
        let target = i64::from(target);
        match self {
            ArithmeticOperation::Add => values.iter().map(|&v| i64::from(v)).sum::<i64>() == target,
            ArithmeticOperation::Multiply if values.contains(&0) => target == 0,
            // Without zero factors an overflowing product is beyond any i32 target
            ArithmeticOperation::Multiply => values
                .iter()
                .try_fold(1_i64, |acc, &v| acc.checked_mul(i64::from(v)))
                .is_some_and(|product| product == target),
            ArithmeticOperation::Subtract => any_ordering(values, target, i64::checked_sub),
            ArithmeticOperation::Divide => any_ordering(values, target, |acc, v| {
                if v != 0 && acc.checked_rem(v) == Some(0) {
                    acc.checked_div(v)
                } else {
                    None
                }
            }),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ArithmeticOperation::Add => '+',
            ArithmeticOperation::Subtract => '-',
            ArithmeticOperation::Divide => '/',
            ArithmeticOperation::Multiply => '*',
        }
    }
}

impl Display for ArithmeticOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn any_ordering(values: &[i32], target: i64, step: impl Fn(i64, i64) -> Option<i64>) -> bool {
    values.iter().permutations(values.len()).any(|ordering| {
        let Some((&first, rest)) = ordering.split_first() else {
            return false;
        };
        rest.iter()
            .try_fold(i64::from(*first), |acc, &&v| step(acc, i64::from(v)))
            .is_some_and(|result| result == target)
    })
}

/// Creates a constraint requiring the values of `scope` to combine to `target` under
/// `operation`.
pub fn arithmetic(
    csp: &Csp,
    scope: Vec<VariableId>,
    operation: ArithmeticOperation,
    target: i32,
) -> Constraint {
    let name = format!(
        "{}{operation}{target}",
        scope
            .iter()
            .map(|&variable| csp.variable(variable).name())
            .join(",")
    );
    from_predicate(csp, name, scope, |values| operation.evaluate(values, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_multiplication() {
        assert!(ArithmeticOperation::Add.evaluate(&[1, 2, 3], 6));
        assert!(!ArithmeticOperation::Add.evaluate(&[1, 2, 3], 7));
        assert!(ArithmeticOperation::Multiply.evaluate(&[2, 3, 4], 24));
    }

    #[test]
    fn subtraction_tries_every_ordering() {
        assert!(ArithmeticOperation::Subtract.evaluate(&[1, 4], 3));
        assert!(ArithmeticOperation::Subtract.evaluate(&[4, 1], 3));
        assert!(ArithmeticOperation::Subtract.evaluate(&[1, 2, 6], 3));
        assert!(!ArithmeticOperation::Subtract.evaluate(&[2, 2], 1));
    }

    #[test]
    fn division_must_be_exact() {
        assert!(ArithmeticOperation::Divide.evaluate(&[2, 6], 3));
        assert!(!ArithmeticOperation::Divide.evaluate(&[4, 6], 1));
        assert!(ArithmeticOperation::Divide.evaluate(&[8, 2, 2], 2));
    }

    #[test]
    fn overflowing_intermediate_results_do_not_reach_the_target() {
        assert!(!ArithmeticOperation::Multiply.evaluate(&[i32::MAX; 3], 6));
        assert!(ArithmeticOperation::Multiply.evaluate(&[i32::MAX, i32::MAX, i32::MAX, 0], 0));
        assert!(!ArithmeticOperation::Subtract.evaluate(&[i32::MIN, i32::MAX, i32::MAX], 0));
        assert!(!ArithmeticOperation::Divide.evaluate(&[i32::MIN, -1], i32::MIN));
    }

    #[test]
    fn cage_over_large_domains_is_built() {
        let mut csp = Csp::new("test");
        let scope = ["a", "b", "c"]
            .map(|name| csp.new_variable(name, vec![1, 3_000_000]).unwrap())
            .to_vec();

        let constraint = arithmetic(&csp, scope, ArithmeticOperation::Multiply, 3_000_000);

        assert_eq!(constraint.num_satisfying_tuples(), 3);
        assert!(constraint.check(&[1, 3_000_000, 1]));
    }

    #[test]
    fn cage_constraint_lists_the_satisfying_combinations() {
        let mut csp = Csp::new("test");
        let a = csp.new_variable("a", vec![1, 2, 3]).unwrap();
        let b = csp.new_variable("b", vec![1, 2, 3]).unwrap();

        let constraint = arithmetic(&csp, vec![a, b], ArithmeticOperation::Subtract, 2);

        assert_eq!(constraint.name(), "a,b-2");
        assert_eq!(
            constraint.satisfying_tuples().collect::<Vec<_>>(),
            vec![&[1, 3][..], &[3, 1][..]]
        );
    }
}
