use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::model::Csp;
use crate::model::VariableId;

/// A [`ValueSelector`] which tries first the values that rule out the fewest values of the
/// unassigned variables sharing a constraint with the selected variable.
///
/// A value `b` of a neighbour `y` is ruled out by `x = a` if some constraint on both `x` and `y`
/// has no support for `y = b` once `x` is fixed to `a`. Values which rule out equally many are
/// kept in domain order.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    fn num_ruled_out(csp: &Csp, variable: VariableId, value: i32) -> usize {
        csp.get_cons_with_var(variable)
            .iter()
            .map(|&constraint_id| {
                let constraint = csp.constraint(constraint_id);
                constraint
                    .scope()
                    .iter()
                    .filter(|&&other| other != variable && !csp.variable(other).is_assigned())
                    .map(|&other| {
                        csp.variable(other)
                            .cur_domain()
                            .filter(|&other_value| {
                                !constraint.has_support_given(
                                    csp,
                                    other,
                                    other_value,
                                    (variable, value),
                                )
                            })
                            .count()
                    })
                    .sum::<usize>()
            })
            .sum()
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId) -> Vec<i32> {
        let csp = context.csp();
        let mut values = csp
            .variable(variable)
            .cur_domain()
            .map(|value| (LeastConstrainingValue::num_ruled_out(csp, variable, value), value))
            .collect::<Vec<_>>();
        // Stable, so equally constraining values stay in domain order
        values.sort_by_key(|&(num_ruled_out, _)| num_ruled_out);
        values.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::constraints;

    #[test]
    fn least_constraining_values_come_first() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![1, 2, 3]).unwrap();
        let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
        let x_lt_y = constraints::less_than(&csp, x, y);
        let _ = csp.add_constraint(x_lt_y).unwrap();
        let mut random = SmallRng::seed_from_u64(42);

        // x = 1 rules out {1}, x = 2 rules out {1, 2}, x = 3 rules out everything
        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(
            LeastConstrainingValue.order_values(&mut context, x),
            vec![1, 2, 3]
        );
        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(
            LeastConstrainingValue.order_values(&mut context, y),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn ties_keep_domain_order() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![2, 1, 3]).unwrap();
        let y = csp.new_variable("y", vec![1, 2, 3]).unwrap();
        let x_ne_y = constraints::not_equals(&csp, x, y);
        let _ = csp.add_constraint(x_ne_y).unwrap();
        let mut random = SmallRng::seed_from_u64(42);

        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(
            LeastConstrainingValue.order_values(&mut context, x),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn assigned_neighbours_are_ignored() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![1, 2]).unwrap();
        let y = csp.new_variable("y", vec![1, 2]).unwrap();
        let x_lt_y = constraints::less_than(&csp, x, y);
        let _ = csp.add_constraint(x_lt_y).unwrap();
        csp.assign(y, 1);
        let mut random = SmallRng::seed_from_u64(42);

        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(
            LeastConstrainingValue.order_values(&mut context, x),
            vec![1, 2]
        );
    }
}
