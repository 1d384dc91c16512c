use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A [`ValueSelector`] which tries the values of the current domain in the order of the original
/// domain.
#[derive(Debug, Default, Clone, Copy)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId) -> Vec<i32> {
        context.csp().variable(variable).cur_domain().collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::Csp;

    #[test]
    fn values_keep_domain_order() {
        let mut csp = Csp::new("test");
        let x = csp.new_variable("x", vec![3, 1, 4, 2]).unwrap();
        csp.prune_value(x, 4);
        let mut random = SmallRng::seed_from_u64(42);

        let mut context = SelectionContext::new(&csp, &mut random);
        assert_eq!(InDomainOrder.order_values(&mut context, x), vec![3, 1, 2]);
    }
}
