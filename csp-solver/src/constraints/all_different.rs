use super::table;
use crate::model::Constraint;
use crate::model::Csp;
use crate::model::VariableId;

/// Creates an n-ary constraint requiring all variables in `scope` to take pairwise different
/// values.
///
/// Tuples are generated depth-first, skipping values already used by an earlier position, so the
/// table only grows with the number of distinct assignments rather than the full product.
pub fn all_different(csp: &Csp, name: impl Into<String>, scope: Vec<VariableId>) -> Constraint {
    let domains = scope
        .iter()
        .map(|&variable| csp.variable(variable).domain())
        .collect::<Vec<_>>();

    let mut tuples = Vec::new();
    distinct_tuples(&domains, &mut Vec::with_capacity(domains.len()), &mut tuples);

    table(name, scope, tuples)
}

fn distinct_tuples(domains: &[&[i32]], prefix: &mut Vec<i32>, tuples: &mut Vec<Box<[i32]>>) {
    if prefix.len() == domains.len() {
        tuples.push(prefix.clone().into_boxed_slice());
        return;
    }

    for &value in domains[prefix.len()] {
        if prefix.contains(&value) {
            continue;
        }
        prefix.push(value);
        distinct_tuples(domains, prefix, tuples);
        let _ = prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_different_over_equal_domains_are_permutations() {
        let mut csp = Csp::new("test");
        let scope = (0..3)
            .map(|i| csp.new_variable(format!("x{i}"), vec![1, 2, 3]).unwrap())
            .collect::<Vec<_>>();

        let constraint = all_different(&csp, "row", scope);

        assert_eq!(constraint.num_satisfying_tuples(), 6);
        assert!(constraint.check(&[3, 1, 2]));
        assert!(!constraint.check(&[1, 1, 2]));
    }

    #[test]
    fn all_different_with_too_few_values_has_no_tuples() {
        let mut csp = Csp::new("test");
        let scope = (0..3)
            .map(|i| csp.new_variable(format!("x{i}"), vec![1, 2]).unwrap())
            .collect::<Vec<_>>();

        let constraint = all_different(&csp, "pigeons", scope);

        assert_eq!(constraint.num_satisfying_tuples(), 0);
    }
}
