use crate::containers::KeyedVec;
use crate::csp_assert_simple;
use crate::model::Csp;
use crate::model::VariableId;

/// A complete assignment of a value to every variable of a [`Csp`].
///
/// A [`Solution`] is detached from the [`Csp`] it was taken from; the search driver restores the
/// problem to its original state after it finishes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    /// Records the current assignment of `csp`. Every variable has to be assigned.
    pub(crate) fn from_assignment(csp: &Csp) -> Self {
        let values = csp
            .get_all_vars()
            .map(|variable| {
                let value = csp.variable(variable).assigned_value();
                csp_assert_simple!(
                    value.is_some(),
                    "A solution can only be taken from a complete assignment"
                );
                value.unwrap_or_default()
            })
            .collect();

        Solution { values }
    }

    /// Returns the number of variables in the solution.
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Returns the value assigned to `variable`.
    ///
    /// # Panics
    /// If `variable` does not belong to the [`Csp`] this solution was found for.
    pub fn get_value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i32)> + '_ {
        self.values
            .key_values()
            .map(|(variable, value)| (variable, *value))
    }

    /// Returns whether the values in this solution satisfy every constraint of `csp`.
    pub fn satisfies(&self, csp: &Csp) -> bool {
        csp.get_all_cons().all(|constraint_id| {
            let constraint = csp.constraint(constraint_id);
            let tuple = constraint
                .scope()
                .iter()
                .map(|&variable| self.get_value(variable))
                .collect::<Vec<_>>();
            constraint.check(&tuple)
        })
    }
}
