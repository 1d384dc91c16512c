use std::fmt::Display;

use crate::basic_types::ModelError;
use crate::containers::HashMap;
use crate::containers::StorageKey;
use crate::csp_assert_simple;

/// A handle to a [`Variable`] of a [`Csp`](crate::Csp).
///
/// Handles are handed out in creation order; this order is the enumeration order used to break
/// ties during variable selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId {
    id: u32,
}

impl VariableId {
    pub(crate) fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// A named variable with a finite domain.
///
/// Next to the original `domain`, which never changes, the variable keeps track of its current
/// domain: the values which have not been pruned in the current branch of the search. Pruned
/// values are restored when the search backtracks past the propagation call which removed them.
///
/// While a variable is assigned, its current domain is the singleton containing the assigned value
/// (unless that value has itself been pruned, in which case the current domain is empty). The
/// membership of the other values is untouched, so unassigning brings them back.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: Vec<i32>,
    /// The position of each value in `domain`
    positions: HashMap<i32, usize>,
    /// Whether the value at the same position in `domain` is in the current domain
    in_current_domain: Vec<bool>,
    current_size: usize,
    assigned_value: Option<i32>,
}

impl Variable {
    pub(crate) fn new(name: String, domain: Vec<i32>) -> Result<Self, ModelError> {
        let mut positions = HashMap::default();
        for (position, &value) in domain.iter().enumerate() {
            if positions.insert(value, position).is_some() {
                return Err(ModelError::DuplicateDomainValue {
                    variable: name,
                    value,
                });
            }
        }

        Ok(Variable {
            name,
            in_current_domain: vec![true; domain.len()],
            current_size: domain.len(),
            domain,
            positions,
            assigned_value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original domain, in the order in which it was provided.
    pub fn domain(&self) -> &[i32] {
        &self.domain
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    /// Returns whether `value` is part of the original domain.
    pub fn in_domain(&self, value: i32) -> bool {
        self.positions.contains_key(&value)
    }

    /// The values in the current domain, in original domain order.
    pub fn cur_domain(&self) -> impl Iterator<Item = i32> + '_ {
        let assigned_value = self.assigned_value;
        self.domain
            .iter()
            .zip(self.in_current_domain.iter())
            .filter(move |&(&value, &present)| {
                present
                    && match assigned_value {
                        Some(assigned) => assigned == value,
                        None => true,
                    }
            })
            .map(|(&value, _)| value)
    }

    /// The number of values in the current domain; zero signals a domain wipeout.
    pub fn cur_domain_size(&self) -> usize {
        match self.assigned_value {
            Some(value) => usize::from(self.is_present(value)),
            None => self.current_size,
        }
    }

    pub fn in_cur_domain(&self, value: i32) -> bool {
        match self.assigned_value {
            Some(assigned) => assigned == value && self.is_present(value),
            None => self.is_present(value),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_value.is_some()
    }

    pub fn assigned_value(&self) -> Option<i32> {
        self.assigned_value
    }

    /// Whether `value` has not been pruned, disregarding the assignment.
    fn is_present(&self, value: i32) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.in_current_domain[position])
    }

    pub(crate) fn assign(&mut self, value: i32) {
        csp_assert_simple!(
            self.assigned_value.is_none(),
            "Variable '{}' is already assigned",
            self.name
        );
        csp_assert_simple!(
            self.is_present(value),
            "Variable '{}' cannot be assigned {value} which is not in its current domain",
            self.name
        );

        self.assigned_value = Some(value);
    }

    pub(crate) fn unassign(&mut self) {
        csp_assert_simple!(
            self.assigned_value.is_some(),
            "Variable '{}' is not assigned",
            self.name
        );

        self.assigned_value = None;
    }

    pub(crate) fn prune_value(&mut self, value: i32) {
        let position = self.position_of(value);
        csp_assert_simple!(
            self.in_current_domain[position],
            "Value {value} of '{}' has already been pruned",
            self.name
        );

        self.in_current_domain[position] = false;
        self.current_size -= 1;
    }

    pub(crate) fn restore_value(&mut self, value: i32) {
        let position = self.position_of(value);
        csp_assert_simple!(
            !self.in_current_domain[position],
            "Value {value} of '{}' is in the current domain and cannot be restored",
            self.name
        );

        self.in_current_domain[position] = true;
        self.current_size += 1;
    }

    fn position_of(&self, value: i32) -> usize {
        match self.positions.get(&value) {
            Some(&position) => position,
            None => panic!("Value {value} is not in the domain of '{}'", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(domain: &[i32]) -> Variable {
        Variable::new("v".to_owned(), domain.to_vec()).expect("valid domain")
    }

    #[test]
    fn duplicate_domain_values_are_rejected() {
        let result = Variable::new("v".to_owned(), vec![1, 2, 1]);

        assert_eq!(
            result.unwrap_err(),
            ModelError::DuplicateDomainValue {
                variable: "v".to_owned(),
                value: 1
            }
        );
    }

    #[test]
    fn pruning_and_restoring_keeps_domain_order() {
        let mut v = variable(&[3, 1, 2]);

        v.prune_value(1);
        assert_eq!(v.cur_domain().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(v.cur_domain_size(), 2);

        v.restore_value(1);
        assert_eq!(v.cur_domain().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(v.cur_domain_size(), 3);
    }

    #[test]
    fn assigned_variable_has_singleton_current_domain() {
        let mut v = variable(&[1, 2, 3]);
        v.prune_value(3);

        v.assign(2);
        assert_eq!(v.cur_domain().collect::<Vec<_>>(), vec![2]);
        assert_eq!(v.cur_domain_size(), 1);
        assert!(!v.in_cur_domain(1));

        v.unassign();
        assert_eq!(v.cur_domain().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn pruning_the_assigned_value_wipes_out_the_domain() {
        let mut v = variable(&[1, 2]);
        v.assign(1);

        v.prune_value(1);
        assert_eq!(v.cur_domain_size(), 0);
        assert_eq!(v.cur_domain().count(), 0);

        v.restore_value(1);
        v.unassign();
        assert_eq!(v.cur_domain_size(), 2);
    }

    #[test]
    #[should_panic]
    fn assigning_twice_panics() {
        let mut v = variable(&[1, 2]);
        v.assign(1);
        v.assign(2);
    }

    #[test]
    #[should_panic]
    fn pruning_an_absent_value_panics() {
        let mut v = variable(&[1, 2]);
        v.prune_value(2);
        v.prune_value(2);
    }

    #[test]
    #[should_panic]
    fn assigning_a_pruned_value_panics() {
        let mut v = variable(&[1, 2]);
        v.prune_value(2);
        v.assign(2);
    }
}
