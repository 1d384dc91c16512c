use std::cell::Cell;
use std::fmt::Display;

use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::StorageKey;
use crate::csp_assert_simple;
use crate::model::Csp;
use crate::model::VariableId;

/// A handle to a [`Constraint`] which has been added to a [`Csp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId {
    id: u32,
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId { id: index as u32 }
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// A relation over an ordered scope of variables, given extensionally by its satisfying tuples.
///
/// The value at position `i` of a tuple is the value of the `i`-th variable of the scope. Once the
/// constraint is added to a [`Csp`] it is never modified. Every `(scope position, value)` pair is
/// indexed to the tuples containing it as the tuples are added, which is what makes
/// [`Constraint::has_support`] cheap.
#[derive(Debug, Clone)]
pub struct Constraint {
    name: String,
    scope: Vec<VariableId>,
    tuples: Vec<Box<[i32]>>,
    tuple_set: HashSet<Box<[i32]>>,
    /// For every scope position, the tuples which assign a given value to that position
    supports: Vec<HashMap<i32, SupportList>>,
}

#[derive(Debug, Clone, Default)]
struct SupportList {
    /// Indices into [`Constraint::tuples`]
    tuples: Vec<usize>,
    /// The position in `tuples` of the last tuple which was found to be a support; it is checked
    /// first on the next query.
    residue: Cell<usize>,
}

impl Constraint {
    /// Creates a constraint without satisfying tuples; without any tuples added through
    /// [`Constraint::add_satisfying_tuples`] it can never be satisfied.
    pub fn new(name: impl Into<String>, scope: Vec<VariableId>) -> Self {
        Constraint {
            name: name.into(),
            supports: vec![HashMap::default(); scope.len()],
            scope,
            tuples: Vec::new(),
            tuple_set: HashSet::default(),
        }
    }

    /// Adds the provided tuples to the satisfying tuples; tuples which are already present are
    /// ignored.
    pub fn add_satisfying_tuples<Tuple: Into<Box<[i32]>>>(
        &mut self,
        tuples: impl IntoIterator<Item = Tuple>,
    ) {
        for tuple in tuples {
            let tuple = tuple.into();
            if !self.tuple_set.insert(tuple.clone()) {
                continue;
            }

            let tuple_index = self.tuples.len();
            // Positions beyond the scope are rejected when the constraint is added to a `Csp`
            for (supports, &value) in self.supports.iter_mut().zip(tuple.iter()) {
                supports.entry(value).or_default().tuples.push(tuple_index);
            }
            self.tuples.push(tuple);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn satisfying_tuples(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.tuples.iter().map(|tuple| tuple.as_ref())
    }

    pub fn num_satisfying_tuples(&self) -> usize {
        self.tuples.len()
    }

    /// Returns the position of `variable` in the scope, if it is part of it.
    pub fn position_of(&self, variable: VariableId) -> Option<usize> {
        self.scope.iter().position(|&other| other == variable)
    }

    /// Returns whether `values` (one per scope position, in scope order) is a satisfying tuple.
    pub fn check(&self, values: &[i32]) -> bool {
        csp_assert_simple!(
            values.len() == self.arity(),
            "Constraint '{}' of arity {} checked against {} values",
            self.name,
            self.arity(),
            values.len()
        );
        self.tuple_set.contains(values)
    }

    /// Returns whether some satisfying tuple assigns `value` to `variable` while every other
    /// scope variable takes a value from its current domain in `csp`.
    ///
    /// # Panics
    /// If `variable` is not part of the scope.
    pub fn has_support(&self, csp: &Csp, variable: VariableId, value: i32) -> bool {
        let position = self.expect_position(variable);
        self.find_support(csp, position, value, None)
    }

    /// As [`Constraint::has_support`], but additionally requires the support to assign
    /// `fixed_value` to `fixed_variable`, regardless of its current domain.
    pub(crate) fn has_support_given(
        &self,
        csp: &Csp,
        variable: VariableId,
        value: i32,
        (fixed_variable, fixed_value): (VariableId, i32),
    ) -> bool {
        let position = self.expect_position(variable);
        let fixed_position = self.expect_position(fixed_variable);
        self.find_support(csp, position, value, Some((fixed_position, fixed_value)))
    }

    fn expect_position(&self, variable: VariableId) -> usize {
        match self.position_of(variable) {
            Some(position) => position,
            None => panic!(
                "Variable {variable} is not in the scope of constraint '{}'",
                self.name
            ),
        }
    }

    fn find_support(
        &self,
        csp: &Csp,
        position: usize,
        value: i32,
        fixed: Option<(usize, i32)>,
    ) -> bool {
        let Some(candidates) = self.supports[position].get(&value) else {
            return false;
        };

        let is_support = |tuple_index: usize| {
            self.tuples[tuple_index]
                .iter()
                .zip(self.scope.iter())
                .enumerate()
                .all(|(other_position, (&other_value, &other_variable))| {
                    if other_position == position {
                        return true;
                    }
                    match fixed {
                        Some((fixed_position, fixed_value)) if fixed_position == other_position => {
                            other_value == fixed_value
                        }
                        _ => csp.variable(other_variable).in_cur_domain(other_value),
                    }
                })
        };

        if fixed.is_some() {
            return candidates
                .tuples
                .iter()
                .any(|&tuple_index| is_support(tuple_index));
        }

        // The residue is only a hint, it may point at a tuple which is no longer valid
        let residue = candidates.residue.get();
        if is_support(candidates.tuples[residue]) {
            return true;
        }

        match candidates
            .tuples
            .iter()
            .position(|&tuple_index| is_support(tuple_index))
        {
            Some(found) => {
                candidates.residue.set(found);
                true
            }
            None => false,
        }
    }
}
