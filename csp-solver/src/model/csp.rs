use log::trace;
use log::warn;

use crate::basic_types::ModelError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::model::Constraint;
use crate::model::ConstraintId;
use crate::model::Variable;
use crate::model::VariableId;

/// A constraint satisfaction problem: a set of [`Variable`]s and the [`Constraint`]s over them.
///
/// # Example
/// ```rust
/// # use csp_solver::Constraint;
/// # use csp_solver::Csp;
/// let mut csp = Csp::new("example");
/// let x = csp.new_variable("x", vec![1, 2]).unwrap();
/// let y = csp.new_variable("y", vec![1, 2]).unwrap();
///
/// let mut x_lt_y = Constraint::new("x<y", vec![x, y]);
/// x_lt_y.add_satisfying_tuples([[1, 2]]);
/// let c = csp.add_constraint(x_lt_y).unwrap();
///
/// assert_eq!(csp.get_cons_with_var(x), &[c]);
/// assert_eq!(csp.get_all_unasgn_vars().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Csp {
    name: String,
    variables: KeyedVec<VariableId, Variable>,
    constraints: KeyedVec<ConstraintId, Constraint>,
    /// For every variable, the constraints whose scope contains it, in insertion order
    constraints_of_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
    variable_names: HashMap<String, VariableId>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Csp {
            name: name.into(),
            variables: KeyedVec::default(),
            constraints: KeyedVec::default(),
            constraints_of_variable: KeyedVec::default(),
            variable_names: HashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new variable with the provided (ordered) domain.
    pub fn new_variable(
        &mut self,
        name: impl Into<String>,
        domain: Vec<i32>,
    ) -> Result<VariableId, ModelError> {
        let name = name.into();
        if self.variable_names.contains_key(&name) {
            return Err(ModelError::DuplicateVariableName(name));
        }
        if domain.is_empty() {
            warn!("Variable '{name}' has an empty domain, the problem is unsatisfiable");
        }

        let variable = Variable::new(name.clone(), domain)?;
        let id = self.variables.push(variable);
        let _ = self.constraints_of_variable.push(Vec::new());
        let _ = self.variable_names.insert(name, id);

        Ok(id)
    }

    /// Adds a constraint to the problem after checking that its scope and satisfying tuples are
    /// consistent with the variables of this problem.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        self.validate(&constraint)?;

        trace!(
            "Adding constraint '{}' over {} variables with {} satisfying tuples",
            constraint.name(),
            constraint.arity(),
            constraint.num_satisfying_tuples()
        );

        let scope = constraint.scope().to_vec();
        let id = self.constraints.push(constraint);
        for variable in scope {
            self.constraints_of_variable[variable].push(id);
        }

        Ok(id)
    }

    fn validate(&self, constraint: &Constraint) -> Result<(), ModelError> {
        let name = constraint.name();
        if constraint.scope().is_empty() {
            return Err(ModelError::EmptyScope(name.to_owned()));
        }

        let mut seen: HashSet<VariableId> = HashSet::default();
        for &variable in constraint.scope() {
            let Some(var) = self.variables.get(variable) else {
                return Err(ModelError::UnknownVariable(name.to_owned()));
            };
            if !seen.insert(variable) {
                return Err(ModelError::RepeatedScopeVariable {
                    constraint: name.to_owned(),
                    variable: var.name().to_owned(),
                });
            }
        }

        for tuple in constraint.satisfying_tuples() {
            if tuple.len() != constraint.arity() {
                return Err(ModelError::TupleArityMismatch {
                    constraint: name.to_owned(),
                    expected: constraint.arity(),
                    actual: tuple.len(),
                });
            }

            for (&variable, &value) in constraint.scope().iter().zip(tuple) {
                let var = &self.variables[variable];
                if !var.in_domain(value) {
                    return Err(ModelError::ValueOutsideDomain {
                        constraint: name.to_owned(),
                        variable: var.name().to_owned(),
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.get(name).copied()
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The constraints whose scope contains `variable`, in the order they were added.
    pub fn get_cons_with_var(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_of_variable[variable]
    }

    pub fn get_all_cons(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        self.constraints.keys()
    }

    pub fn get_all_vars(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables.keys()
    }

    pub fn get_all_unasgn_vars(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .key_values()
            .filter(|(_, variable)| !variable.is_assigned())
            .map(|(id, _)| id)
    }

    /// Returns how many variables in the scope of `constraint` are unassigned.
    pub fn num_unassigned_in_scope(&self, constraint: ConstraintId) -> usize {
        self.constraints[constraint]
            .scope()
            .iter()
            .filter(|&&variable| !self.variables[variable].is_assigned())
            .count()
    }

    /// Returns the assigned values of the scope of `constraint` in scope order, or [`None`] if
    /// some variable in the scope is unassigned.
    pub fn assigned_tuple(&self, constraint: ConstraintId) -> Option<Vec<i32>> {
        self.constraints[constraint]
            .scope()
            .iter()
            .map(|&variable| self.variables[variable].assigned_value())
            .collect()
    }

    /// See [`Constraint::has_support`].
    pub fn has_support(&self, constraint: ConstraintId, variable: VariableId, value: i32) -> bool {
        self.constraints[constraint].has_support(self, variable, value)
    }

    /// Assigns `value` to `variable`.
    ///
    /// # Panics
    /// If `variable` is already assigned or `value` is not in its current domain.
    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].assign(value);
    }

    /// # Panics
    /// If `variable` is not assigned.
    pub fn unassign(&mut self, variable: VariableId) {
        self.variables[variable].unassign();
    }

    /// Removes `value` from the current domain of `variable`.
    ///
    /// # Panics
    /// If `value` is not in the current domain (ignoring an assignment).
    pub fn prune_value(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].prune_value(value);
    }

    /// Puts a previously pruned `value` back into the current domain of `variable`.
    ///
    /// # Panics
    /// If `value` was not pruned.
    pub fn restore_value(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].restore_value(value);
    }
}
