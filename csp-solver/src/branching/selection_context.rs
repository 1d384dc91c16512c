use crate::basic_types::Random;
#[cfg(doc)]
use crate::branching::Brancher;
use crate::model::Csp;
use crate::model::VariableId;

/// The context provided to a [`Brancher`]: read access to the [`Csp`] in its current search state
/// and the random source of the solver.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    csp: &'a Csp,
    random_generator: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub fn new(csp: &'a Csp, random_generator: &'a mut dyn Random) -> Self {
        SelectionContext {
            csp,
            random_generator,
        }
    }

    pub fn csp(&self) -> &'a Csp {
        self.csp
    }

    /// Returns a random generator which can be used to generate random values (see [`Random`]
    /// for more information).
    pub fn random(&mut self) -> &mut dyn Random {
        self.random_generator
    }

    /// Returns the number of values in the current domain of `variable`.
    pub fn cur_domain_size(&self, variable: VariableId) -> usize {
        self.csp.variable(variable).cur_domain_size()
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.csp.variable(variable).is_assigned()
    }
}
