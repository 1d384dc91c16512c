use crate::propagators::PropagatorKind;
#[cfg(doc)]
use crate::Solver;

/// Options which determine how the [`Solver`] searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// The propagator which is run after every assignment (and once before the search starts).
    pub propagator: PropagatorKind,
    /// The seed of the random source available to randomised branchers.
    pub random_seed: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            propagator: PropagatorKind::default(),
            random_seed: 42,
        }
    }
}
