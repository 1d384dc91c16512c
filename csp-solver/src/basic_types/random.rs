use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

/// Abstraction for randomness, in order to swap out different source of randomness.
///
/// The solver owns a seeded [`rand::rngs::SmallRng`] so that randomised selectors such as
/// [`RandomSelector`](crate::branching::variable_selection::RandomSelector) are reproducible for a
/// fixed [`SolverOptions::random_seed`](crate::options::SolverOptions::random_seed).
pub trait Random: Debug {
    /// Generates a random usize in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[range.start, range.end)`
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}
