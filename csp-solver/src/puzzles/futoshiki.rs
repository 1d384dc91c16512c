//! Futoshiki: a Latin square with inequality signs between some horizontally adjacent cells.
//!
//! ```rust
//! # use csp_solver::puzzles::futoshiki::Futoshiki;
//! # use csp_solver::puzzles::futoshiki::Inequality;
//! # use csp_solver::results::SatisfactionResult;
//! # use csp_solver::termination::Indefinite;
//! # use csp_solver::Solver;
//! let puzzle = Futoshiki::new(3)
//!     .with_given(0, 0, 1)
//!     .with_inequality(1, 0, Inequality::GreaterThan);
//! let mut model = puzzle.binary_model().unwrap();
//!
//! let mut solver = Solver::default();
//! let mut brancher = solver.default_brancher();
//! let SatisfactionResult::Satisfiable(solution) =
//!     solver.satisfy(&mut model.csp, &mut brancher, &mut Indefinite)
//! else {
//!     panic!("the puzzle has a solution");
//! };
//!
//! let grid = model.grid(&solution);
//! assert_eq!(grid[0][0], 1);
//! assert!(grid[1][0] > grid[1][1]);
//! ```
use super::GridModel;
use super::PuzzleError;
use crate::constraints;

/// The model of a Futoshiki puzzle, see [`Futoshiki::binary_model`] and
/// [`Futoshiki::nary_model`].
pub type FutoshikiModel = GridModel;

/// The relation between a cell and its right neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inequality {
    /// The cell is smaller than its right neighbour
    LessThan,
    /// The cell is larger than its right neighbour
    GreaterThan,
}

/// The description of a Futoshiki puzzle of size `n`; its shape is validated when a model is
/// built.
#[derive(Debug, Clone)]
pub struct Futoshiki {
    size: usize,
    givens: Vec<(usize, usize, i32)>,
    inequalities: Vec<(usize, usize, Inequality)>,
}

impl Futoshiki {
    pub fn new(size: usize) -> Self {
        Futoshiki {
            size,
            givens: vec![],
            inequalities: vec![],
        }
    }

    /// Fixes the value of cell `(row, column)`.
    pub fn with_given(mut self, row: usize, column: usize, value: i32) -> Self {
        self.givens.push((row, column, value));
        self
    }

    /// Places `inequality` between cell `(row, column)` and cell `(row, column + 1)`.
    pub fn with_inequality(mut self, row: usize, column: usize, inequality: Inequality) -> Self {
        self.inequalities.push((row, column, inequality));
        self
    }

    /// Encodes the rows and columns with pairwise not-equal constraints.
    pub fn binary_model(&self) -> Result<FutoshikiModel, PuzzleError> {
        let mut model = GridModel::with_cells("futoshiki-binary", self.size)?;
        model.add_binary_all_different()?;
        self.add_clues(&mut model)?;
        Ok(model)
    }

    /// Encodes every row and every column with a single all-different constraint.
    pub fn nary_model(&self) -> Result<FutoshikiModel, PuzzleError> {
        let mut model = GridModel::with_cells("futoshiki-nary", self.size)?;
        model.add_nary_all_different()?;
        self.add_clues(&mut model)?;
        Ok(model)
    }

    fn add_clues(&self, model: &mut GridModel) -> Result<(), PuzzleError> {
        for &(row, column, value) in &self.givens {
            model.add_given(row, column, value)?;
        }

        for &(row, column, inequality) in &self.inequalities {
            let left = model.check_cell(row, column)?;
            let right = model.check_cell(row, column + 1)?;
            let constraint = match inequality {
                Inequality::LessThan => constraints::less_than(&model.csp, left, right),
                Inequality::GreaterThan => constraints::less_than(&model.csp, right, left),
            };
            let _ = model.csp.add_constraint(constraint)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_model_has_pairwise_constraints() {
        let model = Futoshiki::new(3).binary_model().unwrap();

        assert_eq!(model.csp.num_variables(), 9);
        // 3 pairs in each of the 3 rows and 3 columns
        assert_eq!(model.csp.num_constraints(), 18);
    }

    #[test]
    fn nary_model_has_one_constraint_per_line() {
        let model = Futoshiki::new(4)
            .with_given(0, 0, 2)
            .nary_model()
            .unwrap();

        assert_eq!(model.csp.num_constraints(), 9);
        let row = model.csp.get_cons_with_var(model.cells[0][0])[0];
        assert_eq!(model.csp.constraint(row).arity(), 4);
    }

    #[test]
    fn inequalities_need_a_right_neighbour() {
        let result = Futoshiki::new(3)
            .with_inequality(0, 2, Inequality::LessThan)
            .binary_model();

        assert_eq!(
            result.unwrap_err(),
            PuzzleError::CellOutOfRange {
                row: 0,
                column: 3,
                size: 3
            }
        );
    }

    #[test]
    fn givens_must_be_in_range() {
        let result = Futoshiki::new(3).with_given(1, 1, 4).nary_model();

        assert!(matches!(
            result,
            Err(PuzzleError::ValueOutOfRange { value: 4, .. })
        ));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(
            Futoshiki::new(0).binary_model().unwrap_err(),
            PuzzleError::EmptyGrid
        );
    }
}
