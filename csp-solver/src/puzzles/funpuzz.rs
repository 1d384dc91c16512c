//! FunPuzz (also known as KenKen): a Latin square partitioned into cages, where the values of the
//! cells in a cage combine to the target of the cage under its arithmetic operation.
//!
//! ```rust
//! # use csp_solver::constraints::ArithmeticOperation;
//! # use csp_solver::puzzles::funpuzz::Cage;
//! # use csp_solver::puzzles::funpuzz::FunPuzz;
//! # use csp_solver::results::SatisfactionResult;
//! # use csp_solver::termination::Indefinite;
//! # use csp_solver::Solver;
//! let puzzle = FunPuzz::new(2)
//!     .with_cage(Cage::given((0, 0), 2))
//!     .with_cage(Cage::new(vec![(0, 1), (1, 1)], ArithmeticOperation::Add, 3))
//!     .with_cage(Cage::given((1, 0), 1));
//! let mut model = puzzle.model().unwrap();
//!
//! let mut solver = Solver::default();
//! let mut brancher = solver.default_brancher();
//! let SatisfactionResult::Satisfiable(solution) =
//!     solver.satisfy(&mut model.csp, &mut brancher, &mut Indefinite)
//! else {
//!     panic!("the puzzle has a solution");
//! };
//!
//! assert_eq!(model.grid(&solution), vec![vec![2, 1], vec![1, 2]]);
//! ```
use super::GridModel;
use super::PuzzleError;
use crate::constraints;
use crate::constraints::ArithmeticOperation;

/// The model of a FunPuzz puzzle, see [`FunPuzz::model`].
pub type FunPuzzModel = GridModel;

/// A group of cells whose values combine to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cage {
    pub cells: Vec<(usize, usize)>,
    /// [`None`] for a single cell which is given the value `target`
    pub operation: Option<ArithmeticOperation>,
    pub target: i32,
}

impl Cage {
    pub fn new(cells: Vec<(usize, usize)>, operation: ArithmeticOperation, target: i32) -> Self {
        Cage {
            cells,
            operation: Some(operation),
            target,
        }
    }

    /// A single cell with a fixed value.
    pub fn given(cell: (usize, usize), value: i32) -> Self {
        Cage {
            cells: vec![cell],
            operation: None,
            target: value,
        }
    }
}

/// The description of a FunPuzz puzzle of size `n`; its shape is validated when the model is
/// built.
#[derive(Debug, Clone)]
pub struct FunPuzz {
    size: usize,
    cages: Vec<Cage>,
}

impl FunPuzz {
    pub fn new(size: usize) -> Self {
        FunPuzz {
            size,
            cages: vec![],
        }
    }

    pub fn with_cage(mut self, cage: Cage) -> Self {
        self.cages.push(cage);
        self
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Encodes the rows and columns with pairwise not-equal constraints and every cage with one
    /// constraint over its cells.
    ///
    /// The cages have to partition the grid.
    pub fn model(&self) -> Result<FunPuzzModel, PuzzleError> {
        let mut model = GridModel::with_cells("funpuzz", self.size)?;
        self.check_partition(&model)?;
        model.add_binary_all_different()?;

        for cage in &self.cages {
            match cage.operation {
                None => {
                    let [(row, column)] = cage.cells[..] else {
                        return Err(PuzzleError::InvalidGivenCage {
                            num_cells: cage.cells.len(),
                        });
                    };
                    model.add_given(row, column, cage.target)?;
                }
                Some(operation) => {
                    if cage.cells.is_empty() {
                        return Err(PuzzleError::EmptyCage { operation });
                    }
                    let scope = cage
                        .cells
                        .iter()
                        .map(|&(row, column)| model.check_cell(row, column))
                        .collect::<Result<Vec<_>, _>>()?;
                    let constraint =
                        constraints::arithmetic(&model.csp, scope, operation, cage.target);
                    let _ = model.csp.add_constraint(constraint)?;
                }
            }
        }

        Ok(model)
    }

    /// Checks that every cell of the grid belongs to exactly one cage.
    fn check_partition(&self, model: &GridModel) -> Result<(), PuzzleError> {
        let mut covered = vec![vec![false; self.size]; self.size];
        for &(row, column) in self.cages.iter().flat_map(|cage| cage.cells.iter()) {
            let _ = model.check_cell(row, column)?;
            if covered[row][column] {
                return Err(PuzzleError::OverlappingCages { row, column });
            }
            covered[row][column] = true;
        }

        for (row, cells) in covered.iter().enumerate() {
            if let Some(column) = cells.iter().position(|&is_covered| !is_covered) {
                return Err(PuzzleError::UncoveredCell { row, column });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> FunPuzz {
        FunPuzz::new(2)
            .with_cage(Cage::new(vec![(0, 0), (0, 1)], ArithmeticOperation::Multiply, 2))
            .with_cage(Cage::new(vec![(1, 0), (1, 1)], ArithmeticOperation::Subtract, 1))
    }

    #[test]
    fn model_has_line_and_cage_constraints() {
        let model = two_by_two().model().unwrap();

        // 4 not-equal constraints and 2 cages
        assert_eq!(model.csp.num_constraints(), 6);
    }

    #[test]
    fn overlapping_cages_are_rejected() {
        let result = two_by_two().with_cage(Cage::given((1, 1), 1)).model();

        assert_eq!(
            result.unwrap_err(),
            PuzzleError::OverlappingCages { row: 1, column: 1 }
        );
    }

    #[test]
    fn uncovered_cells_are_rejected() {
        let result = FunPuzz::new(2)
            .with_cage(Cage::new(vec![(0, 0), (0, 1)], ArithmeticOperation::Add, 3))
            .model();

        assert_eq!(
            result.unwrap_err(),
            PuzzleError::UncoveredCell { row: 1, column: 0 }
        );
    }

    #[test]
    fn given_cages_have_a_single_cell() {
        let cage = Cage {
            cells: vec![(0, 0), (0, 1)],
            operation: None,
            target: 1,
        };
        let result = FunPuzz::new(2)
            .with_cage(cage)
            .with_cage(Cage::new(vec![(1, 0), (1, 1)], ArithmeticOperation::Add, 3))
            .model();

        assert_eq!(
            result.unwrap_err(),
            PuzzleError::InvalidGivenCage { num_cells: 2 }
        );
    }

    #[test]
    fn cells_outside_the_grid_are_rejected() {
        let result = FunPuzz::new(1).with_cage(Cage::given((0, 1), 1)).model();

        assert!(matches!(
            result,
            Err(PuzzleError::CellOutOfRange { row: 0, column: 1, .. })
        ));
    }
}
