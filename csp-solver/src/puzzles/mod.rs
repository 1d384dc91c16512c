//! Encodings of grid puzzles as [`Csp`]s.
//!
//! Both puzzles are Latin squares of size `n`: every cell takes a value in `1..=n` and the values
//! in each row and each column are all different. [`futoshiki`] adds inequalities between
//! horizontally adjacent cells, [`funpuzz`] adds arithmetic cages.
//!
//! Cells are addressed by zero-based `(row, column)` coordinates.
pub mod funpuzz;
pub mod futoshiki;

use thiserror::Error;

use crate::basic_types::ModelError;
use crate::basic_types::Solution;
use crate::constraints;
use crate::constraints::ArithmeticOperation;
use crate::model::Csp;
use crate::model::VariableId;

/// Errors related to the shape of a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("a puzzle grid must have at least one row")]
    EmptyGrid,
    #[error("a {size}x{size} grid is too large")]
    GridTooLarge { size: usize },
    #[error("cell ({row}, {column}) lies outside of the {size}x{size} grid")]
    CellOutOfRange {
        row: usize,
        column: usize,
        size: usize,
    },
    #[error("value {value} for cell ({row}, {column}) lies outside of 1..={size}")]
    ValueOutOfRange {
        row: usize,
        column: usize,
        value: i32,
        size: usize,
    },
    #[error("cell ({row}, {column}) belongs to more than one cage")]
    OverlappingCages { row: usize, column: usize },
    #[error("cell ({row}, {column}) does not belong to any cage")]
    UncoveredCell { row: usize, column: usize },
    #[error("a cage without an operation must contain exactly one cell, found {num_cells}")]
    InvalidGivenCage { num_cells: usize },
    #[error("a cage with operation '{operation}' contains no cells")]
    EmptyCage { operation: ArithmeticOperation },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A puzzle encoded as a [`Csp`], together with the variable of every cell.
#[derive(Debug, Clone)]
pub struct GridModel {
    pub csp: Csp,
    /// `cells[row][column]` is the variable of that cell
    pub cells: Vec<Vec<VariableId>>,
}

impl GridModel {
    /// Creates one variable per cell with domain `1..=size`, named `cell(row,column)`.
    fn with_cells(name: &str, size: usize) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        let max_value = i32::try_from(size).map_err(|_| PuzzleError::GridTooLarge { size })?;

        let mut csp = Csp::new(name);
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| {
                        let name = format!("cell({row},{column})");
                        csp.new_variable(name, (1..=max_value).collect())
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GridModel { csp, cells })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns the values of `solution` laid out as the grid.
    pub fn grid(&self, solution: &Solution) -> Vec<Vec<i32>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&cell| solution.get_value(cell)).collect())
            .collect()
    }

    fn check_cell(&self, row: usize, column: usize) -> Result<VariableId, PuzzleError> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or(PuzzleError::CellOutOfRange {
                row,
                column,
                size: self.size(),
            })
    }

    /// Requires the cell to take `value`.
    fn add_given(&mut self, row: usize, column: usize, value: i32) -> Result<(), PuzzleError> {
        let cell = self.check_cell(row, column)?;
        if !self.csp.variable(cell).in_domain(value) {
            return Err(PuzzleError::ValueOutOfRange {
                row,
                column,
                value,
                size: self.size(),
            });
        }
        let constraint = constraints::fixed_value(&self.csp, cell, value);
        let _ = self.csp.add_constraint(constraint)?;
        Ok(())
    }

    /// The rows followed by the columns of the grid.
    fn lines(&self) -> Vec<Vec<VariableId>> {
        let columns = (0..self.size())
            .map(|column| self.cells.iter().map(|row| row[column]).collect::<Vec<_>>());
        self.cells.iter().cloned().chain(columns).collect()
    }

    /// Adds a not-equal constraint between every pair of cells sharing a row or a column.
    fn add_binary_all_different(&mut self) -> Result<(), PuzzleError> {
        for line in self.lines() {
            for (index, &first) in line.iter().enumerate() {
                for &second in &line[index + 1..] {
                    let constraint = constraints::not_equals(&self.csp, first, second);
                    let _ = self.csp.add_constraint(constraint)?;
                }
            }
        }
        Ok(())
    }

    /// Adds one all-different constraint per row and per column.
    fn add_nary_all_different(&mut self) -> Result<(), PuzzleError> {
        for (index, line) in self.lines().into_iter().enumerate() {
            let name = if index < self.size() {
                format!("row{index}")
            } else {
                format!("column{}", index - self.size())
            };
            let constraint = constraints::all_different(&self.csp, name, line);
            let _ = self.csp.add_constraint(constraint)?;
        }
        Ok(())
    }
}
