//! Core domain types for cubic tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// The mark that opens every game.
    pub const FIRST: Mark = Mark::X;

    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Error building a [`GridSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SizeError {
    /// The requested edge length is outside the supported range.
    #[display(
        "Grid size {} is out of range ({}-{})",
        _0,
        GridSize::MIN,
        GridSize::MAX
    )]
    OutOfRange(usize),
}

impl std::error::Error for SizeError {}

/// Edge length S of the S×S×S lattice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest supported edge length.
    pub const MIN: usize = 2;
    /// Largest supported edge length.
    pub const MAX: usize = 5;
    /// The classic 3×3×3 cube.
    pub const DEFAULT: GridSize = GridSize(3);

    /// Validates an edge length.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SizeError::OutOfRange(size))
        }
    }

    /// Edge length S.
    pub fn get(self) -> usize {
        self.0
    }

    /// Cells per layer (S²).
    pub fn layer_len(self) -> usize {
        self.0 * self.0
    }

    /// Total number of cells (S³).
    pub fn cell_count(self) -> usize {
        self.0 * self.0 * self.0
    }

    /// Whether `index` addresses a cell of this lattice.
    pub fn contains(self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// Next larger size, if supported.
    pub fn grow(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Next smaller size, if supported.
    pub fn shrink(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?).ok()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GridSize {
    type Error = SizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// Lattice coordinate of a cell.
///
/// `x` is the column, `y` the layer and `z` the row:
/// `x = idx mod S`, `y = idx / S²`, `z = (idx mod S²) / S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column within the row.
    pub x: usize,
    /// Layer.
    pub y: usize,
    /// Row within the layer.
    pub z: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Decomposes a flat index. Returns `None` when out of bounds.
    pub fn from_index(index: usize, size: GridSize) -> Option<Self> {
        if !size.contains(index) {
            return None;
        }
        let s = size.get();
        Some(Self {
            x: index % s,
            y: index / size.layer_len(),
            z: (index % size.layer_len()) / s,
        })
    }

    /// Flattens back to an index. Returns `None` when any axis is out of bounds.
    pub fn to_index(self, size: GridSize) -> Option<usize> {
        let s = size.get();
        if self.x >= s || self.y >= s || self.z >= s {
            return None;
        }
        Some(self.y * size.layer_len() + self.z * s + self.x)
    }
}

/// S×S×S board stored as a flat cell array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    /// Cells in flat index order (0..S³).
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Builds a board from explicit cells.
    ///
    /// Returns `None` unless `cells.len() == S³`.
    pub fn from_cells(size: GridSize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size.cell_count()).then_some(Self { size, cells })
    }

    /// Edge length of the board.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Gets the cell at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at `index`.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), MoveError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::InvalidIndex(index))?;
        *slot = cell;
        Ok(())
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Indices of all empty cells.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Formats the board as one text grid per layer.
    pub fn display(&self) -> String {
        let s = self.size.get();
        let mut result = String::new();
        for layer in 0..s {
            result.push_str(&format!("Layer {}\n", layer));
            for row in 0..s {
                let line: Vec<&str> = (0..s)
                    .map(|col| match self.cells[layer * s * s + row * s + col] {
                        Cell::Empty => ".",
                        Cell::Occupied(Mark::X) => "X",
                        Cell::Occupied(Mark::O) => "O",
                    })
                    .collect();
                result.push_str(&line.join(" "));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT)
    }
}
