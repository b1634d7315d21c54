//! Winning-line catalog for an S×S×S lattice.
//!
//! The catalog depends only on the edge length. Its enumeration order is
//! observable: when one move completes several lines at once, evaluation
//! reports the first one listed here.

use super::GridSize;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An ordered run of S flat indices forming one straight line.
pub type Line = Vec<usize>;

/// Enumerates every winning line for `size`.
///
/// Order: in-plane rows, in-plane columns, lines through the layers,
/// in-plane diagonals, cross-layer diagonals by row, cross-layer diagonals
/// by column, then the four space diagonals.
#[instrument]
pub fn generate_lines(size: GridSize) -> Vec<Line> {
    let s = size.get();
    let last = s - 1;
    let idx = |layer: usize, row: usize, col: usize| layer * s * s + row * s + col;
    let line = |f: &dyn Fn(usize) -> usize| -> Line { (0..s).map(f).collect() };

    let mut lines = Vec::with_capacity(3 * s * s + 6 * s + 4);

    // Rows
    for layer in 0..s {
        for row in 0..s {
            lines.push(line(&|i| idx(layer, row, i)));
        }
    }

    // Columns
    for layer in 0..s {
        for col in 0..s {
            lines.push(line(&|i| idx(layer, i, col)));
        }
    }

    // Through the layers
    for row in 0..s {
        for col in 0..s {
            lines.push(line(&|i| idx(i, row, col)));
        }
    }

    // In-plane diagonals
    for layer in 0..s {
        lines.push(line(&|i| idx(layer, i, i)));
        lines.push(line(&|i| idx(layer, i, last - i)));
    }

    // Cross-layer diagonals by row
    for row in 0..s {
        lines.push(line(&|i| idx(i, row, i)));
        lines.push(line(&|i| idx(i, row, last - i)));
    }

    // Cross-layer diagonals by column
    for col in 0..s {
        lines.push(line(&|i| idx(i, i, col)));
        lines.push(line(&|i| idx(i, last - i, col)));
    }

    // Space diagonals
    lines.push(line(&|i| idx(i, i, i)));
    lines.push(line(&|i| idx(i, i, last - i)));
    lines.push(line(&|i| idx(i, last - i, i)));
    lines.push(line(&|i| idx(i, last - i, last - i)));

    debug!(count = lines.len(), "Generated line catalog");
    lines
}

/// Number of lines in the catalog for `size`: 3S² + 6S + 4.
pub fn line_count(size: GridSize) -> usize {
    let s = size.get();
    3 * s * s + 6 * s + 4
}

/// Cached line catalog, regenerated only when the size changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCatalog {
    size: GridSize,
    lines: Vec<Line>,
}

impl LineCatalog {
    /// Builds the catalog for `size`.
    #[instrument]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            lines: generate_lines(size),
        }
    }

    /// Edge length the catalog was generated for.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// All lines in enumeration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Regenerates the catalog if `size` differs.
    ///
    /// Returns `true` when the catalog was rebuilt.
    #[instrument(skip(self), fields(current = %self.size))]
    pub fn resize(&mut self, size: GridSize) -> bool {
        if size == self.size {
            return false;
        }
        debug!(%size, "Regenerating line catalog");
        *self = Self::new(size);
        true
    }

    /// Lines passing through `index`.
    pub fn through(&self, index: usize) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.contains(&index))
    }
}

impl Default for LineCatalog {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT)
    }
}
