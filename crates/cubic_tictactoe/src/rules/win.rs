//! Win detection for cubic tic-tac-toe.

use super::super::{Board, Cell, Line, LineCatalog, Mark};
use tracing::instrument;

/// Finds the first completed line.
///
/// A line is complete when all of its S cells hold the same mark.
/// Returns the mark and the line, or `None` if nobody has won.
#[instrument(skip_all)]
pub fn check_winner<'a>(board: &Board, catalog: &'a LineCatalog) -> Option<(Mark, &'a Line)> {
    catalog.lines().iter().find_map(|line| {
        let (first, rest) = line.split_first()?;
        match board.get(*first)? {
            Cell::Occupied(mark) if rest.iter().all(|&i| board.get(i) == Some(Cell::Occupied(mark))) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
