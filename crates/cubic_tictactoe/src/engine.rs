//! Board state and rules engine.
//!
//! [`Engine`] owns the board, the turn flag, the recorded result and the
//! cached line catalog. Nothing lives in globals, so games are independent
//! values that can be tested in isolation.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::events::GameEvent;
use super::lines::{Line, LineCatalog};
use super::rules;
use super::{Board, Cell, GridSize, Mark, WinResult};
use tracing::{debug, info, instrument};

/// Cubic tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) catalog: LineCatalog,
    pub(crate) to_move: Mark,
    pub(crate) result: Option<WinResult>,
    pub(crate) history: Vec<Move>,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Creates a game on an empty S×S×S board, X to move.
    #[instrument]
    pub fn new(size: GridSize) -> Self {
        Self {
            board: Board::new(size),
            catalog: LineCatalog::new(size),
            to_move: Mark::FIRST,
            result: None,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// On success the turn passes to the opponent, unless the move ends the
    /// game; then the result is recorded and the turn flag freezes.
    ///
    /// # Errors
    ///
    /// `GameAlreadyOver` once a result exists, `InvalidIndex` outside
    /// `[0, S³)`, `CellOccupied` for a claimed cell. A rejected move leaves
    /// the engine untouched.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.apply(Move::new(self.to_move, index))
    }

    /// Applies an explicit move, also checking that it is `action.mark`'s turn.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.index, Cell::Occupied(action.mark))?;
        self.history.push(action);
        self.events.push(GameEvent::MarkPlaced {
            index: action.index,
            mark: action.mark,
        });

        match rules::evaluate(&self.board, &self.catalog) {
            Some(result) => {
                info!(%result, positions = ?result.positions(), "Game over");
                self.result = Some(result.clone());
                self.events.push(GameEvent::GameOver { result });
            }
            None => {
                self.to_move = self.to_move.opponent();
                debug!(next = %self.to_move, "Turn passes");
                self.events.push(GameEvent::TurnChanged { mark: self.to_move });
            }
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Clears the board for a new game of edge length `size`.
    ///
    /// The line catalog is regenerated only when the size changes.
    #[instrument(skip(self), fields(previous = %self.size()))]
    pub fn reset(&mut self, size: GridSize) {
        self.catalog.resize(size);
        self.board = Board::new(size);
        self.to_move = Mark::FIRST;
        self.result = None;
        self.history.clear();
        self.events.push(GameEvent::BoardReset { size });
        info!("Board reset");
    }

    /// Rebuilds a game by replaying `moves` on an empty board.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(size: GridSize, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new(size);
        for action in moves {
            engine.apply(*action)?;
        }
        engine.events.clear();
        Ok(engine)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is (the last mover once the game is over).
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Recorded result, if the game has ended.
    pub fn win_result(&self) -> Option<&WinResult> {
        self.result.as_ref()
    }

    /// True once a result has been recorded.
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Edge length of the current board.
    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    /// Cached winning lines for the current size.
    pub fn lines(&self) -> &[Line] {
        self.catalog.lines()
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queues an event on behalf of a collaborator sharing this engine.
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_is_x() {
        let mut engine = Engine::default();
        engine.apply_move(13).unwrap();
        assert_eq!(engine.board().get(13), Some(Cell::Occupied(Mark::X)));
        assert_eq!(engine.current_player(), Mark::O);
    }

    #[test]
    fn test_events_follow_moves() {
        let mut engine = Engine::default();
        engine.apply_move(4).unwrap();
        assert_eq!(
            engine.drain_events(),
            vec![
                GameEvent::MarkPlaced {
                    index: 4,
                    mark: Mark::X
                },
                GameEvent::TurnChanged { mark: Mark::O },
            ]
        );
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_rejected_move_emits_nothing() {
        let mut engine = Engine::default();
        engine.apply_move(4).unwrap();
        engine.drain_events();
        assert_eq!(engine.apply_move(4), Err(MoveError::CellOccupied(4)));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_reset_keeps_catalog_for_same_size() {
        let mut engine = Engine::default();
        let before = engine.catalog.clone();
        engine.apply_move(0).unwrap();
        engine.reset(GridSize::DEFAULT);
        assert_eq!(engine.catalog, before);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_replay_clears_events() {
        let moves = [Move::new(Mark::X, 0), Move::new(Mark::O, 1)];
        let mut engine = Engine::replay(GridSize::DEFAULT, &moves).unwrap();
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.history(), &moves);
    }
}
