//! Point-in-time copies of the observable session state.
//!
//! Renderers and tests read these instead of holding references into the
//! session, so a snapshot taken between commands can never observe a
//! half-applied transition.

use crate::core::board::Board;
use crate::core::catalog::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Frozen cells only; the active piece is reported separately
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub(crate) fn grid_from(board: &Board) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (i, cell) in board.cells().iter().enumerate() {
            grid[i / BOARD_WIDTH as usize][i % BOARD_WIDTH as usize] = *cell;
        }
        grid
    }

    /// The cell at `(x, y)` as a renderer sees it: the active piece drawn
    /// over the frozen grid.
    pub fn cell_with_active(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            let cx = x as i8 - active.x;
            let cy = y as i8 - active.y;
            if cx >= 0 && cy >= 0 && active.shape.is_filled(cx as usize, cy as usize) {
                return Some(active.kind);
            }
        }
        self.board[y][x]
    }
}

#[cfg(test)]
mod tests {
    use crate::core::session::GameSession;

    #[test]
    fn test_snapshot_reflects_frozen_and_active_cells() {
        let mut session = GameSession::new(12345);
        session.start();

        let snap = session.snapshot();
        let active = snap.active.as_ref().expect("active piece");

        // Active cells overlay the (empty) frozen grid.
        let (cx, cy) = active.shape.filled().next().expect("filled cell");
        let x = (active.x + cx) as usize;
        let y = (active.y + cy) as usize;
        assert_eq!(snap.cell_with_active(x, y), Some(active.kind));
        assert_eq!(snap.board[y][x], None);
    }

    #[test]
    fn test_snapshot_is_detached_from_the_session() {
        let mut session = GameSession::new(12345);
        session.start();

        let before = session.snapshot();
        session.apply(crate::types::GameCommand::HardDrop);
        let after = session.snapshot();

        assert_eq!(before.score, 0);
        assert_ne!(before.board, after.board);
    }
}
