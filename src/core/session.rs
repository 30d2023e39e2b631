//! Session controller - the spawn/fall/lock/clear cycle
//!
//! `GameSession` owns the board, the active piece, the score and the gravity
//! interval; nothing here is global state. External collaborators (renderer,
//! input adapter) hold the session, call its command surface, and drain its
//! event queue. Everything runs on one cooperative execution context, so no
//! mutation of the board or active piece ever races another.
//!
//! Gravity is driven by `tick(elapsed_ms)`: an accumulator against the
//! current drop interval. Line clears recompute the interval from the
//! absolute score, which "reschedules the timer" for the next gravity step
//! without affecting the one in flight.

use crate::core::board::Board;
use crate::core::catalog::{pick_random, spawn_shape, Shape};
use crate::core::placement::{drop_distance, is_valid_placement};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{drop_interval_for_score, score_for_lines};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, PieceKind, BASE_DROP_MS, BOARD_WIDTH};

/// The currently falling piece: shape matrix, anchor position and identity.
///
/// Exists from spawn until freeze, then merges into the board and is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board column of the matrix's top-left cell
    pub x: i8,
    /// Board row of the matrix's top-left cell
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece horizontally centered at the top of the board
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH as i8) / 2 - (shape.width() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }
}

/// Notifications for external collaborators, drained via
/// [`GameSession::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The board or the active piece changed; a redraw is due.
    BoardChanged,
    /// The spawn position was blocked. Fires with the terminating score
    /// before the session resets itself.
    SessionEnded { final_score: u32 },
}

/// One game session: board, active piece, score and gravity state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    game_over: bool,
    started: bool,
    rng: SimpleRng,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create a session with the given RNG seed (not yet started)
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            game_over: false,
            started: false,
            rng: SimpleRng::new(seed),
            events: Vec::new(),
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
        self.events.push(SessionEvent::BoardChanged);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current period between automatic one-row descents, in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Copy the full observable state for renderers and tests
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: GameSnapshot::grid_from(&self.board),
            active: self.active.as_ref().map(|piece| ActiveSnapshot {
                kind: piece.kind,
                shape: piece.shape.clone(),
                x: piece.x,
                y: piece.y,
            }),
            score: self.score,
            drop_interval_ms: self.drop_interval_ms,
            game_over: self.game_over,
        }
    }

    /// Drain pending notifications (oldest first)
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the gravity accumulator; performs one downward step when the
    /// current drop interval has elapsed. Returns true if the step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }

        self.drop_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Apply an input command. Returns whether the command changed anything;
    /// rejected moves are silent no-ops, not errors.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.try_shift(-1),
            GameCommand::MoveRight => self.try_shift(1),
            GameCommand::Rotate => self.rotate(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Restart => {
                if !self.started {
                    return false;
                }
                self.start_new_session();
                true
            }
        }
    }

    /// Shift the active piece one column left, if the target is valid
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Shift the active piece one column right, if the target is valid
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !is_valid_placement(&self.board, &active.shape, active.x + dx, active.y) {
            return false;
        }
        active.x += dx;
        self.events.push(SessionEvent::BoardChanged);
        true
    }

    /// Rotate the active piece clockwise in place. No wall kicks: if the
    /// rotated matrix collides at the current anchor, the original shape is
    /// kept and the command is a no-op.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = active.shape.rotate_cw();
        if !is_valid_placement(&self.board, &rotated, active.x, active.y) {
            return false;
        }
        active.shape = rotated;
        self.events.push(SessionEvent::BoardChanged);
        true
    }

    /// Drop the active piece to the lowest valid row and lock it, all in one
    /// synchronous step. No intermediate state is observable in between.
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.y += drop_distance(&self.board, &active.shape, active.x, active.y);
        self.lock_active();
        true
    }

    /// Reset everything in place and spawn a fresh piece. Called externally
    /// for an explicit restart, and internally on game over.
    pub fn start_new_session(&mut self) {
        self.board.reset();
        self.score = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.game_over = false;
        self.active = None;
        self.spawn_piece();
        self.events.push(SessionEvent::BoardChanged);
    }

    /// One row of gravity: descend if valid, otherwise lock
    fn gravity_step(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if is_valid_placement(&self.board, &active.shape, active.x, active.y + 1) {
            active.y += 1;
            self.events.push(SessionEvent::BoardChanged);
        } else {
            self.lock_active();
        }
    }

    /// Freeze the active piece into the board, clear full rows, apply score
    /// and speed updates, then spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        for (cx, cy) in piece.shape.filled() {
            self.board.set(piece.x + cx, piece.y + cy, Some(piece.kind));
        }

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.score += score_for_lines(cleared.len());
            // Recomputed from the absolute score. The new interval takes
            // effect on the next gravity step, never retroactively.
            self.drop_interval_ms = drop_interval_for_score(self.score);
        }

        self.drop_timer_ms = 0;
        self.spawn_piece();
        self.events.push(SessionEvent::BoardChanged);
    }

    /// Uniform random catalog pick, centered at the top. A blocked spawn is
    /// the game-over condition: the final score is surfaced and the session
    /// restarts itself.
    fn spawn_piece(&mut self) {
        let kind = pick_random(&mut self.rng);
        let piece = ActivePiece::spawn(kind);

        if is_valid_placement(&self.board, &piece.shape, piece.x, piece.y) {
            self.active = Some(piece);
            return;
        }

        self.game_over = true;
        self.events.push(SessionEvent::SessionEnded {
            final_score: self.score,
        });
        // Auto-restart; the fresh board always admits the next spawn.
        self.start_new_session();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
