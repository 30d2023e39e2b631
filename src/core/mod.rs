//! Core module - pure game simulation with no I/O dependencies
//!
//! Everything under here is deterministic and testable: the board grid, the
//! piece catalog, the collision/placement engine, scoring, and the session
//! controller that runs the spawn -> fall -> lock -> clear cycle.

pub mod board;
pub mod catalog;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use catalog::{pick_random, spawn_shape, Shape};
pub use placement::{drop_distance, is_valid_placement};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_for_score, score_for_lines};
pub use session::{ActivePiece, GameSession, SessionEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
