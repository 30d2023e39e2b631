//! Blockfall: a falling-block puzzle game.
//!
//! The crate splits into a pure simulation core (`core`) and thin terminal
//! collaborators (`term`, `input`) that drive it. The core exposes a command
//! surface (move, rotate, hard drop, restart), a query surface (board,
//! active piece, score), and an event queue ("board changed", "session
//! ended") - see [`core::GameSession`].

pub mod core;
pub mod input;
pub mod term;
pub mod types;
