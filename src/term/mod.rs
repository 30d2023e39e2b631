//! Terminal rendering collaborators.
//!
//! These read the core's query surface and draw it; they never reach into
//! the simulation. Rendering goes through a simple framebuffer that is
//! diffed against the previous frame before flushing to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
