//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed-timestep cadence for the cooperative game loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity timing (milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const MIN_DROP_MS: u32 = 100;

/// Speed-up schedule: the drop interval shrinks by `SPEED_STEP_MS` for every
/// `SPEED_STEP_SCORE` points of absolute score.
pub const SPEED_STEP_MS: u32 = 100;
pub const SPEED_STEP_SCORE: u32 = 500;

/// Points awarded per cleared line
pub const LINE_SCORE: u32 = 100;

/// Piece kinds, in catalog order
///
/// Each kind is permanently associated with one shape matrix and one color.
/// The color is a property of the whole piece, fixed at spawn and persisted
/// into the board when the piece freezes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    L,
    J,
    O,
    Z,
    S,
}

impl PieceKind {
    /// All catalog entries, in order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Color identity of this piece, as 24-bit RGB
    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xff, 0xff),
            PieceKind::T => (0x00, 0x00, 0xff),
            PieceKind::L => (0xff, 0xa5, 0x00),
            PieceKind::J => (0xff, 0xff, 0x00),
            PieceKind::O => (0x00, 0xff, 0x00),
            PieceKind::Z => (0x80, 0x00, 0x80),
            PieceKind::S => (0xff, 0x00, 0x00),
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Session commands accepted from the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_distinct_kinds() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn colors_are_fixed_per_kind() {
        assert_eq!(PieceKind::I.color_rgb(), (0x00, 0xff, 0xff));
        assert_eq!(PieceKind::T.color_rgb(), (0x00, 0x00, 0xff));
        assert_eq!(PieceKind::L.color_rgb(), (0xff, 0xa5, 0x00));
        assert_eq!(PieceKind::S.color_rgb(), (0xff, 0x00, 0x00));
    }
}
