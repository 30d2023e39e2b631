//! Board tests - grid occupancy and row compaction

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y));
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_out_of_bounds_is_rejected() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 12, Some(PieceKind::L));
    }
    assert!(board.is_row_full(12));

    board.set(4, 12, None);
    assert!(!board.is_row_full(12));

    // Out-of-range rows are never "full".
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

/// Rows 3 and 7 full, everything else partial: exactly those two are removed,
/// two empty rows appear at the top, and every surviving row keeps its
/// contents with its relative order preserved.
#[test]
fn test_clear_rows_three_and_seven() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 3, Some(PieceKind::O));
        board.set(x, 7, Some(PieceKind::O));
    }

    // Distinct markers in a few partial rows.
    board.set(0, 0, Some(PieceKind::I));
    board.set(2, 2, Some(PieceKind::T));
    board.set(5, 5, Some(PieceKind::L));
    board.set(7, 10, Some(PieceKind::Z));
    board.set(9, 19, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(cleared.as_slice(), &[7, 3]);

    // Rows below the lowest cleared row stay put.
    assert_eq!(board.get(7, 10), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::S)));

    // Rows between the cleared rows shift down by one.
    assert_eq!(board.get(5, 6), Some(Some(PieceKind::L)));
    assert_eq!(board.get(5, 5), Some(None));

    // Rows above both cleared rows shift down by two.
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::I)));
    assert_eq!(board.get(2, 4), Some(Some(PieceKind::T)));

    // Two fresh empty rows at the top.
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_clear_full_rows_no_full_rows_is_a_no_op() {
    let mut board = Board::new();
    board.set(3, 15, Some(PieceKind::J));

    let cleared = board.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board.get(3, 15), Some(Some(PieceKind::J)));
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::T));
    }
    board.reset();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
