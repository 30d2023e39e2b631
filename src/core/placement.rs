//! Collision & placement engine
//!
//! Validity of a shape at a board anchor, with asymmetric bounds handling:
//! strict at the sides and the floor, permissive above the visible top. New
//! pieces may overlap rows above y=0 and must be allowed to descend into
//! view, and nothing frozen can ever live up there, so negative rows are
//! skipped from the occupancy check entirely.
//!
//! All rejection paths are `bool` returns. Invalid moves and rotations are
//! routine (the caller treats them as no-ops), not errors.

use crate::core::board::Board;
use crate::core::catalog::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `shape` anchored at board position `(x, y)` is a valid
/// placement: every filled cell in horizontal range, above the floor, and
/// not overlapping a frozen cell.
pub fn is_valid_placement(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    for (cx, cy) in shape.filled() {
        let bx = x + cx;
        let by = y + cy;

        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return false;
        }
        if by < 0 {
            // Above the visible top: cannot collide with frozen content.
            continue;
        }
        if board.is_occupied(bx, by) {
            return false;
        }
    }
    true
}

/// How far the shape can descend from `(x, y)` before the next row down is
/// invalid. Zero if it is already resting.
pub fn drop_distance(board: &Board, shape: &Shape, x: i8, y: i8) -> i8 {
    let mut distance: i8 = 0;
    while is_valid_placement(board, shape, x, y + distance + 1) {
        distance += 1;
    }
    distance
}
