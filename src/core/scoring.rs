//! Scoring module - line-clear points and the gravity speed schedule
//!
//! Both formulas are fixed constants of the external contract:
//! `score += lines * 100` and
//! `drop_interval = max(100, 1000 - 100 * floor(score / 500))` ms.
//! The interval is always recomputed from the absolute score, never
//! adjusted incrementally.

use crate::types::{BASE_DROP_MS, LINE_SCORE, MIN_DROP_MS, SPEED_STEP_MS, SPEED_STEP_SCORE};

/// Points awarded for clearing `lines` rows in a single freeze
pub fn score_for_lines(lines: usize) -> u32 {
    LINE_SCORE * lines as u32
}

/// Drop interval in milliseconds for an absolute score
pub fn drop_interval_for_score(score: u32) -> u32 {
    let steps = score / SPEED_STEP_SCORE;
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(SPEED_STEP_MS))
        .max(MIN_DROP_MS)
}
