//! Scoring module - line clear rewards, levels and gravity
//!
//! - **Line clears**: `k * k * 100` points for `k` rows cleared by one lock
//!   (single 100, double 400, triple 900, four rows 1600)
//! - **Levels**: one level per 10 cleared lines, starting at level 1
//! - **Gravity**: 500ms per row at level 1, 50ms faster per level, never below 50ms

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE_SCORE,
    MIN_FALL_INTERVAL_MS, MIN_LEVEL,
};

/// Points for clearing `cleared` rows in a single lock
pub fn line_clear_score(cleared: usize) -> u32 {
    let k = cleared.min(u32::MAX as usize) as u32;
    k.saturating_mul(k).saturating_mul(LINE_CLEAR_BASE_SCORE)
}

/// Level reached after `lines` total cleared lines
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Line count credited when a session starts at `level`
///
/// Starting above level 1 behaves as if the earlier levels had been played,
/// so the next level-up happens after ten more lines.
pub fn seed_lines_for_level(level: u32) -> u32 {
    level
        .saturating_sub(MIN_LEVEL as u32)
        .saturating_mul(LINES_PER_LEVEL)
}

/// Gravity interval in milliseconds for `level`
pub fn fall_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(MIN_LEVEL as u32);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(steps.saturating_mul(FALL_INTERVAL_STEP_MS))
        .max(MIN_FALL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_is_quadratic() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(95), 10);
        assert_eq!(level_for_lines(130), 14);
    }

    #[test]
    fn test_fall_interval_table() {
        let expected = [500, 450, 400, 350, 300, 250, 200, 150, 100, 50];
        for (i, ms) in expected.iter().enumerate() {
            assert_eq!(fall_interval_ms(i as u32 + 1), *ms, "level {}", i + 1);
        }
        assert_eq!(fall_interval_ms(11), 50);
        assert_eq!(fall_interval_ms(40), 50);
    }

    #[test]
    fn test_fall_interval_below_level_one_is_base() {
        assert_eq!(fall_interval_ms(0), BASE_FALL_INTERVAL_MS);
    }

    #[test]
    fn test_seed_lines_for_level() {
        assert_eq!(seed_lines_for_level(1), 0);
        assert_eq!(seed_lines_for_level(5), 40);
        assert_eq!(level_for_lines(seed_lines_for_level(7)), 7);
    }
}
