//! Scoring, leveling, and gravity speed. Pure functions over the classic
//! rules: 40/100/300/1200 per 1-4 lines times the level, a level per 1000
//! points, and a 100 ms speed-up per level floored at 100 ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LEVEL_SCORE_STEP, LINE_SCORES,
};

/// Points for clearing `lines` rows at once at the given level. A single
/// lock can clear at most four rows; larger counts clamp to the tetris
/// payout.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORES[lines.min(4)] * level
}

/// Level is derived from score alone: one level per 1000 points,
/// starting at 1.
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// Gravity interval for a level: 1000 ms at level 1, 100 ms faster per
/// level, never below 100 ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_INTERVAL_STEP_MS)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_table_at_level_one() {
        assert_eq!(line_clear_score(1, 1), 40);
        assert_eq!(line_clear_score(2, 1), 100);
        assert_eq!(line_clear_score(3, 1), 300);
        assert_eq!(line_clear_score(4, 1), 1200);
    }

    #[test]
    fn score_scales_with_level() {
        assert_eq!(line_clear_score(1, 3), 120);
        assert_eq!(line_clear_score(4, 3), 3600);
    }

    #[test]
    fn zero_and_excess_lines() {
        assert_eq!(line_clear_score(0, 5), 0);
        // Clamped at the tetris payout.
        assert_eq!(line_clear_score(7, 1), 1200);
    }

    #[test]
    fn level_steps_every_thousand_points() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(4040), 5);
    }

    #[test]
    fn interval_shrinks_and_floors() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(25), 100);
    }
}
