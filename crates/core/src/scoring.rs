//! Scoring module - score, level progression and fall speed
//!
//! | Rows in one cascade | Ghost on | Ghost off |
//! |---------------------|----------|-----------|
//! | 1 | 100 | 200 |
//! | 2 | 400 | 800 |
//! | 3 | 900 | 1800 |
//! | 4 | 1600 | 3200 |
//!
//! Every 5 cleared rows raise the level by one, up to level 10. The fall
//! interval starts at 800ms on level 1 and drops by 50ms per level.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, GHOST_OFF_BONUS, LEVEL_CAP, ROWS_PER_LEVEL, SCORE_PER_ROW,
};

/// Score increment for `rows` cleared in a single cascade
pub fn cascade_score(rows: u32, ghost_enabled: bool) -> u32 {
    let bonus = if ghost_enabled { 1 } else { GHOST_OFF_BONUS };
    SCORE_PER_ROW * rows * rows * bonus
}

/// Level after one more row was counted, `total_rows` being the new total
pub fn level_after(total_rows: u32, level: u32) -> u32 {
    if total_rows > 0 && total_rows % ROWS_PER_LEVEL == 0 && level < LEVEL_CAP {
        level + 1
    } else {
        level
    }
}

/// Fall interval (ms) for a level; levels outside `1..=LEVEL_CAP` are clamped
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS - FALL_STEP_MS * (level.clamp(1, LEVEL_CAP) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_score() {
        assert_eq!(cascade_score(0, true), 0);
        assert_eq!(cascade_score(1, true), 100);
        assert_eq!(cascade_score(2, true), 400);
        assert_eq!(cascade_score(3, true), 900);
        assert_eq!(cascade_score(4, true), 1600);
        assert_eq!(cascade_score(1, false), 200);
        assert_eq!(cascade_score(4, false), 3200);
    }

    #[test]
    fn test_level_progression() {
        let mut level = 1;
        for total in 1..=100 {
            level = level_after(total, level);
            if total < LEVEL_CAP * ROWS_PER_LEVEL {
                assert_eq!(level, 1 + total / ROWS_PER_LEVEL, "after {} rows", total);
            }
        }
        assert_eq!(level, LEVEL_CAP);
    }

    #[test]
    fn test_fall_interval() {
        assert_eq!(fall_interval_ms(1), 800);
        assert_eq!(fall_interval_ms(2), 750);
        assert_eq!(fall_interval_ms(10), 350);
        assert_eq!(fall_interval_ms(0), 800);
        assert_eq!(fall_interval_ms(42), 350);
    }

    #[test]
    fn test_fall_interval_strictly_decreasing() {
        for level in 1..LEVEL_CAP {
            assert!(fall_interval_ms(level + 1) < fall_interval_ms(level));
        }
    }
}
