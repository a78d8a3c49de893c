//! Stage, score and countdown rules.
//!
//! The clock is measured from session start, not stage start: each stage
//! reached adds a flat `STAGE_TIME_BONUS` to the remaining time instead of
//! resetting a per-stage countdown.

use std::time::Duration;

use crate::consts::{
    Rgb, COINS_PER_STAGE, INITIAL_TIMER, MAX_STAGES, STAGE_COLORS, STAGE_TIME_BONUS,
};
use crate::entities::Progress;

/// Remaining seconds for a session that has run for `elapsed` and reached `stage`.
/// Only whole elapsed seconds count.
pub fn timer_for(elapsed: Duration, stage: u32) -> i64 {
    INITIAL_TIMER - elapsed.as_secs() as i64 + i64::from(stage) * STAGE_TIME_BONUS
}

/// Recompute the timer for this frame.
pub fn register_time(progress: &Progress, elapsed: Duration) -> Progress {
    Progress {
        timer: timer_for(elapsed, progress.stage),
        ..progress.clone()
    }
}

pub fn is_time_up(progress: &Progress) -> bool {
    progress.timer <= 0
}

/// Count one coin. At the last stage the per-stage counter stays pinned at
/// `COINS_PER_STAGE` while the score keeps growing.
pub fn register_coin(progress: &Progress) -> Progress {
    Progress {
        coins_in_stage: (progress.coins_in_stage + 1).min(COINS_PER_STAGE),
        score: progress.score + 1,
        ..progress.clone()
    }
}

pub fn should_advance(progress: &Progress) -> bool {
    progress.coins_in_stage >= COINS_PER_STAGE && progress.stage < MAX_STAGES
}

/// Move to the next stage, or `None` when the threshold isn't met or the
/// last stage has been reached.
pub fn next_stage(progress: &Progress) -> Option<Progress> {
    if !should_advance(progress) {
        return None;
    }
    Some(Progress {
        stage: progress.stage + 1,
        coins_in_stage: 0,
        ..progress.clone()
    })
}

pub fn background_for(stage: u32) -> Rgb {
    STAGE_COLORS[(stage.saturating_sub(1) as usize) % STAGE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_every_eight_stages() {
        assert_eq!(background_for(1), STAGE_COLORS[0]);
        assert_eq!(background_for(8), STAGE_COLORS[7]);
        assert_eq!(background_for(9), STAGE_COLORS[0]);
        assert_eq!(background_for(80), STAGE_COLORS[7]);
    }

    #[test]
    fn partial_seconds_do_not_count() {
        assert_eq!(timer_for(Duration::from_millis(1999), 1), 61);
        assert_eq!(timer_for(Duration::from_millis(2000), 1), 60);
    }
}
