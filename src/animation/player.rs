//! Caller-side playback of an [`AnimationPlan`].
//!
//! The engine only builds one cycle's segment plan; the player owns the
//! playback clock. The surrounding app drives [`Player::advance`] from its
//! frame loop (typically every ~16 ms) and the player writes interpolated
//! values into the bound [`Progress`] handle.
//!
//! Exactly one player is active per handle. Starting a new player on a handle
//! supersedes the previous one immediately; a superseded player's `advance`
//! becomes a no-op. [`Player::stop`] is synchronous, no in-flight segment is
//! waited out.

use super::{Animatable, AnimationPlan, Progress};

/// What a call to [`Player::advance`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// The plan is still running (or looping)
    Playing,
    /// A one-shot plan reached its resting value
    Finished,
    /// This player was stopped or another player claimed the handle
    Superseded,
}

/// An owned handle on one running animation.
pub struct Player {
    plan: AnimationPlan,
    progress: Progress,
    start_value: f32,
    elapsed_ms: f32,
    generation: u64,
    stopped: bool,
}

impl Player {
    /// Claim `progress` and begin playback from its current value.
    ///
    /// Any player previously started on the same handle is superseded from
    /// this moment on.
    pub fn start(plan: AnimationPlan, progress: &Progress) -> Self {
        let generation = progress.claim();
        let start_value = progress.get();
        log::debug!(
            "starting animation: {} segments over {:.0}ms (looping: {})",
            plan.segments().len(),
            plan.total_duration_ms(),
            plan.looping()
        );
        Self {
            plan,
            progress: progress.clone(),
            start_value,
            elapsed_ms: 0.0,
            generation,
            stopped: false,
        }
    }

    /// Advance the playback clock by `dt_ms` milliseconds and update the
    /// progress handle. Negative deltas are treated as zero.
    pub fn advance(&mut self, dt_ms: f32) -> PlayerState {
        if !self.is_active() {
            return PlayerState::Superseded;
        }

        let total = self.plan.total_duration_ms();
        if self.plan.segments().is_empty() || total <= 0.0 {
            self.progress.set(self.plan.resting_value());
            return PlayerState::Finished;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if !self.plan.looping() && self.elapsed_ms >= total {
            self.progress.set(self.plan.resting_value());
            return PlayerState::Finished;
        }

        let cycle = (self.elapsed_ms / total).floor();
        let local = self.elapsed_ms - cycle * total;
        // Later cycles start from the previous cycle's resting value, not
        // from wherever the handle was when playback began.
        let mut from = if cycle < 1.0 {
            self.start_value
        } else {
            self.plan.resting_value()
        };

        let segments = self.plan.segments();
        let last = segments.len() - 1;
        let mut offset = 0.0;
        for (i, segment) in segments.iter().enumerate() {
            let end = offset + segment.duration_ms;
            if local < end || i == last {
                let t = if segment.duration_ms > 0.0 {
                    ((local - offset) / segment.duration_ms).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased = segment.easing.evaluate(t);
                self.progress.set(f32::lerp(&from, &segment.target, eased));
                return PlayerState::Playing;
            }
            from = segment.target;
            offset = end;
        }

        PlayerState::Playing
    }

    /// Stop playback immediately, leaving the handle at its current value.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Whether this player still owns its handle and has not been stopped.
    pub fn is_active(&self) -> bool {
        !self.stopped && self.generation == self.progress.generation()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{build_plan, PlanConfig, TimingFunction};
    use crate::emotion::AnimationType;

    fn linear_config(duration_ms: f32) -> PlanConfig {
        PlanConfig::new(duration_ms).easing(TimingFunction::Linear)
    }

    #[test]
    fn test_pulse_reaches_peak_and_returns() {
        // Intensity 1.0 keeps the scaled duration at the configured 1000ms
        let plan = build_plan(AnimationType::Pulse, 1.0, &linear_config(1000.0));
        let progress = Progress::default();
        let mut player = Player::start(plan, &progress);

        assert_eq!(player.advance(500.0), PlayerState::Playing);
        assert!((progress.get() - 1.1).abs() < 1e-3, "peak at half cycle");

        assert_eq!(player.advance(499.0), PlayerState::Playing);
        assert!((progress.get() - 1.0).abs() < 1e-2, "back near rest");
    }

    #[test]
    fn test_looping_wraps_around() {
        let plan = build_plan(AnimationType::Pulse, 1.0, &linear_config(1000.0));
        let progress = Progress::default();
        let mut player = Player::start(plan, &progress);

        // 1500ms into a 1000ms looping cycle = 500ms into the second cycle
        assert_eq!(player.advance(1500.0), PlayerState::Playing);
        assert!((progress.get() - 1.1).abs() < 1e-3);
    }

    #[test]
    fn test_one_shot_finishes_at_peak() {
        let plan = build_plan(AnimationType::Expand, 1.0, &linear_config(1000.0));
        let progress = Progress::default();
        let mut player = Player::start(plan, &progress);

        assert_eq!(player.advance(1000.0), PlayerState::Finished);
        assert!((progress.get() - 1.2).abs() < 1e-3);
    }

    #[test]
    fn test_stop_is_immediate() {
        let plan = build_plan(AnimationType::Pulse, 1.0, &linear_config(1000.0));
        let progress = Progress::default();
        let mut player = Player::start(plan, &progress);

        player.advance(250.0);
        let frozen = progress.get();
        player.stop();

        assert_eq!(player.advance(250.0), PlayerState::Superseded);
        assert_eq!(progress.get(), frozen);
    }

    #[test]
    fn test_new_player_supersedes_old() {
        let progress = Progress::default();
        let plan = build_plan(AnimationType::Pulse, 1.0, &linear_config(1000.0));
        let mut first = Player::start(plan.clone(), &progress);
        let mut second = Player::start(plan, &progress);

        assert!(!first.is_active());
        assert_eq!(first.advance(100.0), PlayerState::Superseded);
        assert_eq!(second.advance(100.0), PlayerState::Playing);
    }

    #[test]
    fn test_shake_returns_to_zero() {
        let plan = build_plan(AnimationType::Shake, 1.0, &linear_config(600.0));
        let progress = Progress::new(0.0);
        let mut player = Player::start(plan, &progress);

        // End of the last segment of the first cycle
        player.advance(599.9);
        assert!(progress.get().abs() < 0.1, "shake settles near 0");
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let plan = build_plan(AnimationType::Fade, 1.0, &linear_config(1000.0));
        let progress = Progress::default();
        let mut player = Player::start(plan, &progress);

        player.advance(500.0);
        let at_half = progress.get();
        player.advance(-200.0);
        assert_eq!(progress.get(), at_half);
    }
}
