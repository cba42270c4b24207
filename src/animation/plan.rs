//! Building one animation cycle from an emotion's kind and intensity.
//!
//! [`build_plan`] is pure: it never fails and never touches a progress handle.
//! The returned [`AnimationPlan`] describes a single cycle; looping, starting,
//! and stopping are the caller's job (see [`super::Player`]).

use super::{PlanConfig, TimingFunction};
use crate::emotion::AnimationType;

/// One timed interpolation step: drive the progress value to `target` over
/// `duration_ms` using `easing`.
#[derive(Clone, Debug)]
pub struct Segment {
    pub target: f32,
    pub duration_ms: f32,
    pub easing: TimingFunction,
}

impl Segment {
    fn new(target: f32, duration_ms: f32, easing: TimingFunction) -> Self {
        Self {
            target,
            duration_ms,
            easing,
        }
    }
}

/// An ordered sequence of timed segments for one animation cycle.
#[derive(Clone, Debug)]
pub struct AnimationPlan {
    segments: Vec<Segment>,
    looping: bool,
    native_driver: bool,
}

impl AnimationPlan {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of all segment durations in milliseconds
    pub fn total_duration_ms(&self) -> f32 {
        self.segments.iter().map(|s| s.duration_ms).sum()
    }

    /// The value the progress handle rests at when the cycle completes
    /// (1.0 for most kinds, 0.0 for shake)
    pub fn resting_value(&self) -> f32 {
        self.segments.last().map(|s| s.target).unwrap_or(1.0)
    }

    /// Whether the caller should replay the cycle until stopped
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Whether playback may run off the UI thread
    pub fn native_driver(&self) -> bool {
        self.native_driver
    }
}

/// Build one cycle's segment plan for the given kind and intensity.
///
/// The effective cycle duration is `config.duration_ms * (0.5 + intensity * 0.5)`,
/// so intensity 0.0 halves the cycle length and 1.0 plays the full configured
/// length.
/// Magnitude-scaled targets (pulse's peak, shake's offsets, ...) grow linearly
/// with intensity. Intensity outside 0.0–1.0 is not clamped; the result is
/// simply a larger or smaller motion.
pub fn build_plan(kind: AnimationType, intensity: f32, config: &PlanConfig) -> AnimationPlan {
    let scaled = config.duration_ms * (0.5 + intensity * 0.5);
    let ease = || config.easing.clone();

    let (segments, looping) = match kind {
        AnimationType::Pulse => (
            vec![
                Segment::new(1.1 * intensity, scaled / 2.0, ease()),
                Segment::new(1.0, scaled / 2.0, ease()),
            ],
            true,
        ),
        AnimationType::Wave => (
            vec![
                Segment::new(1.0, scaled / 4.0, TimingFunction::Sine),
                Segment::new(1.05 * intensity, scaled / 4.0, TimingFunction::Sine),
                Segment::new(0.95, scaled / 4.0, TimingFunction::Sine),
                Segment::new(1.0, scaled / 4.0, TimingFunction::Sine),
            ],
            true,
        ),
        AnimationType::Bounce => (
            vec![
                Segment::new(0.8, scaled / 4.0, TimingFunction::Bounce),
                Segment::new(1.2 * intensity, scaled / 2.0, TimingFunction::Bounce),
                Segment::new(1.0, scaled / 4.0, TimingFunction::Bounce),
            ],
            true,
        ),
        // One-shot: expand settles at its peak instead of cycling back
        AnimationType::Expand => (
            vec![Segment::new(1.2 * intensity, scaled, TimingFunction::Elastic)],
            false,
        ),
        AnimationType::Fade => (
            vec![
                Segment::new(0.6, scaled / 2.0, ease()),
                Segment::new(1.0, scaled / 2.0, ease()),
            ],
            true,
        ),
        // The style mapper reads rotate's 0→1 sweep as 0°→360°
        AnimationType::Rotate => (vec![Segment::new(1.0, scaled, ease())], true),
        AnimationType::Shake => {
            let sixth = scaled / 6.0;
            (
                vec![
                    Segment::new(-3.0 * intensity, sixth, TimingFunction::Bounce),
                    Segment::new(3.0 * intensity, sixth, TimingFunction::Bounce),
                    Segment::new(-2.0 * intensity, sixth, TimingFunction::Bounce),
                    Segment::new(2.0 * intensity, sixth, TimingFunction::Bounce),
                    Segment::new(-1.0 * intensity, sixth, TimingFunction::Bounce),
                    Segment::new(0.0, sixth, TimingFunction::Bounce),
                ],
                true,
            )
        }
    };

    AnimationPlan {
        segments,
        looping,
        native_driver: config.native_driver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn scaled_duration(base: f32, intensity: f32) -> f32 {
        base * (0.5 + intensity * 0.5)
    }

    #[test]
    fn test_durations_sum_to_scaled_total() {
        let config = PlanConfig::default();
        for kind in AnimationType::ALL {
            for step in 0..=10 {
                let intensity = step as f32 / 10.0;
                let plan = build_plan(kind, intensity, &config);
                let expected = scaled_duration(config.duration_ms, intensity);
                assert!(
                    (plan.total_duration_ms() - expected).abs() < EPSILON,
                    "{kind:?} at intensity {intensity}: {} != {expected}",
                    plan.total_duration_ms()
                );
            }
        }
    }

    #[test]
    fn test_resting_values() {
        let config = PlanConfig::default();
        for kind in AnimationType::ALL {
            let plan = build_plan(kind, 0.7, &config);
            let expected = match kind {
                AnimationType::Shake => 0.0,
                AnimationType::Expand => 1.2 * 0.7,
                _ => 1.0,
            };
            assert!(
                (plan.resting_value() - expected).abs() < EPSILON,
                "{kind:?} rests at {}, expected {expected}",
                plan.resting_value()
            );
        }
    }

    #[test]
    fn test_only_expand_is_one_shot() {
        let config = PlanConfig::default();
        for kind in AnimationType::ALL {
            let plan = build_plan(kind, 0.5, &config);
            assert_eq!(plan.looping(), kind != AnimationType::Expand, "{kind:?}");
        }
    }

    #[test]
    fn test_shake_segment_table() {
        let config = PlanConfig::new(600.0);
        let plan = build_plan(AnimationType::Shake, 1.0, &config);
        let targets: Vec<f32> = plan.segments().iter().map(|s| s.target).collect();
        assert_eq!(targets, vec![-3.0, 3.0, -2.0, 2.0, -1.0, 0.0]);
        for segment in plan.segments() {
            assert!((segment.duration_ms - 100.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_intensity_scales_magnitude_monotonically() {
        let config = PlanConfig::default();
        let scaled_kinds = [
            AnimationType::Pulse,
            AnimationType::Wave,
            AnimationType::Bounce,
            AnimationType::Expand,
            AnimationType::Shake,
        ];
        for kind in scaled_kinds {
            let weak = build_plan(kind, 0.0, &config);
            let strong = build_plan(kind, 1.0, &config);
            let peak = |plan: &AnimationPlan| {
                plan.segments()
                    .iter()
                    .map(|s| s.target.abs())
                    .fold(f32::MIN, f32::max)
            };
            assert!(
                peak(&strong) > peak(&weak),
                "{kind:?} peak should grow with intensity"
            );
        }
    }

    #[test]
    fn test_intensity_scales_duration() {
        let config = PlanConfig::new(1000.0);
        let weak = build_plan(AnimationType::Pulse, 0.0, &config);
        let strong = build_plan(AnimationType::Pulse, 1.0, &config);
        assert!((weak.total_duration_ms() - 500.0).abs() < EPSILON);
        assert!((strong.total_duration_ms() - 1000.0).abs() < EPSILON);
    }

    #[test]
    fn test_config_overrides_apply() {
        let config = PlanConfig::new(400.0).native_driver(false);
        let plan = build_plan(AnimationType::Fade, 1.0, &config);
        assert!((plan.total_duration_ms() - 400.0).abs() < EPSILON);
        assert!(!plan.native_driver());
    }
}
