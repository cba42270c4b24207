mod animatable;
mod plan;
mod player;
mod progress;
mod style;
mod timing;

pub use animatable::Animatable;
pub use plan::{build_plan, AnimationPlan, Segment};
pub use player::{Player, PlayerState};
pub use progress::Progress;
pub use style::{style_for, StyleBinding, StyleProperty, StyleTransform};
pub use timing::TimingFunction;

/// Overrides for one animation cycle.
///
/// `duration_ms` is the base cycle length before intensity scaling; the actual
/// cycle runs for `duration_ms * (0.5 + intensity * 0.5)`. `easing` applies to
/// the kinds that do not mandate their own curve. `native_driver` is a hint
/// that playback may run off the UI thread; the engine only carries it through.
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// Base duration of one cycle in milliseconds
    pub duration_ms: f32,
    /// Easing curve for kinds without a fixed one
    pub easing: TimingFunction,
    /// Whether playback may run off the UI thread
    pub native_driver: bool,
}

impl PlanConfig {
    /// Create a config with the given base duration
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Set the base cycle duration
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the default easing curve
    pub fn easing(mut self, easing: TimingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set the off-thread playback hint
    pub fn native_driver(mut self, native_driver: bool) -> Self {
        self.native_driver = native_driver;
        self
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            easing: TimingFunction::EaseInOut,
            native_driver: true,
        }
    }
}
