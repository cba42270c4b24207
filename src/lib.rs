pub mod animation;
pub mod color;
pub mod emotion;
pub mod haptics;
pub mod message;
pub mod store;

pub mod prelude {
    pub use crate::animation::{
        build_plan, style_for, Animatable, AnimationPlan, PlanConfig, Player, PlayerState,
        Progress, Segment, StyleBinding, StyleProperty, StyleTransform, TimingFunction,
    };
    pub use crate::color::Color;
    pub use crate::emotion::{catalog, AnimationType, Emotion, VibrationPattern};
    pub use crate::haptics::{pulses_for, HapticDriver, HapticPulse, PulseStrength};
    pub use crate::message::{Conversation, Message, User};
    pub use crate::store::{
        CustomEmotionStore, FileBackend, MemoryBackend, StorageBackend, StorageError, StoreError,
        CUSTOM_EMOTIONS_KEY,
    };
}
