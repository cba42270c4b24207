//! Mapping an animation kind to the visual property its progress drives.
//!
//! The mapping is a pure lookup, deliberately separate from the timing plan:
//! the same progress handle can be re-bound to a different property without
//! rebuilding the plan.

use super::Progress;
use crate::emotion::AnimationType;

/// The visual channel a progress value drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProperty {
    /// Uniform scale transform
    Scale,
    /// Vertical-only scale
    ScaleY,
    /// Alpha channel
    Opacity,
    /// Rotation, with progress 0.0–1.0 mapped to 0°–360°
    Rotation,
    /// Horizontal offset in logical pixels
    TranslateX,
}

/// Which property the given animation kind drives.
pub fn style_for(kind: AnimationType) -> StyleProperty {
    match kind {
        AnimationType::Pulse | AnimationType::Expand | AnimationType::Bounce => {
            StyleProperty::Scale
        }
        AnimationType::Wave => StyleProperty::ScaleY,
        AnimationType::Fade => StyleProperty::Opacity,
        AnimationType::Rotate => StyleProperty::Rotation,
        AnimationType::Shake => StyleProperty::TranslateX,
    }
}

/// A progress handle paired with the property it drives.
#[derive(Clone, Debug)]
pub struct StyleBinding {
    property: StyleProperty,
    progress: Progress,
}

impl StyleBinding {
    pub fn new(kind: AnimationType, progress: &Progress) -> Self {
        Self {
            property: style_for(kind),
            progress: progress.clone(),
        }
    }

    pub fn property(&self) -> StyleProperty {
        self.property
    }

    /// The concrete transform for the handle's current value. Reads the
    /// handle without mutating it.
    pub fn resolve(&self) -> StyleTransform {
        let value = self.progress.get();
        match self.property {
            StyleProperty::Scale => StyleTransform::Scale(value),
            StyleProperty::ScaleY => StyleTransform::ScaleY(value),
            StyleProperty::Opacity => StyleTransform::Opacity(value),
            StyleProperty::Rotation => StyleTransform::Rotate {
                degrees: value * 360.0,
            },
            StyleProperty::TranslateX => StyleTransform::TranslateX(value),
        }
    }
}

/// A resolved visual transform, ready for whatever renders the bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleTransform {
    Scale(f32),
    ScaleY(f32),
    Opacity(f32),
    Rotate { degrees: f32 },
    TranslateX(f32),
}
