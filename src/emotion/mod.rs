//! The emotion data model.
//!
//! An [`Emotion`] bundles everything a message carries instead of plain text:
//! a color pair, an animation kind, a haptic pattern, an intensity, and an
//! optional emoji glyph. Records are plain values; cloning one is always a
//! full, independent copy.

pub mod catalog;

use crate::color::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an emotion animates when displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    Pulse,
    Wave,
    Bounce,
    Expand,
    Fade,
    Rotate,
    Shake,
}

impl AnimationType {
    pub const ALL: [AnimationType; 7] = [
        AnimationType::Pulse,
        AnimationType::Wave,
        AnimationType::Bounce,
        AnimationType::Expand,
        AnimationType::Fade,
        AnimationType::Rotate,
        AnimationType::Shake,
    ];

    /// The lowercase slug used in persisted JSON.
    pub fn slug(&self) -> &'static str {
        match self {
            AnimationType::Pulse => "pulse",
            AnimationType::Wave => "wave",
            AnimationType::Bounce => "bounce",
            AnimationType::Expand => "expand",
            AnimationType::Fade => "fade",
            AnimationType::Rotate => "rotate",
            AnimationType::Shake => "shake",
        }
    }

    /// Parse a slug leniently. Unknown slugs return `None`; callers that want
    /// the engine's fallback behavior can combine this with `unwrap_or_default`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.slug() == slug)
    }
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Pulse
    }
}

/// The tactile pattern played when a message with this emotion arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VibrationPattern {
    Quick,
    Long,
    Gentle,
    Intense,
    Rhythmic,
    None,
}

impl VibrationPattern {
    pub const ALL: [VibrationPattern; 6] = [
        VibrationPattern::Quick,
        VibrationPattern::Long,
        VibrationPattern::Gentle,
        VibrationPattern::Intense,
        VibrationPattern::Rhythmic,
        VibrationPattern::None,
    ];
}

impl Default for VibrationPattern {
    fn default() -> Self {
        VibrationPattern::Gentle
    }
}

/// A named, colored, animated, and haptically-patterned value attached to a
/// message.
///
/// `intensity` is a normalized 0.0–1.0 scalar by convention. The type does not
/// clamp it; UI controls keep it in range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emotion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_color: Option<Color>,
    pub intensity: f32,
    pub animation_type: AnimationType,
    pub vibration_pattern: VibrationPattern,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emoji: Option<String>,
}

impl Emotion {
    /// Create a user-authored emotion with a fresh `custom_`-prefixed id and
    /// the editor's defaults. Pure construction; nothing is persisted.
    ///
    /// The id suffix is the first 8 hex digits of a v4 UUID. Collisions are
    /// negligible but not impossible; the store's upsert keys on id, so a
    /// colliding id would overwrite on save.
    pub fn custom(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        let name = name.into();
        let uuid = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("custom_{}", &uuid[..8]),
            description: format!("Custom emotion: {name}"),
            name,
            color: Color::from_hex(0xFFD700),
            secondary_color: Some(Color::from_hex(0xFFA500)),
            intensity: 0.8,
            animation_type: AnimationType::Pulse,
            vibration_pattern: VibrationPattern::Gentle,
            emoji: Some(emoji.into()),
        }
    }

    /// Set the base color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the accent color
    pub fn secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    /// Set the animation intensity
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the animation kind
    pub fn animation(mut self, kind: AnimationType) -> Self {
        self.animation_type = kind;
        self
    }

    /// Set the vibration pattern
    pub fn vibration(mut self, pattern: VibrationPattern) -> Self {
        self.vibration_pattern = pattern;
        self
    }

    /// Set the display description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
