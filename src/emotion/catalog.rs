//! The built-in emotion set and the editor color palette.

use super::{AnimationType, Emotion, VibrationPattern};
use crate::color::Color;

fn predefined(
    id: &str,
    name: &str,
    description: &str,
    color: u32,
    secondary: u32,
    intensity: f32,
    animation: AnimationType,
    vibration: VibrationPattern,
    emoji: &str,
) -> Emotion {
    Emotion {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: Color::from_hex(color),
        secondary_color: Some(Color::from_hex(secondary)),
        intensity,
        animation_type: animation,
        vibration_pattern: vibration,
        emoji: Some(emoji.to_string()),
    }
}

/// The ten built-in emotions, in picker order.
pub fn predefined_emotions() -> Vec<Emotion> {
    use AnimationType::*;
    use VibrationPattern::*;

    vec![
        predefined(
            "joy",
            "Joy",
            "A bright, contented happiness",
            0xFFD700,
            0xFFA500,
            0.8,
            Bounce,
            Rhythmic,
            "😊",
        ),
        predefined(
            "sadness",
            "Sadness",
            "A sense of loss or sorrow",
            0x1E90FF,
            0x4169E1,
            0.6,
            Wave,
            Gentle,
            "😢",
        ),
        predefined(
            "anger",
            "Anger",
            "Frustration boiling over",
            0xFF4500,
            0xDC143C,
            0.9,
            Shake,
            Intense,
            "😠",
        ),
        predefined(
            "surprise",
            "Surprise",
            "A reaction to the unexpected",
            0x9932CC,
            0x8A2BE2,
            0.85,
            Expand,
            Quick,
            "😲",
        ),
        predefined(
            "fear",
            "Fear",
            "A response to danger or threat",
            0x800000,
            0x4B0082,
            0.7,
            Pulse,
            Rhythmic,
            "😨",
        ),
        predefined(
            "disgust",
            "Disgust",
            "An unpleasant aversion",
            0x006400,
            0x556B2F,
            0.6,
            Rotate,
            Gentle,
            "🤢",
        ),
        predefined(
            "love",
            "Love",
            "Deep affection and care",
            0xFF69B4,
            0xFF1493,
            0.9,
            Pulse,
            Gentle,
            "❤️",
        ),
        predefined(
            "calm",
            "Calm",
            "A quiet, peaceful feeling",
            0x00CED1,
            0x20B2AA,
            0.3,
            Wave,
            Gentle,
            "😌",
        ),
        predefined(
            "excitement",
            "Excitement",
            "An elevated, energized mood",
            0xFF6347,
            0xFF7F50,
            0.85,
            Bounce,
            Rhythmic,
            "🤩",
        ),
        predefined(
            "gratitude",
            "Gratitude",
            "Thankfulness toward someone",
            0x9ACD32,
            0x7CFC00,
            0.7,
            Expand,
            Gentle,
            "🙏",
        ),
    ]
}

/// Look up a built-in emotion by its id slug.
pub fn emotion_by_id(id: &str) -> Option<Emotion> {
    predefined_emotions().into_iter().find(|e| e.id == id)
}

/// Look up a built-in emotion by display name.
pub fn emotion_by_name(name: &str) -> Option<Emotion> {
    predefined_emotions().into_iter().find(|e| e.name == name)
}

/// Swatches offered by the custom-emotion editor: 16 bright, 16 dark,
/// 16 pastel.
pub const COLOR_PALETTE: [u32; 48] = [
    // Bright
    0xFF5252, 0xFF4081, 0xE040FB, 0x7C4DFF, 0x536DFE, 0x448AFF, 0x40C4FF, 0x18FFFF, 0x64FFDA,
    0x69F0AE, 0xB2FF59, 0xEEFF41, 0xFFFF00, 0xFFD740, 0xFFAB40, 0xFF6E40,
    // Dark
    0xD32F2F, 0xC2185B, 0x7B1FA2, 0x512DA8, 0x303F9F, 0x1976D2, 0x0288D1, 0x0097A7, 0x00796B,
    0x388E3C, 0x689F38, 0xAFB42B, 0xFBC02D, 0xFFA000, 0xF57C00, 0xE64A19,
    // Pastel
    0xFFCDD2, 0xF8BBD0, 0xE1BEE7, 0xD1C4E9, 0xC5CAE9, 0xBBDEFB, 0xB3E5FC, 0xB2EBF2, 0xB2DFDB,
    0xC8E6C9, 0xDCEDC8, 0xF0F4C3, 0xFFF9C4, 0xFFECB3, 0xFFE0B2, 0xFFCCBC,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_emotions() {
        assert_eq!(predefined_emotions().len(), 10);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let emotions = predefined_emotions();
        for (i, a) in emotions.iter().enumerate() {
            for b in &emotions[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let joy = emotion_by_id("joy").unwrap();
        assert_eq!(joy.name, "Joy");
        assert_eq!(joy.animation_type, AnimationType::Bounce);
        assert_eq!(joy.vibration_pattern, VibrationPattern::Rhythmic);
        assert_eq!(joy.color, Color::from_hex(0xFFD700));
        assert!(emotion_by_id("nostalgia").is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(emotion_by_name("Calm").unwrap().id, "calm");
        assert!(emotion_by_name("calm").is_none());
    }

    #[test]
    fn test_palette_size() {
        assert_eq!(COLOR_PALETTE.len(), 48);
    }
}
