//! Vibration-pattern to haptic-pulse mapping.
//!
//! The core never fires haptics itself; the app wires a message's vibration
//! pattern to the platform's haptic engine at receipt time through a
//! [`HapticDriver`]. The mapping here is pure data so it can be tested and
//! reused on platforms with very different haptic APIs.

use crate::emotion::VibrationPattern;

/// How hard a single pulse hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseStrength {
    Light,
    Medium,
    Heavy,
    /// A notification-style pulse, stronger than a plain impact
    Alert,
}

/// One tactile pulse, fired `delay_ms` after the pattern starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HapticPulse {
    pub strength: PulseStrength,
    pub delay_ms: u32,
}

impl HapticPulse {
    const fn at(strength: PulseStrength, delay_ms: u32) -> Self {
        Self { strength, delay_ms }
    }
}

/// The pulse sequence for a vibration pattern.
pub fn pulses_for(pattern: VibrationPattern) -> Vec<HapticPulse> {
    match pattern {
        VibrationPattern::Quick => vec![HapticPulse::at(PulseStrength::Light, 0)],
        VibrationPattern::Long => vec![HapticPulse::at(PulseStrength::Heavy, 0)],
        VibrationPattern::Intense => vec![HapticPulse::at(PulseStrength::Alert, 0)],
        VibrationPattern::Rhythmic => vec![
            HapticPulse::at(PulseStrength::Medium, 0),
            HapticPulse::at(PulseStrength::Light, 150),
        ],
        VibrationPattern::Gentle => vec![HapticPulse::at(PulseStrength::Light, 0)],
        VibrationPattern::None => Vec::new(),
    }
}

/// Platform seam for actually producing vibration.
pub trait HapticDriver {
    fn pulse(&mut self, pulse: HapticPulse);
}

/// Feed a pattern's pulses to a driver. Delay scheduling is the driver's
/// responsibility; pulses arrive in order with their offsets attached.
pub fn play_pattern<D: HapticDriver>(driver: &mut D, pattern: VibrationPattern) {
    for pulse in pulses_for(pattern) {
        driver.pulse(pulse);
    }
}
