use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ChoreoError, Result};

/// Discrete energy classification driving amplitude and template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyTier {
    #[serde(rename = "low_energy")]
    Low,
    #[serde(rename = "medium_energy")]
    Medium,
    #[serde(rename = "high_energy")]
    High,
}

impl EnergyTier {
    pub const ALL: [EnergyTier; 3] = [EnergyTier::Low, EnergyTier::Medium, EnergyTier::High];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyTier::Low => "low_energy",
            EnergyTier::Medium => "medium_energy",
            EnergyTier::High => "high_energy",
        }
    }

    /// Movement profile used by the keyframe generator and the interpolator.
    pub fn profile(self) -> &'static TierProfile {
        match self {
            EnergyTier::Low => &LOW_PROFILE,
            EnergyTier::Medium => &MEDIUM_PROFILE,
            EnergyTier::High => &HIGH_PROFILE,
        }
    }
}

impl fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyTier {
    type Err = ChoreoError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "low_energy" | "low" | "LOW" => Ok(EnergyTier::Low),
            "medium_energy" | "medium" | "MEDIUM" => Ok(EnergyTier::Medium),
            "high_energy" | "high" | "HIGH" => Ok(EnergyTier::High),
            other => Err(ChoreoError::msg(format!("unknown energy tier `{other}`"))),
        }
    }
}

/// Lower edges of the medium and high tiers. Each edge is inclusive, so the
/// three tiers partition `[0, 1]` without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub medium: f32,
    pub high: f32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium: 0.33,
            high: 0.66,
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> Result<()> {
        let ordered = self.medium > 0.0 && self.medium < self.high && self.high <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(ChoreoError::InvalidConfig(format!(
                "tier thresholds must satisfy 0 < medium < high <= 1, got medium={} high={}",
                self.medium, self.high
            )))
        }
    }

    /// Maps a beat energy onto a tier. Out-of-range input is clamped first and
    /// NaN is treated as silence, so this never fails.
    pub fn classify(&self, energy: f32) -> EnergyTier {
        let energy = if energy.is_nan() {
            0.0
        } else {
            energy.clamp(0.0, 1.0)
        };

        if energy >= self.high {
            EnergyTier::High
        } else if energy >= self.medium {
            EnergyTier::Medium
        } else {
            EnergyTier::Low
        }
    }
}

/// How a half-beat picks its pose delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfBeatPolicy {
    /// Reuse the last main-beat delta of the cycle, scaled down.
    Soften { factor: f32 },
    /// Use the template's own half-beat slots.
    Independent,
}

/// Motion law between a half-beat keyframe and the next main beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfBeatMotion {
    Glide,
    Hold,
}

/// Body yaw behaviour on half-beats for the alternating swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfBeatSwing {
    Center,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySwing {
    /// Continuous cosine sweep from `-max_deg` to `+max_deg` over two beats.
    Sweep { max_deg: f32 },
    /// Main beats alternate sides with `base_deg * (floor + (1 - floor) * energy)`.
    Alternate {
        base_deg: f32,
        floor: f32,
        half_beat: HalfBeatSwing,
    },
}

/// Per-tier movement table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub amplitude: f32,
    pub half_beat: HalfBeatPolicy,
    pub half_beat_motion: HalfBeatMotion,
    pub body_swing: BodySwing,
}

static LOW_PROFILE: TierProfile = TierProfile {
    amplitude: 0.8,
    half_beat: HalfBeatPolicy::Soften { factor: 0.5 },
    half_beat_motion: HalfBeatMotion::Glide,
    body_swing: BodySwing::Sweep { max_deg: 15.0 },
};

static MEDIUM_PROFILE: TierProfile = TierProfile {
    amplitude: 1.0,
    half_beat: HalfBeatPolicy::Independent,
    half_beat_motion: HalfBeatMotion::Glide,
    body_swing: BodySwing::Alternate {
        base_deg: 20.0,
        floor: 0.4,
        half_beat: HalfBeatSwing::Center,
    },
};

static HIGH_PROFILE: TierProfile = TierProfile {
    amplitude: 1.25,
    half_beat: HalfBeatPolicy::Independent,
    half_beat_motion: HalfBeatMotion::Hold,
    body_swing: BodySwing::Alternate {
        base_deg: 30.0,
        floor: 0.6,
        half_beat: HalfBeatSwing::Hold,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_inclusive_on_the_lower_edge() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.classify(0.0), EnergyTier::Low);
        assert_eq!(thresholds.classify(0.3299), EnergyTier::Low);
        assert_eq!(thresholds.classify(0.33), EnergyTier::Medium);
        assert_eq!(thresholds.classify(0.6599), EnergyTier::Medium);
        assert_eq!(thresholds.classify(0.66), EnergyTier::High);
        assert_eq!(thresholds.classify(1.0), EnergyTier::High);
    }

    #[test]
    fn clamps_malformed_energy() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.classify(-4.0), EnergyTier::Low);
        assert_eq!(thresholds.classify(7.5), EnergyTier::High);
        assert_eq!(thresholds.classify(f32::NAN), EnergyTier::Low);
        assert_eq!(thresholds.classify(f32::INFINITY), EnergyTier::High);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let thresholds = TierThresholds {
            medium: 0.7,
            high: 0.4,
        };
        assert!(thresholds.validate().is_err());
        assert!(TierThresholds::default().validate().is_ok());
    }

    #[test]
    fn amplitude_is_monotonic_in_tier() {
        let amplitudes: Vec<f32> = EnergyTier::ALL
            .iter()
            .map(|tier| tier.profile().amplitude)
            .collect();
        assert!(amplitudes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn parses_serialized_names() {
        for tier in EnergyTier::ALL {
            assert_eq!(tier.as_str().parse::<EnergyTier>().unwrap(), tier);
        }
        assert!("loud".parse::<EnergyTier>().is_err());
    }

    proptest! {
        #[test]
        fn exactly_one_tier_holds(energy in 0.0f32..=1.0) {
            let thresholds = TierThresholds::default();
            let tier = thresholds.classify(energy);
            let matches = [
                energy < thresholds.medium,
                energy >= thresholds.medium && energy < thresholds.high,
                energy >= thresholds.high,
            ];
            prop_assert_eq!(matches.iter().filter(|hit| **hit).count(), 1);
            let index = EnergyTier::ALL.iter().position(|t| *t == tier).unwrap();
            prop_assert!(matches[index]);
        }
    }
}
