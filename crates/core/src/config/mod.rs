use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    keyframe::{GeneratorSettings, SafeEnvelope},
    sequence::{SelectionPolicy, TierSwitch},
    ChoreoError, Result, TierThresholds,
};

/// Top-level configuration for generation and playback. Every section is
/// optional in TOML and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: TierThresholds,
    /// Global amplitude factor, `(0, 2]`.
    pub scale: f32,
    pub selection: SelectionPolicy,
    pub tier_switch: TierSwitch,
    /// Multiplier applied to every template delta before tier amplitude.
    pub sharpness: f32,
    pub envelope: SafeEnvelope,
    pub playback: PlaybackConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            scale: 1.0,
            selection: SelectionPolicy::default(),
            tier_switch: TierSwitch::default(),
            sharpness: 1.5,
            envelope: SafeEnvelope::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if !(self.scale > 0.0 && self.scale <= 2.0) {
            return Err(ChoreoError::InvalidConfig(format!(
                "scale must be in (0, 2], got {}",
                self.scale
            )));
        }
        if !(self.sharpness.is_finite() && self.sharpness > 0.0) {
            return Err(ChoreoError::InvalidConfig(format!(
                "sharpness must be positive, got {}",
                self.sharpness
            )));
        }
        self.envelope.validate()?;
        self.playback.validate()
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            scale: self.scale,
            sharpness: self.sharpness,
            envelope: self.envelope,
        }
    }
}

/// Timing for the real-time playback path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pose commands per second sent to the actuator.
    pub output_rate_hz: f64,
    /// Delay between starting audio and the first pose, absorbing actuator
    /// latency.
    pub start_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            output_rate_hz: 50.0,
            start_delay_ms: 0,
        }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.output_rate_hz.is_finite() && self.output_rate_hz > 0.0) {
            return Err(ChoreoError::InvalidConfig(format!(
                "playback output rate must be positive, got {}",
                self.output_rate_hz
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.selection, SelectionPolicy::RoundRobin);
        assert_eq!(config.playback.output_rate_hz, 50.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            scale = 0.5
            selection = { seeded = 42 }
            tier_switch = "immediate"

            [thresholds]
            high = 0.8

            [envelope.pitch]
            min = -20.0
            max = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(config.scale, 0.5);
        assert_eq!(config.selection, SelectionPolicy::Seeded(42));
        assert_eq!(config.tier_switch, TierSwitch::Immediate);
        assert_eq!(config.thresholds.medium, 0.33);
        assert_eq!(config.thresholds.high, 0.8);
        assert_eq!(config.envelope.pitch.max, 20.0);
        assert_eq!(config.envelope.x.max, 60.0);
        assert_eq!(config.sharpness, 1.5);
    }

    #[test]
    fn rejects_out_of_range_scale() {
        for scale in ["0.0", "2.5", "-1.0"] {
            let source = format!("scale = {scale}");
            match EngineConfig::from_toml_str(&source) {
                Err(ChoreoError::InvalidConfig(_)) => {}
                other => panic!("scale {scale} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_bad_playback_rate() {
        let mut config = EngineConfig::default();
        config.playback.output_rate_hz = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reports_toml_syntax_errors() {
        assert!(matches!(
            EngineConfig::from_toml_str("scale = = 1"),
            Err(ChoreoError::Toml(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sharpness = 1.0").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.sharpness, 1.0);
        assert_eq!(config.generator_settings().sharpness, 1.0);
    }
}
