use crate::energy::EnergyTier;

/// Result alias that carries the custom [`ChoreoError`] type.
pub type Result<T> = std::result::Result<T, ChoreoError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum ChoreoError {
    /// Free-form failure, mostly poisoned locks in the playback layer.
    #[error("{0}")]
    Message(String),
    /// The incoming beat list cannot be turned into keyframes. Raised before any
    /// keyframe is emitted.
    #[error("malformed feature stream at beat {index}: {reason}")]
    MalformedFeatureStream { index: usize, reason: String },
    /// A tier without enough variations to honour the anti-repetition rule.
    #[error("catalog tier {tier} has {count} variation(s), at least 2 are required")]
    EmptyCatalogTier { tier: EnergyTier, count: usize },
    #[error("catalog template {tier}/{letter} is invalid: {reason}")]
    InvalidTemplate {
        tier: EnergyTier,
        letter: char,
        reason: String,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A previously exported file that cannot be re-imported.
    #[error("cannot replay line {line}: {reason}")]
    Replay { line: usize, reason: String },
    #[error("actuator unavailable: {0}")]
    ActuatorUnavailable(String),
    #[error("playback cancelled")]
    PlaybackCancelled,
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

impl ChoreoError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFeatureStream {
            index,
            reason: reason.into(),
        }
    }

    pub fn replay(line: usize, reason: impl Into<String>) -> Self {
        Self::Replay {
            line,
            reason: reason.into(),
        }
    }

    /// Playback statuses are reported apart from generation failures.
    pub fn is_playback_status(&self) -> bool {
        matches!(
            self,
            Self::ActuatorUnavailable(_) | Self::PlaybackCancelled
        )
    }
}

impl From<&str> for ChoreoError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ChoreoError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
