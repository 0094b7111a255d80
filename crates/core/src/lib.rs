//! Core library for the Music Choreographer.
//!
//! Turns a beat/energy feature stream into timestamped robot pose keyframes
//! and plays them back. Modules follow the data flow: features are classified
//! into energy tiers, a sequence machine walks 8-beat variations from the
//! catalog, the keyframe generator resolves absolute poses, and the timeline
//! interpolates them for export or real-time playback.

pub mod actuator;
pub mod catalog;
pub mod config;
pub mod energy;
pub mod engine;
pub mod error;
pub mod features;
pub mod keyframe;
pub mod playback;
pub mod record;
pub mod sequence;
pub mod timeline;

pub use actuator::{Actuator, RecordingActuator, TracingActuator};
pub use catalog::{VariationCatalog, VariationId, VariationTemplate, CATALOG_VERSION, CYCLE_LENGTH};
pub use config::{EngineConfig, PlaybackConfig};
pub use energy::{EnergyTier, HalfBeatPolicy, TierProfile, TierThresholds};
pub use engine::{Choreographer, Choreography, DanceSession, GenerationReport};
pub use error::{ChoreoError, Result};
pub use features::{estimate_tempo, Beat, BeatKind, FeatureStream};
pub use keyframe::{Keyframe, MoveType, Pose, SafeEnvelope};
pub use playback::{AudioOutput, PlayRequest, PlaybackOutcome, Player, SessionHandle, SilentAudio};
pub use record::ChoreographyDocument;
pub use sequence::{SelectionPolicy, SequenceState, TierSwitch};
pub use timeline::{OutputRate, PlaybackClock, Trajectory, TrajectorySample};
