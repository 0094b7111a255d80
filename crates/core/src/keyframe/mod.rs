use std::{f32::consts::PI, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{PoseDelta, VariationTemplate, CYCLE_LENGTH},
    energy::{BodySwing, HalfBeatMotion, HalfBeatPolicy, HalfBeatSwing},
    sequence::SequenceState,
    Beat, BeatKind, ChoreoError, EnergyTier, Result,
};

/// Onset strength above which a beat is accented.
const ACCENT_ONSET: f32 = 0.7;
const ACCENT_GAIN: f32 = 1.2;
/// Scale applied to a half-beat on a template that defines no half-beat slot.
const MISSING_HALF_SCALE: f32 = 0.5;

/// Absolute head pose plus body rotation. Centimetres and degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    #[serde(rename = "x_cm")]
    pub x: f32,
    #[serde(rename = "y_cm")]
    pub y: f32,
    #[serde(rename = "z_cm")]
    pub z: f32,
    #[serde(rename = "roll_deg")]
    pub roll: f32,
    #[serde(rename = "pitch_deg")]
    pub pitch: f32,
    #[serde(rename = "yaw_deg")]
    pub yaw: f32,
    #[serde(rename = "body_yaw_deg")]
    pub body_yaw: f32,
}

impl Pose {
    /// Neutral rest pose every delta is relative to.
    pub const NEUTRAL: Pose = Pose {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
        body_yaw: 0.0,
    };

    pub fn offset(&self, delta: &PoseDelta) -> Pose {
        Pose {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
            z: self.z + delta.dz,
            roll: self.roll + delta.droll,
            pitch: self.pitch + delta.dpitch,
            yaw: self.yaw + delta.dyaw,
            body_yaw: self.body_yaw + delta.dbody_yaw,
        }
    }

    pub fn channels(&self) -> [f32; 7] {
        [
            self.x,
            self.y,
            self.z,
            self.roll,
            self.pitch,
            self.yaw,
            self.body_yaw,
        ]
    }

    pub fn from_channels(channels: [f32; 7]) -> Self {
        let [x, y, z, roll, pitch, yaw, body_yaw] = channels;
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
            body_yaw,
        }
    }

    /// Per-channel linear blend, `t` in `[0, 1]`.
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        let a = self.channels();
        let b = other.channels();
        Pose::from_channels(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t))
    }

    pub fn max_abs_diff(&self, other: &Pose) -> f32 {
        let a = self.channels();
        let b = other.channels();
        (0..7).map(|i| (a[i] - b[i]).abs()).fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimit {
    pub min: f32,
    pub max: f32,
}

impl AxisLimit {
    pub const fn symmetric(limit: f32) -> Self {
        Self {
            min: -limit,
            max: limit,
        }
    }
}

/// Hard physical limits. Poses outside are clipped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeEnvelope {
    pub x: AxisLimit,
    pub y: AxisLimit,
    pub z: AxisLimit,
    pub roll: AxisLimit,
    pub pitch: AxisLimit,
    pub yaw: AxisLimit,
    pub body_yaw: AxisLimit,
}

impl Default for SafeEnvelope {
    fn default() -> Self {
        Self {
            x: AxisLimit::symmetric(60.0),
            y: AxisLimit::symmetric(60.0),
            z: AxisLimit::symmetric(30.0),
            roll: AxisLimit::symmetric(90.0),
            pitch: AxisLimit::symmetric(90.0),
            yaw: AxisLimit::symmetric(180.0),
            body_yaw: AxisLimit::symmetric(180.0),
        }
    }
}

impl SafeEnvelope {
    const AXES: [&'static str; 7] = ["x", "y", "z", "roll", "pitch", "yaw", "body_yaw"];

    fn limits(&self) -> [AxisLimit; 7] {
        [
            self.x,
            self.y,
            self.z,
            self.roll,
            self.pitch,
            self.yaw,
            self.body_yaw,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, limit) in Self::AXES.iter().zip(self.limits()) {
            if !(limit.min <= limit.max) {
                return Err(ChoreoError::InvalidConfig(format!(
                    "envelope axis `{axis}` has min {} above max {}",
                    limit.min, limit.max
                )));
            }
        }
        Ok(())
    }

    /// Clips the pose into the envelope, returning the names of clipped axes.
    pub fn clamp(&self, pose: &Pose) -> (Pose, Vec<&'static str>) {
        let mut channels = pose.channels();
        let mut clipped = Vec::new();
        for (index, limit) in self.limits().iter().enumerate() {
            let value = channels[index];
            let bounded = value.clamp(limit.min, limit.max);
            if bounded != value {
                clipped.push(Self::AXES[index]);
                channels[index] = bounded;
            }
        }
        (Pose::from_channels(channels), clipped)
    }
}

/// Kind of movement a keyframe represents. `HalfBeatHold` keyframes keep their
/// pose until the next keyframe instead of gliding towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    MainBeat,
    HalfBeat,
    HalfBeatHold,
}

impl MoveType {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveType::MainBeat => "main_beat",
            MoveType::HalfBeat => "half_beat",
            MoveType::HalfBeatHold => "half_beat_hold",
        }
    }

    pub fn is_hold(self) -> bool {
        self == MoveType::HalfBeatHold
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveType {
    type Err = ChoreoError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "main_beat" => Ok(MoveType::MainBeat),
            "half_beat" => Ok(MoveType::HalfBeat),
            "half_beat_hold" => Ok(MoveType::HalfBeatHold),
            other => Err(ChoreoError::msg(format!("unknown move type `{other}`"))),
        }
    }
}

/// One fully resolved pose record at a beat's timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame_number: u32,
    pub timestamp: f64,
    pub move_type: MoveType,
    pub energy_level: f32,
    pub sequence_type: EnergyTier,
    pub sequence_variation: char,
    pub sequence_position: usize,
    pub sequence_repetition: u32,
    pub head_movement_name: String,
    #[serde(flatten)]
    pub pose: Pose,
}

/// Scaling and safety settings shared by every keyframe of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub scale: f32,
    pub sharpness: f32,
    pub envelope: SafeEnvelope,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            sharpness: 1.5,
            envelope: SafeEnvelope::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct ResolvedSlot {
    name: String,
    delta: PoseDelta,
}

/// Turns `(beat, sequence state, template)` into keyframes. Holds the per-run
/// counters: frame numbering, the last main-beat delta of the cycle, and the
/// body swing phase.
#[derive(Debug, Clone)]
pub struct KeyframeGenerator {
    settings: GeneratorSettings,
    next_frame: u32,
    last_main: Option<ResolvedSlot>,
    swing_beats: u64,
    body_yaw: f32,
    clamped_frames: usize,
}

impl KeyframeGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
            next_frame: 1,
            last_main: None,
            swing_beats: 0,
            body_yaw: 0.0,
            clamped_frames: 0,
        }
    }

    /// Keyframes whose pose had to be clipped into the envelope.
    pub fn clamped_frames(&self) -> usize {
        self.clamped_frames
    }

    pub fn generate(
        &mut self,
        beat: &Beat,
        state: &SequenceState,
        template: &VariationTemplate,
    ) -> Keyframe {
        let profile = state.tier.profile();
        if state.starts_cycle() {
            self.last_main = None;
        }

        let resolved = self.resolve(beat, state.position, template, profile.half_beat);

        let energy = beat.energy.clamp(0.0, 1.0);
        let accent = if beat.onset_strength > ACCENT_ONSET {
            ACCENT_GAIN
        } else {
            1.0
        };
        let amplitude = profile.amplitude * self.settings.sharpness * self.settings.scale * accent;

        let mut pose = Pose::NEUTRAL.offset(&resolved.delta.scaled(amplitude));
        pose.body_yaw += self.swing(beat.kind, energy, profile.body_swing) * self.settings.scale;

        let frame_number = self.next_frame;
        self.next_frame += 1;

        let (pose, clipped) = self.settings.envelope.clamp(&pose);
        if !clipped.is_empty() {
            self.clamped_frames += 1;
            tracing::warn!(
                frame = frame_number,
                axes = ?clipped,
                "pose out of envelope, clamped"
            );
        }

        let move_type = match (beat.kind, profile.half_beat_motion) {
            (BeatKind::Main, _) => MoveType::MainBeat,
            (BeatKind::Half, HalfBeatMotion::Glide) => MoveType::HalfBeat,
            (BeatKind::Half, HalfBeatMotion::Hold) => MoveType::HalfBeatHold,
        };

        Keyframe {
            frame_number,
            timestamp: beat.timestamp,
            move_type,
            energy_level: energy,
            sequence_type: state.active.tier,
            sequence_variation: state.active.letter,
            sequence_position: state.position,
            sequence_repetition: state.repetition_count,
            head_movement_name: format!(
                "{} ({} Beat{}/{})",
                resolved.name,
                template.display_label(),
                state.position + 1,
                CYCLE_LENGTH
            ),
            pose,
        }
    }

    fn resolve(
        &mut self,
        beat: &Beat,
        position: usize,
        template: &VariationTemplate,
        policy: HalfBeatPolicy,
    ) -> ResolvedSlot {
        let slot = template.slot(position);
        let from_index = |index: usize| {
            let slot = template.slot(index);
            ResolvedSlot {
                name: slot.name.clone(),
                delta: slot.delta,
            }
        };
        let softened = |base: &ResolvedSlot, factor: f32| ResolvedSlot {
            name: format!("{} (soft)", base.name),
            delta: base.delta.scaled(factor),
        };

        match beat.kind {
            BeatKind::Main => {
                let index = if slot.kind == BeatKind::Main {
                    position
                } else {
                    template.preceding_main(position).unwrap_or(position)
                };
                let resolved = from_index(index);
                self.last_main = Some(resolved.clone());
                resolved
            }
            BeatKind::Half => match policy {
                HalfBeatPolicy::Soften { factor } => {
                    let base = self
                        .last_main
                        .clone()
                        .unwrap_or_else(|| from_index(position));
                    softened(&base, factor)
                }
                HalfBeatPolicy::Independent => {
                    if slot.kind == BeatKind::Half {
                        from_index(position)
                    } else {
                        match template.following_half(position) {
                            Some(index) => from_index(index),
                            None => softened(&from_index(position), MISSING_HALF_SCALE),
                        }
                    }
                }
            },
        }
    }

    fn swing(&mut self, kind: BeatKind, energy: f32, style: BodySwing) -> f32 {
        let main = kind == BeatKind::Main;
        match style {
            BodySwing::Sweep { max_deg } => {
                if main {
                    self.swing_beats += 1;
                }
                let half_beats = self.swing_beats * 2 + u64::from(!main);
                let phase = (half_beats % 4) as f32 / 4.0;
                self.body_yaw = -max_deg * (phase * PI).cos();
            }
            BodySwing::Alternate {
                base_deg,
                floor,
                half_beat,
            } => {
                if main {
                    let swing = base_deg * (floor + (1.0 - floor) * energy);
                    self.body_yaw = if self.swing_beats % 2 == 0 {
                        swing
                    } else {
                        -swing
                    };
                    self.swing_beats += 1;
                } else if half_beat == HalfBeatSwing::Center {
                    self.body_yaw = 0.0;
                }
            }
        }
        self.body_yaw
    }
}
