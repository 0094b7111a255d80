use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::{
    keyframe::{Keyframe, MoveType, Pose},
    ChoreoError, Result,
};

/// Shared start reference for audio and actuator output.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackClock {
    origin: Instant,
}

impl PlaybackClock {
    pub fn start_now() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(origin: Instant) -> Self {
        Self { origin }
    }

    /// Seconds since the origin, `0` if the origin lies in the future.
    pub fn elapsed_seconds(&self) -> f64 {
        Instant::now()
            .checked_duration_since(self.origin)
            .unwrap_or_default()
            .as_secs_f64()
    }

    /// Wall-clock instant at which song time `seconds` is due.
    pub fn deadline(&self, seconds: f64) -> Instant {
        self.origin + Duration::from_secs_f64(seconds.max(0.0))
    }
}

/// Sampling density of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputRate {
    /// One sample per keyframe, as exported to CSV/JSON.
    KeyframesOnly,
    /// Evenly spaced samples per second, always ending on the last keyframe.
    Hz(f64),
}

impl OutputRate {
    pub fn hz(rate: f64) -> Result<Self> {
        if rate.is_finite() && rate > 0.0 {
            Ok(OutputRate::Hz(rate))
        } else {
            Err(ChoreoError::InvalidConfig(format!(
                "output rate must be positive, got {rate}"
            )))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub pose: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Waypoint {
    time: f64,
    pose: Pose,
    move_type: MoveType,
}

/// Continuous pose path through a keyframe list. Channels are blended
/// linearly, except that a `half_beat_hold` keyframe keeps its pose until
/// the next main beat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    waypoints: Vec<Waypoint>,
}

impl Trajectory {
    pub fn from_keyframes(keyframes: &[Keyframe]) -> Result<Self> {
        let mut waypoints: Vec<Waypoint> = Vec::with_capacity(keyframes.len());
        for (index, keyframe) in keyframes.iter().enumerate() {
            if !keyframe.timestamp.is_finite() {
                return Err(ChoreoError::replay(
                    index + 1,
                    format!("keyframe timestamp {} is not finite", keyframe.timestamp),
                ));
            }
            if let Some(previous) = waypoints.last() {
                if keyframe.timestamp <= previous.time {
                    return Err(ChoreoError::replay(
                        index + 1,
                        format!(
                            "keyframe timestamp {} does not follow {}",
                            keyframe.timestamp, previous.time
                        ),
                    ));
                }
            }
            waypoints.push(Waypoint {
                time: keyframe.timestamp,
                pose: keyframe.pose,
                move_type: keyframe.move_type,
            });
        }
        Ok(Self { waypoints })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn start(&self) -> Option<f64> {
        self.waypoints.first().map(|w| w.time)
    }

    pub fn end(&self) -> Option<f64> {
        self.waypoints.last().map(|w| w.time)
    }

    pub fn duration(&self) -> f64 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        }
    }

    /// Pose at song time `time`, clamped to the covered range.
    pub fn sample_at(&self, time: f64) -> Option<Pose> {
        let first = self.waypoints.first()?;
        let last = self.waypoints.last()?;
        if time <= first.time {
            return Some(first.pose);
        }
        if time >= last.time {
            return Some(last.pose);
        }

        let next = self.waypoints.partition_point(|w| w.time <= time);
        let (from, to) = (&self.waypoints[next - 1], &self.waypoints[next]);
        if from.move_type.is_hold() && to.move_type == MoveType::MainBeat {
            return Some(from.pose);
        }
        let t = ((time - from.time) / (to.time - from.time)) as f32;
        Some(from.pose.lerp(&to.pose, t))
    }

    /// Lazy, finite sample sequence. Each call starts over from the first
    /// keyframe.
    pub fn samples(&self, rate: OutputRate) -> Samples<'_> {
        Samples {
            trajectory: self,
            rate,
            step: 0,
            finished: false,
        }
    }
}

pub struct Samples<'a> {
    trajectory: &'a Trajectory,
    rate: OutputRate,
    step: usize,
    finished: bool,
}

impl Iterator for Samples<'_> {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let waypoints = &self.trajectory.waypoints;

        match self.rate {
            OutputRate::Hz(hz) if hz.is_finite() && hz > 0.0 => {
                let (first, last) = match (waypoints.first(), waypoints.last()) {
                    (Some(first), Some(last)) => (first.time, last.time),
                    _ => {
                        self.finished = true;
                        return None;
                    }
                };
                let time = first + self.step as f64 / hz;
                if time >= last - 1e-9 {
                    self.finished = true;
                    let pose = waypoints.last().map(|w| w.pose)?;
                    return Some(TrajectorySample { time: last, pose });
                }
                self.step += 1;
                let pose = self.trajectory.sample_at(time)?;
                Some(TrajectorySample { time, pose })
            }
            _ => {
                let Some(waypoint) = waypoints.get(self.step) else {
                    self.finished = true;
                    return None;
                };
                self.step += 1;
                Some(TrajectorySample {
                    time: waypoint.time,
                    pose: waypoint.pose,
                })
            }
        }
    }
}
