use std::sync::{Arc, Mutex, MutexGuard};

use crate::{keyframe::Pose, ChoreoError, Result};

/// Robot side of playback. Poses arrive at the interpolated output rate.
pub trait Actuator: Send {
    fn set_pose(&mut self, pose: &Pose) -> Result<()>;

    /// Halts motion. Called when a session ends or is cancelled.
    fn stop(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
struct Recording {
    poses: Vec<Pose>,
    stops: usize,
    fail_after: Option<usize>,
}

/// Keeps every pose in a shared buffer. Clones observe the same buffer, so a
/// test can hand one clone to a player and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    shared: Arc<Mutex<Recording>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `limit` poses, then reports the device as gone.
    pub fn failing_after(limit: usize) -> Self {
        let recording = Recording {
            fail_after: Some(limit),
            ..Recording::default()
        };
        Self {
            shared: Arc::new(Mutex::new(recording)),
        }
    }

    pub fn poses(&self) -> Result<Vec<Pose>> {
        Ok(self.lock()?.poses.clone())
    }

    pub fn stop_count(&self) -> Result<usize> {
        Ok(self.lock()?.stops)
    }

    pub fn clear(&self) -> Result<()> {
        let mut recording = self.lock()?;
        recording.poses.clear();
        recording.stops = 0;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Recording>> {
        self.shared
            .lock()
            .map_err(|_| ChoreoError::msg("recording actuator has been poisoned"))
    }
}

impl Actuator for RecordingActuator {
    fn set_pose(&mut self, pose: &Pose) -> Result<()> {
        let mut recording = self.lock()?;
        if recording.fail_after == Some(recording.poses.len()) {
            return Err(ChoreoError::ActuatorUnavailable(
                "recording actuator disconnected".to_string(),
            ));
        }
        recording.poses.push(*pose);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.lock()?.stops += 1;
        Ok(())
    }
}

/// Dry-run actuator that only logs what it would send.
#[derive(Debug, Default)]
pub struct TracingActuator {
    sent: usize,
}

impl TracingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl Actuator for TracingActuator {
    fn set_pose(&mut self, pose: &Pose) -> Result<()> {
        self.sent += 1;
        tracing::trace!(
            x = pose.x,
            y = pose.y,
            z = pose.z,
            roll = pose.roll,
            pitch = pose.pitch,
            yaw = pose.yaw,
            body_yaw = pose.body_yaw,
            "set_pose"
        );
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        tracing::debug!(sent = self.sent, "actuator stopped");
        Ok(())
    }
}
