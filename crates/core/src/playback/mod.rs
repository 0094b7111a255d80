//! Single-session real-time playback.
//!
//! A [`Player`] owns the actuator and the audio output. Each `play` call
//! cancels and joins the running session before starting a new one on its own
//! thread, so the devices are never driven by two sessions at once. The
//! session loop waits for every sample's due time on its stop channel, which
//! bounds stop latency to one output interval.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::{
    actuator::Actuator,
    config::PlaybackConfig,
    engine::Choreographer,
    keyframe::Keyframe,
    timeline::{OutputRate, PlaybackClock, Trajectory},
    ChoreoError, FeatureStream, Result,
};

/// Audio side of playback, started on the same clock origin as the actuator.
pub trait AudioOutput: Send {
    /// Starts the track `offset_seconds` into the song.
    fn start(&mut self, offset_seconds: f64) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
}

/// Audio output for runs without sound.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn start(&mut self, offset_seconds: f64) -> Result<()> {
        tracing::debug!(offset_seconds, "silent audio started");
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}

/// What to play.
#[derive(Debug, Clone)]
pub enum PlayRequest {
    /// Generate from scratch. Every play builds a fresh session, so a
    /// cancelled run is never resumed.
    Features(FeatureStream),
    /// Replay previously exported keyframes, skipping generation.
    Keyframes(Vec<Keyframe>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { frames: usize },
    Cancelled { frames: usize },
}

impl PlaybackOutcome {
    pub fn frames(&self) -> usize {
        match self {
            PlaybackOutcome::Completed { frames } | PlaybackOutcome::Cancelled { frames } => {
                *frames
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlaybackOutcome::Cancelled { .. })
    }
}

/// Caller's view of a running session.
#[derive(Debug)]
pub struct SessionHandle {
    id: u64,
    stop: Sender<()>,
    done: Receiver<Result<PlaybackOutcome>>,
}

impl SessionHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Asks the session to stop. Returns immediately.
    pub fn stop(&self) {
        let _ = self.stop.try_send(());
    }

    /// Blocks until the session ends.
    pub fn wait(self) -> Result<PlaybackOutcome> {
        self.done
            .recv()
            .map_err(|_| ChoreoError::msg(format!("playback session {} vanished", self.id)))?
    }
}

struct ActiveSession {
    id: u64,
    stop: Sender<()>,
    thread: JoinHandle<()>,
}

impl ActiveSession {
    fn cancel_and_join(self) -> Result<()> {
        let _ = self.stop.try_send(());
        self.thread
            .join()
            .map_err(|_| ChoreoError::msg(format!("playback session {} panicked", self.id)))
    }
}

struct Devices {
    actuator: Box<dyn Actuator>,
    audio: Box<dyn AudioOutput>,
}

pub struct Player {
    choreographer: Choreographer,
    devices: Arc<Mutex<Devices>>,
    active: Mutex<Option<ActiveSession>>,
    next_id: Mutex<u64>,
}

impl Player {
    pub fn new(
        choreographer: Choreographer,
        actuator: Box<dyn Actuator>,
        audio: Box<dyn AudioOutput>,
    ) -> Result<Self> {
        choreographer.config().playback.validate()?;
        Ok(Self {
            choreographer,
            devices: Arc::new(Mutex::new(Devices { actuator, audio })),
            active: Mutex::new(None),
            next_id: Mutex::new(1),
        })
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    /// Starts a new session, cancelling and joining any running one first.
    /// Generation errors are returned here, before the previous session is
    /// touched.
    pub fn play(&self, request: PlayRequest) -> Result<SessionHandle> {
        let keyframes = match request {
            PlayRequest::Features(stream) => self.choreographer.generate(&stream)?.keyframes,
            PlayRequest::Keyframes(keyframes) => keyframes,
        };
        let trajectory = Trajectory::from_keyframes(&keyframes)?;

        let mut active = self.lock_active()?;
        if let Some(previous) = active.take() {
            tracing::info!(session = previous.id, "cancelling previous session");
            previous.cancel_and_join()?;
        }

        let id = self.allocate_id()?;
        let (stop_tx, stop_rx) = bounded(1);
        let (done_tx, done_rx) = bounded(1);
        let devices = Arc::clone(&self.devices);
        let config = self.choreographer.config().playback.clone();

        let thread = thread::Builder::new()
            .name(format!("playback-{id}"))
            .spawn(move || {
                let outcome = run_session(id, &trajectory, &config, &devices, &stop_rx);
                let _ = done_tx.send(outcome);
            })?;

        *active = Some(ActiveSession {
            id,
            stop: stop_tx.clone(),
            thread,
        });

        Ok(SessionHandle {
            id,
            stop: stop_tx,
            done: done_rx,
        })
    }

    /// Cancels the running session, if any, and waits until it has released
    /// the devices.
    pub fn stop(&self) -> Result<()> {
        let previous = self.lock_active()?.take();
        match previous {
            Some(session) => {
                tracing::info!(session = session.id, "stop requested");
                session.cancel_and_join()
            }
            None => Ok(()),
        }
    }

    pub fn is_playing(&self) -> Result<bool> {
        Ok(self
            .lock_active()?
            .as_ref()
            .is_some_and(|session| !session.thread.is_finished()))
    }

    fn allocate_id(&self) -> Result<u64> {
        let mut next = self
            .next_id
            .lock()
            .map_err(|_| ChoreoError::msg("session counter has been poisoned"))?;
        let id = *next;
        *next += 1;
        Ok(id)
    }

    fn lock_active(&self) -> Result<MutexGuard<'_, Option<ActiveSession>>> {
        self.active
            .lock()
            .map_err(|_| ChoreoError::msg("active session slot has been poisoned"))
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        if let Ok(mut active) = self.active.lock() {
            if let Some(session) = active.take() {
                let _ = session.cancel_and_join();
            }
        }
    }
}

fn run_session(
    id: u64,
    trajectory: &Trajectory,
    config: &PlaybackConfig,
    devices: &Mutex<Devices>,
    stop: &Receiver<()>,
) -> Result<PlaybackOutcome> {
    let mut devices = devices
        .lock()
        .map_err(|_| ChoreoError::msg("playback devices have been poisoned"))?;
    let Devices { actuator, audio } = &mut *devices;

    let delay = Duration::from_millis(config.start_delay_ms).as_secs_f64();
    let clock = PlaybackClock::start_now();
    let result = audio.start(0.0).and_then(|()| {
        tracing::info!(
            session = id,
            waypoints = trajectory.len(),
            duration = trajectory.duration(),
            "playback started"
        );
        drive(&mut **actuator, trajectory, config, &clock, delay, stop)
    });

    let stopped = actuator.stop();
    let _ = audio.stop();

    let outcome = result?;
    stopped.map_err(|err| ChoreoError::ActuatorUnavailable(err.to_string()))?;
    let elapsed = clock.elapsed_seconds();
    match outcome {
        PlaybackOutcome::Cancelled { frames } => {
            tracing::info!(session = id, frames, elapsed, "playback cancelled")
        }
        PlaybackOutcome::Completed { frames } => {
            tracing::info!(session = id, frames, elapsed, "playback finished")
        }
    }
    Ok(outcome)
}

fn drive(
    actuator: &mut dyn Actuator,
    trajectory: &Trajectory,
    config: &PlaybackConfig,
    clock: &PlaybackClock,
    delay: f64,
    stop: &Receiver<()>,
) -> Result<PlaybackOutcome> {
    let mut frames = 0;
    for sample in trajectory.samples(OutputRate::Hz(config.output_rate_hz)) {
        let due = clock.deadline(sample.time + delay);
        match stop.recv_timeout(due.saturating_duration_since(Instant::now())) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                return Ok(PlaybackOutcome::Cancelled { frames });
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
        actuator.set_pose(&sample.pose).map_err(|err| match err {
            ChoreoError::ActuatorUnavailable(_) => err,
            other => ChoreoError::ActuatorUnavailable(other.to_string()),
        })?;
        frames += 1;
    }
    Ok(PlaybackOutcome::Completed { frames })
}
