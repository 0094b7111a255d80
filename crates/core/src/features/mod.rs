use serde::{Deserialize, Serialize};

use crate::{ChoreoError, Result};

/// Whether a beat sits on the main pulse or halfway between two main beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeatKind {
    Main,
    Half,
}

/// A detected rhythmic event as delivered by the audio analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    /// Seconds from the start of the track.
    pub timestamp: f64,
    /// Pre-normalised `[0, 1]` energy.
    pub energy: f32,
    pub kind: BeatKind,
    /// Onset envelope strength near the beat, `[0, 1]`. Strong onsets accent
    /// the generated pose.
    #[serde(default)]
    pub onset_strength: f32,
}

impl Beat {
    pub fn main(timestamp: f64, energy: f32) -> Self {
        Self {
            timestamp,
            energy,
            kind: BeatKind::Main,
            onset_strength: 0.0,
        }
    }

    pub fn half(timestamp: f64, energy: f32) -> Self {
        Self {
            timestamp,
            energy,
            kind: BeatKind::Half,
            onset_strength: 0.0,
        }
    }

    pub fn with_onset(mut self, onset_strength: f32) -> Self {
        self.onset_strength = onset_strength;
        self
    }

    pub fn is_main(&self) -> bool {
        self.kind == BeatKind::Main
    }
}

/// Ordered beats plus the global tempo estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureStream {
    pub tempo_bpm: f32,
    pub beats: Vec<Beat>,
}

impl FeatureStream {
    pub fn new(tempo_bpm: f32, beats: Vec<Beat>) -> Self {
        Self { tempo_bpm, beats }
    }

    /// Builds a stream from main-beat `(timestamp, energy)` pairs, inserting a
    /// half-beat at the midpoint of every pair of consecutive main beats. The
    /// half-beat inherits the energy of the beat it follows. Tempo is estimated
    /// from the main-beat grid when not supplied.
    pub fn from_main_beats(tempo_bpm: Option<f32>, main_beats: &[(f64, f32)]) -> Result<Self> {
        let mut beats = Vec::with_capacity(main_beats.len() * 2);
        for (index, &(timestamp, energy)) in main_beats.iter().enumerate() {
            beats.push(Beat::main(timestamp, energy));
            if let Some(&(next, _)) = main_beats.get(index + 1) {
                beats.push(Beat::half(timestamp + (next - timestamp) * 0.5, energy));
            }
        }

        let timestamps: Vec<f64> = main_beats.iter().map(|(t, _)| *t).collect();
        let tempo_bpm = tempo_bpm
            .or_else(|| estimate_tempo(&timestamps))
            .unwrap_or(0.0);

        let stream = Self::new(tempo_bpm, beats);
        stream.validate()?;
        Ok(stream)
    }

    /// Checks the structural contract: at least one beat, finite values, and
    /// strictly increasing timestamps. Energy outside `[0, 1]` is tolerated
    /// because classification clamps it; non-finite energy is not.
    pub fn validate(&self) -> Result<()> {
        if self.beats.is_empty() {
            return Err(ChoreoError::malformed(0, "feature stream contains no beats"));
        }
        if !self.tempo_bpm.is_finite() || self.tempo_bpm < 0.0 {
            return Err(ChoreoError::malformed(
                0,
                format!("tempo must be a non-negative number, got {}", self.tempo_bpm),
            ));
        }

        let mut previous: Option<f64> = None;
        for (index, beat) in self.beats.iter().enumerate() {
            if !beat.timestamp.is_finite() || beat.timestamp < 0.0 {
                return Err(ChoreoError::malformed(
                    index,
                    format!("invalid timestamp {}", beat.timestamp),
                ));
            }
            if !beat.energy.is_finite() {
                return Err(ChoreoError::malformed(
                    index,
                    format!("energy {} cannot be clamped into [0, 1]", beat.energy),
                ));
            }
            if !beat.onset_strength.is_finite() {
                return Err(ChoreoError::malformed(
                    index,
                    format!("invalid onset strength {}", beat.onset_strength),
                ));
            }
            if let Some(previous) = previous {
                if beat.timestamp <= previous {
                    return Err(ChoreoError::malformed(
                        index,
                        format!(
                            "timestamp {} does not follow {} (must be strictly increasing)",
                            beat.timestamp, previous
                        ),
                    ));
                }
            }
            previous = Some(beat.timestamp);
        }

        Ok(())
    }

    pub fn duration_seconds(&self) -> f64 {
        match (self.beats.first(), self.beats.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0.0,
        }
    }

    pub fn main_beat_count(&self) -> usize {
        self.beats.iter().filter(|beat| beat.is_main()).count()
    }
}

/// Estimates tempo as 60 / mean positive inter-beat interval.
pub fn estimate_tempo(timestamps: &[f64]) -> Option<f32> {
    if timestamps.len() < 2 {
        return None;
    }

    let mut sum = 0.0;
    let mut count = 0;
    for window in timestamps.windows(2) {
        let interval = window[1] - window[0];
        if interval > f64::EPSILON {
            sum += interval;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let average_interval = sum / count as f64;
    (average_interval > 0.0).then(|| (60.0 / average_interval) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_half_beats_between_main_beats() {
        let stream =
            FeatureStream::from_main_beats(None, &[(0.0, 0.2), (0.5, 0.4), (1.0, 0.9)]).unwrap();

        let kinds: Vec<BeatKind> = stream.beats.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BeatKind::Main,
                BeatKind::Half,
                BeatKind::Main,
                BeatKind::Half,
                BeatKind::Main
            ]
        );
        assert_eq!(stream.beats[1].timestamp, 0.25);
        assert_eq!(stream.beats[1].energy, 0.2);
        assert_eq!(stream.beats[3].timestamp, 0.75);
        assert!((stream.tempo_bpm - 120.0).abs() < 1e-3);
        assert_eq!(stream.main_beat_count(), 3);
    }

    #[test]
    fn keeps_supplied_tempo() {
        let stream = FeatureStream::from_main_beats(Some(98.0), &[(0.0, 0.2), (0.5, 0.4)]).unwrap();
        assert_eq!(stream.tempo_bpm, 98.0);
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let stream = FeatureStream::new(
            120.0,
            vec![Beat::main(0.0, 0.1), Beat::half(0.5, 0.1), Beat::main(0.5, 0.1)],
        );
        match stream.validate() {
            Err(ChoreoError::MalformedFeatureStream { index, .. }) => assert_eq!(index, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_energy_and_empty_streams() {
        let stream = FeatureStream::new(120.0, vec![Beat::main(0.0, f32::NAN)]);
        assert!(stream.validate().is_err());
        assert!(FeatureStream::default().validate().is_err());
    }

    #[test]
    fn tolerates_out_of_range_energy() {
        let stream = FeatureStream::new(120.0, vec![Beat::main(0.0, 1.4), Beat::half(0.2, -0.1)]);
        assert!(stream.validate().is_ok());
    }

    #[test]
    fn duration_spans_first_to_last_beat() {
        let stream = FeatureStream::new(
            120.0,
            vec![Beat::main(0.5, 0.1), Beat::half(0.75, 0.1), Beat::main(1.0, 0.1)],
        );
        assert!((stream.duration_seconds() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tempo_needs_two_distinct_beats() {
        assert_eq!(estimate_tempo(&[1.0]), None);
        assert_eq!(estimate_tempo(&[1.0, 1.0]), None);
        let tempo = estimate_tempo(&[0.0, 0.6, 1.2, 1.8]).unwrap();
        assert!((tempo - 100.0).abs() < 1e-3);
    }

    #[test]
    fn deserializes_without_onset() {
        let beat: Beat =
            serde_json::from_str(r#"{"timestamp": 1.5, "energy": 0.4, "kind": "half"}"#).unwrap();
        assert_eq!(beat, Beat::half(1.5, 0.4));
    }
}
