use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{VariationCatalog, VariationId},
    config::EngineConfig,
    energy::{HalfBeatPolicy, TierProfile},
    keyframe::{Keyframe, KeyframeGenerator},
    sequence::{SequenceMachine, SequenceState},
    Beat, EnergyTier, FeatureStream, Result, TierThresholds,
};

/// Number of cycles a variation was started during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationUsage {
    pub tier: EnergyTier,
    pub letter: char,
    pub cycles: u32,
}

/// Diagnostics gathered while generating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Keyframes whose pose was clipped into the safe envelope.
    pub clamped_frames: usize,
    pub usage: Vec<VariationUsage>,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    pub keyframes: Vec<Keyframe>,
    pub report: GenerationReport,
}

/// Validated configuration plus the shared catalog. Cheap to clone; every
/// run gets its own [`DanceSession`].
#[derive(Debug, Clone)]
pub struct Choreographer {
    config: EngineConfig,
    catalog: Arc<VariationCatalog>,
}

impl Choreographer {
    pub fn new(config: EngineConfig, catalog: impl Into<Arc<VariationCatalog>>) -> Result<Self> {
        let catalog = catalog.into();
        config.validate()?;
        catalog.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default(), VariationCatalog::builtin())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<VariationCatalog> {
        &self.catalog
    }

    pub fn profile(&self, tier: EnergyTier) -> &'static TierProfile {
        tier.profile()
    }

    /// Half-beat fallback in effect for a tier.
    pub fn half_beat_policy(&self, tier: EnergyTier) -> HalfBeatPolicy {
        tier.profile().half_beat
    }

    /// Fresh session at position 0 with no history.
    pub fn session(&self) -> DanceSession {
        DanceSession {
            catalog: Arc::clone(&self.catalog),
            thresholds: self.config.thresholds,
            machine: SequenceMachine::new(Arc::clone(&self.catalog), self.config.selection)
                .with_tier_switch(self.config.tier_switch),
            generator: KeyframeGenerator::new(self.config.generator_settings()),
        }
    }

    /// Generates one keyframe per beat. The stream is validated up front so a
    /// malformed stream yields no keyframes at all.
    pub fn generate(&self, stream: &FeatureStream) -> Result<Choreography> {
        stream.validate()?;
        tracing::info!(
            beats = stream.beats.len(),
            main_beats = stream.main_beat_count(),
            tempo_bpm = stream.tempo_bpm,
            "generating choreography"
        );

        let mut session = self.session();
        let keyframes = stream
            .beats
            .iter()
            .map(|beat| session.next_keyframe(beat))
            .collect::<Result<Vec<_>>>()?;
        let report = session.report();

        tracing::info!(
            keyframes = keyframes.len(),
            clamped = report.clamped_frames,
            variations = report.usage.len(),
            "choreography generated"
        );
        Ok(Choreography { keyframes, report })
    }
}

/// Per-run mutable state: sequence progress and keyframe counters. Owned by
/// whoever drives the run; never shared between runs.
#[derive(Debug, Clone)]
pub struct DanceSession {
    catalog: Arc<VariationCatalog>,
    thresholds: TierThresholds,
    machine: SequenceMachine,
    generator: KeyframeGenerator,
}

impl DanceSession {
    pub fn next_keyframe(&mut self, beat: &Beat) -> Result<Keyframe> {
        let tier = self.thresholds.classify(beat.energy);
        let state = self.machine.advance(tier)?;
        let template = self.catalog.template(state.active)?;
        Ok(self.generator.generate(beat, &state, template))
    }

    pub fn state(&self) -> Option<&SequenceState> {
        self.machine.state()
    }

    pub fn clamped_frames(&self) -> usize {
        self.generator.clamped_frames()
    }

    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            clamped_frames: self.generator.clamped_frames(),
            usage: self
                .machine
                .usage()
                .iter()
                .map(|(id, cycles): (&VariationId, &u32)| VariationUsage {
                    tier: id.tier,
                    letter: id.letter,
                    cycles: *cycles,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keyframe::MoveType, sequence::SelectionPolicy, ChoreoError};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn stream_strategy() -> impl Strategy<Value = FeatureStream> {
        proptest::collection::vec((0.01f64..1.0, 0.0f32..=1.0, any::<bool>()), 1..120).prop_map(
            |steps| {
                let mut time = 0.0;
                let beats = steps
                    .into_iter()
                    .map(|(gap, energy, main)| {
                        time += gap;
                        if main {
                            Beat::main(time, energy)
                        } else {
                            Beat::half(time, energy)
                        }
                    })
                    .collect();
                FeatureStream::new(120.0, beats)
            },
        )
    }

    fn seeded(seed: u64) -> Choreographer {
        let config = EngineConfig {
            selection: SelectionPolicy::Seeded(seed),
            ..EngineConfig::default()
        };
        Choreographer::new(config, VariationCatalog::builtin()).unwrap()
    }

    #[test]
    fn four_beat_scenario_keeps_the_first_variation() {
        let stream = FeatureStream::new(
            120.0,
            vec![
                Beat::main(0.0, 0.1),
                Beat::half(0.5, 0.15),
                Beat::main(1.0, 0.6),
                Beat::half(1.5, 0.62),
            ],
        );
        let choreographer = Choreographer::with_defaults().unwrap();
        let choreography = choreographer.generate(&stream).unwrap();
        let keyframes = &choreography.keyframes;

        let thresholds = choreographer.config().thresholds;
        let tiers: Vec<EnergyTier> = stream
            .beats
            .iter()
            .map(|beat| thresholds.classify(beat.energy))
            .collect();
        assert_eq!(
            tiers,
            vec![
                EnergyTier::Low,
                EnergyTier::Low,
                EnergyTier::Medium,
                EnergyTier::Medium
            ]
        );
        let positions: Vec<usize> = keyframes.iter().map(|k| k.sequence_position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert!(keyframes.iter().all(|k| {
            k.sequence_variation == keyframes[0].sequence_variation
                && k.sequence_type == EnergyTier::Low
        }));
        let frames: Vec<u32> = keyframes.iter().map(|k| k.frame_number).collect();
        assert_eq!(frames, vec![1, 2, 3, 4]);
        assert_eq!(keyframes[1].move_type, MoveType::HalfBeat);
    }

    #[test]
    fn keyframes_name_existing_templates_across_tier_changes() {
        let mut beats: Vec<(f64, f32)> = (0..82).map(|i| (i as f64 * 0.5, 0.5)).collect();
        beats.push((41.0, 0.1));
        beats.extend((0..6).map(|i| (41.5 + i as f64 * 0.5, 0.9)));
        beats.extend((0..6).map(|i| (44.5 + i as f64 * 0.5, 0.5)));
        let stream = FeatureStream::from_main_beats(Some(120.0), &beats).unwrap();

        let choreographer = Choreographer::with_defaults().unwrap();
        let catalog = choreographer.catalog();
        for keyframe in choreographer.generate(&stream).unwrap().keyframes {
            let id = VariationId::new(keyframe.sequence_type, keyframe.sequence_variation);
            let template = catalog
                .get(id)
                .unwrap_or_else(|| panic!("frame {} names missing {id:?}", keyframe.frame_number));
            let label = format!(
                "({} Beat{}/{})",
                template.display_label(),
                keyframe.sequence_position + 1,
                crate::CYCLE_LENGTH
            );
            assert!(
                keyframe.head_movement_name.ends_with(&label),
                "{} does not end with {label}",
                keyframe.head_movement_name
            );
        }
    }

    #[test]
    fn malformed_stream_emits_nothing() {
        let stream = FeatureStream::new(
            120.0,
            vec![Beat::main(1.0, 0.5), Beat::main(0.5, 0.5)],
        );
        let result = Choreographer::with_defaults().unwrap().generate(&stream);
        assert!(matches!(
            result,
            Err(ChoreoError::MalformedFeatureStream { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            scale: 0.0,
            ..EngineConfig::default()
        };
        assert!(Choreographer::new(config, VariationCatalog::builtin()).is_err());
    }

    #[test]
    fn exposes_half_beat_policy_per_tier() {
        let choreographer = Choreographer::with_defaults().unwrap();
        assert_eq!(
            choreographer.half_beat_policy(EnergyTier::Low),
            HalfBeatPolicy::Soften { factor: 0.5 }
        );
        assert_eq!(
            choreographer.half_beat_policy(EnergyTier::High),
            HalfBeatPolicy::Independent
        );
    }

    #[test]
    fn high_energy_half_beats_hold() {
        let stream =
            FeatureStream::from_main_beats(Some(120.0), &[(0.0, 0.9), (0.5, 0.9), (1.0, 0.9)])
                .unwrap();
        let choreography = Choreographer::with_defaults().unwrap().generate(&stream).unwrap();
        let kinds: Vec<MoveType> = choreography.keyframes.iter().map(|k| k.move_type).collect();
        assert_eq!(
            kinds,
            vec![
                MoveType::MainBeat,
                MoveType::HalfBeatHold,
                MoveType::MainBeat,
                MoveType::HalfBeatHold,
                MoveType::MainBeat
            ]
        );
    }

    #[test]
    fn sessions_do_not_share_state() {
        let choreographer = Choreographer::with_defaults().unwrap();
        let mut first = choreographer.session();
        for step in 0..5 {
            first.next_keyframe(&Beat::main(step as f64, 0.5)).unwrap();
        }
        let mut second = choreographer.session();
        let keyframe = second.next_keyframe(&Beat::main(0.0, 0.5)).unwrap();
        assert_eq!(keyframe.sequence_position, 0);
        assert_eq!(keyframe.frame_number, 1);
        assert_eq!(first.state().map(|s| s.position), Some(4));
    }

    #[test]
    fn reports_usage_per_cycle() {
        let beats: Vec<(f64, f32)> = (0..9).map(|i| (i as f64 * 0.5, 0.5)).collect();
        let stream = FeatureStream::from_main_beats(None, &beats).unwrap();
        let choreography = Choreographer::with_defaults().unwrap().generate(&stream).unwrap();
        assert_eq!(choreography.keyframes.len(), 17);
        assert_eq!(
            choreography.report.usage,
            vec![
                VariationUsage {
                    tier: EnergyTier::Medium,
                    letter: 'A',
                    cycles: 1
                },
                VariationUsage {
                    tier: EnergyTier::Medium,
                    letter: 'B',
                    cycles: 1
                },
                VariationUsage {
                    tier: EnergyTier::Medium,
                    letter: 'C',
                    cycles: 1
                },
            ]
        );
        assert_eq!(choreography.report.clamped_frames, 0);
    }

    proptest! {
        #[test]
        fn keyframes_follow_beats_pointwise(stream in stream_strategy()) {
            let choreography = Choreographer::with_defaults().unwrap().generate(&stream).unwrap();
            prop_assert_eq!(choreography.keyframes.len(), stream.beats.len());
            for (keyframe, beat) in choreography.keyframes.iter().zip(&stream.beats) {
                prop_assert_eq!(keyframe.timestamp, beat.timestamp);
                prop_assert!(keyframe.sequence_position < 8);
            }
            for pair in choreography.keyframes.windows(2) {
                prop_assert!(pair[0].timestamp < pair[1].timestamp);
                prop_assert_eq!(pair[1].frame_number, pair[0].frame_number + 1);
            }
        }

        #[test]
        fn generation_is_deterministic(stream in stream_strategy(), seed in any::<u64>()) {
            let first = seeded(seed).generate(&stream).unwrap();
            let second = seeded(seed).generate(&stream).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn poses_stay_inside_the_envelope(stream in stream_strategy()) {
            let choreographer = Choreographer::with_defaults().unwrap();
            let envelope = choreographer.config().envelope;
            for keyframe in choreographer.generate(&stream).unwrap().keyframes {
                let (clamped, clipped) = envelope.clamp(&keyframe.pose);
                prop_assert!(clipped.is_empty());
                prop_assert_eq!(clamped, keyframe.pose);
            }
        }
    }
}
