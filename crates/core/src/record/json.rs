use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    config::EngineConfig,
    engine::{Choreography, GenerationReport},
    keyframe::Keyframe,
    sequence::{SelectionPolicy, TierSwitch},
    Beat, ChoreoError, FeatureStream, Result, TierThresholds,
};

/// Everything needed to reproduce the CSV export without re-running analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub catalog_version: String,
    pub scale: f32,
    pub sharpness: f32,
    pub thresholds: TierThresholds,
    pub selection: SelectionPolicy,
    #[serde(default)]
    pub tier_switch: TierSwitch,
    pub generator: String,
}

impl GenerationMetadata {
    pub fn new(config: &EngineConfig, catalog_version: &str) -> Self {
        Self {
            catalog_version: catalog_version.to_string(),
            scale: config.scale,
            sharpness: config.sharpness,
            thresholds: config.thresholds,
            selection: config.selection,
            tier_switch: config.tier_switch,
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoreographyDocument {
    pub metadata: GenerationMetadata,
    pub tempo_bpm: f32,
    pub beats: Vec<Beat>,
    pub keyframes: Vec<Keyframe>,
    #[serde(default)]
    pub report: GenerationReport,
}

impl ChoreographyDocument {
    pub fn new(
        config: &EngineConfig,
        catalog_version: &str,
        stream: &FeatureStream,
        choreography: &Choreography,
    ) -> Self {
        Self {
            metadata: GenerationMetadata::new(config, catalog_version),
            tempo_bpm: stream.tempo_bpm,
            beats: stream.beats.clone(),
            keyframes: choreography.keyframes.clone(),
            report: choreography.report.clone(),
        }
    }

    pub fn features(&self) -> FeatureStream {
        FeatureStream::new(self.tempo_bpm, self.beats.clone())
    }

    /// Rebuilds the generation config recorded in the metadata.
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            thresholds: self.metadata.thresholds,
            scale: self.metadata.scale,
            selection: self.metadata.selection,
            tier_switch: self.metadata.tier_switch,
            sharpness: self.metadata.sharpness,
            ..EngineConfig::default()
        }
    }

    /// Keyframes must be strictly increasing in time to be replayable.
    pub fn validate(&self) -> Result<()> {
        for (index, pair) in self.keyframes.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(ChoreoError::replay(
                    index + 2,
                    format!(
                        "keyframe timestamp {} does not follow {}",
                        pair[1].timestamp, pair[0].timestamp
                    ),
                ));
            }
        }
        Ok(())
    }
}

pub fn write_json<W: Write>(mut writer: W, document: &ChoreographyDocument) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}

pub fn save_json(path: impl AsRef<Path>, document: &ChoreographyDocument) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_json(BufWriter::new(file), document)
}

pub fn parse_json(source: &str) -> Result<ChoreographyDocument> {
    let document: ChoreographyDocument = serde_json::from_str(source)?;
    document.validate()?;
    Ok(document)
}

pub fn load_json(path: impl AsRef<Path>) -> Result<ChoreographyDocument> {
    let file = File::open(path.as_ref())?;
    let document: ChoreographyDocument = serde_json::from_reader(BufReader::new(file))?;
    document.validate()?;
    Ok(document)
}
