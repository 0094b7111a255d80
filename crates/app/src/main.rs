use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use music_choreographer_core::{
    record, ChoreoError, Choreographer, ChoreographyDocument, EngineConfig, EnergyTier,
    FeatureStream, OutputRate, PlayRequest, Player, SelectionPolicy, SilentAudio,
    TracingActuator, Trajectory, VariationCatalog,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

fn main() -> music_choreographer_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            csv,
            json,
            config,
            seed,
            scale,
        } => run_generate(&input, csv.as_deref(), json.as_deref(), config.as_deref(), seed, scale),
        Commands::Replay { input, rate } => run_replay(&input, rate),
        Commands::Play {
            input,
            config,
            rate,
        } => run_play(&input, config.as_deref(), rate),
        Commands::Catalog => run_catalog(),
    }
}

fn run_generate(
    input: &Path,
    csv: Option<&Path>,
    json: Option<&Path>,
    config: Option<&Path>,
    seed: Option<u64>,
    scale: Option<f32>,
) -> music_choreographer_core::Result<()> {
    tracing::info!(?input, ?csv, ?json, "generating choreography");

    let mut config = load_config(config)?;
    if let Some(seed) = seed {
        config.selection = SelectionPolicy::Seeded(seed);
    }
    if let Some(scale) = scale {
        config.scale = scale;
    }

    let stream = load_features(input)?;
    let choreographer = Choreographer::new(config, VariationCatalog::builtin())?;
    let choreography = choreographer.generate(&stream)?;

    if let Some(path) = csv {
        record::save_csv(path, &choreography.keyframes)?;
        tracing::info!(?path, rows = choreography.keyframes.len(), "wrote csv");
    }
    if let Some(path) = json {
        let document = ChoreographyDocument::new(
            choreographer.config(),
            choreographer.catalog().version(),
            &stream,
            &choreography,
        );
        record::save_json(path, &document)?;
        tracing::info!(?path, "wrote json");
    }

    println!(
        "{} keyframes over {:.2}s at {:.1} bpm, {} clamped",
        choreography.keyframes.len(),
        stream.duration_seconds(),
        stream.tempo_bpm,
        choreography.report.clamped_frames
    );
    for usage in &choreography.report.usage {
        println!("  {}/{}: {} cycle(s)", usage.tier, usage.letter, usage.cycles);
    }
    Ok(())
}

fn run_replay(input: &Path, rate: f64) -> music_choreographer_core::Result<()> {
    let keyframes = record::load_keyframes(input)?;
    let trajectory = Trajectory::from_keyframes(&keyframes)?;
    let (Some(start), Some(end)) = (trajectory.start(), trajectory.end()) else {
        println!("{} contains no keyframes", input.display());
        return Ok(());
    };

    let samples = trajectory.samples(OutputRate::hz(rate)?).count();
    println!(
        "{} keyframes, {:.2}s to {:.2}s, {} samples at {} Hz",
        keyframes.len(),
        start,
        end,
        samples,
        rate
    );
    for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let time = start + (end - start) * fraction;
        if let Some(pose) = trajectory.sample_at(time) {
            println!(
                "  t={time:>8.3}  x={:>7.2} y={:>7.2} z={:>7.2} roll={:>7.2} pitch={:>7.2} yaw={:>7.2} body_yaw={:>7.2}",
                pose.x, pose.y, pose.z, pose.roll, pose.pitch, pose.yaw, pose.body_yaw
            );
        }
    }
    Ok(())
}

fn run_play(
    input: &Path,
    config: Option<&Path>,
    rate: Option<f64>,
) -> music_choreographer_core::Result<()> {
    let mut config = load_config(config)?;
    if let Some(rate) = rate {
        config.playback.output_rate_hz = rate;
    }

    let request = load_play_request(input)?;
    let choreographer = Choreographer::new(config, VariationCatalog::builtin())?;
    let player = Player::new(
        choreographer,
        Box::new(TracingActuator::new()),
        Box::new(SilentAudio),
    )?;

    let outcome = player.play(request)?.wait()?;
    tracing::info!(?outcome, "playback ended");
    println!("{} poses sent", outcome.frames());
    Ok(())
}

fn run_catalog() -> music_choreographer_core::Result<()> {
    let choreographer = Choreographer::with_defaults()?;
    let catalog = choreographer.catalog();
    println!("catalog version {}", catalog.version());
    for tier in EnergyTier::ALL {
        let profile = choreographer.profile(tier);
        println!(
            "{tier} (amplitude {}, half-beats {:?}, {:?})",
            profile.amplitude,
            choreographer.half_beat_policy(tier),
            profile.half_beat_motion
        );
        for template in catalog.variations(tier) {
            let moves: Vec<&str> = template.slots.iter().map(|slot| slot.name.as_str()).collect();
            println!("  {}: {}", template.display_label(), moves.join(" / "));
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> music_choreographer_core::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Accepted feature files: a full stream with tagged beats, or main beats
/// only, in which case half-beats are synthesized.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureInput {
    Stream(FeatureStream),
    MainBeats {
        tempo_bpm: Option<f32>,
        main_beats: Vec<(f64, f32)>,
    },
}

fn parse_features(source: &str) -> music_choreographer_core::Result<FeatureStream> {
    match serde_json::from_str::<FeatureInput>(source)? {
        FeatureInput::Stream(stream) => {
            stream.validate()?;
            Ok(stream)
        }
        FeatureInput::MainBeats {
            tempo_bpm,
            main_beats,
        } => FeatureStream::from_main_beats(tempo_bpm, &main_beats),
    }
}

fn load_features(path: &Path) -> music_choreographer_core::Result<FeatureStream> {
    parse_features(&std::fs::read_to_string(path)?)
}

/// CSV files and choreography documents replay their keyframes; any other
/// JSON is treated as a feature stream and generated on the fly.
fn load_play_request(path: &Path) -> music_choreographer_core::Result<PlayRequest> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Ok(PlayRequest::Keyframes(record::load_csv(path)?));
    }

    let source = std::fs::read_to_string(path)?;
    match record::parse_json(&source) {
        Ok(document) => Ok(PlayRequest::Keyframes(document.keyframes)),
        Err(ChoreoError::Json(_)) => Ok(PlayRequest::Features(parse_features(&source)?)),
        Err(err) => Err(err),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Beat-driven dance choreography for robot heads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate keyframes from a feature file and export them.
    Generate {
        /// Feature stream JSON.
        input: PathBuf,
        /// Write the keyframe table here.
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write the full choreography document here.
        #[arg(long)]
        json: Option<PathBuf>,
        /// TOML engine configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Pick variations pseudo-randomly from this seed.
        #[arg(long)]
        seed: Option<u64>,
        /// Global amplitude factor.
        #[arg(long)]
        scale: Option<f32>,
    },
    /// Load an exported CSV/JSON and sample its trajectory.
    Replay {
        input: PathBuf,
        /// Sampling rate used to count trajectory samples.
        #[arg(long, default_value_t = 50.0)]
        rate: f64,
    },
    /// Play a feature file or an export through the dry-run actuator.
    Play {
        input: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the configured output rate.
        #[arg(long)]
        rate: Option<f64>,
    },
    /// List the built-in variation catalog.
    Catalog,
}
