//! End-to-end analysis pipeline
//!
//! Orchestrates one excerpt through load → feature extraction → key detection
//! → tempo rounding → genre heuristic → scale recommendation, and assembles
//! the report. This is the single recovery boundary: any failure in any stage
//! is caught here and reported as `{success: false, error}` — never a panic,
//! never partial musical fields.

use std::path::Path;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::{classify_genre, detect_key, round_bpm, SpectralSummary, TrackFeatures};
use crate::io::AudioSource;
use crate::FeatureExtractor;

use super::result::AnalysisReport;
use super::scales::recommend_scales;

/// Analyze one audio file end to end
///
/// Loads up to `config.max_duration_secs` of audio through `source`, extracts
/// features through `extractor`, and runs the full decision chain. Errors from
/// any stage are captured into the report rather than propagated.
///
/// # Example
///
/// ```no_run
/// use jamtrack_analysis::{analyze, AnalysisConfig};
/// use jamtrack_analysis::io::WavLoader;
/// # use jamtrack_analysis::{AnalysisError, FeatureExtractor, TrackFeatures};
/// # struct MyExtractor;
/// # impl FeatureExtractor for MyExtractor {
/// #     fn extract(&self, _: &[f32], _: u32) -> Result<TrackFeatures, AnalysisError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// let report = analyze(
///     "backing_track.wav",
///     &WavLoader,
///     &MyExtractor,
///     &AnalysisConfig::default(),
/// );
/// println!("{}", report.to_json().unwrap());
/// ```
pub fn analyze<P: AsRef<Path>>(
    path: P,
    source: &dyn AudioSource,
    extractor: &dyn FeatureExtractor,
    config: &AnalysisConfig,
) -> AnalysisReport {
    match run(path.as_ref(), source, extractor, config) {
        Ok(report) => report,
        Err(err) => {
            log::warn!("Analysis failed: {}", err);
            AnalysisReport::failed(err.to_string())
        }
    }
}

fn run(
    path: &Path,
    source: &dyn AudioSource,
    extractor: &dyn FeatureExtractor,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    log::debug!("Analyzing {}", path.display());
    let audio = source.load(path, config.max_duration_secs)?;
    log::debug!(
        "Loaded {} samples at {} Hz",
        audio.samples.len(),
        audio.sample_rate
    );
    let features = extractor.extract(&audio.samples, audio.sample_rate)?;
    analyze_features(&features)
}

/// Run the decision chain over already-extracted features
///
/// Entry point for callers that obtained [`TrackFeatures`] themselves. Unlike
/// [`analyze`] this propagates errors, leaving recovery to the caller.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for a non-positive tempo estimate or
/// a zero-variance chroma vector.
pub fn analyze_features(features: &TrackFeatures) -> Result<AnalysisReport, AnalysisError> {
    let bpm = round_bpm(features.tempo_bpm)?;
    let detection = detect_key(&features.chroma)?;

    let summary = SpectralSummary {
        centroid_hz: features.centroid_hz,
        rolloff_hz: features.rolloff_hz,
        zero_crossing_rate: features.zero_crossing_rate,
        tempo_bpm: bpm,
    };
    let genre = classify_genre(&summary);

    let scales = recommend_scales(&detection.key.canonical())
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok(AnalysisReport::completed(bpm, detection.key, genre, scales))
}
