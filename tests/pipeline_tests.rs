//! Integration tests for the analysis pipeline
//!
//! The decode and feature-extraction collaborators are stubbed so the decision
//! logic can be exercised end to end with known inputs.

use std::path::Path;

use jamtrack_analysis::features::key::templates::{rotated, MAJOR_PROFILE, MINOR_PROFILE};
use jamtrack_analysis::io::{AudioSource, DecodedAudio};
use jamtrack_analysis::{
    analyze, AnalysisConfig, AnalysisError, ChromaVector, FeatureExtractor, Genre, TrackFeatures,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Loader stub returning a fixed one-second buffer
struct StubLoader;

impl AudioSource for StubLoader {
    fn load(&self, _path: &Path, _max_duration_secs: f32) -> Result<DecodedAudio, AnalysisError> {
        Ok(DecodedAudio {
            samples: vec![0.0; 44100],
            sample_rate: 44100,
        })
    }
}

/// Loader stub that always fails to decode
struct FailingLoader;

impl AudioSource for FailingLoader {
    fn load(&self, path: &Path, _max_duration_secs: f32) -> Result<DecodedAudio, AnalysisError> {
        Err(AnalysisError::DecodingError(format!(
            "{}: unsupported codec",
            path.display()
        )))
    }
}

/// Extractor stub returning canned features
struct StubExtractor(TrackFeatures);

impl FeatureExtractor for StubExtractor {
    fn extract(&self, _: &[f32], _: u32) -> Result<TrackFeatures, AnalysisError> {
        Ok(self.0.clone())
    }
}

/// Extractor stub that always fails
struct FailingExtractor;

impl FeatureExtractor for FailingExtractor {
    fn extract(&self, _: &[f32], _: u32) -> Result<TrackFeatures, AnalysisError> {
        Err(AnalysisError::ExtractionError(
            "signal too short for feature extraction".to_string(),
        ))
    }
}

#[test]
fn test_end_to_end_c_major_metal() {
    init_logging();
    let extractor = StubExtractor(TrackFeatures {
        tempo_bpm: 130.0,
        chroma: ChromaVector::new(rotated(&MAJOR_PROFILE, 0)),
        centroid_hz: 3500.0,
        rolloff_hz: 4000.0,
        zero_crossing_rate: 0.2,
    });

    let report = analyze("track.mp3", &StubLoader, &extractor, &AnalysisConfig::default());

    assert!(report.success);
    assert_eq!(report.bpm, Some(130));
    assert_eq!(report.key.as_deref(), Some("C"));
    assert_eq!(report.genre, Some(Genre::Metal));
    assert_eq!(
        report.scales.as_deref().unwrap(),
        &[
            "C Major (Ionian)",
            "C Major Pentatonic",
            "A Minor Pentatonic",
            "A Natural Minor"
        ]
    );
    assert!(report.error.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["bpm"], 130);
    assert_eq!(json["key"], "C");
    assert_eq!(json["genre"], "Metal");
    assert_eq!(json["confidence"]["bpm"], "high");
    assert_eq!(json["confidence"]["key"], "medium");
    assert_eq!(json["confidence"]["genre"], "low");
    assert!(json.get("error").is_none());
}

#[test]
fn test_extraction_failure_becomes_failure_report() {
    init_logging();
    let report = analyze(
        "track.mp3",
        &StubLoader,
        &FailingExtractor,
        &AnalysisConfig::default(),
    );

    assert!(!report.success);
    assert_eq!(
        report.error.as_deref(),
        Some("Extraction error: signal too short for feature extraction")
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], false);
    for field in ["bpm", "key", "genre", "scales", "confidence"] {
        assert!(json.get(field).is_none(), "{} must be absent on failure", field);
    }
}

#[test]
fn test_decode_failure_becomes_failure_report() {
    init_logging();
    let extractor = StubExtractor(TrackFeatures {
        tempo_bpm: 120.0,
        chroma: ChromaVector::new(rotated(&MAJOR_PROFILE, 0)),
        centroid_hz: 2000.0,
        rolloff_hz: 4000.0,
        zero_crossing_rate: 0.1,
    });

    let report = analyze(
        "broken.ogg",
        &FailingLoader,
        &extractor,
        &AnalysisConfig::default(),
    );

    assert!(!report.success);
    let error = report.error.unwrap();
    assert!(error.contains("broken.ogg"), "error was: {}", error);
}

#[test]
fn test_degenerate_chroma_becomes_failure_report() {
    init_logging();
    // A silent excerpt averages to an all-zero chroma vector; correlation is
    // undefined there, so the pipeline reports failure instead of defaulting
    // to C major.
    let extractor = StubExtractor(TrackFeatures {
        tempo_bpm: 120.0,
        chroma: ChromaVector::new([0.0; 12]),
        centroid_hz: 2000.0,
        rolloff_hz: 4000.0,
        zero_crossing_rate: 0.1,
    });

    let report = analyze(
        "silence.wav",
        &StubLoader,
        &extractor,
        &AnalysisConfig::default(),
    );

    assert!(!report.success);
    assert!(report.error.unwrap().contains("zero variance"));
    assert!(report.bpm.is_none());
}

#[test]
fn test_minor_key_report_round_trip() {
    init_logging();
    let extractor = StubExtractor(TrackFeatures {
        tempo_bpm: 84.6,
        chroma: ChromaVector::new(rotated(&MINOR_PROFILE, 4)),
        centroid_hz: 1800.0,
        rolloff_hz: 2600.0,
        zero_crossing_rate: 0.06,
    });

    let report = analyze("slow_jam.wav", &StubLoader, &extractor, &AnalysisConfig::default());

    assert!(report.success);
    assert_eq!(report.bpm, Some(85));
    assert_eq!(report.key.as_deref(), Some("Em"));
    assert_eq!(report.genre, Some(Genre::Jazz));
    assert_eq!(report.scales.as_deref().unwrap()[0], "E Minor (Aeolian)");

    // The JSON boundary round-trips through serde.
    let json = report.to_json().unwrap();
    let parsed: jamtrack_analysis::AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.bpm, Some(85));
    assert_eq!(parsed.key.as_deref(), Some("Em"));
}
