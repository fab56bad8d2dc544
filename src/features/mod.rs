//! Feature boundary types and classifiers
//!
//! The low-level DSP (chroma extraction, spectral statistics, beat tracking) is
//! an external collaborator reached through [`FeatureExtractor`]. This module
//! defines the types that cross that boundary plus the classifiers that turn
//! features into musical conclusions:
//!
//! - Key detection (Krumhansl-Schmuckler template correlation)
//! - Tempo rounding
//! - Heuristic genre classification

pub mod genre;
pub mod key;
pub mod tempo;

pub use genre::{classify_genre, Genre};
pub use key::{detect_key, KeyDetection};
pub use tempo::round_bpm;

use crate::error::AnalysisError;

/// Time-averaged pitch-class energy vector
///
/// Index `i` holds the energy of pitch class `i` (C = 0, C# = 1, ..., B = 11),
/// folded across octaves and averaged over the excerpt. Values are raw
/// energies; no normalization is required from the extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaVector([f32; 12]);

impl ChromaVector {
    /// Create a chroma vector from a fixed-size array
    pub fn new(values: [f32; 12]) -> Self {
        Self(values)
    }

    /// Create a chroma vector from a slice, validating its shape
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the slice does not have exactly
    /// 12 elements, or if any element is negative or non-finite.
    pub fn from_slice(values: &[f32]) -> Result<Self, AnalysisError> {
        if values.len() != 12 {
            return Err(AnalysisError::InvalidInput(format!(
                "Chroma vector must have 12 elements, got {}",
                values.len()
            )));
        }
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v < 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Chroma energy at pitch class {} must be finite and non-negative, got {}",
                    i, v
                )));
            }
        }
        let mut arr = [0.0f32; 12];
        arr.copy_from_slice(values);
        Ok(Self(arr))
    }

    /// Access the underlying 12 pitch-class energies
    pub fn values(&self) -> &[f32; 12] {
        &self.0
    }
}

/// Spectral summary statistics for one excerpt
///
/// Supplied entirely by the external feature extractor (apart from the tempo,
/// which has already been rounded by [`round_bpm`]); the core only reads it.
#[derive(Debug, Clone, Copy)]
pub struct SpectralSummary {
    /// Mean spectral centroid in Hz
    pub centroid_hz: f32,

    /// Mean spectral rolloff in Hz
    pub rolloff_hz: f32,

    /// Mean zero-crossing rate, in [0, 1]
    pub zero_crossing_rate: f32,

    /// Rounded tempo in beats per minute
    pub tempo_bpm: u32,
}

/// Raw features for one excerpt, as delivered by the extractor
#[derive(Debug, Clone)]
pub struct TrackFeatures {
    /// Provisional tempo estimate in BPM (not yet rounded)
    pub tempo_bpm: f32,

    /// Time-averaged chroma vector
    pub chroma: ChromaVector,

    /// Mean spectral centroid in Hz
    pub centroid_hz: f32,

    /// Mean spectral rolloff in Hz
    pub rolloff_hz: f32,

    /// Mean zero-crossing rate, in [0, 1]
    pub zero_crossing_rate: f32,
}

/// Boundary to the external DSP feature extractor
///
/// Implementations compute tempo, chroma, and spectral statistics from a
/// decoded signal. They may fail (signal too short, silent input); such
/// failures should be reported as [`AnalysisError::ExtractionError`] so the
/// pipeline can turn them into a failure report.
pub trait FeatureExtractor {
    /// Extract [`TrackFeatures`] from mono samples at the given sample rate
    fn extract(&self, samples: &[f32], sample_rate: u32) -> Result<TrackFeatures, AnalysisError>;
}
