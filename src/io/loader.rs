//! Decode boundary to the external audio loader

use std::path::Path;

use crate::error::AnalysisError;

/// Decoded mono audio excerpt
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Excerpt duration in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Boundary to the audio decoding collaborator
///
/// Implementations decode a file into mono samples, truncated to at most
/// `max_duration_secs`. Decode problems (missing file, unsupported codec,
/// corrupt stream) surface as [`AnalysisError::DecodingError`].
pub trait AudioSource {
    /// Decode up to `max_duration_secs` of audio from `path`
    fn load(&self, path: &Path, max_duration_secs: f32) -> Result<DecodedAudio, AnalysisError>;
}
