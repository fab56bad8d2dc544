//! WAV file loading
//!
//! A bundled [`AudioSource`] for uncompressed WAV input: integer and float
//! sample formats, stereo-to-mono downmix, truncation to the requested
//! duration. Compressed formats are out of scope; plug in a different
//! `AudioSource` for those.

use std::path::Path;

use super::loader::{AudioSource, DecodedAudio};
use crate::error::AnalysisError;

/// `AudioSource` implementation backed by `hound`
#[derive(Debug, Clone, Copy, Default)]
pub struct WavLoader;

impl AudioSource for WavLoader {
    fn load(&self, path: &Path, max_duration_secs: f32) -> Result<DecodedAudio, AnalysisError> {
        let mut reader = hound::WavReader::open(path)
            .map_err(|e| AnalysisError::DecodingError(format!("{}: {}", path.display(), e)))?;
        let spec = reader.spec();

        if spec.channels == 0 {
            return Err(AnalysisError::DecodingError(format!(
                "{}: zero channels",
                path.display()
            )));
        }

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AnalysisError::DecodingError(e.to_string()))?,
            hound::SampleFormat::Int => {
                let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / max_value))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| AnalysisError::DecodingError(e.to_string()))?
            }
        };

        // Interleaved frames -> mono by channel average.
        let channels = spec.channels as usize;
        let mut mono: Vec<f32> = samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect();

        let max_samples = (max_duration_secs * spec.sample_rate as f32) as usize;
        mono.truncate(max_samples);

        log::debug!(
            "Loaded {}: {} mono samples at {} Hz ({} channel(s), {:?})",
            path.display(),
            mono.len(),
            spec.sample_rate,
            spec.channels,
            spec.sample_format
        );

        Ok(DecodedAudio {
            samples: mono,
            sample_rate: spec.sample_rate,
        })
    }
}
