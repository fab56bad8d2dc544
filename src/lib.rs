//! # JamTrack Analysis
//!
//! A backing-track analysis engine answering "what should I play over this?":
//! tempo, key, a rough genre guess, and recommended improvisation scales, with
//! an honest confidence level per attribute.
//!
//! ## Features
//!
//! - **Key Detection**: Krumhansl-Schmuckler template correlation over a
//!   time-averaged chroma vector
//! - **Tempo**: whole-BPM rounding of an external beat-tracker estimate
//! - **Genre**: an ordered heuristic rule chain — deliberately low-confidence,
//!   not ML-grade classification
//! - **Scales**: curated per-key recommendation lists with a pentatonic/blues
//!   fallback
//!
//! ## Quick Start
//!
//! ```
//! use jamtrack_analysis::analyze_features;
//! use jamtrack_analysis::features::key::templates::{rotated, MAJOR_PROFILE};
//! use jamtrack_analysis::{ChromaVector, TrackFeatures};
//!
//! let features = TrackFeatures {
//!     tempo_bpm: 120.4,
//!     chroma: ChromaVector::new(rotated(&MAJOR_PROFILE, 7)),
//!     centroid_hz: 2100.0,
//!     rolloff_hz: 4200.0,
//!     zero_crossing_rate: 0.08,
//! };
//!
//! let report = analyze_features(&features)?;
//! assert_eq!(report.bpm, Some(120));
//! assert_eq!(report.key.as_deref(), Some("G"));
//! # Ok::<(), jamtrack_analysis::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline follows this flow:
//!
//! ```text
//! Audio Input → Decoding (AudioSource) → Feature Extraction (FeatureExtractor)
//!             → Key / Tempo / Genre → Scale Recommendation → AnalysisReport
//! ```
//!
//! Decoding and low-level DSP live behind the [`io::AudioSource`] and
//! [`FeatureExtractor`] traits; this crate contains the decision logic only
//! and computes no FFTs itself. A WAV-backed `AudioSource` is bundled in
//! [`io::WavLoader`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::confidence::{Confidence, ConfidenceLevel};
pub use analysis::pipeline::{analyze, analyze_features};
pub use analysis::result::{AnalysisReport, Key};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::{ChromaVector, FeatureExtractor, Genre, SpectralSummary, TrackFeatures};
