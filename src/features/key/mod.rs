//! Key detection
//!
//! Krumhansl-Schmuckler template matching over a time-averaged chroma vector:
//! 24 candidates (12 tonal centres x major/minor), scored by Pearson
//! correlation, first candidate wins ties.

pub mod detector;
pub mod templates;

pub use detector::{detect_key, key_scores};
pub use templates::{MAJOR_PROFILE, MINOR_PROFILE, PITCH_CLASS_NAMES};

use crate::analysis::result::Key;

/// Key detection result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDetection {
    /// Detected key (best match)
    pub key: Key,

    /// Pearson correlation of the winning candidate, in [-1, 1]
    pub score: f32,
}
