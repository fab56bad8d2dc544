//! Analysis result types

use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use crate::features::key::templates::PITCH_CLASS_NAMES;
use crate::features::Genre;

/// Musical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(usize),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(usize),
}

impl Key {
    /// Get key name in display notation (e.g., "C", "F#", "Am", "D#m")
    ///
    /// Major keys are the note name alone; minor keys append a literal "m".
    ///
    /// # Example
    ///
    /// ```
    /// use jamtrack_analysis::analysis::result::Key;
    ///
    /// assert_eq!(Key::Major(0).name(), "C");
    /// assert_eq!(Key::Major(6).name(), "F#");
    /// assert_eq!(Key::Minor(9).name(), "Am");
    /// ```
    pub fn name(&self) -> String {
        match self {
            Key::Major(i) => PITCH_CLASS_NAMES[*i % 12].to_string(),
            Key::Minor(i) => format!("{}m", PITCH_CLASS_NAMES[*i % 12]),
        }
    }

    /// Get the canonical spelled-out name (e.g., "C major", "A minor")
    ///
    /// This is the form the scale-recommendation table is keyed by.
    pub fn canonical(&self) -> String {
        match self {
            Key::Major(i) => format!("{} major", PITCH_CLASS_NAMES[*i % 12]),
            Key::Minor(i) => format!("{} minor", PITCH_CLASS_NAMES[*i % 12]),
        }
    }
}

/// Complete analysis report, serializable to the JSON boundary shape
///
/// On success every musical field is populated and `error` is absent; on
/// failure only `error` is populated. Absent fields are skipped during
/// serialization, so the two JSON shapes are exactly
/// `{"success":true, "bpm":..., "key":..., "genre":..., "scales":..., "confidence":...}`
/// and `{"success":false, "error":...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Whether the analysis completed
    pub success: bool,

    /// Rounded tempo in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u32>,

    /// Detected key in display notation ("C", "Am", "F#", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Heuristic genre guess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,

    /// Recommended scales for improvising, in priority order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Vec<String>>,

    /// Per-field confidence levels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,

    /// Failure description, present only when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Build a successful report with the fixed confidence levels
    pub fn completed(bpm: u32, key: Key, genre: Genre, scales: Vec<String>) -> Self {
        Self {
            success: true,
            bpm: Some(bpm),
            key: Some(key.name()),
            genre: Some(genre),
            scales: Some(scales),
            confidence: Some(Confidence::default()),
            error: None,
        }
    }

    /// Build a failure report carrying only the error message
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            bpm: None,
            key: None,
            genre: None,
            scales: None,
            confidence: None,
            error: Some(error.into()),
        }
    }

    /// Serialize the report to a JSON string
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
