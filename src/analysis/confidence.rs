//! Per-field confidence levels
//!
//! The levels are fixed constants, not computed from the actual correlation
//! score or signal quality: beat tracking is dependable on steady backing
//! tracks, template-based key finding is fair, and the genre heuristic is a
//! rough guess by construction. This is a known accuracy limitation.

use serde::{Deserialize, Serialize};

/// Qualitative confidence level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Reliable for typical input
    High,
    /// Usually right, verify by ear
    Medium,
    /// A hint at best
    Low,
}

/// Confidence levels attached to each reported field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    /// Tempo confidence (always high)
    pub bpm: ConfidenceLevel,

    /// Key confidence (always medium)
    pub key: ConfidenceLevel,

    /// Genre confidence (always low; the classifier is a heuristic)
    pub genre: ConfidenceLevel,
}

impl Default for Confidence {
    fn default() -> Self {
        Self {
            bpm: ConfidenceLevel::High,
            key: ConfidenceLevel::Medium,
            genre: ConfidenceLevel::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_levels() {
        let c = Confidence::default();
        assert_eq!(c.bpm, ConfidenceLevel::High);
        assert_eq!(c.key, ConfidenceLevel::Medium);
        assert_eq!(c.genre, ConfidenceLevel::Low);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_value(Confidence::default()).unwrap();
        assert_eq!(json["bpm"], "high");
        assert_eq!(json["key"], "medium");
        assert_eq!(json["genre"], "low");
    }
}
