//! Heuristic genre classification
//!
//! A rough guess from spectral brightness, noisiness, and tempo. This is an
//! ordered rule chain, not a trained model; its confidence is always reported
//! as low. Rules are evaluated in sequence and the first match wins, so the
//! order is part of the contract.

use serde::{Deserialize, Serialize};

use super::SpectralSummary;

/// Genre labels the classifier can produce
///
/// A fixed closed set; `Other` is the fallback when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    /// Bright and noisy at a driving tempo, or mid-fast tempo by default
    Rock,
    /// Bright and noisy below 140 BPM
    Metal,
    /// Dark spectrum at a slow tempo
    Blues,
    /// Dark spectrum at a moderate-or-faster tempo
    #[serde(rename = "R&B")]
    RnB,
    /// Very fast tempo
    Punk,
    /// Slow with limited high-frequency energy
    Jazz,
    /// Mid-tempo default
    Pop,
    /// No rule matched
    Other,
}

impl Genre {
    /// Human-readable label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Rock => "Rock",
            Genre::Metal => "Metal",
            Genre::Blues => "Blues",
            Genre::RnB => "R&B",
            Genre::Punk => "Punk",
            Genre::Jazz => "Jazz",
            Genre::Pop => "Pop",
            Genre::Other => "Other",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = fn(&SpectralSummary) -> Option<Genre>;

/// Ordered rule chain; earlier rules shadow later ones.
const RULES: [Rule; 6] = [
    bright_and_noisy,
    dark_spectrum,
    very_fast,
    slow_and_mellow,
    mid_tempo,
    driving_tempo,
];

/// Classify a rough genre from spectral statistics and tempo
///
/// Evaluates the rule chain in order and returns the first match, or
/// [`Genre::Other`] when nothing matches. Pure function of its input.
pub fn classify_genre(summary: &SpectralSummary) -> Genre {
    let genre = RULES
        .iter()
        .find_map(|rule| rule(summary))
        .unwrap_or(Genre::Other);
    log::debug!(
        "Genre heuristic: {} (centroid {:.0} Hz, rolloff {:.0} Hz, zcr {:.3}, {} BPM)",
        genre,
        summary.centroid_hz,
        summary.rolloff_hz,
        summary.zero_crossing_rate,
        summary.tempo_bpm
    );
    genre
}

/// High centroid and zero-crossing rate: distorted guitars, crash-heavy mixes
fn bright_and_noisy(s: &SpectralSummary) -> Option<Genre> {
    if s.centroid_hz > 3000.0 && s.zero_crossing_rate > 0.15 {
        if s.tempo_bpm > 140 {
            Some(Genre::Rock)
        } else {
            Some(Genre::Metal)
        }
    } else {
        None
    }
}

/// Low centroid: bass-heavy, mellow timbres
fn dark_spectrum(s: &SpectralSummary) -> Option<Genre> {
    if s.centroid_hz < 1500.0 {
        if s.tempo_bpm < 100 {
            Some(Genre::Blues)
        } else {
            Some(Genre::RnB)
        }
    } else {
        None
    }
}

fn very_fast(s: &SpectralSummary) -> Option<Genre> {
    if s.tempo_bpm > 160 {
        Some(Genre::Punk)
    } else {
        None
    }
}

/// Slow tempo with rolled-off highs
fn slow_and_mellow(s: &SpectralSummary) -> Option<Genre> {
    if s.tempo_bpm < 90 && s.rolloff_hz < 3000.0 {
        Some(Genre::Jazz)
    } else {
        None
    }
}

fn mid_tempo(s: &SpectralSummary) -> Option<Genre> {
    if (90..=120).contains(&s.tempo_bpm) {
        Some(Genre::Pop)
    } else {
        None
    }
}

fn driving_tempo(s: &SpectralSummary) -> Option<Genre> {
    if s.tempo_bpm > 120 && s.tempo_bpm <= 140 {
        Some(Genre::Rock)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(centroid_hz: f32, rolloff_hz: f32, zcr: f32, tempo_bpm: u32) -> SpectralSummary {
        SpectralSummary {
            centroid_hz,
            rolloff_hz,
            zero_crossing_rate: zcr,
            tempo_bpm,
        }
    }

    #[test]
    fn test_bright_and_noisy_splits_on_tempo() {
        assert_eq!(classify_genre(&summary(3500.0, 5000.0, 0.2, 150)), Genre::Rock);
        assert_eq!(classify_genre(&summary(3500.0, 5000.0, 0.2, 140)), Genre::Metal);
    }

    #[test]
    fn test_dark_spectrum_splits_on_tempo() {
        assert_eq!(classify_genre(&summary(1200.0, 2500.0, 0.05, 80)), Genre::Blues);
        assert_eq!(classify_genre(&summary(1200.0, 2500.0, 0.05, 100)), Genre::RnB);
    }

    #[test]
    fn test_tempo_bands() {
        assert_eq!(classify_genre(&summary(2000.0, 4000.0, 0.1, 170)), Genre::Punk);
        assert_eq!(classify_genre(&summary(2000.0, 2500.0, 0.1, 80)), Genre::Jazz);
        assert_eq!(classify_genre(&summary(2000.0, 4000.0, 0.1, 110)), Genre::Pop);
        assert_eq!(classify_genre(&summary(2000.0, 4000.0, 0.1, 130)), Genre::Rock);
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Satisfies both the bright-and-noisy rule and the driving-tempo rule;
        // the earlier rule must decide, giving Metal (tempo <= 140), not Rock.
        assert_eq!(classify_genre(&summary(3500.0, 5000.0, 0.2, 130)), Genre::Metal);
    }

    #[test]
    fn test_band_edges() {
        // Exactly 90 and 120 are Pop; slow-and-mellow requires strictly below 90.
        assert_eq!(classify_genre(&summary(2000.0, 2500.0, 0.1, 90)), Genre::Pop);
        assert_eq!(classify_genre(&summary(2000.0, 4000.0, 0.1, 120)), Genre::Pop);
        // 160 is not "very fast"; it falls through to Other.
        assert_eq!(classify_genre(&summary(2000.0, 4000.0, 0.1, 160)), Genre::Other);
    }

    #[test]
    fn test_no_rule_matches() {
        // Slow but with extended highs: misses the Jazz rolloff requirement.
        assert_eq!(classify_genre(&summary(2000.0, 5000.0, 0.1, 80)), Genre::Other);
    }

    #[test]
    fn test_labels_match_serialized_form() {
        assert_eq!(serde_json::to_string(&Genre::RnB).unwrap(), "\"R&B\"");
        assert_eq!(serde_json::to_string(&Genre::Rock).unwrap(), "\"Rock\"");
        assert_eq!(Genre::RnB.label(), "R&B");
    }
}
