//! Key detection algorithm
//!
//! Matches the time-averaged chroma distribution against rotated
//! Krumhansl-Schmuckler templates to find the most likely key.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Kessler, E. J. (1982). Tracing the Dynamic Changes in
//! Perceived Tonal Organization in a Spatial Representation of Musical Keys.
//! *Psychological Review*, 89(4), 334-368.

use super::templates::{MAJOR_PROFILE, MINOR_PROFILE};
use super::KeyDetection;
use crate::analysis::result::Key;
use crate::error::AnalysisError;
use crate::features::ChromaVector;

/// Detect the musical key of a chroma vector
///
/// Each profile is rotated through all 12 tonal centres and scored by Pearson
/// correlation against the input. Candidates are scanned in rotation order
/// 0..11 with major before minor inside each rotation; a later candidate
/// replaces the running best only on a strictly greater score, so ties resolve
/// to the earliest candidate.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma vector has zero
/// variance (all pitch classes equal, including the all-zero vector) —
/// correlation is undefined for such input.
///
/// # Example
///
/// ```
/// use jamtrack_analysis::features::key::{detect_key, templates};
/// use jamtrack_analysis::features::ChromaVector;
///
/// let chroma = ChromaVector::new(templates::rotated(&templates::MAJOR_PROFILE, 7));
/// let detection = detect_key(&chroma)?;
/// assert_eq!(detection.key.name(), "G");
/// # Ok::<(), jamtrack_analysis::AnalysisError>(())
/// ```
pub fn detect_key(chroma: &ChromaVector) -> Result<KeyDetection, AnalysisError> {
    let scores = key_scores(chroma)?;
    let (key, score) = best_candidate(&scores);
    log::debug!("Detected key: {} (correlation {:.4})", key.name(), score);
    Ok(KeyDetection { key, score })
}

/// Score all 24 key candidates in scan order
///
/// Returns (key, correlation) pairs ordered rotation 0..11, major before minor
/// inside each rotation. Exposed so callers can inspect runner-up keys.
///
/// # Errors
///
/// Same validation as [`detect_key`]: zero-variance chroma is rejected.
pub fn key_scores(chroma: &ChromaVector) -> Result<Vec<(Key, f32)>, AnalysisError> {
    let x = chroma.values();

    let first = x[0];
    if x.iter().all(|&v| v == first) {
        return Err(AnalysisError::InvalidInput(
            "Chroma vector has zero variance; key correlation is undefined".to_string(),
        ));
    }

    let xm = Moments::of(x);
    // Template mean and variance are rotation-invariant, so they are computed
    // once per mode from the unrotated profile.
    let major_m = Moments::of(&MAJOR_PROFILE);
    let minor_m = Moments::of(&MINOR_PROFILE);

    let mut scores = Vec::with_capacity(24);
    for shift in 0..12 {
        scores.push((
            Key::Major(shift),
            correlation(x, &xm, &MAJOR_PROFILE, &major_m, shift),
        ));
        scores.push((
            Key::Minor(shift),
            correlation(x, &xm, &MINOR_PROFILE, &minor_m, shift),
        ));
    }
    Ok(scores)
}

/// Sum and sum-of-squares of a 12-element vector
struct Moments {
    sum: f32,
    sum_sq: f32,
}

impl Moments {
    fn of(v: &[f32; 12]) -> Self {
        let mut sum = 0.0f32;
        let mut sum_sq = 0.0f32;
        for &value in v {
            sum += value;
            sum_sq += value * value;
        }
        Self { sum, sum_sq }
    }

    fn variance_times_n(&self) -> f32 {
        self.sum_sq - self.sum * self.sum / 12.0
    }
}

/// Pearson correlation between `x` and the template rotated by `shift`
///
/// The rotated template is addressed in place (`rotated[j] = template[(j - shift) % 12]`)
/// rather than materialized.
fn correlation(
    x: &[f32; 12],
    xm: &Moments,
    template: &[f32; 12],
    tm: &Moments,
    shift: usize,
) -> f32 {
    let mut dot = 0.0f32;
    for (j, &xv) in x.iter().enumerate() {
        dot += xv * template[(j + 12 - shift) % 12];
    }
    let cov = dot - xm.sum * tm.sum / 12.0;
    (cov / (xm.variance_times_n() * tm.variance_times_n()).sqrt()).clamp(-1.0, 1.0)
}

/// Select the best candidate with strict-greater replacement
///
/// The first candidate wins ties; later equal scores are not adopted.
fn best_candidate(scores: &[(Key, f32)]) -> (Key, f32) {
    let mut best = scores[0];
    for &candidate in &scores[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best
}
