//! Tempo rounding
//!
//! The external beat tracker delivers a real-valued BPM estimate; the analysis
//! reports whole BPM. Rounding is half-away-from-zero (`f32::round`).

use crate::error::AnalysisError;

/// Round a provisional tempo estimate to the nearest whole BPM
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for non-finite, zero, or negative
/// estimates, and for estimates below 0.5 BPM (which would round to zero).
///
/// # Example
///
/// ```
/// use jamtrack_analysis::features::tempo::round_bpm;
///
/// assert_eq!(round_bpm(119.6)?, 120);
/// assert_eq!(round_bpm(120.5)?, 121);
/// # Ok::<(), jamtrack_analysis::AnalysisError>(())
/// ```
pub fn round_bpm(tempo_bpm: f32) -> Result<u32, AnalysisError> {
    if !tempo_bpm.is_finite() || tempo_bpm <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Tempo estimate must be a positive number of BPM, got {}",
            tempo_bpm
        )));
    }
    let rounded = tempo_bpm.round();
    if rounded < 1.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Tempo estimate {} BPM rounds to zero",
            tempo_bpm
        )));
    }
    Ok(rounded as u32)
}
