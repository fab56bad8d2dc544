//! Krumhansl-Schmuckler key profiles
//!
//! Reference pitch-class weight templates for major and minor keys, derived
//! from the probe-tone experiments of Krumhansl & Kessler (1982). The profile
//! as written is rooted at C; rotating it moves the tonic to another pitch
//! class.

/// Major key profile, rooted at C (index 0 = tonic)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile, rooted at C (index 0 = tonic)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Pitch-class names in semitone order starting at C
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Rotate a profile so its tonic moves to pitch class `shift`
///
/// A shift of `i` moves index 0 to index `i`, wrapping around; `rotated(p, 0)`
/// is the profile unchanged.
pub fn rotated(profile: &[f32; 12], shift: usize) -> [f32; 12] {
    let mut out = [0.0f32; 12];
    for (j, &v) in profile.iter().enumerate() {
        out[(j + shift) % 12] = v;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_zero_is_identity() {
        assert_eq!(rotated(&MAJOR_PROFILE, 0), MAJOR_PROFILE);
        assert_eq!(rotated(&MINOR_PROFILE, 0), MINOR_PROFILE);
    }

    #[test]
    fn test_rotation_moves_tonic() {
        // Rotating by 7 puts the tonic weight at G.
        let g_major = rotated(&MAJOR_PROFILE, 7);
        assert_eq!(g_major[7], MAJOR_PROFILE[0]);
        assert_eq!(g_major[8], MAJOR_PROFILE[1]);
        // Wrap-around: index 11 of the source lands at (11 + 7) % 12 = 6.
        assert_eq!(g_major[6], MAJOR_PROFILE[11]);
    }

    #[test]
    fn test_rotation_preserves_weights() {
        let mut rotated_sum: f32 = rotated(&MINOR_PROFILE, 5).iter().sum();
        let original_sum: f32 = MINOR_PROFILE.iter().sum();
        rotated_sum -= original_sum;
        assert!(rotated_sum.abs() < 1e-6);
    }
}
