//! Scale recommendations for improvising over a detected key
//!
//! A curated table keyed by the canonical key name ("C major", "A minor").
//! Lookup is exact-string: sharp and flat spellings are independent rows with
//! independently curated lists, because guitarists favour different fingerings
//! per spelling. Keys outside the table fall back to a generic
//! pentatonic/blues triple.

/// Fallback recommendations for keys without a curated entry
pub const FALLBACK_SCALES: &[&str] = &["Major Pentatonic", "Minor Pentatonic", "Blues Scale"];

/// Curated (canonical key, ordered scale list) rows
const SCALE_TABLE: &[(&str, &[&str])] = &[
    (
        "C major",
        &["C Major (Ionian)", "C Major Pentatonic", "A Minor Pentatonic", "A Natural Minor"],
    ),
    (
        "C minor",
        &["C Minor (Aeolian)", "C Minor Pentatonic", "C Dorian", "C Blues Scale"],
    ),
    (
        "C# major",
        &["C# Major (Ionian)", "C# Major Pentatonic", "A# Minor Pentatonic"],
    ),
    (
        "Db major",
        &["Db Major (Ionian)", "Db Major Pentatonic", "Bb Minor Pentatonic"],
    ),
    (
        "C# minor",
        &["C# Minor (Aeolian)", "C# Minor Pentatonic", "C# Dorian"],
    ),
    (
        "D major",
        &["D Major (Ionian)", "D Major Pentatonic", "B Minor Pentatonic", "D Mixolydian"],
    ),
    (
        "D minor",
        &["D Minor (Aeolian)", "D Minor Pentatonic", "D Dorian", "D Blues Scale"],
    ),
    (
        "D# major",
        &["D# Major (Ionian)", "D# Major Pentatonic", "C Minor Pentatonic"],
    ),
    (
        "Eb major",
        &["Eb Major (Ionian)", "Eb Major Pentatonic", "C Minor Pentatonic"],
    ),
    (
        "D# minor",
        &["D# Minor (Aeolian)", "D# Minor Pentatonic", "D# Dorian"],
    ),
    (
        "E major",
        &["E Major (Ionian)", "E Major Pentatonic", "C# Minor Pentatonic", "E Mixolydian"],
    ),
    (
        "E minor",
        &["E Minor (Aeolian)", "E Minor Pentatonic", "E Dorian", "E Blues Scale"],
    ),
    (
        "F major",
        &["F Major (Ionian)", "F Major Pentatonic", "D Minor Pentatonic", "F Lydian"],
    ),
    (
        "F minor",
        &["F Minor (Aeolian)", "F Minor Pentatonic", "F Dorian", "F Blues Scale"],
    ),
    (
        "F# major",
        &["F# Major (Ionian)", "F# Major Pentatonic", "D# Minor Pentatonic"],
    ),
    (
        "Gb major",
        &["Gb Major (Ionian)", "Gb Major Pentatonic", "Eb Minor Pentatonic"],
    ),
    (
        "F# minor",
        &["F# Minor (Aeolian)", "F# Minor Pentatonic", "F# Dorian"],
    ),
    (
        "G major",
        &["G Major (Ionian)", "G Major Pentatonic", "E Minor Pentatonic", "G Mixolydian"],
    ),
    (
        "G minor",
        &["G Minor (Aeolian)", "G Minor Pentatonic", "G Dorian", "G Blues Scale"],
    ),
    (
        "G# major",
        &["G# Major (Ionian)", "G# Major Pentatonic", "F Minor Pentatonic"],
    ),
    (
        "Ab major",
        &["Ab Major (Ionian)", "Ab Major Pentatonic", "F Minor Pentatonic"],
    ),
    (
        "G# minor",
        &["G# Minor (Aeolian)", "G# Minor Pentatonic", "G# Dorian"],
    ),
    (
        "A major",
        &["A Major (Ionian)", "A Major Pentatonic", "F# Minor Pentatonic", "A Mixolydian"],
    ),
    (
        "A minor",
        &["A Minor (Aeolian)", "A Minor Pentatonic", "A Dorian", "A Blues Scale"],
    ),
    (
        "A# major",
        &["A# Major (Ionian)", "A# Major Pentatonic", "G Minor Pentatonic"],
    ),
    (
        "Bb major",
        &["Bb Major (Ionian)", "Bb Major Pentatonic", "G Minor Pentatonic"],
    ),
    (
        "A# minor",
        &["A# Minor (Aeolian)", "A# Minor Pentatonic", "A# Dorian"],
    ),
    (
        "B major",
        &["B Major (Ionian)", "B Major Pentatonic", "G# Minor Pentatonic", "B Mixolydian"],
    ),
    (
        "B minor",
        &["B Minor (Aeolian)", "B Minor Pentatonic", "B Dorian", "B Blues Scale"],
    ),
];

/// Look up recommended scales for a canonical key name
///
/// Returns the curated list in priority order, or [`FALLBACK_SCALES`] when the
/// key has no entry. Matching is exact (case- and spacing-sensitive); no
/// enharmonic equivalence is applied.
///
/// # Example
///
/// ```
/// use jamtrack_analysis::analysis::scales::recommend_scales;
///
/// assert_eq!(recommend_scales("G major")[0], "G Major (Ionian)");
/// assert_eq!(recommend_scales("H major").len(), 3);
/// ```
pub fn recommend_scales(canonical_key: &str) -> &'static [&'static str] {
    SCALE_TABLE
        .iter()
        .find(|(key, _)| *key == canonical_key)
        .map(|(_, scales)| *scales)
        .unwrap_or(FALLBACK_SCALES)
}
