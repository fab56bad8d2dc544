//! Error types for the backing-track analysis engine

use std::fmt;

/// Errors that can occur during analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (bad chroma dimensions, non-positive tempo, ...)
    InvalidInput(String),

    /// Audio decoding error (missing file, unsupported format, corrupt stream)
    DecodingError(String),

    /// The external feature extractor failed (silence, too-short signal, ...)
    ExtractionError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::ExtractionError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AnalysisError::DecodingError("no such file".to_string());
        assert_eq!(err.to_string(), "Decoding error: no such file");

        let err = AnalysisError::ExtractionError("signal too short".to_string());
        assert_eq!(err.to_string(), "Extraction error: signal too short");
    }
}
