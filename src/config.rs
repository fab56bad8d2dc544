//! Configuration parameters for backing-track analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Maximum excerpt duration in seconds (default: 60.0)
    ///
    /// The audio loader is asked to truncate the decoded signal to this length
    /// before feature extraction. Sixty seconds is enough for a stable tempo
    /// and key estimate on a backing track while keeping analysis fast.
    pub max_duration_secs: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_duration_secs: 60.0,
        }
    }
}
