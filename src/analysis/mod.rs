//! Analysis orchestration and result assembly

pub mod confidence;
pub mod pipeline;
pub mod result;
pub mod scales;

pub use confidence::{Confidence, ConfidenceLevel};
pub use pipeline::{analyze, analyze_features};
pub use result::{AnalysisReport, Key};
pub use scales::recommend_scales;
