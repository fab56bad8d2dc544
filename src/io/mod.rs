//! Audio input boundary

pub mod loader;
pub mod wav;

pub use loader::{AudioSource, DecodedAudio};
pub use wav::WavLoader;
