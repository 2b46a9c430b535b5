//! Ambient audio: exclusive looped surface cues and the crossfading
//! day/night ambience pair.
//!
//! Everything here is failure-tolerant. If the audio backend cannot be
//! created (no output device, headless CI) the engine comes up muted and
//! every operation is a no-op, so the rest of the scene never has to care.

mod assets;
mod engine;

pub use assets::AudioAssets;
pub use engine::{AudioEngine, AudioError, AudioVolumes};
