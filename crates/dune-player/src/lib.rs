//! First-person camera: mouse look, walk/fly movement resolved against the
//! terrain, and the surface cue triggers that feed the audio engine.

mod controller;
mod pose;

pub use controller::{
    BASE_SPEED, CameraController, CameraMode, EYE_HEIGHT, FootstepSink, RUN_MULTIPLIER,
    SPAWN_OFFSET,
};
pub use pose::{CameraPose, DEFAULT_SENSITIVITY, PITCH_LIMIT_DEGREES};
