//! Frame-coherent keyboard and mouse state for the desert walkthrough.
//!
//! The scene consumes a small fixed key set: WASD movement, Shift to run,
//! V/C to toggle fly/walk, Escape to quit. Physical key codes are used
//! throughout so the bindings hold on any keyboard layout.

mod keyboard;
mod mouse;

pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;

pub use winit::keyboard::KeyCode;

/// The bindings the scene queries each frame.
pub mod bindings {
    use winit::keyboard::KeyCode;

    /// Move forward.
    pub const FORWARD: KeyCode = KeyCode::KeyW;
    /// Move backward.
    pub const BACKWARD: KeyCode = KeyCode::KeyS;
    /// Strafe left.
    pub const LEFT: KeyCode = KeyCode::KeyA;
    /// Strafe right.
    pub const RIGHT: KeyCode = KeyCode::KeyD;
    /// Run modifier.
    pub const RUN: KeyCode = KeyCode::ShiftLeft;
    /// Switch the camera into fly mode.
    pub const FLY: KeyCode = KeyCode::KeyV;
    /// Switch the camera into walk mode.
    pub const WALK: KeyCode = KeyCode::KeyC;
    /// Quit the application.
    pub const QUIT: KeyCode = KeyCode::Escape;
}
