//! Keyboard state tracker keyed on physical scan codes.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event, convenient for tests.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

/// Accumulates key events during a frame and answers held / just-pressed
/// queries. Call [`clear_transients`](Self::clear_transients) once per frame
/// after the update step.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// A state with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Process a [`RawKeyEvent`]. Repeat events are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.pressed.insert(event.key);
                self.just_pressed.insert(event.key);
            }
            ElementState::Released => {
                self.pressed.remove(&event.key);
            }
        }
    }

    /// `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&PhysicalKey::Code(key))
    }

    /// `true` only during the frame the key transitioned to pressed; used
    /// for the walk/fly mode toggles so holding the key doesn't re-trigger.
    #[must_use]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&PhysicalKey::Code(key))
    }

    /// Clear the just-pressed set at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: KeyCode, state: ElementState, repeat: bool) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat,
        }
    }

    #[test]
    fn test_initial_state_has_no_keys_pressed() {
        let kb = KeyboardState::new();
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::ShiftLeft, KeyCode::Escape] {
            assert!(!kb.is_pressed(key));
            assert!(!kb.just_pressed(key));
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        assert!(kb.is_pressed(KeyCode::KeyW));
        assert!(kb.just_pressed(KeyCode::KeyW));

        kb.process_raw(raw(KeyCode::KeyW, ElementState::Released, false));
        assert!(!kb.is_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyV, ElementState::Pressed, false));
        assert!(kb.just_pressed(KeyCode::KeyV));
        kb.clear_transients();
        assert!(!kb.just_pressed(KeyCode::KeyV));
        assert!(kb.is_pressed(KeyCode::KeyV));
    }

    #[test]
    fn test_repeat_events_are_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, false));
        kb.clear_transients();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, true));
        assert!(!kb.just_pressed(KeyCode::KeyA), "repeats must not re-trigger");
        assert!(kb.is_pressed(KeyCode::KeyA));
    }

    #[test]
    fn test_keys_are_tracked_independently() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Released, false));
        assert!(!kb.is_pressed(KeyCode::KeyW));
        assert!(kb.is_pressed(KeyCode::KeyD));
    }
}
