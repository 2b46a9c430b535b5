//! Mouse state tracker: look deltas and cursor capture.

use glam::Vec2;

/// Accumulates mouse motion during a frame.
///
/// While the cursor is captured for mouse-look, raw device deltas are
/// accumulated and `CursorMoved` positions ignored; uncaptured, deltas come
/// from position differences so the first entry into the window does not
/// produce a spurious jump.
#[derive(Debug, Clone)]
pub struct MouseState {
    position: Vec2,
    delta: Vec2,
    captured: bool,
    first_entry: bool,
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseState {
    /// A state with no accumulated motion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            delta: Vec2::ZERO,
            captured: false,
            first_entry: true,
        }
    }

    /// Process a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        if self.first_entry {
            // No previous position yet, so there is no delta to take.
            self.first_entry = false;
        } else if !self.captured {
            self.delta += new_pos - self.position;
        }
        self.position = new_pos;
    }

    /// Process a `DeviceEvent::MouseMotion` raw delta (used when captured).
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// Set cursor capture, applying grab and visibility to the window.
    pub fn set_captured(&mut self, window: &winit::window::Window, captured: bool) {
        use winit::window::CursorGrabMode;
        self.captured = captured;
        if captured {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
    }

    /// Set the captured flag without a window (for tests).
    pub fn set_captured_flag(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Clear the accumulated delta at end of frame.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
    }

    /// Cursor position in window coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Look delta accumulated since the last frame clear.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Whether the cursor is captured for mouse-look.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_produces_no_delta() {
        let mut ms = MouseState::new();
        ms.on_cursor_moved(640.0, 360.0);
        assert_eq!(ms.delta(), Vec2::ZERO);
        assert_eq!(ms.position(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_uncaptured_delta_is_position_difference() {
        let mut ms = MouseState::new();
        ms.on_cursor_moved(100.0, 200.0);
        ms.clear_transients();
        ms.on_cursor_moved(110.0, 195.0);
        let d = ms.delta();
        assert!((d.x - 10.0).abs() < f32::EPSILON);
        assert!((d.y + 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_captured_uses_raw_motion_only() {
        let mut ms = MouseState::new();
        ms.on_cursor_moved(0.0, 0.0);
        ms.set_captured_flag(true);
        ms.clear_transients();

        ms.on_cursor_moved(500.0, 500.0);
        assert_eq!(ms.delta(), Vec2::ZERO, "positions must be ignored while captured");

        ms.on_raw_motion(3.0, -2.0);
        ms.on_raw_motion(1.0, 1.0);
        assert_eq!(ms.delta(), Vec2::new(4.0, -1.0));
    }

    #[test]
    fn test_delta_resets_each_frame() {
        let mut ms = MouseState::new();
        ms.set_captured_flag(true);
        ms.on_raw_motion(5.0, 5.0);
        ms.clear_transients();
        assert_eq!(ms.delta(), Vec2::ZERO);
    }
}
