//! GPU-side light representation written to a uniform buffer each frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::cycle::{DayNightLight, LightState};

/// Point-light uniform, 32 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightUniform {
    /// xyz = world-space light position, w = padding.
    pub position_padding: [f32; 4],
    /// xyz = light colour (linear RGB), w = padding.
    pub colour_padding: [f32; 4],
}

impl LightUniform {
    /// Pack the current light state for upload.
    pub fn from_state(cycle: &DayNightLight, state: &LightState) -> Self {
        let position = cycle.world_position(state);
        Self {
            position_padding: [position.x, position.y, position.z, 0.0],
            colour_padding: [
                state.light_colour.x,
                state.light_colour.y,
                state.light_colour.z,
                0.0,
            ],
        }
    }

    /// Light colour as a vector, mostly for tests.
    #[must_use]
    pub fn colour(&self) -> Vec3 {
        Vec3::new(
            self.colour_padding[0],
            self.colour_padding[1],
            self.colour_padding[2],
        )
    }
}
