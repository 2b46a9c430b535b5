//! Day/night light cycle: the sun orbits the terrain and drags sky colour,
//! light colour, and the two ambient track volumes through four cardinal
//! times of day.

mod cycle;
mod uniform;

pub use cycle::{Cardinal, DayNightLight, LightState, ORBIT_MARGIN, ORBIT_RATE};
pub use uniform::LightUniform;
