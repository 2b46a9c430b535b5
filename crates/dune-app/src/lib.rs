//! Application shell: config and logging bootstrap, the winit window, the
//! fixed-timestep frame loop, and the scene wiring.

pub mod game_loop;
pub mod scene;
pub mod window;

pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use scene::SceneState;
pub use window::{App, run};
