//! Walk/fly movement resolution against the terrain and surface cue
//! triggering.

use glam::Vec3;

use dune_input::{KeyboardState, MouseState, bindings};
use dune_terrain::{BiomeGroup, TerrainQuery};

use crate::pose::CameraPose;

/// Movement speed in units per second before the run multiplier.
pub const BASE_SPEED: f32 = 3.0;

/// Speed multiplier while the run key is held.
pub const RUN_MULTIPLIER: f32 = 4.0;

/// Eye height above the ground sample while walking.
pub const EYE_HEIGHT: f32 = 1.0;

/// Horizontal inset from the terrain's start corner to the walking spawn.
pub const SPAWN_OFFSET: f32 = 2.0;

/// Receives surface cue transitions from the controller.
///
/// At most one cue loops at a time; `start_cue` implies stopping whatever
/// else was playing.
pub trait FootstepSink {
    /// Start the looped cue for `group`, replacing any other cue.
    fn start_cue(&mut self, group: BiomeGroup);
    /// Stop whichever cue is playing.
    fn stop_cues(&mut self);
}

/// Movement mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    /// Ground-clamped walking. Height comes from the terrain.
    Walk,
    /// Free flight along the view direction.
    Fly,
}

/// First-person controller resolving input against the terrain each frame.
///
/// While walking, the proposed position's height is overwritten from the
/// ground sample taken at the position *before* the move, so the height
/// lags the horizontal motion by one frame. A proposed position outside
/// the terrain rectangle is silently discarded.
#[derive(Debug)]
pub struct CameraController {
    /// Current pose, exposed for view matrix extraction.
    pub pose: CameraPose,
    mode: CameraMode,
    spawn: Vec3,
    last_cue: Option<BiomeGroup>,
}

impl CameraController {
    /// Spawn a walking camera just inside the terrain's start corner, eye
    /// height above the ground there.
    pub fn new(query: &TerrainQuery) -> Self {
        let spawn = spawn_point(query);
        Self {
            pose: CameraPose::new(spawn),
            mode: CameraMode::Walk,
            spawn,
            last_cue: None,
        }
    }

    /// Current movement mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// The position walking resets to.
    #[must_use]
    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Run one frame of look, mode toggling, and movement.
    pub fn update(
        &mut self,
        keyboard: &KeyboardState,
        mouse: &MouseState,
        query: &TerrainQuery,
        dt: f32,
        sink: &mut dyn FootstepSink,
    ) {
        let look = mouse.delta();
        if look != glam::Vec2::ZERO {
            self.pose.apply_mouse_delta(look.x, look.y);
        }

        if keyboard.just_pressed(bindings::FLY) && self.mode == CameraMode::Walk {
            self.mode = CameraMode::Fly;
        }
        if keyboard.just_pressed(bindings::WALK) && self.mode == CameraMode::Fly {
            self.mode = CameraMode::Walk;
            // Flying can leave the map, so walking restarts from the spawn.
            self.pose.position = self.spawn;
        }

        let mut speed = BASE_SPEED * dt;
        if keyboard.is_pressed(bindings::RUN) {
            speed *= RUN_MULTIPLIER;
        }

        let (forward, right) = match self.mode {
            CameraMode::Walk => (self.pose.horizontal_front(), self.pose.right()),
            CameraMode::Fly => (self.pose.front(), self.pose.right()),
        };

        let mut direction = Vec3::ZERO;
        if keyboard.is_pressed(bindings::FORWARD) {
            direction += forward;
        }
        if keyboard.is_pressed(bindings::BACKWARD) {
            direction -= forward;
        }
        if keyboard.is_pressed(bindings::RIGHT) {
            direction += right;
        }
        if keyboard.is_pressed(bindings::LEFT) {
            direction -= right;
        }
        direction = direction.normalize_or_zero();

        let mut walked_on = None;
        if direction != Vec3::ZERO {
            match self.mode {
                CameraMode::Fly => {
                    self.pose.position += direction * speed;
                }
                CameraMode::Walk => {
                    // Ground sample at the pre-move position; the clamp
                    // lags the horizontal motion by one frame.
                    let ground = query.sample(self.pose.position);
                    let mut proposed = self.pose.position + direction * speed;
                    if let Some(sample) = ground {
                        proposed.y = sample.height + EYE_HEIGHT;
                    }
                    if !query.is_at_edge(proposed) {
                        self.pose.position = proposed;
                        walked_on = ground.map(|sample| sample.group);
                    }
                }
            }
        }

        match walked_on {
            Some(group) => {
                if self.last_cue != Some(group) {
                    sink.start_cue(group);
                    self.last_cue = Some(group);
                }
            }
            None => {
                if self.last_cue.take().is_some() {
                    sink.stop_cues();
                }
            }
        }
    }
}

/// Start anchor pushed into the map by the spawn offset, at eye height above
/// the ground there. Grids too small to fit the offset spawn at the centre
/// instead.
fn spawn_point(query: &TerrainQuery) -> Vec3 {
    let inset = query.start_anchor() + Vec3::new(SPAWN_OFFSET, 0.0, -SPAWN_OFFSET);
    let spot = if query.is_at_edge(inset) {
        query.center()
    } else {
        inset
    };
    let height = query.sample(spot).map_or(spot.y, |sample| sample.height);
    Vec3::new(spot.x, height + EYE_HEIGHT, spot.z)
}
