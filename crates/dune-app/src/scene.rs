//! Scene wiring: terrain, camera, light cycle, and audio in frame order.

use dune_audio::{AudioAssets, AudioEngine, AudioVolumes};
use dune_config::Config;
use dune_input::{KeyboardState, MouseState};
use dune_lighting::{DayNightLight, LightState, LightUniform};
use dune_player::CameraController;
use dune_terrain::{
    ChannelSeeds, Landscape, LandscapeConfig, LandscapeGenerator, TerrainError, TerrainQuery,
};

/// Everything the walkthrough simulates, advanced once per fixed step.
///
/// A renderer is an external collaborator: it reads the mesh, anchors,
/// camera, and light through the accessors and draws them itself.
pub struct SceneState {
    landscape: Landscape,
    controller: CameraController,
    light: DayNightLight,
    light_state: LightState,
    audio: AudioEngine,
}

impl SceneState {
    /// Generate the landscape and wire up camera, light, and audio.
    pub fn new(config: &Config) -> Result<Self, TerrainError> {
        let landscape = LandscapeGenerator::generate(&LandscapeConfig {
            width: config.terrain.width,
            spacing: config.terrain.spacing,
            seeds: config.terrain.seed.map(ChannelSeeds::from_base),
            ..Default::default()
        })?;
        tracing::info!(
            width = landscape.mesh.width,
            grass_anchors = landscape.grass_anchors.len(),
            oasis_anchors = landscape.oasis_anchors.len(),
            "landscape generated"
        );

        let query = TerrainQuery::new(&landscape);
        let mut controller = CameraController::new(&query);
        controller.pose.sensitivity = config.input.mouse_sensitivity;
        controller.pose.invert_y = config.input.invert_y;

        let mut light = DayNightLight::new(query.center().x);
        let light_state = light.update(0.0);

        let audio = AudioEngine::new(
            &AudioAssets::default(),
            AudioVolumes {
                master: config.audio.master_volume,
                ambience: config.audio.ambience_volume,
                footstep: config.audio.footstep_volume,
            },
        );

        Ok(Self {
            landscape,
            controller,
            light,
            light_state,
            audio,
        })
    }

    /// One fixed step: camera against terrain, then the light orbit, then
    /// the ambient crossfade.
    pub fn update(&mut self, dt: f32, elapsed: f32, keyboard: &KeyboardState, mouse: &MouseState) {
        let query = TerrainQuery::new(&self.landscape);
        self.controller
            .update(keyboard, mouse, &query, dt, &mut self.audio);

        self.light_state = self.light.update(elapsed);
        self.audio
            .set_ambient_volumes(self.light_state.day_volume, self.light_state.night_volume);
    }

    /// Generated terrain, vegetation anchors included.
    #[must_use]
    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    /// Camera controller, for view extraction.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.controller
    }

    /// Light values for the current frame.
    #[must_use]
    pub fn light_state(&self) -> &LightState {
        &self.light_state
    }

    /// Current light packed for a uniform buffer upload.
    #[must_use]
    pub fn light_uniform(&self) -> LightUniform {
        LightUniform::from_state(&self.light, &self.light_state)
    }

    /// Sky colour for the frame's clear colour.
    #[must_use]
    pub fn sky_colour(&self) -> glam::Vec3 {
        self.light_state.sky_colour
    }
}
