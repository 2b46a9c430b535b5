//! Paths to the sound files the scene plays.

use std::path::PathBuf;

/// File locations for every sound the engine loads at startup.
#[derive(Debug, Clone)]
pub struct AudioAssets {
    /// Looped footstep cue for sand surfaces.
    pub sand_cue: PathBuf,
    /// Looped footstep cue for grass surfaces.
    pub grass_cue: PathBuf,
    /// Looped footstep cue for water surfaces.
    pub water_cue: PathBuf,
    /// Daytime ambient track, looped for the whole session.
    pub day_ambience: PathBuf,
    /// Nighttime ambient track, looped for the whole session.
    pub night_ambience: PathBuf,
}

impl Default for AudioAssets {
    fn default() -> Self {
        Self::in_dir("assets/audio")
    }
}

impl AudioAssets {
    /// Standard file names under an asset directory.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            sand_cue: dir.join("steps-sand.ogg"),
            grass_cue: dir.join("steps-grass.ogg"),
            water_cue: dir.join("steps-water.ogg"),
            day_ambience: dir.join("ambience-day.ogg"),
            night_ambience: dir.join("ambience-night.ogg"),
        }
    }
}
