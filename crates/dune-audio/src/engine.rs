//! The audio engine: kira manager plus the handles for every looped track.

use std::path::{Path, PathBuf};

use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween};
use thiserror::Error;

use dune_player::FootstepSink;
use dune_terrain::BiomeGroup;

use crate::assets::AudioAssets;

/// Errors raised while bringing the audio backend up.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The platform audio backend could not be created.
    #[error("failed to create audio backend: {0}")]
    Backend(String),
    /// A sound file failed to load or decode.
    #[error("failed to load sound {path}: {message}")]
    Load {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder or IO message.
        message: String,
    },
}

/// Volume knobs applied on top of the per-track levels.
#[derive(Debug, Clone, Copy)]
pub struct AudioVolumes {
    /// Scales everything.
    pub master: f32,
    /// Scales the day/night ambient tracks.
    pub ambience: f32,
    /// Scales the looped surface cues.
    pub footstep: f32,
}

impl Default for AudioVolumes {
    fn default() -> Self {
        Self {
            master: 1.0,
            ambience: 1.0,
            footstep: 1.0,
        }
    }
}

/// Plays the two ambient tracks for the whole session and at most one
/// surface cue at a time.
///
/// Construction never fails: if the backend or the ambient tracks cannot
/// be brought up, the engine is muted and every method is a no-op.
pub struct AudioEngine {
    inner: Option<Inner>,
    volumes: AudioVolumes,
}

struct Inner {
    manager: AudioManager<DefaultBackend>,
    sand: Option<StaticSoundData>,
    grass: Option<StaticSoundData>,
    water: Option<StaticSoundData>,
    day: Option<StaticSoundHandle>,
    night: Option<StaticSoundHandle>,
    active: Option<(BiomeGroup, StaticSoundHandle)>,
}

impl AudioEngine {
    /// Create the backend, load the sounds, and start both ambient tracks
    /// (day at full level, night silent).
    pub fn new(assets: &AudioAssets, volumes: AudioVolumes) -> Self {
        match Inner::create(assets, volumes) {
            Ok(inner) => Self {
                inner: Some(inner),
                volumes,
            },
            Err(err) => {
                tracing::warn!(%err, "audio unavailable, continuing muted");
                Self {
                    inner: None,
                    volumes,
                }
            }
        }
    }

    /// An engine with no backend. Every operation is a no-op.
    #[must_use]
    pub fn muted() -> Self {
        Self {
            inner: None,
            volumes: AudioVolumes::default(),
        }
    }

    /// Whether the engine came up without a backend.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.inner.is_none()
    }

    /// The surface cue currently looping, if any.
    #[must_use]
    pub fn active_cue(&self) -> Option<BiomeGroup> {
        self.inner
            .as_ref()
            .and_then(|inner| inner.active.as_ref().map(|(group, _)| *group))
    }

    /// Apply the light cycle's crossfade levels to the ambient tracks.
    pub fn set_ambient_volumes(&mut self, day: f32, night: f32) {
        let Some(inner) = &mut self.inner else {
            return;
        };
        let scale = self.volumes.master * self.volumes.ambience;
        if let Some(handle) = &mut inner.day {
            handle.set_volume(amplitude_to_db(day * scale), Tween::default());
        }
        if let Some(handle) = &mut inner.night {
            handle.set_volume(amplitude_to_db(night * scale), Tween::default());
        }
    }
}

impl FootstepSink for AudioEngine {
    fn start_cue(&mut self, group: BiomeGroup) {
        let Some(inner) = &mut self.inner else {
            return;
        };
        if inner.active.as_ref().map(|(active, _)| *active) == Some(group) {
            return;
        }
        if let Some((_, mut handle)) = inner.active.take() {
            handle.stop(Tween::default());
        }
        let Some(data) = inner.cue_data(group).cloned() else {
            return;
        };
        let level = amplitude_to_db(self.volumes.master * self.volumes.footstep);
        match inner.manager.play(data.loop_region(0.0..).volume(level)) {
            Ok(handle) => inner.active = Some((group, handle)),
            Err(err) => tracing::warn!(%err, ?group, "failed to play surface cue"),
        }
    }

    fn stop_cues(&mut self) {
        let Some(inner) = &mut self.inner else {
            return;
        };
        if let Some((_, mut handle)) = inner.active.take() {
            handle.stop(Tween::default());
        }
    }
}

impl Inner {
    fn create(assets: &AudioAssets, volumes: AudioVolumes) -> Result<Self, AudioError> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|err| AudioError::Backend(format!("{err}")))?;

        let sand = load_sound(&assets.sand_cue);
        let grass = load_sound(&assets.grass_cue);
        let water = load_sound(&assets.water_cue);

        let scale = volumes.master * volumes.ambience;
        let day = load_sound(&assets.day_ambience).and_then(|data| {
            start_ambient(&mut manager, data, amplitude_to_db(scale))
        });
        let night = load_sound(&assets.night_ambience).and_then(|data| {
            start_ambient(&mut manager, data, Decibels::SILENCE)
        });

        Ok(Self {
            manager,
            sand,
            grass,
            water,
            day,
            night,
            active: None,
        })
    }

    fn cue_data(&self, group: BiomeGroup) -> Option<&StaticSoundData> {
        match group {
            BiomeGroup::Sand => self.sand.as_ref(),
            BiomeGroup::Grass => self.grass.as_ref(),
            BiomeGroup::Water => self.water.as_ref(),
        }
    }
}

/// Load one sound file, logging and skipping on failure so a missing asset
/// never takes the whole engine down.
fn load_sound(path: &Path) -> Option<StaticSoundData> {
    match StaticSoundData::from_file(path) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load sound");
            None
        }
    }
}

fn start_ambient(
    manager: &mut AudioManager<DefaultBackend>,
    data: StaticSoundData,
    level: Decibels,
) -> Option<StaticSoundHandle> {
    match manager.play(data.loop_region(0.0..).volume(level)) {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(%err, "failed to start ambient track");
            None
        }
    }
}

/// Linear amplitude to decibels. Zero or negative amplitude maps to silence.
fn amplitude_to_db(amplitude: f32) -> Decibels {
    if amplitude <= 0.0 {
        Decibels::SILENCE
    } else {
        Decibels(20.0 * amplitude.log10())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_conversion() {
        assert_eq!(amplitude_to_db(1.0).0, 0.0);
        assert_eq!(amplitude_to_db(0.0), Decibels::SILENCE);
        assert_eq!(amplitude_to_db(-0.5), Decibels::SILENCE);
        let half = amplitude_to_db(0.5).0;
        assert!((half + 6.0206).abs() < 1e-3, "half amplitude is about -6 dB, got {half}");
    }

    #[test]
    fn test_muted_engine_accepts_every_operation() {
        let mut engine = AudioEngine::muted();
        assert!(engine.is_muted());
        engine.set_ambient_volumes(1.0, 0.0);
        engine.start_cue(BiomeGroup::Grass);
        engine.stop_cues();
        assert_eq!(engine.active_cue(), None);
    }

    #[test]
    fn test_default_volumes_are_unity() {
        let volumes = AudioVolumes::default();
        assert_eq!(volumes.master, 1.0);
        assert_eq!(volumes.ambience, 1.0);
        assert_eq!(volumes.footstep, 1.0);
    }
}
