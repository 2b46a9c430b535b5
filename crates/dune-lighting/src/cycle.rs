//! The orbit itself and the segment interpolation between cardinal states.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};

/// Angular rate of the light orbit in radians per second of elapsed time.
pub const ORBIT_RATE: f32 = 0.25;

/// Extra orbit radius beyond the terrain half-width, so the light source
/// never clips the terrain edge.
pub const ORBIT_MARGIN: f32 = 8.0;

/// The four cardinal times of day, in orbit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinal {
    /// Light directly overhead.
    Midday,
    /// Light at the horizon on the -x side.
    Sunset,
    /// Light directly below.
    Midnight,
    /// Light at the horizon on the +x side.
    Sunrise,
}

impl Cardinal {
    const ORDER: [Cardinal; 4] = [
        Cardinal::Midday,
        Cardinal::Sunset,
        Cardinal::Midnight,
        Cardinal::Sunrise,
    ];

    /// The cardinal following this one along the orbit.
    pub fn next(self) -> Cardinal {
        match self {
            Cardinal::Midday => Cardinal::Sunset,
            Cardinal::Sunset => Cardinal::Midnight,
            Cardinal::Midnight => Cardinal::Sunrise,
            Cardinal::Sunrise => Cardinal::Midday,
        }
    }

    /// Fixed sky (clear-colour) for this time of day.
    pub fn sky_colour(self) -> Vec3 {
        match self {
            Cardinal::Midday => Vec3::new(0.0, 0.6, 1.0),
            Cardinal::Sunset => Vec3::new(1.0, 0.5, 0.0),
            Cardinal::Midnight => Vec3::new(0.0, 0.0, 0.1),
            Cardinal::Sunrise => Vec3::new(0.9, 0.0, 0.2),
        }
    }

    /// Fixed light colour for this time of day.
    pub fn light_colour(self) -> Vec3 {
        match self {
            Cardinal::Midday => Vec3::splat(1.0),
            Cardinal::Sunset => Vec3::new(1.0, 0.8, 0.3),
            Cardinal::Midnight => Vec3::ZERO,
            Cardinal::Sunrise => Vec3::new(1.0, 0.6, 0.0),
        }
    }

    /// Fixed `(day, night)` ambient track volumes for this time of day.
    pub fn ambient_volumes(self) -> (f32, f32) {
        match self {
            Cardinal::Midday => (1.0, 0.0),
            Cardinal::Sunset => (0.5, 0.5),
            Cardinal::Midnight => (0.0, 1.0),
            Cardinal::Sunrise => (0.5, 0.5),
        }
    }
}

/// Light values recomputed from elapsed time every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightState {
    /// Position on the orbit plane (x across the terrain, y up).
    pub position: Vec2,
    /// Current sky colour, fed to the clear-colour.
    pub sky_colour: Vec3,
    /// Current light colour, fed to the terrain and model shaders.
    pub light_colour: Vec3,
    /// Volume of the daytime ambient track.
    pub day_volume: f32,
    /// Volume of the nighttime ambient track.
    pub night_volume: f32,
}

/// Advances the light along its orbit and interpolates between cardinal
/// states.
///
/// Between cardinals, values are scaled by the Euclidean distance travelled
/// from the last visited cardinal toward the next one using the
/// `(dist - rmin) / (rmax - rmin)` form; orbital speed is constant, so this
/// is equivalent to time-based interpolation. Cardinal arrival is detected
/// by orbit phase, not by comparing float positions, so no cardinal can be
/// skipped over at odd frame timings.
#[derive(Clone, Debug)]
pub struct DayNightLight {
    centre_x: f32,
    radius: f32,
    last_cardinal: Cardinal,
}

impl DayNightLight {
    /// Create a cycle orbiting around `centre_x` (the terrain midline).
    pub fn new(centre_x: f32) -> Self {
        Self {
            centre_x,
            radius: centre_x + ORBIT_MARGIN,
            last_cardinal: Cardinal::Midday,
        }
    }

    /// Orbit position at elapsed time `t` (seconds).
    pub fn position(&self, t: f32) -> Vec2 {
        let angle = t * ORBIT_RATE;
        Vec2::new(
            self.centre_x - self.radius * angle.sin(),
            self.radius * angle.cos(),
        )
    }

    /// The fixed orbit position of a cardinal point.
    pub fn cardinal_position(&self, cardinal: Cardinal) -> Vec2 {
        match cardinal {
            Cardinal::Midday => Vec2::new(self.centre_x, self.radius),
            Cardinal::Sunset => Vec2::new(self.centre_x - self.radius, 0.0),
            Cardinal::Midnight => Vec2::new(self.centre_x, -self.radius),
            Cardinal::Sunrise => Vec2::new(self.centre_x + self.radius, 0.0),
        }
    }

    /// The cardinal most recently passed (persists across calls).
    pub fn last_cardinal(&self) -> Cardinal {
        self.last_cardinal
    }

    /// Full world-space light position; the orbit plane sits behind the
    /// terrain midline on z.
    pub fn world_position(&self, state: &LightState) -> Vec3 {
        Vec3::new(state.position.x, state.position.y, -self.centre_x)
    }

    /// Recompute the light state for elapsed time `t` (seconds).
    pub fn update(&mut self, t: f32) -> LightState {
        let phase = (t * ORBIT_RATE).rem_euclid(TAU);
        let quadrant = ((phase / FRAC_PI_2) as usize).min(3);
        let last = Cardinal::ORDER[quadrant];
        self.last_cardinal = last;

        let position = self.position(t);

        if phase % FRAC_PI_2 == 0.0 {
            // Exactly on a cardinal point: snap to its fixed state.
            let (day_volume, night_volume) = last.ambient_volumes();
            return LightState {
                position,
                sky_colour: last.sky_colour(),
                light_colour: last.light_colour(),
                day_volume,
                night_volume,
            };
        }

        let next = last.next();
        let next_pos = self.cardinal_position(next);
        let rmax = self.cardinal_position(last).distance(next_pos);
        let rmin = 0.0;
        let current_dist = position.distance(next_pos);
        // 1.0 at the last cardinal, 0.0 on arrival at the next.
        let factor = (current_dist - rmin) / (rmax - rmin);

        let (last_day, last_night) = last.ambient_volumes();
        let (next_day, next_night) = next.ambient_volumes();

        LightState {
            position,
            sky_colour: lerp_toward(next.sky_colour(), last.sky_colour(), factor),
            light_colour: lerp_toward(next.light_colour(), last.light_colour(), factor),
            day_volume: factor * (last_day - next_day) + next_day,
            night_volume: factor * (last_night - next_night) + next_night,
        }
    }
}

/// `factor * (tmax - tmin) + tmin`, per component.
fn lerp_toward(tmin: Vec3, tmax: Vec3, factor: f32) -> Vec3 {
    Vec3::new(
        factor * (tmax.x - tmin.x) + tmin.x,
        factor * (tmax.y - tmin.y) + tmin.y,
        factor * (tmax.z - tmin.z) + tmin.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTRE: f32 = 25.6;

    /// Elapsed time that lands the orbit phase exactly on `quadrant * 90°`.
    fn time_at_quadrant(quadrant: u32) -> f32 {
        quadrant as f32 * FRAC_PI_2 / ORBIT_RATE
    }

    #[test]
    fn test_initial_position_is_the_midday_cardinal() {
        let mut light = DayNightLight::new(CENTRE);
        let state = light.update(0.0);
        assert_eq!(state.position, light.cardinal_position(Cardinal::Midday));
        assert_eq!(state.sky_colour, Cardinal::Midday.sky_colour());
        assert_eq!(state.light_colour, Cardinal::Midday.light_colour());
        assert_eq!((state.day_volume, state.night_volume), (1.0, 0.0));
    }

    #[test]
    fn test_orbit_radius_clears_the_terrain() {
        let light = DayNightLight::new(CENTRE);
        for quadrant in 0..4 {
            let p = light.position(time_at_quadrant(quadrant));
            assert!(
                (p - Vec2::new(CENTRE, 0.0)).length() > CENTRE + ORBIT_MARGIN - 1e-3,
                "orbit dips inside the terrain at quadrant {quadrant}: {p}"
            );
        }
    }

    #[test]
    fn test_blend_factor_follows_chord_distance() {
        let mut light = DayNightLight::new(CENTRE);
        // Phase 45 degrees, the arc midpoint between midday and sunset.
        let t = FRAC_PI_2 * 0.5 / ORBIT_RATE;
        let state = light.update(t);

        let pos = light.position(t);
        let span = light
            .cardinal_position(Cardinal::Midday)
            .distance(light.cardinal_position(Cardinal::Sunset));
        let factor = pos.distance(light.cardinal_position(Cardinal::Sunset)) / span;
        // Chord distances do not sum to the span, so the arc midpoint sits
        // a little past the chord midpoint.
        assert!((0.5..0.6).contains(&factor), "factor {factor}");

        let sunset = Cardinal::Sunset.sky_colour();
        let expected = sunset + (Cardinal::Midday.sky_colour() - sunset) * factor;
        assert!(
            (state.sky_colour - expected).length() < 1e-5,
            "sky {:?} != expected {expected:?}",
            state.sky_colour
        );

        // Every channel stays between the two cardinal endpoints.
        for axis in 0..3 {
            let value = state.sky_colour[axis];
            let (a, b) = (Cardinal::Midday.sky_colour()[axis], sunset[axis]);
            assert!(value >= a.min(b) - 1e-6 && value <= a.max(b) + 1e-6);
        }

        // Day volume blends 1.0 (midday) toward 0.5 (sunset).
        assert!((state.day_volume - (0.5 + 0.5 * factor)).abs() < 1e-5);
        assert!((state.day_volume + state.night_volume - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_colour_at_half_chord_distance_is_the_mean() {
        let mut light = DayNightLight::new(CENTRE);
        // The phase whose chord distance to sunset is half the full chord:
        // chord(theta) = 2 r sin((PI/2 - theta) / 2), solved for chord =
        // r sqrt(2) / 2.
        let theta = FRAC_PI_2 - 2.0 * (std::f32::consts::SQRT_2 / 4.0).asin();
        let state = light.update(theta / ORBIT_RATE);

        let span = light
            .cardinal_position(Cardinal::Midday)
            .distance(light.cardinal_position(Cardinal::Sunset));
        let factor =
            light.position(theta / ORBIT_RATE).distance(light.cardinal_position(Cardinal::Sunset))
                / span;
        assert!((factor - 0.5).abs() < 1e-4, "factor {factor}");

        let mean = (Cardinal::Midday.sky_colour() + Cardinal::Sunset.sky_colour()) * 0.5;
        assert!(
            (state.sky_colour - mean).length() < 1e-3,
            "sky at half distance {:?} != mean {mean:?}",
            state.sky_colour
        );
        let mean_light =
            (Cardinal::Midday.light_colour() + Cardinal::Sunset.light_colour()) * 0.5;
        assert!((state.light_colour - mean_light).length() < 1e-3);
    }

    #[test]
    fn test_interpolation_approaches_the_next_cardinal() {
        let mut light = DayNightLight::new(CENTRE);
        // Just shy of sunset.
        let t = (FRAC_PI_2 - 0.01) / ORBIT_RATE;
        let state = light.update(t);
        assert!(
            (state.sky_colour - Cardinal::Sunset.sky_colour()).length() < 0.05,
            "sky should be nearly sunset, got {:?}",
            state.sky_colour
        );
        assert_eq!(light.last_cardinal(), Cardinal::Midday);
    }

    #[test]
    fn test_last_cardinal_tracks_the_quadrants() {
        let mut light = DayNightLight::new(CENTRE);
        let expected = [
            Cardinal::Midday,
            Cardinal::Sunset,
            Cardinal::Midnight,
            Cardinal::Sunrise,
        ];
        for (quadrant, &cardinal) in expected.iter().enumerate() {
            // A nudge into the quadrant keeps the phase off the boundary.
            let t = time_at_quadrant(quadrant as u32) + 0.1;
            light.update(t);
            assert_eq!(light.last_cardinal(), cardinal, "quadrant {quadrant}");
        }
    }

    #[test]
    fn test_cycle_wraps_after_a_full_orbit() {
        let mut light = DayNightLight::new(CENTRE);
        let full = TAU / ORBIT_RATE;
        let early = light.update(0.3);
        let late = light.update(full + 0.3);
        assert!((early.sky_colour - late.sky_colour).length() < 1e-3);
        assert!((early.position - late.position).length() < 1e-2);
    }

    #[test]
    fn test_volumes_stay_normalized() {
        let mut light = DayNightLight::new(CENTRE);
        for step in 0..500 {
            let state = light.update(step as f32 * 0.37);
            assert!((0.0..=1.0).contains(&state.day_volume));
            assert!((0.0..=1.0).contains(&state.night_volume));
            assert!(
                (state.day_volume + state.night_volume - 1.0).abs() < 1e-4,
                "tracks should crossfade to a constant sum, got {} + {}",
                state.day_volume,
                state.night_volume
            );
        }
    }
}
