//! Biome classification from noise samples, per-biome marker weights, and
//! vegetation placement eligibility.

/// Discrete terrain classification for a single grid cell.
///
/// `GrassDesert` and `DesertOasis` are transition bands where the shader
/// blends textures between the neighbouring biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Grassy highland. Vegetation can appear here.
    Grass,
    /// Grass/sand texture transition just below grass level.
    GrassDesert,
    /// The main sand biome.
    Desert,
    /// Winding alternate-sand pathways through the desert.
    DesertPath,
    /// Sand/water transition just above oasis level.
    DesertOasis,
    /// Water at the lowest terrain.
    Oasis,
}

/// Coarse biome grouping used for footstep/ambience audio.
///
/// Decoding a [`Biome`]'s marker weight back into a group is lossy on
/// purpose: the audio layer only distinguishes sand, grass, and water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BiomeGroup {
    /// Desert, desert path, and the sand-side transitions.
    Sand,
    /// Grass and the grass-side transition.
    Grass,
    /// Oasis water.
    Water,
}

impl BiomeGroup {
    /// Decode a vertex biome marker back into its audio group.
    ///
    /// Alpha-set or red-dominant weights are sand-class, green-dominant
    /// weights are grass-class, anything else is water-class.
    pub fn from_weight(weight: [f32; 4]) -> Self {
        let [r, g, b, a] = weight;
        if a > 0.5 {
            BiomeGroup::Sand
        } else if g > r && g > b {
            BiomeGroup::Grass
        } else if r >= b {
            BiomeGroup::Sand
        } else {
            BiomeGroup::Water
        }
    }
}

impl From<Biome> for BiomeGroup {
    fn from(biome: Biome) -> Self {
        match biome {
            Biome::Grass | Biome::GrassDesert => BiomeGroup::Grass,
            Biome::Oasis => BiomeGroup::Water,
            Biome::Desert | Biome::DesertPath | Biome::DesertOasis => BiomeGroup::Sand,
        }
    }
}

/// Classify a grid cell from its terrain-height and path noise samples.
///
/// The rules are tie-break ordered: earlier rules win, and the asymmetric
/// boundaries must be evaluated in exactly this order to reproduce
/// identical biome maps for a given seed.
pub fn classify(terrain_val: f32, path_val: f32) -> Biome {
    if terrain_val >= 0.55 {
        Biome::Grass
    } else if terrain_val >= 0.5 {
        Biome::GrassDesert
    } else if terrain_val <= -0.35 {
        Biome::Oasis
    } else if terrain_val <= -0.3 {
        Biome::DesertOasis
    } else if path_val < 0.2 {
        Biome::DesertPath
    } else {
        Biome::Desert
    }
}

/// Whether a vegetation model should be anchored at a cell.
///
/// Thresholds are tuned so grass vegetation lands on roughly the top 5% of
/// placement-noise samples and oasis-side vegetation on the top 1%; other
/// biomes never place models.
pub fn should_place(biome: Biome, placement_val: f32) -> bool {
    match biome {
        Biome::Grass => placement_val > 0.95,
        Biome::DesertOasis => placement_val > 0.99,
        _ => false,
    }
}

/// The fixed marker weight written to each vertex for a biome.
///
/// The terrain shader interprets these channels as texture blend weights,
/// not as a literal colour.
pub fn biome_weight(biome: Biome) -> [f32; 4] {
    match biome {
        Biome::Grass => [0.0, 1.0, 0.0, 0.0],
        Biome::GrassDesert => [0.5, 1.0, 0.0, 0.0],
        Biome::Oasis => [0.0, 0.0, 1.0, 0.0],
        Biome::DesertOasis => [1.0, 0.0, 0.5, 0.0],
        Biome::DesertPath => [0.0, 0.0, 0.0, 1.0],
        Biome::Desert => [1.0, 0.0, 0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_pinned_samples() {
        assert_eq!(classify(0.6, 0.0), Biome::Grass);
        assert_eq!(classify(0.6, 0.9), Biome::Grass);
        assert_eq!(classify(0.52, 0.0), Biome::GrassDesert);
        assert_eq!(classify(-0.4, 0.0), Biome::Oasis);
        assert_eq!(classify(-0.32, 0.0), Biome::DesertOasis);
        assert_eq!(classify(0.0, 0.1), Biome::DesertPath);
        assert_eq!(classify(0.0, 0.5), Biome::Desert);
    }

    #[test]
    fn test_classify_boundary_values() {
        assert_eq!(classify(0.55, 0.9), Biome::Grass);
        assert_eq!(classify(0.5, 0.9), Biome::GrassDesert);
        assert_eq!(classify(-0.35, 0.0), Biome::Oasis);
        assert_eq!(classify(-0.3, 0.9), Biome::DesertOasis);
        assert_eq!(classify(0.0, 0.2), Biome::Desert);
    }

    #[test]
    fn test_classify_is_total_over_the_domain() {
        // Sweep the whole plausible noise domain; every value must classify.
        for t in -200..=200 {
            for p in 0..=100 {
                let terrain = t as f32 / 100.0;
                let path = p as f32 / 100.0;
                let a = classify(terrain, path);
                let b = classify(terrain, path);
                assert_eq!(a, b, "classification must be deterministic");
            }
        }
    }

    #[test]
    fn test_should_place_pinned_samples() {
        assert!(should_place(Biome::Grass, 0.96));
        assert!(!should_place(Biome::Grass, 0.94));
        assert!(should_place(Biome::DesertOasis, 0.999));
        assert!(!should_place(Biome::DesertOasis, 0.98));
        assert!(!should_place(Biome::Desert, 1.0));
        assert!(!should_place(Biome::Oasis, 1.0));
        assert!(!should_place(Biome::DesertPath, 1.0));
    }

    #[test]
    fn test_weight_round_trips_to_coarse_group() {
        for biome in [
            Biome::Grass,
            Biome::GrassDesert,
            Biome::Desert,
            Biome::DesertPath,
            Biome::DesertOasis,
            Biome::Oasis,
        ] {
            let group = BiomeGroup::from_weight(biome_weight(biome));
            assert_eq!(group, BiomeGroup::from(biome), "{biome:?}");
        }
    }

    #[test]
    fn test_weights_are_distinct_per_biome() {
        let weights = [
            biome_weight(Biome::Grass),
            biome_weight(Biome::GrassDesert),
            biome_weight(Biome::Desert),
            biome_weight(Biome::DesertPath),
            biome_weight(Biome::DesertOasis),
            biome_weight(Biome::Oasis),
        ];
        for (i, a) in weights.iter().enumerate() {
            for (j, b) in weights.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "weights {i} and {j} collide");
                }
            }
        }
    }
}
