//! Terrain classification
//!
//! Maps elevation and moisture samples to biome types.

use rand::Rng;

use super::tile::BiomeType;

/// Elevation below this is the lowland band (lake/swamp)
pub const ELEVATION_LOW: f64 = 0.35;
/// Elevation below this (and above the lowland cut) is midland; above
/// it is highland
pub const ELEVATION_HIGH: f64 = 0.70;
/// Lowland moisture above this pools into a lake
pub const LAKE_MOISTURE: f64 = 0.6;
/// Midland moisture below this is desert
pub const DESERT_MOISTURE: f64 = 0.3;
/// Midland moisture below this (and above the desert cut) is plains
pub const PLAINS_MOISTURE: f64 = 0.7;
/// Highland moisture below this is hills
pub const HILLS_MOISTURE: f64 = 0.4;
/// Chance a plains cell hosts a village
pub const VILLAGE_CHANCE: f64 = 0.02;
/// Chance a hills cell hides ruins
pub const RUINS_CHANCE: f64 = 0.05;

/// Classify one cell from its elevation and moisture samples.
///
/// Inputs are expected in roughly [0, 1]; out-of-range values fall
/// through the same thresholds unclamped. The border check wins over
/// everything, then the elevation band, then the moisture sub-band,
/// then the rare-feature roll.
pub fn classify(rng: &mut impl Rng, elevation: f64, moisture: f64, is_border: bool) -> BiomeType {
    if is_border {
        return BiomeType::Border;
    }

    if elevation < ELEVATION_LOW {
        if moisture > LAKE_MOISTURE {
            BiomeType::Lake
        } else {
            BiomeType::Swamp
        }
    } else if elevation < ELEVATION_HIGH {
        if moisture < DESERT_MOISTURE {
            BiomeType::Desert
        } else if moisture < PLAINS_MOISTURE {
            if rng.gen_bool(VILLAGE_CHANCE) {
                BiomeType::Village
            } else {
                BiomeType::Plains
            }
        } else {
            BiomeType::Forest
        }
    } else if moisture < HILLS_MOISTURE {
        if rng.gen_bool(RUINS_CHANCE) {
            BiomeType::Ruins
        } else {
            BiomeType::Hills
        }
    } else {
        BiomeType::Mountain
    }
}
