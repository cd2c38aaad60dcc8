// A value equal to a cutoff belongs to the band above it

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::biome::Biome;

pub const ELEVATION_CUTOFFS: [f64; 6] = [0.17, 0.25, 0.4, 0.55, 0.7, 0.9];
pub const TEMPERATURE_CUTOFFS: [f64; 5] = [0.1, 0.4, 0.65, 0.75, 0.9];
pub const MOISTURE_CUTOFFS: [f64; 5] = [0.15, 0.3, 0.55, 0.7, 0.85];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Elevation {
    SeaLevel,
    Low,
    Valley,
    Average,
    Hill,
    Mountain,
    Peak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Temperature {
    Freezing,
    Cold,
    Average,
    Warm,
    Hot,
    Scorched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Moisture {
    Bare,
    Dry,
    Average,
    Moist,
    Humid,
    Wet,
}

// Index of the first cutoff the value falls below, or the top band.
// NaN compares false everywhere and lands in the top band.
#[inline]
fn band_index(value: f64, cutoffs: &[f64]) -> usize {
    cutoffs
        .iter()
        .position(|&cutoff| value < cutoff)
        .unwrap_or(cutoffs.len())
}

impl Elevation {
    pub const ALL: [Elevation; 7] = [
        Elevation::SeaLevel,
        Elevation::Low,
        Elevation::Valley,
        Elevation::Average,
        Elevation::Hill,
        Elevation::Mountain,
        Elevation::Peak,
    ];

    pub fn from_value(e: f64) -> Self {
        Self::ALL[band_index(e, &ELEVATION_CUTOFFS)]
    }
}

impl Temperature {
    pub const ALL: [Temperature; 6] = [
        Temperature::Freezing,
        Temperature::Cold,
        Temperature::Average,
        Temperature::Warm,
        Temperature::Hot,
        Temperature::Scorched,
    ];

    pub fn from_value(t: f64) -> Self {
        Self::ALL[band_index(t, &TEMPERATURE_CUTOFFS)]
    }
}

impl Moisture {
    pub const ALL: [Moisture; 6] = [
        Moisture::Bare,
        Moisture::Dry,
        Moisture::Average,
        Moisture::Moist,
        Moisture::Humid,
        Moisture::Wet,
    ];

    pub fn from_value(m: f64) -> Self {
        Self::ALL[band_index(m, &MOISTURE_CUTOFFS)]
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Elevation::SeaLevel => "Sea Level",
            Elevation::Low => "Low",
            Elevation::Valley => "Valley",
            Elevation::Average => "Average",
            Elevation::Hill => "Hill",
            Elevation::Mountain => "Mountain",
            Elevation::Peak => "Peak",
        })
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Temperature::Freezing => "Freezing",
            Temperature::Cold => "Cold",
            Temperature::Average => "Average",
            Temperature::Warm => "Warm",
            Temperature::Hot => "Hot",
            Temperature::Scorched => "Scorched",
        })
    }
}

impl fmt::Display for Moisture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Moisture::Bare => "Bare",
            Moisture::Dry => "Dry",
            Moisture::Average => "Average",
            Moisture::Moist => "Moist",
            Moisture::Humid => "Humid",
            Moisture::Wet => "Wet",
        })
    }
}

mod table {
    use crate::biome::Biome;
    use crate::biome::Biome::*;

    type Row = [Biome; 6];

    // Moisture columns: Bare, Dry, Average, Moist, Humid, Wet
    const OCEAN: Row = [Ocean; 6];
    const BEACH: Row = [Beach; 6];
    const TUNDRA: Row = [Tundra; 6];
    const SNOW: Row = [Snow; 6];
    const CRAG_FOREST: Row = [Crag, Crag, Forest, Forest, Forest, Forest];
    const SCORCHED_TEMPERATE: Row = [
        ScorchedDesert,
        ScorchedDesert,
        TemperateDesert,
        TemperateDesert,
        TemperateDesert,
        TemperateDesert,
    ];

    // [elevation][temperature][moisture]
    // Temperature rows: Freezing, Cold, Average, Warm, Hot, Scorched
    pub(super) const BIOMES: [[Row; 6]; 7] = [
        // Sea level
        [OCEAN, OCEAN, OCEAN, OCEAN, OCEAN, OCEAN],
        // Low
        [
            [Tundra, Tundra, Beach, Beach, Beach, Beach],
            [Tundra, Tundra, Beach, Beach, Beach, Beach],
            BEACH,
            BEACH,
            BEACH,
            BEACH,
        ],
        // Valley
        [
            TUNDRA,
            [Tundra, Tundra, Taiga, Taiga, Taiga, Taiga],
            [Desert, Plains, Grassland, RainForest, RainForest, RainForest],
            [Desert, Desert, Forest, RainForest, RainForest, RainForest],
            [ScorchedDesert, Desert, TemperateDesert, Marsh, Marsh, Marsh],
            SCORCHED_TEMPERATE,
        ],
        // Average
        [
            TUNDRA,
            [Tundra, Tundra, Taiga, Snow, Snow, Snow],
            [Desert, Plains, Grassland, Marsh, Marsh, Marsh],
            [Desert, Plains, Grassland, Marsh, Marsh, Marsh],
            [ScorchedDesert, Desert, Grassland, Marsh, Marsh, Marsh],
            SCORCHED_TEMPERATE,
        ],
        // Hill
        [
            [Tundra, Tundra, Tundra, Snow, Snow, Snow],
            [Taiga, Taiga, Snow, Snow, Snow, Snow],
            [Grassland, Grassland, Forest, Forest, Forest, Forest],
            [Desert, Desert, Forest, RainForest, RainForest, RainForest],
            [ScorchedDesert, ScorchedDesert, Forest, RainForest, RainForest, RainForest],
            CRAG_FOREST,
        ],
        // Mountain
        [
            [Tundra, Tundra, Snow, Snow, Snow, Snow],
            [Taiga, Taiga, Snow, Snow, Snow, Snow],
            CRAG_FOREST,
            CRAG_FOREST,
            CRAG_FOREST,
            CRAG_FOREST,
        ],
        // Peak
        [SNOW, SNOW, SNOW, CRAG_FOREST, CRAG_FOREST, CRAG_FOREST],
    ];
}

// Table lookup on already-banded values.
#[inline]
pub fn biome_for_bands(elevation: Elevation, temperature: Temperature, moisture: Moisture) -> Biome {
    table::BIOMES[elevation as usize][temperature as usize][moisture as usize]
}

// Classify a raw elevation / temperature / moisture triple. Total over all
// inputs, including values outside `[0, 1]`.
#[inline]
pub fn classify(elevation: f64, temperature: f64, moisture: f64) -> Biome {
    biome_for_bands(
        Elevation::from_value(elevation),
        Temperature::from_value(temperature),
        Moisture::from_value(moisture),
    )
}
