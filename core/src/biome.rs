use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::rgb_to_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biome {
    Ocean,
    Beach,
    Desert,
    TemperateDesert,
    ScorchedDesert,
    Grassland,
    Shrubland,
    Crag,
    Lake,
    Marsh,
    Plains,
    Forest,
    RainForest,
    Taiga,
    Tundra,
    Snow,
}

// Unclassified points render black
pub const UNCLASSIFIED_COLOR: [u8; 3] = [0, 0, 0];

impl Biome {
    pub const ALL: [Biome; 16] = [
        Biome::Ocean,
        Biome::Beach,
        Biome::Desert,
        Biome::TemperateDesert,
        Biome::ScorchedDesert,
        Biome::Grassland,
        Biome::Shrubland,
        Biome::Crag,
        Biome::Lake,
        Biome::Marsh,
        Biome::Plains,
        Biome::Forest,
        Biome::RainForest,
        Biome::Taiga,
        Biome::Tundra,
        Biome::Snow,
    ];

    pub const fn color(self) -> [u8; 3] {
        match self {
            Biome::Ocean => [0, 0, 140],
            Biome::Beach => [252, 213, 106],
            Biome::Desert => [255, 213, 89],
            Biome::TemperateDesert => [186, 135, 68],
            Biome::ScorchedDesert => [122, 60, 13],
            Biome::Grassland => [100, 142, 4],
            Biome::Shrubland => [123, 188, 49],
            Biome::Crag => [94, 94, 94],
            Biome::Lake => [28, 55, 175],
            Biome::Marsh => [14, 79, 79],
            Biome::Plains => [127, 160, 43],
            Biome::Forest => [25, 117, 22],
            Biome::RainForest => [4, 96, 44],
            Biome::Taiga => [31, 137, 95],
            Biome::Tundra => [19, 221, 188],
            Biome::Snow => [215, 224, 222],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Biome::Ocean => "Ocean",
            Biome::Beach => "Beach",
            Biome::Desert => "Desert",
            Biome::TemperateDesert => "Temperate Desert",
            Biome::ScorchedDesert => "Scorched Desert",
            Biome::Grassland => "Grassland",
            Biome::Shrubland => "Shrubland",
            Biome::Crag => "Crag",
            Biome::Lake => "Lake",
            Biome::Marsh => "Marsh",
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::RainForest => "Rain Forest",
            Biome::Taiga => "Taiga",
            Biome::Tundra => "Tundra",
            Biome::Snow => "Snow",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// RGB color for an optional biome.
pub fn biome_color(biome: Option<Biome>) -> [u8; 3] {
    biome.map_or(UNCLASSIFIED_COLOR, Biome::color)
}

// Same as `biome_color` with channels in `0..=1`, for vertex colors.
pub fn biome_color_unit(biome: Option<Biome>) -> [f32; 3] {
    rgb_to_unit(biome_color(biome))
}
