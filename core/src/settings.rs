use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

pub const DEFAULT_SEED: &str = "This can be anything!";
pub const DEFAULT_WIDTH: u32 = 60;
pub const DEFAULT_HEIGHT: u32 = 50;
pub const DEFAULT_OCTAVES: u32 = 7;
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_HEIGHT_SCALE: f64 = 200.0;
pub const DEFAULT_PLANAR_SCALE: f64 = 2.5;

// Range used when no seed is supplied
const RANDOM_SEED_RANGE: std::ops::Range<u64> = 1_000_000..1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Seed::Number(rng.random_range(RANDOM_SEED_RANGE))
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Text(DEFAULT_SEED.to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(n) => write!(f, "{n}"),
            Seed::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    pub seed: Seed,
    pub width: u32,
    pub height: u32,
    // number of smoothing octaves, at least 1
    pub octaves: u32,
    // amplitude decay per octave, in (0, 1]
    pub persistence: f64,
}

impl NoiseSettings {
    pub fn new(seed: impl Into<Seed>, width: u32, height: u32) -> Self {
        Self {
            seed: seed.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    // Zero width or height is allowed and yields an empty grid
    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(TerrainError::InvalidParameter {
                name: "octaves",
                reason: format!("must be at least 1, got {}", self.octaves),
            });
        }
        // NaN fails both comparisons and lands here too
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(TerrainError::InvalidParameter {
                name: "persistence",
                reason: format!("must be in (0, 1], got {}", self.persistence),
            });
        }
        Ok(())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

// Mesh-time scaling. Horizontal axes share `planar_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSettings {
    pub height_scale: f64,
    pub planar_scale: f64,
}

impl ScaleSettings {
    pub const IDENTITY: Self = Self {
        height_scale: 1.0,
        planar_scale: 1.0,
    };

    pub fn new(height_scale: f64, planar_scale: f64) -> Self {
        Self {
            height_scale,
            planar_scale,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("height_scale", self.height_scale),
            ("planar_scale", self.planar_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TerrainError::InvalidParameter {
                    name,
                    reason: format!("must be a finite non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            height_scale: DEFAULT_HEIGHT_SCALE,
            planar_scale: DEFAULT_PLANAR_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub noise: NoiseSettings,
    pub scale: ScaleSettings,
    // skip the filled mesh and emit only the wireframe
    pub wireframe_only: bool,
    // read by the camera controller, carried through untouched
    pub auto_rotate: bool,
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        self.noise.validate()?;
        self.scale.validate()
    }

    // The larger of the two grid dimensions.
    pub fn detail_level(&self) -> u32 {
        self.noise.width.max(self.noise.height)
    }

    // Square grid of `level` x `level` cells.
    pub fn set_detail_level(&mut self, level: u32) {
        self.noise.width = level;
        self.noise.height = level;
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            noise: NoiseSettings::default(),
            scale: ScaleSettings::default(),
            wireframe_only: false,
            auto_rotate: true,
        }
    }
}
