use std::time::Instant;

use glam::DVec3;
use tracing::debug;

use crate::biome::Biome;
use crate::error::{Result, TerrainError};
use crate::grid::NoiseGrid;
use crate::interpreter::classify;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainPoint {
    // x and z centered on the origin, y is the raw elevation sample
    pub position: DVec3,
    pub biome: Option<Biome>,
}

#[derive(Debug, Clone)]
pub struct TerrainMap {
    width: usize,
    height: usize,
    points: Vec<TerrainPoint>,
    elevation: NoiseGrid,
    temperature: Option<NoiseGrid>,
    moisture: Option<NoiseGrid>,
    highest_point: f64,
    lowest_point: f64,
}

impl TerrainMap {
    // Biomes are assigned only when both climate grids are present
    pub fn build(
        elevation: NoiseGrid,
        temperature: Option<NoiseGrid>,
        moisture: Option<NoiseGrid>,
    ) -> Result<Self> {
        let expected = elevation.dimensions();
        for (layer, grid) in [("temperature", &temperature), ("moisture", &moisture)] {
            if let Some(grid) = grid {
                if grid.dimensions() != expected {
                    return Err(TerrainError::DimensionMismatch {
                        layer,
                        expected,
                        found: grid.dimensions(),
                    });
                }
            }
        }

        Ok(Self::fuse(elevation, temperature, moisture))
    }

    // A map without climate data; every biome is `None`.
    pub fn from_elevation(elevation: NoiseGrid) -> Self {
        Self::fuse(elevation, None, None)
    }

    // Shapes are already known to agree
    fn fuse(
        elevation: NoiseGrid,
        temperature: Option<NoiseGrid>,
        moisture: Option<NoiseGrid>,
    ) -> Self {
        let started = Instant::now();
        let (width, height) = elevation.dimensions();
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;

        let mut points = Vec::with_capacity(width * height);
        let mut highest_point = f64::NEG_INFINITY;
        let mut lowest_point = f64::INFINITY;

        for col in 0..width {
            for row in 0..height {
                let y = elevation.at(col, row);
                let position = DVec3::new(col as f64 - half_w, y, row as f64 - half_h);

                let biome = match (&temperature, &moisture) {
                    (Some(t), Some(m)) => Some(classify(y, t.at(col, row), m.at(col, row))),
                    _ => None,
                };

                highest_point = highest_point.max(y);
                lowest_point = lowest_point.min(y);
                points.push(TerrainPoint { position, biome });
            }
        }

        debug!(
            width,
            height,
            classified = temperature.is_some() && moisture.is_some(),
            lowest_point,
            highest_point,
            elapsed_us = started.elapsed().as_micros() as u64,
            "built terrain map"
        );

        Self {
            width,
            height,
            points,
            elevation,
            temperature,
            moisture,
            highest_point,
            lowest_point,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<&TerrainPoint> {
        if col < self.width && row < self.height {
            Some(&self.points[col * self.height + row])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn at(&self, col: usize, row: usize) -> &TerrainPoint {
        &self.points[col * self.height + row]
    }

    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    pub fn elevation(&self) -> &NoiseGrid {
        &self.elevation
    }

    pub fn temperature(&self) -> Option<&NoiseGrid> {
        self.temperature.as_ref()
    }

    pub fn moisture(&self) -> Option<&NoiseGrid> {
        self.moisture.as_ref()
    }

    // Largest raw elevation, `-inf` for an empty map.
    pub fn highest_point(&self) -> f64 {
        self.highest_point
    }

    // Smallest raw elevation, `+inf` for an empty map.
    pub fn lowest_point(&self) -> f64 {
        self.lowest_point
    }

    pub fn biome_at(&self, col: usize, row: usize) -> Option<Biome> {
        self.get(col, row).and_then(|p| p.biome)
    }

    // Re-run classification for one cell from the stored grids.
    pub fn classify_at(&self, col: usize, row: usize) -> Option<Biome> {
        let e = self.elevation.get(col, row)?;
        let t = self.temperature.as_ref()?.get(col, row)?;
        let m = self.moisture.as_ref()?.get(col, row)?;
        Some(classify(e, t, m))
    }
}
