// Scan order and octave order both change the output for a given seed

use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::grid::NoiseGrid;
use crate::rng::SeededRng;
use crate::settings::NoiseSettings;
use crate::utils::{clamp, interpolate};

pub struct NoiseGenerator {
    settings: NoiseSettings,
    white_noise: NoiseGrid,
}

impl NoiseGenerator {
    // Validates `settings` and draws the white-noise base grid.
    pub fn new(settings: &NoiseSettings) -> Result<Self> {
        settings.validate()?;
        let white_noise = white_noise(settings);
        Ok(Self {
            settings: settings.clone(),
            white_noise,
        })
    }

    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    pub fn white_noise(&self) -> &NoiseGrid {
        &self.white_noise
    }

    // White noise blended between anchors spaced `2^octave` cells apart.
    pub fn smooth_noise(&self, octave: u32) -> NoiseGrid {
        let (width, height) = self.white_noise.dimensions();
        // Beyond the word size every cell shares anchor 0
        let period = 1usize.checked_shl(octave).unwrap_or(usize::MAX);
        let frequency = 1.0 / period as f64;
        let base = &self.white_noise;

        let mut smooth = NoiseGrid::filled(width, height, 0.0);
        for x in 0..width {
            // Horizontal anchors, wrapping by width
            let hor1 = (x / period) * period;
            let hor2 = (hor1 + period % width) % width;
            let horizontal_blend = (x - hor1) as f64 * frequency;

            for y in 0..height {
                let vert1 = (y / period) * period;
                let vert2 = (vert1 + period % height) % height;
                let vertical_blend = (y - vert1) as f64 * frequency;

                let top = interpolate(base.at(hor1, vert1), base.at(hor2, vert1), horizontal_blend);
                let bottom =
                    interpolate(base.at(hor1, vert2), base.at(hor2, vert2), horizontal_blend);

                *smooth.at_mut(x, y) = interpolate(top, bottom, vertical_blend);
            }
        }
        smooth
    }

    // Coarsest octave first; each smoothed grid is folded in as soon as it is built
    pub fn generate(&self) -> NoiseGrid {
        let started = Instant::now();
        let (width, height) = self.white_noise.dimensions();
        let octaves = self.settings.octaves;
        let persistence = self.settings.persistence;

        let mut perlin = NoiseGrid::filled(width, height, 0.0);
        let mut amplitude = 1.0;
        let mut total_amplitude = 0.0;

        for k in (0..octaves).rev() {
            let octave = self.smooth_noise(k);
            amplitude *= persistence;
            total_amplitude += amplitude;

            for x in 0..width {
                for y in 0..height {
                    *perlin.at_mut(x, y) += octave.at(x, y) * amplitude;
                }
            }
        }

        // Normalize by total amplitude, clamping away rounding drift
        for x in 0..width {
            for y in 0..height {
                let v = perlin.at_mut(x, y);
                *v = clamp(*v / total_amplitude, 0.0, 1.0);
            }
        }

        debug!(
            seed = %self.settings.seed,
            width,
            height,
            octaves,
            elapsed_us = started.elapsed().as_micros() as u64,
            "generated noise grid"
        );
        perlin
    }
}

// One uniform draw per cell, column-major.
fn white_noise(settings: &NoiseSettings) -> NoiseGrid {
    let (width, height) = settings.dimensions();
    let mut rng = SeededRng::new(&settings.seed);
    NoiseGrid::from_fn(width, height, |_, _| rng.uniform())
}

// Validate `settings` and produce its blended noise grid.
pub fn generate(settings: &NoiseSettings) -> Result<NoiseGrid> {
    Ok(NoiseGenerator::new(settings)?.generate())
}
