// Detail view images: image x is the grid column, image y the row

use std::fmt;

use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::biome::{Biome, biome_color};
use crate::grid::NoiseGrid;
use crate::interpreter::{Elevation, Moisture, Temperature};
use crate::terrain::TerrainMap;

// Fill for a canvas with no data behind it
const EMPTY_FILL: [u8; 3] = [20, 20, 20];

fn to_linear(rgb: [u8; 3]) -> LinSrgb {
    LinSrgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    )
}

// Two-stop color ramp for painting a `[0, 1]` field.
pub struct HeatMap {
    gradient: Gradient<LinSrgb>,
}

impl HeatMap {
    pub fn new(low: [u8; 3], high: [u8; 3]) -> Self {
        Self {
            gradient: Gradient::with_domain(vec![(0.0, to_linear(low)), (1.0, to_linear(high))]),
        }
    }

    pub fn color(&self, value: f64) -> [u8; 3] {
        let c = self.gradient.get(value.clamp(0.0, 1.0) as f32).into_format::<u8>();
        [c.red, c.green, c.blue]
    }
}

impl Default for HeatMap {
    // black to white
    fn default() -> Self {
        Self::new([0, 0, 0], [255, 255, 255])
    }
}

// Map a canvas pixel to the nearest grid cell, `None` for an empty grid.
pub fn canvas_point_to_map_point(
    point: (u32, u32),
    canvas: (u32, u32),
    map: (usize, usize),
) -> Option<(usize, usize)> {
    let (map_w, map_h) = map;
    if map_w == 0 || map_h == 0 {
        return None;
    }
    let ratio = |canvas_len: u32, map_len: usize| {
        if canvas_len > 0 {
            map_len as f64 / canvas_len as f64
        } else {
            0.0
        }
    };
    let x = (point.0 as f64 * ratio(canvas.0, map_w)).round() as usize;
    let y = (point.1 as f64 * ratio(canvas.1, map_h)).round() as usize;
    Some((x.min(map_w - 1), y.min(map_h - 1)))
}

fn paint(
    canvas: (u32, u32),
    map: (usize, usize),
    mut color: impl FnMut(usize, usize) -> [u8; 3],
) -> RgbImage {
    let (width, height) = canvas;
    let mut img = RgbImage::from_pixel(width, height, Rgb(EMPTY_FILL));
    for y in 0..height {
        for x in 0..width {
            if let Some((col, row)) = canvas_point_to_map_point((x, y), canvas, map) {
                img.put_pixel(x, y, Rgb(color(col, row)));
            }
        }
    }
    img
}

// Heat map of `grid`, resampled to `canvas` pixels.
pub fn render_heat_map(grid: &NoiseGrid, heat: &HeatMap, canvas: (u32, u32)) -> RgbImage {
    paint(canvas, grid.dimensions(), |col, row| heat.color(grid.at(col, row)))
}

pub fn render_grid(grid: &NoiseGrid, heat: &HeatMap) -> RgbImage {
    let canvas = (grid.width() as u32, grid.height() as u32);
    render_heat_map(grid, heat, canvas)
}

// Biome colors with one pixel per cell. Unclassified cells are black.
pub fn render_biome_map(map: &TerrainMap) -> RgbImage {
    let canvas = (map.width() as u32, map.height() as u32);
    paint(canvas, (map.width(), map.height()), |col, row| {
        biome_color(map.at(col, row).biome)
    })
}

pub struct Crosshair {
    // arm length in pixels on each side of the center
    pub size: u32,
    pub thickness: u32,
    pub color: [u8; 3],
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            size: 5,
            thickness: 1,
            color: [230, 32, 32],
        }
    }
}

// Draw a `+` centered on `(x, y)`, clipped to the image.
pub fn draw_crosshair(img: &mut RgbImage, x: u32, y: u32, crosshair: &Crosshair) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let color = Rgb(crosshair.color);
    let half = crosshair.thickness / 2;
    let x_min = x.saturating_sub(crosshair.size);
    let x_max = x.saturating_add(crosshair.size).min(width - 1);
    let y_min = y.saturating_sub(crosshair.size);
    let y_max = y.saturating_add(crosshair.size).min(height - 1);

    for t in 0..crosshair.thickness.max(1) {
        let row = y.checked_add(t).and_then(|r| r.checked_sub(half)).filter(|r| *r < height);
        let col = x.checked_add(t).and_then(|c| c.checked_sub(half)).filter(|c| *c < width);
        if let Some(row) = row {
            for px in x_min..=x_max {
                img.put_pixel(px, row, color);
            }
        }
        if let Some(col) = col {
            for py in y_min..=y_max {
                img.put_pixel(col, py, color);
            }
        }
    }
}

// Everything the detail view shows for the cell under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    pub col: usize,
    pub row: usize,
    pub elevation: f64,
    pub temperature: Option<f64>,
    pub moisture: Option<f64>,
    pub biome: Option<Biome>,
}

impl CellReport {
    pub fn elevation_band(&self) -> Elevation {
        Elevation::from_value(self.elevation)
    }

    pub fn temperature_band(&self) -> Option<Temperature> {
        self.temperature.map(Temperature::from_value)
    }

    pub fn moisture_band(&self) -> Option<Moisture> {
        self.moisture.map(Moisture::from_value)
    }
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cell ({}, {})", self.col, self.row)?;
        writeln!(f, "elevation: {:.3} ({})", self.elevation, self.elevation_band())?;
        if let (Some(t), Some(band)) = (self.temperature, self.temperature_band()) {
            writeln!(f, "temperature: {t:.3} ({band})")?;
        }
        if let (Some(m), Some(band)) = (self.moisture, self.moisture_band()) {
            writeln!(f, "moisture: {m:.3} ({band})")?;
        }
        match self.biome {
            Some(biome) => write!(f, "biome: {biome}"),
            None => write!(f, "biome: -"),
        }
    }
}

// Raw values and classification at `(col, row)`.
pub fn inspect(map: &TerrainMap, col: usize, row: usize) -> Option<CellReport> {
    let point = map.get(col, row)?;
    Some(CellReport {
        col,
        row,
        elevation: point.position.y,
        temperature: map.temperature().and_then(|g| g.get(col, row)),
        moisture: map.moisture().and_then(|g| g.get(col, row)),
        biome: point.biome,
    })
}
