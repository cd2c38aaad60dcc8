// Wireframe, mesh and center point share one projection

use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};
use tracing::debug;

use crate::biome::biome_color_unit;
use crate::error::{Result, TerrainError};
use crate::settings::ScaleSettings;
use crate::terrain::TerrainMap;

// Local vertex order per quad: (x, y), (x+1, y), (x+1, y+1), (x, y+1)
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

// Row polylines followed by column polylines. Lines never share vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub lines: Vec<Vec<Vec3>>,
}

impl Wireframe {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn point_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }
}

// Indexed triangle list. Each quad owns its four vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

// Interleaved vertex layout for uploading straight into a GPU buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((p, n), c)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: *c,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshOutput {
    pub wireframe: Wireframe,
    // None when only the wireframe was requested
    pub mesh: Option<Mesh>,
    // Projected position of cell (width / 2, height / 2), a camera target
    pub center: Vec3,
}

pub struct MeshGenerator {
    scale: ScaleSettings,
}

impl MeshGenerator {
    // `None` leaves points unscaled.
    pub fn new(scale: Option<ScaleSettings>) -> Result<Self> {
        let scale = scale.unwrap_or(ScaleSettings::IDENTITY);
        scale.validate()?;
        Ok(Self { scale })
    }

    pub fn scale(&self) -> ScaleSettings {
        self.scale
    }

    pub fn build(&self, map: &TerrainMap) -> Result<MeshOutput> {
        let (wireframe, center) = self.wireframe(map)?;
        let mesh = self.mesh(map)?;
        Ok(MeshOutput {
            wireframe,
            mesh: Some(mesh),
            center,
        })
    }

    // Wireframe only, for line-render mode.
    pub fn build_wireframe(&self, map: &TerrainMap) -> Result<MeshOutput> {
        let (wireframe, center) = self.wireframe(map)?;
        Ok(MeshOutput {
            wireframe,
            mesh: None,
            center,
        })
    }

    #[inline]
    fn scale_point(&self, p: DVec3) -> DVec3 {
        DVec3::new(
            p.x * self.scale.planar_scale,
            p.y * self.scale.height_scale,
            p.z * self.scale.planar_scale,
        )
    }

    // Half the scaled elevation range.
    pub fn height_offset(&self, map: &TerrainMap) -> f64 {
        let hs = self.scale.height_scale;
        (map.highest_point() * hs - map.lowest_point() * hs) / 2.0
    }

    #[inline]
    fn project(&self, p: DVec3, height_offset: f64) -> Vec3 {
        let scaled = self.scale_point(p);
        DVec3::new(scaled.x, scaled.y - height_offset, scaled.z).as_vec3()
    }

    fn require_points(map: &TerrainMap) -> Result<()> {
        if map.is_empty() {
            return Err(TerrainError::InvalidDimensions {
                width: map.width(),
                height: map.height(),
            });
        }
        Ok(())
    }

    // Row lines, then column lines, plus the projected center point.
    pub fn wireframe(&self, map: &TerrainMap) -> Result<(Wireframe, Vec3)> {
        Self::require_points(map)?;
        let started = Instant::now();
        let (width, height) = (map.width(), map.height());
        let offset = self.height_offset(map);

        let mut lines = Vec::with_capacity(width + height);
        for row in 0..height {
            lines.push(
                (0..width)
                    .map(|col| self.project(map.at(col, row).position, offset))
                    .collect(),
            );
        }
        for col in 0..width {
            lines.push(
                (0..height)
                    .map(|row| self.project(map.at(col, row).position, offset))
                    .collect(),
            );
        }

        let center = self.project(map.at(width / 2, height / 2).position, offset);

        debug!(
            lines = lines.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "built wireframe"
        );
        Ok((Wireframe { lines }, center))
    }

    // One independently triangulated quad per 2x2 neighborhood.
    // A single row or column produces an empty mesh.
    pub fn mesh(&self, map: &TerrainMap) -> Result<Mesh> {
        Self::require_points(map)?;
        let started = Instant::now();
        let (width, height) = (map.width(), map.height());
        let quads = (width - 1) * (height - 1);
        let vertex_total = quads * 4;
        if u32::try_from(vertex_total).is_err() {
            return Err(TerrainError::InvalidDimensions { width, height });
        }

        let offset = self.height_offset(map);
        let mut mesh = Mesh {
            positions: Vec::with_capacity(vertex_total),
            normals: vec![Vec3::Y; vertex_total],
            colors: Vec::with_capacity(vertex_total),
            indices: Vec::with_capacity(quads * 6),
        };

        for row in 0..height - 1 {
            for col in 0..width - 1 {
                let corners = [
                    map.at(col, row),
                    map.at(col + 1, row),
                    map.at(col + 1, row + 1),
                    map.at(col, row + 1),
                ];

                // Checked against u32 above
                let base = mesh.positions.len() as u32;
                mesh.indices.extend(QUAD_INDICES.iter().map(|i| base + i));

                for point in corners {
                    mesh.positions.push(self.project(point.position, offset));
                    mesh.colors.push(biome_color_unit(point.biome));
                }
            }
        }

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "built mesh"
        );
        Ok(mesh)
    }
}

pub fn build_mesh(map: &TerrainMap, scale: Option<ScaleSettings>) -> Result<MeshOutput> {
    MeshGenerator::new(scale)?.build(map)
}
