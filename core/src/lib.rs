// core holds the noise, classification, terrain and mesh stages
pub mod biome;
pub mod detail;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod mesh;
pub mod noise;
pub mod pipeline;
pub mod rng;
pub mod settings;
pub mod terrain;
pub mod utils;

pub use biome::{Biome, biome_color};
pub use error::{Result, TerrainError};
pub use grid::NoiseGrid;
pub use interpreter::classify;
pub use mesh::{Mesh, MeshGenerator, MeshOutput, MeshVertex, Wireframe, build_mesh};
pub use noise::NoiseGenerator;
pub use pipeline::{
    Layer, NoiseLayers, SeedPool, Terrain, TerrainSession, generate_layers, generate_terrain,
};
pub use settings::{NoiseSettings, RenderSettings, ScaleSettings, Seed};
pub use terrain::{TerrainMap, TerrainPoint};
