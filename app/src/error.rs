use std::io;
use std::path::PathBuf;

use terrain_core::TerrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    SaveImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cell ({col}, {row}) is outside the {width}x{height} terrain")]
    InspectOutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error(transparent)]
    Terrain(#[from] TerrainError),
}
