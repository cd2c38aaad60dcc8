mod cli;
mod config;
mod error;

use std::fs;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use image::RgbImage;
use terrain_core::detail::{
    Crosshair, HeatMap, draw_crosshair, inspect, render_biome_map, render_heat_map,
};
use terrain_core::{NoiseGrid, Terrain, TerrainSession};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;
use crate::config::resolve_settings;
use crate::error::AppError;

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

// Canvas size for a grid at `scale` pixels per cell, at least one pixel
fn canvas_size(grid: &NoiseGrid, scale: f64) -> (u32, u32) {
    let side = |cells: usize| ((cells as f64 * scale).round() as u32).max(1);
    (side(grid.width()), side(grid.height()))
}

fn save(img: &RgbImage, path: &Path) -> Result<(), AppError> {
    img.save(path).map_err(|source| AppError::SaveImage {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {}", path.display());
    Ok(())
}

fn write_detail_layers(terrain: &Terrain, args: &CliArgs) -> Result<(), AppError> {
    fs::create_dir_all(&args.out).map_err(|source| AppError::OutputDir {
        path: args.out.clone(),
        source,
    })?;

    let map = &terrain.map;
    let heat = HeatMap::default();
    let crosshair = Crosshair::default();
    let scale = args.detail_scale.max(f64::MIN_POSITIVE);

    let layers = [
        ("elevation", Some(map.elevation())),
        ("temperature", map.temperature()),
        ("moisture", map.moisture()),
    ];
    for (name, grid) in layers {
        let Some(grid) = grid else { continue };
        let mut img = render_heat_map(grid, &heat, canvas_size(grid, scale));
        if let Some((col, row)) = args.inspect {
            let x = (col as f64 * scale).round() as u32;
            let y = (row as f64 * scale).round() as u32;
            draw_crosshair(&mut img, x, y, &crosshair);
        }
        save(&img, &args.out.join(format!("{name}.png")))?;
    }

    let mut biomes = render_biome_map(map);
    if let Some((col, row)) = args.inspect {
        draw_crosshair(&mut biomes, col as u32, row as u32, &crosshair);
    }
    save(&biomes, &args.out.join("biomes.png"))
}

fn report(terrain: &Terrain) {
    let output = &terrain.output;
    info!(
        lines = output.wireframe.line_count(),
        points = output.wireframe.point_count(),
        "wireframe"
    );
    match &output.mesh {
        Some(mesh) => info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "mesh"
        ),
        None => info!("mesh skipped (wireframe only)"),
    }
    info!(
        x = output.center.x,
        y = output.center.y,
        z = output.center.z,
        "camera target"
    );
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let settings = resolve_settings(args, &mut rand::rng())?;
    let start = Instant::now();

    let mut session = TerrainSession::new();
    let terrain = session.submit(settings)?;
    info!(
        "Generated in {:.2} ms (seed {})",
        start.elapsed().as_secs_f64() * 1000.0,
        terrain.settings.noise.seed
    );
    report(terrain);

    if let Some((col, row)) = args.inspect {
        let cell = inspect(&terrain.map, col, row).ok_or(AppError::InspectOutOfRange {
            col,
            row,
            width: terrain.map.width(),
            height: terrain.map.height(),
        })?;
        println!("{cell}");
    }

    write_detail_layers(terrain, args)
}

fn main() {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_core::{NoiseSettings, RenderSettings, generate_terrain};

    fn small_terrain() -> Terrain {
        let mut settings = RenderSettings::default();
        settings.noise = NoiseSettings::new("app", 8, 6).with_octaves(3);
        generate_terrain(&settings).unwrap()
    }

    #[test]
    fn canvas_scales_grid() {
        let grid = NoiseGrid::filled(60, 50, 0.0);
        assert_eq!(canvas_size(&grid, 2.5), (150, 125));
        assert_eq!(canvas_size(&NoiseGrid::filled(0, 0, 0.0), 2.5), (1, 1));
    }

    #[test]
    fn writes_all_detail_layers() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            out: dir.path().join("out"),
            detail_scale: 2.0,
            inspect: Some((1, 1)),
            ..CliArgs::default()
        };
        write_detail_layers(&small_terrain(), &args).unwrap();
        for name in ["elevation", "temperature", "moisture", "biomes"] {
            assert!(args.out.join(format!("{name}.png")).exists(), "{name}.png missing");
        }
        let elevation = image::open(args.out.join("elevation.png")).unwrap();
        assert_eq!((elevation.width(), elevation.height()), (16, 12));
    }

    #[test]
    fn inspect_out_of_range_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            seed: Some("range".into()),
            width: Some(4),
            height: Some(4),
            octaves: Some(2),
            inspect: Some((9, 9)),
            out: dir.path().to_path_buf(),
            detail_scale: 1.0,
            ..CliArgs::default()
        };
        assert!(matches!(run(&args), Err(AppError::InspectOutOfRange { .. })));
    }

    #[test]
    fn invalid_settings_surface_as_terrain_error() {
        let args = CliArgs {
            octaves: Some(0),
            ..CliArgs::default()
        };
        assert!(matches!(run(&args), Err(AppError::Terrain(_))));
    }
}
