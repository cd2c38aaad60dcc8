// Saves one image per pipeline stage for a 128×128 terrain:
// white noise, each smoothed octave, the blended elevation and the biome map

use std::error::Error;

use terrain_core::detail::{HeatMap, render_biome_map, render_grid};
use terrain_core::{NoiseGenerator, NoiseSettings, TerrainMap, generate_layers};

fn main() -> Result<(), Box<dyn Error>> {
    let settings = NoiseSettings::new("pipeline", 128, 128)
        .with_octaves(6)
        .with_persistence(0.5);
    let heat = HeatMap::default();

    let generator = NoiseGenerator::new(&settings)?;
    render_grid(generator.white_noise(), &heat).save("stage_white_noise.png")?;
    println!("Saved stage_white_noise.png");

    for octave in 0..settings.octaves {
        let filename = format!("stage_octave_{octave}.png");
        render_grid(&generator.smooth_noise(octave), &heat).save(&filename)?;
        println!("Saved {filename}");
    }

    render_grid(&generator.generate(), &heat).save("stage_blended.png")?;
    println!("Saved stage_blended.png");

    let layers = generate_layers(&settings)?;
    let map = TerrainMap::build(layers.elevation, Some(layers.temperature), Some(layers.moisture))?;
    render_biome_map(&map).save("stage_biomes.png")?;
    println!("Saved stage_biomes.png");
    Ok(())
}
