// Prints the top-left corner of the elevation grid for increasing octave
// counts, showing how coarser octaves smooth out the white noise

use terrain_core::{NoiseSettings, noise};

fn main() -> terrain_core::Result<()> {
    for octaves in 1..=5 {
        let settings = NoiseSettings::new(2025u64, 64, 64)
            .with_octaves(octaves)
            .with_persistence(0.5);
        let grid = noise::generate(&settings)?;

        println!("octaves = {octaves}");
        for row in 0..8 {
            for col in 0..8 {
                print!("{:>6.3} ", grid.get(col, row).unwrap_or_default());
            }
            println!();
        }
        println!();
    }
    Ok(())
}
