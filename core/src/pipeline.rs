use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use crate::error::{Result, TerrainError};
use crate::grid::NoiseGrid;
use crate::mesh::{MeshGenerator, MeshOutput};
use crate::noise;
use crate::settings::{NoiseSettings, RenderSettings, Seed};
use crate::terrain::TerrainMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Elevation,
    Temperature,
    Moisture,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Elevation, Layer::Temperature, Layer::Moisture];

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Elevation => "elevation",
            Layer::Temperature => "temperature",
            Layer::Moisture => "moisture",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl NoiseSettings {
    // Copy of these settings with the seed `"<layer>-<seed>"`.
    pub fn for_layer(&self, layer: Layer) -> NoiseSettings {
        NoiseSettings {
            seed: Seed::Text(format!("{}-{}", layer.name(), self.seed)),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoiseLayers {
    pub elevation: NoiseGrid,
    pub temperature: NoiseGrid,
    pub moisture: NoiseGrid,
}

pub fn generate_layers(settings: &NoiseSettings) -> Result<NoiseLayers> {
    settings.validate()?;
    Ok(NoiseLayers {
        elevation: noise::generate(&settings.for_layer(Layer::Elevation))?,
        temperature: noise::generate(&settings.for_layer(Layer::Temperature))?,
        moisture: noise::generate(&settings.for_layer(Layer::Moisture))?,
    })
}

// Classified terrain map from one base settings value.
pub fn generate_map(settings: &NoiseSettings) -> Result<TerrainMap> {
    let layers = generate_layers(settings)?;
    TerrainMap::build(
        layers.elevation,
        Some(layers.temperature),
        Some(layers.moisture),
    )
}

#[derive(Debug, Clone)]
pub struct Terrain {
    pub settings: RenderSettings,
    pub map: Arc<TerrainMap>,
    pub output: MeshOutput,
}

fn build_output(settings: &RenderSettings, map: &TerrainMap) -> Result<MeshOutput> {
    let generator = MeshGenerator::new(Some(settings.scale))?;
    if settings.wireframe_only {
        generator.build_wireframe(map)
    } else {
        generator.build(map)
    }
}

fn require_area(settings: &NoiseSettings) -> Result<()> {
    if settings.width == 0 || settings.height == 0 {
        return Err(TerrainError::InvalidDimensions {
            width: settings.width as usize,
            height: settings.height as usize,
        });
    }
    Ok(())
}

// Noise, terrain map and geometry in one synchronous call.
pub fn generate_terrain(settings: &RenderSettings) -> Result<Terrain> {
    settings.validate()?;
    require_area(&settings.noise)?;
    let map = Arc::new(generate_map(&settings.noise)?);
    let output = build_output(settings, &map)?;
    Ok(Terrain {
        settings: settings.clone(),
        map,
        output,
    })
}

// A failed submission leaves the previous terrain in place
#[derive(Debug, Default)]
pub struct TerrainSession {
    current: Option<Terrain>,
}

impl TerrainSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Terrain> {
        self.current.as_ref()
    }

    pub fn submit(&mut self, settings: RenderSettings) -> Result<&Terrain> {
        let started = Instant::now();
        let result = match &self.current {
            Some(prev) if prev.settings.noise == settings.noise => {
                debug!("noise settings unchanged, reusing terrain map");
                settings.validate().and_then(|()| {
                    let output = build_output(&settings, &prev.map)?;
                    Ok(Terrain {
                        map: Arc::clone(&prev.map),
                        settings,
                        output,
                    })
                })
            }
            _ => generate_terrain(&settings),
        };

        match result {
            Ok(terrain) => {
                info!(
                    seed = %terrain.settings.noise.seed,
                    width = terrain.map.width(),
                    height = terrain.map.height(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "terrain generated"
                );
                Ok(&*self.current.insert(terrain))
            }
            Err(err) => {
                warn!(%err, "rejected terrain settings, keeping previous terrain");
                Err(err)
            }
        }
    }
}

pub const DEFAULT_SEED_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

// Hands out two-word seeds such as `"four nine"`.
#[derive(Debug, Clone)]
pub struct SeedPool {
    words: Vec<String>,
}

impl SeedPool {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(TerrainError::InvalidParameter {
                name: "words",
                reason: "seed pool needs at least one word".into(),
            });
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn next_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Seed {
        // Non-empty by construction, the fallback is never taken
        let first = self.words.choose(&mut *rng).map_or("", String::as_str);
        let second = self.words.choose(&mut *rng).map_or("", String::as_str);
        Seed::Text(format!("{first} {second}"))
    }
}

impl Default for SeedPool {
    fn default() -> Self {
        Self {
            words: DEFAULT_SEED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ScaleSettings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small(seed: &str) -> RenderSettings {
        let mut s = RenderSettings::default();
        s.noise = NoiseSettings::new(seed, 12, 10).with_octaves(3);
        s
    }

    #[test]
    fn layer_seeds_are_prefixed() {
        let base = NoiseSettings::new("abc", 4, 4);
        assert_eq!(base.for_layer(Layer::Elevation).seed, Seed::from("elevation-abc"));
        assert_eq!(base.for_layer(Layer::Moisture).seed, Seed::from("moisture-abc"));
        let numeric = NoiseSettings::new(42u64, 4, 4);
        assert_eq!(numeric.for_layer(Layer::Temperature).seed, Seed::from("temperature-42"));
        // The base is left alone
        assert_eq!(base.seed, Seed::from("abc"));
    }

    #[test]
    fn layers_differ_from_each_other() {
        let layers = generate_layers(&NoiseSettings::new("abc", 8, 8).with_octaves(3)).unwrap();
        assert_ne!(layers.elevation, layers.temperature);
        assert_ne!(layers.temperature, layers.moisture);
    }

    #[test]
    fn terrain_is_deterministic() {
        let a = generate_terrain(&small("det")).unwrap();
        let b = generate_terrain(&small("det")).unwrap();
        assert_eq!(a.map.points(), b.map.points());
        assert_eq!(a.output, b.output);
    }

    #[test]
    fn terrain_is_fully_classified() {
        let t = generate_terrain(&small("biomes")).unwrap();
        assert!(t.map.points().iter().all(|p| p.biome.is_some()));
    }

    #[test]
    fn zero_area_rejected() {
        let mut s = small("zero");
        s.noise.width = 0;
        assert!(matches!(
            generate_terrain(&s),
            Err(TerrainError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn session_keeps_previous_on_error() {
        let mut session = TerrainSession::new();
        session.submit(small("good")).unwrap();
        let before = session.current().unwrap().output.clone();

        let mut bad = small("bad");
        bad.noise.persistence = 0.0;
        assert!(session.submit(bad).is_err());

        let current = session.current().unwrap();
        assert_eq!(current.settings.noise.seed, Seed::from("good"));
        assert_eq!(current.output, before);
    }

    #[test]
    fn session_reuses_map_for_render_changes() {
        let mut session = TerrainSession::new();
        let first = Arc::clone(&session.submit(small("reuse")).unwrap().map);

        let mut rescaled = small("reuse");
        rescaled.scale = ScaleSettings::new(10.0, 1.0);
        rescaled.wireframe_only = true;
        let second = session.submit(rescaled).unwrap();
        assert!(Arc::ptr_eq(&first, &second.map));
        assert!(second.output.mesh.is_none());

        let third = session.submit(small("other")).unwrap();
        assert!(!Arc::ptr_eq(&first, &third.map));
    }

    #[test]
    fn session_rejects_bad_scale_even_when_reusing() {
        let mut session = TerrainSession::new();
        session.submit(small("scale")).unwrap();
        let mut bad = small("scale");
        bad.scale = ScaleSettings::new(-1.0, 1.0);
        assert!(session.submit(bad).is_err());
        assert_eq!(session.current().unwrap().settings.scale, ScaleSettings::default());
    }

    #[test]
    fn seed_pool_pairs_words() {
        let pool = SeedPool::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let seed = pool.next_seed(&mut rng).to_string();
        let words: Vec<&str> = seed.split(' ').collect();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| DEFAULT_SEED_WORDS.contains(w)));
    }

    #[test]
    fn empty_seed_pool_rejected() {
        assert!(SeedPool::new(Vec::<String>::new()).is_err());
        let pool = SeedPool::new(["solo"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(pool.next_seed(&mut rng), Seed::from("solo solo"));
    }
}
