use terrain_core::{
    Biome, Layer, MeshGenerator, NoiseSettings, RenderSettings, ScaleSettings, TerrainError,
    TerrainMap, TerrainSession, classify, generate_layers, generate_terrain,
    noise::{self, NoiseGenerator},
};

fn settings(seed: &str, width: u32, height: u32) -> RenderSettings {
    let mut s = RenderSettings::default();
    s.noise = NoiseSettings::new(seed, width, height)
        .with_octaves(4)
        .with_persistence(0.5);
    s
}

#[test]
fn test_full_pipeline_determinism() {
    let s = settings("determinism", 20, 14);
    let a = generate_terrain(&s).expect("first generation");
    let b = generate_terrain(&s).expect("second generation");

    let bits = |t: &terrain_core::Terrain| -> Vec<u64> {
        t.map.elevation().values().iter().map(|v| v.to_bits()).collect()
    };
    assert_eq!(bits(&a), bits(&b));
    assert_eq!(a.map.points(), b.map.points());
    assert_eq!(a.output, b.output);
}

#[test]
fn test_grid_shape_and_range() {
    let base = NoiseSettings::new("range", 31, 9).with_octaves(6).with_persistence(0.8);
    let layers = generate_layers(&base).unwrap();
    for grid in [&layers.elevation, &layers.temperature, &layers.moisture] {
        assert_eq!(grid.dimensions(), (31, 9));
        assert!(grid.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn test_layers_match_direct_generation() {
    let base = NoiseSettings::new("direct", 8, 8).with_octaves(3);
    let layers = generate_layers(&base).unwrap();
    let moisture = noise::generate(&base.for_layer(Layer::Moisture)).unwrap();
    assert_eq!(layers.moisture, moisture);
    let generator = NoiseGenerator::new(&base.for_layer(Layer::Elevation)).unwrap();
    assert_eq!(layers.elevation, generator.generate());
}

#[test]
fn test_biomes_match_classifier() {
    let t = generate_terrain(&settings("classify", 16, 16)).unwrap();
    let map = &t.map;
    let (temp, moist) = (map.temperature().unwrap(), map.moisture().unwrap());
    for col in 0..map.width() {
        for row in 0..map.height() {
            let e = map.elevation().get(col, row).unwrap();
            let expected = classify(e, temp.get(col, row).unwrap(), moist.get(col, row).unwrap());
            assert_eq!(map.biome_at(col, row), Some(expected));
        }
    }
}

#[test]
fn test_mesh_counts_and_centering() {
    let (w, h) = (12usize, 9usize);
    let mut s = settings("mesh", w as u32, h as u32);
    s.scale = ScaleSettings::new(100.0, 2.0);
    let t = generate_terrain(&s).unwrap();
    let mesh = t.output.mesh.as_ref().unwrap();
    assert_eq!(mesh.vertex_count(), (w - 1) * (h - 1) * 4);
    assert_eq!(mesh.triangle_count(), (w - 1) * (h - 1) * 2);

    // x runs from -W/2 at column 0 up to its maximum at the last column
    let first = t.map.get(0, 0).unwrap().position;
    let last = t.map.get(w - 1, h - 1).unwrap().position;
    assert_eq!(first.x, -(w as f64) / 2.0);
    assert!(t.map.points().iter().all(|p| p.position.x <= last.x));

    let offset = MeshGenerator::new(Some(s.scale)).unwrap().height_offset(&t.map);
    let expected = (t.map.highest_point() * 100.0 - t.map.lowest_point() * 100.0) / 2.0;
    assert_eq!(offset, expected);
}

#[test]
fn test_mismatch_rejection() {
    let e = noise::generate(&NoiseSettings::new("e", 10, 10)).unwrap();
    let t = noise::generate(&NoiseSettings::new("t", 10, 11)).unwrap();
    let m = noise::generate(&NoiseSettings::new("m", 10, 10)).unwrap();
    let err = TerrainMap::build(e, Some(t), Some(m)).unwrap_err();
    assert!(matches!(err, TerrainError::DimensionMismatch { .. }));
}

#[test]
fn test_scenario_seed_change() {
    let s = NoiseSettings::new("abc", 4, 4).with_octaves(2).with_persistence(0.5);
    let first = noise::generate(&s).unwrap();
    let again = noise::generate(&s).unwrap();
    let changed = noise::generate(&s.clone().with_seed("abd")).unwrap();
    assert_eq!(first.dimensions(), (4, 4));
    assert_eq!(first, again);
    assert_ne!(first, changed);
}

#[test]
fn test_session_survives_bad_submission() {
    let mut session = TerrainSession::new();
    session.submit(settings("session", 10, 10)).unwrap();

    let mut bad = settings("session-bad", 10, 10);
    bad.noise.octaves = 0;
    let err = session.submit(bad).unwrap_err();
    assert!(matches!(err, TerrainError::InvalidParameter { name: "octaves", .. }));

    let current = session.current().unwrap();
    assert_eq!(current.settings.noise.seed.to_string(), "session");
    assert!(current.map.points().iter().all(|p| p.biome.is_some()));
}

#[test]
fn test_default_settings_classify_every_cell() {
    let t = generate_terrain(&RenderSettings::default()).unwrap();
    assert_eq!((t.map.width(), t.map.height()), (60, 50));
    assert_eq!(t.map.points().len(), 60 * 50);
    assert!(t.map.points().iter().all(|p| p.biome.is_some()));
    // Unreachable through the decision table
    assert!(t.map.points().iter().all(|p| p.biome != Some(Biome::Lake)));
}
