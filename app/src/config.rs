use std::fs;
use std::path::Path;

use rand::Rng;
use terrain_core::{RenderSettings, Seed, SeedPool};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::error::AppError;

// Read render settings from a TOML file. Missing fields take their defaults.
pub fn load_settings(path: &Path) -> Result<RenderSettings, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str(&contents).map_err(|source| AppError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(settings)
}

fn parse_seed(text: &str) -> Seed {
    match text.parse::<u64>() {
        Ok(n) => Seed::Number(n),
        Err(_) => Seed::Text(text.to_string()),
    }
}

// Apply CLI overrides on top of loaded settings.
pub fn apply_cli_overrides<R: Rng + ?Sized>(
    settings: &mut RenderSettings,
    args: &CliArgs,
    rng: &mut R,
) {
    if let Some(seed) = &args.seed {
        settings.noise.seed = parse_seed(seed);
    }
    if args.new_seed {
        settings.noise.seed = SeedPool::default().next_seed(rng);
        info!(seed = %settings.noise.seed, "picked a new seed");
    }
    if let Some(level) = args.detail_level {
        settings.set_detail_level(level);
    }
    if let Some(w) = args.width {
        settings.noise.width = w;
    }
    if let Some(h) = args.height {
        settings.noise.height = h;
    }
    if let Some(octaves) = args.octaves {
        settings.noise.octaves = octaves;
    }
    if let Some(p) = args.persistence {
        settings.noise.persistence = p;
    }
    if let Some(hs) = args.height_scale {
        settings.scale.height_scale = hs;
    }
    if let Some(ps) = args.planar_scale {
        settings.scale.planar_scale = ps;
    }
    if args.wireframe_only {
        settings.wireframe_only = true;
    }
}

// Settings from the config file (or defaults) with CLI overrides applied.
pub fn resolve_settings<R: Rng + ?Sized>(
    args: &CliArgs,
    rng: &mut R,
) -> Result<RenderSettings, AppError> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => RenderSettings::default(),
    };
    apply_cli_overrides(&mut settings, args, rng);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use terrain_core::settings::DEFAULT_WIDTH;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[noise]\nseed = \"from-file\"\nheight = 20\n\n[scale]\nplanar_scale = 4.0"
        )
        .unwrap();
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.noise.seed, Seed::from("from-file"));
        assert_eq!(settings.noise.height, 20);
        assert_eq!(settings.noise.width, DEFAULT_WIDTH);
        assert_eq!(settings.scale.planar_scale, 4.0);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, AppError::ReadConfig { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[noise\nseed = ").unwrap();
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ParseConfig { .. }));
    }

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[noise]\nseed = \"file\"\noctaves = 2").unwrap();
        let args = CliArgs {
            config: Some(file.path().to_path_buf()),
            seed: Some("cli".into()),
            detail_level: Some(16),
            height_scale: Some(10.0),
            ..CliArgs::default()
        };
        let settings = resolve_settings(&args, &mut rng()).unwrap();
        assert_eq!(settings.noise.seed, Seed::from("cli"));
        assert_eq!(settings.noise.octaves, 2);
        assert_eq!((settings.noise.width, settings.noise.height), (16, 16));
        assert_eq!(settings.scale.height_scale, 10.0);
    }

    #[test]
    fn numeric_seed_text() {
        assert_eq!(parse_seed("42"), Seed::Number(42));
        assert_eq!(parse_seed("forty two"), Seed::from("forty two"));
    }

    #[test]
    fn new_seed_is_two_words() {
        let args = CliArgs {
            new_seed: true,
            ..CliArgs::default()
        };
        let settings = resolve_settings(&args, &mut rng()).unwrap();
        assert_eq!(settings.noise.seed.to_string().split(' ').count(), 2);
    }
}
