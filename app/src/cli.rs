use std::path::PathBuf;

use clap::Parser;

/// Generate a biome terrain and write its detail layers as PNG images.
///
/// Flags override values loaded from `--config`.
#[derive(Parser, Debug, Default)]
#[command(name = "terrain", about = "Procedural biome terrain generator")]
pub struct CliArgs {
    /// TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed text; digits alone are read as a numeric seed.
    #[arg(long)]
    pub seed: Option<String>,

    /// Pick a fresh two-word seed instead of the configured one.
    #[arg(long, conflicts_with = "seed")]
    pub new_seed: bool,

    /// Grid columns.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid rows.
    #[arg(long)]
    pub height: Option<u32>,

    /// Square grid size, sets both width and height.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub detail_level: Option<u32>,

    #[arg(long)]
    pub octaves: Option<u32>,

    #[arg(long)]
    pub persistence: Option<f64>,

    /// Vertical mesh scale.
    #[arg(long)]
    pub height_scale: Option<f64>,

    /// Horizontal mesh scale.
    #[arg(long)]
    pub planar_scale: Option<f64>,

    /// Build only the wireframe.
    #[arg(long)]
    pub wireframe_only: bool,

    /// Pixels per grid cell in the detail images.
    #[arg(long, default_value_t = 2.5)]
    pub detail_scale: f64,

    /// Report the cell at COL,ROW and mark it on every detail image.
    #[arg(long, value_parser = parse_cell)]
    pub inspect: Option<(usize, usize)>,

    /// Output directory for images.
    #[arg(long, default_value = "terrain_out")]
    pub out: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected COL,ROW, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid cell index `{v}`: {e}"))
    };
    Ok((parse(col)?, parse(row)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell() {
        assert_eq!(parse_cell("3,4"), Ok((3, 4)));
        assert_eq!(parse_cell(" 10 , 0 "), Ok((10, 0)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn parses_flags() {
        let args = CliArgs::try_parse_from([
            "terrain",
            "--seed",
            "abc",
            "--octaves",
            "3",
            "--inspect",
            "1,2",
        ])
        .unwrap();
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert_eq!(args.octaves, Some(3));
        assert_eq!(args.inspect, Some((1, 2)));
        assert_eq!(args.detail_scale, 2.5);
    }

    #[test]
    fn seed_conflicts_with_new_seed() {
        assert!(CliArgs::try_parse_from(["terrain", "--seed", "a", "--new-seed"]).is_err());
    }

    #[test]
    fn detail_level_conflicts_with_width() {
        assert!(
            CliArgs::try_parse_from(["terrain", "--detail-level", "8", "--width", "4"]).is_err()
        );
    }
}
