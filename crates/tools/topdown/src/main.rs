//! Topdown CLI - render a top-down height map from a 3D mesh

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use meshmap::{mesh, render, MapConfig};
use std::path::PathBuf;
use std::process;

/// Render a top-down height map image from a mesh file
#[derive(Parser)]
#[command(name = "topdown")]
#[command(about = "Render a top-down height map from a 3D mesh", long_about = None)]
struct Cli {
    /// Output mode
    #[arg(value_enum, ignore_case = true)]
    mode: OutputMode,

    /// Path to the input mesh file (Wavefront OBJ)
    input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Png,
    Svg,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Usage errors exit with code 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = MapConfig::default();

    let points = mesh::load_vertices(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let plan = meshmap::plan_commands(&points, &config)?;

    match cli.mode {
        OutputMode::Svg => {
            let document = render::svg_document(&plan, config.svg_max_size);
            svg::save("topdown.svg", &document).context("failed to write topdown.svg")?;
            println!("Wrote topdown.svg");
        }
        OutputMode::Png => {
            let img = render::raster_image(&plan, config.png_upscale);
            img.save("topdown.png").context("failed to write topdown.png")?;
            println!("Wrote topdown.png");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_modes_parse() {
        let cli = Cli::try_parse_from(["topdown", "png", "model.obj"]).unwrap();
        assert_eq!(cli.mode, OutputMode::Png);

        let cli = Cli::try_parse_from(["topdown", "SVG", "model.obj"]).unwrap();
        assert_eq!(cli.mode, OutputMode::Svg);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(Cli::try_parse_from(["topdown", "bmp", "model.obj"]).is_err());
    }

    #[test]
    fn test_argument_count_is_enforced() {
        assert!(Cli::try_parse_from(["topdown", "png"]).is_err());
        assert!(Cli::try_parse_from(["topdown", "png", "a.obj", "extra"]).is_err());
        assert!(Cli::try_parse_from(["topdown"]).is_err());
    }
}
