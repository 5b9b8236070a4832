//! CLI entrypoint: loads a `.cub` descriptor, decodes its textures, and
//! drives the window until the player quits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use raydoom::decode::{ImageDecoder, XpmDecoder, resolve_relative};
use raydoom::display::MinifbWindow;
use raydoom::driver::{FrameDriver, FrameDriverConfig};
use raydoom::error::RayError;
use raydoom::level;
use raydoom::world::{TextureSet, World};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Path to a `.cub` level descriptor.
    #[arg(value_name = "LEVEL.cub")]
    level: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fatal");
            eprintln!("raydoom: {err}");
            err.exit_code()
        }
    }
}

fn run() -> Result<(), RayError> {
    let opts = Opts::try_parse().map_err(|err| {
        eprintln!("{err}");
        RayError::Usage
    })?;

    let path = &opts.level;
    if path.extension().and_then(|e| e.to_str()) != Some("cub") {
        return Err(RayError::BadExtension(path.display().to_string()));
    }

    info!(path = %path.display(), "loading level");
    let validated = level::load_level(path)?;

    let decoder = XpmDecoder;
    let textures = TextureSet::new(
        decoder.decode(&resolve_relative(path, &validated.tex_no).to_string_lossy())?,
        decoder.decode(&resolve_relative(path, &validated.tex_so).to_string_lossy())?,
        decoder.decode(&resolve_relative(path, &validated.tex_ea).to_string_lossy())?,
        decoder.decode(&resolve_relative(path, &validated.tex_we).to_string_lossy())?,
    )
    .map_err(raydoom::decode::DecodeError::from)?;

    let world = World::build(validated, textures);

    let cfg = FrameDriverConfig::default();
    let mut window = MinifbWindow::new("raydoom", cfg.width, cfg.height, 60)
        .map_err(RayError::Resource)?;

    let mut driver = FrameDriver::new(world, cfg);
    driver.run(&mut window).map_err(RayError::Resource)?;

    Ok(())
}
