use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use log::info;
use snoise::utils::{to_gray_image, to_terrain_image, to_unit};
use snoise::{NoiseGenerator, init_global_seed, sample_slice, snoise};

mod cli;
mod config;
mod error;

use cli::{Args, Command, Palette};
use config::CliConfig;
use error::AppError;

fn render_slice<N: NoiseGenerator + ?Sized>(noise: &N, config: &CliConfig) -> Result<(), AppError> {
    let start = Instant::now();
    let spec = config.slice_spec();
    let mut map = sample_slice(noise, &spec)?;
    to_unit(&mut map);

    match config.palette {
        Palette::Gray => to_gray_image(&map).save(&config.output)?,
        Palette::Terrain => to_terrain_image(&map).save(&config.output)?,
    }

    info!(
        "saved {0}x{0} slice at z={1} to {2:?} in {3:.2}ms",
        spec.size,
        spec.origin[2],
        config.output,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = CliConfig::resolve(&args)?;

    // The seed is fixed here, before any sampling starts
    let noise = init_global_seed(config.seed)?;
    info!("seed: {}", noise.seed());

    match args.command {
        Command::Probe { x, y, z } => {
            println!("{}", snoise(x, y, z));
        }
        Command::Slice => render_slice(noise, &config)?,
    }
    Ok(())
}
