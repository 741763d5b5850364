//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments. Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "snoise-cli")]
#[command(about = "Sample 3D simplex noise or render slices of it", long_about = None)]
pub struct Args {
    /// TOML file with default settings
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Seed added to every x coordinate
    #[arg(long, allow_negative_numbers = true, global = true)]
    pub seed: Option<f64>,

    /// Slice resolution (width = height)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// World units spanned by the slice
    #[arg(long, global = true)]
    pub frequency: Option<f64>,

    /// Slice origin as x,y,z; z selects the slice depth
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        value_name = "X,Y,Z",
        global = true
    )]
    pub origin: Option<Vec<f64>>,

    /// Color mapping for slice images
    #[arg(long, value_enum, global = true)]
    pub palette: Option<Palette>,

    /// Output image path
    #[arg(long, value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the noise value at one point
    Probe {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Render an axis-aligned slice to PNG
    Slice,
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Gray,
    Terrain,
}
