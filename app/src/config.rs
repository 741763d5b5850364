use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use snoise::SliceSpec;

use crate::cli::{Args, Palette};
use crate::error::AppError;

// Settings shared by every command. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub seed: f64,
    pub frequency: f64,
    pub size: usize,
    pub origin: [f64; 3],
    pub palette: Palette,
    pub output: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: 0.0,
            frequency: 4.0,
            size: 256,
            origin: [0.0, 0.0, 0.0],
            palette: Palette::Gray,
            output: PathBuf::from("simplex3d_slice.png"),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        debug!("loading config from {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    // File (if any) first, then command line flags on top
    pub fn resolve(args: &Args) -> Result<Self, AppError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &Args) -> Result<(), AppError> {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(frequency) = args.frequency {
            self.frequency = frequency;
        }
        if let Some(size) = args.size {
            self.size = size;
        }
        if let Some(origin) = &args.origin {
            self.origin = origin
                .as_slice()
                .try_into()
                .map_err(|_| AppError::InvalidOrigin(origin.len()))?;
        }
        if let Some(palette) = args.palette {
            self.palette = palette;
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        Ok(())
    }

    pub fn slice_spec(&self) -> SliceSpec {
        SliceSpec {
            size: self.size,
            frequency: self.frequency,
            origin: self.origin,
        }
    }
}
