use std::io;
use std::path::PathBuf;

use snoise::NoiseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not read config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("origin needs exactly 3 components, got {0}")]
    InvalidOrigin(usize),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
}
