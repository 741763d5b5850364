// core holds the 3D simplex noise sampler and the helpers that consume it
pub mod error;
pub mod gradient;
pub mod grid;
pub mod perm;
pub mod seed;
pub mod simplex3;
pub mod utils;

pub use error::NoiseError;
pub use grid::{SliceSpec, VolumeSpec, sample_slice, sample_volume};
pub use seed::{global, init_global_seed, snoise};
pub use simplex3::Simplex3D;
pub use utils::flatten2;

// noise generator that can sample 3D points
pub trait NoiseGenerator {
    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}
