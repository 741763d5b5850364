use std::sync::OnceLock;

use log::{debug, warn};

use crate::error::NoiseError;
use crate::simplex3::Simplex3D;

// Process-wide sampler. Fixed once (at startup, or on first use with seed 0)
// and read without locking afterwards, so the seed can never change while
// another thread is sampling.
static GLOBAL: OnceLock<Simplex3D> = OnceLock::new();

// Fix the process-wide seed. Fails if it was already fixed.
pub fn init_global_seed(seed: f64) -> Result<&'static Simplex3D, NoiseError> {
    let sampler = Simplex3D::new(seed)?;
    let mut installed = false;
    let current = GLOBAL.get_or_init(|| {
        installed = true;
        sampler
    });

    if installed {
        debug!("global noise seed set to {}", seed);
        Ok(current)
    } else {
        warn!(
            "ignoring seed {}: global seed already fixed at {}",
            seed,
            current.seed()
        );
        Err(NoiseError::SeedAlreadySet {
            current: current.seed(),
        })
    }
}

// The process-wide sampler; locks in seed 0 if none was configured
pub fn global() -> &'static Simplex3D {
    GLOBAL.get_or_init(Simplex3D::default)
}

// Sample the process-wide sampler at (x, y, z)
pub fn snoise(x: f64, y: f64, z: f64) -> f64 {
    global().sample(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::{global, init_global_seed, snoise};
    use crate::error::NoiseError;
    use crate::simplex3::Simplex3D;

    // Global state is shared by the whole test binary, so all of it is
    // exercised from this single test.
    #[test]
    fn global_seed_is_set_once() {
        assert_eq!(
            init_global_seed(f64::NAN).unwrap_err().to_string(),
            "seed must be a finite number, got NaN"
        );

        let sampler = init_global_seed(42.5).expect("first init succeeds");
        assert_eq!(sampler.seed(), 42.5);
        assert_eq!(global().seed(), 42.5);

        assert_eq!(
            init_global_seed(7.0),
            Err(NoiseError::SeedAlreadySet { current: 42.5 })
        );

        let local = Simplex3D::new(42.5).unwrap();
        assert_eq!(snoise(0.3, -1.2, 8.0), local.sample(0.3, -1.2, 8.0));
        assert_eq!(snoise(0.3, -1.2, 8.0), Simplex3D::default().sample(0.3 + 42.5, -1.2, 8.0));
    }
}
