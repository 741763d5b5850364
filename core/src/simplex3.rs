use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::gradient::grad3;
use crate::perm::{hash3, wrap};

// Skewing/unskewing factors for the 3D simplex lattice
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;
// Squared support radius of each corner's kernel
const RADIUS_SQ: f64 = 0.6;
// Largest raw kernel sum; dividing by it maps the output to roughly [-1, 1]
const NORMALIZER: f64 = 0.030555466710745972;

pub type Step = [usize; 3];

// Intermediate corner steps, keyed by (x0>=y0, y0>=z0, x0>=z0) packed as bits 2..0.
// Keys 1 and 6 are contradictory orderings that ordered offsets never produce;
// they repeat their neighbours.
const CORNER_ORDER: [(Step, Step); 8] = [
    ([0, 0, 1], [0, 1, 1]), // z > y > x
    ([0, 0, 1], [0, 1, 1]),
    ([0, 1, 0], [0, 1, 1]), // y >= z > x
    ([0, 1, 0], [1, 1, 0]), // y > x >= z
    ([0, 0, 1], [1, 0, 1]), // z > x >= y
    ([1, 0, 0], [1, 0, 1]), // x >= z > y
    ([1, 0, 0], [1, 1, 0]),
    ([1, 0, 0], [1, 1, 0]), // x >= y >= z
];

// Pick the two intermediate corners for an offset inside the base cell
#[inline]
pub fn corner_order(x0: f64, y0: f64, z0: f64) -> (Step, Step) {
    let key = (((x0 >= y0) as usize) << 2) | (((y0 >= z0) as usize) << 1) | (x0 >= z0) as usize;
    CORNER_ORDER[key]
}

// One simplex corner: offset from the sample point in real space and
// lattice step from the base cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub offset: [f64; 3],
    pub step: Step,
}

// The tetrahedron containing a sample point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexCell {
    // base lattice cell, wrapped into [0, 256)
    pub base: [usize; 3],
    pub corners: [Corner; 4],
}

impl SimplexCell {
    pub fn locate(x: f64, y: f64, z: f64) -> Self {
        // Skew input space to find the base cell
        let s = (x + y + z) * F3;
        // i64 keeps every finite coordinate below 2^63 on its own cell
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;
        let k = (z + s).floor() as i64;

        // Unskew the cell origin back to real space.
        // Summed as floats so saturated casts from huge inputs cannot overflow.
        let t = (i as f64 + j as f64 + k as f64) * G3;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        let (s1, s2) = corner_order(x0, y0, z0);

        let corners = [
            Corner {
                offset: [x0, y0, z0],
                step: [0, 0, 0],
            },
            Corner {
                offset: [
                    x0 - s1[0] as f64 + G3,
                    y0 - s1[1] as f64 + G3,
                    z0 - s1[2] as f64 + G3,
                ],
                step: s1,
            },
            Corner {
                offset: [
                    x0 - s2[0] as f64 + 2.0 * G3,
                    y0 - s2[1] as f64 + 2.0 * G3,
                    z0 - s2[2] as f64 + 2.0 * G3,
                ],
                step: s2,
            },
            Corner {
                offset: [x0 - 1.0 + 3.0 * G3, y0 - 1.0 + 3.0 * G3, z0 - 1.0 + 3.0 * G3],
                step: [1, 1, 1],
            },
        ];

        Self {
            base: [wrap(i), wrap(j), wrap(k)],
            corners,
        }
    }
}

// Falloff-weighted gradient contribution of one corner.
// Exactly zero outside the corner's support radius.
#[inline]
pub fn contribution(base: [usize; 3], corner: &Corner) -> f64 {
    let [x, y, z] = corner.offset;
    let mut t = RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    t *= t;
    let h = hash3(
        base[0] + corner.step[0],
        base[1] + corner.step[1],
        base[2] + corner.step[2],
    );
    t * t * grad3(h, x, y, z)
}

// Single-octave 3D simplex noise.
//
// The seed is an immutable part of the sampler and only translates the
// x axis. Non-finite coordinates are not rejected; they produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Simplex3D {
    seed: f64,
}

impl Simplex3D {
    pub fn new(seed: f64) -> Result<Self, NoiseError> {
        if !seed.is_finite() {
            return Err(NoiseError::NonFiniteSeed(seed));
        }
        Ok(Self { seed })
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    // Raw sample in roughly [-1, 1]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x + self.seed;
        let cell = SimplexCell::locate(x, y, z);
        let sum: f64 = cell
            .corners
            .iter()
            .map(|corner| contribution(cell.base, corner))
            .sum();
        sum / NORMALIZER
    }

    pub fn sample_point(&self, p: [f64; 3]) -> f64 {
        self.sample(p[0], p[1], p[2])
    }
}

impl NoiseGenerator for Simplex3D {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z)
    }
}
