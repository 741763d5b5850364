use log::trace;

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::utils::HeightMap2D;

// Axis-aligned slice at z = origin[2].
// Pixel (x, y) maps to origin + (x / size, y / size) * frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSpec {
    pub size: usize,
    pub frequency: f64,
    pub origin: [f64; 3],
}

impl Default for SliceSpec {
    fn default() -> Self {
        Self {
            size: 256,
            frequency: 4.0,
            origin: [0.0, 0.0, 0.0],
        }
    }
}

// Block of voxels starting at `origin`, `spacing` world units apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSpec {
    pub dims: [usize; 3],
    pub spacing: f64,
    pub origin: [f64; 3],
}

impl VolumeSpec {
    // Flat index of voxel (x, y, z); x varies fastest
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.dims[1] + y) * self.dims[0] + x
    }
}

pub fn sample_slice<N>(generator: &N, spec: &SliceSpec) -> Result<HeightMap2D, NoiseError>
where
    N: NoiseGenerator + ?Sized,
{
    if spec.size == 0 {
        return Err(NoiseError::EmptyGrid);
    }
    trace!("sampling {0}x{0} slice at z={1}", spec.size, spec.origin[2]);

    let size = spec.size as f64;
    let map = (0..spec.size)
        .map(|y| {
            (0..spec.size)
                .map(|x| {
                    let wx = spec.origin[0] + x as f64 / size * spec.frequency;
                    let wy = spec.origin[1] + y as f64 / size * spec.frequency;
                    generator.get3(wx, wy, spec.origin[2]) as f32
                })
                .collect()
        })
        .collect();
    Ok(map)
}

pub fn sample_volume<N>(generator: &N, spec: &VolumeSpec) -> Result<Vec<f32>, NoiseError>
where
    N: NoiseGenerator + ?Sized,
{
    let [nx, ny, nz] = spec.dims;
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(NoiseError::EmptyGrid);
    }
    trace!("sampling {}x{}x{} volume", nx, ny, nz);

    let mut data = Vec::with_capacity(nx * ny * nz);
    for z in 0..nz {
        let wz = spec.origin[2] + z as f64 * spec.spacing;
        for y in 0..ny {
            let wy = spec.origin[1] + y as f64 * spec.spacing;
            for x in 0..nx {
                let wx = spec.origin[0] + x as f64 * spec.spacing;
                data.push(generator.get3(wx, wy, wz) as f32);
            }
        }
    }
    Ok(data)
}
