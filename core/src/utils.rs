use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

const WATER_THRESHOLD: f32 = 0.3;
const SAND_THRESHOLD: f32 = 0.4;
const GRASS_THRESHOLD: f32 = 0.6;
const ROCK_THRESHOLD: f32 = 0.8;

// 2D slice of samples: row-major Vec<Vec<f32>> of size N×N
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// flatten a 2D map (row-major) into a single Vec<f32>
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Remap raw noise from [-1, 1] to [0, 1], clamping the slight overshoot
pub fn to_unit(map: &mut HeightMap2D) {
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = ((*val + 1.0) * 0.5).clamp(0.0, 1.0);
        }
    }
}

// Grayscale image from a map already in [0, 1]
pub fn to_gray_image(map: &HeightMap2D) -> GrayImage {
    let h = map.len() as u32;
    let w = map.first().map_or(0, |row| row.len()) as u32;
    let mut img = GrayImage::new(w, h);
    for (y, row) in map.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let gray = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img
}

// Color a map in [0, 1] as terrain: water, sand, grass, rock, snow
pub fn to_terrain_image(map: &HeightMap2D) -> RgbImage {
    let gradient = Gradient::with_domain(vec![
        (0.0, LinSrgb::new(0.0, 0.0, 0.5)), // deep water
        (WATER_THRESHOLD, LinSrgb::new(0.0, 0.5, 1.0)), // shallow water
        (SAND_THRESHOLD, LinSrgb::new(0.8, 0.75, 0.55)),
        (GRASS_THRESHOLD, LinSrgb::new(0.15, 0.6, 0.15)),
        (ROCK_THRESHOLD, LinSrgb::new(0.6, 0.6, 0.6)),
        (1.0, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let h = map.len() as u32;
    let w = map.first().map_or(0, |row| row.len()) as u32;
    let mut img = RgbImage::new(w, h);
    for (y, row) in map.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let col: LinSrgb = gradient.get(v.clamp(0.0, 1.0));
            let rgb = col.into_format::<u8>();
            img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }
    img
}
