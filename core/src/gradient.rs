// 16 gradient directions: the 12 cube-edge midpoints plus 4 repeats
// so the low 4 bits of a hash can index directly.
pub static GRAD3: [[i8; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [-1, 1, 0],
    [0, -1, 1],
    [0, -1, -1],
];

// Dot product of the hashed gradient with (dx, dy, dz)
#[inline]
pub fn grad3(hash: u8, dx: f64, dy: f64, dz: f64) -> f64 {
    let g = GRAD3[(hash & 15) as usize];
    g[0] as f64 * dx + g[1] as f64 * dy + g[2] as f64 * dz
}
