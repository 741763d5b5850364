// Fixed permutation of 0..=255 (Ken Perlin's reference ordering).
// It is the only source of pseudo-randomness in the sampler; the seed
// translates the input instead of reshuffling this table.
const SOURCE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

// Duplicated to 512 entries so `index + offset` (offset <= 255) never
// needs a second wrap.
const fn build_perm() -> [u8; 512] {
    let mut perm = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        perm[i] = SOURCE[i & 255];
        i += 1;
    }
    perm
}

pub static PERM: [u8; 512] = build_perm();

// Wrap a lattice coordinate into [0, 256) regardless of sign
#[inline]
pub fn wrap(v: i64) -> usize {
    v.rem_euclid(256) as usize
}

// Hash any integer to [0, 255]
#[inline]
pub fn hash(i: i64) -> u8 {
    PERM[wrap(i)]
}

// Nested lookup for a 3D lattice point.
// Callers pass wrapped bases plus a 0/1 step, so every argument is <= 256
// and each intermediate index stays below 512.
#[inline]
pub fn hash3(i: usize, j: usize, k: usize) -> u8 {
    PERM[i + PERM[j + PERM[k] as usize] as usize]
}

#[cfg(test)]
mod tests {
    use super::{PERM, hash, hash3, wrap};

    #[test]
    fn perm_second_half_duplicates_first() {
        for i in 0..256 {
            assert_eq!(PERM[i], PERM[i + 256], "mismatch at {}", i);
        }
    }

    #[test]
    fn perm_first_half_is_bijection() {
        let mut seen = [false; 256];
        for &v in &PERM[..256] {
            assert!(!seen[v as usize], "value {} repeated", v);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn wrap_handles_negative_coordinates() {
        assert_eq!(wrap(0), 0);
        assert_eq!(wrap(255), 255);
        assert_eq!(wrap(256), 0);
        assert_eq!(wrap(-1), 255);
        assert_eq!(wrap(-256), 0);
        assert_eq!(wrap(3_000_000_000), 3_000_000_000 % 256);
        assert_eq!(wrap(-3_000_000_001), 255);
        assert_eq!(wrap(i64::MIN), 0);
        assert_eq!(wrap(i64::MAX), 255);
    }

    #[test]
    fn hash_is_periodic() {
        for i in -600..600 {
            assert_eq!(hash(i), hash(i + 256));
        }
        assert_eq!(hash(0), 151);
        assert_eq!(hash(-1), 180);
    }

    #[test]
    fn hash3_matches_modular_form() {
        // perm[(i + perm[(j + perm[k % 256]) % 256]) % 256] on the first half only
        let modular = |i: usize, j: usize, k: usize| {
            let inner = PERM[k % 256] as usize;
            let mid = PERM[(j + inner) % 256] as usize;
            PERM[(i + mid) % 256]
        };
        for i in (0..=256).step_by(7) {
            for j in (0..=256).step_by(11) {
                for k in (0..=256).step_by(13) {
                    assert_eq!(hash3(i, j, k), modular(i, j, k));
                }
            }
        }
        assert_eq!(hash3(256, 256, 256), modular(256, 256, 256));
    }
}
