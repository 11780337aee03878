//! Gradient noise sampling
//!
//! Permutation-table Perlin noise that drives terrain generation.

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Size of the base permutation table
const PERM_SIZE: usize = 256;

/// Corner gradient directions, picked by the low bits of the hash
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, 1.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-1.0, 0.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (0.0, -1.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Deterministic 2D gradient noise field.
///
/// Sampling is a pure function of the coordinates and the permutation
/// table built at construction, so the same instance always returns the
/// same value for the same input.
#[derive(Debug, Clone)]
pub struct NoiseField {
    /// Shuffled 0..=255 doubled to 512 entries, so wrapped neighbor
    /// lookups never need a modulo
    perm: Vec<u8>,
}

impl NoiseField {
    /// Build a field by shuffling the identity table with the given RNG
    pub fn new(rng: &mut StdRng) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(rng);

        let mut perm = table.clone();
        perm.extend_from_slice(&table);
        Self { perm }
    }

    /// Sample the field at (x, y). Returns a value in [-1, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Surrounding unit cell, wrapped to the table size
        let xi = (x.floor() as i64 & (PERM_SIZE as i64 - 1)) as usize;
        let yi = (y.floor() as i64 & (PERM_SIZE as i64 - 1)) as usize;

        // Fractional offsets within the cell
        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        // Hash each corner through the doubled table
        let aa = self.perm[self.perm[xi] as usize + yi] as usize;
        let ab = self.perm[self.perm[xi] as usize + yi + 1] as usize;
        let ba = self.perm[self.perm[xi + 1] as usize + yi] as usize;
        let bb = self.perm[self.perm[xi + 1] as usize + yi + 1] as usize;

        // Influence of each corner gradient on the sample point
        let n00 = grad_dot(aa, xf, yf);
        let n10 = grad_dot(ba, xf - 1.0, yf);
        let n01 = grad_dot(ab, xf, yf - 1.0);
        let n11 = grad_dot(bb, xf - 1.0, yf - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        let value = lerp(nx0, nx1, v);

        // Raw 2D gradient noise stays within +/- sqrt(2)/2; rescale to
        // fill the advertised range
        (value * SQRT_2).clamp(-1.0, 1.0)
    }
}

/// Quintic smoothing curve 6t^5 - 15t^4 + 10t^3
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Dot product of the hashed corner gradient with the offset vector
fn grad_dot(hash: usize, dx: f64, dy: f64) -> f64 {
    let (gx, gy) = GRADIENTS[hash & (GRADIENTS.len() - 1)];
    gx * dx + gy * dy
}
