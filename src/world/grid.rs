//! Overworld grid
//!
//! The 2D tile map and its noise-driven generation.

use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

use super::noise::NoiseField;
use super::terrain;
use super::tile::Tile;
use super::Position;

/// Noise sampling scale; smaller values produce larger biome regions
const NOISE_SCALE: f64 = 0.1;
/// Shift between the elevation and moisture sampling coordinates so the
/// two fields decorrelate while sharing one noise instance
const MOISTURE_SHIFT: f64 = 1_000.0;
/// Uniform jitter applied to normalized samples to soften biome edges
const FIELD_JITTER: f64 = 0.05;
/// Default square tile size in pixels; a rendering hint only
pub const DEFAULT_TILE_SIZE: i32 = 100;

/// Errors from world construction
#[derive(Debug, Error)]
pub enum WorldError {
    /// The requested grid cannot hold a border ring plus an interior
    #[error("grid dimensions {width}x{height} too small; both sides must be at least 3")]
    InvalidDimensions { width: i32, height: i32 },
}

/// The overworld map
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    /// Rendering hint; no logic in this crate depends on it
    pub tile_size: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Generate a new world. Runs once, to completion, before any
    /// visibility query; the grid never changes afterward.
    pub fn generate(rng: &mut StdRng, width: i32, height: i32) -> Result<Self, WorldError> {
        if width < 3 || height < 3 {
            return Err(WorldError::InvalidDimensions { width, height });
        }

        let field = NoiseField::new(rng);

        // One random translation per world; the moisture field reuses it
        // plus a constant shift
        let offset_x: f64 = rng.gen_range(0.0..256.0);
        let offset_y: f64 = rng.gen_range(0.0..256.0);
        log::debug!("field offsets: ({:.2}, {:.2})", offset_x, offset_y);

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let sx = x as f64 * NOISE_SCALE + offset_x;
                let sy = y as f64 * NOISE_SCALE + offset_y;

                let elevation = jitter(rng, normalize(field.sample(sx, sy)));
                let moisture = jitter(
                    rng,
                    normalize(field.sample(sx + MOISTURE_SHIFT, sy + MOISTURE_SHIFT)),
                );

                let is_border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
                let biome = terrain::classify(rng, elevation, moisture, is_border);
                tiles.push(Tile::new(x, y, biome));
            }
        }

        let grid = Self {
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            tiles,
        };
        log::info!(
            "generated {}x{} world, {} walkable tiles",
            width,
            height,
            grid.walkable_positions().len()
        );
        Ok(grid)
    }

    /// Convert 2D coordinates to the flat tile index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert a flat tile index back to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get the tile at a position; None when out of bounds. Callers
    /// routinely probe past the map edge, so absence is a normal result
    /// rather than an error.
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Check if a position is walkable; out of bounds counts as not
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(false, |t| t.is_walkable())
    }

    /// Iterate over every tile in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All walkable positions (for spawning)
    pub fn walkable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }

    /// First walkable interior tile, scanning row-major from (1, 1)
    pub fn first_walkable(&self) -> Option<Position> {
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                if self.is_walkable(x, y) {
                    return Some(Position::new(x, y));
                }
            }
        }
        None
    }
}

/// Map a noise sample from [-1, 1] to [0, 1]
fn normalize(sample: f64) -> f64 {
    (sample + 1.0) / 2.0
}

/// Perturb a normalized sample to soften hard biome boundaries
fn jitter(rng: &mut impl Rng, value: f64) -> f64 {
    value + rng.gen_range(-FIELD_JITTER..=FIELD_JITTER)
}
