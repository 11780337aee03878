//! Player model
//!
//! Attribute rolling, spawning, and grid-validated movement.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::world::{Grid, Position};

/// Total attribute points across the four stats
const STAT_POINTS: i32 = 8;
/// Highest value any single stat may reach
const STAT_CAP: i32 = 3;
/// Sight radius before the intelligence bonus
const BASE_SIGHT_RADIUS: f64 = 1.0;

/// The four core attributes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub charisma: i32,
}

impl Stats {
    /// Roll a stat block: each attribute in 1..=3, total exactly 8.
    /// Starts from the all-ones floor and distributes the remaining
    /// points one at a time.
    pub fn roll(rng: &mut impl Rng) -> Self {
        let mut values = [1; 4];
        let mut points_left = STAT_POINTS - values.len() as i32;

        while points_left > 0 {
            let idx = rng.gen_range(0..values.len());
            if values[idx] < STAT_CAP {
                values[idx] += 1;
                points_left -= 1;
            }
        }

        Self {
            strength: values[0],
            agility: values[1],
            intelligence: values[2],
            charisma: values[3],
        }
    }

    pub fn total(&self) -> i32 {
        self.strength + self.agility + self.intelligence + self.charisma
    }
}

/// The player's position and attributes
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Position,
    pub stats: Stats,
}

impl Player {
    pub fn new(pos: Position, stats: Stats) -> Self {
        Self { pos, stats }
    }

    /// Spawn on the first walkable interior tile with freshly rolled
    /// stats. None only when the map has no walkable interior.
    pub fn spawn(grid: &Grid, rng: &mut impl Rng) -> Option<Self> {
        let pos = grid.first_walkable()?;
        Some(Self::new(pos, Stats::roll(rng)))
    }

    /// How far the player can see, derived from intelligence
    pub fn sight_radius(&self) -> f64 {
        BASE_SIGHT_RADIUS + self.stats.intelligence as f64
    }

    /// Try to step by (dx, dy). Returns false when the target tile is
    /// missing or impassable; the position is unchanged on failure.
    pub fn step(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        let nx = self.pos.x + dx;
        let ny = self.pos.y + dy;

        match grid.get_tile(nx, ny) {
            Some(tile) if !tile.has_tag("impassable") => {
                self.pos = Position::new(nx, ny);
                true
            }
            _ => false,
        }
    }
}
